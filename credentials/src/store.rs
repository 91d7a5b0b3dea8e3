use crate::types::{AccessMode, AccessToken};
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("token file parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Lookup side of the credential store. The store is written by the
/// authorization flow; this service only reads.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Most recently issued offline token for the shop, if any.
    async fn find_offline(&self, shop: &str) -> Result<Option<AccessToken>, StoreError>;
}

fn pick_offline(tokens: Vec<AccessToken>, shop: &str) -> Option<AccessToken> {
    tokens
        .into_iter()
        .filter(|t| t.shop == shop && t.mode == AccessMode::Offline)
        .max_by_key(|t| t.issued_at)
}

/// Token store backed by a JSON array on disk.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileTokenStore { path: path.into() }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn find_offline(&self, shop: &str) -> Result<Option<AccessToken>, StoreError> {
        // Re-read on every lookup: a token removed by the authorization flow
        // must never be served from a stale copy.
        let raw = tokio::fs::read(&self.path).await?;
        let tokens: Vec<AccessToken> = serde_json::from_slice(&raw)?;
        tracing::debug!(shop = %shop, tokens = tokens.len(), "loaded token file");
        Ok(pick_offline(tokens, shop))
    }
}

/// In-memory token store for tests and local development.
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Vec<AccessToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, token: AccessToken) {
        self.tokens.write().expect("token store lock").push(token);
    }

    /// Drops every token for the shop, as the authorization flow does when
    /// the app is uninstalled.
    pub fn revoke(&self, shop: &str) {
        self.tokens
            .write()
            .expect("token store lock")
            .retain(|t| t.shop != shop);
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn find_offline(&self, shop: &str) -> Result<Option<AccessToken>, StoreError> {
        let tokens = self.tokens.read().expect("token store lock").clone();
        Ok(pick_offline(tokens, shop))
    }
}

use crate::store::{StoreError, TokenStore};
use crate::types::AccessToken;
use http::StatusCode;
use std::sync::Arc;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("token store error: {0}")]
    Store(#[from] StoreError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("credential service returned status {0}")]
    UnexpectedStatus(StatusCode),
}

/// Unified credential lookup backed either by an in-process store or by a
/// remote lookup service over HTTP.
#[derive(Clone)]
pub struct Credentials(CredentialsInner);

#[derive(Clone)]
enum CredentialsInner {
    InProcess(Arc<dyn TokenStore>),
    Url(HttpTokenClient),
}

impl Credentials {
    pub fn in_process(store: Arc<dyn TokenStore>) -> Self {
        Credentials(CredentialsInner::InProcess(store))
    }

    pub fn url(url: impl Into<String>) -> Self {
        Credentials(CredentialsInner::Url(HttpTokenClient::new(url.into())))
    }

    /// Most recently issued offline token for the shop, or `None` when the
    /// shop has never authorized the app or has revoked it.
    pub async fn find_offline(&self, shop: &str) -> Result<Option<AccessToken>, ClientError> {
        match &self.0 {
            CredentialsInner::InProcess(store) => Ok(store.find_offline(shop).await?),
            CredentialsInner::Url(client) => client.find_offline(shop).await,
        }
    }
}

#[derive(Clone)]
struct HttpTokenClient {
    client: reqwest::Client,
    url: String,
}

impl HttpTokenClient {
    fn new(url: String) -> Self {
        HttpTokenClient {
            client: reqwest::Client::new(),
            url,
        }
    }

    async fn find_offline(&self, shop: &str) -> Result<Option<AccessToken>, ClientError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("shop", shop)])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(Some(response.json::<AccessToken>().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }
}

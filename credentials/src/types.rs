use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token class issued by the authorization flow. Only offline tokens are
/// usable without an active interactive session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    Offline,
    Online,
}

/// A per-shop admin API token.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub shop: String,
    pub token: String,
    pub mode: AccessMode,
    pub issued_at: DateTime<Utc>,
}

// The token value is a secret and must never end up in logs.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("shop", &self.shop)
            .field("token", &"<redacted>")
            .field("mode", &self.mode)
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

use crate::client::Credentials;
use crate::store::FileTokenStore;
use serde::Deserialize;
use std::sync::Arc;

/// Where offline tokens are looked up.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
#[serde(tag = "type")]
pub enum StoreBackend {
    File { path: String },
    Http { url: String },
}

pub fn connect(backend: StoreBackend) -> Credentials {
    match backend {
        StoreBackend::File { path } => Credentials::in_process(Arc::new(FileTokenStore::new(path))),
        StoreBackend::Http { url } => Credentials::url(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_deserializes_tagged_variants() {
        let file: StoreBackend =
            serde_json::from_str(r#"{"type": "file", "path": "/var/lib/reviewd/tokens.json"}"#)
                .unwrap();
        assert_eq!(
            file,
            StoreBackend::File {
                path: "/var/lib/reviewd/tokens.json".into()
            }
        );

        let http: StoreBackend =
            serde_json::from_str(r#"{"type": "http", "url": "http://tokens.internal"}"#).unwrap();
        assert_eq!(
            http,
            StoreBackend::Http {
                url: "http://tokens.internal".into()
            }
        );
    }
}

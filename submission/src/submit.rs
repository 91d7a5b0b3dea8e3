use crate::errors::RejectReason;
use crate::metrics_defs;
use crate::mutation::GraphQLRequest;
use credentials::types::AccessToken;
use serde::Deserialize;
use std::time::Instant;

/// Header carrying the admin API token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Longest remote body excerpt that makes it into a log line.
const BODY_EXCERPT_LEN: usize = 256;

/// Client for the per-shop admin GraphQL endpoint.
#[derive(Clone)]
pub struct Submitter {
    client: reqwest::Client,
    api_version: String,
    base_url: Option<String>,
}

impl Submitter {
    pub fn new(api_version: impl Into<String>) -> Self {
        Submitter {
            client: reqwest::Client::new(),
            api_version: api_version.into(),
            base_url: None,
        }
    }

    /// Route every call to a fixed base instead of `https://<shop>`. Used by
    /// tests and local development against a stub endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn endpoint(&self, shop: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{base}/admin/api/{}/graphql.json", self.api_version),
            None => format!("https://{shop}/admin/api/{}/graphql.json", self.api_version),
        }
    }

    /// Issue the create mutation for one review. One call, no retries; every
    /// failure is terminal for the submission.
    pub async fn submit(
        &self,
        shop: &str,
        token: &AccessToken,
        request: &GraphQLRequest,
    ) -> Result<String, RejectReason> {
        let started = Instant::now();
        let result = self.send(shop, token, request).await;
        metrics::histogram!(metrics_defs::REMOTE_CALL_DURATION.name)
            .record(started.elapsed().as_secs_f64());
        result
    }

    async fn send(
        &self,
        shop: &str,
        token: &AccessToken,
        request: &GraphQLRequest,
    ) -> Result<String, RejectReason> {
        let response = self
            .client
            .post(self.endpoint(shop))
            .header(ACCESS_TOKEN_HEADER, &token.token)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(shop = %shop, error = %err, "review create request failed");
                RejectReason::Transport
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            tracing::warn!(shop = %shop, error = %err, "failed reading review create response");
            RejectReason::Transport
        })?;

        classify(shop, status, &body)
    }
}

#[derive(Deserialize)]
struct GraphQlEnvelope {
    data: Option<MutationData>,
}

#[derive(Deserialize)]
struct MutationData {
    #[serde(rename = "metaobjectCreate")]
    metaobject_create: Option<MetaobjectCreate>,
}

#[derive(Deserialize)]
struct MetaobjectCreate {
    metaobject: Option<CreatedMetaobject>,
    #[serde(rename = "userErrors", default)]
    user_errors: Vec<UserError>,
}

#[derive(Deserialize)]
struct CreatedMetaobject {
    id: String,
}

#[derive(Deserialize, Debug)]
struct UserError {
    #[serde(default)]
    field: Option<serde_json::Value>,
    message: String,
}

/// Classify a remote response by body shape, not status line: a revoked
/// token or an API error still produces a JSON body, just not a mutation
/// envelope.
fn classify(
    shop: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> Result<String, RejectReason> {
    let envelope: GraphQlEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(
                shop = %shop,
                status = %status,
                error = %err,
                body = excerpt(body),
                "review create response is not JSON"
            );
            return Err(RejectReason::RemoteUnparseable);
        }
    };

    let Some(create) = envelope.data.and_then(|data| data.metaobject_create) else {
        tracing::warn!(
            shop = %shop,
            status = %status,
            body = excerpt(body),
            "review create response missing mutation payload"
        );
        return Err(RejectReason::RemoteUnparseable);
    };

    if !create.user_errors.is_empty() {
        for error in &create.user_errors {
            tracing::warn!(
                shop = %shop,
                field = ?error.field,
                message = %error.message,
                "remote rejected review field"
            );
        }
        return Err(RejectReason::RemoteValidation);
    }

    match create.metaobject {
        Some(metaobject) => Ok(metaobject.id),
        None => {
            tracing::warn!(
                shop = %shop,
                status = %status,
                body = excerpt(body),
                "review create response missing metaobject id"
            );
            Err(RejectReason::RemoteUnparseable)
        }
    }
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::build_review_mutation;
    use crate::types::ValidReview;
    use credentials::types::AccessMode;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn token() -> AccessToken {
        AccessToken {
            shop: "shop.example".into(),
            token: "shpat_test".into(),
            mode: AccessMode::Offline,
            issued_at: chrono::Utc::now(),
        }
    }

    fn request() -> GraphQLRequest {
        let review = ValidReview {
            shop: "shop.example".into(),
            product_gid: "gid://shopify/Product/42".into(),
            rating: 5,
            title: "Great".into(),
            body: "Solid product".into(),
            author: "Ada".into(),
            email: "ada@example.com".into(),
        };
        build_review_mutation(&review, chrono::Utc::now())
    }

    #[test]
    fn endpoint_is_scoped_by_shop_and_version() {
        let submitter = Submitter::new("2024-07");
        assert_eq!(
            submitter.endpoint("shop.example"),
            "https://shop.example/admin/api/2024-07/graphql.json"
        );
    }

    #[test]
    fn excerpt_truncates_long_bodies() {
        let body = "x".repeat(BODY_EXCERPT_LEN + 100);
        assert_eq!(excerpt(&body).len(), BODY_EXCERPT_LEN);
        assert_eq!(excerpt("short"), "short");
    }

    #[tokio::test]
    async fn extracts_created_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/api/2024-07/graphql.json"))
            .and(header(ACCESS_TOKEN_HEADER, "shpat_test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "metaobjectCreate": {
                    "metaobject": { "id": "gid://x/Metaobject/1" },
                    "userErrors": []
                }}
            })))
            .mount(&server)
            .await;

        let submitter = Submitter::new("2024-07").with_base_url(server.uri());
        let id = submitter
            .submit("shop.example", &token(), &request())
            .await
            .unwrap();
        assert_eq!(id, "gid://x/Metaobject/1");
    }

    #[tokio::test]
    async fn user_errors_classify_as_remote_validation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "metaobjectCreate": {
                    "metaobject": null,
                    "userErrors": [{ "field": "rating", "message": "bad" }]
                }}
            })))
            .mount(&server)
            .await;

        let submitter = Submitter::new("2024-07").with_base_url(server.uri());
        let err = submitter
            .submit("shop.example", &token(), &request())
            .await
            .unwrap_err();
        assert_eq!(err, RejectReason::RemoteValidation);
    }

    #[tokio::test]
    async fn non_json_body_classifies_as_unparseable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let submitter = Submitter::new("2024-07").with_base_url(server.uri());
        let err = submitter
            .submit("shop.example", &token(), &request())
            .await
            .unwrap_err();
        assert_eq!(err, RejectReason::RemoteUnparseable);
    }

    #[tokio::test]
    async fn connection_failure_classifies_as_transport() {
        // Nothing listens on port 1.
        let submitter = Submitter::new("2024-07").with_base_url("http://127.0.0.1:1");
        let err = submitter
            .submit("shop.example", &token(), &request())
            .await
            .unwrap_err();
        assert_eq!(err, RejectReason::Transport);
    }

    #[test]
    fn json_without_mutation_payload_is_unparseable() {
        let status = reqwest::StatusCode::UNAUTHORIZED;
        let body = r#"{"errors":"Invalid API key or access token"}"#;
        assert_eq!(
            classify("shop.example", status, body),
            Err(RejectReason::RemoteUnparseable)
        );
    }

    #[test]
    fn missing_id_without_errors_is_unparseable() {
        let status = reqwest::StatusCode::OK;
        let body = r#"{"data":{"metaobjectCreate":{"metaobject":null,"userErrors":[]}}}"#;
        assert_eq!(
            classify("shop.example", status, body),
            Err(RejectReason::RemoteUnparseable)
        );
    }
}

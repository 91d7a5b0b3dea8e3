use crate::form::ReviewForm;
use crate::render;
use crate::signature;
use axum::{
    Form, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::Html,
    routing::{get, post},
};
use std::collections::HashMap;
use std::sync::Arc;
use submission::{ReviewPipeline, outcome};
use tokio::net::TcpListener;

#[derive(thiserror::Error, Debug)]
pub enum StorefrontError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared state for the storefront routes.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ReviewPipeline>,
    /// Application-proxy shared secret. When unset, signature checks are
    /// skipped (development only).
    pub proxy_secret: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // The proxy forwards the storefront form as a POST; a query-string
        // GET is accepted for themes that submit via link.
        .route("/apps/reviews", post(submit_review).get(submit_review))
        .route("/admin", get(admin))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn serve(host: &str, port: u16, state: AppState) -> Result<(), StorefrontError> {
    let app = router(state);
    let listener = TcpListener::bind(format!("{host}:{port}")).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn submit_review(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Form(form): Form<ReviewForm>,
) -> (StatusCode, Html<String>) {
    if let Some(secret) = &state.proxy_secret
        && !signature::verify_proxy_signature(&params, secret)
    {
        tracing::warn!("rejected review submission with bad proxy signature");
        return (
            StatusCode::UNAUTHORIZED,
            Html(render::error_page("Invalid request signature")),
        );
    }

    let submission = form.into_submission(&params, &headers);
    let return_to = submission.return_to.clone();

    let result = state.pipeline.handle(&submission).await;
    let directive = outcome::directive(&result, &return_to);

    // Failures still render as a page: the proxy treats non-2xx responses
    // as a hard error and would hide the message.
    (StatusCode::OK, Html(render::confirmation_page(&directive)))
}

async fn admin() -> Html<String> {
    Html(render::admin_page())
}

async fn health() -> &'static str {
    "ok\n"
}

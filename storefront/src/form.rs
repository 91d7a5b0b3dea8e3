//! Boundary adapter from the loosely-typed storefront form to a typed
//! [`Submission`]. Aliases, defaults and fallbacks are handled once, in
//! this module, and nowhere else.

use axum::http::HeaderMap;
use serde::Deserialize;
use std::collections::HashMap;
use submission::Submission;

/// Header set by the platform proxy with the originating shop domain.
const SHOP_HEADER: &str = "x-shopify-shop-domain";

/// Raw review form fields. Theme templates disagree on the casing of the
/// product field, so both spellings are accepted.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewForm {
    pub shop: Option<String>,
    #[serde(alias = "productId")]
    pub product_id: Option<String>,
    pub rating: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub return_to: Option<String>,
}

impl ReviewForm {
    /// Resolve the form into a submission. The shop domain falls back from
    /// the form field to the query string to the proxy header; absent text
    /// fields become empty strings and `return_to` defaults to `/`.
    pub fn into_submission(
        self,
        query: &HashMap<String, String>,
        headers: &HeaderMap,
    ) -> Submission {
        let shop = self
            .shop
            .or_else(|| query.get("shop").cloned())
            .or_else(|| header_shop(headers))
            .unwrap_or_default();

        Submission {
            shop,
            product_ref: self
                .product_id
                .or_else(|| query.get("product_id").cloned())
                .unwrap_or_default(),
            rating: self.rating.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            return_to: self
                .return_to
                .filter(|target| !target.is_empty())
                .unwrap_or_else(|| "/".to_string()),
        }
    }
}

fn header_shop(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SHOP_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

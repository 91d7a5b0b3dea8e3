//! Application-proxy request verification.
//!
//! The platform signs proxied storefront requests: the `signature` query
//! parameter is an HMAC-SHA256 over the remaining parameters, sorted by key
//! and concatenated as `key=value`, keyed with the app's shared secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::HashMap;

type HmacSha256 = Hmac<Sha256>;

/// Query parameter carrying the proxy signature.
const SIGNATURE_PARAM: &str = "signature";

/// Verify the proxy signature over a request's query parameters.
///
/// Returns false when the parameter is absent, not valid hex, or does not
/// match. Comparison happens in constant time via the Mac verifier.
pub fn verify_proxy_signature(params: &HashMap<String, String>, secret: &str) -> bool {
    let Some(signature) = params.get(SIGNATURE_PARAM) else {
        return false;
    };
    let Ok(signature) = hex::decode(signature) else {
        return false;
    };

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(signed_message(params).as_bytes());
    mac.verify_slice(&signature).is_ok()
}

/// The canonical message covered by the signature: every parameter except
/// the signature itself, sorted by key, concatenated as `key=value`.
fn signed_message(params: &HashMap<String, String>) -> String {
    let mut pairs: Vec<_> = params
        .iter()
        .filter(|(key, _)| key.as_str() != SIGNATURE_PARAM)
        .collect();
    pairs.sort();
    pairs
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect()
}

#[cfg(test)]
pub(crate) fn sign(params: &HashMap<String, String>, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(signed_message(params).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

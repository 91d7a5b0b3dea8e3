//! Product reference normalization.
//!
//! Storefront forms send whatever the theme template put in the field: a
//! bare numeric id, or an already-canonical `gid://` global id. The admin
//! API only accepts the latter.

/// Canonical global-id prefix for product references.
pub const PRODUCT_GID_PREFIX: &str = "gid://shopify/Product/";

/// Normalize a raw product reference to its canonical `gid://` form.
///
/// Already-canonical input is returned unchanged. Anything else must parse
/// as a finite number strictly greater than zero; the parsed value is
/// embedded without rounding, and the admin API stays the validator of
/// record for whether a fractional id resolves. All other input yields
/// `None`.
pub fn normalize(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.starts_with(PRODUCT_GID_PREFIX) {
        return Some(raw.to_string());
    }

    let id: f64 = raw.parse().ok()?;
    if !id.is_finite() || id <= 0.0 {
        return None;
    }

    Some(format!("{PRODUCT_GID_PREFIX}{id}"))
}

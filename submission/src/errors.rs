use thiserror::Error;

/// Terminal rejection reasons for one submission. Nothing here is retried;
/// the classification is handed to the storefront layer for rendering and
/// logged for the operator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    #[error("missing shop domain")]
    MissingShop,

    #[error("product reference does not normalize")]
    InvalidProductRef,

    #[error("rating must be an integer between 1 and 5")]
    InvalidRating,

    #[error("no offline token stored for shop")]
    Unauthorized,

    #[error("remote rejected one or more review fields")]
    RemoteValidation,

    #[error("remote response could not be parsed")]
    RemoteUnparseable,

    #[error("remote call failed in transport")]
    Transport,
}

impl RejectReason {
    /// Stable label for metric tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::MissingShop => "missing_shop",
            RejectReason::InvalidProductRef => "invalid_product_ref",
            RejectReason::InvalidRating => "invalid_rating",
            RejectReason::Unauthorized => "unauthorized",
            RejectReason::RemoteValidation => "remote_validation",
            RejectReason::RemoteUnparseable => "remote_unparseable",
            RejectReason::Transport => "transport",
        }
    }
}

/// One inbound review submission, as mapped from the storefront form by the
/// boundary adapter. All fields are raw text; validation happens in
/// [`crate::validate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    pub shop: String,
    pub product_ref: String,
    pub rating: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub email: String,
    pub return_to: String,
}

/// A submission that passed local validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidReview {
    pub shop: String,
    pub product_gid: String,
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub author: String,
    pub email: String,
}

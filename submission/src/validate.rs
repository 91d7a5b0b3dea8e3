use crate::errors::RejectReason;
use crate::product_ref;
use crate::types::{Submission, ValidReview};

/// Validate a raw submission. Checks run in order and stop at the first
/// failure, so invalid input never reaches the credential store or the
/// network.
pub fn validate(submission: &Submission) -> Result<ValidReview, RejectReason> {
    if submission.shop.trim().is_empty() {
        return Err(RejectReason::MissingShop);
    }

    let product_gid =
        product_ref::normalize(&submission.product_ref).ok_or(RejectReason::InvalidProductRef)?;

    // Integer parse only: "3.5" and "abc" both fail here.
    let rating: i64 = submission
        .rating
        .trim()
        .parse()
        .map_err(|_| RejectReason::InvalidRating)?;
    if !(1..=5).contains(&rating) {
        return Err(RejectReason::InvalidRating);
    }

    Ok(ValidReview {
        shop: submission.shop.trim().to_string(),
        product_gid,
        rating: rating as u8,
        title: submission.title.clone(),
        body: submission.body.clone(),
        author: submission.author.clone(),
        email: submission.email.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> Submission {
        Submission {
            shop: "shop.example".into(),
            product_ref: "42".into(),
            rating: "5".into(),
            title: "Great".into(),
            body: "Solid product".into(),
            author: "Ada".into(),
            email: "ada@example.com".into(),
            return_to: "/".into(),
        }
    }

    #[test]
    fn accepts_valid_submission() {
        let review = validate(&valid_submission()).unwrap();
        assert_eq!(review.product_gid, "gid://shopify/Product/42");
        assert_eq!(review.rating, 5);
    }

    #[test]
    fn missing_shop_wins_over_other_failures() {
        // Shop and rating both invalid; the first check decides.
        let submission = Submission {
            shop: "".into(),
            rating: "0".into(),
            ..valid_submission()
        };
        assert_eq!(validate(&submission), Err(RejectReason::MissingShop));
    }

    #[test]
    fn rejects_unnormalizable_product_ref() {
        let submission = Submission {
            product_ref: "not-a-product".into(),
            ..valid_submission()
        };
        assert_eq!(validate(&submission), Err(RejectReason::InvalidProductRef));
    }

    #[test]
    fn rating_boundaries() {
        for rating in ["1", "5"] {
            let submission = Submission {
                rating: rating.into(),
                ..valid_submission()
            };
            assert!(validate(&submission).is_ok(), "rating {rating} should pass");
        }

        for rating in ["0", "6", "3.5", "abc", ""] {
            let submission = Submission {
                rating: rating.into(),
                ..valid_submission()
            };
            assert_eq!(
                validate(&submission),
                Err(RejectReason::InvalidRating),
                "rating {rating:?} should fail"
            );
        }
    }

    #[test]
    fn text_fields_pass_through_unmodified() {
        let submission = Submission {
            title: "".into(),
            body: "  spaced  ".into(),
            ..valid_submission()
        };
        let review = validate(&submission).unwrap();
        assert_eq!(review.title, "");
        assert_eq!(review.body, "  spaced  ");
    }
}

use crate::errors::RejectReason;
use serde::Serialize;

/// Terminal result of one submission.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Accepted { id: String },
    Rejected(RejectReason),
}

/// Rendering directive consumed by the storefront layer. Pure data; the
/// pipeline never renders HTML itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
    pub ok: bool,
    pub return_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Map an outcome to its rendering directive.
///
/// Total and pure: each rejection kind maps to exactly one short literal
/// message. Remote error detail never reaches the end user; it is already
/// logged by the time an outcome exists.
pub fn directive(outcome: &Outcome, return_to: &str) -> Directive {
    match outcome {
        Outcome::Accepted { id } => Directive {
            ok: true,
            return_to: return_to.to_string(),
            id: Some(id.clone()),
            message: None,
        },
        Outcome::Rejected(reason) => Directive {
            ok: false,
            return_to: return_to.to_string(),
            id: None,
            message: Some(user_message(*reason).to_string()),
        },
    }
}

/// One literal end-user message per rejection kind.
pub fn user_message(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::MissingShop => "Missing shop domain",
        RejectReason::InvalidProductRef => "Invalid product reference",
        RejectReason::InvalidRating => "Rating must be 1..5",
        RejectReason::Unauthorized => "App not authorized for this shop",
        RejectReason::RemoteValidation => "Validation error",
        RejectReason::RemoteUnparseable => "API returned non-JSON",
        RejectReason::Transport => "Could not reach the review service",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_REASONS: [RejectReason; 7] = [
        RejectReason::MissingShop,
        RejectReason::InvalidProductRef,
        RejectReason::InvalidRating,
        RejectReason::Unauthorized,
        RejectReason::RemoteValidation,
        RejectReason::RemoteUnparseable,
        RejectReason::Transport,
    ];

    #[test]
    fn success_carries_id_and_no_message() {
        let outcome = Outcome::Accepted {
            id: "gid://x/Metaobject/1".into(),
        };
        let directive = directive(&outcome, "/products/widget");

        assert!(directive.ok);
        assert_eq!(directive.id.as_deref(), Some("gid://x/Metaobject/1"));
        assert_eq!(directive.message, None);
        assert_eq!(directive.return_to, "/products/widget");

        // Renderer-facing contract: camelCase keys, absent options omitted.
        let json = serde_json::to_value(&directive).unwrap();
        assert_eq!(json["returnTo"], "/products/widget");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn every_rejection_maps_to_one_literal_message() {
        for reason in ALL_REASONS {
            let result = directive(&Outcome::Rejected(reason), "/");
            assert!(!result.ok);
            assert_eq!(result.id, None);
            assert_eq!(result.message.as_deref(), Some(user_message(reason)));
        }
    }

    #[test]
    fn mapping_is_pure() {
        for reason in ALL_REASONS {
            let outcome = Outcome::Rejected(reason);
            let first = directive(&outcome, "/cart");
            let second = directive(&outcome, "/cart");
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_vec(&first).unwrap(),
                serde_json::to_vec(&second).unwrap()
            );
        }

        let accepted = Outcome::Accepted { id: "gid://1".into() };
        assert_eq!(directive(&accepted, "/"), directive(&accepted, "/"));
    }

    #[test]
    fn mandated_literals() {
        assert_eq!(user_message(RejectReason::InvalidRating), "Rating must be 1..5");
        assert_eq!(
            user_message(RejectReason::Unauthorized),
            "App not authorized for this shop"
        );
        assert_eq!(
            user_message(RejectReason::RemoteUnparseable),
            "API returned non-JSON"
        );
        assert_eq!(user_message(RejectReason::RemoteValidation), "Validation error");
    }
}

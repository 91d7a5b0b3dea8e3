use crate::types::ValidReview;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;

/// Review metaobject type on the admin API side.
const REVIEW_METAOBJECT_TYPE: &str = "product_review";

// Every submission is created pre-approved; there is no moderation queue.
const REVIEW_STATUS: &str = "approved";

pub const CREATE_REVIEW_MUTATION: &str = "\
mutation CreateReview($metaobject: MetaobjectCreateInput!) {
  metaobjectCreate(metaobject: $metaobject) {
    metaobject { id }
    userErrors { field message }
  }
}";

/// A GraphQL call body: the document plus its variables.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQLRequest {
    pub query: String,
    pub variables: serde_json::Value,
}

/// Build the create-mutation payload for one validated review. Field order
/// is fixed.
pub fn build_review_mutation(review: &ValidReview, created_at: DateTime<Utc>) -> GraphQLRequest {
    let fields = json!([
        { "key": "product", "value": review.product_gid },
        { "key": "rating", "value": review.rating.to_string() },
        { "key": "title", "value": review.title },
        { "key": "body", "value": review.body },
        { "key": "author", "value": review.author },
        { "key": "email", "value": review.email },
        { "key": "status", "value": REVIEW_STATUS },
        { "key": "created_at", "value": created_at.to_rfc3339_opts(SecondsFormat::Secs, true) },
    ]);

    GraphQLRequest {
        query: CREATE_REVIEW_MUTATION.to_string(),
        variables: json!({
            "metaobject": {
                "type": REVIEW_METAOBJECT_TYPE,
                "fields": fields,
            }
        }),
    }
}

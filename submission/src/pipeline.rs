use crate::errors::RejectReason;
use crate::metrics_defs;
use crate::mutation;
use crate::outcome::Outcome;
use crate::submit::Submitter;
use crate::types::Submission;
use crate::validate;
use chrono::Utc;
use credentials::client::Credentials;

/// The submission pipeline with its collaborators injected: credential
/// resolution and the remote submitter. One instance is shared across
/// requests; each call to [`ReviewPipeline::handle`] is independent.
pub struct ReviewPipeline {
    credentials: Credentials,
    submitter: Submitter,
}

impl ReviewPipeline {
    pub fn new(credentials: Credentials, submitter: Submitter) -> Self {
        ReviewPipeline {
            credentials,
            submitter,
        }
    }

    /// Run one submission through validation, credential resolution and the
    /// remote create call.
    pub async fn handle(&self, submission: &Submission) -> Outcome {
        let outcome = self.run(submission).await;

        let result = match &outcome {
            Outcome::Accepted { .. } => "accepted",
            Outcome::Rejected(reason) => reason.as_str(),
        };
        metrics::counter!(metrics_defs::SUBMISSION_OUTCOME.name, "result" => result).increment(1);

        outcome
    }

    async fn run(&self, submission: &Submission) -> Outcome {
        let review = match validate::validate(submission) {
            Ok(review) => review,
            Err(reason) => {
                tracing::warn!(shop = %submission.shop, reason = %reason, "review submission rejected");
                return Outcome::Rejected(reason);
            }
        };

        let token = match self.credentials.find_offline(&review.shop).await {
            Ok(Some(token)) => token,
            Ok(None) => {
                tracing::warn!(shop = %review.shop, "no offline token for shop");
                return Outcome::Rejected(RejectReason::Unauthorized);
            }
            Err(err) => {
                tracing::warn!(shop = %review.shop, error = %err, "credential lookup failed");
                return Outcome::Rejected(RejectReason::Unauthorized);
            }
        };

        let request = mutation::build_review_mutation(&review, Utc::now());

        match self.submitter.submit(&review.shop, &token, &request).await {
            Ok(id) => {
                tracing::debug!(shop = %review.shop, id = %id, "review created");
                Outcome::Accepted { id }
            }
            Err(reason) => Outcome::Rejected(reason),
        }
    }
}

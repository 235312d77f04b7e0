//! Error types for the OpenCollect settlement module.
//!
//! All errors use the `OC_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Attach / init-params errors
//! - 2xx: Eligibility errors
//! - 3xx: Data-match errors
//! - 4xx: Currency errors
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::{ActorId, Amount, ProfileId, PublicationId};

/// Central error enum for all OpenCollect operations.
///
/// Every failure is terminal: an attach or collect attempt aborts on the
/// first error with zero side effects. Currency errors (4xx) originate in
/// the currency collaborator and pass through the orchestrator unmodified.
#[derive(Debug, Error)]
pub enum CollectError {
    // =================================================================
    // Attach Errors (1xx)
    // =================================================================
    /// Attach-time configuration failed validation. All attach failures
    /// share this kind; `reason` records which check tripped.
    #[error("OC_ERR_100: Invalid init params: {reason}")]
    InvalidInitParams { reason: String },

    /// Terms already exist for this publication (write-once violation).
    #[error("OC_ERR_101: Terms already attached: {0}")]
    TermsAlreadyAttached(PublicationId),

    // =================================================================
    // Eligibility Errors (2xx)
    // =================================================================
    /// The collector does not follow the target publication's profile.
    #[error("OC_ERR_200: Follow required: {collector} does not follow {profile}")]
    FollowRequired {
        collector: ActorId,
        profile: ProfileId,
    },

    /// No terms exist for this publication, or it is unknown to the host.
    #[error("OC_ERR_201: Publication not found: {0}")]
    PublicationNotFound(PublicationId),

    // =================================================================
    // Data-Match Errors (3xx)
    // =================================================================
    /// The collector's claimed terms disagree with the stored terms.
    #[error("OC_ERR_300: Module data mismatch: {reason}")]
    ModuleDataMismatch { reason: String },

    // =================================================================
    // Currency Errors (4xx)
    // =================================================================
    /// The payer has not authorized enough of the currency to cover the price.
    #[error("OC_ERR_400: Insufficient allowance: need {needed}, have {available}")]
    InsufficientAllowance { needed: Amount, available: Amount },

    /// The payer's balance does not cover the price.
    #[error("OC_ERR_401: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    /// A fee product exceeded the amount range.
    #[error("OC_ERR_402: Amount overflow computing fee split")]
    AmountOverflow,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("OC_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Malformed byte payload (attach config or collect claim).
    #[error("OC_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, CollectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = CollectError::PublicationNotFound(PublicationId::new(ProfileId(1), 1));
        let msg = format!("{err}");
        assert!(msg.starts_with("OC_ERR_201"), "Got: {msg}");
    }

    #[test]
    fn insufficient_allowance_display() {
        let err = CollectError::InsufficientAllowance {
            needed: 100,
            available: 50,
        };
        let msg = format!("{err}");
        assert!(msg.contains("OC_ERR_400"));
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn all_errors_have_oc_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(CollectError::InvalidInitParams {
                reason: "test".into(),
            }),
            Box::new(CollectError::FollowRequired {
                collector: ActorId(2),
                profile: ProfileId(1),
            }),
            Box::new(CollectError::ModuleDataMismatch {
                reason: "test".into(),
            }),
            Box::new(CollectError::AmountOverflow),
            Box::new(CollectError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("OC_ERR_"),
                "Error missing OC_ERR_ prefix: {msg}"
            );
        }
    }
}

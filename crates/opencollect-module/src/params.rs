//! Attach-time parameter validation.
//!
//! Checks run in a fixed order; every failure maps to `InvalidInitParams`,
//! distinguished only by reason so audits can tell which check tripped:
//! 1. currency not whitelisted
//! 2. null recipient
//! 3. referral fee above max bps
//! 4. price below the precision floor

use opencollect_types::constants::{BPS_DENOMINATOR, MIN_COLLECT_PRICE};
use opencollect_types::{AttachConfig, CollectError, PublicationTerms, Result};

use crate::collab::CurrencyWhitelist;

/// Validate an attach config against the platform whitelist and the module's
/// structural invariants, producing the terms to store.
///
/// Pure: no side effects. Writing the result to the terms store is the
/// orchestrator's job.
///
/// # Errors
/// `InvalidInitParams` naming the first check that failed.
pub fn validate_attach(
    whitelist: &impl CurrencyWhitelist,
    config: &AttachConfig,
) -> Result<PublicationTerms> {
    if !whitelist.is_whitelisted(&config.currency) {
        return Err(CollectError::InvalidInitParams {
            reason: format!("currency {} is not whitelisted", config.currency),
        });
    }
    if config.recipient.is_null() {
        return Err(CollectError::InvalidInitParams {
            reason: "recipient is the null identity".into(),
        });
    }
    if config.referral_fee_bps > BPS_DENOMINATOR {
        return Err(CollectError::InvalidInitParams {
            reason: format!(
                "referral fee {} bps exceeds max {BPS_DENOMINATOR}",
                config.referral_fee_bps
            ),
        });
    }
    if config.price < MIN_COLLECT_PRICE {
        return Err(CollectError::InvalidInitParams {
            reason: format!(
                "price {} is below the minimum {MIN_COLLECT_PRICE}",
                config.price
            ),
        });
    }

    Ok(PublicationTerms {
        price: config.price,
        currency: config.currency.clone(),
        recipient: config.recipient,
        referral_fee_bps: config.referral_fee_bps,
    })
}

//! Fee-split arithmetic and settlement execution.
//!
//! The split is exact integer arithmetic, floor division, in a fixed order:
//! treasury fee on the gross price first, referral fee on the post-treasury
//! remainder second, and whatever is left is retired. The three shares
//! always sum exactly to the price — value is never created, never lost
//! silently, and the nominal recipient never receives anything.

use opencollect_types::constants::BPS_DENOMINATOR;
use opencollect_types::{
    ActorId, Amount, CollectClaim, CollectError, FeeSplit, PublicationTerms, Result,
};

use crate::collab::{CurrencyGateway, FeeConfig};
use crate::gate::Eligibility;

/// Verify the collector's claimed terms against the stored terms.
///
/// Both currency and price must match exactly; any disagreement means the
/// caller is stale or malicious and no funds may move.
///
/// # Errors
/// `ModuleDataMismatch` naming the mismatched field.
pub fn verify_claim(terms: &PublicationTerms, claim: &CollectClaim) -> Result<()> {
    if claim.currency != terms.currency {
        return Err(CollectError::ModuleDataMismatch {
            reason: format!(
                "claimed currency {} != stored {}",
                claim.currency, terms.currency
            ),
        });
    }
    if claim.price != terms.price {
        return Err(CollectError::ModuleDataMismatch {
            reason: format!("claimed price {} != stored {}", claim.price, terms.price),
        });
    }
    Ok(())
}

/// Compute the three-way split of `price`.
///
/// 1. `treasury = floor(price * treasury_fee_bps / 10_000)`
/// 2. `referral = floor((price - treasury) * referral_fee_bps / 10_000)`,
///    zero when there is no referrer
/// 3. `retired = price - treasury - referral`
///
/// The order matters: referral is carved from the post-treasury remainder,
/// not the gross price.
///
/// # Errors
/// `AmountOverflow` if a fee product exceeds the amount range (prices near
/// `u128::MAX / 10_000`; unreachable for real currencies).
pub fn split_price(
    price: Amount,
    treasury_fee_bps: u16,
    referral_fee_bps: u16,
    has_referrer: bool,
) -> Result<FeeSplit> {
    let treasury = fee_of(price, treasury_fee_bps)?;
    let remainder = price - treasury;

    let referral = if has_referrer && referral_fee_bps > 0 {
        fee_of(remainder, referral_fee_bps)?
    } else {
        0
    };
    let retired = remainder - referral;

    debug_assert_eq!(treasury + referral + retired, price);
    Ok(FeeSplit {
        treasury,
        referral,
        retired,
    })
}

/// `floor(base * bps / 10_000)`. Never exceeds `base` for `bps <= 10_000`.
fn fee_of(base: Amount, bps: u16) -> Result<Amount> {
    base.checked_mul(Amount::from(bps))
        .map(|product| product / Amount::from(BPS_DENOMINATOR))
        .ok_or(CollectError::AmountOverflow)
}

/// Execute the settlement for a matched, eligible collect.
///
/// Preflights the full price against the collector's balance and allowance,
/// then issues the treasury transfer, the referral transfer (if any), and
/// retires the remainder. Because the preflight covers the whole price and
/// the three debits sum to it exactly, either everything moves or nothing
/// does. No per-collection state: collecting twice settles twice,
/// identically.
///
/// # Errors
/// Currency-collaborator errors pass through unmodified; `AmountOverflow`
/// from the split.
pub fn settle(
    gateway: &mut impl CurrencyGateway,
    fees: &impl FeeConfig,
    terms: &PublicationTerms,
    collector: ActorId,
    eligibility: &Eligibility,
) -> Result<FeeSplit> {
    let treasury_fee_bps = fees.treasury_fee_bps();
    let split = split_price(
        terms.price,
        treasury_fee_bps,
        terms.referral_fee_bps,
        eligibility.referrer.is_some(),
    )?;

    tracing::debug!(
        publication = %eligibility.target,
        collector = %collector,
        price = terms.price,
        treasury = split.treasury,
        referral = split.referral,
        retired = split.retired,
        "Fee split computed"
    );

    // No transfer until the whole price is known to be coverable.
    gateway.preflight_debit(collector, &terms.currency, terms.price)?;

    if split.treasury > 0 {
        gateway.transfer_from(collector, fees.treasury(), &terms.currency, split.treasury)?;
    }
    if split.referral > 0 {
        let referrer = eligibility
            .referrer
            .ok_or_else(|| CollectError::Internal("referral share without referrer".into()))?;
        gateway.transfer_from(collector, referrer, &terms.currency, split.referral)?;
    }
    if split.retired > 0 {
        gateway.retire_from(collector, &terms.currency, split.retired)?;
    }

    Ok(split)
}

//! Publication terms and the attach/collect wire payloads.
//!
//! `PublicationTerms` is the write-once record created when a publication
//! adopts the module. The host hands the module opaque byte payloads for
//! both attach and collect; `AttachConfig` and `CollectClaim` are their
//! decoded forms (JSON-encoded, matching the platform's module ABI).

use serde::{Deserialize, Serialize};

use crate::{ActorId, CollectError, CurrencyId, Result};

/// A monetary amount in smallest currency units.
pub type Amount = u128;

/// The validated, immutable terms attached to a publication.
///
/// Created exactly once at attach time, never mutated, never deleted.
/// The `recipient` is stored for record-keeping only: under the retirement
/// policy it never receives settlement funds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationTerms {
    /// Collect price in smallest currency units. Always >= `MIN_COLLECT_PRICE`.
    pub price: Amount,
    /// The whitelisted currency collections settle in.
    pub currency: CurrencyId,
    /// Nominal beneficiary. Never paid; kept for the host's module interface.
    pub recipient: ActorId,
    /// Referral fee rate in basis points, applied to the post-treasury
    /// remainder. Always in `[0, 10_000]`.
    pub referral_fee_bps: u16,
}

/// The wire form of the attach-time configuration payload.
///
/// Field-for-field the same shape as [`PublicationTerms`]; validation turns
/// one into the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachConfig {
    pub price: Amount,
    pub currency: CurrencyId,
    pub recipient: ActorId,
    pub referral_fee_bps: u16,
}

impl AttachConfig {
    /// Decode an attach payload from the host's opaque bytes.
    ///
    /// # Errors
    /// Malformed bytes map to `InvalidInitParams`: every attach failure is
    /// one error kind, distinguished by reason.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        serde_json::from_slice(raw).map_err(|e| CollectError::InvalidInitParams {
            reason: format!("malformed attach config: {e}"),
        })
    }

    /// Encode to the wire form.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("attach config serializes")
    }
}

/// The collector's claimed terms, submitted with every collect attempt.
///
/// Must equal the stored terms exactly for the collection to proceed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectClaim {
    pub currency: CurrencyId,
    pub price: Amount,
}

impl CollectClaim {
    /// Decode a collect claim from the host's opaque bytes.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        serde_json::from_slice(raw)
            .map_err(|e| CollectError::Serialization(format!("malformed collect claim: {e}")))
    }

    /// Encode to the wire form.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("collect claim serializes")
    }
}

/// The three-way split of a collect price.
///
/// Invariant: `treasury + referral + retired == price` exactly. The retired
/// share is removed from circulation; no one receives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSplit {
    /// Platform treasury share, computed on the gross price.
    pub treasury: Amount,
    /// Referral share, computed on the post-treasury remainder.
    pub referral: Amount,
    /// The remainder, permanently retired.
    pub retired: Amount,
}

impl FeeSplit {
    /// Sum of all three shares. Equals the collect price by construction.
    #[must_use]
    pub fn total(&self) -> Amount {
        self.treasury + self.referral + self.retired
    }
}

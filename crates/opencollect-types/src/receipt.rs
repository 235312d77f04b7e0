//! Settlement receipts for the OpenCollect audit trail.
//!
//! Every successful collect settlement produces a [`SettlementReceipt`]
//! recording the full split. The receipt id is derived from a SHA-256 digest
//! of the canonical payload, so the same settlement facts always produce the
//! same id and the trail can be verified offline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{ActorId, Amount, CurrencyId, FeeSplit, PublicationId, ReceiptId};

/// Proof that a collect settlement completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementReceipt {
    /// Deterministic id derived from `payload_digest`.
    pub id: ReceiptId,
    /// The original (target) publication that was collected.
    pub publication: PublicationId,
    /// Who paid.
    pub collector: ActorId,
    /// The currency the settlement moved.
    pub currency: CurrencyId,
    /// Gross price debited from the collector.
    pub price: Amount,
    /// How the price was split.
    pub split: FeeSplit,
    /// Who received the referral share, if anyone.
    pub referrer: Option<ActorId>,
    /// Monotonic settlement sequence number assigned by the module.
    pub sequence: u64,
    /// SHA-256 over the canonical JSON of the settlement facts.
    pub payload_digest: [u8; 32],
    /// When the settlement completed.
    pub settled_at: DateTime<Utc>,
}

impl SettlementReceipt {
    /// Build a receipt from settlement facts, computing digest and id.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        publication: PublicationId,
        collector: ActorId,
        currency: CurrencyId,
        price: Amount,
        split: FeeSplit,
        referrer: Option<ActorId>,
        sequence: u64,
    ) -> Self {
        let payload_digest =
            Self::digest(publication, collector, &currency, price, split, referrer, sequence);
        Self {
            id: ReceiptId::from_digest(&payload_digest),
            publication,
            collector,
            currency,
            price,
            split,
            referrer,
            sequence,
            payload_digest,
            settled_at: Utc::now(),
        }
    }

    /// Recompute the digest from this receipt's facts.
    #[must_use]
    pub fn recompute_digest(&self) -> [u8; 32] {
        Self::digest(
            self.publication,
            self.collector,
            &self.currency,
            self.price,
            self.split,
            self.referrer,
            self.sequence,
        )
    }

    /// Whether the stored digest matches the receipt's facts.
    #[must_use]
    pub fn verify(&self) -> bool {
        self.recompute_digest() == self.payload_digest
    }

    /// Hex-encoded payload digest, for logs.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        hex::encode(self.payload_digest)
    }

    fn digest(
        publication: PublicationId,
        collector: ActorId,
        currency: &CurrencyId,
        price: Amount,
        split: FeeSplit,
        referrer: Option<ActorId>,
        sequence: u64,
    ) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(b"opencollect:receipt:v1:");
        hasher.update(publication.profile.0.to_le_bytes());
        hasher.update(publication.index.to_le_bytes());
        hasher.update(collector.0.to_le_bytes());
        hasher.update(currency.0.as_bytes());
        hasher.update(price.to_le_bytes());
        hasher.update(split.treasury.to_le_bytes());
        hasher.update(split.referral.to_le_bytes());
        hasher.update(split.retired.to_le_bytes());
        hasher.update(referrer.map_or(0, |r| r.0).to_le_bytes());
        hasher.update(sequence.to_le_bytes());
        hasher.finalize().into()
    }
}

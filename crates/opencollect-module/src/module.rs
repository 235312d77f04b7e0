//! The host-facing retire-collect module.
//!
//! Composes the core: attach runs validation then the write-once store;
//! collect runs the state machine
//! `ValidateExists → CheckEligibility → CheckDataMatch → Settle`,
//! terminal on the first failure. No currency transfer is issued until
//! every prior check has passed, so a failed attempt leaves no trace.

use opencollect_types::{
    ActorId, AttachConfig, CollectClaim, PublicationId, PublicationTerms, Result,
    SettlementReceipt,
};

use crate::collab::{CurrencyGateway, CurrencyWhitelist, FeeConfig, FollowGraph, PublicationGraph};
use crate::{engine, gate, params, store::TermsStore};

/// The retire-collect settlement module.
///
/// Owns the terms store; everything else is reached through the collaborator
/// traits the host passes into each entry point. The host serializes calls,
/// so each attempt executes as a single atomic unit of work.
#[derive(Debug, Default)]
pub struct RetireCollectModule {
    store: TermsStore,
    /// Monotonic settlement counter, used to sequence receipts.
    settlements: u64,
}

impl RetireCollectModule {
    /// Create a module with no attached publications.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TermsStore::new(),
            settlements: 0,
        }
    }

    /// Attach entry point: decode and validate `raw_config`, then store the
    /// terms for `pub_id`. Write-once per publication.
    ///
    /// # Errors
    /// - `InvalidInitParams` for a malformed or invalid config
    /// - `TermsAlreadyAttached` if `pub_id` already attached
    pub fn on_attach(
        &mut self,
        whitelist: &impl CurrencyWhitelist,
        pub_id: PublicationId,
        raw_config: &[u8],
    ) -> Result<()> {
        let config = AttachConfig::decode(raw_config)?;
        let terms = params::validate_attach(whitelist, &config).inspect_err(|err| {
            tracing::warn!(publication = %pub_id, %err, "Attach rejected");
        })?;
        self.store.put(pub_id, terms)?;

        tracing::info!(
            publication = %pub_id,
            price = config.price,
            currency = %config.currency,
            referral_fee_bps = config.referral_fee_bps,
            "Terms attached"
        );
        Ok(())
    }

    /// Collect entry point: gate, match, settle.
    ///
    /// `pub_id` may be a mirror; terms are looked up under the resolved
    /// target (original) publication. On success returns the settlement
    /// receipt; on any failure nothing has moved.
    ///
    /// # Errors
    /// - `PublicationNotFound` if the publication is unknown or never attached
    /// - `FollowRequired` if the collector does not follow the target profile
    /// - `Serialization` for a malformed claim
    /// - `ModuleDataMismatch` if the claim disagrees with the stored terms
    /// - currency-collaborator errors, passed through unmodified
    pub fn on_collect<G, F, C, W>(
        &mut self,
        graph: &G,
        follows: &F,
        fees: &C,
        gateway: &mut W,
        pub_id: PublicationId,
        collector: ActorId,
        raw_claim: &[u8],
    ) -> Result<SettlementReceipt>
    where
        G: PublicationGraph,
        F: FollowGraph,
        C: FeeConfig,
        W: CurrencyGateway,
    {
        // Terms live under the original publication, so resolve before lookup.
        let target = graph.target_of(pub_id)?;
        let terms = self.store.get(target)?.clone();

        let eligibility = gate::check(graph, follows, collector, pub_id).inspect_err(|err| {
            tracing::warn!(publication = %pub_id, collector = %collector, %err, "Collect gated");
        })?;

        let claim = CollectClaim::decode(raw_claim)?;
        engine::verify_claim(&terms, &claim).inspect_err(|err| {
            tracing::warn!(
                publication = %eligibility.target,
                collector = %collector,
                %err,
                "Collect claim mismatch"
            );
        })?;

        let split = engine::settle(gateway, fees, &terms, collector, &eligibility)?;

        let receipt = SettlementReceipt::new(
            eligibility.target,
            collector,
            terms.currency,
            terms.price,
            split,
            eligibility.referrer,
            self.settlements,
        );
        self.settlements += 1;

        tracing::info!(
            receipt = %receipt.id,
            publication = %receipt.publication,
            collector = %collector,
            treasury = split.treasury,
            referral = split.referral,
            retired = split.retired,
            digest = receipt.digest_hex(),
            "Collect settled"
        );
        Ok(receipt)
    }

    /// Read-only accessor for a publication's stored terms.
    ///
    /// # Errors
    /// `PublicationNotFound` if the publication never attached the module.
    pub fn publication_terms(&self, pub_id: PublicationId) -> Result<&PublicationTerms> {
        self.store.get(pub_id)
    }

    /// Number of settlements completed since construction.
    #[must_use]
    pub fn settlement_count(&self) -> u64 {
        self.settlements
    }
}

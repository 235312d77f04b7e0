//! Collaborator capabilities the settlement core consumes.
//!
//! The social graph, the currency whitelist, the fee configuration, and the
//! currency ledger all live outside this module. The core reaches them only
//! through these narrow traits, so it stays host-agnostic and independently
//! testable. The `opencollect-hub` crate provides in-memory reference
//! implementations.

use opencollect_types::{ActorId, Amount, CurrencyId, ProfileId, PublicationId, Result};

/// Platform-level currency whitelist.
///
/// Consulted only at attach time. De-whitelisting a currency later does not
/// affect publications that already attached with it.
pub trait CurrencyWhitelist {
    fn is_whitelisted(&self, currency: &CurrencyId) -> bool;
}

/// Follower-relationship lookup in the host social graph.
pub trait FollowGraph {
    fn is_following(&self, actor: ActorId, profile: ProfileId) -> bool;
}

/// Publication-graph resolution: mirror targets and referrers.
///
/// Multi-hop resolution (a mirror of a mirror) is entirely the host's
/// concern; the core treats both functions as opaque.
pub trait PublicationGraph {
    /// The publication a collect against `pub_id` actually settles on:
    /// the original for mirrors, `pub_id` itself for direct posts.
    ///
    /// # Errors
    /// `PublicationNotFound` if the host does not know `pub_id`.
    fn target_of(&self, pub_id: PublicationId) -> Result<PublicationId>;

    /// The actor credited with the referral share: the owner of the mirror
    /// being collected through, or `None` for a direct collection.
    fn resolve_referrer(&self, pub_id: PublicationId) -> Option<ActorId>;
}

/// Platform fee configuration (the module-globals collaborator).
pub trait FeeConfig {
    /// Current platform-wide treasury fee rate, in `[0, 10_000]` bps.
    fn treasury_fee_bps(&self) -> u16;

    /// The treasury identity fees are paid to.
    fn treasury(&self) -> ActorId;
}

/// The currency transfer mechanism.
///
/// Each call either completes fully or fails with the gateway's own error
/// and changes nothing. `preflight_debit` lets the settlement engine verify
/// the payer can cover the *whole* price before any funds move, which is
/// what makes a collect attempt all-or-nothing.
pub trait CurrencyGateway {
    /// Verify `payer` has both balance and pull-authorization covering
    /// `amount`, without moving anything.
    ///
    /// # Errors
    /// `InsufficientAllowance` or `InsufficientBalance`.
    fn preflight_debit(
        &self,
        payer: ActorId,
        currency: &CurrencyId,
        amount: Amount,
    ) -> Result<()>;

    /// Move `amount` from `payer` to `payee`, consuming allowance.
    fn transfer_from(
        &mut self,
        payer: ActorId,
        payee: ActorId,
        currency: &CurrencyId,
        amount: Amount,
    ) -> Result<()>;

    /// Debit `amount` from `payer` and remove it from circulation,
    /// consuming allowance. The retirement sink: no one receives it.
    fn retire_from(
        &mut self,
        payer: ActorId,
        currency: &CurrencyId,
        amount: Amount,
    ) -> Result<()>;
}

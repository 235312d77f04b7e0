//! Per-collect eligibility gating.
//!
//! Read-only checks against the host collaborators: resolve which
//! publication the collect actually settles on (mirrors settle on the
//! original), require the collector to follow the target's owning profile,
//! and resolve who earns the referral share.

use opencollect_types::{ActorId, CollectError, PublicationId, Result};
use serde::{Deserialize, Serialize};

use crate::collab::{FollowGraph, PublicationGraph};

/// The outcome of a passed eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    /// The original publication whose terms govern this collect.
    pub target: PublicationId,
    /// The actor earning the referral share: the owner of the mirror being
    /// collected through, or `None` for a direct collection. Self-referral
    /// (a collector collecting through their own mirror) is permitted.
    pub referrer: Option<ActorId>,
}

/// Decide whether `collector` may collect `pub_id` and who the referrer is.
///
/// The follow requirement is against the *target* publication's profile:
/// following only the mirror's owner is not enough.
///
/// # Errors
/// - `PublicationNotFound` if the host does not know `pub_id`
/// - `FollowRequired` if the collector does not follow the target's profile
pub fn check(
    graph: &impl PublicationGraph,
    follows: &impl FollowGraph,
    collector: ActorId,
    pub_id: PublicationId,
) -> Result<Eligibility> {
    let target = graph.target_of(pub_id)?;

    if !follows.is_following(collector, target.profile) {
        return Err(CollectError::FollowRequired {
            collector,
            profile: target.profile,
        });
    }

    let referrer = graph.resolve_referrer(pub_id);
    Ok(Eligibility { target, referrer })
}

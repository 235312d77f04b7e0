//! In-memory social graph: profiles, publications, mirrors, and follows.
//!
//! Profiles are owned by actors and number their publications sequentially.
//! A mirror points at another publication; resolving a mirror's target walks
//! the chain to the original, and its referrer is the mirror's own profile
//! owner (one hop — the profile the collector actually interacted with).

use std::collections::{HashMap, HashSet};

use opencollect_module::{FollowGraph, PublicationGraph};
use opencollect_types::{ActorId, CollectError, ProfileId, PublicationId, Result};

/// What a publication entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Publication {
    /// An original post.
    Post,
    /// A re-share pointing at another publication.
    Mirror { points_to: PublicationId },
}

/// The host platform's publication and follower bookkeeping.
#[derive(Debug, Default)]
pub struct SocialGraph {
    /// Profile -> owning actor.
    profiles: HashMap<ProfileId, ActorId>,
    /// Per-profile publication sequence counters.
    pub_counters: HashMap<ProfileId, u64>,
    publications: HashMap<PublicationId, Publication>,
    follows: HashSet<(ActorId, ProfileId)>,
    next_profile: u64,
}

impl SocialGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_profile: 1,
            ..Self::default()
        }
    }

    /// Register a new profile owned by `owner`.
    pub fn create_profile(&mut self, owner: ActorId) -> ProfileId {
        let id = ProfileId(self.next_profile);
        self.next_profile += 1;
        self.profiles.insert(id, owner);
        id
    }

    /// The actor that owns `profile`, if it exists.
    #[must_use]
    pub fn owner_of(&self, profile: ProfileId) -> Option<ActorId> {
        self.profiles.get(&profile).copied()
    }

    /// Publish an original post under `profile`.
    ///
    /// # Errors
    /// `Internal` if the profile does not exist.
    pub fn post(&mut self, profile: ProfileId) -> Result<PublicationId> {
        let id = self.next_publication(profile)?;
        self.publications.insert(id, Publication::Post);
        Ok(id)
    }

    /// Publish a mirror of `points_to` under `profile`.
    ///
    /// # Errors
    /// `Internal` if the profile does not exist;
    /// `PublicationNotFound` if the mirrored publication does not exist.
    pub fn mirror(&mut self, profile: ProfileId, points_to: PublicationId) -> Result<PublicationId> {
        if !self.publications.contains_key(&points_to) {
            return Err(CollectError::PublicationNotFound(points_to));
        }
        let id = self.next_publication(profile)?;
        self.publications.insert(id, Publication::Mirror { points_to });
        Ok(id)
    }

    /// Record that `actor` follows `profile`.
    pub fn follow(&mut self, actor: ActorId, profile: ProfileId) {
        self.follows.insert((actor, profile));
    }

    /// Remove a follow edge.
    pub fn unfollow(&mut self, actor: ActorId, profile: ProfileId) {
        self.follows.remove(&(actor, profile));
    }

    fn next_publication(&mut self, profile: ProfileId) -> Result<PublicationId> {
        if !self.profiles.contains_key(&profile) {
            return Err(CollectError::Internal(format!("unknown {profile}")));
        }
        let counter = self.pub_counters.entry(profile).or_insert(0);
        *counter += 1;
        Ok(PublicationId::new(profile, *counter))
    }
}

impl FollowGraph for SocialGraph {
    fn is_following(&self, actor: ActorId, profile: ProfileId) -> bool {
        self.follows.contains(&(actor, profile))
    }
}

impl PublicationGraph for SocialGraph {
    fn target_of(&self, pub_id: PublicationId) -> Result<PublicationId> {
        let mut current = pub_id;
        loop {
            match self.publications.get(&current) {
                Some(Publication::Post) => return Ok(current),
                Some(Publication::Mirror { points_to }) => current = *points_to,
                None => return Err(CollectError::PublicationNotFound(current)),
            }
        }
    }

    fn resolve_referrer(&self, pub_id: PublicationId) -> Option<ActorId> {
        match self.publications.get(&pub_id) {
            Some(Publication::Mirror { .. }) => self.owner_of(pub_id.profile),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_number_publications_independently() {
        let mut g = SocialGraph::new();
        let alice = g.create_profile(ActorId(1));
        let bob = g.create_profile(ActorId(2));

        assert_eq!(g.post(alice).unwrap(), PublicationId::new(alice, 1));
        assert_eq!(g.post(alice).unwrap(), PublicationId::new(alice, 2));
        assert_eq!(g.post(bob).unwrap(), PublicationId::new(bob, 1));
    }

    #[test]
    fn post_is_its_own_target_with_no_referrer() {
        let mut g = SocialGraph::new();
        let alice = g.create_profile(ActorId(1));
        let post = g.post(alice).unwrap();

        assert_eq!(g.target_of(post).unwrap(), post);
        assert_eq!(g.resolve_referrer(post), None);
    }

    #[test]
    fn mirror_resolves_to_original_and_credits_mirror_owner() {
        let mut g = SocialGraph::new();
        let alice = g.create_profile(ActorId(1));
        let bob = g.create_profile(ActorId(2));
        let post = g.post(alice).unwrap();
        let mirror = g.mirror(bob, post).unwrap();

        assert_eq!(g.target_of(mirror).unwrap(), post);
        assert_eq!(g.resolve_referrer(mirror), Some(ActorId(2)));
    }

    #[test]
    fn mirror_of_mirror_reaches_the_original() {
        let mut g = SocialGraph::new();
        let alice = g.create_profile(ActorId(1));
        let bob = g.create_profile(ActorId(2));
        let carol = g.create_profile(ActorId(3));
        let post = g.post(alice).unwrap();
        let first = g.mirror(bob, post).unwrap();
        let second = g.mirror(carol, first).unwrap();

        assert_eq!(g.target_of(second).unwrap(), post);
        // The referrer is the mirror actually collected through.
        assert_eq!(g.resolve_referrer(second), Some(ActorId(3)));
    }

    #[test]
    fn mirror_of_unknown_publication_rejected() {
        let mut g = SocialGraph::new();
        let bob = g.create_profile(ActorId(2));
        let ghost = PublicationId::new(ProfileId(9), 9);
        let err = g.mirror(bob, ghost).unwrap_err();
        assert!(matches!(err, CollectError::PublicationNotFound(p) if p == ghost));
    }

    #[test]
    fn follow_edges() {
        let mut g = SocialGraph::new();
        let alice = g.create_profile(ActorId(1));
        assert!(!g.is_following(ActorId(2), alice));

        g.follow(ActorId(2), alice);
        assert!(g.is_following(ActorId(2), alice));

        g.unfollow(ActorId(2), alice);
        assert!(!g.is_following(ActorId(2), alice));
    }
}

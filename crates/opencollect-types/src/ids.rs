//! Identifiers used throughout OpenCollect.
//!
//! Profiles and publications use the host platform's sequential numbering
//! (a publication is keyed by its owning profile plus a per-profile index).
//! `ReceiptId` is derived deterministically from the receipt payload digest.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ProfileId
// ---------------------------------------------------------------------------

/// Identity of a profile in the host social graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ProfileId(pub u64);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "profile:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// PublicationId
// ---------------------------------------------------------------------------

/// Identity of a publication: owning profile plus per-profile index.
///
/// Mirrors do not get their own terms entry; their collections resolve
/// through the original publication's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PublicationId {
    /// The profile that owns this publication.
    pub profile: ProfileId,
    /// Per-profile publication sequence number (first post is 1).
    pub index: u64,
}

impl PublicationId {
    #[must_use]
    pub fn new(profile: ProfileId, index: u64) -> Self {
        Self { profile, index }
    }
}

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pub:{}:{}", self.profile.0, self.index)
    }
}

// ---------------------------------------------------------------------------
// ActorId
// ---------------------------------------------------------------------------

/// A money-holding identity: collector, treasury, or a profile's owner.
///
/// `ActorId(0)` is the null identity and is never a valid recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ActorId(pub u64);

impl ActorId {
    /// The null identity. Rejected as a terms recipient at attach time.
    pub const NULL: Self = Self(0);

    #[must_use]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// CurrencyId
// ---------------------------------------------------------------------------

/// Identity of a fungible currency contract (e.g. "BCT").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CurrencyId(pub String);

impl CurrencyId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "currency:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ReceiptId
// ---------------------------------------------------------------------------

/// Unique identifier for a settlement receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ReceiptId(pub Uuid);

impl ReceiptId {
    /// Deterministic `ReceiptId` from a payload digest.
    ///
    /// The same settlement payload always produces the same id, so an audit
    /// trail can be cross-checked without coordination.
    #[must_use]
    pub fn from_digest(digest: &[u8; 32]) -> Self {
        let bytes: [u8; 16] = digest[..16].try_into().expect("digest is 32 bytes");
        Self(Uuid::from_bytes(bytes))
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "receipt:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publication_id_display() {
        let id = PublicationId::new(ProfileId(1), 3);
        assert_eq!(id.to_string(), "pub:1:3");
    }

    #[test]
    fn null_actor() {
        assert!(ActorId::NULL.is_null());
        assert!(!ActorId(7).is_null());
    }

    #[test]
    fn receipt_id_deterministic() {
        let digest = [42u8; 32];
        assert_eq!(ReceiptId::from_digest(&digest), ReceiptId::from_digest(&digest));
        let other = [43u8; 32];
        assert_ne!(ReceiptId::from_digest(&digest), ReceiptId::from_digest(&other));
    }

    #[test]
    fn publication_id_is_map_key() {
        use std::collections::HashMap;
        let mut m = HashMap::new();
        m.insert(PublicationId::new(ProfileId(1), 1), "a");
        m.insert(PublicationId::new(ProfileId(1), 2), "b");
        assert_eq!(m.len(), 2);
        assert_eq!(m[&PublicationId::new(ProfileId(1), 1)], "a");
    }

    #[test]
    fn serde_roundtrips() {
        let id = PublicationId::new(ProfileId(9), 4);
        let json = serde_json::to_string(&id).unwrap();
        let back: PublicationId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);

        let c = CurrencyId::new("BCT");
        let json = serde_json::to_string(&c).unwrap();
        let back: CurrencyId = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}

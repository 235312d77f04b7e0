//! Write-once storage of publication terms.
//!
//! One entry per publication that adopted the module, keyed by publication
//! identity. Entries are created exactly once at attach time and never
//! mutated or deleted afterwards — the map's API makes the "terms never
//! change" invariant structural rather than conventional.

use std::collections::HashMap;

use opencollect_types::{CollectError, PublicationId, PublicationTerms, Result};

/// Keyed, write-once store of validated publication terms.
#[derive(Debug, Default)]
pub struct TermsStore {
    terms: HashMap<PublicationId, PublicationTerms>,
}

impl TermsStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: HashMap::new(),
        }
    }

    /// Store terms for a publication. Write-once: a second attach against
    /// the same publication fails and leaves the first entry untouched.
    ///
    /// # Errors
    /// `TermsAlreadyAttached` if an entry already exists.
    pub fn put(&mut self, pub_id: PublicationId, terms: PublicationTerms) -> Result<()> {
        if self.terms.contains_key(&pub_id) {
            return Err(CollectError::TermsAlreadyAttached(pub_id));
        }
        self.terms.insert(pub_id, terms);
        Ok(())
    }

    /// Look up the terms for a publication.
    ///
    /// # Errors
    /// `PublicationNotFound` if the publication never attached the module.
    pub fn get(&self, pub_id: PublicationId) -> Result<&PublicationTerms> {
        self.terms
            .get(&pub_id)
            .ok_or(CollectError::PublicationNotFound(pub_id))
    }

    /// Whether terms exist for a publication.
    #[must_use]
    pub fn contains(&self, pub_id: PublicationId) -> bool {
        self.terms.contains_key(&pub_id)
    }

    /// Number of publications with attached terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no publication has attached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencollect_types::{ActorId, CurrencyId, ProfileId};

    fn terms(price: u128) -> PublicationTerms {
        PublicationTerms {
            price,
            currency: CurrencyId::new("BCT"),
            recipient: ActorId(1),
            referral_fee_bps: 250,
        }
    }

    #[test]
    fn put_then_get() {
        let mut store = TermsStore::new();
        let id = PublicationId::new(ProfileId(1), 1);
        store.put(id, terms(10_000)).unwrap();
        assert_eq!(store.get(id).unwrap().price, 10_000);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn second_put_rejected_and_first_kept() {
        let mut store = TermsStore::new();
        let id = PublicationId::new(ProfileId(1), 1);
        store.put(id, terms(10_000)).unwrap();

        let err = store.put(id, terms(20_000)).unwrap_err();
        assert!(matches!(err, CollectError::TermsAlreadyAttached(p) if p == id));
        assert_eq!(store.get(id).unwrap().price, 10_000);
    }

    #[test]
    fn missing_entry_is_not_found() {
        let store = TermsStore::new();
        let id = PublicationId::new(ProfileId(2), 7);
        let err = store.get(id).unwrap_err();
        assert!(matches!(err, CollectError::PublicationNotFound(p) if p == id));
        assert!(store.is_empty());
    }

    #[test]
    fn per_profile_indexes_are_distinct() {
        let mut store = TermsStore::new();
        store
            .put(PublicationId::new(ProfileId(1), 1), terms(10_000))
            .unwrap();
        store
            .put(PublicationId::new(ProfileId(1), 2), terms(20_000))
            .unwrap();
        store
            .put(PublicationId::new(ProfileId(2), 1), terms(30_000))
            .unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.get(PublicationId::new(ProfileId(2), 1)).unwrap().price,
            30_000
        );
    }
}

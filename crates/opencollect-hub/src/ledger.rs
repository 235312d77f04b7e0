//! In-memory fungible-token ledger with pull allowances and a retirement
//! sink.
//!
//! The module never holds funds: it pulls from the collector under a prior
//! authorization, the way an on-chain module would via `transferFrom`.
//! Retired amounts leave circulation entirely — the ledger tracks them so
//! supply conservation (`circulating == minted - retired`) stays checkable
//! at any point.

use std::collections::HashMap;

use opencollect_module::CurrencyGateway;
use opencollect_types::{ActorId, Amount, CollectError, CurrencyId, Result};

/// Balances, allowances, and supply accounting for any number of currencies.
#[derive(Debug, Default)]
pub struct TokenLedger {
    /// Per-(actor, currency) balances.
    balances: HashMap<(ActorId, CurrencyId), Amount>,
    /// Per-(payer, currency) pull authorization granted to the module.
    allowances: HashMap<(ActorId, CurrencyId), Amount>,
    /// Total ever minted, per currency.
    minted: HashMap<CurrencyId, Amount>,
    /// Total ever retired, per currency.
    retired: HashMap<CurrencyId, Amount>,
}

impl TokenLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint `amount` of `currency` to `actor`.
    pub fn mint(&mut self, actor: ActorId, currency: &CurrencyId, amount: Amount) {
        *self
            .balances
            .entry((actor, currency.clone()))
            .or_default() += amount;
        *self.minted.entry(currency.clone()).or_default() += amount;
    }

    /// Authorize the module to pull up to `amount` of `currency` from
    /// `payer`. Replaces any previous authorization.
    pub fn approve(&mut self, payer: ActorId, currency: &CurrencyId, amount: Amount) {
        self.allowances.insert((payer, currency.clone()), amount);
    }

    /// Current balance of `actor` in `currency`.
    #[must_use]
    pub fn balance_of(&self, actor: ActorId, currency: &CurrencyId) -> Amount {
        self.balances
            .get(&(actor, currency.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// Remaining pull authorization for `payer` in `currency`.
    #[must_use]
    pub fn allowance(&self, payer: ActorId, currency: &CurrencyId) -> Amount {
        self.allowances
            .get(&(payer, currency.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// Circulating supply: sum of all balances in `currency`.
    #[must_use]
    pub fn circulating_supply(&self, currency: &CurrencyId) -> Amount {
        self.balances
            .iter()
            .filter(|((_, c), _)| c == currency)
            .map(|(_, amount)| amount)
            .sum()
    }

    /// Total retired (removed from circulation) in `currency`.
    #[must_use]
    pub fn retired_supply(&self, currency: &CurrencyId) -> Amount {
        self.retired.get(currency).copied().unwrap_or(0)
    }

    /// Verify supply conservation for `currency`:
    /// `circulating == minted - retired`.
    ///
    /// # Errors
    /// `Internal` describing the imbalance.
    pub fn verify_supply(&self, currency: &CurrencyId) -> Result<()> {
        let minted = self.minted.get(currency).copied().unwrap_or(0);
        let expected = minted - self.retired_supply(currency);
        let actual = self.circulating_supply(currency);
        if actual != expected {
            return Err(CollectError::Internal(format!(
                "supply imbalance for {currency}: circulating {actual} != expected {expected}"
            )));
        }
        Ok(())
    }

    /// Check allowance then balance cover `amount`, without mutating.
    fn check_debit(&self, payer: ActorId, currency: &CurrencyId, amount: Amount) -> Result<()> {
        let authorized = self.allowance(payer, currency);
        if authorized < amount {
            return Err(CollectError::InsufficientAllowance {
                needed: amount,
                available: authorized,
            });
        }
        let balance = self.balance_of(payer, currency);
        if balance < amount {
            return Err(CollectError::InsufficientBalance {
                needed: amount,
                available: balance,
            });
        }
        Ok(())
    }

    /// Debit `payer`, consuming allowance. Caller has already checked.
    fn debit(&mut self, payer: ActorId, currency: &CurrencyId, amount: Amount) {
        *self
            .balances
            .get_mut(&(payer, currency.clone()))
            .expect("checked balance exists") -= amount;
        *self
            .allowances
            .get_mut(&(payer, currency.clone()))
            .expect("checked allowance exists") -= amount;
    }
}

impl CurrencyGateway for TokenLedger {
    fn preflight_debit(
        &self,
        payer: ActorId,
        currency: &CurrencyId,
        amount: Amount,
    ) -> Result<()> {
        self.check_debit(payer, currency, amount)
    }

    fn transfer_from(
        &mut self,
        payer: ActorId,
        payee: ActorId,
        currency: &CurrencyId,
        amount: Amount,
    ) -> Result<()> {
        self.check_debit(payer, currency, amount)?;
        self.debit(payer, currency, amount);
        *self
            .balances
            .entry((payee, currency.clone()))
            .or_default() += amount;
        Ok(())
    }

    fn retire_from(
        &mut self,
        payer: ActorId,
        currency: &CurrencyId,
        amount: Amount,
    ) -> Result<()> {
        self.check_debit(payer, currency, amount)?;
        self.debit(payer, currency, amount);
        *self.retired.entry(currency.clone()).or_default() += amount;

        tracing::debug!(payer = %payer, currency = %currency, amount, "Retired from circulation");
        Ok(())
    }
}

//! Platform-level module configuration: currency whitelist, treasury
//! identity, and the treasury fee rate.
//!
//! The whitelist is consulted by the module only at attach time. Removing a
//! currency later leaves already-attached publications settling in it — an
//! accepted property, asserted in the end-to-end tests.

use std::collections::HashSet;

use opencollect_module::{CurrencyWhitelist, FeeConfig};
use opencollect_types::constants::{BPS_DENOMINATOR, DEFAULT_TREASURY_FEE_BPS};
use opencollect_types::{ActorId, CollectError, CurrencyId, Result};

/// Governance-controlled module globals.
#[derive(Debug)]
pub struct ModuleGlobals {
    whitelist: HashSet<CurrencyId>,
    treasury: ActorId,
    treasury_fee_bps: u16,
}

impl ModuleGlobals {
    /// Create globals with an empty whitelist and the default fee rate.
    #[must_use]
    pub fn new(treasury: ActorId) -> Self {
        Self {
            whitelist: HashSet::new(),
            treasury,
            treasury_fee_bps: DEFAULT_TREASURY_FEE_BPS,
        }
    }

    /// Add or remove a currency from the whitelist.
    pub fn whitelist_currency(&mut self, currency: CurrencyId, whitelisted: bool) {
        if whitelisted {
            self.whitelist.insert(currency);
        } else {
            self.whitelist.remove(&currency);
        }
    }

    /// Update the platform-wide treasury fee rate.
    ///
    /// # Errors
    /// `Internal` if `bps` exceeds the basis-point denominator.
    pub fn set_treasury_fee_bps(&mut self, bps: u16) -> Result<()> {
        if bps > BPS_DENOMINATOR {
            return Err(CollectError::Internal(format!(
                "treasury fee {bps} bps exceeds max {BPS_DENOMINATOR}"
            )));
        }
        self.treasury_fee_bps = bps;
        Ok(())
    }
}

impl CurrencyWhitelist for ModuleGlobals {
    fn is_whitelisted(&self, currency: &CurrencyId) -> bool {
        self.whitelist.contains(currency)
    }
}

impl FeeConfig for ModuleGlobals {
    fn treasury_fee_bps(&self) -> u16 {
        self.treasury_fee_bps
    }

    fn treasury(&self) -> ActorId {
        self.treasury
    }
}

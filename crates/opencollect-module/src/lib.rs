//! # opencollect-module
//!
//! **The retire-collect settlement core.**
//!
//! A publisher attaches a price, a currency, a nominal recipient, and a
//! referral-fee rate to a publication. When a follower collects it, the
//! price is split three ways: a treasury fee on the gross price, a referral
//! fee on the remainder (when the collect came through a mirror), and a
//! retired share that is permanently removed from circulation. The nominal
//! recipient never receives funds.
//!
//! The core is host-agnostic: the social graph, the currency whitelist, the
//! fee configuration, and the currency ledger are consumed through the
//! traits in [`collab`]. It has:
//!
//! - **Exact arithmetic**: integer floor division, conservation enforced
//!   (`treasury + referral + retired == price`)
//! - **Fail-closed attempts**: any check failing aborts with zero side effects
//! - **Write-once terms**: attached terms are immutable by construction
//! - **No per-collect state**: collecting twice settles twice, identically

pub mod collab;
pub mod engine;
pub mod gate;
pub mod module;
pub mod params;
pub mod store;

pub use collab::{CurrencyGateway, CurrencyWhitelist, FeeConfig, FollowGraph, PublicationGraph};
pub use engine::{settle, split_price, verify_claim};
pub use gate::Eligibility;
pub use module::RetireCollectModule;
pub use params::validate_attach;
pub use store::TermsStore;

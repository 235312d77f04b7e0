//! # opencollect-hub
//!
//! **In-memory reference host for the OpenCollect settlement module.**
//!
//! The settlement core consumes its collaborators through traits; this crate
//! provides working implementations of all of them so the module can be run
//! and tested end to end without a real platform behind it:
//!
//! - [`ModuleGlobals`]: currency whitelist, treasury identity, treasury fee rate
//! - [`SocialGraph`]: profiles, posts, mirrors, follow edges, referrer resolution
//! - [`TokenLedger`]: balances, pull allowances, transfers, and the retirement sink
//!
//! Supply conservation is checkable at any time:
//! `circulating == minted - retired` per currency.

pub mod globals;
pub mod graph;
pub mod ledger;

pub use globals::ModuleGlobals;
pub use graph::SocialGraph;
pub use ledger::TokenLedger;

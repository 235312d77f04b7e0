//! # opencollect-types
//!
//! Shared types, errors, and constants for the **OpenCollect** retire-collect
//! settlement module.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ProfileId`], [`PublicationId`], [`ActorId`], [`CurrencyId`], [`ReceiptId`]
//! - **Terms model**: [`PublicationTerms`], [`AttachConfig`], [`CollectClaim`], [`FeeSplit`]
//! - **Receipt model**: [`SettlementReceipt`]
//! - **Errors**: [`CollectError`] with `OC_ERR_` prefix codes
//! - **Constants**: basis-point denominator, price floor, defaults

pub mod constants;
pub mod error;
pub mod ids;
pub mod receipt;
pub mod terms;

// Re-export all primary types at crate root for ergonomic imports:
//   use opencollect_types::{PublicationTerms, FeeSplit, CollectError, ...};

pub use error::*;
pub use ids::*;
pub use receipt::*;
pub use terms::*;

// Constants are accessed via `opencollect_types::constants::FOO`
// (not re-exported to avoid name collisions).

//! AssetDeck Core - asset models, valuation, and list rendering policy.
//!
//! This crate contains the non-visual core of the AssetDeck portfolio app:
//! classification of raw asset records into display variants, derivation of
//! the financial metrics shown on asset cards, and the virtualization policy
//! that decides which list rows carry real cards vs. placeholders. It is
//! store-agnostic and defines traits that are implemented by the platform
//! adapters (mobile shell, storage, price services).

pub mod assets;
pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod listview;
pub mod portfolio;
pub mod utils;
pub mod valuation;

// Re-export common types from the domain modules
pub use assets::*;
pub use dispatch::*;
pub use listview::*;
pub use portfolio::*;
pub use valuation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

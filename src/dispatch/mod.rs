//! # Layer 2: Dispatch
//!
//! Selects exactly one serialization strategy per type.
//!
//! Two views of the same ordered rule list:
//!
//! - [`Strategy`] — the closed set of strategies with `pick` / `pick_any`
//!   over a probed [`crate::detect::Caps`] report. Data-level, total,
//!   exhaustively matchable.
//! - the autoref chain ([`chain`]) behind `serialize!` / `serialize_any!` —
//!   the same order realized at the type level with zero runtime cost.

pub mod chain;
pub mod strategy;

pub use chain::{Dispatch, ViaFloating, ViaIntegral, ViaMethod, ViaText};
pub use strategy::{Strategy, UNKNOWN_TEXT};

#[cfg(feature = "permissive")]
pub use chain::{ViaCallable, ViaUnknown};

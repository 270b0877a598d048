#![cfg_attr(not(feature = "std"), no_std)]

//! # sercaps
//!
//! Capability-probed serialization with compile-time strategy selection.
//!
//! **Structural capability detection and priority-ordered dispatch for Rust.**
//!
//! ## Architecture
//!
//! `sercaps` answers two questions about a type, both at compile time:
//! which serialization capabilities does it have, and which single strategy
//! should render it?
//!
//! ### 1. Probing
//! Each capability is an ordinary trait (`Serialize`, `ToText`, ...).
//! Detection uses **Inherent Const Fallback**: a trait const defaulting to
//! `false`, shadowed by an inherent `true` const gated on the capability
//! bound. Absence is a normal negative result, never a build failure.
//!
//! ```text
//! Type -> Probe<T> -> inherent const (bound holds)  -> true
//!                  -> fallback trait const          -> false
//! ```
//!
//! ### 2. Dispatch
//! Strategies live at distinct reference depths of a `Dispatch` wrapper
//! (**Autoref/Method Priority**). Method resolution walks depths from the
//! outermost in and skips levels whose bounds fail, so exactly one strategy
//! is ever viable for a given type:
//!
//! ```text
//! &&&&&Dispatch   serialize method
//! &&&&Dispatch    callable serialize member   (permissive chain only)
//! &&&Dispatch     integral
//! &&Dispatch      floating-point
//! &Dispatch       to_text
//! Dispatch        sentinel                    (permissive chain only)
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Capability Vocabulary (caps)                            |
//! |  - Serialize, SerializeMember, CallableSerialize, ToText          |
//! |  - Integral, Floating (closed numeric classifications)            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Probing (detect)                                        |
//! |  - Probe<T> const fallbacks, Caps report                          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Dispatch (dispatch)                                     |
//! |  - Strategy (closed set), autoref chain, serialize!/serialize_any!|
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Policy
//!
//! `serialize!` is the canonical, **strict** entry point: a type matching no
//! strategy is rejected at compile time with a diagnostic naming the type.
//! `serialize_any!` (feature `permissive`, on by default) is the permissive
//! variant: it additionally accepts callable `serialize` members and renders
//! unmatched types as the `"not a recognized type"` sentinel.
//!
//! ## Quick Start
//!
//! ```
//! use sercaps::{probe, serialize};
//! use sercaps::caps::Serialize;
//!
//! struct Report;
//!
//! impl Serialize for Report {
//!     fn serialize(&self) -> String {
//!         "report".to_owned()
//!     }
//! }
//!
//! assert!(probe!(Report: Serialize));
//! assert!(!probe!(Report: ToText));
//!
//! assert_eq!(serialize!(Report), "report");
//! assert_eq!(serialize!(5), "integral: 5");
//! assert_eq!(serialize!(7.7), "numeric: 7.7");
//! ```

// Allow `::sercaps` paths to work inside the crate itself (proc-macro output)
extern crate self as sercaps;

extern crate alloc;

// Re-export paste for the impl_probe! machinery
pub use paste;

// =============================================================================
// Layer 0: Capability Vocabulary
// =============================================================================
pub mod caps;

// =============================================================================
// Layer 1: Probing
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 2: Dispatch
// =============================================================================
pub mod dispatch;

// Syntax macros (probe_match!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use detect::{Caps, Probe};
pub use dispatch::Strategy;

// Re-export proc-macros
pub use macros::{caps_of, probe};

/// Common items for the capability-dispatch system.
pub mod prelude {
    pub use crate::caps::{
        CallableSerialize, Floating, Integral, Serialize, SerializeMember, ToText,
    };
    pub use crate::detect::{Caps, Probe};
    pub use crate::dispatch::Strategy;
    pub use macros::{caps_of, probe};
    // Note: serialize!, serialize_any!, probe_match! are #[macro_export] so
    // they live at the crate root.
}

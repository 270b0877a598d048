//! # Layer 1: Probing
//!
//! Compile-time detection of the capability vocabulary, with graceful
//! negative results.
//!
//! ## Public API
//!
//! Use the `probe!` macro for detection:
//!
//! ```
//! use sercaps::probe;
//!
//! // Single capability
//! let b = probe!(String: ToText);
//!
//! // Boolean expressions
//! let c = probe!(i32: Integral & !Serialize);
//! # assert!(b && c);
//! ```
//!
//! Use `caps_of!` for a full per-type report:
//!
//! ```
//! use sercaps::caps_of;
//!
//! let caps = caps_of!(i32);
//! assert!(caps.is_integral && caps.is_arithmetic());
//! assert!(!caps.has_serialize);
//! ```

pub mod probe;

pub use probe::{
    CallableSerializeFallback, FloatingFallback, IntegralFallback, Probe, SerializeFallback,
    SerializeMemberFallback, ToTextFallback,
};

/// Per-type capability report.
///
/// One flag per probed capability, resolved at build time by `caps_of!`.
/// For every type, every flag is exactly one of true/false; no combination
/// of flags is an error at this layer. Which flags *win* is the
/// dispatcher's concern ([`crate::dispatch::Strategy`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caps {
    pub has_serialize: bool,
    pub has_serialize_member: bool,
    pub has_callable_serialize: bool,
    pub has_to_text: bool,
    pub is_integral: bool,
    pub is_floating: bool,
}

impl Caps {
    /// A report with every capability absent.
    pub const NONE: Caps = Caps {
        has_serialize: false,
        has_serialize_member: false,
        has_callable_serialize: false,
        has_to_text: false,
        is_integral: false,
        is_floating: false,
    };

    /// Derived disjunction of the numeric classifications.
    pub const fn is_arithmetic(&self) -> bool {
        self.is_integral || self.is_floating
    }
}

//! Closed strategy set and selection order.
//!
//! The dispatch rule is an ordered list of (capability predicate, strategy)
//! pairs, first match wins. Expressing it over [`Caps`] keeps the order and
//! the mutual exclusion in one place; the autoref chain in `chain` realizes
//! the same order at the type level.

use crate::detect::Caps;
use alloc::format;
use alloc::string::String;
use core::fmt::Display;

/// Sentinel rendered by the permissive chain for unmatched types.
pub const UNKNOWN_TEXT: &str = "not a recognized type";

/// The closed set of serialization strategies, in priority order.
///
/// `Callable` and `Unknown` belong to the permissive chain only; the strict
/// chain never selects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Invoke the type's own `serialize` method.
    Method,
    /// Invoke the callable `serialize` member.
    Callable,
    /// Tag and render the decimal integer value.
    Integral,
    /// Tag and render the decimal floating-point value.
    Floating,
    /// Invoke the `to_text` conversion.
    Text,
    /// Nothing matched; render the sentinel.
    Unknown,
}

impl Strategy {
    /// Strict selection: Method > Integral > Floating > Text.
    ///
    /// `None` means no strategy exists; under the strict chain that type is
    /// rejected at compile time.
    pub const fn pick(caps: &Caps) -> Option<Strategy> {
        if caps.has_serialize {
            Some(Strategy::Method)
        } else if caps.is_integral {
            Some(Strategy::Integral)
        } else if caps.is_floating {
            Some(Strategy::Floating)
        } else if caps.has_to_text {
            Some(Strategy::Text)
        } else {
            None
        }
    }

    /// Permissive selection: Method > Callable > Integral > Floating > Text,
    /// with `Unknown` closing the chain. Total over all reports.
    pub const fn pick_any(caps: &Caps) -> Strategy {
        if caps.has_serialize {
            Strategy::Method
        } else if caps.has_callable_serialize {
            Strategy::Callable
        } else if caps.is_integral {
            Strategy::Integral
        } else if caps.is_floating {
            Strategy::Floating
        } else if caps.has_to_text {
            Strategy::Text
        } else {
            Strategy::Unknown
        }
    }
}

// =============================================================================
// Rendering helpers (shared by both chains)
// =============================================================================

pub(crate) fn integral_text(value: &impl Display) -> String {
    format!("integral: {value}")
}

pub(crate) fn numeric_text(value: &impl Display) -> String {
    format!("numeric: {value}")
}

//! Procedural macros for the sercaps capability-dispatch system
//!
//! | Macro | Purpose |
//! |-------|---------|
//! | `probe!` | boolean capability check on a concrete type |
//! | `caps_of!` | full capability report (`Caps`) for a concrete type |
//!
//! Both expand to self-contained inherent-const fallback probes, so call
//! sites need nothing in scope and absence of a capability is a plain
//! `false` rather than a build failure.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod bool_expr;
mod probe;
mod report;

/// Check capabilities of concrete types, with boolean expression support.
///
/// # Syntax: `probe!(Type: Expr, ...)`
///
/// `Expr` combines capability names with `&`, `|`, `!` and parentheses.
/// Known names (`Serialize`, `SerializeMember`, `CallableSerialize`,
/// `ToText`, `Integral`, `Floating`, and the derived `Arithmetic`) resolve
/// to the sercaps capability vocabulary; `Member` and `Callable` are
/// shorthands for `SerializeMember` and `CallableSerialize`. Any other path
/// is probed as a custom trait. Known names and shorthands always win over
/// a user trait spelled the same way; qualify such a trait with its module
/// path to probe it. Multiple comma-separated checks must all pass.
///
/// ```ignore
/// use sercaps::probe;
///
/// // Single capability
/// assert!(probe!(i32: Integral));
/// assert!(!probe!(i32: Floating));
///
/// // Boolean expressions
/// assert!(probe!(i32: Integral & !Serialize));
/// assert!(probe!(f64: Arithmetic));
/// assert!(probe!(String: (ToText | Serialize) & !Integral));
///
/// // Multiple checks (all must pass)
/// assert!(probe!(i32: Integral, f64: Floating));
///
/// // Custom traits work on concrete types
/// trait Marker {}
/// impl Marker for String {}
/// assert!(probe!(String: Marker));
/// ```
///
/// # Limitation
///
/// Probing resolves against the concrete type spelled at the call site; a
/// bare generic parameter `T` always reads as having no capabilities.
#[proc_macro]
pub fn probe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as probe::ProbeInput);
    probe::expand_probe(input).into()
}

/// Build a `sercaps::Caps` report for a concrete type.
///
/// One probe per capability; `is_arithmetic()` is derived on the report.
///
/// ```ignore
/// use sercaps::caps_of;
///
/// let caps = caps_of!(i32);
/// assert!(caps.is_integral);
/// assert!(!caps.has_serialize);
/// ```
#[proc_macro]
pub fn caps_of(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as report::ReportInput);
    report::expand_caps_of(input).into()
}

//! Tests for caps_of! reports and the closed Strategy set
//!
//! The report is total: every capability resolves to exactly one of
//! true/false for every type. Strategy::pick / pick_any apply the ordered
//! rule list to a report, so the priority and exclusion laws are checkable
//! as plain data.

use sercaps::caps::{Serialize, SerializeMember, ToText};
use sercaps::{Caps, Strategy, caps_of};

// =============================================================================
// Fixtures
// =============================================================================

struct Tagged;

impl Serialize for Tagged {
    fn serialize(&self) -> String {
        "tagged".into()
    }
}

struct Derived;

impl ToText for Derived {
    fn to_text(&self) -> String {
        "base".into()
    }
}

impl Serialize for Derived {
    fn serialize(&self) -> String {
        "derived".into()
    }
}

struct Functor {
    serialize: fn() -> String,
}

impl SerializeMember for Functor {
    type Member = fn() -> String;

    fn serialize_member(&self) -> &Self::Member {
        &self.serialize
    }
}

struct Opaque;

// =============================================================================
// Report Contents
// =============================================================================

#[test]
fn test_integral_report() {
    let caps = caps_of!(i32);
    assert!(caps.is_integral);
    assert!(caps.is_arithmetic());
    assert!(!caps.is_floating);
    assert!(!caps.has_serialize);
    assert!(!caps.has_to_text);
}

#[test]
fn test_floating_report() {
    let caps = caps_of!(f64);
    assert!(caps.is_floating);
    assert!(caps.is_arithmetic());
    assert!(!caps.is_integral);
}

#[test]
fn test_opaque_report_is_all_false() {
    assert_eq!(caps_of!(Opaque), Caps::NONE);
}

#[test]
fn test_functor_report() {
    let caps = caps_of!(Functor);
    assert!(caps.has_serialize_member);
    assert!(caps.has_callable_serialize);
    assert!(!caps.has_serialize);
}

#[test]
fn test_reports_are_deterministic() {
    assert_eq!(caps_of!(Tagged), caps_of!(Tagged));
    assert_eq!(caps_of!(String), caps_of!(String));
}

// =============================================================================
// Strategy Selection Laws
// =============================================================================

#[test]
fn test_strict_selection() {
    assert_eq!(Strategy::pick(&caps_of!(Tagged)), Some(Strategy::Method));
    assert_eq!(Strategy::pick(&caps_of!(i32)), Some(Strategy::Integral));
    assert_eq!(Strategy::pick(&caps_of!(f64)), Some(Strategy::Floating));
    assert_eq!(Strategy::pick(&caps_of!(String)), Some(Strategy::Text));
    assert_eq!(Strategy::pick(&caps_of!(Opaque)), None);
}

#[test]
fn test_priority_law_method_over_text() {
    // Derived satisfies both the method and the text capability; the rule
    // list must deterministically pick the method, never both or neither.
    let caps = caps_of!(Derived);
    assert!(caps.has_serialize && caps.has_to_text);
    assert_eq!(Strategy::pick(&caps), Some(Strategy::Method));
    assert_eq!(Strategy::pick_any(&caps), Strategy::Method);
}

#[test]
fn test_strict_ignores_callable_member() {
    let caps = caps_of!(Functor);
    assert_eq!(Strategy::pick(&caps), None);
    assert_eq!(Strategy::pick_any(&caps), Strategy::Callable);
}

#[test]
fn test_permissive_selection_is_total() {
    assert_eq!(Strategy::pick_any(&caps_of!(Opaque)), Strategy::Unknown);
    assert_eq!(Strategy::pick_any(&caps_of!(i32)), Strategy::Integral);
}

#[test]
fn test_selection_agrees_with_strict_where_defined() {
    // Wherever the strict list selects, the permissive list selects the
    // same strategy (it only adds lower-ranked rules).
    for caps in [
        caps_of!(Tagged),
        caps_of!(Derived),
        caps_of!(i32),
        caps_of!(f64),
        caps_of!(String),
    ] {
        let strict = Strategy::pick(&caps).expect("strategy exists");
        assert_eq!(Strategy::pick_any(&caps), strict);
    }
}

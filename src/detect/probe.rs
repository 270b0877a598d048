//! Inherent-const fallback probing machinery.
//!
//! For each capability trait `C` we want to detect:
//! 1. Define a fallback trait with `const HAS_C: bool = false`
//! 2. Implement the fallback for `Probe<T>` for all `T`
//! 3. Implement an inherent const `HAS_C = true` for `Probe<T>` where `T: C`
//!
//! When resolving `Probe::<Concrete>::HAS_C`, the compiler:
//! - If `Concrete: C`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! Absence of a capability is a normal `false`, never a build failure, and
//! no code runs: every answer is decided from the type's declared interface.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<T>()`. The `probe!`
//! macro shares the limitation and exists so call sites need none of the
//! fallback traits in scope.

use core::marker::PhantomData;

/// Probing wrapper type.
///
/// Reading a probe const for a type without the capability requires the
/// matching fallback trait in scope; prefer the `probe!` macro, which is
/// self-contained.
pub struct Probe<T: ?Sized>(PhantomData<T>);

// =============================================================================
// Capability Probes (generated)
// =============================================================================

/// Generate fallback trait + inherent const for a capability trait.
macro_rules! impl_probe {
    ($Trait:ident => $CONST:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const $CONST: bool = false; }
            impl<T: ?Sized> [<$Trait Fallback>] for Probe<T> {}
            impl<T: ?Sized + crate::caps::$Trait> Probe<T> { pub const $CONST: bool = true; }
        }
    };
}

impl_probe!(Serialize => HAS_SERIALIZE);
impl_probe!(SerializeMember => HAS_SERIALIZE_MEMBER);
impl_probe!(CallableSerialize => HAS_CALLABLE_SERIALIZE);
impl_probe!(ToText => HAS_TO_TEXT);
impl_probe!(Integral => IS_INTEGRAL);
impl_probe!(Floating => IS_FLOATING);

// No IS_ARITHMETIC const: two overlapping inherent impls (Integral, Floating)
// may not both define it, and the compiler cannot see their disjointness.
// Arithmetic is the derived disjunction, see `Caps::is_arithmetic` and the
// `Arithmetic` name in `probe!`.

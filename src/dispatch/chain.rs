//! Autoref priority chain.
//!
//! One trait per priority level, each implemented at a distinct reference
//! depth of [`Dispatch`]. Method resolution walks the deref chain from the
//! outermost reference inward and skips any level whose capability bound
//! does not hold, so for every type at most one `render` candidate survives
//! and the highest-priority capability always wins.
//!
//! The chain only resolves against a concrete call-site type, which is why
//! the public surface is the `serialize!` / `serialize_any!` macros rather
//! than a generic function.
//!
//! The call sites take one more reference than the deepest level (six for a
//! depth-5 chain). Method probing tries receiver types, by value before
//! autoref, so the by-value candidate at each deref step is then exactly the
//! next level down; anything shallower would let a lower level's receiver
//! type match by value ahead of a higher level's autoref match.
//!
//! Levels, outermost first:
//!
//! | Depth | Trait | Capability | Chain |
//! |-------|-------------|----------------------|------------|
//! | 5 | [`ViaMethod`] | `Serialize` | both |
//! | 4 | [`ViaCallable`] | `CallableSerialize` | permissive |
//! | 3 | [`ViaIntegral`] | `Integral` | both |
//! | 2 | [`ViaFloating`] | `Floating` | both |
//! | 1 | [`ViaText`] | `ToText` | both |
//! | 0 | [`ViaUnknown`] | (always) | permissive |

use crate::caps::{Floating, Integral, Serialize, ToText};
use alloc::string::String;

#[cfg(feature = "permissive")]
use crate::caps::CallableSerialize;

use super::strategy::{integral_text, numeric_text};

#[cfg(feature = "permissive")]
use super::strategy::UNKNOWN_TEXT;

/// Dispatch wrapper pinning the value behind the reference-depth chain.
pub struct Dispatch<'a, T: ?Sized>(pub &'a T);

/// Priority 5: the type's own `serialize` method, returned unmodified.
pub trait ViaMethod {
    fn render(&self) -> String;
}

impl<T: ?Sized + Serialize> ViaMethod for &&&&&Dispatch<'_, T> {
    #[inline]
    fn render(&self) -> String {
        self.0.serialize()
    }
}

/// Priority 4 (permissive chain): invoke the callable `serialize` member.
#[cfg(feature = "permissive")]
pub trait ViaCallable {
    fn render(&self) -> String;
}

#[cfg(feature = "permissive")]
impl<T: ?Sized + CallableSerialize> ViaCallable for &&&&Dispatch<'_, T> {
    #[inline]
    fn render(&self) -> String {
        self.0.call_serialize()
    }
}

/// Priority 3: tagged decimal rendering of integer types.
pub trait ViaIntegral {
    fn render(&self) -> String;
}

impl<T: ?Sized + Integral> ViaIntegral for &&&Dispatch<'_, T> {
    #[inline]
    fn render(&self) -> String {
        integral_text(&self.0)
    }
}

/// Priority 2: tagged decimal rendering of floating-point types.
pub trait ViaFloating {
    fn render(&self) -> String;
}

impl<T: ?Sized + Floating> ViaFloating for &&Dispatch<'_, T> {
    #[inline]
    fn render(&self) -> String {
        numeric_text(&self.0)
    }
}

/// Priority 1: named render-to-string conversion.
pub trait ViaText {
    fn render(&self) -> String;
}

impl<T: ?Sized + ToText> ViaText for &Dispatch<'_, T> {
    #[inline]
    fn render(&self) -> String {
        self.0.to_text()
    }
}

/// Priority 0 (permissive chain): sentinel for unmatched types.
#[cfg(feature = "permissive")]
pub trait ViaUnknown {
    fn render(&self) -> String;
}

#[cfg(feature = "permissive")]
impl<T: ?Sized> ViaUnknown for Dispatch<'_, T> {
    #[inline]
    fn render(&self) -> String {
        UNKNOWN_TEXT.into()
    }
}

/// Render a value by its highest-priority capability (strict chain).
///
/// Selection order: `Serialize` method > integral > floating-point >
/// `ToText`. A type matching none of these is rejected at compile time;
/// the error names the type and the missing `render` candidates.
///
/// ```
/// use sercaps::serialize;
///
/// assert_eq!(serialize!(5), "integral: 5");
/// assert_eq!(serialize!("plain text"), "plain text");
/// ```
#[macro_export]
macro_rules! serialize {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::dispatch::{
            ViaFloating as _, ViaIntegral as _, ViaMethod as _, ViaText as _,
        };
        (&&&&&&$crate::dispatch::Dispatch(&$value)).render()
    }};
}

/// Render a value by its highest-priority capability (permissive chain).
///
/// Extends the strict order with the callable-member strategy directly
/// below the method strategy, and is total: unmatched types render the
/// `"not a recognized type"` sentinel instead of failing the build.
///
/// ```
/// use sercaps::serialize_any;
///
/// struct Opaque;
///
/// assert_eq!(serialize_any!(Opaque), "not a recognized type");
/// ```
#[cfg(feature = "permissive")]
#[macro_export]
macro_rules! serialize_any {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::dispatch::{
            ViaCallable as _, ViaFloating as _, ViaIntegral as _, ViaMethod as _, ViaText as _,
            ViaUnknown as _,
        };
        (&&&&&&$crate::dispatch::Dispatch(&$value)).render()
    }};
}

//! # Layer 0: Capability Vocabulary
//!
//! Each capability the dispatcher can select on is an ordinary trait.
//! A type opts in by implementing the trait; the prober (`detect`) and the
//! dispatch chain (`dispatch`) resolve the rest at compile time.
//!
//! ## Capabilities
//!
//! | Trait | Meaning |
//! |-------|---------|
//! | [`Serialize`] | zero-argument `serialize` method returning a `String` |
//! | [`SerializeMember`] | a *member* named `serialize`, callable or not |
//! | [`CallableSerialize`] | the member is itself invocable with zero args |
//! | [`ToText`] | explicit named render-to-string conversion |
//! | [`Integral`] / [`Floating`] | closed built-in numeric classifications |
//!
//! `CallableSerialize` is never implemented by hand: it is blanket-derived
//! from `SerializeMember` where the member is a zero-argument callable. A
//! plain data member named `serialize` therefore satisfies
//! `SerializeMember` but not `CallableSerialize` and not `Serialize`.

pub mod numeric;

pub use numeric::{Floating, Integral};

use alloc::string::String;

/// Zero-argument serialization method capability.
///
/// This is the method-call shape: `value.serialize()` with a string result.
/// Member existence alone is not enough; see [`SerializeMember`].
pub trait Serialize {
    fn serialize(&self) -> String;
}

/// A member named `serialize`, independent of callability.
///
/// `Member` is the declared type of the member; the accessor exposes it by
/// reference. Whether the member can actually be invoked is decided by the
/// [`CallableSerialize`] blanket impl, not here.
pub trait SerializeMember {
    type Member;

    fn serialize_member(&self) -> &Self::Member;
}

/// A `serialize` member that is itself invocable with zero arguments.
///
/// Covers function-object member designs (closures, function pointers).
/// Blanket-derived; do not implement directly.
pub trait CallableSerialize {
    fn call_serialize(&self) -> String;
}

impl<T> CallableSerialize for T
where
    T: SerializeMember,
    T::Member: Fn() -> String,
{
    fn call_serialize(&self) -> String {
        (self.serialize_member())()
    }
}

/// Explicit named render-to-string conversion.
///
/// Replaces ambient `to_string`-by-proximity lookup: the conversion is a
/// trait method found by normal trait resolution, so it is discoverable
/// wherever the trait is.
pub trait ToText {
    fn to_text(&self) -> String;
}

// Text renders itself.
impl ToText for str {
    fn to_text(&self) -> String {
        self.into()
    }
}

impl ToText for String {
    fn to_text(&self) -> String {
        self.clone()
    }
}

// Forward through references so `&str` and friends dispatch like their
// referents.
impl<T: ?Sized + ToText> ToText for &T {
    fn to_text(&self) -> String {
        (**self).to_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    struct Functor {
        hook: fn() -> String,
    }

    impl SerializeMember for Functor {
        type Member = fn() -> String;

        fn serialize_member(&self) -> &Self::Member {
            &self.hook
        }
    }

    struct Plain {
        label: String,
    }

    impl SerializeMember for Plain {
        type Member = String;

        fn serialize_member(&self) -> &Self::Member {
            &self.label
        }
    }

    #[test]
    fn callable_member_is_invoked() {
        let f = Functor {
            hook: || "from functor".to_string(),
        };
        assert_eq!(f.call_serialize(), "from functor");
    }

    #[test]
    fn plain_member_is_reachable_but_not_callable() {
        let p = Plain {
            label: "just data".to_string(),
        };
        assert_eq!(p.serialize_member(), "just data");
        // `Plain: CallableSerialize` does not hold; the probe tests in
        // `detect` assert the negative result.
    }

    #[test]
    fn text_renders_itself() {
        assert_eq!("abc".to_text(), "abc");
        assert_eq!(String::from("abc").to_text(), "abc");
    }
}

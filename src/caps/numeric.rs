//! Closed numeric classifications.
//!
//! `Integral` and `Floating` are not structural probes: they are sealed-style
//! markers over the fixed set of built-in numeric types. `Display` is a
//! supertrait so the dispatch chain can render the decimal value.

use core::fmt::Display;

/// Fixed-width or platform integer types.
pub trait Integral: Display {}

/// IEEE floating-point types.
pub trait Floating: Display {}

macro_rules! impl_integral {
    ($($ty:ty),* $(,)?) => {
        $(impl Integral for $ty {})*
    };
}

macro_rules! impl_floating {
    ($($ty:ty),* $(,)?) => {
        $(impl Floating for $ty {})*
    };
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_floating!(f32, f64);

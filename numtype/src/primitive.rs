//! Primitive representations and the promoted domain used by mixed operations.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::num::IntErrorKind;
use std::str::FromStr;

use num_traits::{Num, NumAssignOps};

use crate::ParseNumberError;

mod private {
    pub trait Sealed {}
}

/// Category of a primitive: [`Integral`] or [`Floating`].
pub trait Kind: private::Sealed + 'static {}

/// Marker for integer primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Integral;

/// Marker for floating point primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Floating;

impl private::Sealed for Integral {}
impl private::Sealed for Floating {}

impl Kind for Integral {}
impl Kind for Floating {}

/// A built-in numeric type usable as the representation of a [`Number`](crate::Number).
pub trait Primitive:
    Copy + Default + Debug + Display + FromStr + PartialEq + PartialOrd + Num + NumAssignOps + 'static
{
    type Kind: Kind;

    /// The type name, as written in source.
    const NAME: &'static str;

    /// Promotes the value to the [`Wide`] domain without loss.
    fn widen(self) -> Wide;

    /// Converts back from the [`Wide`] domain with `as` semantics: integers wrap, floats are
    /// truncated towards zero and saturate when converted to integers.
    fn narrow(wide: Wide) -> Self;

    /// Parses trimmed decimal text.
    fn parse_str(input: &str) -> Result<Self, ParseNumberError>;
}

macro_rules! impl_integral {
    ($($ty:ident => $variant:ident($wide:ty)),* $(,)?) => {
        $(
            impl Primitive for $ty {
                type Kind = Integral;

                const NAME: &'static str = stringify!($ty);

                #[inline]
                fn widen(self) -> Wide {
                    Wide::$variant(self as $wide)
                }

                #[inline]
                fn narrow(wide: Wide) -> Self {
                    match wide {
                        Wide::Signed(value) => value as $ty,
                        Wide::Unsigned(value) => value as $ty,
                        Wide::Float(value) => value as $ty,
                    }
                }

                fn parse_str(input: &str) -> Result<Self, ParseNumberError> {
                    let trimmed = input.trim();
                    trimmed.parse::<$ty>().map_err(|error| match error.kind() {
                        IntErrorKind::Empty => ParseNumberError::Empty,
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                            ParseNumberError::out_of_range(trimmed, Self::NAME)
                        }
                        _ => ParseNumberError::malformed(trimmed, Self::NAME),
                    })
                }
            }
        )*
    };
}

macro_rules! impl_floating {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                type Kind = Floating;

                const NAME: &'static str = stringify!($ty);

                #[inline]
                fn widen(self) -> Wide {
                    Wide::Float(self as f64)
                }

                #[inline]
                fn narrow(wide: Wide) -> Self {
                    match wide {
                        Wide::Signed(value) => value as $ty,
                        Wide::Unsigned(value) => value as $ty,
                        Wide::Float(value) => value as $ty,
                    }
                }

                fn parse_str(input: &str) -> Result<Self, ParseNumberError> {
                    let trimmed = input.trim();
                    if trimmed.is_empty() {
                        return Err(ParseNumberError::Empty);
                    }
                    trimmed
                        .parse::<$ty>()
                        .map_err(|_| ParseNumberError::malformed(trimmed, Self::NAME))
                }
            }
        )*
    };
}

impl_integral! {
    i8 => Signed(i128),
    i16 => Signed(i128),
    i32 => Signed(i128),
    i64 => Signed(i128),
    i128 => Signed(i128),
    isize => Signed(i128),
    u8 => Signed(i128),
    u16 => Signed(i128),
    u32 => Signed(i128),
    u64 => Signed(i128),
    usize => Signed(i128),
    u128 => Unsigned(u128),
}

impl_floating!(f32, f64);

/// A primitive value promoted to the widest type of its category.
///
/// Integer arithmetic is exact as long as the result lies in `i128::MIN..=u128::MAX`, and wraps
/// modulo 2<sup>128</sup> beyond. As soon as one side is a float, both sides are computed in `f64`.
/// Comparison is exact across categories.
#[derive(Debug, Clone, Copy)]
pub enum Wide {
    /// Integers other than `u128`, and integer results that fit `i128`.
    Signed(i128),
    /// `u128` values, and integer results above `i128::MAX`.
    Unsigned(u128),
    /// Any floating point value.
    Float(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl ArithOp {
    /// Wording of the native overflow panic.
    pub(crate) fn overflow_message(self) -> &'static str {
        match self {
            Self::Add => "attempt to add with overflow",
            Self::Sub => "attempt to subtract with overflow",
            Self::Mul => "attempt to multiply with overflow",
            Self::Div => "attempt to divide with overflow",
            Self::Rem => "attempt to calculate the remainder with overflow",
        }
    }
}

/// 2^127 as `f64`, exact.
const TWO_POW_127: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
/// 2^128 as `f64`, exact.
const TWO_POW_128: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

impl Wide {
    /// The value as `f64`, rounded to nearest for large integers.
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Signed(value) => value as f64,
            Self::Unsigned(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Computes `self OP rhs`, and whether an integer result left the domain and was wrapped.
    ///
    /// Integer division and remainder by zero panic, as they do natively.
    pub(crate) fn overflowing_apply(self, rhs: Self, op: ArithOp) -> (Self, bool) {
        if self.is_float() || rhs.is_float() {
            let (a, b) = (self.to_f64(), rhs.to_f64());
            let value = match op {
                ArithOp::Add => a + b,
                ArithOp::Sub => a - b,
                ArithOp::Mul => a * b,
                ArithOp::Div => a / b,
                ArithOp::Rem => a % b,
            };
            return (Self::Float(value), false);
        }

        let (a_negative, a) = self.sign_magnitude();
        let (b_negative, b) = rhs.sign_magnitude();
        let (negative, (magnitude, carried)) = match op {
            ArithOp::Add => add_signed(a_negative, a, b_negative, b),
            ArithOp::Sub => add_signed(a_negative, a, !b_negative, b),
            ArithOp::Mul => (a_negative != b_negative, a.overflowing_mul(b)),
            ArithOp::Div => (a_negative != b_negative, (a / b, false)),
            ArithOp::Rem => (a_negative, (a % b, false)),
        };
        let (wide, exceeded) = Self::from_sign_magnitude(negative, magnitude);
        (wide, carried || exceeded)
    }

    fn sign_magnitude(self) -> (bool, u128) {
        match self {
            Self::Signed(value) => (value < 0, value.unsigned_abs()),
            Self::Unsigned(value) => (false, value),
            Self::Float(value) => (value < 0.0, value.abs() as u128),
        }
    }

    /// Rebuilds an integer, wrapping negative magnitudes that do not fit `i128`.
    fn from_sign_magnitude(negative: bool, magnitude: u128) -> (Self, bool) {
        if !negative || magnitude == 0 {
            match i128::try_from(magnitude) {
                Ok(value) => (Self::Signed(value), false),
                Err(_) => (Self::Unsigned(magnitude), false),
            }
        } else if magnitude <= i128::MIN.unsigned_abs() {
            (Self::Signed(0i128.wrapping_sub_unsigned(magnitude)), false)
        } else {
            (Self::Unsigned(magnitude.wrapping_neg()), true)
        }
    }
}

/// Sum of two signed magnitudes, with the carry out of `u128`.
fn add_signed(a_negative: bool, a: u128, b_negative: bool, b: u128) -> (bool, (u128, bool)) {
    if a_negative == b_negative {
        (a_negative, a.overflowing_add(b))
    } else if a >= b {
        (a_negative, (a - b, false))
    } else {
        (b_negative, (b - a, false))
    }
}

fn cmp_signed_unsigned(a: i128, b: u128) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u128).cmp(&b)
    }
}

fn cmp_float_signed(a: f64, b: i128) -> Option<Ordering> {
    if a.is_nan() {
        return None;
    }
    if a < -TWO_POW_127 {
        return Some(Ordering::Less);
    }
    if a >= TWO_POW_127 {
        return Some(Ordering::Greater);
    }
    let whole = a.trunc();
    match (whole as i128).cmp(&b) {
        Ordering::Equal => a.partial_cmp(&whole),
        ordering => Some(ordering),
    }
}

fn cmp_float_unsigned(a: f64, b: u128) -> Option<Ordering> {
    if a.is_nan() {
        return None;
    }
    if a < 0.0 {
        return Some(Ordering::Less);
    }
    if a >= TWO_POW_128 {
        return Some(Ordering::Greater);
    }
    let whole = a.trunc();
    match (whole as u128).cmp(&b) {
        Ordering::Equal => a.partial_cmp(&whole),
        ordering => Some(ordering),
    }
}

impl PartialOrd for Wide {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Signed(a), Self::Signed(b)) => Some(a.cmp(&b)),
            (Self::Unsigned(a), Self::Unsigned(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Signed(a), Self::Unsigned(b)) => Some(cmp_signed_unsigned(a, b)),
            (Self::Unsigned(a), Self::Signed(b)) => Some(cmp_signed_unsigned(b, a).reverse()),
            (Self::Float(a), Self::Signed(b)) => cmp_float_signed(a, b),
            (Self::Signed(a), Self::Float(b)) => cmp_float_signed(b, a).map(Ordering::reverse),
            (Self::Float(a), Self::Unsigned(b)) => cmp_float_unsigned(a, b),
            (Self::Unsigned(a), Self::Float(b)) => cmp_float_unsigned(b, a).map(Ordering::reverse),
        }
    }
}

impl PartialEq for Wide {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(lhs: Wide, rhs: Wide, op: ArithOp) -> Wide {
        lhs.overflowing_apply(rhs, op).0
    }

    #[test]
    fn widen_by_category() {
        assert!(matches!(5u8.widen(), Wide::Signed(5)));
        assert!(matches!(u64::MAX.widen(), Wide::Signed(v) if v == u64::MAX as i128));
        assert!(matches!(u128::MAX.widen(), Wide::Unsigned(u128::MAX)));
        assert!(matches!((-3i16).widen(), Wide::Signed(-3)));
        assert!(matches!(1.5f32.widen(), Wide::Float(v) if v == 1.5));
    }

    #[test]
    fn narrow_uses_as_semantics() {
        assert_eq!(i32::narrow(Wide::Float(7.9)), 7);
        assert_eq!(i32::narrow(Wide::Float(-7.9)), -7);
        assert_eq!(u8::narrow(Wide::Signed(256 + 4)), 4);
        assert_eq!(u8::narrow(Wide::Float(1e10)), u8::MAX);
        assert_eq!(u8::narrow(Wide::Float(f64::NAN)), 0);
        assert_eq!(f32::narrow(Wide::Signed(3)), 3.0);
    }

    #[test]
    fn mixed_arithmetic() {
        let five = 5i32.widen();
        assert_eq!(i32::narrow(apply(five, 1.5f64.widen(), ArithOp::Mul)), 7);
        assert_eq!(f64::narrow(apply(five, 2u8.widen(), ArithOp::Div)), 2.0);
        assert_eq!(i32::narrow(apply(five, 3u128.widen(), ArithOp::Sub)), 2);
        assert_eq!(i8::narrow(apply(i8::MAX.widen(), 1i8.widen(), ArithOp::Add)), i8::MIN);
        assert_eq!(i64::narrow(apply((-7i64).widen(), 2u32.widen(), ArithOp::Rem)), -1);
        assert!(matches!(
            apply(1.0f64.widen(), 0i32.widen(), ArithOp::Div),
            Wide::Float(v) if v.is_infinite()
        ));
    }

    #[test]
    fn mixed_signs_with_u128() {
        let eval = |lhs: Wide, rhs: Wide, op: ArithOp| i64::narrow(apply(lhs, rhs, op));
        assert_eq!(eval((-6i32).widen(), 3u128.widen(), ArithOp::Div), -2);
        assert_eq!(eval((-7i32).widen(), 4u128.widen(), ArithOp::Rem), -3);
        assert_eq!(eval(7u128.widen(), (-2i8).widen(), ArithOp::Div), -3);
        assert_eq!(eval(7u128.widen(), (-2i8).widen(), ArithOp::Rem), 1);
        assert_eq!(eval(5u128.widen(), (-8i64).widen(), ArithOp::Add), -3);
        assert_eq!(eval(5u128.widen(), (-8i64).widen(), ArithOp::Mul), -40);
        assert_eq!(eval((-5i16).widen(), 2u128.widen(), ArithOp::Sub), -7);
    }

    #[test]
    fn overflow_is_reported() {
        let max = u128::MAX.widen();
        assert!(matches!(max.overflowing_apply(1u8.widen(), ArithOp::Add), (Wide::Unsigned(0), true)));
        assert!(matches!(max.overflowing_apply((-1i8).widen(), ArithOp::Add), (_, false)));
        assert!(matches!(
            0u128.widen().overflowing_apply(max, ArithOp::Sub),
            (Wide::Unsigned(1), true)
        ));
        assert!(matches!(
            i128::MIN.widen().overflowing_apply((-1i8).widen(), ArithOp::Div),
            (Wide::Unsigned(v), false) if v == 1 << 127
        ));
        assert!(matches!(
            i128::MIN.widen().overflowing_apply(1u8.widen(), ArithOp::Sub),
            (Wide::Unsigned(v), true) if v == i128::MAX as u128
        ));
        assert!(!1.0f64.widen().overflowing_apply(f64::MAX.widen(), ArithOp::Mul).1);
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics() {
        let _ = apply(1i32.widen(), 0u8.widen(), ArithOp::Div);
    }

    #[test]
    fn exact_comparison() {
        assert!((-1i8).widen() < u128::MAX.widen());
        assert!(u128::MAX.widen() > i128::MAX.widen());
        assert!(5i32.widen() == 5.0f64.widen());
        assert!(5i32.widen() < 5.5f64.widen());
        assert!((-5i32).widen() > (-5.5f64).widen());
        assert!(u128::MAX.widen() < f64::INFINITY.widen());
        assert!(i128::MIN.widen() > f64::NEG_INFINITY.widen());
        assert!((-0.5f64).widen() < 0u128.widen());
        assert_eq!(1i32.widen().partial_cmp(&f64::NAN.widen()), None);
        assert!(1i32.widen() != f64::NAN.widen());
        // 2^53 + 1 is not representable as f64
        let odd = (1i64 << 53) + 1;
        assert!(odd.widen() != ((1i64 << 53) as f64).widen());
    }

    #[test]
    fn parse() {
        assert_eq!(i32::parse_str(" -42 "), Ok(-42));
        assert_eq!(f64::parse_str("2.5"), Ok(2.5));
        assert_eq!(u8::parse_str("   "), Err(ParseNumberError::Empty));
        assert_eq!(f32::parse_str(""), Err(ParseNumberError::Empty));
        assert_eq!(
            u8::parse_str("256"),
            Err(ParseNumberError::out_of_range("256", "u8"))
        );
        assert_eq!(
            u8::parse_str("-1"),
            Err(ParseNumberError::malformed("-1", "u8"))
        );
        assert_eq!(
            i16::parse_str("12a"),
            Err(ParseNumberError::malformed("12a", "i16"))
        );
        assert_eq!(
            f64::parse_str("one"),
            Err(ParseNumberError::malformed("one", "f64"))
        );
    }
}

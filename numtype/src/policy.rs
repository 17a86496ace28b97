//! Policies: default value and text conversion of a number type.
//!
//! A policy is a stateless type chosen per number type and resolved statically. Every method has a
//! default, so a custom policy only overrides what it changes:
//!
//! ```
//! use std::fmt;
//!
//! use numtype::{Number, ParseNumberError, Policy, Primitive, Tag};
//!
//! struct Percent;
//!
//! impl<T: Primitive> Policy<T> for Percent {
//!     fn format(value: T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{value}%")
//!     }
//!
//!     fn parse(input: &str) -> Result<T, ParseNumberError> {
//!         T::parse_str(input.trim().trim_end_matches('%'))
//!     }
//! }
//!
//! #[derive(Tag)]
//! struct Humidity;
//!
//! type Rh = Number<u8, Humidity, numtype::DefaultCaps, Percent>;
//!
//! let rh: Rh = "45%".parse().unwrap();
//! assert_eq!(rh.to_string(), "45%");
//! ```

use std::fmt::{self, Display, Formatter};

use crate::primitive::{Integral, Primitive, Wide};
use crate::ParseNumberError;

/// Default value, formatting and parsing for number types represented by `T`.
pub trait Policy<T: Primitive>: 'static {
    /// Value produced by default construction.
    fn default_value() -> T {
        T::zero()
    }

    /// Writes `value` as text. The default honours the formatter's flags like `T`'s `Display`.
    fn format(value: T, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&value, f)
    }

    /// Reads a value from text.
    fn parse(input: &str) -> Result<T, ParseNumberError> {
        T::parse_str(input)
    }
}

/// The policy that changes nothing: zero by default, native text conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plain;

impl<T: Primitive> Policy<T> for Plain {}

/// Decimal fixed point for integral representations.
///
/// The integer counts units of 10<sup>-DIGITS</sup>, and is written with exactly `DIGITS`
/// fractional digits. Parsing accepts at most `DIGITS` fractional digits.
///
/// ```
/// use numtype::{DefaultCaps, FixedPoint, Number, Tag};
///
/// #[derive(Tag)]
/// struct Euros;
///
/// type Price = Number<i64, Euros, DefaultCaps, FixedPoint<2>>;
///
/// assert_eq!(Price::new(1234).to_string(), "12.34");
/// assert_eq!(Price::new(-5).to_string(), "-0.05");
/// assert_eq!("3.5".parse::<Price>().unwrap().get(), 350);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedPoint<const DIGITS: u32>;

impl<const DIGITS: u32> FixedPoint<DIGITS> {
    const SCALE: u128 = {
        assert!(DIGITS <= 38, "FixedPoint supports at most 38 fractional digits");
        10u128.pow(DIGITS)
    };

    fn split(wide: Wide) -> Option<(bool, u128)> {
        match wide {
            Wide::Signed(value) => Some((value >= 0, value.unsigned_abs())),
            Wide::Unsigned(value) => Some((true, value)),
            Wide::Float(_) => None,
        }
    }
}

impl<T: Primitive<Kind = Integral>, const DIGITS: u32> Policy<T> for FixedPoint<DIGITS> {
    fn format(value: T, f: &mut Formatter<'_>) -> fmt::Result {
        let Some((nonnegative, magnitude)) = Self::split(value.widen()) else {
            return Display::fmt(&value, f);
        };
        let digits = if DIGITS == 0 {
            magnitude.to_string()
        } else {
            format!(
                "{}.{:0width$}",
                magnitude / Self::SCALE,
                magnitude % Self::SCALE,
                width = DIGITS as usize,
            )
        };
        f.pad_integral(nonnegative, "", &digits)
    }

    fn parse(input: &str) -> Result<T, ParseNumberError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseNumberError::Empty);
        }
        let malformed = || ParseNumberError::malformed(trimmed, T::NAME);
        let out_of_range = || ParseNumberError::out_of_range(trimmed, T::NAME);

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && fraction.is_empty()
            || !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit())
            || fraction.len() > DIGITS as usize
        {
            return Err(malformed());
        }

        let padding = std::iter::repeat_n(b'0', DIGITS as usize - fraction.len());
        let mut magnitude = 0u128;
        for digit in whole.bytes().chain(fraction.bytes()).chain(padding) {
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(u128::from(digit - b'0')))
                .ok_or_else(out_of_range)?;
        }

        let wide = if negative {
            Wide::Signed(0i128.checked_sub_unsigned(magnitude).ok_or_else(out_of_range)?)
        } else {
            Wide::Unsigned(magnitude)
        };
        let value = T::narrow(wide);
        if value.widen() != wide {
            return Err(out_of_range());
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Show<T, P>(T, std::marker::PhantomData<P>);

    impl<T: Primitive, P: Policy<T>> Display for Show<T, P> {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            P::format(self.0, f)
        }
    }

    fn show<P: Policy<T>, T: Primitive>(value: T) -> Show<T, P> {
        Show(value, std::marker::PhantomData)
    }

    #[test]
    fn plain() {
        assert_eq!(<Plain as Policy<i32>>::default_value(), 0);
        assert_eq!(<Plain as Policy<f32>>::default_value(), 0.0);
        assert_eq!(format!("{:>5}", show::<Plain, _>(42u8)), "   42");
        assert_eq!(format!("{:.2}", show::<Plain, _>(1.0f64)), "1.00");
        assert_eq!(<Plain as Policy<i32>>::parse(" 7 "), Ok(7));
    }

    #[test]
    fn fixed_point_format() {
        assert_eq!(show::<FixedPoint<2>, _>(1234i32).to_string(), "12.34");
        assert_eq!(show::<FixedPoint<2>, _>(-1234i32).to_string(), "-12.34");
        assert_eq!(show::<FixedPoint<3>, _>(7u16).to_string(), "0.007");
        assert_eq!(show::<FixedPoint<0>, _>(-7i8).to_string(), "-7");
        assert_eq!(show::<FixedPoint<1>, _>(i8::MIN).to_string(), "-12.8");
        assert_eq!(format!("{:+08}", show::<FixedPoint<2>, _>(150i64)), "+0001.50");
        assert_eq!(format!("{:>7}", show::<FixedPoint<2>, _>(-5i64)), "  -0.05");
    }

    #[test]
    fn fixed_point_parse() {
        type Cents = FixedPoint<2>;
        assert_eq!(<Cents as Policy<i32>>::parse("12.34"), Ok(1234));
        assert_eq!(<Cents as Policy<i32>>::parse(" -0.5 "), Ok(-50));
        assert_eq!(<Cents as Policy<i32>>::parse("+3"), Ok(300));
        assert_eq!(<Cents as Policy<i32>>::parse(".07"), Ok(7));
        assert_eq!(<Cents as Policy<i32>>::parse("8."), Ok(800));
        assert_eq!(<Cents as Policy<i8>>::parse("-1.28"), Ok(i8::MIN));
        assert_eq!(<Cents as Policy<i32>>::parse(""), Err(ParseNumberError::Empty));
        assert_eq!(
            <Cents as Policy<i32>>::parse("1.234"),
            Err(ParseNumberError::malformed("1.234", "i32"))
        );
        assert_eq!(
            <Cents as Policy<i32>>::parse("."),
            Err(ParseNumberError::malformed(".", "i32"))
        );
        assert_eq!(
            <Cents as Policy<i32>>::parse("1,5"),
            Err(ParseNumberError::malformed("1,5", "i32"))
        );
        assert_eq!(
            <Cents as Policy<i8>>::parse("1.28"),
            Err(ParseNumberError::out_of_range("1.28", "i8"))
        );
        assert_eq!(
            <Cents as Policy<u32>>::parse("-0.01"),
            Err(ParseNumberError::out_of_range("-0.01", "u32"))
        );
        assert_eq!(<Cents as Policy<u32>>::parse("-0.00"), Ok(0));
    }

    #[test]
    fn fixed_point_round_trip() {
        for value in [0i64, 1, -1, 99, -100, 123_456_789, i64::MAX, i64::MIN] {
            let text = show::<FixedPoint<4>, _>(value).to_string();
            assert_eq!(<FixedPoint<4> as Policy<i64>>::parse(&text), Ok(value), "{text}");
        }
        let text = show::<FixedPoint<6>, _>(u128::MAX).to_string();
        assert_eq!(<FixedPoint<6> as Policy<u128>>::parse(&text), Ok(u128::MAX));
    }
}

//! Identity tags.
//!
//! A tag is a marker type distinguishing number types that share a representation, capabilities
//! and policy. `Number<f64, Meters>` and `Number<f64, Seconds>` never mix unless their capability
//! set enables [`NATIVE_TYPING`](crate::Flags::NATIVE_TYPING).
//!
//! ## Usage
//!
//! ```
//! use numtype::{Id, Number, Tag};
//!
//! #[derive(Tag)]
//! struct Meters;
//!
//! #[derive(Tag)]
//! #[numtype(name = "s")]
//! struct Seconds;
//!
//! assert_eq!(format!("{:?}", Number::<f64, Meters>::new(2.5)), "Meters(2.5)");
//! assert_eq!(format!("{:?}", Number::<f64, Seconds>::new(2.5)), "s(2.5)");
//! assert_eq!(format!("{:?}", Number::<u8, Id<7>>::new(1)), "Id(1)");
//! ```

use crate::helper::{Bit, No, Yes};

/// A compile-time identity for a number type.
pub trait Tag: 'static {
    /// Name used by `Debug`.
    const NAME: &'static str;
}

/// An identity tag given by an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<const N: u64>;

impl<const N: u64> Tag for Id<N> {
    const NAME: &'static str = "Id";
}

/// Tag equivalence, relaxed to "any tag" when `Relaxed` is [`Yes`].
///
/// `Relaxed` is the capability set's [`NativeTyping`](crate::Capabilities::NativeTyping).
#[diagnostic::on_unimplemented(
    message = "number types tagged `{Self}` and `{A}` are not equivalent",
    label = "different identity tags",
    note = "enable `NATIVE_TYPING` to mix number types that differ only by their tag"
)]
pub trait SameTag<A, Relaxed: Bit> {}

impl<A> SameTag<A, No> for A {}

impl<A, B> SameTag<A, Yes> for B {}

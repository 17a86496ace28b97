//! Capability masks.
//!
//! A [`Flags`] value lists the operations a number type supports. Composite constants already carry
//! the capabilities they imply, so `ORDERING` contains `SPECIFIC_ORDERING`, `EQUALITY` and
//! `SPECIFIC_EQUALITY`:
//!
//! | Capability                | Implies                                  |
//! |---------------------------|------------------------------------------|
//! | `SPECIFIC_ORDERING`       | `SPECIFIC_EQUALITY`                      |
//! | `EQUALITY`                | `SPECIFIC_EQUALITY`                      |
//! | `ORDERING`                | `SPECIFIC_ORDERING`, `EQUALITY`          |
//! | `FLOAT_MULTIPLICATION`    | `INTEGER_MULTIPLICATION`                 |
//! | `FLOAT_DIVISION`          | `INTEGER_DIVISION`                       |
//! | `MODULO`                  | `SPECIFIC_MODULO`                        |
//!
//! `DISABLE_CONSTRUCTION` and `DISABLE_MUTABILITY` override every other bit.
//!
//! A mask only becomes useful once it is lifted to a type with [`capabilities!`](crate::capabilities)
//! or `#[derive(Capabilities)]`.

use bitflags::bitflags;

const OWN_SPECIFIC_ORDERING: u64 = 1 << 4;
const OWN_EQUALITY: u64 = 1 << 5;
const OWN_ORDERING: u64 = 1 << 6;
const OWN_FLOAT_MULTIPLICATION: u64 = 1 << 13;
const OWN_FLOAT_DIVISION: u64 = 1 << 14;
const OWN_MODULO: u64 = 1 << 27;

bitflags! {
    /// A set of number type capabilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u64 {
        /// Explicit conversion from any primitive.
        const GENERAL_CONSTRUCTION = 1;
        /// `Default`, using the policy's default value.
        const DEFAULT_CONSTRUCTION = 1 << 1;
        /// Assignment from a raw value after construction.
        const LATE_ASSIGNMENT = 1 << 2;
        /// `==` and `!=` between equivalent number types.
        const SPECIFIC_EQUALITY = 1 << 3;
        /// `<`, `<=`, `>`, `>=` between equivalent number types.
        const SPECIFIC_ORDERING = Self::SPECIFIC_EQUALITY.bits() | OWN_SPECIFIC_ORDERING;
        /// `==` and `!=` against raw primitives.
        const EQUALITY = Self::SPECIFIC_EQUALITY.bits() | OWN_EQUALITY;
        /// Ordering against raw primitives.
        const ORDERING = Self::SPECIFIC_ORDERING.bits() | Self::EQUALITY.bits() | OWN_ORDERING;

        const INC_DEC = 1 << 7;

        const SPECIFIC_PLUS_MINUS = 1 << 8;
        const SPECIFIC_MULTIPLICATION = 1 << 9;
        const SPECIFIC_DIVISION = 1 << 10;

        /// Multiplication by integral primitives.
        const INTEGER_MULTIPLICATION = 1 << 11;
        /// Division by integral primitives.
        const INTEGER_DIVISION = 1 << 12;
        /// Multiplication by any primitive, integral or floating.
        const FLOAT_MULTIPLICATION = Self::INTEGER_MULTIPLICATION.bits() | OWN_FLOAT_MULTIPLICATION;
        /// Division by any primitive, integral or floating.
        const FLOAT_DIVISION = Self::INTEGER_DIVISION.bits() | OWN_FLOAT_DIVISION;

        const INTEGER_MULT_DIV = Self::INTEGER_MULTIPLICATION.bits() | Self::INTEGER_DIVISION.bits();
        const FLOAT_MULT_DIV = Self::FLOAT_MULTIPLICATION.bits() | Self::FLOAT_DIVISION.bits();

        /// `+` and `-` with raw primitives.
        const GENERAL_PLUS_MINUS = 1 << 20;
        const GENERAL_MULTIPLICATION = 1 << 21;
        const GENERAL_DIVISION = 1 << 22;
        const GENERAL_MULT_DIV = Self::GENERAL_MULTIPLICATION.bits() | Self::GENERAL_DIVISION.bits();

        /// `%` between equivalent number types. Integral representations only.
        const SPECIFIC_MODULO = 1 << 26;
        /// `%` with raw integral primitives. Integral representations only.
        const MODULO = Self::SPECIFIC_MODULO.bits() | OWN_MODULO;

        /// Treat number types that differ only by their identity tag as equivalent.
        const NATIVE_TYPING = 1 << 29;

        const DISABLE_CONSTRUCTION = 1 << 30;
        const DISABLE_MUTABILITY = 1 << 31;

        const DEFAULT = Self::SPECIFIC_ORDERING.bits()
            | Self::INC_DEC.bits()
            | Self::SPECIFIC_PLUS_MINUS.bits()
            | Self::INTEGER_MULTIPLICATION.bits()
            | Self::INTEGER_DIVISION.bits();

        const ALL_SPECIFIC_MATH = Self::INC_DEC.bits()
            | Self::SPECIFIC_PLUS_MINUS.bits()
            | Self::SPECIFIC_MULTIPLICATION.bits()
            | Self::SPECIFIC_DIVISION.bits()
            | Self::SPECIFIC_MODULO.bits();

        const ALL_MATH = Self::ALL_SPECIFIC_MATH.bits()
            | Self::GENERAL_PLUS_MINUS.bits()
            | Self::GENERAL_MULT_DIV.bits()
            | Self::FLOAT_MULT_DIV.bits()
            | Self::MODULO.bits();

        const ALL = Self::GENERAL_CONSTRUCTION.bits()
            | Self::DEFAULT_CONSTRUCTION.bits()
            | Self::LATE_ASSIGNMENT.bits()
            | Self::ORDERING.bits()
            | Self::ALL_MATH.bits();
    }
}

/// Elementary bits that pull in further capabilities, paired with the closed set they imply.
const IMPLICATIONS: &[(u64, Flags)] = &[
    (OWN_SPECIFIC_ORDERING, Flags::SPECIFIC_ORDERING),
    (OWN_EQUALITY, Flags::EQUALITY),
    (OWN_ORDERING, Flags::ORDERING),
    (OWN_FLOAT_MULTIPLICATION, Flags::FLOAT_MULTIPLICATION),
    (OWN_FLOAT_DIVISION, Flags::FLOAT_DIVISION),
    (OWN_MODULO, Flags::MODULO),
];

impl Flags {
    /// Adds every capability implied by a bit present in `self`.
    ///
    /// Masks assembled from the named constants are already closed. The closure matters for masks
    /// built with [`Flags::from_bits_retain`], where an elementary bit may appear on its own.
    ///
    /// ```
    /// use numtype::Flags;
    ///
    /// let raw = Flags::from_bits_retain(1 << 6);
    /// assert!(raw.closure().contains(Flags::SPECIFIC_EQUALITY));
    /// assert_eq!(Flags::DEFAULT.closure(), Flags::DEFAULT);
    /// ```
    pub const fn closure(self) -> Self {
        let mut bits = self.bits();
        let mut index = 0;
        while index < IMPLICATIONS.len() {
            let (own, implied) = IMPLICATIONS[index];
            if bits & own != 0 {
                bits |= implied.bits();
            }
            index += 1;
        }
        Self::from_bits_retain(bits)
    }

    /// Returns `true` if the closure of `self` contains every capability in `required`.
    #[inline]
    pub const fn enables(self, required: Self) -> bool {
        self.closure().contains(required)
    }

    /// Returns `true` if construction is not disabled.
    #[inline]
    pub const fn is_constructible(self) -> bool {
        !self.contains(Self::DISABLE_CONSTRUCTION)
    }

    /// Returns `true` if mutability is not disabled.
    #[inline]
    pub const fn is_mutable(self) -> bool {
        !self.contains(Self::DISABLE_MUTABILITY)
    }
}

//! The strong numeric wrapper.

use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::caps::{
    Capabilities, Constructible, DefaultConstructible, GeneralConstructible, IncDec, LateAssignable, Mutable,
    SpecificEq,
};
use crate::{ParseNumberError, Policy, Primitive, SameTag, Tag};

mod cmp;
mod ops;
#[cfg(feature = "serde")]
mod serde;

/// A value of representation `T` with identity `I`, capabilities `C` and policy `P`.
///
/// Only the representation is stored; the other parameters exist at the type level. Which
/// operators are available is decided by `C`:
///
/// ```
/// use numtype::{Number, Tag};
///
/// #[derive(Tag)]
/// struct Distance;
///
/// let mut a = Number::<i32, Distance>::new(5);
/// let b = Number::<i32, Distance>::new(3);
///
/// assert_eq!((a + b).get(), 8);
/// assert!(a > b);
/// a += b;
/// assert_eq!(a.get(), 8);
/// ```
///
/// Number types with different tags do not mix:
///
/// ```compile_fail
/// use numtype::{Number, Tag};
///
/// #[derive(Tag)]
/// struct Meters;
/// #[derive(Tag)]
/// struct Seconds;
///
/// let _ = Number::<f64, Meters>::new(1.0) + Number::<f64, Seconds>::new(1.0);
/// ```
#[repr(transparent)]
pub struct Number<T, I, C = crate::DefaultCaps, P = crate::Plain> {
    value: T,
    phantom: PhantomData<fn() -> (I, C, P)>,
}

impl<T, I, C, P> Number<T, I, C, P> {
    #[inline]
    const fn from_raw(value: T) -> Self {
        Self {
            value,
            phantom: PhantomData,
        }
    }

    /// Returns the wrapped value.
    #[inline]
    pub const fn get(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// Consumes the number and returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Primitive, I, C: Capabilities, P> Number<T, I, C, P> {
    /// Wraps `value`.
    ///
    /// ```compile_fail
    /// use numtype::{Number, Tag, capabilities};
    ///
    /// capabilities! {
    ///     struct Sealed = ALL | DISABLE_CONSTRUCTION;
    /// }
    ///
    /// #[derive(Tag)]
    /// struct Key;
    ///
    /// let _ = Number::<u64, Key, Sealed>::new(1);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self
    where
        C: Constructible,
    {
        Self::from_raw(value)
    }

    /// Copies the value of an equivalent number.
    ///
    /// The tag of `other` may differ only if `C` enables
    /// [`NATIVE_TYPING`](crate::Flags::NATIVE_TYPING).
    #[inline]
    pub fn from_equivalent<I2>(other: &Number<T, I2, C, P>) -> Self
    where
        C: Constructible,
        I2: SameTag<I, C::NativeTyping>,
    {
        Self::from_raw(other.value)
    }

    /// Converts from any primitive with `as` semantics.
    ///
    /// ```
    /// use numtype::{Number, Tag, capabilities};
    ///
    /// capabilities! {
    ///     struct Convertible = DEFAULT | GENERAL_CONSTRUCTION;
    /// }
    ///
    /// #[derive(Tag)]
    /// struct Items;
    ///
    /// assert_eq!(Number::<u8, Items, Convertible>::cast_from(3.9f64).get(), 3);
    /// assert_eq!(Number::<u8, Items, Convertible>::cast_from(257u32).get(), 1);
    /// ```
    #[inline]
    pub fn cast_from<R: Primitive>(raw: R) -> Self
    where
        C: Constructible + GeneralConstructible,
    {
        Self::from_raw(T::narrow(raw.widen()))
    }

    /// Replaces the value with the value of an equivalent number.
    ///
    /// Assigning a number to itself is rejected by the borrow checker; assigning a copy of itself
    /// leaves the value unchanged.
    #[inline]
    pub fn assign<I2>(&mut self, other: &Number<T, I2, C, P>) -> &mut Self
    where
        C: Mutable,
        I2: SameTag<I, C::NativeTyping>,
    {
        self.value = other.value;
        self
    }

    /// Replaces the value with a raw value.
    #[inline]
    pub fn assign_raw(&mut self, value: T) -> &mut Self
    where
        C: Mutable + LateAssignable,
    {
        self.value = value;
        self
    }

    /// Replaces the value with any primitive, converted with `as` semantics.
    #[inline]
    pub fn assign_cast<R: Primitive>(&mut self, raw: R) -> &mut Self
    where
        C: Mutable + LateAssignable + GeneralConstructible,
    {
        self.value = T::narrow(raw.widen());
        self
    }

    /// Adds one in place and returns the updated number.
    #[inline]
    pub fn increment(&mut self) -> &mut Self
    where
        C: Mutable + IncDec,
    {
        self.value += T::one();
        self
    }

    /// Subtracts one in place and returns the updated number.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self
    where
        C: Mutable + IncDec,
    {
        self.value -= T::one();
        self
    }

    /// Adds one in place and returns the previous value.
    #[inline]
    pub fn post_increment(&mut self) -> Self
    where
        C: Constructible + Mutable + IncDec,
    {
        let previous = Self::from_raw(self.value);
        self.value += T::one();
        previous
    }

    /// Subtracts one in place and returns the previous value.
    #[inline]
    pub fn post_decrement(&mut self) -> Self
    where
        C: Constructible + Mutable + IncDec,
    {
        let previous = Self::from_raw(self.value);
        self.value -= T::one();
        previous
    }

    /// Parses `input` with the policy and stores the result. The value is left untouched on error.
    pub fn read_from(&mut self, input: &str) -> Result<&mut Self, ParseNumberError>
    where
        C: Constructible + Mutable,
        P: Policy<T>,
    {
        self.value = P::parse(input)?;
        Ok(self)
    }
}

impl<T: Copy, I, C: Constructible, P> Clone for Number<T, I, C, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, I, C: Constructible, P> Copy for Number<T, I, C, P> {}

impl<T: Primitive, I, C, P> Default for Number<T, I, C, P>
where
    C: Constructible + DefaultConstructible,
    P: Policy<T>,
{
    #[inline]
    fn default() -> Self {
        Self::from_raw(P::default_value())
    }
}

impl<T: Debug, I: Tag, C, P> Debug for Number<T, I, C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(I::NAME).field(&self.value).finish()
    }
}

impl<T: Primitive, I, C, P: Policy<T>> Display for Number<T, I, C, P> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        P::format(self.value, f)
    }
}

impl<T: Primitive, I, C: Constructible, P: Policy<T>> FromStr for Number<T, I, C, P> {
    type Err = ParseNumberError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        P::parse(s).map(Self::from_raw)
    }
}

impl<T: Hash, I, C: SpecificEq, P> Hash for Number<T, I, C, P> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

use std::fmt::Debug;

mod private {
    pub trait Sealed {}
}

/// A type-level boolean.
pub trait Bit: private::Sealed + Debug + Default + 'static {
    const VALUE: bool;
}

/// Type-level `true`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Yes;

/// Type-level `false`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct No;

impl private::Sealed for Yes {}
impl private::Sealed for No {}

impl Bit for Yes {
    const VALUE: bool = true;
}

impl Bit for No {
    const VALUE: bool = false;
}

/// Carries a `const bool` so that it can be turned into a [`Bit`] through [`Select`].
pub struct Flag<const B: bool>;

/// Maps [`Flag<true>`] to [`Yes`] and [`Flag<false>`] to [`No`].
pub trait Select {
    type Output: Bit;
}

impl Select for Flag<true> {
    type Output = Yes;
}

impl Select for Flag<false> {
    type Output = No;
}

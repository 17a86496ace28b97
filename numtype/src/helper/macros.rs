/// Declares capability set types from [`Flags`](crate::Flags) names.
///
/// Each declaration produces a unit struct implementing [`Capabilities`](crate::Capabilities). The
/// flags are joined with `|` and may be any constant of [`Flags`](crate::Flags), presets included.
///
/// ## Example
///
/// ```
/// use numtype::{Number, Tag, capabilities};
///
/// capabilities! {
///     /// Counters: ordered, incrementable, summable, with `%`.
///     pub struct Counting = DEFAULT | MODULO;
///
///     struct Frozen = ORDERING | DISABLE_MUTABILITY;
/// }
///
/// #[derive(Tag)]
/// struct Visits;
///
/// let a = Number::<u32, Visits, Counting>::new(17);
/// assert_eq!((a % 5u32).get(), 2);
/// ```
#[macro_export]
macro_rules! capabilities {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident = $($flag:ident)|+;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
            $vis struct $name;

            $crate::__impl_capabilities!($name => $crate::Flags::empty()$(.union($crate::Flags::$flag))+);
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_capabilities {
    ($name:ty => $flags:expr) => {
        #[automatically_derived]
        impl $crate::Capabilities for $name {
            const FLAGS: $crate::Flags = $crate::Flags::closure($flags);

            type Construction = $crate::__select!(@not $flags, DISABLE_CONSTRUCTION);
            type Mutation = $crate::__select!(@not $flags, DISABLE_MUTABILITY);
            type DefaultConstruction = $crate::__select!(@any $flags, DEFAULT_CONSTRUCTION);
            type GeneralConstruction = $crate::__select!(@any $flags, GENERAL_CONSTRUCTION);
            type LateAssignment = $crate::__select!(@any $flags, LATE_ASSIGNMENT);
            type SpecificEquality = $crate::__select!(@any $flags, SPECIFIC_EQUALITY);
            type GeneralEquality = $crate::__select!(@any $flags, EQUALITY);
            type SpecificOrdering = $crate::__select!(@any $flags, SPECIFIC_ORDERING);
            type GeneralOrdering = $crate::__select!(@any $flags, ORDERING);
            type IncrementDecrement = $crate::__select!(@any $flags, INC_DEC);
            type SpecificPlusMinus = $crate::__select!(@any $flags, SPECIFIC_PLUS_MINUS);
            type GeneralPlusMinus = $crate::__select!(@any $flags, GENERAL_PLUS_MINUS);
            type SpecificMultiplication = $crate::__select!(@any $flags, SPECIFIC_MULTIPLICATION);
            type SpecificDivision = $crate::__select!(@any $flags, SPECIFIC_DIVISION);
            type SpecificModulo = $crate::__select!(@any $flags, SPECIFIC_MODULO);
            type GeneralModulo = $crate::__select!(@any $flags, MODULO);
            type IntegralMultiplication =
                $crate::__select!(@any $flags, GENERAL_MULTIPLICATION | INTEGER_MULTIPLICATION);
            type FloatingMultiplication =
                $crate::__select!(@any $flags, GENERAL_MULTIPLICATION | FLOAT_MULTIPLICATION);
            type IntegralDivision = $crate::__select!(@any $flags, GENERAL_DIVISION | INTEGER_DIVISION);
            type FloatingDivision = $crate::__select!(@any $flags, GENERAL_DIVISION | FLOAT_DIVISION);
            type NativeTyping = $crate::__select!(@any $flags, NATIVE_TYPING);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __select {
    (@not $flags:expr, $flag:ident) => {
        <$crate::helper::Flag<{ !$crate::Flags::enables($flags, $crate::Flags::$flag) }> as $crate::helper::Select>::Output
    };
    (@any $flags:expr, $($flag:ident)|+) => {
        <$crate::helper::Flag<{ false $(|| $crate::Flags::enables($flags, $crate::Flags::$flag))+ }> as $crate::helper::Select>::Output
    };
}

//! Capability sets and the gates derived from them.
//!
//! A capability set is a marker type implementing [`Capabilities`]. It is usually declared with
//! [`capabilities!`](crate::capabilities) or `#[derive(Capabilities)]`, which compute every
//! associated type-level boolean from a [`Flags`] mask at compile time.
//!
//! Each operation of [`Number`](crate::Number) is bounded by one or more *gates*: marker traits
//! implemented for a capability set exactly when it enables the corresponding capability. A missing
//! gate is reported with a message naming the capability:
//!
//! ```compile_fail
//! use numtype::{Number, Tag};
//!
//! #[derive(Tag)]
//! struct Distance;
//!
//! let a = Number::<i32, Distance>::new(5);
//! // multiplication by floating primitives is not part of the default preset
//! let _ = a * 1.5f64;
//! ```

use crate::Flags;
use crate::helper::{Bit, Yes};
use crate::primitive::{Floating, Integral, Kind};

/// A set of capabilities attached to a number type.
///
/// Every associated type is [`Yes`] or [`No`](crate::helper::No). Implementations are generated;
/// writing one by hand is possible but the associated types then have to respect the implications
/// documented on [`Flags`].
pub trait Capabilities: 'static {
    /// The closed mask this set was generated from.
    const FLAGS: Flags;

    /// Construction is not disabled.
    type Construction: Bit;
    /// Mutability is not disabled.
    type Mutation: Bit;
    type DefaultConstruction: Bit;
    type GeneralConstruction: Bit;
    type LateAssignment: Bit;
    type SpecificEquality: Bit;
    type GeneralEquality: Bit;
    type SpecificOrdering: Bit;
    type GeneralOrdering: Bit;
    type IncrementDecrement: Bit;
    type SpecificPlusMinus: Bit;
    type GeneralPlusMinus: Bit;
    type SpecificMultiplication: Bit;
    type SpecificDivision: Bit;
    type SpecificModulo: Bit;
    type GeneralModulo: Bit;
    /// Multiplication by integral primitives.
    type IntegralMultiplication: Bit;
    /// Multiplication by floating primitives.
    type FloatingMultiplication: Bit;
    type IntegralDivision: Bit;
    type FloatingDivision: Bit;
    /// Number types differing only by their tag are equivalent.
    type NativeTyping: Bit;
}

crate::capabilities! {
    /// The default preset: specific ordering, increment/decrement, specific `+`/`-`, and
    /// multiplication/division by integral primitives.
    pub struct DefaultCaps = DEFAULT;

    /// Every enabling capability.
    pub struct AllCaps = ALL;
}

// Each gate holds for a capability set whose associated bit implements the matching `*Enabled`
// trait. Only `Yes` implements those, and they carry the diagnostics for a disabled capability.

/// Holds unless `DISABLE_CONSTRUCTION` is set.
pub trait Constructible: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "construction is disabled for this number type",
    label = "`DISABLE_CONSTRUCTION` is set"
)]
pub trait ConstructionEnabled {}

impl ConstructionEnabled for Yes {}

impl<C: Capabilities> Constructible for C where C::Construction: ConstructionEnabled {}

/// Holds unless `DISABLE_MUTABILITY` is set.
pub trait Mutable: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "number types with `DISABLE_MUTABILITY` are immutable",
    label = "`DISABLE_MUTABILITY` is set",
    note = "you cannot change the value of an instance of an immutable type"
)]
pub trait MutationEnabled {}

impl MutationEnabled for Yes {}

impl<C: Capabilities> Mutable for C where C::Mutation: MutationEnabled {}

pub trait DefaultConstructible: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "default construction is not enabled",
    label = "missing `DEFAULT_CONSTRUCTION`"
)]
pub trait DefaultConstructionEnabled {}

impl DefaultConstructionEnabled for Yes {}

impl<C: Capabilities> DefaultConstructible for C where C::DefaultConstruction: DefaultConstructionEnabled {}

pub trait GeneralConstructible: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "construction from any primitive is not enabled",
    label = "missing `GENERAL_CONSTRUCTION`"
)]
pub trait GeneralConstructionEnabled {}

impl GeneralConstructionEnabled for Yes {}

impl<C: Capabilities> GeneralConstructible for C where C::GeneralConstruction: GeneralConstructionEnabled {}

pub trait LateAssignable: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "late assignment is not enabled",
    label = "missing `LATE_ASSIGNMENT`"
)]
pub trait LateAssignmentEnabled {}

impl LateAssignmentEnabled for Yes {}

impl<C: Capabilities> LateAssignable for C where C::LateAssignment: LateAssignmentEnabled {}

pub trait SpecificEq: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "equality between number types is not enabled",
    label = "missing `SPECIFIC_EQUALITY`"
)]
pub trait SpecificEqualityEnabled {}

impl SpecificEqualityEnabled for Yes {}

impl<C: Capabilities> SpecificEq for C where C::SpecificEquality: SpecificEqualityEnabled {}

pub trait GeneralEq: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "equality with primitives is not enabled",
    label = "missing `EQUALITY`"
)]
pub trait GeneralEqualityEnabled {}

impl GeneralEqualityEnabled for Yes {}

impl<C: Capabilities> GeneralEq for C where C::GeneralEquality: GeneralEqualityEnabled {}

pub trait SpecificOrd: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "ordering between number types is not enabled",
    label = "missing `SPECIFIC_ORDERING`"
)]
pub trait SpecificOrderingEnabled {}

impl SpecificOrderingEnabled for Yes {}

impl<C: Capabilities> SpecificOrd for C where C::SpecificOrdering: SpecificOrderingEnabled {}

pub trait GeneralOrd: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "ordering against primitives is not enabled",
    label = "missing `ORDERING`"
)]
pub trait GeneralOrderingEnabled {}

impl GeneralOrderingEnabled for Yes {}

impl<C: Capabilities> GeneralOrd for C where C::GeneralOrdering: GeneralOrderingEnabled {}

pub trait IncDec: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "increment/decrement is not enabled",
    label = "missing `INC_DEC`"
)]
pub trait IncrementDecrementEnabled {}

impl IncrementDecrementEnabled for Yes {}

impl<C: Capabilities> IncDec for C where C::IncrementDecrement: IncrementDecrementEnabled {}

pub trait SpecificAddSub: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "`+` and `-` between number types are not enabled",
    label = "missing `SPECIFIC_PLUS_MINUS`"
)]
pub trait SpecificPlusMinusEnabled {}

impl SpecificPlusMinusEnabled for Yes {}

impl<C: Capabilities> SpecificAddSub for C where C::SpecificPlusMinus: SpecificPlusMinusEnabled {}

pub trait GeneralAddSub: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "`+` and `-` with primitives are not enabled",
    label = "missing `GENERAL_PLUS_MINUS`"
)]
pub trait GeneralPlusMinusEnabled {}

impl GeneralPlusMinusEnabled for Yes {}

impl<C: Capabilities> GeneralAddSub for C where C::GeneralPlusMinus: GeneralPlusMinusEnabled {}

pub trait SpecificMul: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "`*` between number types is not enabled",
    label = "missing `SPECIFIC_MULTIPLICATION`"
)]
pub trait SpecificMultiplicationEnabled {}

impl SpecificMultiplicationEnabled for Yes {}

impl<C: Capabilities> SpecificMul for C where C::SpecificMultiplication: SpecificMultiplicationEnabled {}

pub trait SpecificDiv: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "`/` between number types is not enabled",
    label = "missing `SPECIFIC_DIVISION`"
)]
pub trait SpecificDivisionEnabled {}

impl SpecificDivisionEnabled for Yes {}

impl<C: Capabilities> SpecificDiv for C where C::SpecificDivision: SpecificDivisionEnabled {}

pub trait SpecificRem: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "`%` between number types is not enabled",
    label = "missing `SPECIFIC_MODULO`"
)]
pub trait SpecificModuloEnabled {}

impl SpecificModuloEnabled for Yes {}

impl<C: Capabilities> SpecificRem for C where C::SpecificModulo: SpecificModuloEnabled {}

pub trait GeneralRem: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "`%` with primitives is not enabled",
    label = "missing `MODULO`"
)]
pub trait GeneralModuloEnabled {}

impl GeneralModuloEnabled for Yes {}

impl<C: Capabilities> GeneralRem for C where C::GeneralModulo: GeneralModuloEnabled {}

/// Gate for `*` with a primitive operand of kind `K`.
pub trait MulBy<K: Kind>: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "multiplication by integer primitives is not enabled",
    label = "missing `INTEGER_MULTIPLICATION` or `GENERAL_MULTIPLICATION`"
)]
pub trait IntegralMultiplicationEnabled {}

impl IntegralMultiplicationEnabled for Yes {}

impl<C: Capabilities> MulBy<Integral> for C where C::IntegralMultiplication: IntegralMultiplicationEnabled {}

#[diagnostic::on_unimplemented(
    message = "multiplication by floating point primitives is not enabled",
    label = "missing `FLOAT_MULTIPLICATION` or `GENERAL_MULTIPLICATION`"
)]
pub trait FloatingMultiplicationEnabled {}

impl FloatingMultiplicationEnabled for Yes {}

impl<C: Capabilities> MulBy<Floating> for C where C::FloatingMultiplication: FloatingMultiplicationEnabled {}

/// Gate for `/` with a primitive operand of kind `K`.
pub trait DivBy<K: Kind>: Capabilities {}

#[diagnostic::on_unimplemented(
    message = "division by integer primitives is not enabled",
    label = "missing `INTEGER_DIVISION` or `GENERAL_DIVISION`"
)]
pub trait IntegralDivisionEnabled {}

impl IntegralDivisionEnabled for Yes {}

impl<C: Capabilities> DivBy<Integral> for C where C::IntegralDivision: IntegralDivisionEnabled {}

#[diagnostic::on_unimplemented(
    message = "division by floating point primitives is not enabled",
    label = "missing `FLOAT_DIVISION` or `GENERAL_DIVISION`"
)]
pub trait FloatingDivisionEnabled {}

impl FloatingDivisionEnabled for Yes {}

impl<C: Capabilities> DivBy<Floating> for C where C::FloatingDivision: FloatingDivisionEnabled {}

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use crate::caps::{
    Constructible, DivBy, GeneralAddSub, GeneralRem, MulBy, Mutable, SpecificAddSub, SpecificDiv, SpecificMul,
    SpecificRem,
};
use crate::primitive::{ArithOp, Integral};
use crate::{Number, Primitive, SameTag};

/// `lhs OP rhs` computed in the promoted domain and narrowed back to `T`.
///
/// An integer result outside `T` panics when debug assertions are enabled and wraps otherwise,
/// like native integer arithmetic. Float results are converted with `as`.
#[inline]
fn mixed<T: Primitive, L: Primitive, R: Primitive>(lhs: L, rhs: R, op: ArithOp) -> T {
    let (wide, wrapped) = lhs.widen().overflowing_apply(rhs.widen(), op);
    let value = T::narrow(wide);
    if cfg!(debug_assertions) && !wide.is_float() && (wrapped || value.widen() != wide) {
        panic!("{}", op.overflow_message());
    }
    value
}

macro_rules! impl_specific_ops {
    ($([$($bound:tt)+] $gate:ident => $trait:ident::$method:ident, $assign:ident::$assign_method:ident;)*) => {
        $(
            impl<T: $($bound)+, I, I2, C: $gate + Constructible, P> $trait<Number<T, I2, C, P>> for Number<T, I, C, P>
            where
                I2: SameTag<I, C::NativeTyping>,
            {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Number<T, I2, C, P>) -> Self {
                    Self::from_raw(self.value.$method(rhs.value))
                }
            }

            impl<T: $($bound)+, I, I2, C: $gate + Mutable, P> $assign<Number<T, I2, C, P>> for Number<T, I, C, P>
            where
                I2: SameTag<I, C::NativeTyping>,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Number<T, I2, C, P>) {
                    self.value.$assign_method(rhs.value);
                }
            }
        )*
    };
}

impl_specific_ops! {
    [Primitive] SpecificAddSub => Add::add, AddAssign::add_assign;
    [Primitive] SpecificAddSub => Sub::sub, SubAssign::sub_assign;
    [Primitive] SpecificMul => Mul::mul, MulAssign::mul_assign;
    [Primitive] SpecificDiv => Div::div, DivAssign::div_assign;
    [Primitive<Kind = Integral>] SpecificRem => Rem::rem, RemAssign::rem_assign;
}

/// Raw operand on the right, with its compound form.
macro_rules! impl_raw_ops {
    ($raw:ty => $([$($bound:tt)+] $gate:path => $trait:ident::$method:ident, $assign:ident::$assign_method:ident, $op:ident;)*) => {
        $(
            impl<T: $($bound)+, I, C: $gate + Constructible, P> $trait<$raw> for Number<T, I, C, P> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: $raw) -> Self {
                    Self::from_raw(mixed(self.value, rhs, ArithOp::$op))
                }
            }

            impl<T: $($bound)+, I, C: $gate + Mutable, P> $assign<$raw> for Number<T, I, C, P> {
                #[inline]
                fn $assign_method(&mut self, rhs: $raw) {
                    self.value = mixed(self.value, rhs, ArithOp::$op);
                }
            }
        )*
    };
}

/// Raw operand on the left.
macro_rules! impl_commuted_ops {
    ($raw:ty => $($gate:path => $trait:ident::$method:ident, $op:ident;)*) => {
        $(
            impl<T: Primitive, I, C: $gate + Constructible, P> $trait<Number<T, I, C, P>> for $raw {
                type Output = Number<T, I, C, P>;

                #[inline]
                fn $method(self, rhs: Number<T, I, C, P>) -> Number<T, I, C, P> {
                    Number::from_raw(mixed(self, rhs.value, ArithOp::$op))
                }
            }
        )*
    };
}

macro_rules! impl_primitive_ops {
    ($($raw:ty),* $(,)?) => {
        $(
            impl_raw_ops! { $raw =>
                [Primitive] GeneralAddSub => Add::add, AddAssign::add_assign, Add;
                [Primitive] GeneralAddSub => Sub::sub, SubAssign::sub_assign, Sub;
                [Primitive] MulBy<<$raw as Primitive>::Kind> => Mul::mul, MulAssign::mul_assign, Mul;
                [Primitive] DivBy<<$raw as Primitive>::Kind> => Div::div, DivAssign::div_assign, Div;
            }

            impl_commuted_ops! { $raw =>
                GeneralAddSub => Add::add, Add;
                MulBy<<$raw as Primitive>::Kind> => Mul::mul, Mul;
                DivBy<<$raw as Primitive>::Kind> => Div::div, Div;
            }
        )*
    };
}

macro_rules! impl_integral_rem {
    ($($raw:ty),* $(,)?) => {
        $(
            impl_raw_ops! { $raw =>
                [Primitive<Kind = Integral>] GeneralRem => Rem::rem, RemAssign::rem_assign, Rem;
            }
        )*
    };
}

impl_primitive_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl_integral_rem!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

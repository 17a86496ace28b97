use std::cmp::Ordering;

use crate::caps::{GeneralEq, GeneralOrd, SpecificEq, SpecificOrd};
use crate::{Number, Primitive, SameTag};

impl<T: Primitive, I, I2, C: SpecificEq, P> PartialEq<Number<T, I2, C, P>> for Number<T, I, C, P>
where
    I2: SameTag<I, C::NativeTyping>,
{
    #[inline]
    fn eq(&self, other: &Number<T, I2, C, P>) -> bool {
        self.value == other.value
    }
}

impl<T: Primitive + Eq, I, C: SpecificEq, P> Eq for Number<T, I, C, P> where I: SameTag<I, C::NativeTyping> {}

impl<T: Primitive, I, I2, C: SpecificOrd + SpecificEq, P> PartialOrd<Number<T, I2, C, P>> for Number<T, I, C, P>
where
    I2: SameTag<I, C::NativeTyping>,
{
    #[inline]
    fn partial_cmp(&self, other: &Number<T, I2, C, P>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Primitive + Ord, I, C: SpecificOrd + SpecificEq, P> Ord for Number<T, I, C, P>
where
    I: SameTag<I, C::NativeTyping>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

macro_rules! impl_raw_cmp {
    ($($raw:ty),* $(,)?) => {
        $(
            impl<T: Primitive, I, C: GeneralEq, P> PartialEq<$raw> for Number<T, I, C, P> {
                #[inline]
                fn eq(&self, other: &$raw) -> bool {
                    self.value.widen() == other.widen()
                }
            }

            impl<T: Primitive, I, C: GeneralEq, P> PartialEq<Number<T, I, C, P>> for $raw {
                #[inline]
                fn eq(&self, other: &Number<T, I, C, P>) -> bool {
                    self.widen() == other.value.widen()
                }
            }

            impl<T: Primitive, I, C: GeneralOrd + GeneralEq, P> PartialOrd<$raw> for Number<T, I, C, P> {
                #[inline]
                fn partial_cmp(&self, other: &$raw) -> Option<Ordering> {
                    self.value.widen().partial_cmp(&other.widen())
                }
            }

            impl<T: Primitive, I, C: GeneralOrd + GeneralEq, P> PartialOrd<Number<T, I, C, P>> for $raw {
                #[inline]
                fn partial_cmp(&self, other: &Number<T, I, C, P>) -> Option<Ordering> {
                    self.widen().partial_cmp(&other.value.widen())
                }
            }
        )*
    };
}

impl_raw_cmp!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

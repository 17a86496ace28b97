use std::hash::Hash;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

use numtype::{AllCaps, Capabilities, DefaultCaps, Flags, Id, Number, Tag, capabilities};
use numtype_test_utils::implements;

#[derive(Tag)]
struct Distance;

#[derive(Tag)]
struct Duration;

capabilities! {
    struct Sealed = ALL | DISABLE_CONSTRUCTION;
    struct Frozen = ALL | DISABLE_MUTABILITY;
    struct Native = DEFAULT | NATIVE_TYPING;
    struct Bare = SPECIFIC_EQUALITY;
}

#[derive(Capabilities)]
#[numtype(ordering, modulo)]
struct Relational;

#[derive(Capabilities)]
#[numtype(FLOAT_MULTIPLICATION)]
struct FloatScaled;

#[derive(Capabilities)]
#[numtype(general_mult_div)]
struct GeneralScaled;

type D = Number<i32, Distance>;

#[test]
fn derived_and_declared_sets_agree() {
    capabilities! {
        struct Declared = ORDERING | MODULO;
    }
    assert_eq!(Relational::FLAGS, Declared::FLAGS);
    assert_eq!(FloatScaled::FLAGS, Flags::FLOAT_MULTIPLICATION);
    assert!(FloatScaled::FLAGS.contains(Flags::INTEGER_MULTIPLICATION));
}

#[test]
fn default_preset() {
    assert!(implements!(D: Copy + Clone + PartialEq + PartialOrd + Eq + Ord + Hash));
    assert!(implements!(D: Add<D, Output = D> + Sub<D, Output = D> + AddAssign<D> + SubAssign<D>));
    assert!(implements!(D: Mul<i32, Output = D> + Mul<u8> + Div<i64> + MulAssign<u16> + DivAssign<i8>));
    assert!(implements!(i32: Mul<D, Output = D> + Div<D, Output = D>));
    assert!(implements!(D: FromStr + std::fmt::Display + std::fmt::Debug));

    assert!(!implements!(D: Mul<f64>));
    assert!(!implements!(D: Div<f32>));
    assert!(!implements!(f64: Mul<D>));
    assert!(!implements!(D: Mul<D>));
    assert!(!implements!(D: Div<D>));
    assert!(!implements!(D: Rem<D>));
    assert!(!implements!(D: Add<i32>));
    assert!(!implements!(i32: Add<D>));
    assert!(!implements!(D: PartialEq<i32>));
    assert!(!implements!(D: PartialOrd<i32>));
    assert!(!implements!(D: Default));
}

#[test]
fn all_preset() {
    type A = Number<i64, Distance, AllCaps>;
    type F = Number<f32, Distance, AllCaps>;

    assert!(implements!(A: Default + Mul<A> + Div<A> + Rem<A> + RemAssign<A>));
    assert!(implements!(A: Add<u8> + Sub<f64> + Mul<f32> + Div<f64> + Rem<u64> + RemAssign<i8>));
    assert!(implements!(f64: Add<A> + Mul<A> + Div<A>));
    assert!(implements!(A: PartialEq<u128> + PartialOrd<f64>));
    assert!(implements!(u128: PartialEq<A> + PartialOrd<A>));

    // modulo needs an integral representation and an integral operand
    assert!(!implements!(A: Rem<f64>));
    assert!(!implements!(F: Rem<F>));
    assert!(!implements!(F: Rem<i32>));
    assert!(!implements!(f64: Sub<A>));
}

#[test]
fn disabled_construction() {
    type S = Number<u64, Distance, Sealed>;

    assert!(!implements!(S: Clone));
    assert!(!implements!(S: Copy));
    assert!(!implements!(S: Default));
    assert!(!implements!(S: FromStr));
    assert!(!implements!(S: Add<S>));
    assert!(!implements!(S: Mul<u64>));
    assert!(!implements!(u64: Mul<S>));

    // in-place operations do not construct
    assert!(implements!(S: AddAssign<S> + MulAssign<u64> + RemAssign<u8>));
    assert!(implements!(S: PartialOrd<S> + PartialEq<u64>));
}

#[test]
fn disabled_mutability() {
    type F = Number<i16, Distance, Frozen>;

    assert!(!implements!(F: AddAssign<F>));
    assert!(!implements!(F: SubAssign<i16>));
    assert!(!implements!(F: MulAssign<F>));
    assert!(!implements!(F: MulAssign<f32>));
    assert!(!implements!(F: DivAssign<u8>));
    assert!(!implements!(F: RemAssign<F>));

    assert!(implements!(F: Copy + Default + Add<F, Output = F> + Mul<f32, Output = F> + Rem<i8>));

    let a = F::new(7);
    assert_eq!((a + a).get(), 14);
}

#[test]
fn implications() {
    type R = Number<u32, Distance, Relational>;
    assert!(implements!(R: PartialEq<R> + PartialOrd<R> + PartialEq<i8> + PartialOrd<f64>));
    assert!(implements!(R: Rem<R> + Rem<u16> + RemAssign<u16>));
    assert!(!implements!(R: Add<R>));
    assert!(!implements!(R: Mul<u32>));

    type FS = Number<u32, Distance, FloatScaled>;
    assert!(implements!(FS: Mul<u8> + Mul<f64> + MulAssign<f32>));
    assert!(!implements!(FS: Div<u8>));

    type GS = Number<u32, Distance, GeneralScaled>;
    assert!(implements!(GS: Mul<i8> + Mul<f32> + Div<i128> + Div<f64>));
    assert!(!implements!(GS: Mul<GS>));
}

#[test]
fn tags_do_not_mix() {
    type T = Number<i32, Duration>;
    type Other = Number<i32, Distance, Bare>;

    assert!(!implements!(D: Add<T>));
    assert!(!implements!(D: PartialEq<T>));
    assert!(!implements!(D: AddAssign<T>));
    // different capabilities never mix either
    assert!(!implements!(D: PartialEq<Other>));

    type N1 = Number<i32, Distance, Native>;
    type N2 = Number<i32, Duration, Native>;
    type N3 = Number<i32, Id<3>, Native>;
    assert!(implements!(N1: Add<N2, Output = N1> + AddAssign<N3> + PartialOrd<N3>));
    assert!(!implements!(N1: Add<Number<i64, Duration, Native>>));

    let mut a = N1::new(2);
    a += N2::new(3);
    assert_eq!(a, N3::new(5));
    assert_eq!(N2::from_equivalent(&a).get(), 5);
}

#[test]
fn bare_set() {
    type B = Number<u8, Distance, Bare>;
    assert!(implements!(B: Copy + PartialEq<B> + Eq + Hash));
    assert!(!implements!(B: PartialOrd<B>));
    assert!(!implements!(B: Add<B>));
    assert!(!implements!(B: Mul<u8>));

    let mut b = B::new(4);
    assert_eq!(b.assign(&B::new(9)).get(), 9);
}

#[test]
fn distance_scenario() {
    let mut a = D::new(5);
    let b = D::new(3);
    assert_eq!(a + b, D::new(8));
    assert!(a > b);
    a += b;
    assert_eq!(a.get(), 8);
    assert_eq!((a * 2i32).get(), 16);
    assert_eq!((a / 3i64).get(), 2);
    assert_eq!(<DefaultCaps as Capabilities>::FLAGS, Flags::DEFAULT);
}

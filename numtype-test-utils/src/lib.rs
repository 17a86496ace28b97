//! Test helpers shared by the numtype crates.

/// Evaluates to `true` if `$ty` satisfies the bounds, and to `false` otherwise.
///
/// Trait resolution prefers the inherent constant of `Probe<T>`, which only exists when the bounds
/// hold, and falls back to the trait constant when they don't. The check therefore never fails to
/// compile on a missing implementation, which makes it possible to assert that an operator is
/// *absent*.
///
/// ```
/// use numtype_test_utils::implements;
///
/// assert!(implements!(u8: Copy + std::ops::Add<u8>));
/// assert!(!implements!(String: Copy));
/// ```
#[macro_export]
macro_rules! implements {
    ($ty:ty: $($bound:tt)+) => {{
        #[allow(dead_code)]
        struct Probe<__ProbeT: ?Sized>(::core::marker::PhantomData<__ProbeT>);

        #[allow(dead_code)]
        trait Fallback {
            const IMPLEMENTED: bool = false;
        }

        impl<__ProbeT: ?Sized> Fallback for Probe<__ProbeT> {}

        #[allow(dead_code)]
        impl<__ProbeT: ?Sized + $($bound)+> Probe<__ProbeT> {
            const IMPLEMENTED: bool = true;
        }

        <Probe<$ty>>::IMPLEMENTED
    }};
}

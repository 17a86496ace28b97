#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;

mod derive;

/// Derive [`Capabilities`](numtype::Capabilities) from a list of flags.
///
/// Flags are the constants of [`Flags`](numtype::Flags), written in snake case or in shouty snake
/// case, in one or more `#[numtype(...)]` attributes. Implied capabilities are added automatically.
/// A type without any flag is a capability set that only allows construction, copying and plain
/// assignment.
///
/// ## Example
///
/// ```
/// use numtype::{Capabilities, Number, Tag};
///
/// #[derive(Capabilities)]
/// #[numtype(ordering, inc_dec, general_plus_minus)]
/// struct Counter;
///
/// #[derive(Tag)]
/// struct Retries;
///
/// let mut retries = Number::<u8, Retries, Counter>::new(0);
/// retries.increment();
/// retries += 2u8;
/// assert!(retries == 3u8);
/// ```
///
/// Capability sets cannot be generic, and unknown flags are rejected:
///
/// ```compile_fail
/// use numtype::Capabilities;
///
/// #[derive(Capabilities)]
/// #[numtype(ordering, exponentiation)]
/// struct Powerful;
/// ```
#[proc_macro_derive(Capabilities, attributes(numtype))]
pub fn derive_capabilities(input: TokenStream) -> TokenStream {
    let input: syn::DeriveInput = syn::parse_macro_input!(input);
    derive::derive_capabilities(input).into()
}

/// Derive [`Tag`](numtype::Tag) for an identity marker.
///
/// The tag name shown by `Debug` defaults to the type name and can be changed with
/// `#[numtype(name = "...")]`.
///
/// ## Example
///
/// ```
/// use numtype::{Number, Tag};
///
/// #[derive(Tag)]
/// #[numtype(name = "px")]
/// struct Pixels;
///
/// assert_eq!(format!("{:?}", Number::<i32, Pixels>::new(4)), "px(4)");
/// ```
#[proc_macro_derive(Tag, attributes(numtype))]
pub fn derive_tag(input: TokenStream) -> TokenStream {
    let input: syn::DeriveInput = syn::parse_macro_input!(input);
    derive::derive_tag(input).into()
}

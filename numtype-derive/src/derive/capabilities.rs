use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;

use crate::derive::meta::{DeriveKind, NumtypeMeta};

pub fn derive_capabilities(input: syn::DeriveInput) -> TokenStream {
    let mut errors = quote! {};
    if !input.generics.params.is_empty() {
        errors.extend(
            syn::Error::new(input.generics.span(), "capability sets cannot have generic parameters").to_compile_error(),
        );
    }
    let meta = NumtypeMeta::parse_attrs(&input.attrs, &mut errors, DeriveKind::Capabilities);
    if !errors.is_empty() {
        return errors;
    }

    let input_ident = &input.ident;
    let flags = &meta.flags;
    quote! {
        ::numtype::__impl_capabilities!(
            #input_ident => ::numtype::Flags::empty()#(.union(::numtype::Flags::#flags))*
        );
    }
}

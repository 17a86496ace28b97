use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_quote;

use crate::derive::meta::{DeriveKind, NumtypeMeta};

pub fn derive_tag(mut input: syn::DeriveInput) -> TokenStream {
    let mut errors = quote! {};
    let meta = NumtypeMeta::parse_attrs(&input.attrs, &mut errors, DeriveKind::Tag);
    if !errors.is_empty() {
        return errors;
    }

    let input_ident = &input.ident;
    let name = meta
        .name
        .unwrap_or_else(|| syn::LitStr::new(&input_ident.to_string(), input_ident.span()));
    if !input.generics.params.is_empty() {
        input.generics.make_where_clause().predicates.push(parse_quote! { Self: 'static });
    }
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        #[automatically_derived]
        impl #impl_generics ::numtype::Tag for #input_ident #type_generics #where_clause {
            const NAME: &'static str = #name;
        }
    }
}

use heck::ToShoutySnakeCase;
use proc_macro2::TokenStream;
use syn::parse::{Parse, Parser};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;

/// Every constant of `numtype::Flags`, presets included.
pub const KNOWN_FLAGS: &[&str] = &[
    "GENERAL_CONSTRUCTION",
    "DEFAULT_CONSTRUCTION",
    "LATE_ASSIGNMENT",
    "SPECIFIC_EQUALITY",
    "SPECIFIC_ORDERING",
    "EQUALITY",
    "ORDERING",
    "INC_DEC",
    "SPECIFIC_PLUS_MINUS",
    "SPECIFIC_MULTIPLICATION",
    "SPECIFIC_DIVISION",
    "INTEGER_MULTIPLICATION",
    "INTEGER_DIVISION",
    "FLOAT_MULTIPLICATION",
    "FLOAT_DIVISION",
    "INTEGER_MULT_DIV",
    "FLOAT_MULT_DIV",
    "GENERAL_PLUS_MINUS",
    "GENERAL_MULTIPLICATION",
    "GENERAL_DIVISION",
    "GENERAL_MULT_DIV",
    "SPECIFIC_MODULO",
    "MODULO",
    "NATIVE_TYPING",
    "DISABLE_CONSTRUCTION",
    "DISABLE_MUTABILITY",
    "DEFAULT",
    "ALL_SPECIFIC_MATH",
    "ALL_MATH",
    "ALL",
];

pub struct MetaArgument {
    ident: syn::Ident,
    args: Option<(syn::token::Paren, TokenStream)>,
    value: Option<(syn::Token![=], syn::Expr)>,
}

impl Parse for MetaArgument {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let ident: syn::Ident = input.parse()?;
        let args = if input.peek(syn::token::Paren) {
            let content;
            let paren = syn::parenthesized!(content in input);
            let args = content.parse()?;
            Some((paren, args))
        } else {
            None
        };
        let value = if input.peek(syn::Token![=]) {
            let eq_token: syn::Token![=] = input.parse()?;
            let expr: syn::Expr = input.parse()?;
            Some((eq_token, expr))
        } else {
            None
        };
        Ok(MetaArgument { ident, args, value })
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DeriveKind {
    Capabilities,
    Tag,
}

#[derive(Default)]
pub struct NumtypeMeta {
    /// Flag constants in shouty snake case, spanned at their source.
    pub flags: Vec<syn::Ident>,
    pub name: Option<syn::LitStr>,
}

fn error(errors: &mut TokenStream, span: proc_macro2::Span, message: impl std::fmt::Display) {
    errors.extend(syn::Error::new(span, message).to_compile_error());
}

impl NumtypeMeta {
    fn parse_flag(&mut self, arg: MetaArgument, errors: &mut TokenStream) {
        if let Some((paren, _)) = arg.args {
            error(errors, paren.span.join(), "capability flags take no arguments");
            return;
        }
        if let Some((eq_token, _)) = arg.value {
            error(errors, eq_token.span(), "capability flags take no value");
            return;
        }
        let name = arg.ident.to_string().to_shouty_snake_case();
        if !KNOWN_FLAGS.contains(&name.as_str()) {
            error(
                errors,
                arg.ident.span(),
                format_args!("unknown capability '{}', expected a flag such as 'ordering' or 'inc_dec'", arg.ident),
            );
            return;
        }
        self.flags.push(syn::Ident::new(&name, arg.ident.span()));
    }

    fn parse_tag(&mut self, arg: MetaArgument, errors: &mut TokenStream) {
        if arg.ident != "name" {
            error(errors, arg.ident.span(), "unknown argument, expected 'name'");
            return;
        }
        match arg.value {
            Some((
                _,
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }),
            )) => {
                if self.name.is_some() {
                    error(errors, lit_str.span(), "duplicate 'name' argument");
                }
                self.name = Some(lit_str);
            }
            _ => error(
                errors,
                arg.ident.span(),
                "the 'name' argument requires a string literal, e.g., name = \"Meters\"",
            ),
        }
    }

    pub fn parse_attrs(attrs: &[syn::Attribute], errors: &mut TokenStream, derive_kind: DeriveKind) -> Self {
        let mut meta = NumtypeMeta::default();
        for attr in attrs {
            if !attr.path().is_ident("numtype") {
                continue;
            }
            let syn::Meta::List(meta_list) = &attr.meta else {
                error(
                    errors,
                    attr.span(),
                    "the 'numtype' attribute must be in the form of #[numtype(...)]",
                );
                continue;
            };
            let args = match Punctuated::<MetaArgument, syn::Token![,]>::parse_terminated
                .parse2(meta_list.tokens.clone())
            {
                Ok(args) => args,
                Err(err) => {
                    errors.extend(err.to_compile_error());
                    continue;
                }
            };
            for arg in args {
                match derive_kind {
                    DeriveKind::Capabilities => meta.parse_flag(arg, errors),
                    DeriveKind::Tag => meta.parse_tag(arg, errors),
                }
            }
        }
        meta
    }
}

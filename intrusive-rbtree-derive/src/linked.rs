//! Implementation of the `#[derive(Linked)]` macro.
//!
//! Picks the struct's link field and emits an `intrusive_rbtree::Linked`
//! impl returning it.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, FieldsNamed, Ident, Type, parse_macro_input};

const HELPER: &str = "tree_link";

/// Main implementation of the Linked derive macro.
pub fn derive_linked_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = expand(&input).unwrap_or_else(syn::Error::into_compile_error);

    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => named_fields,
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Linked can only be derived for structs with named fields, not tuple structs.",
                ));
            }
            Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Linked cannot be derived for unit structs (structs with no fields).",
                ));
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Linked can only be derived for structs, not enums.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Linked cannot be derived for unions.",
            ));
        }
    };

    let field = select_field(name, fields)?;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::intrusive_rbtree::Linked for #name #type_generics #where_clause {
            #[inline]
            fn link(&self) -> &::intrusive_rbtree::Link<usize> {
                &self.#field
            }

            #[inline]
            fn link_mut(&mut self) -> &mut ::intrusive_rbtree::Link<usize> {
                &mut self.#field
            }
        }
    })
}

/// Finds the field to embed: the `#[tree_link]` one, or the only `Link` one.
fn select_field<'a>(name: &Ident, fields: &'a FieldsNamed) -> syn::Result<&'a Ident> {
    let mut marked = Vec::new();
    for field in &fields.named {
        for attribute in &field.attrs {
            if attribute.path().is_ident(HELPER) {
                attribute.meta.require_path_only()?;
                marked.push(field);
            }
        }
    }

    let chosen = match marked.as_slice() {
        [field] => *field,
        [_, second, ..] => {
            return Err(syn::Error::new_spanned(
                second,
                "only one field may be marked #[tree_link]",
            ));
        }
        [] => {
            let candidates: Vec<&Field> = fields
                .named
                .iter()
                .filter(|field| is_link_type(&field.ty))
                .collect();
            match candidates.as_slice() {
                [field] => *field,
                [] => {
                    return Err(syn::Error::new_spanned(
                        name,
                        "Linked requires a field of type `Link<usize>`; mark it with #[tree_link] if its type is an alias.",
                    ));
                }
                [_, second, ..] => {
                    return Err(syn::Error::new_spanned(
                        second,
                        "several fields have type `Link`; mark the one to use with #[tree_link]",
                    ));
                }
            }
        }
    };

    chosen
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(chosen, "link field has no name"))
}

fn is_link_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Link"),
        _ => false,
    }
}

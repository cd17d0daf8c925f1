// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Conversions between struct field values and their schema tuples.
//!
//! Values without named structs already have the schema's Rust type and are cloned or moved as
//! they are. Everything else is rebuilt around the named structs' `to_tuple`/`from_tuple`.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};

use crate::native::NativeType;

/// Expression converting `value` into its schema value.
///
/// `value` is a place of type `T` or `&T`; it is only borrowed.
pub fn to_schema(ty: &NativeType, value: TokenStream) -> TokenStream {
    to_schema_at(ty, value, 0)
}

fn to_schema_at(ty: &NativeType, value: TokenStream, depth: usize) -> TokenStream {
    if !ty.contains_named() {
        return quote!(#value.clone());
    }
    match ty {
        NativeType::Named(_) => quote!(#value.to_tuple()),
        NativeType::DynArray(inner) => {
            let item = format_ident!("item{depth}");
            let conv = to_schema_at(inner, quote!(#item), depth + 1);
            quote!(#value.iter().map(|#item| #conv).collect::<Vec<_>>())
        }
        NativeType::FixedArray(inner, _) => {
            let array = format_ident!("array{depth}");
            let index = format_ident!("i{depth}");
            let conv = to_schema_at(inner, quote!(#array[#index]), depth + 1);
            quote!({
                let #array = &#value;
                ::core::array::from_fn(|#index| #conv)
            })
        }
        NativeType::Tuple(items) => {
            let bindings = tuple_bindings(items.len(), depth);
            let convs = items
                .iter()
                .zip(&bindings)
                .map(|(item, binding)| to_schema_at(item, quote!(#binding), depth + 1));
            quote!({
                let (#(#bindings,)*) = &#value;
                (#(#convs,)*)
            })
        }
        _ => quote!(#value.clone()),
    }
}

/// Expression converting the owned schema value `value` back into the field value.
pub fn from_schema(ty: &NativeType, value: TokenStream) -> TokenStream {
    from_schema_at(ty, value, 0)
}

fn from_schema_at(ty: &NativeType, value: TokenStream, depth: usize) -> TokenStream {
    if !ty.contains_named() {
        return value;
    }
    match ty {
        NativeType::Named(ident) => {
            let ident = syn::Ident::new(ident, Span::call_site());
            quote!(#ident::from_tuple(#value))
        }
        NativeType::DynArray(inner) => {
            let item = format_ident!("item{depth}");
            let conv = from_schema_at(inner, quote!(#item), depth + 1);
            quote!(#value.into_iter().map(|#item| #conv).collect::<Vec<_>>())
        }
        NativeType::FixedArray(inner, _) => {
            let item = format_ident!("item{depth}");
            let conv = from_schema_at(inner, quote!(#item), depth + 1);
            quote!(#value.map(|#item| #conv))
        }
        NativeType::Tuple(items) => {
            let bindings = tuple_bindings(items.len(), depth);
            let convs = items
                .iter()
                .zip(&bindings)
                .map(|(item, binding)| from_schema_at(item, quote!(#binding), depth + 1));
            quote!({
                let (#(#bindings,)*) = #value;
                (#(#convs,)*)
            })
        }
        _ => value,
    }
}

fn tuple_bindings(len: usize, depth: usize) -> Vec<syn::Ident> {
    (0..len)
        .map(|i| syn::Ident::new(&format!("t{depth}_{i}"), Span::call_site()))
        .collect()
}

/// `0x..` byte literals, for selector and topic arrays.
pub fn byte_literals(bytes: &[u8]) -> impl Iterator<Item = syn::LitInt> + '_ {
    bytes
        .iter()
        .map(|byte| syn::LitInt::new(&format!("0x{byte:02x}"), Span::call_site()))
}

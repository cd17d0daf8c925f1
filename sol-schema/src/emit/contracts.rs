// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use proc_macro2::Span;
use syn::parse_quote;

use super::convert::byte_literals;
use crate::schema::{ContractIr, ErrorIr, EventIr, FieldIr, FunctionIr};

/// Every item generated for one contract, in ABI order per kind.
pub fn contract_items(ir: &ContractIr, rt: &syn::Path) -> Vec<syn::Item> {
    let mut items = Vec::new();
    for function in &ir.functions {
        items.extend(function_items(function, rt));
    }
    for event in &ir.events {
        items.extend(event_items(event, rt));
    }
    for error in &ir.errors {
        items.extend(selector_marker(
            &error.selector_ident,
            &error.selector.0,
            &error.signature,
            error_doc(&ir.name, error),
            rt,
        ));
    }
    items
}

fn function_items(ir: &FunctionIr, rt: &syn::Path) -> Vec<syn::Item> {
    let mut doc = format!(" `{}`", ir.signature);
    if let Some(mutability) = &ir.state_mutability {
        doc.push_str(&format!(" ({mutability})"));
    }
    let marker = selector_marker(&ir.selector_ident, &ir.selector.0, &ir.signature, doc, rt);

    let selector = ident(&ir.selector_ident);
    let alias = ident(&ir.alias_ident);
    let returns = schema_tuple(&ir.outputs, rt);
    let args = schema_tuple(&ir.inputs, rt);
    let alias_doc = format!(" Calls `{}` through [`{}`].", ir.name, ir.selector_ident);
    let call: syn::Item = parse_quote! {
        #[doc = #alias_doc]
        pub type #alias = #rt::Call<#selector, #returns, #args>;
    };
    let mut items = marker;
    items.push(call);
    items
}

fn event_items(ir: &EventIr, rt: &syn::Path) -> Vec<syn::Item> {
    let topic = ident(&ir.topic_ident);
    let bytes = byte_literals(ir.topic.as_slice());
    let signature = &ir.signature;
    let doc = format!(" `{signature}`");
    let marker: syn::Item = parse_quote! {
        #[doc = #doc]
        pub struct #topic;
    };
    let marker_impl: syn::Item = parse_quote! {
        impl #rt::Topic for #topic {
            const TOPIC: [u8; 32] = [#(#bytes),*];
            const SIGNATURE: &'static str = #signature;
        }
    };

    let mut items = vec![marker, marker_impl];
    if let (Some(alias), Some(data)) = (&ir.alias_ident, &ir.data_struct) {
        let alias = ident(alias);
        let data = ident(data);
        let alias_doc = format!(" The `{}` event, decoded from its log data.", ir.name);
        items.push(parse_quote! {
            #[doc = #alias_doc]
            pub type #alias = #rt::Event<#topic, #data>;
        });
    }
    items
}

fn error_doc(contract: &str, ir: &ErrorIr) -> String {
    format!(" Custom error `{}` of `{contract}`.", ir.signature)
}

/// Unit struct carrying a 4-byte selector.
fn selector_marker(
    name: &str,
    selector: &[u8; 4],
    signature: &str,
    doc: String,
    rt: &syn::Path,
) -> Vec<syn::Item> {
    let marker = ident(name);
    let bytes = byte_literals(selector);
    vec![
        parse_quote! {
            #[doc = #doc]
            pub struct #marker;
        },
        parse_quote! {
            impl #rt::Selector for #marker {
                const SELECTOR: [u8; 4] = [#(#bytes),*];
                const SIGNATURE: &'static str = #signature;
            }
        },
    ]
}

fn schema_tuple(fields: &[FieldIr], rt: &syn::Path) -> syn::Type {
    let types = fields.iter().map(|field| field.native.sol_type(rt));
    parse_quote!((#(#types,)*))
}

fn ident(name: &str) -> syn::Ident {
    syn::Ident::new(name, Span::call_site())
}

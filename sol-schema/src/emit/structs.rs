// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::parse_quote;

use super::convert;
use crate::{
    native::schema_ident,
    registry::StructOrigin,
    schema::{FieldIr, FromNonIndexed, StructIr},
};

/// Struct definition, schema alias and tuple conversions.
pub fn struct_items(ir: &StructIr, rt: &syn::Path) -> Vec<syn::Item> {
    let ident = ident(&ir.ident);
    let schema = schema_ident(&ir.ident);
    let tuple_ty: syn::Type = parse_quote!(<#schema as #rt::alloy_sol_types::SolType>::RustType);

    let doc = struct_doc(ir);
    let derives = if ir.derive_default {
        quote!(#[derive(Debug, Clone, PartialEq, Default)])
    } else {
        quote!(#[derive(Debug, Clone, PartialEq)])
    };
    let field_idents: Vec<_> = ir.fields.iter().map(|field| field_ident(field)).collect();
    let field_defs = ir.fields.iter().zip(&field_idents).map(|(field, name)| {
        let ty = field.native.rust_type(rt);
        let doc = format!(" `{} {}`", field.canonical_type, field.name);
        quote! {
            #[doc = #doc]
            pub #name: #ty
        }
    });
    let sol_types = ir.fields.iter().map(|field| field.native.sol_type(rt));
    let to_tuple = ir
        .fields
        .iter()
        .zip(&field_idents)
        .map(|(field, name)| convert::to_schema(&field.native, quote!(self.#name)));
    let from_tuple = ir.fields.iter().zip(&field_idents).map(|(field, name)| {
        if field.native.contains_named() {
            let conv = convert::from_schema(&field.native, quote!(#name));
            quote!(#name: #conv)
        } else {
            quote!(#name)
        }
    });
    let from_non_indexed = ir
        .from_non_indexed
        .as_ref()
        .map(|method| from_non_indexed(ir, method));

    let item_struct: syn::ItemStruct = parse_quote! {
        #[doc = #doc]
        #derives
        pub struct #ident {
            #(#field_defs,)*
        }
    };
    let schema_doc = format!(" Binary layout of [`{}`].", ir.ident);
    let item_schema: syn::ItemType = parse_quote! {
        #[doc = #schema_doc]
        pub type #schema = (#(#sol_types,)*);
    };
    let item_impl: syn::ItemImpl = parse_quote! {
        impl #ident {
            pub fn to_tuple(&self) -> #tuple_ty {
                (#(#to_tuple,)*)
            }

            pub fn from_tuple(tuple: #tuple_ty) -> Self {
                let (#(#field_idents,)*) = tuple;
                Self {
                    #(#from_tuple,)*
                }
            }

            #from_non_indexed
        }
    };
    vec![item_struct.into(), item_schema.into(), item_impl.into()]
}

/// `NamedStruct` implementation binding a struct to its schema.
pub fn binding(ir: &StructIr, rt: &syn::Path) -> syn::Item {
    let ident = ident(&ir.ident);
    let schema = schema_ident(&ir.ident);
    let name = &ir.qualified_name;
    parse_quote! {
        impl #rt::NamedStruct for #ident {
            const NAME: &'static str = #name;
            type Schema = #schema;

            fn to_tuple(&self) -> <Self::Schema as #rt::alloy_sol_types::SolType>::RustType {
                #ident::to_tuple(self)
            }

            fn from_tuple(tuple: <Self::Schema as #rt::alloy_sol_types::SolType>::RustType) -> Self {
                #ident::from_tuple(tuple)
            }
        }
    }
}

fn from_non_indexed(ir: &StructIr, method: &FromNonIndexed) -> TokenStream {
    let source = ident(&method.source);
    let inits = ir.fields.iter().map(|field| {
        let target = field_ident(field);
        match method.copied.iter().find(|(name, _)| *name == field.ident) {
            Some((_, from)) => {
                let from = format_ident!("{}", from);
                quote!(#target: data.#from.clone())
            }
            None => quote!(#target: ::core::default::Default::default()),
        }
    });
    let indexed: Vec<_> = method
        .defaulted
        .iter()
        .map(|name| format!("`{name}`"))
        .collect();
    let doc = format!(
        " Builds the full event view from its decoded [`{}`] payload.",
        method.source
    );
    let indexed_doc = format!(
        " Indexed fields ({}) are left at their default value; set them from the log topics.",
        indexed.join(", ")
    );
    quote! {
        #[doc = #doc]
        #[doc = ""]
        #[doc = #indexed_doc]
        pub fn from_non_indexed(data: &#source) -> Self {
            Self {
                #(#inits,)*
            }
        }
    }
}

fn struct_doc(ir: &StructIr) -> String {
    let fields: Vec<_> = ir.fields.iter().map(|field| field.canonical_type.as_str()).collect();
    match &ir.origin {
        StructOrigin::Explicit => format!(" `{}({})`", ir.qualified_name, fields.join(",")),
        StructOrigin::EventData { event } => {
            format!(" Non-indexed parameters of the `{event}` event.")
        }
    }
}

fn ident(name: &str) -> syn::Ident {
    syn::Ident::new(name, Span::call_site())
}

/// Field identifiers may be raw (`r#type`).
fn field_ident(field: &FieldIr) -> syn::Ident {
    format_ident!("{}", field.ident)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        native::NativeType,
        testing::{assert_items_eq, assert_tokens_eq},
    };

    fn field(name: &str, canonical: &str, native: NativeType, indexed: bool) -> FieldIr {
        FieldIr {
            name: name.into(),
            ident: crate::naming::field_ident(name, 0),
            canonical_type: canonical.into(),
            native,
            indexed,
        }
    }

    fn rt() -> syn::Path {
        parse_quote!(::rt)
    }

    #[test]
    fn plain_struct() {
        let ir = StructIr {
            qualified_name: "Multicall3.Call".into(),
            ident: "Multicall3_Call".into(),
            origin: StructOrigin::Explicit,
            fields: vec![
                field("target", "address", NativeType::Address, false),
                field("type", "bool", NativeType::Bool, false),
            ],
            derive_default: true,
            from_non_indexed: None,
        };
        assert_items_eq(
            struct_items(&ir, &rt()),
            parse_quote! {
                #[doc = " `Multicall3.Call(address,bool)`"]
                #[derive(Debug, Clone, PartialEq, Default)]
                pub struct Multicall3_Call {
                    #[doc = " `address target`"]
                    pub target: <::rt::alloy_sol_types::sol_data::Address as ::rt::alloy_sol_types::SolType>::RustType,
                    #[doc = " `bool type`"]
                    pub r#type: <::rt::alloy_sol_types::sol_data::Bool as ::rt::alloy_sol_types::SolType>::RustType,
                }

                #[doc = " Binary layout of [`Multicall3_Call`]."]
                pub type Multicall3_CallSchema = (
                    ::rt::alloy_sol_types::sol_data::Address,
                    ::rt::alloy_sol_types::sol_data::Bool,
                );

                impl Multicall3_Call {
                    pub fn to_tuple(&self) -> <Multicall3_CallSchema as ::rt::alloy_sol_types::SolType>::RustType {
                        (self.target.clone(), self.r#type.clone(),)
                    }

                    pub fn from_tuple(tuple: <Multicall3_CallSchema as ::rt::alloy_sol_types::SolType>::RustType) -> Self {
                        let (target, r#type,) = tuple;
                        Self { target, r#type }
                    }
                }
            },
        );
    }

    #[test]
    fn complete_event_view() {
        let ir = StructIr {
            qualified_name: "Pool.SwapCompleteEventData".into(),
            ident: "Pool_SwapCompleteEventData".into(),
            origin: StructOrigin::Explicit,
            fields: vec![
                field("sender", "address", NativeType::Address, true),
                field("amount0", "int256", NativeType::Int(256), false),
            ],
            derive_default: true,
            from_non_indexed: Some(FromNonIndexed {
                source: "Pool_SwapEventData".into(),
                copied: vec![("amount0".into(), "amount0".into())],
                defaulted: vec!["sender".into()],
            }),
        };
        let items = struct_items(&ir, &rt());
        let syn::Item::Impl(item_impl) = &items[2] else {
            panic!("expected impl block");
        };
        let method = &item_impl.items[2];
        let expected: syn::ImplItem = parse_quote! {
            #[doc = " Builds the full event view from its decoded [`Pool_SwapEventData`] payload."]
            #[doc = ""]
            #[doc = " Indexed fields (`sender`) are left at their default value; set them from the log topics."]
            pub fn from_non_indexed(data: &Pool_SwapEventData) -> Self {
                Self {
                    sender: ::core::default::Default::default(),
                    amount0: data.amount0.clone(),
                }
            }
        };
        assert_tokens_eq(method, expected);
    }

    #[test]
    fn nested_struct_fields_convert() {
        let ir = StructIr {
            qualified_name: "Multicall3.Batch".into(),
            ident: "Multicall3_Batch".into(),
            origin: StructOrigin::Explicit,
            fields: vec![field(
                "calls",
                "(address,bytes)[]",
                NativeType::DynArray(Box::new(NativeType::Named("Multicall3_Call".into()))),
                false,
            )],
            derive_default: true,
            from_non_indexed: None,
        };
        let items = struct_items(&ir, &rt());
        let syn::Item::Impl(item_impl) = &items[2] else {
            panic!("expected impl block");
        };
        let expected: syn::ItemImpl = parse_quote! {
            impl Multicall3_Batch {
                pub fn to_tuple(&self) -> <Multicall3_BatchSchema as ::rt::alloy_sol_types::SolType>::RustType {
                    (self.calls.iter().map(|item0| item0.to_tuple()).collect::<Vec<_>>(),)
                }

                pub fn from_tuple(tuple: <Multicall3_BatchSchema as ::rt::alloy_sol_types::SolType>::RustType) -> Self {
                    let (calls,) = tuple;
                    Self {
                        calls: calls
                            .into_iter()
                            .map(|item0| Multicall3_Call::from_tuple(item0))
                            .collect::<Vec<_>>(),
                    }
                }
            }
        };
        assert_tokens_eq(item_impl, expected);
    }

    #[test]
    fn named_struct_binding() {
        let ir = StructIr {
            qualified_name: "ERC20.TransferEventData".into(),
            ident: "ERC20_TransferEventData".into(),
            origin: StructOrigin::EventData {
                event: "Transfer".into(),
            },
            fields: vec![field("value", "uint256", NativeType::Uint(256), false)],
            derive_default: true,
            from_non_indexed: None,
        };
        assert_eq!(
            struct_doc(&ir),
            " Non-indexed parameters of the `Transfer` event."
        );
        let expected: syn::Item = parse_quote! {
            impl ::rt::NamedStruct for ERC20_TransferEventData {
                const NAME: &'static str = "ERC20.TransferEventData";
                type Schema = ERC20_TransferEventDataSchema;

                fn to_tuple(&self) -> <Self::Schema as ::rt::alloy_sol_types::SolType>::RustType {
                    ERC20_TransferEventData::to_tuple(self)
                }

                fn from_tuple(tuple: <Self::Schema as ::rt::alloy_sol_types::SolType>::RustType) -> Self {
                    ERC20_TransferEventData::from_tuple(tuple)
                }
            }
        };
        assert_tokens_eq(binding(&ir, &rt()), expected);
    }
}

// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Mapping from ABI types to the Rust types generated code uses.

use std::{collections::HashSet, fmt};

use proc_macro2::{Literal, Span};
use quote::format_ident;
use serde::Serialize;
use syn::parse_quote;

use crate::{
    config::FixedBytesMapping,
    registry::StructRegistry,
    types::{AbiType, Scalar},
};

/// Type descriptor for generated code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeType {
    Bool,
    Uint(u16),
    Int(u16),
    Address,
    Bytes,
    String,
    FixedBytes(u8),
    Function,
    DynArray(Box<NativeType>),
    FixedArray(Box<NativeType>, usize),
    Tuple(Vec<NativeType>),
    /// A registered struct, by Rust identifier.
    Named(String),
    /// Stand-in for a primitive with no known mapping. Encoded as `uint256`.
    Fallback { raw: String },
}

/// Maps [`AbiType`]s to [`NativeType`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeMapper {
    pub fixed_bytes: FixedBytesMapping,
}

impl TypeMapper {
    pub fn new(fixed_bytes: FixedBytesMapping) -> Self {
        Self { fixed_bytes }
    }

    /// Named structs refer to the identifier `registry` assigned them. Those missing from it map
    /// to plain tuples.
    pub fn map(&self, ty: &AbiType, registry: &StructRegistry) -> NativeType {
        match ty {
            AbiType::Scalar(scalar) => self.map_scalar(scalar),
            AbiType::FixedArray(inner, len) => {
                NativeType::FixedArray(Box::new(self.map(inner, registry)), *len)
            }
            AbiType::DynArray(inner) => NativeType::DynArray(Box::new(self.map(inner, registry))),
            AbiType::Tuple(fields) => NativeType::Tuple(
                fields
                    .iter()
                    .map(|field| self.map(&field.ty, registry))
                    .collect(),
            ),
            AbiType::Named(named) => match registry.ident(&named.name) {
                Some(ident) => NativeType::Named(ident.to_owned()),
                None => NativeType::Tuple(
                    named
                        .fields
                        .iter()
                        .map(|field| self.map(&field.ty, registry))
                        .collect(),
                ),
            },
        }
    }

    fn map_scalar(&self, scalar: &Scalar) -> NativeType {
        match scalar {
            Scalar::Bool => NativeType::Bool,
            Scalar::Uint(bits) => NativeType::Uint(*bits),
            Scalar::Int(bits) => NativeType::Int(*bits),
            Scalar::Address => NativeType::Address,
            Scalar::Bytes => NativeType::Bytes,
            Scalar::String => NativeType::String,
            Scalar::FixedBytes(len) => match self.fixed_bytes {
                FixedBytesMapping::Native => NativeType::FixedBytes(*len),
                FixedBytesMapping::Widen => NativeType::Uint(u16::from(*len) * 8),
            },
            Scalar::Function => NativeType::Function,
            Scalar::Unknown(raw) => NativeType::Fallback { raw: raw.clone() },
        }
    }
}

impl NativeType {
    pub fn contains_named(&self) -> bool {
        match self {
            Self::Named(_) => true,
            Self::DynArray(inner) | Self::FixedArray(inner, _) => inner.contains_named(),
            Self::Tuple(items) => items.iter().any(Self::contains_named),
            _ => false,
        }
    }

    /// Length of the longest anonymous tuple in the type, not looking into named structs.
    pub fn widest_tuple(&self) -> usize {
        match self {
            Self::DynArray(inner) | Self::FixedArray(inner, _) => inner.widest_tuple(),
            Self::Tuple(items) => items
                .iter()
                .map(Self::widest_tuple)
                .fold(items.len(), usize::max),
            _ => 0,
        }
    }

    /// Whether the value type implements `Default`, given the structs that derive it.
    pub fn has_default(&self, defaultable: &HashSet<String>) -> bool {
        match self {
            Self::Named(ident) => defaultable.contains(ident),
            Self::DynArray(_) => true,
            Self::FixedArray(inner, len) => *len <= 32 && inner.has_default(defaultable),
            Self::Tuple(items) => {
                items.len() <= 12 && items.iter().all(|item| item.has_default(defaultable))
            }
            _ => true,
        }
    }

    /// Raw spellings of every fallback in the type.
    pub fn fallbacks(&self) -> Vec<&str> {
        match self {
            Self::Fallback { raw } => vec![raw.as_str()],
            Self::DynArray(inner) | Self::FixedArray(inner, _) => inner.fallbacks(),
            Self::Tuple(items) => items.iter().flat_map(Self::fallbacks).collect(),
            _ => Vec::new(),
        }
    }

    /// The `sol_data` type describing the binary layout.
    ///
    /// Named structs refer to the `<Ident>Schema` alias emitted next to the struct.
    pub fn sol_type(&self, rt: &syn::Path) -> syn::Type {
        let sol_data: syn::Path = parse_quote!(#rt::alloy_sol_types::sol_data);
        match self {
            Self::Bool => parse_quote!(#sol_data::Bool),
            Self::Uint(bits) => {
                let bits = Literal::u16_unsuffixed(*bits);
                parse_quote!(#sol_data::Uint<#bits>)
            }
            Self::Int(bits) => {
                let bits = Literal::u16_unsuffixed(*bits);
                parse_quote!(#sol_data::Int<#bits>)
            }
            Self::Address => parse_quote!(#sol_data::Address),
            Self::Bytes => parse_quote!(#sol_data::Bytes),
            Self::String => parse_quote!(#sol_data::String),
            Self::FixedBytes(len) => {
                let len = Literal::u8_unsuffixed(*len);
                parse_quote!(#sol_data::FixedBytes<#len>)
            }
            Self::Function => parse_quote!(#sol_data::Function),
            Self::DynArray(inner) => {
                let inner = inner.sol_type(rt);
                parse_quote!(#sol_data::Array<#inner>)
            }
            Self::FixedArray(inner, len) => {
                let inner = inner.sol_type(rt);
                let len = Literal::usize_unsuffixed(*len);
                parse_quote!(#sol_data::FixedArray<#inner, #len>)
            }
            Self::Tuple(items) => {
                let items = items.iter().map(|item| item.sol_type(rt));
                parse_quote!((#(#items,)*))
            }
            Self::Named(ident) => {
                let schema = schema_ident(ident);
                parse_quote!(#schema)
            }
            Self::Fallback { .. } => parse_quote!(#sol_data::Uint<256>),
        }
    }

    /// The Rust value type.
    ///
    /// Types without named structs use the schema's own `RustType`. Named structs are their own
    /// value type, and containers of them are spelled out.
    pub fn rust_type(&self, rt: &syn::Path) -> syn::Type {
        if !self.contains_named() {
            let sol = self.sol_type(rt);
            return parse_quote!(<#sol as #rt::alloy_sol_types::SolType>::RustType);
        }
        match self {
            Self::Named(ident) => {
                let ident = syn::Ident::new(ident, Span::call_site());
                parse_quote!(#ident)
            }
            Self::DynArray(inner) => {
                let inner = inner.rust_type(rt);
                parse_quote!(Vec<#inner>)
            }
            Self::FixedArray(inner, len) => {
                let inner = inner.rust_type(rt);
                let len = Literal::usize_unsuffixed(*len);
                parse_quote!([#inner; #len])
            }
            Self::Tuple(items) => {
                let items = items.iter().map(|item| item.rust_type(rt));
                parse_quote!((#(#items,)*))
            }
            _ => unreachable!("only containers hold named structs"),
        }
    }
}

/// Identifier of the schema alias emitted for a struct.
pub fn schema_ident(ident: &str) -> syn::Ident {
    format_ident!("{ident}Schema")
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("Bool"),
            Self::Uint(bits) => write!(f, "Uint<{bits}>"),
            Self::Int(bits) => write!(f, "Int<{bits}>"),
            Self::Address => f.write_str("Address"),
            Self::Bytes => f.write_str("Bytes"),
            Self::String => f.write_str("String"),
            Self::FixedBytes(len) => write!(f, "FixedBytes<{len}>"),
            Self::Function => f.write_str("Function"),
            Self::DynArray(inner) => write!(f, "Array<{inner}>"),
            Self::FixedArray(inner, len) => write!(f, "FixedArray<{inner}, {len}>"),
            Self::Tuple(items) => {
                let items: Vec<_> = items.iter().map(ToString::to_string).collect();
                write!(f, "({})", items.join(", "))
            }
            Self::Named(ident) => f.write_str(ident),
            Self::Fallback { raw } => write!(f, "Uint<256> (fallback for {raw})"),
        }
    }
}

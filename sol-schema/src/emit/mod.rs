// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Artifact emitters.
//!
//! The Rust emitter produces one module file: every named struct first, then their
//! `NamedStruct` bindings, then the selectors, topics and aliases of each contract. Output depends
//! only on the lowered schema, so reruns over the same inputs are byte-identical.

use syn::parse_quote;

use crate::{
    config::{CompilerConfig, Format},
    error::Result,
    schema::SchemaIr,
};

mod contracts;
mod convert;
mod structs;

/// Renders `ir` in the configured format.
pub fn emit(ir: &SchemaIr, config: &CompilerConfig) -> Result<String> {
    match config.format {
        Format::Rust => rust(ir, &config.runtime()?, config.module_header),
        Format::Json => json(ir),
    }
}

/// Rust module source, with generated items referring to the runtime crate at `rt`.
pub fn rust(ir: &SchemaIr, rt: &syn::Path, module_header: bool) -> Result<String> {
    let mut file = syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: Vec::new(),
    };
    if module_header {
        file.attrs = header(ir);
        file.attrs.push(parse_quote! {
            #![allow(non_camel_case_types, non_snake_case, dead_code, clippy::all)]
        });
    }

    for item in &ir.structs {
        file.items.extend(structs::struct_items(item, rt));
    }
    for item in &ir.structs {
        file.items.push(structs::binding(item, rt));
    }
    for contract in &ir.contracts {
        file.items.extend(contracts::contract_items(contract, rt));
    }
    Ok(prettyplease::unparse(&file))
}

/// Pretty-printed JSON dump of the lowered schema.
pub fn json(ir: &SchemaIr) -> Result<String> {
    let mut out = serde_json::to_string_pretty(ir)?;
    out.push('\n');
    Ok(out)
}

fn header(ir: &SchemaIr) -> Vec<syn::Attribute> {
    let contracts: Vec<_> = ir.contracts.iter().map(|c| c.name.as_str()).collect();
    let lines = [
        " Generated by sol-schema. Do not edit.".to_string(),
        String::new(),
        format!(" Contracts: {}", contracts.join(", ")),
    ];
    lines
        .iter()
        .map(|line| parse_quote!(#![doc = #line]))
        .collect()
}

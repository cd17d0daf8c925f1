// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Rust identifiers for generated items.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use convert_case::{Boundary, Case, Converter};

const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super", "Self"];

/// Uppercases the first character, leaving the rest as written.
pub fn pascal(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character, leaving the rest as written.
pub fn camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replaces characters that may not appear in an identifier.
pub fn sanitize(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Identifier for an item built from a contract name and a member name, e.g. `Multicall3_Call`.
pub fn type_ident(contract: &str, name: &str) -> String {
    sanitize(&format!("{contract}_{}", pascal(name)))
}

/// Snake-case field identifier. Unnamed fields become `f<index>`.
///
/// Keywords become raw identifiers, except those that may not be written raw, which get a trailing
/// underscore.
pub fn field_ident(name: &str, index: usize) -> String {
    let snake = Converter::new()
        .set_boundaries(&[
            Boundary::Underscore,
            Boundary::Hyphen,
            Boundary::Space,
            Boundary::LowerUpper,
            Boundary::Acronym,
        ])
        .to_case(Case::Snake)
        .convert(name);
    let ident = sanitize(&snake);
    if ident.trim_matches('_').is_empty() {
        format!("f{index}")
    } else if RESERVED.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// Field identifiers for a whole member list, made unique by appending the member index to any
/// identifier already taken.
pub fn field_idents<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut taken = HashSet::new();
    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let mut ident = field_ident(name, index);
            while !taken.insert(ident.clone()) {
                ident = format!("{}_{index}", ident.trim_start_matches("r#"));
            }
            ident
        })
        .collect()
}

/// Disambiguates overloaded names.
///
/// Takes `(name, signature)` pairs and returns one name per pair, in the same order. Overloads of a
/// name are ordered by signature; the first keeps the bare name and the others get `_<index>`.
/// Pairs with identical signatures get identical names.
pub fn overload_names(items: &[(&str, &str)]) -> Vec<String> {
    let mut overloads: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for &(name, signature) in items {
        overloads.entry(name).or_default().insert(signature);
    }
    items
        .iter()
        .map(|&(name, signature)| {
            let index = overloads[name]
                .iter()
                .position(|other| *other == signature)
                .unwrap_or_default();
            match index {
                0 => name.to_string(),
                x => format!("{name}_{x}"),
            }
        })
        .collect()
}

// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Utilities for testing.

use quote::ToTokens;

/// Assert equality of two item lists, with pretty diff output for failures.
pub fn assert_items_eq(left: Vec<syn::Item>, right: syn::File) {
    let left = syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: left,
    };
    pretty_assertions::assert_str_eq!(prettyplease::unparse(&left), prettyplease::unparse(&right));
}

/// Assert equality of two AST nodes by their tokens.
pub fn assert_tokens_eq(left: impl ToTokens, right: impl ToTokens) {
    pretty_assertions::assert_str_eq!(
        left.into_token_stream().to_string(),
        right.into_token_stream().to_string()
    );
}

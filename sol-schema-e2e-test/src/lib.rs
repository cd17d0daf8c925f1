// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Bindings generated at build time from the `sol-schema` test fixtures listed in
//! `SolSchema.toml`.

#[allow(non_camel_case_types, non_snake_case, dead_code, clippy::all)]
pub mod schema {
    include!(concat!(env!("OUT_DIR"), "/schema.rs"));
}

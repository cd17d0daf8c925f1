// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiles Solidity JSON ABIs into canonical signatures, selectors and topics, and into typed
//! Rust schemas built on [`sol_schema_core`](https://docs.rs/sol-schema-core).
//!
//! A run loads every ABI, registers named structs in two passes (explicit structs first, then the
//! synthesized event payloads), lowers everything into a [`SchemaIr`] and renders it. See
//! [`Compiler`] for the library entry point and [`ops`] for the file-level operations the CLI uses.

pub mod abi;
pub mod compiler;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub(crate) mod error;
pub mod hash;
pub mod manifest;
pub mod naming;
pub mod native;
pub mod ops;
pub mod registry;
pub mod schema;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use compiler::{Compilation, Compiler, ContractSource, LoadedContract};
pub use config::{CollisionPolicy, CompilerConfig, FixedBytesMapping, Format};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use error::{Error, Result};
pub use schema::SchemaIr;

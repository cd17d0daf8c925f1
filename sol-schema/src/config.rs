// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use serde::Deserialize;
use typed_builder::TypedBuilder;

use crate::error::{Error, Result};

/// Path of the runtime crate as seen from generated code.
pub const DEFAULT_RUNTIME: &str = "::sol_schema_core";

/// How `bytesN` types are represented in generated code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixedBytesMapping {
    /// `FixedBytes<N>`.
    #[default]
    Native,
    /// An unsigned integer of the same bit width, `Uint<8 * N>`.
    Widen,
}

/// What to do when a struct name is registered twice with different fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Keep the first definition and record a warning.
    #[default]
    FirstWins,
    /// Fail the run.
    Strict,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// A Rust module.
    #[default]
    Rust,
    /// The lowered schema as JSON.
    Json,
}

#[derive(Clone, Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct CompilerConfig {
    #[builder(default = DEFAULT_RUNTIME.to_owned())]
    pub runtime_path: String,
    pub fixed_bytes: FixedBytesMapping,
    pub struct_collisions: CollisionPolicy,
    pub format: Format,
    /// Start Rust output with the inner doc header and lint attributes. Turn off to `include!`
    /// the artifact.
    #[builder(default = true)]
    pub module_header: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CompilerConfig {
    /// The runtime path, parsed.
    pub fn runtime(&self) -> Result<syn::Path> {
        syn::parse_str(&self.runtime_path)
            .map_err(|_| Error::InvalidRuntimePath(self.runtime_path.clone()))
    }
}

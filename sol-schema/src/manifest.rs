// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! `SolSchema.toml` manifests.
//!
//! ```toml
//! [output]
//! path = "src/generated.rs"
//! fixed-bytes = "native"
//!
//! [[contract]]
//! name = "ERC20"
//! abi = "abi/erc20.json"
//! ```
//!
//! Contracts compile in the order they are listed. ABI and output paths are relative to the
//! directory holding the manifest.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    compiler::ContractSource,
    config::{CollisionPolicy, CompilerConfig, FixedBytesMapping, Format, DEFAULT_RUNTIME},
};

/// Default manifest filename.
pub const FILENAME: &str = "SolSchema.toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing {}", .0.display())]
    Missing(PathBuf),

    #[error("manifest lists no contracts")]
    Empty,
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::Missing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(manifest)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "contract")]
    pub contracts: Vec<ContractEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub runtime: Option<String>,
    #[serde(default)]
    pub fixed_bytes: FixedBytesMapping,
    #[serde(default)]
    pub collisions: CollisionPolicy,
    #[serde(default)]
    pub format: Format,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractEntry {
    pub name: String,
    pub abi: PathBuf,
}

/// A manifest together with the directory its relative paths start from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestFile {
    pub dir: PathBuf,
    pub manifest: Manifest,
}

impl ManifestFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let manifest: Manifest = load(path)?;
        if manifest.contracts.is_empty() {
            return Err(ManifestError::Empty);
        }
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        log::debug!(
            "loaded manifest {} with {} contract(s)",
            path.display(),
            manifest.contracts.len()
        );
        Ok(Self { dir, manifest })
    }

    /// Contract sources in manifest order, with ABI paths resolved.
    pub fn sources(&self) -> Vec<ContractSource> {
        self.manifest
            .contracts
            .iter()
            .map(|entry| ContractSource::new(&entry.name, self.dir.join(&entry.abi)))
            .collect()
    }

    /// Resolved output path, if the manifest names one.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.manifest.output.path.as_ref().map(|path| self.dir.join(path))
    }

    pub fn compiler_config(&self) -> CompilerConfig {
        let output = &self.manifest.output;
        CompilerConfig::builder()
            .runtime_path(output.runtime.as_deref().unwrap_or(DEFAULT_RUNTIME))
            .fixed_bytes(output.fixed_bytes)
            .struct_collisions(output.collisions)
            .format(output.format)
            .build()
    }
}

// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Load(#[from] crate::abi::LoadError),
    #[error("{0}")]
    Manifest(#[from] crate::manifest::ManifestError),

    #[error("struct {name} is registered twice with different fields: ({existing}) vs ({incoming})")]
    StructCollision {
        name: String,
        existing: String,
        incoming: String,
    },
    #[error("invalid runtime path `{0}`")]
    InvalidRuntimePath(String),
    #[error("no contracts to compile")]
    NoSources,
    #[error("compilation failed with {count} error(s): {errors}")]
    Failed { count: usize, errors: String },
}

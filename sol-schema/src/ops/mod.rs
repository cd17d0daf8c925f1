// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use generate::{generate, GenerateConfig, Generated};
pub use inspect::inspect;

mod generate;
mod inspect;

// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use sol_schema::ops;

use crate::error::CargoSolSchemaResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// ABI JSON file, either a bare array or an artifact with an `abi` field.
    abi: PathBuf,
    /// Contract name (defaults to the file stem).
    #[arg(long)]
    name: Option<String>,
}

pub fn exec(args: Args) -> CargoSolSchemaResult {
    let report = ops::inspect(&args.abi, args.name.as_deref())?;
    print!("{report}");
    Ok(())
}

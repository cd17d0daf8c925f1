// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{io::Write, path::PathBuf};

use sol_schema::{
    manifest,
    ops::{self, GenerateConfig},
    ContractSource, Format,
};

use crate::{error::CargoSolSchemaResult, utils};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Manifest listing the contracts to compile (defaults to ./SolSchema.toml when no --abi is
    /// given).
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Extra contract as NAME=PATH. May be repeated.
    #[arg(long = "abi", value_name = "NAME=PATH", value_parser = utils::parse_source)]
    sources: Vec<ContractSource>,
    /// The output file (defaults to the manifest's, then stdout).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Artifact format.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Represent bytesN as unsigned integers of the same width.
    #[arg(long)]
    widen_fixed_bytes: bool,
    /// Fail when a struct name is reused with different fields.
    #[arg(long)]
    strict_structs: bool,
    /// Write the artifact even when some contracts fail to compile.
    #[arg(long)]
    keep_going: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum FormatArg {
    Rust,
    Json,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Rust => Format::Rust,
            FormatArg::Json => Format::Json,
        }
    }
}

pub fn exec(args: Args) -> CargoSolSchemaResult {
    let manifest = args.manifest.or_else(|| {
        let default = PathBuf::from(manifest::FILENAME);
        (args.sources.is_empty() && default.exists()).then_some(default)
    });
    log::debug!("manifest: {manifest:?}");

    let config = GenerateConfig::builder()
        .manifest(manifest)
        .sources(args.sources)
        .out(args.out)
        .format(args.format.map(Format::from))
        .widen_fixed_bytes(args.widen_fixed_bytes)
        .strict_structs(args.strict_structs)
        .keep_going(args.keep_going)
        .build();
    let generated = ops::generate(&config)?;

    for diag in &generated.compilation.diagnostics {
        utils::print_diagnostic(diag);
    }
    if generated.path.is_none() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(generated.compilation.artifact.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

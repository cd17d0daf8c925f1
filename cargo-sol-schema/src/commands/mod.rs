// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CargoSolSchemaResult;

mod generate;
mod inspect;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Compile ABI files into a bindings module
    #[clap(visible_alias = "g")]
    Generate(generate::Args),
    /// Print the signatures, selectors and topics of an ABI file
    #[clap(visible_alias = "i")]
    Inspect(inspect::Args),
}

pub fn exec(cmd: Command) -> CargoSolSchemaResult {
    match cmd {
        Command::Generate(args) => generate::exec(args),
        Command::Inspect(args) => inspect::exec(args),
    }
}

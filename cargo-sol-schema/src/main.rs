// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `cargo-sol-schema`.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod error;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "sol-schema")]
#[command(bin_name = "cargo sol-schema")]
#[command(author = "Offchain Labs, Inc.")]
#[command(about = "Compile Solidity ABI files into typed Rust bindings", long_about = None)]
#[command(propagate_version = true)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: commands::Command,

    /// Whether to print debug info.
    #[arg(long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Parse args from CLI, skipping `sol-schema` arg coming from `cargo`
    let args: Vec<_> = std::env::args().skip(1).collect();
    let args = Args::parse_from(args);

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = simple_logger::init_with_level(log_level) {
        utils::print_error(err);
        return ExitCode::FAILURE;
    }

    match commands::exec(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}

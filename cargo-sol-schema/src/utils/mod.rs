// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt::Display, path::PathBuf};

use eyre::eyre;
use sol_schema::{ContractSource, Diagnostic};

use style::{BOLD, ERROR, WARNING};

mod style;

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

pub fn print_diagnostic(diag: &Diagnostic) {
    if diag.is_error() {
        print_error(diag);
    } else {
        eprintln!("{WARNING}warning{WARNING:#}{BOLD}:{BOLD:#} {diag}");
    }
}

/// Parses a `NAME=PATH` contract argument.
pub fn parse_source(arg: &str) -> eyre::Result<ContractSource> {
    let (name, path) = arg
        .split_once('=')
        .ok_or_else(|| eyre!("expected NAME=PATH, got `{arg}`"))?;
    if name.is_empty() || path.is_empty() {
        return Err(eyre!("expected NAME=PATH, got `{arg}`"));
    }
    Ok(ContractSource::new(name, PathBuf::from(path)))
}

// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{env, fs, path::PathBuf};

use eyre::bail;
use sol_schema::{
    manifest::{ManifestFile, FILENAME},
    Compiler, CompilerConfig,
};

fn main() -> eyre::Result<()> {
    println!("cargo:rerun-if-changed={FILENAME}");
    let manifest = ManifestFile::load(FILENAME)?;
    let sources = manifest.sources();
    for source in &sources {
        println!("cargo:rerun-if-changed={}", source.path.display());
    }

    let config = CompilerConfig {
        module_header: false,
        ..manifest.compiler_config()
    };
    let compilation = Compiler::new(config).compile(&sources)?;
    if compilation.has_errors() {
        bail!("schema generation failed: {:?}", compilation.diagnostics);
    }

    let out = PathBuf::from(env::var("OUT_DIR")?).join("schema.rs");
    fs::write(out, compilation.artifact)?;
    Ok(())
}

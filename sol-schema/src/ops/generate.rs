// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use typed_builder::TypedBuilder;

use crate::{
    compiler::{Compilation, Compiler, ContractSource},
    config::{CollisionPolicy, CompilerConfig, FixedBytesMapping, Format},
    diagnostics::Diagnostic,
    error::{Error, Result},
    manifest::ManifestFile,
};

#[derive(Clone, Debug, Default, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct GenerateConfig {
    /// Manifest listing the contracts and output settings.
    pub manifest: Option<PathBuf>,
    /// Contracts compiled after the manifest's.
    pub sources: Vec<ContractSource>,
    /// Output path, overriding the manifest's.
    pub out: Option<PathBuf>,
    pub format: Option<Format>,
    pub widen_fixed_bytes: bool,
    pub strict_structs: bool,
    /// Write the artifact even when some sources fail to compile.
    pub keep_going: bool,
}

#[derive(Debug)]
pub struct Generated {
    pub compilation: Compilation,
    /// Where the artifact was written. `None` when no output path was configured.
    pub path: Option<PathBuf>,
}

/// Compiles the configured contracts and writes the artifact.
///
/// Nothing is written when any source fails, unless `keep_going` is set.
pub fn generate(config: &GenerateConfig) -> Result<Generated> {
    let manifest = config
        .manifest
        .as_ref()
        .map(ManifestFile::load)
        .transpose()?;

    let mut sources = manifest
        .as_ref()
        .map(ManifestFile::sources)
        .unwrap_or_default();
    sources.extend(config.sources.iter().cloned());
    if sources.is_empty() {
        return Err(Error::NoSources);
    }

    let compiler = Compiler::new(compiler_config(config, manifest.as_ref()));
    let compilation = compiler.compile(&sources)?;
    if compilation.has_errors() && !config.keep_going {
        let errors: Vec<_> = compilation
            .diagnostics
            .iter()
            .filter(|diag| diag.is_error())
            .map(Diagnostic::to_string)
            .collect();
        return Err(Error::Failed {
            count: errors.len(),
            errors: errors.join("; "),
        });
    }

    let path = config
        .out
        .clone()
        .or_else(|| manifest.as_ref().and_then(ManifestFile::output_path));
    if let Some(path) = &path {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &compilation.artifact)?;
        log::info!("wrote {}", path.display());
    }
    Ok(Generated { compilation, path })
}

fn compiler_config(config: &GenerateConfig, manifest: Option<&ManifestFile>) -> CompilerConfig {
    let mut compiler = manifest
        .map(ManifestFile::compiler_config)
        .unwrap_or_default();
    if let Some(format) = config.format {
        compiler.format = format;
    }
    if config.widen_fixed_bytes {
        compiler.fixed_bytes = FixedBytesMapping::Widen;
    }
    if config.strict_structs {
        compiler.struct_collisions = CollisionPolicy::Strict;
    }
    compiler
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = r#"[
        {"type": "function", "name": "decimals", "inputs": [], "outputs": [{"name": "", "type": "uint8"}]}
    ]"#;

    #[test]
    fn flags_override_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("SolSchema.toml");
        fs::write(
            &manifest,
            "[output]\nformat = \"rust\"\n\n[[contract]]\nname = \"T\"\nabi = \"t.json\"\n",
        )
        .unwrap();
        let file = ManifestFile::load(&manifest).unwrap();

        let config = GenerateConfig::builder()
            .format(Format::Json)
            .widen_fixed_bytes(true)
            .build();
        let compiler = compiler_config(&config, Some(&file));
        assert_eq!(compiler.format, Format::Json);
        assert_eq!(compiler.fixed_bytes, FixedBytesMapping::Widen);
        assert_eq!(compiler.struct_collisions, CollisionPolicy::FirstWins);
    }

    #[test]
    fn requires_sources() {
        let config = GenerateConfig::default();
        assert!(matches!(generate(&config), Err(Error::NoSources)));
    }

    #[test]
    fn writes_once_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let abi = dir.path().join("token.json");
        fs::write(&abi, TOKEN).unwrap();
        let out = dir.path().join("nested/out/generated.rs");

        let config = GenerateConfig::builder()
            .sources(vec![ContractSource::new("Token", &abi)])
            .out(out.clone())
            .build();
        let generated = generate(&config).unwrap();
        assert_eq!(generated.path.as_ref(), Some(&out));
        assert_eq!(fs::read_to_string(&out).unwrap(), generated.compilation.artifact);
    }

    #[test]
    fn failures_block_writes_unless_keep_going() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("token.json");
        fs::write(&good, TOKEN).unwrap();
        let out = dir.path().join("generated.rs");
        let sources = vec![
            ContractSource::new("Token", &good),
            ContractSource::new("Missing", dir.path().join("missing.json")),
        ];

        let config = GenerateConfig::builder()
            .sources(sources.clone())
            .out(out.clone())
            .build();
        let err = generate(&config).unwrap_err();
        assert!(matches!(err, Error::Failed { count: 1, .. }), "{err}");
        assert!(!out.exists());

        let config = GenerateConfig::builder()
            .sources(sources)
            .out(out.clone())
            .keep_going(true)
            .build();
        let generated = generate(&config).unwrap();
        assert_eq!(generated.compilation.failed, ["Missing"]);
        assert!(out.exists());
    }
}

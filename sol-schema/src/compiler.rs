// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compilation driver.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    abi::{self, Entry},
    config::CompilerConfig,
    diagnostics::{Diagnostic, DiagnosticKind, Diagnostics},
    emit,
    error::Result,
    hash::{Keccak256, SignatureHasher},
    native::TypeMapper,
    registry::StructRegistry,
    schema::{self, SchemaIr},
};

/// An ABI document to compile, and the contract name its items are generated under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractSource {
    pub name: String,
    pub path: PathBuf,
}

impl ContractSource {
    pub fn new(name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedContract {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// Output of one compilation run.
#[derive(Debug)]
pub struct Compilation {
    /// The generated artifact, in the configured format.
    pub artifact: String,
    pub schema: SchemaIr,
    pub diagnostics: Vec<Diagnostic>,
    /// Names of requested sources that could not be loaded.
    pub failed: Vec<String>,
}

impl Compilation {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|diag| !diag.is_error())
    }
}

/// Compiles sets of ABI documents into one schema artifact.
///
/// Each run builds its own struct registry, so a compiler can be reused and shared.
#[derive(Clone, Debug, Default)]
pub struct Compiler<H = Keccak256> {
    config: CompilerConfig,
    hasher: H,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self::with_hasher(config, Keccak256)
    }
}

impl<H: SignatureHasher> Compiler<H> {
    pub fn with_hasher(config: CompilerConfig, hasher: H) -> Self {
        Self { config, hasher }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Loads and compiles `sources`, in order.
    ///
    /// A source that cannot be loaded, or repeats an earlier contract name, is left out entirely
    /// and reported as an error diagnostic. The rest still compile.
    pub fn compile(&self, sources: &[ContractSource]) -> Result<Compilation> {
        let mut diags = Diagnostics::default();
        let mut failed = Vec::new();
        let mut names = HashSet::new();
        let mut contracts = Vec::new();

        for source in sources {
            if !names.insert(source.name.as_str()) {
                diags.push(
                    Diagnostic::error(
                        DiagnosticKind::Duplicate,
                        format!("contract is listed more than once ({})", source.path.display()),
                    )
                    .in_contract(&source.name),
                );
                failed.push(source.name.clone());
                continue;
            }
            log::debug!("loading {} from {}", source.name, source.path.display());
            match abi::load(&source.path) {
                Ok(entries) => contracts.push(LoadedContract {
                    name: source.name.clone(),
                    entries,
                }),
                Err(err) => {
                    diags.push(
                        Diagnostic::error(DiagnosticKind::MalformedInput, err.to_string())
                            .in_contract(&source.name),
                    );
                    failed.push(source.name.clone());
                }
            }
        }

        let mut compilation = self.run(&contracts, diags)?;
        compilation.failed = failed;
        Ok(compilation)
    }

    /// Compiles contracts already in memory.
    pub fn compile_loaded(&self, contracts: &[LoadedContract]) -> Result<Compilation> {
        self.run(contracts, Diagnostics::default())
    }

    fn run(&self, contracts: &[LoadedContract], mut diags: Diagnostics) -> Result<Compilation> {
        let mut registry = StructRegistry::new(self.config.struct_collisions);
        for contract in contracts {
            registry.discover_explicit(&contract.name, &contract.entries, &mut diags)?;
        }
        for contract in contracts {
            registry.synthesize_event_data(&contract.name, &contract.entries, &mut diags)?;
        }

        let mapper = TypeMapper::new(self.config.fixed_bytes);
        let schema = schema::lower(contracts, &registry, mapper, &self.hasher, &mut diags);
        let artifact = emit::emit(&schema, &self.config)?;

        let diagnostics = diags.into_vec();
        log::info!(
            "compiled {} contract(s): {} struct(s), {} function(s), {} event(s), {} warning(s)",
            schema.contracts.len(),
            schema.structs.len(),
            schema.contracts.iter().map(|c| c.functions.len()).sum::<usize>(),
            schema.contracts.iter().map(|c| c.events.len()).sum::<usize>(),
            diagnostics.iter().filter(|diag| !diag.is_error()).count(),
        );
        Ok(Compilation {
            artifact,
            schema,
            diagnostics,
            failed: Vec::new(),
        })
    }
}

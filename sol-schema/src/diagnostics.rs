// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Non-fatal conditions collected during a compilation run.

use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// The source document could not be read or parsed. The whole source is dropped.
    MalformedInput,
    /// The entry uses something the compiler cannot express. Only the entry is dropped.
    UnsupportedConstruct,
    /// A primitive type was not recognized and mapped to the widest unsigned integer.
    UnknownPrimitive,
    /// A qualified struct name was registered again with a different shape.
    StructCollision,
    /// The entry duplicates an earlier entry of the same contract.
    Duplicate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub contract: Option<String>,
    pub entry: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            contract: None,
            entry: None,
            message: message.into(),
        }
    }

    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            ..Self::warning(kind, message)
        }
    }

    pub fn in_contract(mut self, contract: impl Into<String>) -> Self {
        self.contract = Some(contract.into());
        self
    }

    pub fn in_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = Some(entry.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.contract, &self.entry) {
            (Some(contract), Some(entry)) => write!(f, "{contract}.{entry}: ")?,
            (Some(contract), None) => write!(f, "{contract}: ")?,
            (None, Some(entry)) => write!(f, "{entry}: ")?,
            (None, None) => {}
        }
        f.write_str(&self.message)
    }
}

/// Ordered list of diagnostics. Every pushed diagnostic is also logged.
#[derive(Debug, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => log::warn!("{diagnostic}"),
            Severity::Error => log::error!("{diagnostic}"),
        }
        self.0.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_location() {
        let diag = Diagnostic::warning(DiagnosticKind::UnknownPrimitive, "fixed128x18")
            .in_contract("Vault")
            .in_entry("price");
        assert_eq!(diag.to_string(), "Vault.price: fixed128x18");

        let diag = Diagnostic::error(DiagnosticKind::MalformedInput, "not an array")
            .in_contract("ERC20");
        assert!(diag.is_error());
        assert_eq!(diag.to_string(), "ERC20: not an array");
    }

    #[test]
    fn tracks_errors() {
        let mut diags = Diagnostics::default();
        diags.push(Diagnostic::warning(DiagnosticKind::Duplicate, "dup"));
        assert!(!diags.has_errors());
        diags.push(Diagnostic::error(DiagnosticKind::MalformedInput, "bad"));
        assert!(diags.has_errors());
        assert_eq!(diags.into_vec().len(), 2);
    }
}

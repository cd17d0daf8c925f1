// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Solidity JSON ABI documents.
//!
//! Only the shape of the document is checked here. Type strings are validated later, when they are
//! resolved into [`AbiType`](crate::types::AbiType)s.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A function, event or error parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Param>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Default::default()
        }
    }

    pub fn is_indexed(&self) -> bool {
        self.indexed.unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub inputs: Vec<Param>,
    pub outputs: Vec<Param>,
    pub state_mutability: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub inputs: Vec<Param>,
    pub anonymous: bool,
}

impl Event {
    pub fn non_indexed(&self) -> impl Iterator<Item = &Param> {
        self.inputs.iter().filter(|param| !param.is_indexed())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorEntry {
    pub name: String,
    pub inputs: Vec<Param>,
}

/// One entry of an ABI document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEntry")]
pub enum Entry {
    Function(Function),
    Event(Event),
    Error(ErrorEntry),
    /// Constructors, fallback and receive functions, and unknown kinds.
    Other { kind: String },
}

impl Entry {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Function(function) => Some(&function.name),
            Self::Event(event) => Some(&event.name),
            Self::Error(error) => Some(&error.name),
            Self::Other { .. } => None,
        }
    }

    /// Every parameter the entry declares, in order.
    pub fn params(&self) -> Box<dyn Iterator<Item = &Param> + '_> {
        match self {
            Self::Function(function) => Box::new(function.inputs.iter().chain(&function.outputs)),
            Self::Event(event) => Box::new(event.inputs.iter()),
            Self::Error(error) => Box::new(error.inputs.iter()),
            Self::Other { .. } => Box::new(std::iter::empty()),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    inputs: Vec<Param>,
    #[serde(default)]
    outputs: Vec<Param>,
    #[serde(default)]
    anonymous: bool,
    #[serde(default)]
    state_mutability: Option<String>,
}

/// Entries without a `type` are functions.
fn default_kind() -> String {
    "function".to_owned()
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        match raw.kind.as_str() {
            "function" => Self::Function(Function {
                name: raw.name,
                inputs: raw.inputs,
                outputs: raw.outputs,
                state_mutability: raw.state_mutability,
            }),
            "event" => Self::Event(Event {
                name: raw.name,
                inputs: raw.inputs,
                anonymous: raw.anonymous,
            }),
            "error" => Self::Error(ErrorEntry {
                name: raw.name,
                inputs: raw.inputs,
            }),
            _ => Self::Other { kind: raw.kind },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {origin}: {source}")]
    Io {
        origin: String,
        source: std::io::Error,
    },
    #[error("malformed ABI document {origin}: {reason}")]
    Malformed { origin: String, reason: String },
}

/// Reads and parses the ABI document at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Entry>, LoadError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        origin: origin.clone(),
        source,
    })?;
    parse(&text, &origin)
}

/// Parses an ABI document.
///
/// Accepts a bare array of entries, or a compiler artifact object carrying it under `abi`.
/// `origin` only names the document in errors.
pub fn parse(text: &str, origin: &str) -> Result<Vec<Entry>, LoadError> {
    let malformed = |reason: String| LoadError::Malformed {
        origin: origin.to_owned(),
        reason,
    };

    let value: Value = serde_json::from_str(text).map_err(|err| malformed(err.to_string()))?;
    let entries = match value {
        Value::Array(_) => value,
        Value::Object(mut artifact) => match artifact.remove("abi") {
            Some(abi @ Value::Array(_)) => abi,
            _ => return Err(malformed("top level is not an array".into())),
        },
        _ => return Err(malformed("top level is not an array".into())),
    };
    serde_json::from_value(entries).map_err(|err| malformed(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERC20_FRAGMENT: &str = r#"[
        {
            "type": "function",
            "name": "transfer",
            "inputs": [
                {"name": "to", "type": "address", "internalType": "address"},
                {"name": "value", "type": "uint256", "internalType": "uint256"}
            ],
            "outputs": [{"name": "", "type": "bool", "internalType": "bool"}],
            "stateMutability": "nonpayable"
        },
        {
            "type": "event",
            "name": "Transfer",
            "inputs": [
                {"name": "from", "type": "address", "indexed": true},
                {"name": "to", "type": "address", "indexed": true},
                {"name": "value", "type": "uint256", "indexed": false}
            ],
            "anonymous": false
        },
        {"type": "constructor", "inputs": [], "stateMutability": "nonpayable"},
        {"type": "error", "name": "InsufficientBalance", "inputs": [{"name": "needed", "type": "uint256"}]}
    ]"#;

    #[test]
    fn parses_entries_in_order() {
        let entries = parse(ERC20_FRAGMENT, "erc20").unwrap();
        assert_eq!(entries.len(), 4);

        let Entry::Function(transfer) = &entries[0] else {
            panic!("expected function, got {:?}", entries[0]);
        };
        assert_eq!(transfer.name, "transfer");
        assert_eq!(transfer.inputs[1], {
            let mut param = Param::new("value", "uint256");
            param.internal_type = Some("uint256".into());
            param
        });
        assert_eq!(transfer.state_mutability.as_deref(), Some("nonpayable"));

        let Entry::Event(event) = &entries[1] else {
            panic!("expected event, got {:?}", entries[1]);
        };
        assert!(!event.anonymous);
        assert_eq!(event.non_indexed().count(), 1);

        assert_eq!(
            entries[2],
            Entry::Other {
                kind: "constructor".into()
            }
        );
        assert_eq!(entries[3].name(), Some("InsufficientBalance"));
    }

    #[test]
    fn missing_type_means_function() {
        let entries = parse(r#"[{"name": "decimals", "outputs": [{"type": "uint8"}]}]"#, "x").unwrap();
        assert!(matches!(&entries[0], Entry::Function(f) if f.name == "decimals" && f.inputs.is_empty()));
    }

    #[test]
    fn accepts_compiler_artifacts() {
        let artifact = format!(r#"{{"contractName": "ERC20", "abi": {ERC20_FRAGMENT}}}"#);
        assert_eq!(parse(&artifact, "artifact").unwrap().len(), 4);
    }

    #[test]
    fn rejects_malformed_documents() {
        for text in ["{", r#"{"name": "x"}"#, "42", r#"[{"type": "function", "inputs": 3}]"#] {
            let err = parse(text, "bad.json").unwrap_err();
            assert!(
                matches!(&err, LoadError::Malformed { origin, .. } if origin == "bad.json"),
                "{text}: {err}"
            );
        }
    }

    #[test]
    fn load_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));

        let path = dir.path().join("erc20.json");
        fs::write(&path, ERC20_FRAGMENT).unwrap();
        assert_eq!(load(&path).unwrap().len(), 4);
    }
}

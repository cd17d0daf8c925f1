// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt::Write, path::Path};

use crate::{
    abi,
    compiler::{Compiler, LoadedContract},
    config::CompilerConfig,
    error::Result,
};

/// Text report of the signatures, selectors and topics of one ABI file.
///
/// The contract name defaults to the file stem.
pub fn inspect(path: impl AsRef<Path>, name: Option<&str>) -> Result<String> {
    let path = path.as_ref();
    let name = match name {
        Some(name) => name.to_owned(),
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Contract".to_owned()),
    };
    let contract = LoadedContract {
        entries: abi::load(path)?,
        name,
    };
    let compilation = Compiler::new(CompilerConfig::default()).compile_loaded(&[contract])?;
    let schema = &compilation.schema;

    let mut report = String::new();
    for contract in &schema.contracts {
        writeln!(report, "{}", contract.name).ok();
        if !contract.functions.is_empty() {
            writeln!(report, "  functions:").ok();
        }
        for function in &contract.functions {
            write!(report, "    {}  {}", function.selector, function.signature).ok();
            if let Some(mutability) = &function.state_mutability {
                write!(report, "  {mutability}").ok();
            }
            report.push('\n');
        }
        if !contract.events.is_empty() {
            writeln!(report, "  events:").ok();
        }
        for event in &contract.events {
            writeln!(report, "    {}  {}", event.topic, event.signature).ok();
        }
        if !contract.errors.is_empty() {
            writeln!(report, "  errors:").ok();
        }
        for error in &contract.errors {
            writeln!(report, "    {}  {}", error.selector, error.signature).ok();
        }
    }
    if !schema.structs.is_empty() {
        writeln!(report, "structs:").ok();
    }
    for item in &schema.structs {
        let fields: Vec<_> = item
            .fields
            .iter()
            .map(|field| format!("{} {}", field.canonical_type, field.name))
            .collect();
        writeln!(report, "  {}({})", item.qualified_name, fields.join(", ")).ok();
    }
    for diag in &compilation.diagnostics {
        let label = if diag.is_error() { "error" } else { "warning" };
        writeln!(report, "{label}: {diag}").ok();
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn reports_selectors_and_topics() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("erc20.json");
        fs::write(
            &path,
            r#"[
                {"type": "function", "name": "transfer", "stateMutability": "nonpayable",
                 "inputs": [{"name": "to", "type": "address"}, {"name": "value", "type": "uint256"}],
                 "outputs": [{"name": "", "type": "bool"}]},
                {"type": "event", "name": "Transfer", "anonymous": false, "inputs": [
                    {"name": "from", "type": "address", "indexed": true},
                    {"name": "to", "type": "address", "indexed": true},
                    {"name": "value", "type": "uint256", "indexed": false}]}
            ]"#,
        )
        .unwrap();

        let report = inspect(&path, Some("ERC20")).unwrap();
        pretty_assertions::assert_str_eq!(
            report,
            "ERC20\n\
             \x20 functions:\n\
             \x20   0xa9059cbb  transfer(address,uint256)  nonpayable\n\
             \x20 events:\n\
             \x20   0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef  Transfer(address,address,uint256)\n\
             structs:\n\
             \x20 ERC20.TransferEventData(uint256 value)\n"
        );

        let report = inspect(&path, None).unwrap();
        assert!(report.starts_with("erc20\n"));
    }
}

// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../sol-schema/tests/fixtures")
        .join(name)
}

fn cargo_sol_schema() -> Command {
    let mut cmd = Command::cargo_bin("cargo-sol-schema").unwrap();
    // cargo passes the subcommand name as the first argument
    cmd.arg("sol-schema");
    cmd
}

#[test]
fn generate_to_stdout() {
    let abi = format!("ERC20={}", fixture("erc20.json").display());
    let output = cargo_sol_schema()
        .args(["generate", "--abi", &abi])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("//! Generated by sol-schema. Do not edit.\n"));
    assert!(stdout.contains("pub struct Sel_ERC20_transfer;"));
}

#[test]
fn generate_from_manifest_in_current_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(fixture("multicall3.json"), dir.path().join("multicall3.json")).unwrap();
    fs::write(
        dir.path().join("SolSchema.toml"),
        "[output]\npath = \"src/bindings.rs\"\n\n\
         [[contract]]\nname = \"Multicall3\"\nabi = \"multicall3.json\"\n",
    )
    .unwrap();

    cargo_sol_schema()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .success();
    let bindings = fs::read_to_string(dir.path().join("src/bindings.rs")).unwrap();
    assert!(bindings.contains("pub struct Multicall3_Call3 {"));
}

#[test]
fn json_format_and_out_flag() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("schema.json");
    let abi = format!("Pool={}", fixture("pool.json").display());
    cargo_sol_schema()
        .args(["generate", "--format", "json", "--abi", &abi, "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");
    let schema = fs::read_to_string(&out).unwrap();
    assert!(schema.starts_with("{\n  \"structs\": ["));
}

#[test]
fn failing_contract_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bindings.rs");
    let missing = format!("Gone={}", dir.path().join("gone.json").display());
    let output = cargo_sol_schema()
        .args(["generate", "--abi", &missing, "--out"])
        .arg(&out)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("compilation failed with 1 error(s)"), "{stderr}");
    assert!(!out.exists());
}

#[test]
fn bad_abi_argument() {
    cargo_sol_schema()
        .args(["generate", "--abi", "erc20.json"])
        .assert()
        .failure();
}

#[test]
fn inspect_prints_selectors() {
    let output = cargo_sol_schema()
        .arg("inspect")
        .arg(fixture("erc20.json"))
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let first_lines: Vec<_> = stdout.lines().take(3).collect();
    assert_eq!(
        first_lines,
        ["erc20", "  functions:", "    0x06fdde03  name()  view"]
    );
}

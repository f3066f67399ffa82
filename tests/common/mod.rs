//! Shared fixtures for pubspec-pin integration tests.
//!
//! Each test builds a small Dart monorepo in a temporary directory and runs
//! the binary against it.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest with two pinnable path dependencies and one registry dependency.
#[allow(unused)]
pub const WALLET_PUBSPEC: &str = "\
name: wallet
version: 0.1.0

dependencies:
  web3_universal_core:
    path: ../core
  web3_universal_signer:
    path: ../signer
  http: ^1.2.0
";

#[allow(unused)]
pub const WALLET_PINNED: &str = "\
name: wallet
version: 0.1.0

dependencies:
  web3_universal_core: ^0.1.1
  web3_universal_signer: ^0.1.1
  http: ^1.2.0
";

/// Manifest without any path dependencies.
#[allow(unused)]
pub const CORE_PUBSPEC: &str = "\
name: web3_universal_core
version: 0.1.1

dependencies:
  convert: ^3.1.1
";

/// Writes `content` to `root/rel`, creating parent directories.
pub fn write_manifest(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Helper to create a monorepo with one pinnable and one clean package
#[allow(unused)]
pub fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "packages/wallet/pubspec.yaml", WALLET_PUBSPEC);
    write_manifest(temp.path(), "packages/core/pubspec.yaml", CORE_PUBSPEC);
    temp
}

#[allow(unused)]
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Helper to run pubspec-pin with a clean environment
pub fn run_pin(cwd: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("pubspec-pin");
    cmd.args(args)
        .env_remove("PUBSPEC_PIN_ROOTS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .current_dir(cwd);

    cmd.assert()
}

//! Shared fixtures for the CLI integration suite.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

pub const MAIN_RS: &str = "\
// entry point
fn main() {
    /* block
       comment */
    let s = \"// not a comment\";
    println!(\"{s}\");
}
";

pub const CARGO_TOML: &str = "\
[package]
name = \"acme-api\"

[dependencies]
axum = \"0.7\"
tokio = { version = \"1\", features = [\"full\"] }
";

/// Temporary directory holding one or more fake repositories.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// `acme-api`: one Rust file, a manifest and a README.
    pub fn rust_repo(&self) -> PathBuf {
        self.write_file("acme-api/src/main.rs", MAIN_RS);
        self.write_file("acme-api/Cargo.toml", CARGO_TOML);
        self.write_file("acme-api/README.md", "# acme\n");
        self.path().join("acme-api")
    }
}

pub fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sloc_census"));
    cmd.arg("--quiet");
    cmd
}

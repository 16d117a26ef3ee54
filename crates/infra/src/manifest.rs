// crates/infra/src/manifest.rs
//! Cargo マニフェストからの依存クレート名の素朴な抽出
//!
//! TOML として解析はせず、依存テーブル内の `key = ...` 行のキーだけを拾います。

use std::{collections::BTreeSet, sync::OnceLock};

use log::{debug, warn};
use regex::Regex;
use sloc_census_ports::{filesystem::SourceFile, manifest::ManifestReader};
use sloc_census_shared_kernel::Result;

use crate::persistence::FileReader;

pub const CARGO_MANIFEST: &str = "Cargo.toml";

/// `[dependencies]`, `[dev-dependencies]`, `[target.'cfg(..)'.dependencies]`,
/// `[dependencies.NAME]` などのヘッダー
const DEPENDENCY_HEADER: &str =
    r"^\[\s*(?:[^\]]*\.)?(?:dev-|build-)?dependencies(?:\.([A-Za-z0-9_\-]+))?\s*\]";

fn dependency_header() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DEPENDENCY_HEADER).ok()).as_ref()
}

enum Header {
    /// 依存テーブル本体
    Table,
    /// `[dependencies.NAME]`
    Entry(String),
    Other,
}

fn classify_header(line: &str) -> Header {
    let Some(caps) = dependency_header().and_then(|re| re.captures(line)) else {
        return Header::Other;
    };
    caps.get(1).map_or(Header::Table, |name| Header::Entry(name.as_str().to_string()))
}

fn is_crate_name(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// マニフェスト本文から依存クレート名を抽出する（ソート済み・重複なし）
pub fn extract_dependencies(manifest: &str) -> Vec<String> {
    let mut deps = BTreeSet::new();
    let mut in_table = false;

    for raw in manifest.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') {
            in_table = false;
            match classify_header(line) {
                Header::Table => in_table = true,
                Header::Entry(name) => {
                    deps.insert(name);
                }
                Header::Other => {}
            }
            continue;
        }
        if !in_table {
            continue;
        }
        if let Some((key, _)) = line.split_once('=') {
            let key = key.trim().trim_matches('"').trim_matches('\'');
            // `serde.workspace = true` のようなドット付きキー
            let name = key.split('.').next().unwrap_or(key).trim();
            if is_crate_name(name) {
                deps.insert(name.to_string());
            }
        }
    }

    deps.into_iter().collect()
}

/// `ManifestReader` adapter for Cargo manifests.
#[derive(Debug, Default, Clone, Copy)]
pub struct CargoManifestReader;

impl CargoManifestReader {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestReader for CargoManifestReader {
    fn dependencies(&self, files: &[SourceFile]) -> Result<Vec<String>> {
        let mut deps = BTreeSet::new();
        for file in files.iter().filter(|f| f.file_name() == Some(CARGO_MANIFEST)) {
            match FileReader::read_lossy(&file.path) {
                Ok(text) => {
                    let found = extract_dependencies(&text);
                    debug!("{}: {} dependencies", file.relative.display(), found.len());
                    deps.extend(found);
                }
                Err(err) => warn!("skipping manifest {}: {err}", file.path.display()),
            }
        }
        Ok(deps.into_iter().collect())
    }
}

// crates/infra/src/syntax_file.rs
//! YAML で記述された言語構文定義の読み込み
//!
//! ```yaml
//! - name: Zig
//!   extensions: [zig]
//!   line_comment: "//"
//!   quotes: ['"', "'"]
//! - name: OCaml
//!   extensions: [ml, mli]
//!   block_comment: { open: "(*", close: "*)" }
//!   nested_block_comments: true
//!   quotes: ['"']
//! ```

use std::path::Path;

use log::info;
use sloc_census_domain::language::{Language, LanguageRegistry};
use sloc_census_shared_kernel::{ErrorContext, InfrastructureError, Result};

use crate::persistence::FileReader;

/// YAML 文字列から言語定義を解析する
///
/// # Errors
///
/// YAML として不正な場合に `InfrastructureError::SerializationError` を返します。
pub fn parse_syntax_definitions(text: &str) -> Result<Vec<Language>> {
    Ok(serde_yaml::from_str(text)?)
}

/// 構文定義ファイルを読み込む
///
/// # Errors
///
/// 読み込みまたは解析に失敗した場合にエラーを返します。
pub fn load_syntax_file(path: &Path) -> Result<Vec<Language>> {
    let text = FileReader::read_lossy(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    parse_syntax_definitions(&text).with_context(|| format!("syntax file {}", path.display()))
}

/// 組み込み定義に構文定義ファイルの内容を重ねたレジストリを作る
///
/// # Errors
///
/// ファイルの読み込み・解析・検証に失敗した場合にエラーを返します。
pub fn build_registry(syntax_file: Option<&Path>) -> Result<LanguageRegistry> {
    let mut registry = LanguageRegistry::builtin();
    if let Some(path) = syntax_file {
        let languages = load_syntax_file(path)?;
        info!("loaded {} language definitions from {}", languages.len(), path.display());
        for language in languages {
            registry.register(language)?;
        }
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use sloc_census_domain::syntax::BlockComment;

    use super::*;

    const DEFINITIONS: &str = r#"
- name: OCaml
  extensions: [ml, mli]
  block_comment: { open: "(*", close: "*)" }
  nested_block_comments: true
  quotes: ['"']
- name: Plain Rust
  extensions: [rs]
  line_comment: "//"
"#;

    #[test]
    fn parses_partial_definitions_with_defaults() {
        let languages = parse_syntax_definitions(DEFINITIONS).unwrap();
        assert_eq!(languages.len(), 2);
        let ocaml = &languages[0];
        assert_eq!(ocaml.extensions, ["ml", "mli"]);
        assert_eq!(ocaml.syntax.block_comment, Some(BlockComment::new("(*", "*)")));
        assert!(ocaml.syntax.nested_block_comments);
        assert!(ocaml.syntax.line_comment.is_none());
        assert!(!languages[1].syntax.raw_strings);
    }

    #[test]
    fn lifetime_detection_can_be_enabled_per_language() {
        let yaml = "- name: Rust\n  extensions: [rs]\n  line_comment: \"//\"\n  quotes: ['\"', \"'\"]\n  raw_strings: true\n  lifetimes: true\n";
        let languages = parse_syntax_definitions(yaml).unwrap();
        assert!(languages[0].syntax.lifetimes);
        assert!(!LanguageRegistry::builtin().by_extension("rs").unwrap().syntax.lifetimes);
    }

    #[test]
    fn definitions_override_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("syntax.yaml");
        std::fs::write(&path, DEFINITIONS).unwrap();

        let registry = build_registry(Some(&path)).unwrap();
        assert_eq!(registry.by_extension("rs").map(|l| l.name.as_str()), Some("Plain Rust"));
        assert_eq!(registry.by_extension("ml").map(|l| l.name.as_str()), Some("OCaml"));
    }

    #[test]
    fn malformed_yaml_reports_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "- name: [unclosed\n").unwrap();
        let err = build_registry(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn invalid_syntax_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        std::fs::write(&path, "- name: Broken\n  extensions: [brk]\n  line_comment: \"\"\n").unwrap();
        assert!(build_registry(Some(&path)).is_err());
    }

    #[test]
    fn no_file_means_builtins() {
        let registry = build_registry(None).unwrap();
        assert_eq!(registry.len(), LanguageRegistry::builtin().len());
    }
}

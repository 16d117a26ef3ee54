// crates/domain/src/language.rs
//! 拡張子から言語と構文を引くレジストリ

use std::path::Path;

use serde::{Deserialize, Serialize};
use sloc_census_shared_kernel::DomainResult;

use crate::syntax::LanguageSyntax;

/// 言語定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    #[serde(flatten)]
    pub syntax: LanguageSyntax,
}

impl Language {
    pub fn new(name: impl Into<String>, extensions: &[&str], syntax: LanguageSyntax) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| (*e).to_string()).collect(),
            syntax,
        }
    }

    fn handles(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// 言語レジストリ
///
/// 後から登録された定義が同じ拡張子の既存定義より優先されます。
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageRegistry {
    /// 空のレジストリ
    pub fn empty() -> Self {
        Self { languages: Vec::new() }
    }

    /// 組み込み言語定義
    pub fn builtin() -> Self {
        let languages = vec![
            Language::new("Rust", &["rs"], LanguageSyntax::rust()),
            Language::new("C", &["c"], LanguageSyntax::c_family()),
            Language::new("C Header", &["h"], LanguageSyntax::c_family()),
            Language::new("C++", &["cpp", "cc", "cxx", "hpp", "hh", "hxx"], LanguageSyntax::c_family()),
            Language::new("C#", &["cs"], LanguageSyntax::c_family()),
            Language::new("Java", &["java"], LanguageSyntax::c_family()),
            Language::new("JavaScript", &["js", "mjs", "cjs", "jsx"], LanguageSyntax::c_family_backtick()),
            Language::new("TypeScript", &["ts", "tsx", "mts", "cts"], LanguageSyntax::c_family_backtick()),
            Language::new("Go", &["go"], LanguageSyntax::c_family_backtick()),
            Language::new("Objective-C", &["m", "mm"], LanguageSyntax::c_family()),
            Language::new("PHP", &["php"], LanguageSyntax::c_family()),
            Language::new("CSS", &["css", "scss", "less"], LanguageSyntax::c_family()),
            Language::new("Swift", &["swift"], LanguageSyntax::nesting_c_family()),
            Language::new("Kotlin", &["kt", "kts"], LanguageSyntax::nesting_c_family()),
            Language::new("Scala", &["scala", "sc"], LanguageSyntax::nesting_c_family()),
            Language::new("Dart", &["dart"], LanguageSyntax::nesting_c_family()),
            Language::new("Python", &["py", "pyi", "pyw"], LanguageSyntax::hash()),
            Language::new("Ruby", &["rb"], LanguageSyntax::hash()),
            Language::new("Shell", &["sh", "bash", "zsh"], LanguageSyntax::hash()),
            Language::new("YAML", &["yml", "yaml"], LanguageSyntax::hash_config()),
            Language::new("TOML", &["toml"], LanguageSyntax::hash_config()),
            Language::new("HTML", &["html", "htm"], LanguageSyntax::markup()),
            Language::new("XML", &["xml", "svg"], LanguageSyntax::markup()),
            Language::new("JSON", &["json"], LanguageSyntax::json()),
        ];
        Self { languages }
    }

    /// 言語を追加（同じ拡張子の既存定義を上書き）
    ///
    /// # Errors
    ///
    /// 構文定義が不正な場合に `DomainError::InvalidSyntax` を返します。
    pub fn register(&mut self, language: Language) -> DomainResult<()> {
        language.syntax.validate(&language.name)?;
        self.languages.push(language);
        Ok(())
    }

    /// 拡張子（大文字小文字を区別しない、先頭の `.` は無視）から言語を検索
    pub fn by_extension(&self, ext: &str) -> Option<&Language> {
        let ext = ext.trim_start_matches('.');
        if ext.is_empty() {
            return None;
        }
        self.languages.iter().rev().find(|lang| lang.handles(ext))
    }

    /// パスの拡張子から言語を検索
    pub fn for_path(&self, path: &Path) -> Option<&Language> {
        path.extension().and_then(|e| e.to_str()).and_then(|ext| self.by_extension(ext))
    }

    /// 名前（大文字小文字を区別しない）で言語を検索
    pub fn by_name(&self, name: &str) -> Option<&Language> {
        self.languages.iter().rev().find(|lang| lang.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

// crates/domain/src/syntax.rs
//! 言語ごとのコメント・文字列リテラル構文の定義
//!
//! SLOC スキャナーはこの定義だけを参照して動作するため、
//! 新しい言語は構文を追加するだけで対応できます。

use serde::{Deserialize, Serialize};
use sloc_census_shared_kernel::{DomainError, DomainResult};

/// ブロックコメントの開始・終了マーカー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockComment {
    pub open: String,
    pub close: String,
}

impl BlockComment {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self { open: open.into(), close: close.into() }
    }
}

/// コメント・リテラル構文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSyntax {
    /// 行コメントの開始マーカー (`//`, `#` など)
    pub line_comment: Option<String>,
    /// ブロックコメント (`/* */`, `<!-- -->` など)
    pub block_comment: Option<BlockComment>,
    /// ブロックコメントのネストを許可するか (Rust, Swift, Kotlin 等)
    pub nested_block_comments: bool,
    /// 文字列・文字リテラルを開く引用符
    pub quotes: Vec<char>,
    /// `r"..."`, `r#"..."#` 形式の raw 文字列
    pub raw_strings: bool,
    /// `'a` のようなライフタイム/ラベルを文字リテラルと区別する（既定では無効）
    pub lifetimes: bool,
}

impl Default for LanguageSyntax {
    fn default() -> Self {
        Self::plain()
    }
}

impl LanguageSyntax {
    /// コメント構文なし（全ての非空行をカウント）
    pub fn plain() -> Self {
        Self {
            line_comment: None,
            block_comment: None,
            nested_block_comments: false,
            quotes: Vec::new(),
            raw_strings: false,
            lifetimes: false,
        }
    }

    /// C系言語: `//` と `/* */` (ネストなし)
    pub fn c_family() -> Self {
        Self {
            line_comment: Some("//".into()),
            block_comment: Some(BlockComment::new("/*", "*/")),
            quotes: vec!['"', '\''],
            ..Self::plain()
        }
    }

    /// Go/JavaScript/TypeScript: C系 + バッククォート文字列
    pub fn c_family_backtick() -> Self {
        Self { quotes: vec!['"', '\'', '`'], ..Self::c_family() }
    }

    /// Swift/Kotlin/Scala/Dart: ブロックコメントがネストする C系
    pub fn nesting_c_family() -> Self {
        Self { nested_block_comments: true, ..Self::c_family() }
    }

    /// Rust: ネストコメントと raw 文字列
    ///
    /// `'` は常に文字リテラルを開く。ライフタイム判定は `lifetimes` で明示的に有効にする。
    pub fn rust() -> Self {
        Self { raw_strings: true, ..Self::nesting_c_family() }
    }

    /// Python/Ruby/Shell: `#` 行コメントと引用符
    pub fn hash() -> Self {
        Self { line_comment: Some("#".into()), quotes: vec!['"', '\''], ..Self::plain() }
    }

    /// YAML/TOML 等: `#` のみ（引用符はアポストロフィ誤検出を避けるため無効）
    pub fn hash_config() -> Self {
        Self { line_comment: Some("#".into()), ..Self::plain() }
    }

    /// HTML/XML: `<!-- -->`
    pub fn markup() -> Self {
        Self { block_comment: Some(BlockComment::new("<!--", "-->")), ..Self::plain() }
    }

    /// JSON: コメントなし、ダブルクォート文字列のみ
    pub fn json() -> Self {
        Self { quotes: vec!['"'], ..Self::plain() }
    }

    /// 空のマーカーはスキャナーを前進不能にするため拒否する
    ///
    /// # Errors
    ///
    /// マーカーが空文字列の場合、または引用符が空白文字の場合に `DomainError::InvalidSyntax` を返します。
    pub fn validate(&self, language: &str) -> DomainResult<()> {
        let invalid = |reason: &str| DomainError::InvalidSyntax {
            language: language.to_string(),
            reason: reason.to_string(),
        };

        if self.line_comment.as_deref().is_some_and(str::is_empty) {
            return Err(invalid("line comment marker must not be empty"));
        }
        if let Some(block) = &self.block_comment
            && (block.open.is_empty() || block.close.is_empty())
        {
            return Err(invalid("block comment markers must not be empty"));
        }
        if self.quotes.iter().any(|q| q.is_whitespace()) {
            return Err(invalid("quote characters must not be whitespace"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_preset_enables_nesting_and_raw_strings() {
        let rust = LanguageSyntax::rust();
        assert_eq!(rust.line_comment.as_deref(), Some("//"));
        assert_eq!(rust.block_comment, Some(BlockComment::new("/*", "*/")));
        assert!(rust.nested_block_comments);
        assert!(rust.raw_strings);
        assert!(!rust.lifetimes);
        assert_eq!(rust.quotes, vec!['"', '\'']);
    }

    #[test]
    fn c_family_does_not_nest() {
        let c = LanguageSyntax::c_family();
        assert!(!c.nested_block_comments);
        assert!(!c.raw_strings);
    }

    #[test]
    fn validate_rejects_empty_markers() {
        let syntax = LanguageSyntax { line_comment: Some(String::new()), ..LanguageSyntax::plain() };
        assert!(syntax.validate("broken").is_err());

        let syntax =
            LanguageSyntax { block_comment: Some(BlockComment::new("(*", "")), ..LanguageSyntax::plain() };
        let err = syntax.validate("ocaml").unwrap_err();
        assert!(err.to_string().contains("ocaml"));
    }

    #[test]
    fn validate_accepts_presets() {
        for syntax in [
            LanguageSyntax::plain(),
            LanguageSyntax::c_family(),
            LanguageSyntax::rust(),
            LanguageSyntax::hash(),
            LanguageSyntax::markup(),
            LanguageSyntax::json(),
        ] {
            assert!(syntax.validate("preset").is_ok());
        }
    }
}

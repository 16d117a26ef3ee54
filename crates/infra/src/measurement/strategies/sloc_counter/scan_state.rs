// crates/infra/src/measurement/strategies/sloc_counter/scan_state.rs
//! スキャナーの状態
//!
//! 1ファイルの走査中だけ生存し、行をまたいで引き継がれます。

/// 開いているリテラルの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    /// 通常の文字列・文字リテラル (`"..."`, `'x'`)
    Quoted {
        delimiter: char,
        /// 直前の `\` により次の1文字がエスケープされる
        pending_escape: bool,
    },
    /// ハッシュ付き raw 文字列 (`r#"..."#`)。エスケープ処理なし
    ///
    /// `hashes` は常に1以上。ハッシュなしの `r"..."` は `Quoted` として扱う。
    Raw { hashes: usize },
}

/// 走査状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// 開いているブロックコメントの深さ
    pub block_comment_depth: usize,
    pub literal: Option<Literal>,
}

impl ScanState {
    pub fn in_block_comment(&self) -> bool {
        self.block_comment_depth > 0
    }

    pub fn in_literal(&self) -> bool {
        self.literal.is_some()
    }
}

// crates/infra/src/measurement/strategies/sloc_counter/processor_trait.rs
//! SLOC行処理トレイト
//!
//! # Example
//!
//! ```rust,ignore
//! use sloc_census_infra::measurement::strategies::sloc_counter::LineProcessor;
//!
//! fn count<P: LineProcessor>(processor: &mut P, text: &str) -> usize {
//!     processor.reset();
//!     text.split_inclusive('\n').map(|line| processor.process_line(line)).sum()
//! }
//! ```

/// SLOC行処理トレイト
pub trait LineProcessor: Send {
    /// 行を処理し、SLOCカウント (0 or 1) を返す
    ///
    /// # Arguments
    ///
    /// * `line` - 処理対象の行（改行を含んでもよい。改行は空白として扱う）
    ///
    /// # Returns
    ///
    /// * `0` - コメントまたは空行（SLOCとしてカウントしない）
    /// * `1` - コード行（SLOCとしてカウント）
    fn process_line(&mut self, line: &str) -> usize;

    /// 処理状態をリセット
    ///
    /// 新しいファイルの処理を開始する前に呼び出します。
    fn reset(&mut self);

    /// 現在ブロックコメント内かどうかを返す
    fn is_in_block_comment(&self) -> bool {
        false
    }
}

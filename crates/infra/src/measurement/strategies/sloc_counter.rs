// crates/infra/src/measurement/strategies/sloc_counter.rs
//! SLOC (Source Lines of Code) スキャナー
//!
//! コメントと文字列リテラルを認識しながら1文字ずつ前進し、
//! コードとして扱われる非空白文字を含む行だけをカウントします。
//! 言語ごとの差異はすべて [`LanguageSyntax`] で表現されます。
//!
//! 1文字ごとの優先順位:
//!
//! 1. ブロックコメント内
//! 2. リテラル内
//! 3. 行コメント開始
//! 4. ブロックコメント開始
//! 5. Raw 文字列開始
//! 6. 通常リテラル開始
//! 7. コード

mod processor_trait;
mod scan_state;

pub use processor_trait::LineProcessor;
pub use scan_state::{Literal, ScanState};

use sloc_census_domain::syntax::LanguageSyntax;

/// 1行分の判定結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineResult {
    /// コードとして分類された非空白文字を含むか
    pub has_code: bool,
}

/// テキスト全体の SLOC を数える
///
/// 行は改行を含めて分割されます。改行は空白として扱われます。
pub fn count_code_lines(text: &str, syntax: &LanguageSyntax) -> usize {
    let mut scanner = SourceLineScanner::new(syntax);
    text.split_inclusive('\n').map(|line| scanner.process_line(line)).sum()
}

/// 行ごとの判定結果を返す
pub fn classify_lines(text: &str, syntax: &LanguageSyntax) -> Vec<LineResult> {
    let mut scanner = SourceLineScanner::new(syntax);
    text.split_inclusive('\n').map(|line| scanner.scan_line(line)).collect()
}

/// 構文定義でパラメータ化された行スキャナー
///
/// 状態は1ファイル分のみ保持します。ファイルごとに新しく作るか
/// [`LineProcessor::reset`] を呼んでください。
#[derive(Debug, Clone)]
pub struct SourceLineScanner<'a> {
    syntax: &'a LanguageSyntax,
    state: ScanState,
}

impl<'a> SourceLineScanner<'a> {
    pub fn new(syntax: &'a LanguageSyntax) -> Self {
        Self { syntax, state: ScanState::default() }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// 1行を走査し、状態を次の行へ引き継ぐ
    pub fn scan_line(&mut self, line: &str) -> LineResult {
        let syntax = self.syntax;
        let mut has_code = false;
        let mut i = 0;

        while let Some(c) = line[i..].chars().next() {
            let rest = &line[i..];
            let step = c.len_utf8();

            if self.state.in_block_comment()
                && let Some(block) = &syntax.block_comment
            {
                if syntax.nested_block_comments && starts_with_marker(rest, &block.open) {
                    self.state.block_comment_depth += 1;
                    i += block.open.len();
                } else if starts_with_marker(rest, &block.close) {
                    self.state.block_comment_depth -= 1;
                    i += block.close.len();
                } else {
                    i += step;
                }
                continue;
            }

            if let Some(literal) = self.state.literal {
                has_code |= !c.is_whitespace();
                i += self.advance_literal(literal, c, rest);
                continue;
            }

            if syntax.line_comment.as_deref().is_some_and(|marker| starts_with_marker(rest, marker)) {
                break;
            }

            if let Some(block) = &syntax.block_comment
                && starts_with_marker(rest, &block.open)
            {
                self.state.block_comment_depth = 1;
                i += block.open.len();
                continue;
            }

            if let Some((hashes, len)) = self.raw_string_opening(rest) {
                // ハッシュなしの `r"` は通常の文字列と同じくエスケープを解釈する
                self.state.literal = Some(if hashes == 0 {
                    Literal::Quoted { delimiter: '"', pending_escape: false }
                } else {
                    Literal::Raw { hashes }
                });
                has_code = true;
                i += len;
                continue;
            }

            if self.opens_quoted(c, rest) {
                self.state.literal = Some(Literal::Quoted { delimiter: c, pending_escape: false });
                has_code = true;
                i += step;
                continue;
            }

            has_code |= !c.is_whitespace();
            i += step;
        }

        LineResult { has_code }
    }

    /// リテラル内の1文字を処理し、消費したバイト数を返す
    fn advance_literal(&mut self, literal: Literal, c: char, rest: &str) -> usize {
        match literal {
            Literal::Quoted { delimiter, pending_escape } => {
                self.state.literal = if pending_escape {
                    Some(Literal::Quoted { delimiter, pending_escape: false })
                } else if c == '\\' {
                    Some(Literal::Quoted { delimiter, pending_escape: true })
                } else if c == delimiter {
                    None
                } else {
                    Some(literal)
                };
                c.len_utf8()
            }
            Literal::Raw { hashes } => {
                if c == '"' && closes_raw(&rest[1..], hashes) {
                    self.state.literal = None;
                    1 + hashes
                } else {
                    c.len_utf8()
                }
            }
        }
    }

    /// `r`, `r#`, `r##` ... に続く `"` を検出し、(ハッシュ数, 開始デリミタ長) を返す
    fn raw_string_opening(&self, rest: &str) -> Option<(usize, usize)> {
        if !self.syntax.raw_strings {
            return None;
        }
        let after_r = rest.strip_prefix('r')?;
        let hashes = after_r.bytes().take_while(|b| *b == b'#').count();
        after_r[hashes..].starts_with('"').then_some((hashes, hashes + 2))
    }

    fn opens_quoted(&self, c: char, rest: &str) -> bool {
        if !self.syntax.quotes.contains(&c) {
            return false;
        }
        if c != '\'' || !self.syntax.lifetimes {
            return true;
        }
        // 'a' や '\n' は文字リテラル、'a や 'static はライフタイム
        let mut after = rest[1..].chars();
        match after.next() {
            Some('\\') => true,
            Some(_) => after.next() == Some('\''),
            None => false,
        }
    }
}

impl LineProcessor for SourceLineScanner<'_> {
    fn process_line(&mut self, line: &str) -> usize {
        usize::from(self.scan_line(line).has_code)
    }

    fn reset(&mut self) {
        self.state = ScanState::default();
    }

    fn is_in_block_comment(&self) -> bool {
        self.state.in_block_comment()
    }
}

/// 空のマーカーには一致しない
fn starts_with_marker(rest: &str, marker: &str) -> bool {
    !marker.is_empty() && rest.starts_with(marker)
}

/// `"` の直後に続く `#` の連続がちょうど `hashes` 個のときだけ閉じる
fn closes_raw(after_quote: &str, hashes: usize) -> bool {
    after_quote.bytes().take_while(|b| *b == b'#').count() == hashes
}

#[cfg(test)]
mod tests {
    use sloc_census_domain::syntax::BlockComment;

    use super::*;

    fn rust() -> LanguageSyntax {
        LanguageSyntax::rust()
    }

    fn flags(text: &str, syntax: &LanguageSyntax) -> Vec<bool> {
        classify_lines(text, syntax).into_iter().map(|r| r.has_code).collect()
    }

    #[test]
    fn test_whitespace_only_lines() {
        assert_eq!(count_code_lines("   \n\t\n\n", &rust()), 0);
        assert_eq!(count_code_lines("", &rust()), 0);
    }

    #[test]
    fn test_line_comment_only() {
        assert_eq!(count_code_lines("// anything\n    // indented\n", &rust()), 0);
    }

    #[test]
    fn test_code_with_trailing_comment() {
        assert_eq!(count_code_lines("let x = 5; // trailing\n", &rust()), 1);
    }

    #[test]
    fn test_multiline_block_comment() {
        let text = "/* start\n still comment\n end */\nlet y = 1;\n";
        assert_eq!(flags(text, &rust()), [false, false, false, true]);
    }

    #[test]
    fn test_code_after_block_close_on_same_line() {
        assert_eq!(flags("/* a\n b */ let z = 2;\n", &rust()), [false, true]);
    }

    #[test]
    fn test_comment_marker_inside_string() {
        let text = "let s = \"// not a comment\";\n// real comment\n";
        assert_eq!(flags(text, &rust()), [true, false]);
    }

    #[test]
    fn test_block_marker_inside_string() {
        let text = "let s = \"/* not a comment\";\nlet t = 1;\n";
        assert_eq!(flags(text, &rust()), [true, true]);
    }

    #[test]
    fn test_escaped_quote_keeps_literal_open() {
        let text = "let s = \"a \\\" // still string\";\n// comment\n";
        assert_eq!(flags(text, &rust()), [true, false]);
    }

    #[test]
    fn test_escaped_backslash_closes_literal() {
        let syntax = LanguageSyntax::c_family();
        let mut scanner = SourceLineScanner::new(&syntax);
        assert_eq!(scanner.process_line("char *p = \"\\\\\"; // c\n"), 1);
        assert!(!scanner.state().in_literal());
    }

    #[test]
    fn test_multiline_string_lines_are_code() {
        let text = "let s = \"first\n\n // inside string\n\";\n";
        assert_eq!(flags(text, &rust()), [true, false, true, true]);
    }

    #[test]
    fn test_newline_disarms_pending_escape() {
        let text = "let s = \"abc\\\n// x\";\n// y\n";
        assert_eq!(flags(text, &rust()), [true, true, false]);
    }

    #[test]
    fn test_raw_string_requires_exact_hash_count() {
        let text = "let s = r##\"\n\"# not closed\n\n\"### also not closed\n\"##;\n/* after */\n";
        assert_eq!(flags(text, &rust()), [true, true, false, true, true, false]);
    }

    #[test]
    fn test_hashed_raw_string_has_no_escapes() {
        let text = "let p = r#\"C:\\dir\\\"#; // c\n// d\n";
        assert_eq!(flags(text, &rust()), [true, false]);
    }

    #[test]
    fn test_raw_string_without_hashes_keeps_escapes() {
        let text = "let p = r\"a\\\"b\";\n// d\n";
        assert_eq!(flags(text, &rust()), [true, false]);
        let syntax = rust();
        let mut scanner = SourceLineScanner::new(&syntax);
        scanner.scan_line("let p = r\"a\\\"b");
        assert_eq!(scanner.state().literal, Some(Literal::Quoted { delimiter: '"', pending_escape: false }));
    }

    #[test]
    fn test_byte_raw_string_prefix() {
        let text = "let b = br#\"say \"hi\"\"#; // c\n// d\n";
        assert_eq!(flags(text, &rust()), [true, false]);
    }

    #[test]
    fn test_any_r_before_quote_opens_string() {
        let text = "x = foobar\"\\\" // no\n\";\n// c\n";
        assert_eq!(flags(text, &rust()), [true, true, false]);
    }

    #[test]
    fn test_nested_block_comments() {
        assert_eq!(count_code_lines("/* outer /* inner */ still outer */ code\n", &rust()), 1);
        assert_eq!(count_code_lines("/* outer /* inner */ still outer */\n", &rust()), 0);
        assert_eq!(flags("/* a\n/* b */\n*/\nfn main() {}\n", &rust()), [false, false, false, true]);
    }

    #[test]
    fn test_c_block_comments_do_not_nest() {
        let c = LanguageSyntax::c_family();
        assert_eq!(count_code_lines("/* outer /* inner */ still outer */\n", &c), 1);
    }

    #[test]
    fn test_line_comment_marker_inside_block_comment() {
        assert_eq!(count_code_lines("/* // */ x\n", &rust()), 1);
    }

    #[test]
    fn test_single_quote_always_opens_literal() {
        let text = "struct S<'a> {\n// comment\n";
        assert_eq!(flags(text, &rust()), [true, true]);
        assert!(SourceLineScanner::new(&rust()).scan_line("fn f<'a>() {").has_code);
    }

    #[test]
    fn test_lifetime_detection_is_opt_in() {
        let syntax = LanguageSyntax { lifetimes: true, ..rust() };
        let text = "struct S<'a> {\n// comment\nlet c = 'x'; // c\n";
        assert_eq!(flags(text, &syntax), [true, false, true]);
    }

    #[test]
    fn test_char_literals_with_quotes() {
        assert_eq!(flags("let c = '\"'; // c\n// d\n", &rust()), [true, false]);
        assert_eq!(flags("let c = '\\''; // c\n// d\n", &rust()), [true, false]);
    }

    #[test]
    fn test_unterminated_constructs_stop_at_eof() {
        assert_eq!(count_code_lines("let s = \"never closed\nmore\n", &rust()), 2);
        assert_eq!(count_code_lines("/* never closed\nstill\n", &rust()), 0);
        assert_eq!(count_code_lines("let s = r#\"open\n", &rust()), 1);
    }

    #[test]
    fn test_final_line_without_newline() {
        assert_eq!(count_code_lines("fn a() {}\nfn b() {}", &rust()), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(count_code_lines("code\r\n\r\n// c\r\n", &rust()), 1);
    }

    #[test]
    fn test_non_ascii_text() {
        let text = "let s = \"日本語\"; // コメント\n// 日本語\n/* ü */\n";
        assert_eq!(flags(text, &rust()), [true, false, false]);
    }

    #[test]
    fn test_hash_syntax() {
        let py = LanguageSyntax::hash();
        assert_eq!(flags("x = \"#not\"  # c\n# c\n", &py), [true, false]);
    }

    #[test]
    fn test_markup_syntax() {
        let html = LanguageSyntax::markup();
        assert_eq!(count_code_lines("<!-- c -->\n<p>x</p>\n<!--\nmulti\n-->\n", &html), 1);
    }

    #[test]
    fn test_backtick_strings() {
        let js = LanguageSyntax::c_family_backtick();
        assert_eq!(flags("const s = `a\n// in template\n`;\n", &js), [true, true, true]);
    }

    #[test]
    fn test_plain_syntax_counts_non_blank_lines() {
        assert_eq!(count_code_lines("a\n\n// b\n", &LanguageSyntax::plain()), 2);
    }

    #[test]
    fn test_empty_markers_do_not_stall() {
        let syntax = LanguageSyntax {
            line_comment: Some(String::new()),
            block_comment: Some(BlockComment::new("", "")),
            nested_block_comments: true,
            ..LanguageSyntax::plain()
        };
        assert_eq!(count_code_lines("x\n", &syntax), 1);
    }

    #[test]
    fn test_idempotent() {
        let text = "fn main() {\n    /* c */ let s = r#\"x\"#;\n}\n";
        assert_eq!(count_code_lines(text, &rust()), count_code_lines(text, &rust()));
    }

    #[test]
    fn test_reset_clears_state() {
        let syntax = rust();
        let mut scanner = SourceLineScanner::new(&syntax);
        assert_eq!(scanner.process_line("/* open\n"), 0);
        assert!(scanner.is_in_block_comment());
        scanner.reset();
        assert!(!scanner.is_in_block_comment());
        assert_eq!(scanner.process_line("let a = 1;\n"), 1);
    }
}

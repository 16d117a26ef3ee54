use proptest::prelude::*;
use sloc_census_domain::syntax::LanguageSyntax;
use sloc_census_infra::measurement::strategies::{classify_lines, count_code_lines};

/// 記号を多めに含む1行分の文字列（改行なし）
const LINE: &str = "[a-z0-9 /*\"'#r{}\\\\]{0,24}";

proptest! {
    #[test]
    fn test_count_never_exceeds_line_count(content in "\\PC{0,400}") {
        let lines = content.split_inclusive('\n').count();
        prop_assert!(count_code_lines(&content, &LanguageSyntax::rust()) <= lines);
    }

    #[test]
    fn test_whitespace_only_text_has_no_code(content in "[ \\t\\r\\n]{0,200}") {
        prop_assert_eq!(count_code_lines(&content, &LanguageSyntax::rust()), 0);
    }

    #[test]
    fn test_scanning_is_idempotent(lines in prop::collection::vec(LINE, 0..30)) {
        let text = lines.join("\n");
        let syntax = LanguageSyntax::rust();
        prop_assert_eq!(classify_lines(&text, &syntax), classify_lines(&text, &syntax));
    }

    #[test]
    fn test_line_comments_never_count(bodies in prop::collection::vec("[^\\n]{0,40}", 0..20)) {
        let text: String = bodies.iter().map(|b| format!("  // {b}\n")).collect();
        prop_assert_eq!(count_code_lines(&text, &LanguageSyntax::rust()), 0);
    }

    #[test]
    fn test_blank_lines_do_not_change_count(lines in prop::collection::vec(LINE, 0..30)) {
        let syntax = LanguageSyntax::rust();
        let dense = lines.join("\n");
        let sparse = lines.join("\n\n");
        prop_assert_eq!(count_code_lines(&dense, &syntax), count_code_lines(&sparse, &syntax));
    }

    #[test]
    fn test_plain_syntax_counts_non_blank_lines(content in "[a-z \\n]{0,300}") {
        let expected = content.lines().filter(|l| !l.trim().is_empty()).count();
        prop_assert_eq!(count_code_lines(&content, &LanguageSyntax::plain()), expected);
    }
}

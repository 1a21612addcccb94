use openrouter_probe::compare::compare_strings;
use openrouter_probe::paragraphs::format_paragraphs;
use openrouter_probe::samples::{CAPTURED_A, CAPTURED_B, QUOTED_COMPLETION};

fn compare(show_whitespace: bool) -> String {
    let mut out = Vec::new();
    compare_strings(&mut out, CAPTURED_A, CAPTURED_B, show_whitespace).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_captured_outputs_first_differ_on_line_four() {
    let report = compare(true);

    assert!(report.contains("String 1 length: 1600 characters"));
    assert!(report.contains("String 2 length: 1480 characters"));
    assert!(report.contains("Strings are identical: False"));
    assert!(report.contains("--- string_a\n+++ string_b\n@@ -1,14 +1,14 @@\n"));
    assert!(report.contains("First difference found at line 4:"));
    assert!(report.contains("String A line 4: '1. **Add a Document Language:**"));
    assert!(report.contains("String B line 4: '1. **Add a Document Language:**"));
    assert!(report.contains("Character-level differences:"));
    assert!(report.contains("--- string_a_char"));
    assert!(!report.contains("Line count difference"));
}

#[test]
fn test_whitespace_section_can_be_hidden() {
    let report = compare(false);
    assert!(report.starts_with(
        "=== STRING COMPARISON ===\nString 1 length: 1600 characters\nString 2 length: 1480 characters\nStrings are identical: False\n\n"
    ));
    assert!(report.contains("=== LINE-BY-LINE DIFFERENCES ==="));
    assert!(!report.contains("CHARACTER-LEVEL"));
}

#[test]
fn test_sample_completion_formats_into_paragraphs() {
    let formatted = format_paragraphs(QUOTED_COMPLETION);
    assert!(!formatted.starts_with('"'));
    assert!(!formatted.ends_with('"'));
    assert!(formatted.starts_with("Here are some suggestions"));
}

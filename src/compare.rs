//! Line-level and character-level comparison of two strings.
//!
//! Differences are rendered as unified diffs with three lines of context. The
//! edit script comes from a longest-common-subsequence alignment, so hunks are
//! minimal but need not match `difflib`'s, which matches greedily on the longest
//! contiguous block and ignores popular elements in long sequences.

use std::io::{self, Write};

const CONTEXT: usize = 3;

/// Kind of an edit block over two sequences `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Equal,
    Delete,
    Insert,
    Replace,
}

/// Edit block covering `a[a_start..a_end]` and `b[b_start..b_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub tag: Tag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl Opcode {
    fn new(tag: Tag, a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self {
            tag,
            a_start,
            a_end,
            b_start,
            b_end,
        }
    }
}

/// Pairs `(i, j)` with `a[i] == b[j]` forming a longest common subsequence.
fn matching_pairs<T: PartialEq>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    let (n, m) = (a.len(), b.len());
    let width = m + 1;
    // lcs[i * width + j] = LCS length of a[i..] and b[j..]
    let mut lcs = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i * width + j] = if a[i] == b[j] {
                lcs[(i + 1) * width + j + 1] + 1
            } else {
                lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(lcs[0] as usize);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            pairs.push((i, j));
            i += 1;
            j += 1;
        } else if lcs[(i + 1) * width + j] >= lcs[i * width + j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    pairs
}

/// Edit blocks turning `a` into `b`.
pub fn opcodes<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Opcode> {
    let mut codes = Vec::new();
    let (mut i, mut j) = (0, 0);

    let mut pairs = matching_pairs(a, b);
    pairs.push((a.len(), b.len()));

    let mut run_start: Option<(usize, usize)> = None;
    for (ai, bj) in pairs {
        if i < ai || j < bj {
            if let Some((si, sj)) = run_start.take() {
                codes.push(Opcode::new(Tag::Equal, si, i, sj, j));
            }
            let tag = match (i < ai, j < bj) {
                (true, true) => Tag::Replace,
                (true, false) => Tag::Delete,
                _ => Tag::Insert,
            };
            codes.push(Opcode::new(tag, i, ai, j, bj));
        }
        if ai < a.len() {
            run_start.get_or_insert((ai, bj));
        }
        i = ai + 1;
        j = bj + 1;
    }
    if let Some((si, sj)) = run_start {
        codes.push(Opcode::new(Tag::Equal, si, a.len(), sj, b.len()));
    }
    codes
}

/// Split edit blocks into hunks, trimming equal runs to `context` elements.
pub fn grouped_opcodes(mut codes: Vec<Opcode>, context: usize) -> Vec<Vec<Opcode>> {
    if codes.is_empty() {
        codes.push(Opcode::new(Tag::Equal, 0, 1, 0, 1));
    }
    if let Some(first) = codes.first_mut() {
        if first.tag == Tag::Equal {
            first.a_start = first.a_start.max(first.a_end.saturating_sub(context));
            first.b_start = first.b_start.max(first.b_end.saturating_sub(context));
        }
    }
    if let Some(last) = codes.last_mut() {
        if last.tag == Tag::Equal {
            last.a_end = last.a_end.min(last.a_start + context);
            last.b_end = last.b_end.min(last.b_start + context);
        }
    }

    let mut groups = Vec::new();
    let mut group = Vec::new();
    for mut code in codes {
        if code.tag == Tag::Equal && code.a_end - code.a_start > 2 * context {
            group.push(Opcode::new(
                Tag::Equal,
                code.a_start,
                code.a_end.min(code.a_start + context),
                code.b_start,
                code.b_end.min(code.b_start + context),
            ));
            groups.push(std::mem::take(&mut group));
            code.a_start = code.a_start.max(code.a_end.saturating_sub(context));
            code.b_start = code.b_start.max(code.b_end.saturating_sub(context));
        }
        group.push(code);
    }
    if !group.is_empty() && !(group.len() == 1 && group[0].tag == Tag::Equal) {
        groups.push(group);
    }
    groups
}

fn format_range(start: usize, end: usize) -> String {
    let length = end - start;
    match length {
        0 => format!("{start},0"),
        1 => format!("{}", start + 1),
        _ => format!("{},{length}", start + 1),
    }
}

/// Unified diff of two sequences of text fragments, one entry per output line.
///
/// Fragments are emitted unchanged after their `' '`, `'-'` or `'+'` marker.
pub fn unified_diff<S: AsRef<str> + PartialEq>(
    a: &[S],
    b: &[S],
    from_name: &str,
    to_name: &str,
) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, group) in grouped_opcodes(opcodes(a, b), CONTEXT).into_iter().enumerate() {
        if index == 0 {
            lines.push(format!("--- {from_name}"));
            lines.push(format!("+++ {to_name}"));
        }
        let (first, last) = (group[0], group[group.len() - 1]);
        lines.push(format!(
            "@@ -{} +{} @@",
            format_range(first.a_start, last.a_end),
            format_range(first.b_start, last.b_end)
        ));
        for code in &group {
            if code.tag == Tag::Equal {
                for item in &a[code.a_start..code.a_end] {
                    lines.push(format!(" {}", item.as_ref()));
                }
                continue;
            }
            if matches!(code.tag, Tag::Replace | Tag::Delete) {
                for item in &a[code.a_start..code.a_end] {
                    lines.push(format!("-{}", item.as_ref()));
                }
            }
            if matches!(code.tag, Tag::Replace | Tag::Insert) {
                for item in &b[code.b_start..code.b_end] {
                    lines.push(format!("+{}", item.as_ref()));
                }
            }
        }
    }
    lines
}

/// Lines of `text`, each keeping its terminating newline.
pub fn split_lines_keep_ends(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Quote `text` the way Python's `repr` does: single quotes unless the text holds a
/// `'` and no `"`, with control characters escaped and other characters kept.
pub fn quoted(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || (0x7f..0xa0).contains(&(c as u32)) => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn chars_of(line: &str) -> Vec<String> {
    line.chars().map(String::from).collect()
}

/// Write a comparison report for `first` and `second` to `out`.
///
/// With `show_whitespace`, the first differing line pair is also diffed character by
/// character and any surplus lines of the longer string are listed.
pub fn compare_strings<W: Write>(
    out: &mut W,
    first: &str,
    second: &str,
    show_whitespace: bool,
) -> io::Result<()> {
    writeln!(out, "=== STRING COMPARISON ===")?;
    writeln!(out, "String 1 length: {} characters", first.chars().count())?;
    writeln!(out, "String 2 length: {} characters", second.chars().count())?;
    writeln!(out, "Strings are identical: {}", py_bool(first == second))?;
    writeln!(out)?;

    if first == second {
        writeln!(out, "No differences found.")?;
        return Ok(());
    }

    let lines_a = split_lines_keep_ends(first);
    let lines_b = split_lines_keep_ends(second);

    writeln!(out, "=== LINE-BY-LINE DIFFERENCES ===")?;
    let diff = unified_diff(&lines_a, &lines_b, "string_a", "string_b");
    if diff.is_empty() {
        writeln!(out, "No line-by-line differences found.")?;
    } else {
        for line in &diff {
            writeln!(out, "{line}")?;
        }
    }
    writeln!(out)?;

    if !show_whitespace {
        return Ok(());
    }

    writeln!(out, "=== CHARACTER-LEVEL DIFFERENCES (INCLUDING WHITESPACE) ===")?;
    let first_difference = lines_a
        .iter()
        .zip(&lines_b)
        .enumerate()
        .find(|(_, (a, b))| a != b);
    if let Some((index, (line_a, line_b))) = first_difference {
        let number = index + 1;
        writeln!(out, "First difference found at line {number}:")?;
        writeln!(out, "String A line {number}: {}", quoted(line_a))?;
        writeln!(out, "String B line {number}: {}", quoted(line_b))?;
        writeln!(out)?;

        writeln!(out, "Character-level differences:")?;
        let chars_a = chars_of(line_a);
        let chars_b = chars_of(line_b);
        for line in unified_diff(&chars_a, &chars_b, "string_a_char", "string_b_char") {
            writeln!(out, "{}", line.trim_end())?;
        }
    }

    if lines_a.len() != lines_b.len() {
        writeln!(
            out,
            "Line count difference: String A has {} lines, String B has {} lines",
            lines_a.len(),
            lines_b.len()
        )?;
        let (label, longer, shorter_len) = if lines_a.len() > lines_b.len() {
            ("A", &lines_a, lines_b.len())
        } else {
            ("B", &lines_b, lines_a.len())
        };
        writeln!(out, "Extra lines in String {label}:")?;
        for (offset, line) in longer[shorter_len..].iter().enumerate() {
            writeln!(out, "  Line {}: {}", shorter_len + offset + 1, quoted(line))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(a: &str, b: &str, show_whitespace: bool) -> String {
        let mut out = Vec::new();
        compare_strings(&mut out, a, b, show_whitespace).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_opcodes_cover_both_sequences() {
        let a: Vec<char> = "abcdef".chars().collect();
        let b: Vec<char> = "abXdefg".chars().collect();
        let codes = opcodes(&a, &b);

        assert_eq!(
            codes,
            vec![
                Opcode::new(Tag::Equal, 0, 2, 0, 2),
                Opcode::new(Tag::Replace, 2, 3, 2, 3),
                Opcode::new(Tag::Equal, 3, 6, 3, 6),
                Opcode::new(Tag::Insert, 6, 6, 6, 7),
            ]
        );
    }

    #[test]
    fn test_opcodes_of_identical_and_empty() {
        let a = ["x", "y"];
        assert_eq!(opcodes(&a, &a), vec![Opcode::new(Tag::Equal, 0, 2, 0, 2)]);
        assert!(opcodes::<&str>(&[], &[]).is_empty());
        assert_eq!(opcodes(&[], &a), vec![Opcode::new(Tag::Insert, 0, 0, 0, 2)]);
    }

    #[test]
    fn test_unified_diff_hunks() {
        let a: Vec<String> = (1..=12).map(|n| format!("line {n}")).collect();
        let mut b = a.clone();
        b[1] = "changed 2".to_string();
        b[10] = "changed 11".to_string();

        let diff = unified_diff(&a, &b, "a", "b");
        assert_eq!(diff[0], "--- a");
        assert_eq!(diff[1], "+++ b");
        assert_eq!(diff[2], "@@ -1,5 +1,5 @@");
        assert!(diff.contains(&"-line 2".to_string()));
        assert!(diff.contains(&"+changed 2".to_string()));
        assert!(diff.contains(&"@@ -8,5 +8,5 @@".to_string()));
        assert_eq!(diff.last().unwrap(), " line 12");
    }

    #[test]
    fn test_unified_diff_of_equal_input_is_empty() {
        let a = ["same\n", "lines\n"];
        assert!(unified_diff(&a, &a, "a", "b").is_empty());
    }

    #[test]
    fn test_identical_strings() {
        let output = report("same", "same", true);
        assert!(output.contains("Strings are identical: True"));
        assert!(output.ends_with("No differences found.\n"));
        assert!(!output.contains("LINE-BY-LINE"));
    }

    #[test]
    fn test_character_level_report() {
        let output = report("one\ntwo\n", "one\ntwx\nthree", true);

        assert!(output.contains("String 1 length: 8 characters"));
        assert!(output.contains("Strings are identical: False"));
        assert!(output.contains("-two\n"));
        assert!(output.contains("First difference found at line 2:"));
        assert!(output.contains("String A line 2: 'two\\n'"));
        assert!(output.contains("--- string_a_char"));
        assert!(output.contains("\n-o\n+x\n"));
        assert!(output.contains("String A has 2 lines, String B has 3 lines"));
        assert!(output.contains("Extra lines in String B:\n  Line 3: 'three'"));
    }

    #[test]
    fn test_quoted_matches_python_repr() {
        assert_eq!(quoted("two\n"), r"'two\n'");
        assert_eq!(quoted(r#"  "content": "x","#), r#"'  "content": "x",'"#);
        assert_eq!(quoted("it's"), r#""it's""#);
        assert_eq!(quoted(r#"it's "x""#), r#"'it\'s "x"'"#);
        assert_eq!(quoted("a\\b\t\u{1}\r"), r"'a\\b\t\x01\r'");
        assert_eq!(quoted("doesn\u{2019}t"), "'doesn\u{2019}t'");
    }

    #[test]
    fn test_without_whitespace_section() {
        let output = report("a\n", "b\n", false);
        assert!(output.contains("=== LINE-BY-LINE DIFFERENCES ==="));
        assert!(!output.contains("CHARACTER-LEVEL"));
    }
}

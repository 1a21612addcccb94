/// Strip the surrounding quotes from a copied completion string and re-join its paragraphs.
///
/// Paragraphs are separated by blank lines; each is trimmed and empty ones are dropped.
pub fn format_paragraphs(text: &str) -> String {
    text.trim()
        .trim_matches('"')
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

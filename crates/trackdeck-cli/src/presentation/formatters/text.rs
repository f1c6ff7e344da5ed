pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Collapse newlines and runs of whitespace into single spaces, then
/// truncate. Used for one-line row previews.
pub fn single_line(text: &str, max_chars: usize) -> String {
    let normalized = text
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    truncate(&normalized, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer value", 9), "a long...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn single_line_collapses_whitespace() {
        assert_eq!(single_line("a\nb\r\n  c", 80), "a b c");
    }
}

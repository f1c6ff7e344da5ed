use regex::RegexBuilder;
use serde::Serialize;

/// One run of text, tagged with whether it matched the search term.
///
/// Concatenating the `text` of every segment reconstructs the input exactly,
/// original casing included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn matched(text: &str) -> Self {
        Segment {
            text: text.to_string(),
            matched: true,
        }
    }

    fn unmatched(text: &str) -> Self {
        Segment {
            text: text.to_string(),
            matched: false,
        }
    }
}

/// Case-insensitive substring containment, with the term trimmed first.
/// A blank term matches nothing.
pub fn term_matches(haystack: &str, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&term.to_lowercase())
}

/// Split `text` into matched/unmatched runs around every occurrence of
/// `term`. The term is taken literally (regex metacharacters escaped) and
/// matched case-insensitively. A blank term yields the whole text as one
/// unmatched segment.
pub fn highlight(text: &str, term: &str) -> Vec<Segment> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return vec![Segment::unmatched(text)];
    }

    let pattern = match RegexBuilder::new(&regex::escape(trimmed))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(_) => return vec![Segment::unmatched(text)],
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::unmatched(&text[last..found.start()]));
        }
        segments.push(Segment::matched(found.as_str()));
        last = found.end();
    }
    if last < text.len() {
        segments.push(Segment::unmatched(&text[last..]));
    }

    if segments.is_empty() {
        return vec![Segment::unmatched(text)];
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(term_matches("Google Cloud", "google"));
        assert!(term_matches("backend", "BACK"));
        assert!(!term_matches("Google Cloud", "amazon"));
    }

    #[test]
    fn blank_terms_match_nothing() {
        assert!(!term_matches("anything", ""));
        assert!(!term_matches("anything", "   "));
    }

    #[test]
    fn blank_term_yields_single_unmatched_segment() {
        let segments = highlight("Senior Rust Engineer", "  ");
        assert_eq!(segments, vec![Segment::unmatched("Senior Rust Engineer")]);
    }

    #[test]
    fn preserves_original_casing_in_matched_spans() {
        let segments = highlight("Google and GOOGLE and google", "google");
        assert_eq!(
            segments,
            vec![
                Segment::matched("Google"),
                Segment::unmatched(" and "),
                Segment::matched("GOOGLE"),
                Segment::unmatched(" and "),
                Segment::matched("google"),
            ]
        );
    }

    #[test]
    fn reconstruction_is_exact() {
        let cases = [
            ("Google Cloud Platform", "o"),
            ("no match here", "zzz"),
            ("", "term"),
            ("ends with term", "term"),
            ("term at start", "term"),
            ("aaa", "aa"),
        ];
        for (text, term) in cases {
            assert_eq!(reassemble(&highlight(text, term)), text, "term={term:?}");
        }
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let segments = highlight("released v1.2 (beta)", "(beta)");
        assert_eq!(
            segments,
            vec![
                Segment::unmatched("released v1.2 "),
                Segment::matched("(beta)"),
            ]
        );

        // A dot must not act as a wildcard.
        let segments = highlight("v1x2 and v1.2", "1.2");
        assert_eq!(
            segments,
            vec![
                Segment::unmatched("v1x2 and v"),
                Segment::matched("1.2"),
            ]
        );
    }

    #[test]
    fn tags_every_non_overlapping_occurrence() {
        let segments = highlight("go go go", "go");
        let matched: Vec<_> = segments.iter().filter(|s| s.matched).collect();
        assert_eq!(matched.len(), 3);
        assert_eq!(reassemble(&segments), "go go go");
    }
}

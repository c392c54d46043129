// file: src/search/excerpt.rs
// description: excerpt extraction with match highlighting
// reference: https://docs.rs/regex

use regex::Regex;

/// Characters of context kept on each side of the first match.
const WINDOW_RADIUS: usize = 80;

/// Excerpt length when the query is absent from the text.
const FALLBACK_LEN: usize = 150;

/// Case-insensitive literal matcher for a query string. Special characters
/// are escaped so the query is never interpreted as pattern syntax.
pub fn literal_matcher(query: &str) -> Option<Regex> {
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}

/// Extract a bounded excerpt around the first match, wrapping every
/// occurrence inside the window in `<mark>` tags. Window edges are clamped
/// to char boundaries; ellipses mark a window that is interior to the text.
pub fn extract_excerpt(content: &str, matcher: &Regex) -> String {
    if content.is_empty() {
        return String::new();
    }

    let Some(m) = matcher.find(content) else {
        // The caller only asks for excerpts of matched text, but defend
        // against a miss anyway with a plain prefix.
        let end = chars_forward(content, 0, FALLBACK_LEN);
        return format!("{}...", &content[..end]);
    };

    let start = chars_back(content, m.start(), WINDOW_RADIUS);
    let end = chars_forward(content, m.end(), WINDOW_RADIUS);

    let highlighted = matcher.replace_all(&content[start..end], |caps: &regex::Captures| {
        format!("<mark>{}</mark>", &caps[0])
    });

    let mut excerpt = String::new();
    if start > 0 {
        excerpt.push_str("...");
    }
    excerpt.push_str(&highlighted);
    if end < content.len() {
        excerpt.push_str("...");
    }
    excerpt
}

/// Byte index `n` chars before `from`, clamped to the start of `s`.
fn chars_back(s: &str, from: usize, n: usize) -> usize {
    if n == 0 {
        return from;
    }
    s[..from]
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte index `n` chars after `from`, clamped to the end of `s`.
fn chars_forward(s: &str, from: usize, n: usize) -> usize {
    s[from..]
        .char_indices()
        .nth(n)
        .map(|(i, _)| from + i)
        .unwrap_or(s.len())
}

// file: src/parser/slug.rs
// description: heading-anchor slugs matching the site generator's scheme
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("WHITESPACE regex is valid");

    // Strip specials but keep ASCII word chars, accented letters and hyphens
    static ref DISALLOWED: Regex = Regex::new(
        r"[^a-zA-Z0-9_\u{00C0}-\u{024F}\u{1E00}-\u{1EFF}-]"
    ).expect("DISALLOWED regex is valid");

    // "1." -> "1" so numbered headings keep the number, not the period
    static ref NUMBER_PERIOD: Regex =
        Regex::new(r"(\d+)\.").expect("NUMBER_PERIOD regex is valid");

    static ref MULTI_HYPHEN: Regex = Regex::new(r"-+").expect("MULTI_HYPHEN regex is valid");
}

/// Turn a heading into its in-page anchor id. Accented letters survive so
/// anchors stay readable for non-English headings.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim();

    let hyphenated = WHITESPACE.replace_all(trimmed, "-");
    let cleaned = DISALLOWED.replace_all(&hyphenated, "");
    let renumbered = NUMBER_PERIOD.replace_all(&cleaned, "$1");
    let collapsed = MULTI_HYPHEN.replace_all(&renumbered, "-");

    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_heading() {
        assert_eq!(slugify("Getting Started"), "getting-started");
    }

    #[test]
    fn test_accents_preserved() {
        assert_eq!(slugify("Présentation générale"), "présentation-générale");
    }

    #[test]
    fn test_special_characters_stripped() {
        assert_eq!(slugify("What's new? (2024)"), "whats-new-2024");
    }

    #[test]
    fn test_numbered_heading_drops_period() {
        assert_eq!(slugify("1. Introduction"), "1-introduction");
    }

    #[test]
    fn test_hyphens_collapsed_and_trimmed() {
        assert_eq!(slugify("  --a  -  b--  "), "a-b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify("   "), "");
    }
}

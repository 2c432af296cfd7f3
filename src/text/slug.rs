/// URL-safe slug: lowercased, punctuation dropped, whitespace and
/// hyphen runs collapsed to single hyphens, no leading/trailing hyphen.
/// Underscores survive, matching word-character semantics.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
        // other punctuation is dropped outright
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("React Hooks Guide"), "react-hooks-guide");
    }

    #[test]
    fn drops_punctuation() {
        assert_eq!(slugify("What's New in Rust 1.80?"), "whats-new-in-rust-180");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(slugify("a  --  b"), "a-b");
        assert_eq!(slugify("  trimmed  "), "trimmed");
    }

    #[test]
    fn keeps_underscores() {
        assert_eq!(slugify("snake_case title"), "snake_case-title");
    }

    #[test]
    fn punctuation_only_title_slugs_to_empty() {
        assert_eq!(slugify("!!!"), "");
    }
}

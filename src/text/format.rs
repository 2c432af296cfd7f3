use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

/// Strip HTML tags, leaving the text content.
pub fn strip_html(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}

/// Truncate to at most `max_chars` characters, appending an ellipsis
/// when anything was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Plain-text excerpt of rendered content.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    truncate(strip_html(content).trim(), max_chars)
}

/// Estimated reading time in whole minutes, never zero.
pub fn reading_time(content: &str, words_per_minute: usize) -> u32 {
    let wpm = words_per_minute.max(1);
    let words = strip_html(content).unicode_words().count();
    words.div_ceil(wpm).max(1) as u32
}

/// Compact counter rendering: 1234 → "1.2K", 2_500_000 → "2.5M".
pub fn compact_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

use std::sync::LazyLock;

use regex::Regex;

use crate::core::config::ValidationLimits;
use crate::core::error::{Error, Result};
use crate::model::post::PostDraft;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username pattern"));
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("tag pattern"));

pub fn email(value: &str) -> Result<()> {
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(Error::invalid_input(format!("invalid email address: {value}")))
    }
}

pub fn username(value: &str, limits: &ValidationLimits) -> Result<()> {
    let len = value.chars().count();
    if len < limits.username_min {
        return Err(Error::invalid_input(format!(
            "username must be at least {} characters",
            limits.username_min
        )));
    }
    if len > limits.username_max {
        return Err(Error::invalid_input(format!(
            "username must be at most {} characters",
            limits.username_max
        )));
    }
    if !USERNAME.is_match(value) {
        return Err(Error::invalid_input(
            "username can only contain letters, numbers, and underscores",
        ));
    }
    Ok(())
}

pub fn title(value: &str, limits: &ValidationLimits) -> Result<()> {
    let len = value.trim().chars().count();
    if len < limits.title_min {
        return Err(Error::invalid_input(format!(
            "title must be at least {} characters",
            limits.title_min
        )));
    }
    if len > limits.title_max {
        return Err(Error::invalid_input(format!(
            "title must be at most {} characters",
            limits.title_max
        )));
    }
    Ok(())
}

pub fn content(value: &str, limits: &ValidationLimits) -> Result<()> {
    if value.trim().chars().count() < limits.content_min {
        return Err(Error::invalid_input(format!(
            "content must be at least {} characters",
            limits.content_min
        )));
    }
    Ok(())
}

pub fn excerpt(value: &str, limits: &ValidationLimits) -> Result<()> {
    if value.chars().count() > limits.excerpt_max {
        return Err(Error::invalid_input(format!(
            "excerpt must be at most {} characters",
            limits.excerpt_max
        )));
    }
    Ok(())
}

pub fn tags(values: &[String], limits: &ValidationLimits) -> Result<()> {
    if values.len() > limits.max_tags {
        return Err(Error::invalid_input(format!(
            "at most {} tags allowed",
            limits.max_tags
        )));
    }
    for tag in values {
        let len = tag.chars().count();
        if len == 0 || len > limits.tag_max {
            return Err(Error::invalid_input(format!(
                "tag must be 1 to {} characters: {tag:?}",
                limits.tag_max
            )));
        }
        if !TAG.is_match(tag) {
            return Err(Error::invalid_input(format!(
                "tag can only contain letters, numbers, and hyphens: {tag:?}"
            )));
        }
    }
    Ok(())
}

pub fn comment(value: &str, limits: &ValidationLimits) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input("comment cannot be empty"));
    }
    if trimmed.chars().count() > limits.comment_max {
        return Err(Error::invalid_input(format!(
            "comment must be at most {} characters",
            limits.comment_max
        )));
    }
    Ok(())
}

pub fn category_name(value: &str, limits: &ValidationLimits) -> Result<()> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(Error::invalid_input("category name is required"));
    }
    if len > limits.category_name_max {
        return Err(Error::invalid_input(format!(
            "category name must be at most {} characters",
            limits.category_name_max
        )));
    }
    Ok(())
}

pub fn bio(value: &str, limits: &ValidationLimits) -> Result<()> {
    if value.chars().count() > limits.bio_max {
        return Err(Error::invalid_input(format!(
            "bio must be at most {} characters",
            limits.bio_max
        )));
    }
    Ok(())
}

/// All the draft checks a post must pass before it is stored.
pub fn post_draft(draft: &PostDraft, limits: &ValidationLimits) -> Result<()> {
    title(&draft.title, limits)?;
    content(&draft.content, limits)?;
    if let Some(text) = &draft.excerpt {
        excerpt(text, limits)?;
    }
    if draft.category.trim().is_empty() {
        return Err(Error::invalid_input("category is required"));
    }
    tags(&draft.tags, limits)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn limits() -> ValidationLimits {
        ValidationLimits::default()
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(email("ada@example.com").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["no-at-sign", "two@@example.com ", "spaces in@example.com", "no@tld"] {
            let err = email(bad).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidInput, "{bad}");
        }
    }

    #[test]
    fn username_bounds_and_charset() {
        assert!(username("ada_99", &limits()).is_ok());
        assert!(username("ab", &limits()).is_err());
        assert!(username(&"x".repeat(21), &limits()).is_err());
        assert!(username("ada lovelace", &limits()).is_err());
    }

    #[test]
    fn tag_count_and_charset() {
        let ok: Vec<String> = vec!["rust".into(), "web-dev".into()];
        assert!(tags(&ok, &limits()).is_ok());

        let too_many: Vec<String> = (0..11).map(|i| format!("t{i}")).collect();
        assert!(tags(&too_many, &limits()).is_err());

        let bad_chars: Vec<String> = vec!["c++".into()];
        assert!(tags(&bad_chars, &limits()).is_err());
    }

    #[test]
    fn comment_must_have_substance() {
        assert!(comment("hi", &limits()).is_ok());
        assert!(comment("   ", &limits()).is_err());
        assert!(comment(&"x".repeat(1001), &limits()).is_err());
    }
}

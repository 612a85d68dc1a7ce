// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult, FieldErrors};
use std::fmt;

pub const MAX_TITLE_CHARS: usize = 255;
pub const MAX_SLUG_CHARS: usize = 255;
pub const MAX_META_TITLE_CHARS: usize = 255;
pub const MAX_META_DESCRIPTION_CHARS: usize = 500;
pub const MAX_META_KEYWORDS_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn check_length(field: &str, value: &str, max: usize) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} may not be greater than {max} characters"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        check_length("title", &value, MAX_TITLE_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

/// A generated slug. Construction only checks shape; uniqueness is the
/// store's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        check_length("slug", &value, MAX_SLUG_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}

/// SEO metadata. Every part is optional; blank strings are stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

impl ArticleMeta {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        keywords: Option<String>,
    ) -> DomainResult<Self> {
        let mut errors = FieldErrors::new();
        let title = non_blank(title);
        let description = non_blank(description);
        let keywords = non_blank(keywords);

        if let Some(value) = &title {
            errors.check(
                "meta_title",
                check_length("meta title", value, MAX_META_TITLE_CHARS),
            );
        }
        if let Some(value) = &description {
            errors.check(
                "meta_description",
                check_length("meta description", value, MAX_META_DESCRIPTION_CHARS),
            );
        }
        if let Some(value) = &keywords {
            errors.check(
                "meta_keywords",
                check_length("meta keywords", value, MAX_META_KEYWORDS_CHARS),
            );
        }
        errors.into_result()?;

        Ok(Self {
            title,
            description,
            keywords,
        })
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_accepts_any_script_up_to_the_limit() {
        assert!(ArticleTitle::new("مرحبا بالعالم").is_ok());
        assert!(ArticleTitle::new("ক".repeat(MAX_TITLE_CHARS)).is_ok());
        assert!(ArticleTitle::new("x".repeat(MAX_TITLE_CHARS + 1)).is_err());
        assert!(ArticleTitle::new("   ").is_err());
    }

    #[test]
    fn meta_reports_each_field_separately() {
        let err = ArticleMeta::new(
            Some("t".repeat(MAX_META_TITLE_CHARS + 1)),
            Some("d".repeat(MAX_META_DESCRIPTION_CHARS + 1)),
            Some("ok".into()),
        )
        .unwrap_err();

        match err {
            DomainError::InvalidFields(fields) => {
                assert!(fields.contains("meta_title"));
                assert!(fields.contains("meta_description"));
                assert!(!fields.contains("meta_keywords"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_meta_is_dropped() {
        let meta = ArticleMeta::new(Some("  ".into()), None, Some("news".into())).unwrap();
        assert_eq!(meta.title, None);
        assert_eq!(meta.keywords.as_deref(), Some("news"));
    }
}

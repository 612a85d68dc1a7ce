// src/domain/article/query.rs
use crate::domain::article::status::ArticleStatus;
use crate::domain::errors::DomainError;
use crate::domain::taxonomy::TermId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::str::FromStr;

/// Listing filter. Soft-deleted articles are never listed.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    /// Matched against title, excerpt and content.
    pub search: Option<String>,
    pub status: Option<ArticleStatus>,
    pub category_id: Option<TermId>,
    pub author_id: Option<UserId>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArticleSortField {
    Id,
    Title,
    Slug,
    Status,
    ScheduledAt,
    PublishedAt,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl ArticleSortField {
    pub fn column(&self) -> &'static str {
        match self {
            ArticleSortField::Id => "id",
            ArticleSortField::Title => "title",
            ArticleSortField::Slug => "slug",
            ArticleSortField::Status => "status",
            ArticleSortField::ScheduledAt => "scheduled_at",
            ArticleSortField::PublishedAt => "published_at",
            ArticleSortField::CreatedAt => "created_at",
            ArticleSortField::UpdatedAt => "updated_at",
        }
    }
}

impl FromStr for ArticleSortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(ArticleSortField::Id),
            "title" => Ok(ArticleSortField::Title),
            "slug" => Ok(ArticleSortField::Slug),
            "status" => Ok(ArticleSortField::Status),
            "scheduled_at" => Ok(ArticleSortField::ScheduledAt),
            "published_at" => Ok(ArticleSortField::PublishedAt),
            "created_at" => Ok(ArticleSortField::CreatedAt),
            "updated_at" => Ok(ArticleSortField::UpdatedAt),
            other => Err(DomainError::Validation(format!(
                "cannot sort articles by '{other}'"
            ))),
        }
    }
}

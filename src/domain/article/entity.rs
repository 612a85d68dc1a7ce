// src/domain/article/entity.rs
use crate::domain::article::status::ArticleStatus;
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleMeta, ArticleSlug, ArticleTitle,
};
use crate::domain::taxonomy::TermId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Public prefix under which stored uploads are served.
pub const STORAGE_URL_PREFIX: &str = "/storage/";

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub excerpt: Option<String>,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
    pub category_id: TermId,
    pub tag_ids: Vec<TermId>,
    pub meta: ArticleMeta,
    pub is_active: bool,
    pub created_by: UserId,
    pub updated_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Absolute URLs are returned untouched, storage paths are prefixed.
    pub fn featured_image_url(&self) -> Option<String> {
        self.featured_image.as_deref().map(|path| {
            if path.starts_with("http") {
                path.to_string()
            } else {
                format!("{STORAGE_URL_PREFIX}{}", path.trim_start_matches('/'))
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub excerpt: Option<String>,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
    pub category_id: TermId,
    pub tag_ids: Vec<TermId>,
    pub meta: ArticleMeta,
    pub is_active: bool,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// Full-state write of an article guarded by the `updated_at` value it was
/// read with. The store rejects the write with a conflict when the row moved
/// on in the meantime.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub article: Article,
    pub original_updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(article: Article, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            article,
            original_updated_at,
        }
    }

    pub fn id(&self) -> ArticleId {
        self.article.id
    }
}

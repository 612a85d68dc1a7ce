// src/application/dto/articles.rs
use crate::domain::article::{Article, ArticleStatus};
use crate::domain::slug::{Language, detect_language};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub status: ArticleStatus,
    #[serde(default, with = "serde_time::option")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
    pub featured_image_url: Option<String>,
    pub category_id: i64,
    pub tag_ids: Vec<i64>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_active: bool,
    /// Script hint derived from the title.
    pub language: Language,
    pub created_by: i64,
    pub updated_by: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let featured_image_url = article.featured_image_url();
        let language = detect_language(article.title.as_str());
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            excerpt: article.excerpt,
            content: article.content.into(),
            status: article.status,
            scheduled_at: article.scheduled_at,
            published_at: article.published_at,
            featured_image: article.featured_image,
            featured_image_url,
            category_id: article.category_id.into(),
            tag_ids: article.tag_ids.into_iter().map(Into::into).collect(),
            meta_title: article.meta.title,
            meta_description: article.meta.description,
            meta_keywords: article.meta.keywords,
            is_active: article.is_active,
            language,
            created_by: article.created_by.into(),
            updated_by: article.updated_by.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            deleted_at: article.deleted_at,
        }
    }
}

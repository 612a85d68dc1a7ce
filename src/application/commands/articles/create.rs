// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        access::{Permission, ensure_permission},
        dto::{Actor, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            ArticleContent, ArticleDraft, ArticleMeta, ArticleStatus, ArticleTitle,
            check_schedule, value_objects::MAX_SLUG_CHARS,
        },
        errors::FieldErrors,
    },
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateArticleInput {
    pub title: String,
    /// Normalised and made unique like a generated slug. Falls back to the
    /// title when absent or blank.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub status: ArticleStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Path or URL handed back by the file-storage collaborator.
    pub featured_image: Option<String>,
    pub category_id: i64,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
}

impl CreateArticleInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>, category_id: i64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category_id,
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_scheduled_at(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(at);
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_tags(mut self, tag_ids: Vec<i64>) -> Self {
        self.tag_ids = tag_ids;
        self
    }
}

impl ArticleCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id))]
    pub async fn create_article(
        &self,
        actor: &Actor,
        input: CreateArticleInput,
    ) -> ApplicationResult<ArticleDto> {
        ensure_permission(actor, Permission::ManageArticles)?;

        let now = self.clock.now();
        let mut errors = FieldErrors::new();

        let title = errors.check("title", ArticleTitle::new(input.title));
        let content = errors.check("content", ArticleContent::new(input.content));
        let meta = errors.check(
            "meta",
            ArticleMeta::new(input.meta_title, input.meta_description, input.meta_keywords),
        );
        check_schedule(Some(input.status), input.scheduled_at, now, &mut errors);
        if let Some(slug) = &input.slug {
            if slug.chars().count() > MAX_SLUG_CHARS {
                errors.add(
                    "slug",
                    format!("the slug may not be greater than {MAX_SLUG_CHARS} characters"),
                );
            }
        }
        let category_id = self.check_category(input.category_id, &mut errors).await?;
        let tag_ids = self.check_tags(&input.tag_ids, &mut errors).await?;

        let (Some(title), Some(content), Some(meta), Some(category_id), Some(tag_ids)) =
            (title, content, meta, category_id, tag_ids)
        else {
            return Err(ApplicationError::InvalidFields(errors));
        };
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let slug_source = input
            .slug
            .filter(|slug| !slug.trim().is_empty())
            .unwrap_or_else(|| title.as_str().to_string());

        let draft = ArticleDraft {
            title,
            excerpt: input.excerpt.filter(|e| !e.trim().is_empty()),
            content,
            status: input.status,
            scheduled_at: input.scheduled_at,
            featured_image: input.featured_image,
            category_id,
            tag_ids,
            meta,
            is_active: input.is_active.unwrap_or(true),
        };

        let created = self
            .insert_with_slug_retry(draft, &slug_source, actor, now)
            .await?;
        info!(article_id = %created.id, slug = %created.slug, status = %created.status, "article created");
        Ok(created.into())
    }
}

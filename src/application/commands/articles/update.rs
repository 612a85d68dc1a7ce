// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        access::{Permission, ensure_permission},
        dto::{Actor, ArticleDto},
        error::ApplicationResult,
    },
    domain::{
        article::{
            ArticleContent, ArticleEdit, ArticleMeta, ArticleStatus, ArticleTitle, check_schedule,
        },
        errors::FieldErrors,
    },
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticleInput {
    pub id: i64,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub status: Option<ArticleStatus>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
    pub category_id: Option<i64>,
    pub tag_ids: Option<Vec<i64>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateArticleInput {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl ArticleCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id, article = input.id))]
    pub async fn update_article(
        &self,
        actor: &Actor,
        input: UpdateArticleInput,
    ) -> ApplicationResult<ArticleDto> {
        ensure_permission(actor, Permission::ManageArticles)?;

        let article = self.load_article(input.id).await?;
        let now = self.clock.now();
        let mut errors = FieldErrors::new();

        let title = input
            .title
            .and_then(|title| errors.check("title", ArticleTitle::new(title)));
        let content = input
            .content
            .and_then(|content| errors.check("content", ArticleContent::new(content)));
        check_schedule(input.status, input.scheduled_at, now, &mut errors);

        let meta = if input.meta_title.is_some()
            || input.meta_description.is_some()
            || input.meta_keywords.is_some()
        {
            let current = &article.meta;
            errors.check(
                "meta",
                ArticleMeta::new(
                    input.meta_title.or_else(|| current.title.clone()),
                    input.meta_description.or_else(|| current.description.clone()),
                    input.meta_keywords.or_else(|| current.keywords.clone()),
                ),
            )
        } else {
            None
        };

        let category_id = match input.category_id {
            Some(id) => self.check_category(id, &mut errors).await?,
            None => None,
        };
        let tag_ids = match &input.tag_ids {
            Some(ids) => self.check_tags(ids, &mut errors).await?,
            None => None,
        };

        if !errors.is_empty() {
            return Err(errors.into());
        }

        let edit = ArticleEdit {
            title,
            excerpt: input.excerpt,
            content,
            status: input.status,
            scheduled_at: input.scheduled_at,
            featured_image: input.featured_image,
            category_id,
            tag_ids,
            meta,
            is_active: input.is_active,
        };

        let previous_slug = article.slug.clone();
        let updated = self
            .update_with_slug_retry(article, edit, actor, now)
            .await?;
        if updated.slug != previous_slug {
            info!(from = %previous_slug, to = %updated.slug, "article slug regenerated");
        }
        Ok(updated.into())
    }
}

// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        access::{Permission, ensure_permission},
        dto::{Actor, ArticleDto},
        error::ApplicationResult,
    },
    domain::{article::lifecycle::SCHEDULED_AT_FIELD, errors::FieldErrors},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct PublishInput {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleInput {
    pub id: i64,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id, article = input.id))]
    pub async fn publish_article(
        &self,
        actor: &Actor,
        input: PublishInput,
    ) -> ApplicationResult<ArticleDto> {
        ensure_permission(actor, Permission::ManageArticles)?;

        let mut article = self.load_article(input.id).await?;
        let original_updated_at = article.updated_at;
        article.publish(actor.id, self.clock.now());

        let updated = self.persist(article, original_updated_at).await?;
        info!(slug = %updated.slug, "article published");
        Ok(updated.into())
    }

    #[tracing::instrument(skip_all, fields(actor = %actor.id, article = input.id))]
    pub async fn schedule_article(
        &self,
        actor: &Actor,
        input: ScheduleInput,
    ) -> ApplicationResult<ArticleDto> {
        ensure_permission(actor, Permission::ManageArticles)?;

        let Some(at) = input.scheduled_at else {
            return Err(FieldErrors::single(SCHEDULED_AT_FIELD, "a scheduled time is required").into());
        };

        let mut article = self.load_article(input.id).await?;
        let original_updated_at = article.updated_at;
        article.schedule(at, actor.id, self.clock.now())?;

        let updated = self.persist(article, original_updated_at).await?;
        info!(slug = %updated.slug, scheduled_at = %at, "article scheduled");
        Ok(updated.into())
    }
}

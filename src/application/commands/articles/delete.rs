// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        access::{Permission, ensure_permission},
        dto::{Actor, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, errors::FieldErrors},
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteArticleInput {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkDeleteInput {
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestoreArticleInput {
    pub id: i64,
}

impl ArticleCommandService {
    /// Soft delete. The slug stays reserved while the tombstone exists.
    #[tracing::instrument(skip_all, fields(actor = %actor.id, article = input.id))]
    pub async fn delete_article(
        &self,
        actor: &Actor,
        input: DeleteArticleInput,
    ) -> ApplicationResult<()> {
        ensure_permission(actor, Permission::ManageArticles)?;

        let article = self.load_article(input.id).await?;
        self.write_repo
            .soft_delete(article.id, self.clock.now())
            .await?;
        info!(slug = %article.slug, "article deleted");
        Ok(())
    }

    /// All-or-nothing: one unknown id fails the whole request.
    #[tracing::instrument(skip_all, fields(actor = %actor.id, count = input.ids.len()))]
    pub async fn bulk_delete_articles(
        &self,
        actor: &Actor,
        input: BulkDeleteInput,
    ) -> ApplicationResult<u64> {
        ensure_permission(actor, Permission::ManageArticles)?;

        if input.ids.is_empty() {
            return Err(FieldErrors::single("ids", "at least one article id is required").into());
        }

        let mut errors = FieldErrors::new();
        let mut ids: Vec<ArticleId> = Vec::with_capacity(input.ids.len());
        for raw in input.ids {
            let found = match ArticleId::new(raw) {
                Ok(id) => self.read_repo.find_by_id(id).await?.map(|a| a.id),
                Err(_) => None,
            };
            match found {
                Some(id) if !ids.contains(&id) => ids.push(id),
                Some(_) => {}
                None => errors.add("ids", format!("article {raw} does not exist")),
            }
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let deleted = self
            .write_repo
            .soft_delete_many(&ids, self.clock.now())
            .await?;
        info!(deleted, "articles deleted");
        Ok(deleted)
    }

    #[tracing::instrument(skip_all, fields(actor = %actor.id, article = input.id))]
    pub async fn restore_article(
        &self,
        actor: &Actor,
        input: RestoreArticleInput,
    ) -> ApplicationResult<ArticleDto> {
        ensure_permission(actor, Permission::ManageArticles)?;

        let id = ArticleId::new(input.id)?;
        let article = self
            .read_repo
            .find_including_deleted(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !article.is_deleted() {
            return Ok(article.into());
        }

        let restored = self.write_repo.restore(id, self.clock.now()).await?;
        info!(slug = %restored.slug, "article restored");
        Ok(restored.into())
    }
}

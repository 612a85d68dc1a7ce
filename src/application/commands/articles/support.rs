// src/application/commands/articles/support.rs
use super::{ArticleCommandService, SLUG_RETRY_ATTEMPTS};
use crate::{
    application::{
        dto::Actor,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleDraft, ArticleEdit, ArticleId, ArticleUpdate},
        errors::{DomainError, FieldErrors},
        taxonomy::TermId,
    },
};
use chrono::{DateTime, Utc};
use tracing::warn;

impl ArticleCommandService {
    pub(super) async fn load_article(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// Records a `category_id` error unless `id` names a live category.
    pub(super) async fn check_category(
        &self,
        id: i64,
        errors: &mut FieldErrors,
    ) -> ApplicationResult<Option<TermId>> {
        let found = match TermId::new(id) {
            Ok(term_id) => self.category_repo.find_by_id(term_id).await?.map(|t| t.id),
            Err(_) => None,
        };
        if found.is_none() {
            errors.add("category_id", "the selected category is invalid");
        }
        Ok(found)
    }

    /// Records a `tag_ids` error for every id that is not a live tag.
    /// Duplicates are dropped, order is kept.
    pub(super) async fn check_tags(
        &self,
        ids: &[i64],
        errors: &mut FieldErrors,
    ) -> ApplicationResult<Option<Vec<TermId>>> {
        let mut tags: Vec<TermId> = Vec::with_capacity(ids.len());
        let mut valid = true;
        for &raw in ids {
            let found = match TermId::new(raw) {
                Ok(term_id) => self.tag_repo.find_by_id(term_id).await?.map(|t| t.id),
                Err(_) => None,
            };
            match found {
                Some(id) if !tags.contains(&id) => tags.push(id),
                Some(_) => {}
                None => {
                    errors.add("tag_ids", format!("tag {raw} does not exist"));
                    valid = false;
                }
            }
        }
        Ok(valid.then_some(tags))
    }

    pub(super) async fn insert_with_slug_retry(
        &self,
        draft: ArticleDraft,
        slug_source: &str,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> ApplicationResult<Article> {
        let mut attempt = 1;
        loop {
            let slug = self
                .slug_service
                .generate_unique_slug(slug_source, None)
                .await?;
            let new_article = draft.clone().into_new_article(slug, actor.id, now);

            match self.write_repo.insert(new_article).await {
                Err(DomainError::SlugConflict(slug)) if attempt < SLUG_RETRY_ATTEMPTS => {
                    warn!(%slug, attempt, "slug claimed concurrently, retrying insert");
                    attempt += 1;
                }
                result => return Ok(result?),
            }
        }
    }

    /// Apply `edit` on top of `article` and write it, regenerating the slug
    /// when the title changed and the slug is not frozen yet.
    pub(super) async fn update_with_slug_retry(
        &self,
        article: Article,
        edit: ArticleEdit,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> ApplicationResult<Article> {
        let original_updated_at = article.updated_at;
        let mut attempt = 1;
        loop {
            let mut next = article.clone();
            let slug = match &edit.title {
                Some(title) if next.should_regenerate_slug(title) => Some(
                    self.slug_service
                        .generate_unique_slug(title.as_str(), Some(next.id))
                        .await?,
                ),
                _ => None,
            };
            next.apply_edit(edit.clone(), slug, actor.id, now);

            match self
                .write_repo
                .update(ArticleUpdate::new(next, original_updated_at))
                .await
            {
                Err(DomainError::SlugConflict(slug)) if attempt < SLUG_RETRY_ATTEMPTS => {
                    warn!(%slug, attempt, "slug claimed concurrently, retrying update");
                    attempt += 1;
                }
                result => return Ok(result?),
            }
        }
    }

    pub(super) async fn persist(
        &self,
        article: Article,
        original_updated_at: DateTime<Utc>,
    ) -> ApplicationResult<Article> {
        let updated = self
            .write_repo
            .update(ArticleUpdate::new(article, original_updated_at))
            .await?;
        Ok(updated)
    }
}

// src/application/queries/articles/get.rs
use super::ArticleQueryService;
use crate::{
    application::{
        access::{Permission, ensure_permission},
        dto::{Actor, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleSlug},
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

pub struct PreviewArticleQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        actor: &Actor,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        ensure_permission(actor, Permission::ManageArticles)?;

        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }

    /// Looks the slug up verbatim, whatever the article's status.
    pub async fn preview_article(
        &self,
        actor: &Actor,
        query: PreviewArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        ensure_permission(actor, Permission::ManageArticles)?;

        let slug = ArticleSlug::new(query.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }
}

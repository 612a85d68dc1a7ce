// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::query::{ArticleFilter, ArticleSortField};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::listing::{PageRequest, Sort};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Write side. Implementations must enforce slug uniqueness across every
/// row, tombstoned ones included, and report a clash as
/// `DomainError::SlugConflict`.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn soft_delete(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<()>;
    /// Tombstones all ids or none. Returns the number of rows touched.
    async fn soft_delete_many(&self, ids: &[ArticleId], at: DateTime<Utc>) -> DomainResult<u64>;
    async fn restore(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_including_deleted(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// True when another article, live or tombstoned, already owns `slug`.
    async fn slug_exists(&self, slug: &str, exclude: Option<ArticleId>) -> DomainResult<bool>;
    async fn list(
        &self,
        filter: &ArticleFilter,
        sort: Sort<ArticleSortField>,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)>;
}

// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        access::{Permission, ensure_permission},
        dto::{Actor, ArticleDto, Page},
        error::ApplicationResult,
        queries::{day_range, page_request, parse_sort},
    },
    domain::{
        article::{ArticleFilter, ArticleSortField, ArticleStatus},
        taxonomy::TermId,
        user::UserId,
    },
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListArticlesQuery {
    pub search: Option<String>,
    pub status: Option<ArticleStatus>,
    pub category_id: Option<i64>,
    pub author_id: Option<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: &Actor,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        ensure_permission(actor, Permission::ManageArticles)?;

        let sort = parse_sort::<ArticleSortField>(
            query.sort_by.as_deref(),
            query.sort_order.as_deref(),
        )?;
        let page = page_request(query.page, query.per_page);
        let (created_from, created_to) = day_range(query.date_from, query.date_to);

        let filter = ArticleFilter {
            search: query.search.filter(|s| !s.trim().is_empty()),
            status: query.status,
            category_id: query.category_id.map(TermId),
            author_id: query.author_id.map(UserId),
            created_from,
            created_to,
        };

        let (records, total) = self.read_repo.list(&filter, sort, page).await?;
        Ok(Page::from_records(records, page, total))
    }
}

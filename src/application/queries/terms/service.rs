// src/application/queries/terms/service.rs
use std::sync::Arc;

use crate::{
    application::{
        access::{Permission, ensure_permission},
        dto::{Actor, Page, TermDto},
        error::{ApplicationError, ApplicationResult},
        queries::{day_range, page_request, parse_sort},
    },
    domain::taxonomy::{TermFilter, TermId, TermKind, TermRepository, TermSortField},
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityFilter {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTermsQuery {
    pub search: Option<String>,
    pub status: Option<ActivityFilter>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub struct TermQueryService {
    categories: Arc<dyn TermRepository>,
    tags: Arc<dyn TermRepository>,
}

impl TermQueryService {
    pub fn new(categories: Arc<dyn TermRepository>, tags: Arc<dyn TermRepository>) -> Self {
        Self { categories, tags }
    }

    fn repo(&self, kind: TermKind) -> &dyn TermRepository {
        match kind {
            TermKind::Category => self.categories.as_ref(),
            TermKind::Tag => self.tags.as_ref(),
        }
    }

    pub async fn get_term(&self, actor: &Actor, kind: TermKind, id: i64) -> ApplicationResult<TermDto> {
        ensure_permission(actor, Permission::ManageTaxonomy)?;

        let id = TermId::new(id)?;
        let term = self
            .repo(kind)
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{kind} not found")))?;
        Ok(term.into())
    }

    pub async fn list_terms(
        &self,
        actor: &Actor,
        kind: TermKind,
        query: ListTermsQuery,
    ) -> ApplicationResult<Page<TermDto>> {
        ensure_permission(actor, Permission::ManageTaxonomy)?;

        let sort = parse_sort::<TermSortField>(query.sort_by.as_deref(), query.sort_order.as_deref())?;
        let page = page_request(query.page, query.per_page);
        let (created_from, created_to) = day_range(query.date_from, query.date_to);

        let filter = TermFilter {
            search: query.search.filter(|s| !s.trim().is_empty()),
            is_active: query.status.map(|status| status == ActivityFilter::Active),
            created_from,
            created_to,
        };

        let (records, total) = self.repo(kind).list(&filter, sort, page).await?;
        Ok(Page::from_records(records, page, total))
    }
}

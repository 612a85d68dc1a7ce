// src/domain/taxonomy/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::listing::{PageRequest, Sort};
use crate::domain::taxonomy::entity::{
    NewTerm, Term, TermFilter, TermId, TermKind, TermSortField, TermTitle, TermUpdate,
};
use chrono::{DateTime, Utc};
use async_trait::async_trait;

/// Storage for one kind of term. Soft-deleted terms are invisible to every
/// method.
#[async_trait]
pub trait TermRepository: Send + Sync {
    fn kind(&self) -> TermKind;

    async fn insert(&self, term: NewTerm) -> DomainResult<Term>;

    async fn update(&self, update: TermUpdate) -> DomainResult<Term>;

    async fn soft_delete(&self, id: TermId, at: DateTime<Utc>) -> DomainResult<()>;

    async fn find_by_id(&self, id: TermId) -> DomainResult<Option<Term>>;

    async fn find_by_title(&self, title: &TermTitle) -> DomainResult<Option<Term>>;

    async fn list(
        &self,
        filter: &TermFilter,
        sort: Sort<TermSortField>,
        page: PageRequest,
    ) -> DomainResult<(Vec<Term>, u64)>;
}

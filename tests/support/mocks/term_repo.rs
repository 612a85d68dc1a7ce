// tests/support/mocks/term_repo.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lipi_core::domain::errors::{DomainError, DomainResult};
use lipi_core::domain::listing::{PageRequest, Sort, SortOrder};
use lipi_core::domain::taxonomy::{
    NewTerm, Term, TermFilter, TermId, TermKind, TermRepository, TermSortField, TermTitle,
    TermUpdate,
};
use std::sync::Mutex;

pub struct InMemoryTermRepo {
    kind: TermKind,
    rows: Mutex<Vec<Term>>,
}

impl InMemoryTermRepo {
    pub fn new(kind: TermKind) -> Self {
        Self {
            kind,
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Insert directly, bypassing the services.
    pub fn seed(&self, title: &str, is_active: bool, at: DateTime<Utc>) -> i64 {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(Term {
            id: TermId(id),
            kind: self.kind,
            title: TermTitle::new(title).unwrap(),
            is_active,
            created_at: at,
            updated_at: at,
            deleted_at: None,
        });
        id
    }

    pub fn get(&self, id: i64) -> Option<Term> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id.0 == id)
            .cloned()
    }
}

fn live_title_taken(rows: &[Term], title: &TermTitle, except: Option<TermId>) -> bool {
    rows.iter()
        .any(|t| t.deleted_at.is_none() && &t.title == title && Some(t.id) != except)
}

#[async_trait]
impl TermRepository for InMemoryTermRepo {
    fn kind(&self) -> TermKind {
        self.kind
    }

    async fn insert(&self, term: NewTerm) -> DomainResult<Term> {
        let mut rows = self.rows.lock().unwrap();
        if live_title_taken(&rows, &term.title, None) {
            return Err(DomainError::Conflict("title already exists".into()));
        }
        let created = Term {
            id: TermId(rows.len() as i64 + 1),
            kind: self.kind,
            title: term.title,
            is_active: term.is_active,
            created_at: term.created_at,
            updated_at: term.created_at,
            deleted_at: None,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: TermUpdate) -> DomainResult<Term> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(title) = &update.title {
            if live_title_taken(&rows, title, Some(update.id)) {
                return Err(DomainError::Conflict("title already exists".into()));
            }
        }
        let row = rows
            .iter_mut()
            .find(|t| t.id == update.id && t.deleted_at.is_none())
            .ok_or_else(|| DomainError::NotFound(format!("{} not found", self.kind)))?;
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(is_active) = update.is_active {
            row.is_active = is_active;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn soft_delete(&self, id: TermId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|t| t.id == id && t.deleted_at.is_none())
            .ok_or_else(|| DomainError::NotFound(format!("{} not found", self.kind)))?;
        row.deleted_at = Some(at);
        row.updated_at = at;
        Ok(())
    }

    async fn find_by_id(&self, id: TermId) -> DomainResult<Option<Term>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|t| t.id == id && t.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_title(&self, title: &TermTitle) -> DomainResult<Option<Term>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|t| &t.title == title && t.deleted_at.is_none())
            .cloned())
    }

    async fn list(
        &self,
        filter: &TermFilter,
        sort: Sort<TermSortField>,
        page: PageRequest,
    ) -> DomainResult<(Vec<Term>, u64)> {
        let rows = self.rows.lock().unwrap();
        let mut hits: Vec<Term> = rows
            .iter()
            .filter(|t| t.deleted_at.is_none())
            .filter(|t| {
                filter.search.as_ref().is_none_or(|s| {
                    t.title.as_str().to_lowercase().contains(&s.to_lowercase())
                })
            })
            .filter(|t| filter.is_active.is_none_or(|a| t.is_active == a))
            .filter(|t| filter.created_from.is_none_or(|from| t.created_at >= from))
            .filter(|t| filter.created_to.is_none_or(|to| t.created_at < to))
            .cloned()
            .collect();

        hits.sort_by(|a, b| {
            let ordering = match sort.field {
                TermSortField::Id => a.id.0.cmp(&b.id.0),
                TermSortField::Title => a.title.as_str().cmp(b.title.as_str()),
                TermSortField::IsActive => a.is_active.cmp(&b.is_active),
                TermSortField::CreatedAt => a.created_at.cmp(&b.created_at),
                TermSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            }
            .then(a.id.0.cmp(&b.id.0));
            match sort.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = hits.len() as u64;
        let items = hits
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page() as usize)
            .collect();
        Ok((items, total))
    }
}

// src/infrastructure/repositories/sqlite_term.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::{PageRequest, Sort};
use crate::domain::taxonomy::{
    NewTerm, Term, TermFilter, TermId, TermKind, TermRepository, TermSortField, TermTitle,
    TermUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const TERM_COLUMNS: &str = "id, title, is_active, created_at, updated_at, deleted_at";

/// Categories and tags share one schema; `kind` picks the table.
#[derive(Clone)]
pub struct SqliteTermRepository {
    pool: SqlitePool,
    kind: TermKind,
}

impl SqliteTermRepository {
    pub fn new(pool: SqlitePool, kind: TermKind) -> Self {
        Self { pool, kind }
    }

    pub fn categories(pool: SqlitePool) -> Self {
        Self::new(pool, TermKind::Category)
    }

    pub fn tags(pool: SqlitePool) -> Self {
        Self::new(pool, TermKind::Tag)
    }

    fn table(&self) -> &'static str {
        self.kind.table()
    }

    fn not_found(&self) -> DomainError {
        DomainError::NotFound(format!("{} not found", self.kind))
    }

    fn push_filter(&self, builder: &mut QueryBuilder<'_, Sqlite>, filter: &TermFilter) {
        builder.push(" WHERE deleted_at IS NULL");
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            builder.push(" AND title LIKE ").push_bind(format!("%{search}%"));
        }
        if let Some(is_active) = filter.is_active {
            builder.push(" AND is_active = ").push_bind(is_active);
        }
        if let Some(from) = filter.created_from {
            builder.push(" AND created_at >= ").push_bind(from);
        }
        if let Some(to) = filter.created_to {
            builder.push(" AND created_at < ").push_bind(to);
        }
    }
}

#[derive(Debug, FromRow)]
struct TermRow {
    id: i64,
    title: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TermRow {
    fn into_term(self, kind: TermKind) -> DomainResult<Term> {
        Ok(Term {
            id: TermId::new(self.id)?,
            kind,
            title: TermTitle::new(self.title)?,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}

#[async_trait]
impl TermRepository for SqliteTermRepository {
    fn kind(&self) -> TermKind {
        self.kind
    }

    async fn insert(&self, term: NewTerm) -> DomainResult<Term> {
        let sql = format!(
            "INSERT INTO {} (title, is_active, created_at, updated_at) VALUES (?, ?, ?, ?) \
             RETURNING {TERM_COLUMNS}",
            self.table()
        );
        let row = sqlx::query_as::<_, TermRow>(&sql)
            .bind(term.title.as_str())
            .bind(term.is_active)
            .bind(term.created_at)
            .bind(term.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.into_term(self.kind)
    }

    async fn update(&self, update: TermUpdate) -> DomainResult<Term> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("UPDATE {} SET updated_at = ", self.table()));
        builder.push_bind(update.updated_at);
        if let Some(title) = update.title {
            builder.push(", title = ").push_bind(title.into_inner());
        }
        if let Some(is_active) = update.is_active {
            builder.push(", is_active = ").push_bind(is_active);
        }
        builder.push(" WHERE id = ").push_bind(i64::from(update.id));
        builder.push(format!(" AND deleted_at IS NULL RETURNING {TERM_COLUMNS}"));

        let row = builder
            .build_query_as::<TermRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        match row {
            Some(row) => row.into_term(self.kind),
            None => Err(self.not_found()),
        }
    }

    async fn soft_delete(&self, id: TermId, at: DateTime<Utc>) -> DomainResult<()> {
        let sql = format!(
            "UPDATE {} SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
            self.table()
        );
        let result = sqlx::query(&sql)
            .bind(at)
            .bind(at)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(self.not_found());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TermId) -> DomainResult<Option<Term>> {
        let sql = format!(
            "SELECT {TERM_COLUMNS} FROM {} WHERE id = ? AND deleted_at IS NULL",
            self.table()
        );
        sqlx::query_as::<_, TermRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .map(|row| row.into_term(self.kind))
            .transpose()
    }

    async fn find_by_title(&self, title: &TermTitle) -> DomainResult<Option<Term>> {
        let sql = format!(
            "SELECT {TERM_COLUMNS} FROM {} WHERE title = ? AND deleted_at IS NULL",
            self.table()
        );
        sqlx::query_as::<_, TermRow>(&sql)
            .bind(title.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .map(|row| row.into_term(self.kind))
            .transpose()
    }

    async fn list(
        &self,
        filter: &TermFilter,
        sort: Sort<TermSortField>,
        page: PageRequest,
    ) -> DomainResult<(Vec<Term>, u64)> {
        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {TERM_COLUMNS} FROM {}", self.table()));
        self.push_filter(&mut list_builder, filter);
        list_builder.push(format!(
            " ORDER BY {column} {order}, id {order} LIMIT ",
            column = sort.field.column(),
            order = sort.order.as_sql()
        ));
        list_builder.push_bind(i64::from(page.per_page()));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(page.offset());

        let rows = list_builder
            .build_query_as::<TermRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT COUNT(1) FROM {}", self.table()));
        self.push_filter(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let terms = rows
            .into_iter()
            .map(|row| row.into_term(self.kind))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((terms, u64::try_from(total).unwrap_or_default()))
    }
}

// src/infrastructure/repositories/sqlite_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleFilter, ArticleId, ArticleMeta, ArticleReadRepository,
    ArticleSlug, ArticleSortField, ArticleStatus, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::{PageRequest, Sort};
use crate::domain::taxonomy::TermId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::collections::HashMap;

const ARTICLE_COLUMNS: &str = "id, title, slug, excerpt, content, status, scheduled_at, \
     published_at, featured_image, category_id, meta_title, meta_description, meta_keywords, \
     is_active, created_by, updated_by, created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: Option<String>,
    content: String,
    status: String,
    scheduled_at: Option<DateTime<Utc>>,
    published_at: Option<DateTime<Utc>>,
    featured_image: Option<String>,
    category_id: i64,
    meta_title: Option<String>,
    meta_description: Option<String>,
    meta_keywords: Option<String>,
    is_active: bool,
    created_by: i64,
    updated_by: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl ArticleRow {
    fn into_article(self, tag_ids: Vec<TermId>) -> DomainResult<Article> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            title: ArticleTitle::new(self.title)?,
            slug: ArticleSlug::new(self.slug)?,
            excerpt: self.excerpt,
            content: ArticleContent::new(self.content)?,
            status: self.status.parse::<ArticleStatus>()?,
            scheduled_at: self.scheduled_at,
            published_at: self.published_at,
            featured_image: self.featured_image,
            category_id: TermId::new(self.category_id)?,
            tag_ids,
            meta: ArticleMeta {
                title: self.meta_title,
                description: self.meta_description,
                keywords: self.meta_keywords,
            },
            is_active: self.is_active,
            created_by: UserId::new(self.created_by)?,
            updated_by: UserId::new(self.updated_by)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}

/// Like [`map_sqlx`], but names the slug that clashed.
fn map_write_error(err: sqlx::Error, slug: &str) -> DomainError {
    match map_sqlx(err) {
        DomainError::SlugConflict(_) => DomainError::SlugConflict(slug.to_string()),
        other => other,
    }
}

/// Attach tag ids to the rows, keeping the order they were linked in.
async fn hydrate(pool: &SqlitePool, rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT article_id, tag_id FROM article_tags WHERE article_id IN (");
    let mut ids = builder.separated(", ");
    for row in &rows {
        ids.push_bind(row.id);
    }
    ids.push_unseparated(") ORDER BY article_id, rowid");

    let links: Vec<(i64, i64)> = builder
        .build_query_as()
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

    let mut tags: HashMap<i64, Vec<TermId>> = HashMap::new();
    for (article_id, tag_id) in links {
        tags.entry(article_id).or_default().push(TermId(tag_id));
    }

    rows.into_iter()
        .map(|row| {
            let tag_ids = tags.remove(&row.id).unwrap_or_default();
            row.into_article(tag_ids)
        })
        .collect()
}

async fn hydrate_one(pool: &SqlitePool, row: Option<ArticleRow>) -> DomainResult<Option<Article>> {
    match row {
        Some(row) => Ok(hydrate(pool, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

async fn load_article(
    pool: &SqlitePool,
    id: ArticleId,
    include_deleted: bool,
) -> DomainResult<Option<Article>> {
    let sql = if include_deleted {
        format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?")
    } else {
        format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ? AND deleted_at IS NULL")
    };
    let row = sqlx::query_as::<_, ArticleRow>(&sql)
        .bind(i64::from(id))
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx)?;
    hydrate_one(pool, row).await
}

async fn replace_tags(
    conn: &mut SqliteConnection,
    article_id: i64,
    tag_ids: &[TermId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM article_tags WHERE article_id = ?")
        .bind(article_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    for tag_id in tag_ids {
        sqlx::query("INSERT INTO article_tags (article_id, tag_id) VALUES (?, ?)")
            .bind(article_id)
            .bind(i64::from(*tag_id))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &ArticleFilter) {
    builder.push(" WHERE deleted_at IS NULL");

    if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let pattern = format!("%{search}%");
        builder.push(" AND (title LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR excerpt LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR content LIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
    if let Some(status) = filter.status {
        builder.push(" AND status = ").push_bind(status.as_str());
    }
    if let Some(category_id) = filter.category_id {
        builder.push(" AND category_id = ").push_bind(i64::from(category_id));
    }
    if let Some(author_id) = filter.author_id {
        builder.push(" AND created_by = ").push_bind(i64::from(author_id));
    }
    if let Some(from) = filter.created_from {
        builder.push(" AND created_at >= ").push_bind(from);
    }
    if let Some(to) = filter.created_to {
        builder.push(" AND created_at < ").push_bind(to);
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (title, slug, excerpt, content, status, scheduled_at, published_at, \
             featured_image, category_id, meta_title, meta_description, meta_keywords, is_active, \
             created_by, updated_by, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(article.title.as_str())
        .bind(article.slug.as_str())
        .bind(article.excerpt.as_deref())
        .bind(article.content.as_str())
        .bind(article.status.as_str())
        .bind(article.scheduled_at)
        .bind(article.published_at)
        .bind(article.featured_image.as_deref())
        .bind(i64::from(article.category_id))
        .bind(article.meta.title.as_deref())
        .bind(article.meta.description.as_deref())
        .bind(article.meta.keywords.as_deref())
        .bind(article.is_active)
        .bind(i64::from(article.created_by))
        .bind(i64::from(article.created_by))
        .bind(article.created_at)
        .bind(article.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| map_write_error(err, article.slug.as_str()))?;

        replace_tags(&mut tx, id, &article.tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        load_article(&self.pool, ArticleId(id), false)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article could not be read back".into()))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            article,
            original_updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query(
            "UPDATE articles SET title = ?, slug = ?, excerpt = ?, content = ?, status = ?, \
             scheduled_at = ?, published_at = ?, featured_image = ?, category_id = ?, \
             meta_title = ?, meta_description = ?, meta_keywords = ?, is_active = ?, \
             updated_by = ?, updated_at = ? \
             WHERE id = ? AND updated_at = ? AND deleted_at IS NULL",
        )
        .bind(article.title.as_str())
        .bind(article.slug.as_str())
        .bind(article.excerpt.as_deref())
        .bind(article.content.as_str())
        .bind(article.status.as_str())
        .bind(article.scheduled_at)
        .bind(article.published_at)
        .bind(article.featured_image.as_deref())
        .bind(i64::from(article.category_id))
        .bind(article.meta.title.as_deref())
        .bind(article.meta.description.as_deref())
        .bind(article.meta.keywords.as_deref())
        .bind(article.is_active)
        .bind(i64::from(article.updated_by))
        .bind(article.updated_at)
        .bind(i64::from(article.id))
        .bind(original_updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|err| map_write_error(err, article.slug.as_str()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }

        replace_tags(&mut tx, article.id.into(), &article.tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        load_article(&self.pool, article.id, false)
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn soft_delete(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(at)
        .bind(at)
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn soft_delete_many(&self, ids: &[ArticleId], at: DateTime<Utc>) -> DomainResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE articles SET deleted_at = ");
        builder.push_bind(at);
        builder.push(", updated_at = ");
        builder.push_bind(at);
        builder.push(" WHERE deleted_at IS NULL AND id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(i64::from(*id));
        }
        separated.push_unseparated(")");

        let result = builder.build().execute(&mut *tx).await.map_err(map_sqlx)?;
        if result.rows_affected() != ids.len() as u64 {
            // dropping the transaction rolls the partial delete back
            return Err(DomainError::NotFound(
                "one or more articles were not found".into(),
            ));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn restore(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<Article> {
        sqlx::query("UPDATE articles SET deleted_at = NULL, updated_at = ? WHERE id = ? AND deleted_at IS NOT NULL")
            .bind(at)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        load_article(&self.pool, id, true)
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        load_article(&self.pool, id, false).await
    }

    async fn find_including_deleted(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        load_article(&self.pool, id, true).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ? AND deleted_at IS NULL");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        hydrate_one(&self.pool, row).await
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<ArticleId>) -> DomainResult<bool> {
        let exclude = exclude.map(i64::from);
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM articles WHERE slug = ? AND (? IS NULL OR id <> ?))",
        )
        .bind(slug)
        .bind(exclude)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(found != 0)
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        sort: Sort<ArticleSortField>,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        push_filter(&mut list_builder, filter);
        list_builder.push(format!(
            " ORDER BY {column} {order}, id {order} LIMIT ",
            column = sort.field.column(),
            order = sort.order.as_sql()
        ));
        list_builder.push_bind(i64::from(page.per_page()));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(page.offset());

        let rows = list_builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM articles");
        push_filter(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = hydrate(&self.pool, rows).await?;
        Ok((articles, u64::try_from(total).unwrap_or_default()))
    }
}

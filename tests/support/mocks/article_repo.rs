// tests/support/mocks/article_repo.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lipi_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleSortField,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use lipi_core::domain::errors::{DomainError, DomainResult};
use lipi_core::domain::listing::{PageRequest, Sort, SortOrder};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    rows: BTreeMap<i64, Article>,
    next_id: i64,
    /// Writes that will lose a slug race: a competitor takes the slug first.
    pending_races: u32,
    /// Attempted slugs, in order, including rejected ones.
    attempted_slugs: Vec<String>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Unique index over every row, tombstones included.
    fn slug_taken(&self, slug: &str, except: Option<ArticleId>) -> bool {
        self.rows
            .values()
            .any(|row| row.slug.as_str() == slug && Some(row.id) != except)
    }

    /// Let a competing writer claim `template`'s slug.
    fn lose_race(&mut self, template: &Article) -> bool {
        if self.pending_races == 0 {
            return false;
        }
        self.pending_races -= 1;
        let id = self.next_id();
        let mut competitor = template.clone();
        competitor.id = ArticleId(id);
        competitor.tag_ids.clear();
        self.rows.insert(id, competitor);
        true
    }
}

/// Article store implementing both repository ports, with the same slug
/// uniqueness and optimistic-write rules as the SQLite store.
#[derive(Default)]
pub struct InMemoryArticleStore {
    state: Mutex<State>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `count` writes find their slug taken by another writer at
    /// the moment of the write.
    pub fn lose_next_slug_races(&self, count: u32) {
        self.state.lock().unwrap().pending_races = count;
    }

    pub fn attempted_slugs(&self) -> Vec<String> {
        self.state.lock().unwrap().attempted_slugs.clone()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.state.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }
}

fn materialise(id: ArticleId, new: NewArticle) -> Article {
    Article {
        id,
        title: new.title,
        slug: new.slug,
        excerpt: new.excerpt,
        content: new.content,
        status: new.status,
        scheduled_at: new.scheduled_at,
        published_at: new.published_at,
        featured_image: new.featured_image,
        category_id: new.category_id,
        tag_ids: new.tag_ids,
        meta: new.meta,
        is_active: new.is_active,
        created_by: new.created_by,
        updated_by: new.created_by,
        created_at: new.created_at,
        updated_at: new.created_at,
        deleted_at: None,
    }
}

fn matches(article: &Article, filter: &ArticleFilter) -> bool {
    if article.is_deleted() {
        return false;
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        let hit = article.title.as_str().to_lowercase().contains(&needle)
            || article
                .excerpt
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains(&needle))
            || article.content.as_str().to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }
    filter.status.is_none_or(|s| article.status == s)
        && filter.category_id.is_none_or(|c| article.category_id == c)
        && filter.author_id.is_none_or(|a| article.created_by == a)
        && filter.created_from.is_none_or(|from| article.created_at >= from)
        && filter.created_to.is_none_or(|to| article.created_at < to)
}

fn compare(a: &Article, b: &Article, field: ArticleSortField) -> Ordering {
    let primary = match field {
        ArticleSortField::Id => a.id.0.cmp(&b.id.0),
        ArticleSortField::Title => a.title.as_str().cmp(b.title.as_str()),
        ArticleSortField::Slug => a.slug.as_str().cmp(b.slug.as_str()),
        ArticleSortField::Status => a.status.as_str().cmp(b.status.as_str()),
        ArticleSortField::ScheduledAt => a.scheduled_at.cmp(&b.scheduled_at),
        ArticleSortField::PublishedAt => a.published_at.cmp(&b.published_at),
        ArticleSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        ArticleSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    primary.then(a.id.0.cmp(&b.id.0))
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        state.attempted_slugs.push(article.slug.as_str().to_string());

        let candidate = materialise(ArticleId(i64::MAX), article);
        if state.lose_race(&candidate) || state.slug_taken(candidate.slug.as_str(), None) {
            return Err(DomainError::SlugConflict(candidate.slug.as_str().to_string()));
        }

        let id = state.next_id();
        let article = Article {
            id: ArticleId(id),
            ..candidate
        };
        state.rows.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            article,
            original_updated_at,
        } = update;
        let mut state = self.state.lock().unwrap();
        state.attempted_slugs.push(article.slug.as_str().to_string());

        match state.rows.get(&article.id.0) {
            Some(stored) if stored.is_deleted() => {
                return Err(DomainError::NotFound("article not found".into()));
            }
            Some(stored) if stored.updated_at != original_updated_at => {
                return Err(DomainError::Conflict(
                    "article update conflict, please retry".into(),
                ));
            }
            Some(_) => {}
            None => return Err(DomainError::NotFound("article not found".into())),
        }

        let slug_changed = state
            .rows
            .get(&article.id.0)
            .is_some_and(|stored| stored.slug != article.slug);
        if slug_changed
            && (state.lose_race(&article) || state.slug_taken(article.slug.as_str(), Some(article.id)))
        {
            return Err(DomainError::SlugConflict(article.slug.as_str().to_string()));
        }

        state.rows.insert(article.id.0, article.clone());
        Ok(article)
    }

    async fn soft_delete(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        match state.rows.get_mut(&id.0) {
            Some(row) if !row.is_deleted() => {
                row.deleted_at = Some(at);
                row.updated_at = at;
                Ok(())
            }
            _ => Err(DomainError::NotFound("article not found".into())),
        }
    }

    async fn soft_delete_many(&self, ids: &[ArticleId], at: DateTime<Utc>) -> DomainResult<u64> {
        let mut state = self.state.lock().unwrap();
        let all_live = ids.iter().all(|id| {
            state
                .rows
                .get(&id.0)
                .is_some_and(|row| !row.is_deleted())
        });
        if !all_live {
            return Err(DomainError::NotFound(
                "one or more articles were not found".into(),
            ));
        }
        for id in ids {
            if let Some(row) = state.rows.get_mut(&id.0) {
                row.deleted_at = Some(at);
                row.updated_at = at;
            }
        }
        Ok(ids.len() as u64)
    }

    async fn restore(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let row = state
            .rows
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if row.deleted_at.take().is_some() {
            row.updated_at = at;
        }
        Ok(row.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.get(&id.0).filter(|a| !a.is_deleted()).cloned())
    }

    async fn find_including_deleted(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state.lock().unwrap().rows.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .values()
            .find(|a| &a.slug == slug && !a.is_deleted())
            .cloned())
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<ArticleId>) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().slug_taken(slug, exclude))
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        sort: Sort<ArticleSortField>,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let state = self.state.lock().unwrap();
        let mut hits: Vec<Article> = state
            .rows
            .values()
            .filter(|a| matches(a, filter))
            .cloned()
            .collect();
        hits.sort_by(|a, b| {
            let ordering = compare(a, b, sort.field);
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

// tests/support/builders.rs
use std::sync::Arc;

use lipi_core::application::dto::Actor;
use lipi_core::application::ports::SlugGeneratorPort;
use lipi_core::application::services::{ApplicationServices, Repositories};
use lipi_core::domain::taxonomy::TermKind;
use lipi_core::domain::user::{Role, UserId};
use lipi_core::infrastructure::util::MultilingualSlugGenerator;

use super::mocks::{
    DummyPasswordHasher, FixedClock, InMemoryArticleStore, InMemoryTermRepo, InMemoryUserRepo,
    fixed_now,
};

pub const SUPER_ADMIN_ID: i64 = 1;
pub const EDITOR_ID: i64 = 2;
pub const REPORTER_ID: i64 = 3;

pub fn super_admin() -> Actor {
    Actor::new(UserId(SUPER_ADMIN_ID), Role::SuperAdmin)
}

pub fn editor() -> Actor {
    Actor::new(UserId(EDITOR_ID), Role::Editor)
}

pub fn reporter() -> Actor {
    Actor::new(UserId(REPORTER_ID), Role::Reporter)
}

/// Services wired to in-memory stores, with one admin per role, one active
/// category and two tags already present.
pub struct TestApp {
    pub services: ApplicationServices,
    pub articles: Arc<InMemoryArticleStore>,
    pub categories: Arc<InMemoryTermRepo>,
    pub tags: Arc<InMemoryTermRepo>,
    pub users: Arc<InMemoryUserRepo>,
    pub clock: Arc<FixedClock>,
    pub category_id: i64,
    pub tag_ids: Vec<i64>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_slugger(Arc::new(MultilingualSlugGenerator::default()))
    }

    pub fn with_slugger(slugger: Arc<SlugGeneratorPort>) -> Self {
        let articles = Arc::new(InMemoryArticleStore::new());
        let categories = Arc::new(InMemoryTermRepo::new(TermKind::Category));
        let tags = Arc::new(InMemoryTermRepo::new(TermKind::Tag));
        let users = Arc::new(InMemoryUserRepo::new());
        let clock = Arc::new(FixedClock::default());

        let now = fixed_now();
        users.seed(SUPER_ADMIN_ID, "Root", "root@admin.com", Role::SuperAdmin, now);
        users.seed(EDITOR_ID, "Editor", "editor@admin.com", Role::Editor, now);
        users.seed(REPORTER_ID, "Reporter", "reporter@admin.com", Role::Reporter, now);
        let category_id = categories.seed("News", true, now);
        let tag_ids = vec![tags.seed("World", true, now), tags.seed("Sport", true, now)];

        let services = ApplicationServices::new(
            Repositories {
                article_write: articles.clone(),
                article_read: articles.clone(),
                categories: categories.clone(),
                tags: tags.clone(),
                users: users.clone(),
            },
            Arc::new(DummyPasswordHasher),
            clock.clone(),
            slugger,
        );

        Self {
            services,
            articles,
            categories,
            tags,
            users,
            clock,
            category_id,
            tag_ids,
        }
    }
}

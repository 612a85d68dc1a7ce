// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, terms::TermCommandService, users::UserCommandService,
        },
        ports::{ClockPort, PasswordHasherPort, SlugGeneratorPort},
        queries::{
            articles::ArticleQueryService, terms::TermQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        taxonomy::TermRepository,
        user::UserRepository,
    },
};

/// Every repository and port the services need, grouped so wiring sites do
/// not depend on argument order.
pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub categories: Arc<dyn TermRepository>,
    pub tags: Arc<dyn TermRepository>,
    pub users: Arc<dyn UserRepository>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub term_commands: Arc<TermCommandService>,
    pub term_queries: Arc<TermQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<PasswordHasherPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.article_read),
            slugger,
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
            slug_service,
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&repos.article_read)));

        let term_commands = Arc::new(TermCommandService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
            Arc::clone(&clock),
        ));
        let term_queries = Arc::new(TermQueryService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.tags),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            password_hasher,
            clock,
        ));
        let user_queries = Arc::new(UserQueryService::new(repos.users));

        Self {
            article_commands,
            article_queries,
            term_commands,
            term_queries,
            user_commands,
            user_queries,
        }
    }
}

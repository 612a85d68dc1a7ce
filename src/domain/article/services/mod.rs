// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, MAX_SLUG_CHARS};
use crate::domain::errors::DomainResult;
use crate::domain::slug::{SlugGenerator, resolve_unique};

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Slugify `source` and probe the store until a free candidate is found.
    /// `ignore_id` lets an article keep its own slug. Long slugs are cut so
    /// the counter suffix always fits.
    pub async fn generate_unique_slug(
        &self,
        source: &str,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(source);
        let separator = self.generator.separator();

        let candidate = resolve_unique(
            &base,
            separator,
            MAX_SLUG_CHARS,
            ignore_id,
            |candidate, exclude| {
                let repo = Arc::clone(&self.read_repo);
                async move { repo.slug_exists(&candidate, exclude).await }
            },
        )
        .await?;

        ArticleSlug::new(candidate)
    }
}

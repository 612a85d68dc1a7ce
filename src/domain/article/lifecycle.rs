// src/domain/article/lifecycle.rs
//! The `draft -> scheduled -> published` state machine.
//!
//! Any state is reachable from any other through an explicit operation. The
//! only gate is that entering `scheduled` needs a `scheduled_at` strictly in
//! the future. `published_at` is stamped the first time an article becomes
//! published and, once set, freezes the slug.

use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::status::ArticleStatus;
use crate::domain::article::value_objects::{
    ArticleContent, ArticleMeta, ArticleSlug, ArticleTitle,
};
use crate::domain::errors::{DomainResult, FieldErrors};
use crate::domain::taxonomy::TermId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

pub const SCHEDULED_AT_FIELD: &str = "scheduled_at";

/// Validate the scheduling part of an input against `now`.
///
/// A supplied `scheduled_at` must lie strictly after `now`, and a requested
/// `scheduled` status must come with one. Problems are recorded under
/// `scheduled_at`.
pub fn check_schedule(
    status: Option<ArticleStatus>,
    scheduled_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    errors: &mut FieldErrors,
) {
    match scheduled_at {
        Some(at) if at <= now => {
            errors.add(SCHEDULED_AT_FIELD, "the scheduled time must be in the future");
        }
        None if status == Some(ArticleStatus::Scheduled) => {
            errors.add(
                SCHEDULED_AT_FIELD,
                "a scheduled time is required when the status is scheduled",
            );
        }
        _ => {}
    }
}

/// Validated create input, waiting for its slug.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: ArticleTitle,
    pub excerpt: Option<String>,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
    pub category_id: TermId,
    pub tag_ids: Vec<TermId>,
    pub meta: ArticleMeta,
    pub is_active: bool,
}

impl ArticleDraft {
    pub fn into_new_article(self, slug: ArticleSlug, actor: UserId, now: DateTime<Utc>) -> NewArticle {
        let published_at = (self.status == ArticleStatus::Published).then_some(now);
        NewArticle {
            title: self.title,
            slug,
            excerpt: self.excerpt,
            content: self.content,
            status: self.status,
            scheduled_at: self.scheduled_at,
            published_at,
            featured_image: self.featured_image,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
            meta: self.meta,
            is_active: self.is_active,
            created_by: actor,
            created_at: now,
        }
    }
}

/// Validated partial update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct ArticleEdit {
    pub title: Option<ArticleTitle>,
    pub excerpt: Option<String>,
    pub content: Option<ArticleContent>,
    pub status: Option<ArticleStatus>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub featured_image: Option<String>,
    pub category_id: Option<TermId>,
    pub tag_ids: Option<Vec<TermId>>,
    pub meta: Option<ArticleMeta>,
    pub is_active: Option<bool>,
}

impl Article {
    /// Slugs never change once the article has been published.
    pub fn is_slug_frozen(&self) -> bool {
        self.status == ArticleStatus::Published || self.published_at.is_some()
    }

    pub fn should_regenerate_slug(&self, new_title: &ArticleTitle) -> bool {
        !self.is_slug_frozen() && &self.title != new_title
    }

    /// Apply a generic edit. `slug` is the regenerated slug, if any; it is
    /// ignored while the slug is frozen.
    pub fn apply_edit(
        &mut self,
        edit: ArticleEdit,
        slug: Option<ArticleSlug>,
        actor: UserId,
        now: DateTime<Utc>,
    ) {
        if let Some(slug) = slug.filter(|_| !self.is_slug_frozen()) {
            self.slug = slug;
        }
        if let Some(title) = edit.title {
            self.title = title;
        }
        if let Some(excerpt) = edit.excerpt {
            self.excerpt = Some(excerpt);
        }
        if let Some(content) = edit.content {
            self.content = content;
        }
        if let Some(scheduled_at) = edit.scheduled_at {
            self.scheduled_at = Some(scheduled_at);
        }
        if let Some(image) = edit.featured_image {
            self.featured_image = Some(image);
        }
        if let Some(category_id) = edit.category_id {
            self.category_id = category_id;
        }
        if let Some(tag_ids) = edit.tag_ids {
            self.tag_ids = tag_ids;
        }
        if let Some(meta) = edit.meta {
            self.meta = meta;
        }
        if let Some(is_active) = edit.is_active {
            self.is_active = is_active;
        }
        if let Some(status) = edit.status {
            if status == ArticleStatus::Published && self.published_at.is_none() {
                self.published_at = Some(now);
            }
            self.status = status;
        }
        self.touch(actor, now);
    }

    /// Explicit publish. Unlike an edit this always restamps `published_at`.
    pub fn publish(&mut self, actor: UserId, now: DateTime<Utc>) {
        self.status = ArticleStatus::Published;
        self.published_at = Some(now);
        self.touch(actor, now);
    }

    pub fn schedule(
        &mut self,
        at: DateTime<Utc>,
        actor: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut errors = FieldErrors::new();
        check_schedule(Some(ArticleStatus::Scheduled), Some(at), now, &mut errors);
        errors.into_result()?;

        self.status = ArticleStatus::Scheduled;
        self.scheduled_at = Some(at);
        self.touch(actor, now);
        Ok(())
    }

    fn touch(&mut self, actor: UserId, now: DateTime<Utc>) {
        self.updated_by = actor;
        self.updated_at = now;
    }
}

// src/application/commands/terms/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::taxonomy::{Term, TermId, TermKind, TermRepository},
};

/// Writes for both categories and tags; every call names the kind it targets.
pub struct TermCommandService {
    pub(super) categories: Arc<dyn TermRepository>,
    pub(super) tags: Arc<dyn TermRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TermCommandService {
    pub fn new(
        categories: Arc<dyn TermRepository>,
        tags: Arc<dyn TermRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            categories,
            tags,
            clock,
        }
    }

    pub(super) fn repo(&self, kind: TermKind) -> &dyn TermRepository {
        match kind {
            TermKind::Category => self.categories.as_ref(),
            TermKind::Tag => self.tags.as_ref(),
        }
    }

    pub(super) async fn load_term(&self, kind: TermKind, id: i64) -> ApplicationResult<Term> {
        let id = TermId::new(id)?;
        self.repo(kind)
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{kind} not found")))
    }
}

// src/application/commands/terms/write.rs
use super::TermCommandService;
use crate::{
    application::{
        access::{Permission, ensure_permission},
        dto::{Actor, TermDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::FieldErrors,
        taxonomy::{NewTerm, TermId, TermKind, TermTitle, TermUpdate},
    },
};
use serde::Deserialize;
use tracing::info;

const TITLE_TAKEN: &str = "the title has already been taken";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTermInput {
    pub title: String,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTermInput {
    pub id: i64,
    pub title: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteTermInput {
    pub id: i64,
}

impl TermCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id, kind = %kind))]
    pub async fn create_term(
        &self,
        actor: &Actor,
        kind: TermKind,
        input: CreateTermInput,
    ) -> ApplicationResult<TermDto> {
        ensure_permission(actor, Permission::ManageTaxonomy)?;

        let title = parse_title(input.title)?;
        self.ensure_title_available(kind, &title, None).await?;

        let term = self
            .repo(kind)
            .insert(NewTerm {
                title,
                is_active: input.is_active.unwrap_or(true),
                created_at: self.clock.now(),
            })
            .await?;
        info!(term_id = term.id.0, "term created");
        Ok(term.into())
    }

    #[tracing::instrument(skip_all, fields(actor = %actor.id, kind = %kind, term = input.id))]
    pub async fn update_term(
        &self,
        actor: &Actor,
        kind: TermKind,
        input: UpdateTermInput,
    ) -> ApplicationResult<TermDto> {
        ensure_permission(actor, Permission::ManageTaxonomy)?;

        let term = self.load_term(kind, input.id).await?;
        let mut update = TermUpdate::new(term.id, self.clock.now());

        if let Some(raw) = input.title {
            let title = parse_title(raw)?;
            self.ensure_title_available(kind, &title, Some(term.id))
                .await?;
            update = update.with_title(title);
        }
        if let Some(is_active) = input.is_active {
            update = update.with_is_active(is_active);
        }

        let term = self.repo(kind).update(update).await?;
        Ok(term.into())
    }

    #[tracing::instrument(skip_all, fields(actor = %actor.id, kind = %kind, term = input.id))]
    pub async fn delete_term(
        &self,
        actor: &Actor,
        kind: TermKind,
        input: DeleteTermInput,
    ) -> ApplicationResult<()> {
        ensure_permission(actor, Permission::ManageTaxonomy)?;

        let term = self.load_term(kind, input.id).await?;
        self.repo(kind)
            .soft_delete(term.id, self.clock.now())
            .await?;
        info!(title = term.title.as_str(), "term deleted");
        Ok(())
    }

    async fn ensure_title_available(
        &self,
        kind: TermKind,
        title: &TermTitle,
        owner: Option<TermId>,
    ) -> ApplicationResult<()> {
        match self.repo(kind).find_by_title(title).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(FieldErrors::single("title", TITLE_TAKEN).into())
            }
            _ => Ok(()),
        }
    }
}

fn parse_title(raw: String) -> ApplicationResult<TermTitle> {
    let mut errors = FieldErrors::new();
    errors
        .check("title", TermTitle::new(raw))
        .ok_or_else(|| ApplicationError::from(errors))
}

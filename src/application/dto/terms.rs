// src/application/dto/terms.rs
use crate::domain::taxonomy::{Term, TermKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDto {
    pub id: i64,
    pub kind: TermKind,
    pub title: String,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Term> for TermDto {
    fn from(term: Term) -> Self {
        Self {
            id: term.id.into(),
            kind: term.kind,
            title: term.title.into_inner(),
            is_active: term.is_active,
            created_at: term.created_at,
            updated_at: term.updated_at,
        }
    }
}

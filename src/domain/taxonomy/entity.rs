// src/domain/taxonomy/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const MAX_TITLE_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    Category,
    Tag,
}

impl TermKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermKind::Category => "category",
            TermKind::Tag => "tag",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            TermKind::Category => "categories",
            TermKind::Tag => "tags",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(pub i64);

impl TermId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("term id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TermId> for i64 {
    fn from(value: TermId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermTitle(String);

impl TermTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > MAX_TITLE_CHARS {
            return Err(DomainError::Validation(format!(
                "title may not be greater than {MAX_TITLE_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Term {
    pub id: TermId,
    pub kind: TermKind,
    pub title: TermTitle,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewTerm {
    pub title: TermTitle,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TermUpdate {
    pub id: TermId,
    pub title: Option<TermTitle>,
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl TermUpdate {
    pub fn new(id: TermId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            is_active: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: TermTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TermFilter {
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TermSortField {
    Id,
    Title,
    IsActive,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl TermSortField {
    pub fn column(&self) -> &'static str {
        match self {
            TermSortField::Id => "id",
            TermSortField::Title => "title",
            TermSortField::IsActive => "is_active",
            TermSortField::CreatedAt => "created_at",
            TermSortField::UpdatedAt => "updated_at",
        }
    }
}

impl FromStr for TermSortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(TermSortField::Id),
            "title" => Ok(TermSortField::Title),
            "is_active" => Ok(TermSortField::IsActive),
            "created_at" => Ok(TermSortField::CreatedAt),
            "updated_at" => Ok(TermSortField::UpdatedAt),
            other => Err(DomainError::Validation(format!("cannot sort by '{other}'"))),
        }
    }
}

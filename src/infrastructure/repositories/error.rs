// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// SQLite reports unique violations as "UNIQUE constraint failed: table.column"
const COL_ARTICLE_SLUG: &str = "articles.slug";
const COL_USER_EMAIL: &str = "users.email";
const COL_CATEGORY_TITLE: &str = "categories.title";
const COL_TAG_TITLE: &str = "tags.title";
const CNT_ARTICLE_SCHEDULED_CHECK: &str = "articles_scheduled_requires_timestamp_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    if message.contains(COL_ARTICLE_SLUG) {
                        DomainError::SlugConflict(message.to_string())
                    } else if message.contains(COL_USER_EMAIL) {
                        DomainError::Conflict("email already exists".into())
                    } else if message.contains(COL_CATEGORY_TITLE) || message.contains(COL_TAG_TITLE)
                    {
                        DomainError::Conflict("title already exists".into())
                    } else {
                        DomainError::Conflict("unique constraint violated".into())
                    }
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation if message.contains(CNT_ARTICLE_SCHEDULED_CHECK) => {
                    DomainError::Validation("scheduled articles require scheduled_at".into())
                }
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    DomainError::Validation(message.to_string())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

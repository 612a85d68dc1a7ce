// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{security::PasswordHasher, time::Clock},
};
use crate::domain::{
    errors::FieldErrors,
    user::{Email, PasswordHash, User, UserId, UserRepository},
};

pub(super) const EMAIL_TAKEN: &str = "the email has already been taken";

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            clock,
        }
    }

    pub(super) async fn load_user(&self, id: i64) -> ApplicationResult<User> {
        let id = UserId::new(id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("admin not found"))
    }

    /// Records an `email` error when another account already uses `email`.
    pub(super) async fn check_email_available(
        &self,
        email: &Email,
        owner: Option<UserId>,
        errors: &mut FieldErrors,
    ) -> ApplicationResult<()> {
        if let Some(existing) = self.user_repo.find_by_email(email).await? {
            if Some(existing.id) != owner {
                errors.add("email", EMAIL_TAKEN);
            }
        }
        Ok(())
    }

    pub(super) async fn hash_password(&self, password: &str) -> ApplicationResult<PasswordHash> {
        let hashed = self.password_hasher.hash(password).await?;
        Ok(PasswordHash::new(hashed)?)
    }
}

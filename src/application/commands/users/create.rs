// src/application/commands/users/create.rs
use super::UserCommandService;
use crate::{
    application::{
        access::{Permission, ensure_permission},
        dto::{Actor, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::FieldErrors,
        user::{Email, NewUser, Role, UserName, validate_password},
    },
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdminInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: Role,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
    pub avatar: Option<String>,
}

impl UserCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id, role = %input.role))]
    pub async fn create_admin(
        &self,
        actor: &Actor,
        input: CreateAdminInput,
    ) -> ApplicationResult<UserDto> {
        ensure_permission(actor, Permission::ManageAdmins)?;

        let mut errors = FieldErrors::new();
        let name = errors.check("name", UserName::new(input.name));
        let email = errors.check("email", Email::new(input.email));
        errors.check(
            "password",
            validate_password(&input.password, &input.password_confirmation),
        );
        if let Some(email) = &email {
            self.check_email_available(email, None, &mut errors).await?;
        }

        let (Some(name), Some(email)) = (name, email) else {
            return Err(ApplicationError::InvalidFields(errors));
        };
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let password_hash = self.hash_password(&input.password).await?;
        let user = self
            .user_repo
            .insert(NewUser {
                name,
                email,
                password_hash,
                role: input.role,
                is_active: input.is_active.unwrap_or(true),
                avatar: input.avatar,
                created_at: self.clock.now(),
            })
            .await?;

        info!(admin_id = %user.id, "admin created");
        Ok(user.into())
    }
}

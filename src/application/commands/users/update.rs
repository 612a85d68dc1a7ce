// src/application/commands/users/update.rs
use super::UserCommandService;
use crate::{
    application::{
        access::{Permission, ensure_permission},
        dto::{Actor, UserDto},
        error::ApplicationResult,
    },
    domain::{
        errors::FieldErrors,
        user::{Email, Role, UserName, UserUpdate, validate_password},
    },
};
use serde::Deserialize;

/// Partial update. The password is only changed when one is supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAdminInput {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub avatar: Option<String>,
}

impl UserCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id, admin = input.id))]
    pub async fn update_admin(
        &self,
        actor: &Actor,
        input: UpdateAdminInput,
    ) -> ApplicationResult<UserDto> {
        ensure_permission(actor, Permission::ManageAdmins)?;

        let user = self.load_user(input.id).await?;
        let mut errors = FieldErrors::new();

        let name = input
            .name
            .and_then(|name| errors.check("name", UserName::new(name)));
        let email = input
            .email
            .and_then(|email| errors.check("email", Email::new(email)));
        if let Some(email) = &email {
            self.check_email_available(email, Some(user.id), &mut errors)
                .await?;
        }
        let password = input.password.filter(|p| !p.is_empty());
        if let Some(password) = &password {
            let confirmation = input.password_confirmation.as_deref().unwrap_or_default();
            errors.check("password", validate_password(password, confirmation));
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let mut update = UserUpdate::new(user.id, self.clock.now());
        if let Some(name) = name {
            update = update.with_name(name);
        }
        if let Some(email) = email {
            update = update.with_email(email);
        }
        if let Some(role) = input.role {
            update = update.with_role(role);
        }
        if let Some(is_active) = input.is_active {
            update = update.with_is_active(is_active);
        }
        if let Some(avatar) = input.avatar {
            update = update.with_avatar(avatar);
        }
        if let Some(password) = password {
            update = update.with_password_hash(self.hash_password(&password).await?);
        }

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }
}

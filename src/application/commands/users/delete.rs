// src/application/commands/users/delete.rs
use super::UserCommandService;
use crate::application::{
    access::{Permission, ensure_permission},
    dto::Actor,
    error::{ApplicationError, ApplicationResult},
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAdminInput {
    pub id: i64,
}

impl UserCommandService {
    #[tracing::instrument(skip_all, fields(actor = %actor.id, admin = input.id))]
    pub async fn delete_admin(&self, actor: &Actor, input: DeleteAdminInput) -> ApplicationResult<()> {
        ensure_permission(actor, Permission::ManageAdmins)?;

        let user = self.load_user(input.id).await?;
        if user.id == actor.id {
            return Err(ApplicationError::forbidden("you cannot delete your own account"));
        }

        self.user_repo.delete(user.id).await?;
        info!(email = %user.email, "admin deleted");
        Ok(())
    }
}

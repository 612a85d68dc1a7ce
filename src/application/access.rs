// src/application/access.rs
//! Role-level gate applied at the top of every command and query.

use crate::application::{
    dto::Actor,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ManageArticles,
    ManageTaxonomy,
    ManageAdmins,
}

impl Permission {
    pub fn required_level(&self) -> u8 {
        match self {
            Permission::ManageArticles => 1,
            Permission::ManageTaxonomy => 2,
            Permission::ManageAdmins => 3,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Permission::ManageArticles => "manage articles",
            Permission::ManageTaxonomy => "manage categories and tags",
            Permission::ManageAdmins => "manage admins",
        }
    }
}

pub fn is_allowed(role: Role, permission: Permission) -> bool {
    role.has_permission_level(permission.required_level())
}

pub fn ensure_permission(actor: &Actor, permission: Permission) -> ApplicationResult<()> {
    if is_allowed(actor.role, permission) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "role {} may not {}",
            actor.role,
            permission.label()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_gate_each_area() {
        assert!(is_allowed(Role::Reporter, Permission::ManageArticles));
        assert!(!is_allowed(Role::Reporter, Permission::ManageTaxonomy));
        assert!(is_allowed(Role::Editor, Permission::ManageTaxonomy));
        assert!(!is_allowed(Role::Editor, Permission::ManageAdmins));
        assert!(is_allowed(Role::SuperAdmin, Permission::ManageAdmins));
    }

    #[test]
    fn denial_is_forbidden() {
        let actor = Actor::new(crate::domain::user::UserId(9), Role::Reporter);
        assert!(matches!(
            ensure_permission(&actor, Permission::ManageAdmins),
            Err(ApplicationError::Forbidden(_))
        ));
    }
}

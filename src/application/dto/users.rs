// src/application/dto/users.rs
use crate::domain::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

/// Admin read model. The password hash never leaves the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub role_display_name: String,
    pub is_active: bool,
    pub avatar: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            name: user.name.into_inner(),
            email: user.email.into_inner(),
            role: user.role,
            role_display_name: user.role.display_name().to_string(),
            is_active: user.is_active,
            avatar: user.avatar,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleDto {
    pub value: Role,
    pub display_name: String,
    pub level: u8,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        Self {
            value: role,
            display_name: role.display_name().to_string(),
            level: role.level(),
        }
    }
}

// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const MAX_NAME_CHARS: usize = 255;
pub const MAX_EMAIL_CHARS: usize = 255;
pub const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Admin roles, ordered by permission level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Editor,
    Reporter,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::Editor, Role::Reporter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Editor => "editor",
            Role::Reporter => "reporter",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Editor => "Editor",
            Role::Reporter => "Reporter",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Role::SuperAdmin => 3,
            Role::Editor => 2,
            Role::Reporter => 1,
        }
    }

    pub fn has_permission_level(&self, required: u8) -> bool {
        self.level() >= required
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Reporter
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "editor" => Ok(Role::Editor),
            "reporter" => Ok(Role::Reporter),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if value.chars().count() > MAX_NAME_CHARS {
            return Err(DomainError::Validation(format!(
                "name may not be greater than {MAX_NAME_CHARS} characters"
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

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        if value.chars().count() > MAX_EMAIL_CHARS {
            return Err(DomainError::Validation(format!(
                "email may not be greater than {MAX_EMAIL_CHARS} characters"
            )));
        }
        let valid = value
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !valid {
            return Err(DomainError::Validation(
                "email must be a valid email address".into(),
            ));
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

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plain-text password policy checked before hashing.
pub fn validate_password(password: &str, confirmation: &str) -> DomainResult<()> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(DomainError::Validation(format!(
            "password must be at least {MIN_PASSWORD_CHARS} characters"
        )));
    }
    if password != confirmation {
        return Err(DomainError::Validation(
            "password confirmation does not match".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_levels_form_a_hierarchy() {
        assert_eq!(Role::SuperAdmin.level(), 3);
        assert_eq!(Role::Editor.level(), 2);
        assert_eq!(Role::Reporter.level(), 1);
        assert!(Role::SuperAdmin.has_permission_level(2));
        assert!(Role::Editor.has_permission_level(2));
        assert!(!Role::Reporter.has_permission_level(2));
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn email_requires_local_and_domain_parts() {
        assert!(Email::new("editor@admin.com").is_ok());
        assert!(Email::new("no-at-sign").is_err());
        assert!(Email::new("@admin.com").is_err());
        assert!(Email::new("   ").is_err());
    }

    #[test]
    fn password_policy() {
        assert!(validate_password("password123", "password123").is_ok());
        assert!(validate_password("short", "short").is_err());
        assert!(validate_password("password123", "password124").is_err());
    }
}

// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Turns a plain-text password into a storable hash. The scheme is up to
/// the implementation.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
}

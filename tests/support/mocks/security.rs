// tests/support/mocks/security.rs
use lipi_core::application::{ApplicationResult, ports::security::PasswordHasher};

/// Reversible "hash" so tests can assert which password was stored.
pub struct DummyPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }
}

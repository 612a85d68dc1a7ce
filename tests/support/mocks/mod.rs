// tests/support/mocks/mod.rs
//! In-memory stand-ins for every port.

pub mod article_repo;
pub mod security;
pub mod term_repo;
pub mod time;
pub mod user_repo;

pub use article_repo::InMemoryArticleStore;
pub use security::DummyPasswordHasher;
pub use term_repo::InMemoryTermRepo;
pub use time::{FixedClock, fixed_now};
pub use user_repo::InMemoryUserRepo;

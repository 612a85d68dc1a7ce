// src/application/commands/terms/mod.rs
mod service;
mod write;

pub use service::TermCommandService;
pub use write::{CreateTermInput, DeleteTermInput, UpdateTermInput};

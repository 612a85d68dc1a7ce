// src/application/commands/users/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateAdminInput;
pub use delete::DeleteAdminInput;
pub use service::UserCommandService;
pub use update::UpdateAdminInput;

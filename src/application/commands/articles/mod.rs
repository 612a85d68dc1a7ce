// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod publish;
mod service;
mod support;
mod update;

pub use create::CreateArticleInput;
pub use delete::{BulkDeleteInput, DeleteArticleInput, RestoreArticleInput};
pub use publish::{PublishInput, ScheduleInput};
pub use service::{ArticleCommandService, SLUG_RETRY_ATTEMPTS};
pub use update::UpdateArticleInput;

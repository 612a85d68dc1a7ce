pub mod entity;
pub mod lifecycle;
pub mod query;
pub mod repository;
pub mod services;
pub mod status;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use lifecycle::{ArticleDraft, ArticleEdit, check_schedule};
pub use query::{ArticleFilter, ArticleSortField};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use services::ArticleSlugService;
pub use status::ArticleStatus;
pub use value_objects::{ArticleContent, ArticleId, ArticleMeta, ArticleSlug, ArticleTitle};

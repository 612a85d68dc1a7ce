mod get;
mod list;
mod service;

pub use get::{GetArticleByIdQuery, PreviewArticleQuery};
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;

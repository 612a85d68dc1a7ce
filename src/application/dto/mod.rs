pub mod actor;
pub mod articles;
pub mod pagination;
pub mod serde_time;
pub mod terms;
pub mod users;

pub use actor::Actor;
pub use articles::ArticleDto;
pub use pagination::Page;
pub use terms::TermDto;
pub use users::{RoleDto, UserDto};

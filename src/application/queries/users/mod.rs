mod service;

pub use service::{ListAdminsQuery, UserQueryService};

mod service;

pub use service::{ActivityFilter, ListTermsQuery, TermQueryService};

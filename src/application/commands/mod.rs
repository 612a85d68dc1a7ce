pub mod articles;
pub mod terms;
pub mod users;

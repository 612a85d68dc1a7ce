// src/domain/taxonomy/mod.rs
//! Categories and tags. Both are flat, titled terms with an active flag, so
//! they share one model parameterised by [`TermKind`].

pub mod entity;
pub mod repository;

pub use entity::{NewTerm, Term, TermFilter, TermId, TermKind, TermSortField, TermTitle, TermUpdate};
pub use repository::TermRepository;

//! Core of a multilingual CMS: articles with a draft, scheduled and
//! published lifecycle, script-preserving slugs, categories, tags and admin
//! accounts, persisted in SQLite.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

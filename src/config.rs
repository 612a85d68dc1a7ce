// src/config.rs
use crate::domain::slug::{DEFAULT_SEPARATOR, is_valid_separator};
use std::{env, str::FromStr};
use thiserror::Error;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which generator turns titles into slugs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlugStyle {
    /// Keeps the source script.
    #[default]
    Multilingual,
    /// Transliterates to ASCII.
    Ascii,
}

impl FromStr for SlugStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "multilingual" => Ok(SlugStyle::Multilingual),
            "ascii" => Ok(SlugStyle::Ascii),
            other => Err(ConfigError::Invalid(format!(
                "SLUG_STYLE must be 'multilingual' or 'ascii', got '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    max_connections: u32,
    slug_separator: char,
    slug_style: SlugStyle,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://lipi.db?mode=rwc".into()
}

fn parse_separator(raw: &str) -> Result<char, ConfigError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) if is_valid_separator(separator) => Ok(separator),
        _ => Err(ConfigError::Invalid(format!(
            "SLUG_SEPARATOR must be a single character the slug generator keeps, got '{raw}'"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let slug_separator = match env::var("SLUG_SEPARATOR") {
            Ok(raw) => parse_separator(&raw)?,
            Err(_) => DEFAULT_SEPARATOR,
        };

        let slug_style = match env::var("SLUG_STYLE") {
            Ok(raw) => raw.parse()?,
            Err(_) => SlugStyle::default(),
        };

        Ok(Self {
            database_url,
            max_connections,
            slug_separator,
            slug_style,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn slug_separator(&self) -> char {
        self.slug_separator
    }

    pub fn slug_style(&self) -> SlugStyle {
        self.slug_style
    }
}

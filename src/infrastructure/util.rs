// src/infrastructure/util.rs
use crate::config::SlugStyle;
use crate::domain::slug::{self, DEFAULT_SEPARATOR, SlugGenerator};
use std::sync::Arc;

/// Script-preserving generator: Arabic titles yield Arabic slugs.
#[derive(Debug, Clone, Copy)]
pub struct MultilingualSlugGenerator {
    separator: char,
}

impl MultilingualSlugGenerator {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }
}

impl Default for MultilingualSlugGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl SlugGenerator for MultilingualSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::generate(input, self.separator)
    }

    fn separator(&self) -> char {
        self.separator
    }
}

/// Transliterating generator backed by the `slug` crate. Produces ASCII only.
#[derive(Debug, Clone, Copy)]
pub struct AsciiSlugGenerator {
    separator: char,
}

impl AsciiSlugGenerator {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }
}

impl Default for AsciiSlugGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl SlugGenerator for AsciiSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let ascii = ::slug::slugify(input);
        if self.separator == DEFAULT_SEPARATOR {
            ascii
        } else {
            ascii.replace(DEFAULT_SEPARATOR, &self.separator.to_string())
        }
    }

    fn separator(&self) -> char {
        self.separator
    }
}

pub fn slug_generator(style: SlugStyle, separator: char) -> Arc<dyn SlugGenerator> {
    match style {
        SlugStyle::Multilingual => Arc::new(MultilingualSlugGenerator::new(separator)),
        SlugStyle::Ascii => Arc::new(AsciiSlugGenerator::new(separator)),
    }
}

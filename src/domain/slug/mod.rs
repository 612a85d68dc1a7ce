// src/domain/slug/mod.rs
//! Multilingual slug generation.
//!
//! Slugs keep the script of the source text: an Arabic title produces an
//! Arabic slug. Only whitespace and a fixed set of punctuation glyphs are
//! rewritten, everything else passes through lowercased.

mod language;

pub use language::{Language, detect_language, has_non_latin_characters};

use crate::domain::errors::DomainResult;
use once_cell::sync::Lazy;
use regex::Regex;
use std::future::Future;
use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_SEPARATOR: char = '-';

/// Substituted when a title normalises to nothing (empty or all symbols).
pub const FALLBACK_SLUG: &str = "untitled";

/// Converts free text into a slug. Implementations must be deterministic.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;

    fn separator(&self) -> char {
        DEFAULT_SEPARATOR
    }
}

// Characters outside `char::is_whitespace` that still act as word breaks.
const EXTRA_SPACE_CHARS: &[char] = &[
    '\0', '\u{0B}', '\u{200B}', '\u{200C}', '\u{200D}',
];

const DENYLIST: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '+', '=', '[', ']', '{', '}', '|', '\\',
    ':', ';', '"', '\'', '<', '>', ',', '.', '?', '/', '~', '`', '¡', '¿', '«', '»', '‹', '›',
    '‚', '„', '…', '‰', '‱', '′', '″', '‴', '‵', '‶', '‷', '‸', '‼', '‽', '‾', '‿', '⁀', '⁁',
    '⁂', '⁃', '⁅', '⁆', '⁇', '⁈', '⁉', '⁊', '⁋', '⁌', '⁍', '⁎', '⁏', '⁐', '⁑', '⁒', '⁓', '⁔',
    '⁕', '⁖', '⁗', '⁘', '⁙', '⁚', '⁛', '⁜', '⁝', '⁞',
];

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[A-Za-z/!?][^>]*(?:>|$)").expect("markup tag pattern is valid")
});

pub fn is_space(c: char) -> bool {
    c.is_whitespace() || EXTRA_SPACE_CHARS.contains(&c)
}

pub fn is_denied_symbol(c: char) -> bool {
    DENYLIST.contains(&c)
}

/// Separators that would be erased by the generator itself are rejected.
pub fn is_valid_separator(separator: char) -> bool {
    !is_space(separator) && !is_denied_symbol(separator) && !separator.is_alphanumeric()
}

/// Produce a URL-safe slug from `text`, joining words with `separator`.
///
/// Returns an empty string when nothing survives normalisation; callers
/// that need a non-empty identifier go through [`resolve_unique`].
pub fn generate(text: &str, separator: char) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = normalize_markup(text);
    let lowered = text.to_lowercase();

    let replaced: String = lowered
        .chars()
        .filter_map(|c| {
            if is_space(c) {
                Some(separator)
            } else if is_denied_symbol(c) {
                None
            } else {
                Some(c)
            }
        })
        .collect();

    let collapsed = collapse_separators(&replaced, separator);
    // entity decoding can leave decomposed sequences behind
    collapsed.trim_matches(separator).nfc().collect()
}

fn normalize_markup(text: &str) -> String {
    let composed: String = text.nfc().collect();
    let stripped = MARKUP_TAG.replace_all(&composed, "");
    html_escape::decode_html_entities(&stripped).into_owned()
}

fn collapse_separators(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_was_separator = false;
    for c in text.chars() {
        if c == separator {
            if !previous_was_separator {
                out.push(c);
            }
            previous_was_separator = true;
        } else {
            out.push(c);
            previous_was_separator = false;
        }
    }
    out
}

/// Find the first free slug starting at `base`, appending `separator` and a
/// counter (from 1) on every collision.
///
/// Every candidate fits in `max_chars`: the base is cut on a character
/// boundary to leave room for the suffix. `exists` is probed with each
/// candidate and `exclude`, so a record can keep its own slug while being
/// updated. The probe is a pre-check only; the store must still enforce
/// uniqueness on insert.
pub async fn resolve_unique<I, F, Fut>(
    base: &str,
    separator: char,
    max_chars: usize,
    exclude: Option<I>,
    mut exists: F,
) -> DomainResult<String>
where
    I: Copy,
    F: FnMut(String, Option<I>) -> Fut,
    Fut: Future<Output = DomainResult<bool>>,
{
    let base = if base.is_empty() { FALLBACK_SLUG } else { base };
    let mut candidate = truncate_slug(base, separator, max_chars).to_string();
    let mut counter: u64 = 1;

    while exists(candidate.clone(), exclude).await? {
        let suffix = format!("{separator}{counter}");
        let room = max_chars.saturating_sub(suffix.chars().count());
        candidate = format!("{}{suffix}", truncate_slug(base, separator, room));
        counter += 1;
    }

    Ok(candidate)
}

/// Longest prefix of `slug` with at most `max_chars` characters, without a
/// dangling separator.
pub fn truncate_slug(slug: &str, separator: char, max_chars: usize) -> &str {
    match slug.char_indices().nth(max_chars) {
        Some((end, _)) => slug[..end].trim_end_matches(separator),
        None => slug,
    }
}

/// [`generate`] followed by [`resolve_unique`].
pub async fn generate_unique<I, F, Fut>(
    text: &str,
    separator: char,
    max_chars: usize,
    exclude: Option<I>,
    exists: F,
) -> DomainResult<String>
where
    I: Copy,
    F: FnMut(String, Option<I>) -> Fut,
    Fut: Future<Output = DomainResult<bool>>,
{
    let base = generate(text, separator);
    resolve_unique(&base, separator, max_chars, exclude, exists).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn slug(text: &str) -> String {
        generate(text, DEFAULT_SEPARATOR)
    }

    #[test]
    fn empty_input_yields_empty_slug() {
        assert_eq!(slug(""), "");
    }

    #[test]
    fn latin_words_are_joined_and_lowercased() {
        assert_eq!(slug("Hello World"), "hello-world");
        assert_eq!(slug("Breaking News!!!"), "breaking-news");
    }

    #[test]
    fn runs_of_spaces_collapse_and_edges_are_trimmed() {
        assert_eq!(slug("  Multiple   Spaces  "), "multiple-spaces");
        assert_eq!(slug("tab\tand\nnewline"), "tab-and-newline");
        assert_eq!(slug("--already--dashed--"), "already-dashed");
    }

    #[test]
    fn denylisted_symbols_are_deleted_without_separators() {
        assert_eq!(slug("A/B?C*D"), "abcd");
        assert_eq!(slug("«Quoted» ‼ text…"), "quoted-text");
        assert_eq!(slug("!!!"), "");
    }

    #[test]
    fn arabic_script_is_preserved() {
        assert_eq!(slug("مرحبا بالعالم"), "مرحبا-بالعالم");
    }

    #[test]
    fn other_scripts_pass_through() {
        assert_eq!(slug("বাংলা শিরোনাম"), "বাংলা-শিরোনাম");
        assert_eq!(slug("नमस्ते दुनिया"), "नमस्ते-दुनिया");
        assert_eq!(slug("Привет Мир"), "привет-мир");
        assert_eq!(slug("ΓΕΙΑ σου"), "γεια-σου");
        assert_eq!(slug("你好\u{3000}世界"), "你好-世界");
    }

    #[test]
    fn unicode_space_block_becomes_separator() {
        assert_eq!(slug("one\u{2003}two\u{200B}three\u{2029}four"), "one-two-three-four");
        assert_eq!(slug("a\u{00A0}b\u{202F}c\u{205F}d"), "a-b-c-d");
    }

    #[test]
    fn markup_and_entities_are_normalised() {
        assert_eq!(slug("Caf&eacute;"), "café");
        assert_eq!(slug("<b>Café</b>"), "café");
        assert_eq!(slug("Tom &amp; Jerry"), "tom-jerry");
        assert_eq!(slug("a < b"), "a-b");
    }

    #[test]
    fn decomposed_input_is_composed() {
        let decomposed = "Cafe\u{0301}";
        assert_eq!(slug(decomposed), "caf\u{00E9}");
        assert_eq!(slug("Cafe&#769;"), "caf\u{00E9}");
    }

    #[test]
    fn custom_separator_is_used() {
        assert_eq!(generate("Hello   big World", '_'), "hello_big_world");
    }

    #[test]
    fn slugs_are_fixed_points() {
        let samples = [
            "Hello World",
            "  Multiple   Spaces  ",
            "A/B?C*D",
            "مرحبا بالعالم",
            "<i>Caf&eacute;</i> &lt;script&gt;",
            "Cafe&#769; au lait",
            "İstanbul Ünï",
            "ﬁ ligature",
            "",
            "---",
        ];
        for sample in samples {
            let once = slug(sample);
            assert_eq!(slug(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn separator_validation_rejects_erased_characters() {
        assert!(is_valid_separator('-'));
        assert!(is_valid_separator('_'));
        assert!(!is_valid_separator('.'));
        assert!(!is_valid_separator(' '));
        assert!(!is_valid_separator('a'));
    }

    #[tokio::test]
    async fn resolve_unique_appends_counter_from_one() {
        let taken = ["hello-world", "hello-world-1"];
        let slug = resolve_unique("hello-world", '-', 255, None::<i64>, |candidate, _| {
            let hit = taken.contains(&candidate.as_str());
            async move { Ok(hit) }
        })
        .await
        .unwrap();
        assert_eq!(slug, "hello-world-2");
    }

    #[tokio::test]
    async fn resolve_unique_falls_back_to_untitled() {
        let slug = generate_unique("!!!", '-', 255, None::<i64>, |_, _| async { Ok(false) })
            .await
            .unwrap();
        assert_eq!(slug, FALLBACK_SLUG);
    }

    #[tokio::test]
    async fn excluded_record_keeps_its_own_slug() {
        let owners: HashMap<&str, i64> = HashMap::from([("news", 7)]);
        let probe = |candidate: String, exclude: Option<i64>| {
            let hit = owners
                .get(candidate.as_str())
                .is_some_and(|owner| Some(*owner) != exclude);
            async move { Ok(hit) }
        };

        assert_eq!(
            generate_unique("News", '-', 255, Some(7), probe).await.unwrap(),
            "news"
        );
        assert_eq!(
            generate_unique("News", '-', 255, Some(8), probe).await.unwrap(),
            "news-1"
        );
    }

    #[tokio::test]
    async fn counter_suffix_stays_within_limit() {
        let base = "a".repeat(10);
        let slug = resolve_unique(&base, '-', 10, None::<i64>, |candidate, _| {
            let hit = candidate == "aaaaaaaaaa" || candidate == "aaaaaaaa-1";
            async move { Ok(hit) }
        })
        .await
        .unwrap();
        assert_eq!(slug, "aaaaaaaa-2");
    }

    #[test]
    fn truncation_respects_char_boundaries_and_separators() {
        assert_eq!(truncate_slug("ab-cd", '-', 3), "ab");
        assert_eq!(truncate_slug("i\u{307}i\u{307}", '-', 3), "i\u{307}i");
        assert_eq!(truncate_slug("مرحبا", '-', 10), "مرحبا");
    }
}

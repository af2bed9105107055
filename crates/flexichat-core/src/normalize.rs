//! Text normalization helpers shared by extractors and resolvers.
//!
//! All stored keys go through these helpers before insert and lookup, so
//! writes and reads always agree on casing and spacing.

/// Strip trailing sentence punctuation (`.`, `!`, `?`) from a captured value.
pub fn trim_trailing_punctuation(s: &str) -> &str {
    s.trim().trim_end_matches(['.', '!', '?']).trim_end()
}

/// Title-case every word: "ali khan" -> "Ali Khan", "RUBAB" -> "Rubab".
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize the first letter and lower-case the rest: "KOHAT" -> "Kohat".
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Normalize a topic/subject key: trim, lower-case, spaces become
/// underscores ("pdf split" -> "pdf_split").
pub fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase().replace(' ', "_")
}

/// Render a normalized key for display: underscores become spaces.
pub fn display_key(key: &str) -> String {
    key.replace('_', " ")
}

/// Strip one leading article ("the", "a", "an") for fallback lookups.
pub fn strip_leading_article(term: &str) -> &str {
    for article in ["the ", "a ", "an "] {
        if let Some(rest) = term.strip_prefix(article) {
            return rest.trim_start();
        }
    }
    term
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

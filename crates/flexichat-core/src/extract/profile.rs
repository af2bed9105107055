//! Structured personal-fact extractor.
//!
//! An ordered table of (pattern, field) rules covering name, country, city,
//! favorites, hobby, and numeric age. The first matching pattern wins, so
//! rule order is behavior: name rules come before the bare "from" country
//! rule, which would otherwise swallow lines like "Rubab is from Kohat"
//! after a more specific rule had its chance.

use std::sync::LazyLock;

use regex::Regex;

use flexichat_types::record::MemoryRecord;

use crate::normalize::{capitalize_first, display_key, title_case, trim_trailing_punctuation};

/// Where a captured value is stored and how it is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    /// `user_name`, title-cased.
    Name,
    Country,
    City,
    /// Open attribute under the given key, first-letter-capitalized.
    Attribute(&'static str),
}

impl ProfileField {
    fn storage_key(self) -> &'static str {
        match self {
            ProfileField::Name => "user_name",
            ProfileField::Country => "country",
            ProfileField::City => "city",
            ProfileField::Attribute(key) => key,
        }
    }
}

/// One (pattern, field) rule.
pub struct ProfileRule {
    pattern: Regex,
    field: ProfileField,
}

/// Ordered rule table. Evaluated top to bottom; first match wins.
static PROFILE_RULES: LazyLock<Vec<ProfileRule>> = LazyLock::new(|| {
    let rule = |pattern: &str, field: ProfileField| ProfileRule {
        pattern: Regex::new(pattern).unwrap(),
        field,
    };
    vec![
        rule(r"(?i)\bmy name is\s+([A-Za-z\s'-]+)", ProfileField::Name),
        rule(r"(?i)\bi am called\s+([A-Za-z\s'-]+)", ProfileField::Name),
        rule(r"(?i)\bi'm called\s+([A-Za-z\s'-]+)", ProfileField::Name),
        rule(r"(?i)\bmy country is\s+([A-Za-z\s]+)", ProfileField::Country),
        rule(r"(?i)\bi am from\s+([A-Za-z\s]+)", ProfileField::Country),
        rule(r"(?i)\bfrom\s+([A-Za-z\s]+)", ProfileField::Country),
        rule(r"(?i)\bmy city is\s+([A-Za-z\s]+)", ProfileField::City),
        rule(r"(?i)\bi live in\s+([A-Za-z\s]+)", ProfileField::City),
        rule(
            r"(?i)\bmy favorite color is\s+([A-Za-z\s]+)",
            ProfileField::Attribute("favorite_color"),
        ),
        rule(r"(?i)\bmy hobby is\s+([A-Za-z\s]+)", ProfileField::Attribute("hobby")),
        rule(r"(?i)\bi like\s+([A-Za-z\s]+)", ProfileField::Attribute("likes")),
        rule(r"(?i)\bmy age is\s+(\d{1,3})", ProfileField::Attribute("age")),
    ]
});

/// Try the profile rule table against the input.
///
/// On match, stores the normalized value into the record and returns a
/// field-specific confirmation.
pub fn extract_profile(record: &mut MemoryRecord, text: &str) -> Option<String> {
    for rule in PROFILE_RULES.iter() {
        let Some(caps) = rule.pattern.captures(text) else {
            continue;
        };
        let raw = trim_trailing_punctuation(caps.get(1)?.as_str());
        let stored = match rule.field {
            ProfileField::Name => title_case(raw),
            _ => capitalize_first(raw),
        };
        if stored.is_empty() {
            continue;
        }
        tracing::debug!(field = rule.field.storage_key(), value = %stored, "profile rule hit");
        record.set_profile_value(rule.field.storage_key(), stored.clone());
        let reply = match rule.field {
            ProfileField::Name => {
                format!("Nice to meet you, {stored}! I'll remember your name.")
            }
            ProfileField::Country => format!("Oh nice! {stored}, I'll remember that."),
            ProfileField::City => format!("{stored} sounds like a lovely city, got it!"),
            ProfileField::Attribute(key) => format!(
                "Got it! I've learned that your {} is {stored}.",
                display_key(key)
            ),
        };
        return Some(reply);
    }
    None
}

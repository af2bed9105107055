//! Personal-attribute query resolver.
//!
//! A fixed phrase -> profile-field table ("my name", "who am i", "my
//! city", ...). Evaluated in order by substring match; a hit on an unset
//! field prompts the user with the teaching phrasing instead of failing.

use flexichat_types::record::MemoryRecord;

use crate::normalize::display_key;

/// Ordered phrase table. More specific phrases shadow generic ones only by
/// coming first; order is behavior.
const PERSONAL_QUERIES: &[(&str, &str)] = &[
    ("my name", "user_name"),
    ("who am i", "user_name"),
    ("my country", "country"),
    ("what is my country", "country"),
    ("my city", "city"),
    ("what is my city", "city"),
    ("favorite color", "favorite_color"),
    ("my hobby", "hobby"),
    ("my age", "age"),
];

/// Answer a question about the stored profile.
pub fn resolve_personal(record: &MemoryRecord, text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    for (phrase, key) in PERSONAL_QUERIES {
        if !lower.contains(phrase) {
            continue;
        }
        let spoken = if *key == "user_name" {
            "name".to_string()
        } else {
            display_key(key)
        };
        return Some(match record.profile_value(key) {
            Some(value) => format!("Your {spoken} is {value}."),
            None => format!(
                "I don't know your {spoken} yet. Tell me by saying 'My {spoken} is ...'"
            ),
        });
    }
    None
}

//! Relationship extractor.
//!
//! Ordered (pattern, role) rules of the form "my <role> is <name>". Roles
//! are open-ended in storage (the map accepts any key), but learning is
//! driven by this fixed rule table; new roles enter the map through it.
//! Family roles admit an optional "name" word ("my mother name is X").

use std::sync::LazyLock;

use regex::Regex;

use flexichat_types::record::MemoryRecord;

use crate::normalize::{display_key, title_case, trim_trailing_punctuation};

struct RelationRule {
    pattern: Regex,
    role: &'static str,
}

static RELATION_RULES: LazyLock<Vec<RelationRule>> = LazyLock::new(|| {
    let rule = |pattern: &str, role: &'static str| RelationRule {
        pattern: Regex::new(pattern).unwrap(),
        role,
    };
    vec![
        rule(r"(?i)\bmy friend is\s+([A-Za-z\s'-]+)", "friend"),
        rule(r"(?i)\bmy best friend is\s+([A-Za-z\s'-]+)", "best_friend"),
        rule(r"(?i)\bmy girlfriend is\s+([A-Za-z\s'-]+)", "girlfriend"),
        rule(r"(?i)\bmy boyfriend is\s+([A-Za-z\s'-]+)", "boyfriend"),
        rule(r"(?i)\bmy teacher is\s+([A-Za-z\s'-]+)", "teacher"),
        rule(r"(?i)\bmy mother (?:name )?is\s+([A-Za-z\s'-]+)", "mother"),
        rule(r"(?i)\bmy father (?:name )?is\s+([A-Za-z\s'-]+)", "father"),
        rule(r"(?i)\bmy sister (?:name )?is\s+([A-Za-z\s'-]+)", "sister"),
        rule(r"(?i)\bmy brother (?:name )?is\s+([A-Za-z\s'-]+)", "brother"),
        rule(r"(?i)\bmy crush is\s+([A-Za-z\s'-]+)", "crush"),
    ]
});

/// Try the relationship rule table against the input.
///
/// On match, stores the title-cased name under the role key (overwriting
/// any previous assignment) and returns a role-specific confirmation.
pub fn extract_relationship(record: &mut MemoryRecord, text: &str) -> Option<String> {
    for rule in RELATION_RULES.iter() {
        let Some(caps) = rule.pattern.captures(text) else {
            continue;
        };
        let name = title_case(trim_trailing_punctuation(caps.get(1)?.as_str()));
        if name.is_empty() {
            continue;
        }
        tracing::debug!(role = rule.role, name = %name, "relationship rule hit");
        record
            .relationships
            .insert(rule.role.to_string(), name.clone());
        return Some(format!(
            "Nice! I've learned your {} is {name}.",
            display_key(rule.role)
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_girlfriend_round_trip_storage() {
        let mut record = MemoryRecord::default();
        let reply = extract_relationship(&mut record, "My girlfriend is Rubab").unwrap();
        assert_eq!(record.relationships.get("girlfriend").map(String::as_str), Some("Rubab"));
        assert!(reply.contains("Rubab"));
        assert!(reply.contains("girlfriend"));
    }

    #[test]
    fn test_best_friend_not_shadowed_by_friend_rule() {
        let mut record = MemoryRecord::default();
        extract_relationship(&mut record, "my best friend is Sara").unwrap();
        assert!(record.relationships.contains_key("best_friend"));
        assert!(!record.relationships.contains_key("friend"));
    }

    #[test]
    fn test_optional_name_word_for_family_roles() {
        let mut record = MemoryRecord::default();
        extract_relationship(&mut record, "my mother name is fatima.").unwrap();
        assert_eq!(record.relationships.get("mother").map(String::as_str), Some("Fatima"));
        extract_relationship(&mut record, "my father is omar khan").unwrap();
        assert_eq!(record.relationships.get("father").map(String::as_str), Some("Omar Khan"));
    }

    #[test]
    fn test_overwrite_on_repeat() {
        let mut record = MemoryRecord::default();
        extract_relationship(&mut record, "my crush is alia").unwrap();
        extract_relationship(&mut record, "my crush is zara").unwrap();
        assert_eq!(record.relationships.get("crush").map(String::as_str), Some("Zara"));
    }

    #[test]
    fn test_no_match() {
        let mut record = MemoryRecord::default();
        assert!(extract_relationship(&mut record, "who is my girlfriend").is_none());
        assert!(record.relationships.is_empty());
    }
}

//! Relationship query resolver.
//!
//! Answers "who is my <role>" and also fires when a known role name is
//! mentioned directly ("my girlfriend?"). Only roles already present in the
//! relationship map can answer; an unknown role yields None so the
//! dispatcher keeps falling through.

use std::sync::LazyLock;

use regex::Regex;

use flexichat_types::record::MemoryRecord;

use crate::normalize::display_key;

static WHO_IS_MY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)who is my ([a-z_ ]+?)\??$").unwrap());

/// Look up a relationship mentioned in the input.
pub fn resolve_relationship(record: &MemoryRecord, text: &str) -> Option<String> {
    let lower = text.to_lowercase();

    // Known roles: either the full question form or a bare mention.
    for (role, name) in &record.relationships {
        let spoken = display_key(role);
        if lower.contains(&format!("who is my {spoken}")) || lower.contains(role.as_str()) {
            return Some(format!("Your {spoken} is {name}."));
        }
    }

    // Direct question about a role stored with underscores ("best friend").
    let caps = WHO_IS_MY_RE.captures(&lower)?;
    let key = caps.get(1)?.as_str().trim().replace(' ', "_");
    let name = record.relationships.get(&key)?;
    Some(format!("Your {} is {name}.", display_key(&key)))
}

//! The durable memory record and its repair contract.
//!
//! [`MemoryRecord`] is the single persisted object behind the dialogue
//! engine: user profile, learned facts, relationships, the conversation log,
//! and the FlexiPDF knowledge base. The serialized field names
//! (`user_name`, `facts`, `relationships`, `conversations`,
//! `flexipdf_knowledge`, `meta.created_at`) are the on-disk schema and must
//! not change; open profile attributes (favorite_color, hobby, ...) are
//! flattened into the top level of the object.
//!
//! [`MemoryRecord::repair_from_value`] implements the load-repair contract:
//! whatever shape the on-disk JSON has, the result is a well-formed record.

use std::collections::BTreeMap;

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::exchange::Exchange;

/// Timestamp format for `meta.created_at`, e.g. `2026-08-29T14:03:07`.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Record metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// When this record was first created, ISO-8601 to second precision.
    pub created_at: Option<String>,
}

/// Everything the engine has learned, in its persisted shape.
///
/// All map keys are case-normalized before storage and lookup so writes and
/// reads agree. Scalar profile attributes beyond the four fixed fields live
/// in `attributes` and are flattened to the top level when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub user_name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub language: Option<String>,

    /// Free facts: normalized subject -> definition.
    pub facts: BTreeMap<String, String>,

    /// Relationship map: role (e.g. "girlfriend") -> person name.
    pub relationships: BTreeMap<String, String>,

    /// Append-only conversation log.
    pub conversations: Vec<Exchange>,

    /// App-help knowledge base: normalized topic key -> explanation.
    pub flexipdf_knowledge: BTreeMap<String, String>,

    pub meta: Meta,

    /// Open profile attributes (favorite_color, hobby, likes, age, ...),
    /// flattened into the top level of the serialized object.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

/// Fixed top-level keys of the serialized record. Anything else is treated
/// as a flattened profile attribute during repair.
const FIXED_KEYS: &[&str] = &[
    "user_name",
    "country",
    "city",
    "language",
    "facts",
    "relationships",
    "conversations",
    "flexipdf_knowledge",
    "meta",
];

impl MemoryRecord {
    /// A fresh record stamped with the current creation time.
    pub fn fresh() -> Self {
        Self {
            meta: Meta {
                created_at: Some(Local::now().format(CREATED_AT_FORMAT).to_string()),
            },
            ..Self::default()
        }
    }

    /// Rebuild a well-formed record from arbitrary JSON.
    ///
    /// Repair rules:
    /// - a JSON array is salvaged as the conversation list, everything else
    ///   defaults;
    /// - any other non-object value yields a default record;
    /// - for an object, each expected field is adopted only if its JSON
    ///   shape matches the default's shape (string stays string, object
    ///   stays object, array stays array);
    /// - `meta.created_at` is merged when present;
    /// - unknown top-level string fields are adopted as profile attributes.
    pub fn repair_from_value(raw: Value) -> Self {
        let mut record = Self::default();

        let mut map = match raw {
            Value::Array(items) => {
                record.conversations = parse_exchanges(items);
                return record;
            }
            Value::Object(map) => map,
            _ => return record,
        };

        record.user_name = take_string(&mut map, "user_name");
        record.country = take_string(&mut map, "country");
        record.city = take_string(&mut map, "city");
        record.language = take_string(&mut map, "language");

        if let Some(Value::Object(facts)) = map.remove("facts") {
            record.facts = string_entries(facts);
        }
        if let Some(Value::Object(rels)) = map.remove("relationships") {
            record.relationships = string_entries(rels);
        }
        if let Some(Value::Array(items)) = map.remove("conversations") {
            record.conversations = parse_exchanges(items);
        }
        if let Some(Value::Object(knowledge)) = map.remove("flexipdf_knowledge") {
            record.flexipdf_knowledge = string_entries(knowledge);
        }
        if let Some(Value::Object(mut meta)) = map.remove("meta") {
            if let Some(Value::String(created)) = meta.remove("created_at") {
                record.meta.created_at = Some(created);
            }
        }

        // Remaining string fields are flattened profile attributes.
        for (key, value) in map {
            if let Value::String(s) = value {
                if !FIXED_KEYS.contains(&key.as_str()) {
                    record.attributes.insert(key, s);
                }
            }
        }

        record
    }

    /// Read a profile value by field key.
    ///
    /// The four fixed fields are addressed by their schema names
    /// (`user_name`, `country`, `city`, `language`); any other key reads
    /// from the open attribute map.
    pub fn profile_value(&self, key: &str) -> Option<&str> {
        match key {
            "user_name" => self.user_name.as_deref(),
            "country" => self.country.as_deref(),
            "city" => self.city.as_deref(),
            "language" => self.language.as_deref(),
            other => self.attributes.get(other).map(String::as_str),
        }
    }

    /// Write a profile value by field key. Last write wins.
    pub fn set_profile_value(&mut self, key: &str, value: String) {
        match key {
            "user_name" => self.user_name = Some(value),
            "country" => self.country = Some(value),
            "city" => self.city = Some(value),
            "language" => self.language = Some(value),
            other => {
                self.attributes.insert(other.to_string(), value);
            }
        }
    }

    /// The stored user name, or "friend" when unknown.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("friend")
    }
}

fn take_string(map: &mut serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn string_entries(map: serde_json::Map<String, Value>) -> BTreeMap<String, String> {
    map.into_iter()
        .filter_map(|(k, v)| match v {
            Value::String(s) => Some((k, s)),
            _ => None,
        })
        .collect()
}

fn parse_exchanges(items: Vec<Value>) -> Vec<Exchange> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

//! Domain-knowledge teaching extractor.
//!
//! Two explicit command forms, built around the assistant's trigger name
//! (default "ali"):
//!
//! ```text
//! ali learn 'pdf split' means divide PDF into multiple files
//! teach ali about pdf split: divide PDF into multiple files
//! ```
//!
//! Keys are normalized (lower-cased, spaces to underscores) before storage
//! so later help-phrase lookups agree with what was taught.

use regex::Regex;

use flexichat_types::record::MemoryRecord;

use crate::normalize::{display_key, normalize_key, trim_trailing_punctuation};

/// Compiled teaching command patterns for one assistant trigger name.
///
/// Built once at engine init since the trigger is configuration, not code.
pub struct TeachRules {
    learn: Regex,
    teach_about: Regex,
}

impl TeachRules {
    /// Compile the two command forms for the given trigger word.
    pub fn new(trigger: &str) -> Self {
        let escaped = regex::escape(trigger);
        Self {
            learn: Regex::new(&format!(r"(?i){escaped} learn\s+'([^']+)'\s+means\s+(.+)"))
                .expect("learn pattern"),
            teach_about: Regex::new(&format!(r"(?i)teach {escaped} about\s+'?([^:']+)'?:\s*(.+)"))
                .expect("teach-about pattern"),
        }
    }

    /// Try both command forms against the input.
    ///
    /// On match, stores the normalized key with its explanation (reteaching
    /// overwrites) and returns a confirmation naming the key.
    pub fn extract(&self, record: &mut MemoryRecord, text: &str) -> Option<String> {
        if let Some(caps) = self.learn.captures(text) {
            let key = normalize_key(caps.get(1)?.as_str());
            let explanation = trim_trailing_punctuation(caps.get(2)?.as_str()).to_string();
            tracing::debug!(%key, "knowledge taught via learn command");
            record.flexipdf_knowledge.insert(key.clone(), explanation.clone());
            return Some(format!(
                "Nice! I learned that {} means: {explanation}",
                display_key(&key)
            ));
        }
        if let Some(caps) = self.teach_about.captures(text) {
            let key = normalize_key(caps.get(1)?.as_str());
            let explanation = trim_trailing_punctuation(caps.get(2)?.as_str()).to_string();
            tracing::debug!(%key, "knowledge taught via teach-about command");
            record.flexipdf_knowledge.insert(key.clone(), explanation.clone());
            return Some(format!(
                "Thanks, I learned about {}: {explanation}",
                display_key(&key)
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learn_command_normalizes_key() {
        let rules = TeachRules::new("ali");
        let mut record = MemoryRecord::default();
        let reply = rules
            .extract(
                &mut record,
                "Ali learn 'pdf split' means divide PDF into multiple files",
            )
            .unwrap();
        assert_eq!(
            record.flexipdf_knowledge.get("pdf_split").map(String::as_str),
            Some("divide PDF into multiple files")
        );
        assert!(reply.contains("pdf split"));
        assert!(reply.contains("divide PDF into multiple files"));
    }

    #[test]
    fn test_teach_about_command() {
        let rules = TeachRules::new("ali");
        let mut record = MemoryRecord::default();
        let reply = rules
            .extract(&mut record, "teach ali about watermarks: stamp text over pages.")
            .unwrap();
        assert_eq!(
            record.flexipdf_knowledge.get("watermarks").map(String::as_str),
            Some("stamp text over pages")
        );
        assert!(reply.contains("watermarks"));
    }

    #[test]
    fn test_reteaching_overwrites() {
        let rules = TeachRules::new("ali");
        let mut record = MemoryRecord::default();
        rules
            .extract(&mut record, "ali learn 'ocr' means read scanned text")
            .unwrap();
        rules
            .extract(&mut record, "ali learn 'ocr' means recognize characters")
            .unwrap();
        assert_eq!(
            record.flexipdf_knowledge.get("ocr").map(String::as_str),
            Some("recognize characters")
        );
    }

    #[test]
    fn test_custom_trigger() {
        let rules = TeachRules::new("nova");
        let mut record = MemoryRecord::default();
        assert!(rules
            .extract(&mut record, "ali learn 'x y' means something")
            .is_none());
        assert!(rules
            .extract(&mut record, "nova learn 'x y' means something")
            .is_some());
    }

    #[test]
    fn test_no_match() {
        let rules = TeachRules::new("ali");
        let mut record = MemoryRecord::default();
        assert!(rules.extract(&mut record, "love is emotion").is_none());
        assert!(record.flexipdf_knowledge.is_empty());
    }
}

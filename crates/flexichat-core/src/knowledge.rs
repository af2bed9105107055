//! FlexiPDF knowledge base: seed entries and help-phrase lookup.
//!
//! The knowledge base is a normalized-key map seeded at startup with the
//! app's conversion features. User-taught entries merge in through the
//! teaching extractor; seeding never clobbers a key that is already
//! present, so reteaching survives restarts.

use std::collections::BTreeSet;

use flexichat_types::record::MemoryRecord;

/// Default help entries merged into the knowledge base at startup.
pub const SEED_KNOWLEDGE: &[(&str, &str)] = &[
    ("pdf_to_word", "Convert PDF files into editable Word (.docx) documents."),
    ("word_to_pdf", "Convert Word (.docx) files into clean, printable PDF files."),
    ("pdf_to_image", "Export pages of a PDF into high-quality image files (PNG/JPG)."),
    ("images_to_pdf", "Merge multiple images into a single PDF document."),
    ("merge_pdfs", "Combine multiple PDF files into a single PDF."),
    ("split_pdf", "Split a PDF into multiple smaller PDF files by page ranges."),
    ("compress_pdf", "Reduce PDF file size while keeping acceptable quality."),
    ("ocr_pdf", "(If available) Use OCR to recognize text inside scanned PDF pages."),
    (
        "ai_assistant",
        "I'm the built-in AI assistant that helps with FlexiPDF tasks and answers questions.",
    ),
];

/// Fixed phrase -> knowledge key table for direct help queries.
///
/// Checked by substring match after the resolvers fall through; a hit with
/// a known key gets an offer-to-guide suffix appended.
pub const HELP_PHRASES: &[(&str, &str)] = &[
    ("how do i convert pdf to word", "pdf_to_word"),
    ("convert pdf to word", "pdf_to_word"),
    ("how to convert pdf to word", "pdf_to_word"),
    ("pdf to word", "pdf_to_word"),
    ("word to pdf", "word_to_pdf"),
    ("pdf to image", "pdf_to_image"),
    ("images to pdf", "images_to_pdf"),
    ("merge pdf", "merge_pdfs"),
    ("split pdf", "split_pdf"),
    ("compress pdf", "compress_pdf"),
    ("what can you do", "ai_assistant"),
    ("who made you", "about"),
];

const GUIDE_SUFFIX: &str = " If you'd like, I can guide you step-by-step.";

/// Merge the seed entries into the record without overwriting existing
/// keys. Returns true if anything changed (caller persists once).
pub fn seed_defaults(record: &mut MemoryRecord) -> bool {
    let mut changed = false;
    for (key, explanation) in SEED_KNOWLEDGE {
        if !record.flexipdf_knowledge.contains_key(*key) {
            record
                .flexipdf_knowledge
                .insert((*key).to_string(), (*explanation).to_string());
            changed = true;
        }
    }
    changed
}

/// Answer a direct help phrase ("merge pdf", "split pdf", ...) from the
/// knowledge base. None when no phrase matches or the mapped key is
/// unknown.
///
/// Teaching normalizes keys by word order as typed ("pdf split" stores
/// `pdf_split`), while the phrase table maps to the canonical seed keys
/// (`split_pdf`). A taught variant with the same words in another order
/// shadows the canonical entry, so reteaching under either spelling is
/// visible from the same phrase.
pub fn resolve_help(record: &MemoryRecord, text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    for (phrase, key) in HELP_PHRASES {
        if !lower.contains(phrase) {
            continue;
        }
        if let Some(answer) = lookup_with_variants(record, key) {
            return Some(format!("{answer}{GUIDE_SUFFIX}"));
        }
    }
    None
}

/// Knowledge lookup that prefers a taught word-order variant of `key`.
///
/// Variant candidates exclude the canonical seed keys: those never come
/// from teaching, and two seeds can legitimately share a word set
/// (`pdf_to_word` / `word_to_pdf`).
fn lookup_with_variants<'a>(record: &'a MemoryRecord, key: &str) -> Option<&'a String> {
    let wanted = key_words(key);
    let variant = record
        .flexipdf_knowledge
        .iter()
        .find(|(k, _)| k.as_str() != key && !is_seed_key(k) && key_words(k) == wanted)
        .map(|(_, answer)| answer);
    variant.or_else(|| record.flexipdf_knowledge.get(key))
}

fn is_seed_key(key: &str) -> bool {
    SEED_KNOWLEDGE.iter().any(|(k, _)| *k == key)
}

fn key_words(key: &str) -> BTreeSet<&str> {
    key.split('_').filter(|w| !w.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_defaults_idempotent() {
        let mut record = MemoryRecord::default();
        assert!(seed_defaults(&mut record));
        assert_eq!(record.flexipdf_knowledge.len(), SEED_KNOWLEDGE.len());
        // second pass changes nothing
        assert!(!seed_defaults(&mut record));
    }

    #[test]
    fn test_seed_does_not_clobber_retaught_entry() {
        let mut record = MemoryRecord::default();
        record
            .flexipdf_knowledge
            .insert("split_pdf".to_string(), "divide PDF into multiple files".to_string());
        seed_defaults(&mut record);
        assert_eq!(
            record.flexipdf_knowledge.get("split_pdf").map(String::as_str),
            Some("divide PDF into multiple files")
        );
    }

    #[test]
    fn test_resolve_help_hit_appends_guide_offer() {
        let mut record = MemoryRecord::default();
        seed_defaults(&mut record);
        let reply = resolve_help(&record, "How do I split PDF files?").unwrap();
        assert!(reply.contains("Split a PDF into multiple smaller PDF files"));
        assert!(reply.ends_with("step-by-step."));
    }

    #[test]
    fn test_resolve_help_surfaces_taught_entry() {
        let mut record = MemoryRecord::default();
        record
            .flexipdf_knowledge
            .insert("split_pdf".to_string(), "divide PDF into multiple files".to_string());
        let reply = resolve_help(&record, "split pdf please").unwrap();
        assert!(reply.contains("divide PDF into multiple files"));
    }

    #[test]
    fn test_taught_word_order_variant_shadows_seed() {
        let mut record = MemoryRecord::default();
        seed_defaults(&mut record);
        // taught as "pdf split", stored under pdf_split; the phrase table
        // maps "split pdf" to the seeded split_pdf key
        record
            .flexipdf_knowledge
            .insert("pdf_split".to_string(), "divide PDF into multiple files".to_string());
        let reply = resolve_help(&record, "split pdf").unwrap();
        assert!(reply.contains("divide PDF into multiple files"), "reply was: {reply}");
        assert!(!reply.contains("page ranges"));
    }

    #[test]
    fn test_seeds_sharing_a_word_set_do_not_shadow_each_other() {
        let mut record = MemoryRecord::default();
        seed_defaults(&mut record);
        // pdf_to_word and word_to_pdf have the same word set; each phrase
        // must answer with its own canonical entry
        let reply = resolve_help(&record, "pdf to word").unwrap();
        assert!(reply.contains("editable Word"), "reply was: {reply}");
        let reply = resolve_help(&record, "word to pdf").unwrap();
        assert!(reply.contains("printable PDF"), "reply was: {reply}");
    }

    #[test]
    fn test_resolve_help_unknown_key_is_none() {
        let record = MemoryRecord::default();
        // "who made you" maps to "about", which is never seeded
        assert!(resolve_help(&record, "who made you").is_none());
        assert!(resolve_help(&record, "unrelated text").is_none());
    }
}

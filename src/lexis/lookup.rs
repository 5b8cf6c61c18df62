//! Word enrichment.
//!
//! A [`WordLookup`] turns a headword into an [`AiResponse`] bundle used to
//! pre-fill the fields of a new word. Enrichment is best-effort: [`prefill`]
//! swallows lookup failures so entry creation is never blocked by them.

use crate::error::{LexisError, Result};
use crate::model::{AiResponse, WordDraft};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub trait WordLookup {
    fn lookup(&self, word: &str) -> Result<AiResponse>;
}

/// Used when no lookup source is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLookup;

impl WordLookup for NoLookup {
    fn lookup(&self, _word: &str) -> Result<AiResponse> {
        Err(LexisError::Lookup("no lookup configured".into()))
    }
}

/// Offline lookup backed by a JSON object of `headword -> AiResponse`.
///
/// Keys match case-insensitively.
#[derive(Debug, Default, Clone)]
pub struct GlossaryLookup {
    entries: HashMap<String, AiResponse>,
}

impl GlossaryLookup {
    pub fn new(entries: HashMap<String, AiResponse>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.trim().to_lowercase(), v))
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, AiResponse> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(LexisError::Io)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WordLookup for GlossaryLookup {
    fn lookup(&self, word: &str) -> Result<AiResponse> {
        self.entries
            .get(&word.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| LexisError::Lookup(format!("\"{}\" is not in the glossary", word)))
    }
}

/// Fills the fields the user left empty from a lookup of the draft's headword.
///
/// On failure the draft comes back unchanged together with the lookup error,
/// so the caller can carry on with whatever was entered by hand and still
/// report why nothing was filled.
pub fn prefill<L: WordLookup + ?Sized>(
    draft: WordDraft,
    lookup: &L,
) -> (WordDraft, Option<LexisError>) {
    match lookup.lookup(&draft.word) {
        Ok(response) => (merge(draft, response), None),
        Err(e) => {
            tracing::warn!(word = %draft.word, error = %e, "lookup failed, keeping manual entry");
            (draft, Some(e))
        }
    }
}

/// Copies lookup fields into the draft where the draft is still empty.
pub fn merge(mut draft: WordDraft, response: AiResponse) -> WordDraft {
    if draft.translation.trim().is_empty() {
        draft.translation = response.translation;
    }
    if draft.definition.trim().is_empty() {
        draft.definition = response.definition;
    }
    if draft.part_of_speech.trim().is_empty() {
        draft.part_of_speech = response.part_of_speech;
    }
    if draft.examples.is_empty() {
        draft.examples = response.examples;
    }
    if draft.tags.is_empty() {
        draft.tags = response.tags;
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOSSARY: &str = r#"{
        "Hello": {
            "translation": "مرحبا",
            "definition": "a greeting",
            "partOfSpeech": "interjection",
            "examples": ["Hello, world!"],
            "tags": ["common"]
        }
    }"#;

    #[test]
    fn glossary_matches_case_insensitively() {
        let glossary = GlossaryLookup::from_json(GLOSSARY).unwrap();
        let response = glossary.lookup("hello").unwrap();
        assert_eq!(response.part_of_speech, "interjection");
        assert!(glossary.lookup("goodbye").is_err());
    }

    #[test]
    fn prefill_only_fills_empty_fields() {
        let glossary = GlossaryLookup::from_json(GLOSSARY).unwrap();
        let draft = WordDraft {
            word: "hello".into(),
            translation: "أهلا".into(),
            ..WordDraft::default()
        };

        let (filled, error) = prefill(draft, &glossary);
        assert!(error.is_none());
        assert_eq!(filled.translation, "أهلا");
        assert_eq!(filled.definition, "a greeting");
        assert_eq!(filled.examples, vec!["Hello, world!"]);
        assert_eq!(filled.tags, vec!["common"]);
    }

    #[test]
    fn prefill_falls_back_to_manual_entry() {
        let draft = WordDraft::new("hello");
        let (kept, error) = prefill(draft.clone(), &NoLookup);
        assert_eq!(kept, draft);
        assert!(matches!(error, Some(LexisError::Lookup(_))));
    }

    #[test]
    fn partial_glossary_entries_default_missing_fields() {
        let glossary = GlossaryLookup::from_json(r#"{"run": {"translation": "يركض"}}"#).unwrap();
        let response = glossary.lookup("run").unwrap();
        assert_eq!(response.translation, "يركض");
        assert!(response.tags.is_empty());
    }
}

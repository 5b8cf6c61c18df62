use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup::{prefill, WordLookup};
use crate::model::{SentenceDraft, SentenceEntry, WordDraft, WordEntry};
use crate::store::DataStore;

use super::helpers::short_label;

pub fn word<S: DataStore>(
    store: &mut S,
    words: &mut Collection<WordEntry>,
    draft: WordDraft,
) -> Result<CmdResult> {
    let entry = words.add(store, draft)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Word added: {}", entry.word)));
    result.affected_words.push(entry);
    Ok(result)
}

/// Adds a word after enriching the draft from `lookup`. A failed lookup is
/// reported as a warning and the word is added with the fields as entered.
pub fn word_with_lookup<S: DataStore, L: WordLookup + ?Sized>(
    store: &mut S,
    words: &mut Collection<WordEntry>,
    draft: WordDraft,
    lookup: &L,
) -> Result<CmdResult> {
    let (draft, error) = prefill(draft, lookup);
    let warning =
        error.map(|e| CmdMessage::warning(format!("{}; saved the fields you entered.", e)));

    let mut result = word(store, words, draft)?;
    if let Some(warning) = warning {
        result.messages.insert(0, warning);
    }
    Ok(result)
}

pub fn sentence<S: DataStore>(
    store: &mut S,
    sentences: &mut Collection<SentenceEntry>,
    draft: SentenceDraft,
) -> Result<CmdResult> {
    let entry = sentences.add(store, draft)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Sentence added: {}",
        short_label(&entry.content)
    )));
    result.affected_sentences.push(entry);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::lookup::{GlossaryLookup, NoLookup};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_word_and_reports_it() {
        let mut store = InMemoryStore::new();
        let mut words = Collection::load(&store);

        let result = word(&mut store, &mut words, WordDraft::new("hello")).unwrap();
        assert_eq!(result.affected_words.len(), 1);
        assert_eq!(result.messages[0].content, "Word added: hello");
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn lookup_fills_draft() {
        let mut store = InMemoryStore::new();
        let mut words = Collection::load(&store);
        let glossary =
            GlossaryLookup::from_json(r#"{"hello": {"translation": "مرحبا", "tags": ["common"]}}"#)
                .unwrap();

        let result =
            word_with_lookup(&mut store, &mut words, WordDraft::new("hello"), &glossary).unwrap();
        assert_eq!(result.affected_words[0].translation, "مرحبا");
        assert_eq!(result.affected_words[0].tags, vec!["common"]);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn failed_lookup_still_adds() {
        let mut store = InMemoryStore::new();
        let mut words = Collection::load(&store);

        let result =
            word_with_lookup(&mut store, &mut words, WordDraft::new("hello"), &NoLookup).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            result.messages[0].content,
            "Lookup failed: no lookup configured; saved the fields you entered."
        );
        assert_eq!(result.messages[1].content, "Word added: hello");
    }

    #[test]
    fn adds_sentence() {
        let mut store = InMemoryStore::new();
        let mut sentences = Collection::load(&store);
        let draft = SentenceDraft {
            content: "How much is this?".into(),
            translation: "بكم هذا؟".into(),
            category: "shopping".into(),
            notes: String::new(),
        };

        let result = sentence(&mut store, &mut sentences, draft).unwrap();
        assert_eq!(result.affected_sentences[0].category, "shopping");
    }
}

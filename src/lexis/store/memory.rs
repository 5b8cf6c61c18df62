use super::{DataStore, Slot};
use crate::error::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    slots: HashMap<Slot, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a slot with raw text, bypassing serialization.
    pub fn with_raw(mut self, slot: Slot, content: &str) -> Self {
        self.slots.insert(slot, content.to_string());
        self
    }

    pub fn raw(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }
}

impl DataStore for InMemoryStore {
    fn read_slot(&self, slot: Slot) -> Result<Option<String>> {
        Ok(self.slots.get(&slot).cloned())
    }

    fn write_slot(&mut self, slot: Slot, content: &str) -> Result<()> {
        self.slots.insert(slot, content.to_string());
        Ok(())
    }

    fn slot_path(&self, _slot: Slot) -> Option<PathBuf> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{SentenceEntry, WordEntry};
    use crate::store::save_slot;

    /// Builds stores pre-populated with entries whose ids and timestamps are fixed.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        words: Vec<WordEntry>,
        sentences: Vec<SentenceEntry>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                words: Vec::new(),
                sentences: Vec::new(),
            }
        }

        pub fn with_word(mut self, word: &str, created_at: i64, tags: &[&str]) -> Self {
            self.words.push(WordEntry {
                id: format!("w-{}", created_at),
                word: word.to_string(),
                translation: String::new(),
                definition: String::new(),
                part_of_speech: String::new(),
                examples: Vec::new(),
                notes: String::new(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                created_at,
            });
            self
        }

        pub fn with_sentence(mut self, content: &str, category: &str, created_at: i64) -> Self {
            self.sentences.push(SentenceEntry {
                id: format!("s-{}", created_at),
                content: content.to_string(),
                translation: format!("{} (translated)", content),
                category: category.to_string(),
                notes: String::new(),
                created_at,
            });
            self
        }

        pub fn build(mut self) -> InMemoryStore {
            if !self.words.is_empty() {
                save_slot(&mut self.store, Slot::Words, &self.words).unwrap();
            }
            if !self.sentences.is_empty() {
                save_slot(&mut self.store, Slot::Sentences, &self.sentences).unwrap();
            }
            self.store
        }
    }
}

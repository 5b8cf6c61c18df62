//! # Storage Layer
//!
//! Lexis keeps its two collections in named **slots** of a key-value store.
//! The [`DataStore`] trait only knows how to read and write the raw text of a
//! slot; [`load_slot`] and [`save_slot`] layer JSON (de)serialization on top.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file per slot
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── words.json        # JSON array of WordEntry
//! ├── sentences.json    # JSON array of SentenceEntry
//! └── config.json       # LexisConfig
//! ```
//!
//! There is no schema version. A slot that fails to parse is treated as
//! empty so that a damaged file never blocks startup; the failure is logged.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// A named location holding one serialized collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Words,
    Sentences,
}

impl Slot {
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Words => "words",
            Slot::Sentences => "sentences",
        }
    }

    pub fn all() -> &'static [Slot] {
        &[Slot::Words, Slot::Sentences]
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Abstract interface over the key-value store backing the collections.
pub trait DataStore {
    /// Raw slot content, or `None` if the slot has never been written.
    fn read_slot(&self, slot: Slot) -> Result<Option<String>>;

    /// Replace the slot content unconditionally.
    fn write_slot(&mut self, slot: Slot, content: &str) -> Result<()>;

    /// Location of the slot on disk, for file-based stores.
    fn slot_path(&self, slot: Slot) -> Option<PathBuf>;
}

/// Reads a slot as a sequence of `T`.
///
/// Never fails: an absent slot is empty, and a slot that cannot be read or
/// does not parse as a JSON array of `T` is logged and treated as empty.
pub fn load_slot<T, S>(store: &S, slot: Slot) -> Vec<T>
where
    T: DeserializeOwned,
    S: DataStore + ?Sized,
{
    let content = match store.read_slot(slot) {
        Ok(Some(content)) => content,
        Ok(None) => {
            tracing::debug!(%slot, "slot is empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(%slot, error = %e, "could not read slot, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&content) {
        Ok(items) => {
            tracing::debug!(%slot, count = items.len(), "loaded slot");
            items
        }
        Err(e) => {
            tracing::warn!(%slot, error = %e, "discarding malformed slot data");
            Vec::new()
        }
    }
}

/// Serializes the full sequence and overwrites the slot.
pub fn save_slot<T, S>(store: &mut S, slot: Slot, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: DataStore + ?Sized,
{
    let content = serde_json::to_string_pretty(items)?;
    store.write_slot(slot, &content)?;
    tracing::debug!(%slot, count = items.len(), "saved slot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStore;
    use super::*;
    use crate::model::{SentenceEntry, WordEntry};

    fn word(id: &str, created_at: i64) -> WordEntry {
        WordEntry {
            id: id.into(),
            word: format!("word-{}", id),
            translation: "ترجمة".into(),
            definition: "a definition".into(),
            part_of_speech: "noun".into(),
            examples: vec!["An example.".into()],
            notes: "note".into(),
            tags: vec!["common".into()],
            created_at,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let words = vec![word("a", 1), word("b", 2)];
        save_slot(&mut store, Slot::Words, &words).unwrap();

        let loaded: Vec<WordEntry> = load_slot(&store, Slot::Words);
        assert_eq!(loaded, words);
    }

    #[test]
    fn sentence_save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let sentences = vec![
            SentenceEntry {
                id: "s1".into(),
                content: "¿Dónde está la estación?".into(),
                translation: "Where is the station?".into(),
                category: "travel".into(),
                notes: "formal".into(),
                created_at: 20,
            },
            SentenceEntry {
                id: "s2".into(),
                content: "Hola".into(),
                translation: "Hello".into(),
                category: String::new(),
                notes: String::new(),
                created_at: 10,
            },
        ];
        save_slot(&mut store, Slot::Sentences, &sentences).unwrap();

        let loaded: Vec<SentenceEntry> = load_slot(&store, Slot::Sentences);
        assert_eq!(loaded, sentences);
    }

    #[test]
    fn missing_slot_loads_empty() {
        let store = InMemoryStore::new();
        let loaded: Vec<SentenceEntry> = load_slot(&store, Slot::Sentences);
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_slot_loads_empty() {
        let store = InMemoryStore::new().with_raw(Slot::Words, "{not json");
        let loaded: Vec<WordEntry> = load_slot(&store, Slot::Words);
        assert!(loaded.is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let store = InMemoryStore::new().with_raw(Slot::Words, r#"{"id":"a"}"#);
        let loaded: Vec<WordEntry> = load_slot(&store, Slot::Words);
        assert!(loaded.is_empty());

        let store = InMemoryStore::new().with_raw(Slot::Words, r#"[{"word":"no id"}]"#);
        let loaded: Vec<WordEntry> = load_slot(&store, Slot::Words);
        assert!(loaded.is_empty());
    }

    #[test]
    fn slots_are_independent() {
        let mut store = InMemoryStore::new();
        save_slot(&mut store, Slot::Words, &[word("a", 1)]).unwrap();

        let sentences: Vec<SentenceEntry> = load_slot(&store, Slot::Sentences);
        assert!(sentences.is_empty());
    }
}

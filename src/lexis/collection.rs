//! # Collection Store
//!
//! A [`Collection`] owns the in-memory entries of one entity type and mirrors
//! every mutation to its slot before returning. Insertion order is newest
//! first, but nothing downstream relies on it: display order is always
//! derived by the query engine.
//!
//! Persistence is best-effort. A failed write is logged and the in-memory
//! state is kept, so the caller can keep working with what it has.

use crate::confirm::{Confirm, DELETE_SENTENCE_PROMPT, DELETE_WORD_PROMPT};
use crate::error::Result;
use crate::model::{SentenceDraft, SentenceEntry, WordDraft, WordEntry};
use crate::store::{load_slot, save_slot, DataStore, Slot};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Behaviour shared by the two entity types.
pub trait Entry: Clone + Serialize + DeserializeOwned {
    type Draft;

    const SLOT: Slot;
    const NOUN: &'static str;
    const DELETE_PROMPT: &'static str;

    fn id(&self) -> &str;
    fn created_at(&self) -> i64;
    /// Short human label (headword or sentence text).
    fn label(&self) -> &str;
    fn from_draft(draft: Self::Draft) -> Result<Self>;
}

impl Entry for WordEntry {
    type Draft = WordDraft;

    const SLOT: Slot = Slot::Words;
    const NOUN: &'static str = "word";
    const DELETE_PROMPT: &'static str = DELETE_WORD_PROMPT;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }

    fn label(&self) -> &str {
        &self.word
    }

    fn from_draft(draft: WordDraft) -> Result<Self> {
        WordEntry::from_draft(draft)
    }
}

impl Entry for SentenceEntry {
    type Draft = SentenceDraft;

    const SLOT: Slot = Slot::Sentences;
    const NOUN: &'static str = "sentence";
    const DELETE_PROMPT: &'static str = DELETE_SENTENCE_PROMPT;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }

    fn label(&self) -> &str {
        &self.content
    }

    fn from_draft(draft: SentenceDraft) -> Result<Self> {
        SentenceEntry::from_draft(draft)
    }
}

/// Outcome of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion<E> {
    /// The confirmation prompt was declined; nothing changed.
    Declined,
    /// No entry had the requested id; the collection is unchanged.
    Missing,
    Removed(E),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<E: Entry> {
    entries: Vec<E>,
}

impl<E: Entry> Default for Collection<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: Entry> Collection<E> {
    /// Builds the collection from its slot. Corrupt data yields an empty collection.
    pub fn load<S: DataStore + ?Sized>(store: &S) -> Self {
        Self {
            entries: load_slot(store, E::SLOT),
        }
    }

    pub fn from_entries(entries: Vec<E>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Creates an entry from the draft, prepends it and persists.
    pub fn add<S: DataStore + ?Sized>(&mut self, store: &mut S, draft: E::Draft) -> Result<E> {
        let entry = E::from_draft(draft)?;
        self.entries.insert(0, entry.clone());
        tracing::debug!(kind = E::NOUN, id = entry.id(), "entry added");
        self.persist(store);
        Ok(entry)
    }

    /// Removes the entry with `id` once `confirm` accepts the entity's delete prompt.
    pub fn delete<S, C>(&mut self, store: &mut S, id: &str, confirm: &mut C) -> Deletion<E>
    where
        S: DataStore + ?Sized,
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(E::DELETE_PROMPT) {
            return Deletion::Declined;
        }

        let outcome = match self.entries.iter().position(|e| e.id() == id) {
            Some(pos) => Deletion::Removed(self.entries.remove(pos)),
            None => Deletion::Missing,
        };
        self.persist(store);
        outcome
    }

    fn persist<S: DataStore + ?Sized>(&self, store: &mut S) {
        if let Err(e) = save_slot(store, E::SLOT, &self.entries) {
            tracing::error!(slot = %E::SLOT, error = %e, "failed to persist collection");
        }
    }
}

impl Collection<WordEntry> {
    /// Replaces the notes of the word with `id`, leaving every other field untouched.
    pub fn update_note<S: DataStore + ?Sized>(
        &mut self,
        store: &mut S,
        id: &str,
        note: &str,
    ) -> Option<WordEntry> {
        let updated = self.entries.iter_mut().find(|w| w.id == id).map(|w| {
            w.notes = note.to_string();
            w.clone()
        });
        self.persist(store);
        updated
    }
}

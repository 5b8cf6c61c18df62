//! # API Facade
//!
//! [`LexisApi`] is the single entry point for all lexis operations, whatever
//! the UI. It owns the two collections for the lifetime of the session: they
//! are loaded from the store when the API is constructed and every mutation
//! goes through a [`Collection`], which persists before returning.
//!
//! The facade:
//! - **Dispatches** to the command modules
//! - **Normalizes inputs** (selector strings → [`Selector`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and never prompts; confirmation and lookup are
//! supplied by the caller.

use crate::collection::Collection;
use crate::commands;
use crate::confirm::Confirm;
use crate::error::Result;
use crate::index::Selector;
use crate::lookup::WordLookup;
use crate::model::{
    CategoryFilter, SentenceDraft, SentenceEntry, SortOption, WordDraft, WordEntry,
};
use crate::query::{visible, Listing, QueryState};
use crate::store::DataStore;
use std::str::FromStr;

/// Generic over `DataStore`: `LexisApi<FileStore>` in production,
/// `LexisApi<InMemoryStore>` in tests.
pub struct LexisApi<S: DataStore> {
    store: S,
    words: Collection<WordEntry>,
    sentences: Collection<SentenceEntry>,
    paths: commands::LexisPaths,
}

impl<S: DataStore> LexisApi<S> {
    pub fn new(store: S, paths: commands::LexisPaths) -> Self {
        let words = Collection::load(&store);
        let sentences = Collection::load(&store);
        Self {
            store,
            words,
            sentences,
            paths,
        }
    }

    pub fn words(&self) -> &[WordEntry] {
        self.words.entries()
    }

    pub fn sentences(&self) -> &[SentenceEntry] {
        self.sentences.entries()
    }

    pub fn add_word(&mut self, draft: WordDraft) -> Result<commands::CmdResult> {
        commands::add::word(&mut self.store, &mut self.words, draft)
    }

    pub fn add_word_with_lookup<L: WordLookup + ?Sized>(
        &mut self,
        draft: WordDraft,
        lookup: &L,
    ) -> Result<commands::CmdResult> {
        commands::add::word_with_lookup(&mut self.store, &mut self.words, draft, lookup)
    }

    pub fn add_sentence(&mut self, draft: SentenceDraft) -> Result<commands::CmdResult> {
        commands::add::sentence(&mut self.store, &mut self.sentences, draft)
    }

    pub fn list_words(&self, search: &str, sort: SortOption) -> commands::CmdResult {
        commands::list::words(self.words.entries(), search, sort)
    }

    pub fn list_sentences(&self, search: &str, category: &CategoryFilter) -> commands::CmdResult {
        commands::list::sentences(self.sentences.entries(), search, category)
    }

    /// The raw view for a full query state, for clients that keep their own UI state.
    pub fn visible(&self, state: &QueryState) -> Listing<'_> {
        visible(self.words.entries(), self.sentences.entries(), state)
    }

    pub fn view_words<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.words, &selectors)
    }

    pub fn view_sentences<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.sentences, &selectors)
    }

    pub fn delete_words<I: AsRef<str>, C: Confirm + ?Sized>(
        &mut self,
        selectors: &[I],
        confirm: &mut C,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &mut self.words, &selectors, confirm)
    }

    pub fn delete_sentences<I: AsRef<str>, C: Confirm + ?Sized>(
        &mut self,
        selectors: &[I],
        confirm: &mut C,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &mut self.sentences, &selectors, confirm)
    }

    pub fn update_note(&mut self, selector: &str, note: &str) -> Result<commands::CmdResult> {
        let selector = Selector::from_str(selector)?;
        commands::note::run(&mut self.store, &mut self.words, &selector, note)
    }

    pub fn categories(&self) -> commands::CmdResult {
        commands::categories::run(self.sentences.entries())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn slot_paths(&self) -> commands::CmdResult {
        commands::paths::run(&self.store, &self.paths)
    }

    pub fn paths(&self) -> &commands::LexisPaths {
        &self.paths
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<Selector>> {
    inputs
        .iter()
        .map(|s| Selector::from_str(s.as_ref()))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, LexisPaths, ListingInfo, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::AlwaysConfirm;
    use crate::model::Tab;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::{load_slot, Slot};
    use std::path::PathBuf;

    fn paths() -> LexisPaths {
        LexisPaths {
            data_dir: PathBuf::from("/nonexistent/lexis"),
        }
    }

    #[test]
    fn loads_collections_on_construction() {
        let store = StoreFixture::new()
            .with_word("run", 100, &[])
            .with_sentence("hi", "greetings", 1)
            .build();
        let api = LexisApi::new(store, paths());
        assert_eq!(api.words().len(), 1);
        assert_eq!(api.sentences().len(), 1);
    }

    #[test]
    fn corrupt_words_slot_does_not_block_sentences() {
        let store = StoreFixture::new()
            .with_sentence("hi", "greetings", 1)
            .build()
            .with_raw(Slot::Words, "garbage");
        let api = LexisApi::new(store, paths());
        assert!(api.words().is_empty());
        assert_eq!(api.sentences().len(), 1);
    }

    #[test]
    fn end_to_end_word_lifecycle() {
        let mut api = LexisApi::new(InMemoryStore::new(), paths());

        let draft = WordDraft {
            word: "hello".into(),
            translation: "مرحبا".into(),
            definition: "a greeting".into(),
            tags: vec!["common".into()],
            ..WordDraft::default()
        };
        let added = api.add_word(draft).unwrap().affected_words.remove(0);
        assert_eq!(api.words().len(), 1);
        assert!(!added.id.is_empty());

        let persisted: Vec<WordEntry> = load_slot(&api.store, Slot::Words);
        assert_eq!(persisted, vec![added.clone()]);

        let state = QueryState {
            tab: Tab::Words,
            search: "رحب".into(),
            ..QueryState::default()
        };
        assert_eq!(api.visible(&state).len(), 1);

        let result = api.delete_words(&[added.id.as_str()], &mut AlwaysConfirm).unwrap();
        assert_eq!(result.affected_words.len(), 1);
        assert!(api.words().is_empty());

        let persisted: Vec<WordEntry> = load_slot(&api.store, Slot::Words);
        assert!(persisted.is_empty());
        assert_eq!(api.store.raw(Slot::Words), Some("[]"));
    }

    #[test]
    fn update_note_through_index() {
        let store = StoreFixture::new()
            .with_word("run", 100, &[])
            .with_word("walk", 200, &[])
            .build();
        let mut api = LexisApi::new(store, paths());

        api.update_note("2", "past: ran").unwrap();
        let run = api.words().iter().find(|w| w.word == "run").unwrap();
        assert_eq!(run.notes, "past: ran");
    }

    #[test]
    fn rejects_malformed_selector() {
        let mut api = LexisApi::new(InMemoryStore::new(), paths());
        assert!(api.update_note("0", "x").is_err());
    }

    #[test]
    fn categories_follow_sentences() {
        let store = StoreFixture::new()
            .with_sentence("a", "greetings", 1)
            .with_sentence("b", "food", 2)
            .with_sentence("c", "greetings", 3)
            .build();
        let api = LexisApi::new(store, paths());
        assert_eq!(api.categories().categories, vec!["greetings", "food"]);
    }
}

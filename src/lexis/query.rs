//! # Query Engine
//!
//! Pure functions deriving the visible view from a collection plus the current
//! search text, sort option (words) or category filter (sentences). Nothing
//! here mutates a collection; callers recompute the view after every change.

use crate::model::{CategoryFilter, SentenceEntry, SortOption, Tab, WordEntry};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Everything the view depends on besides the collections themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub tab: Tab,
    pub search: String,
    pub sort: SortOption,
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    Words(Vec<&'a WordEntry>),
    Sentences(Vec<&'a SentenceEntry>),
}

impl Listing<'_> {
    pub fn len(&self) -> usize {
        match self {
            Listing::Words(w) => w.len(),
            Listing::Sentences(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derives the ordered entries to show for the active tab.
pub fn visible<'a>(
    words: &'a [WordEntry],
    sentences: &'a [SentenceEntry],
    state: &QueryState,
) -> Listing<'a> {
    match state.tab {
        Tab::Words => Listing::Words(filter_words(words, &state.search, state.sort)),
        Tab::Sentences => Listing::Sentences(filter_sentences(
            sentences,
            &state.search,
            &state.category,
        )),
    }
}

/// True if `needle` (already lowercased) occurs in the word, translation,
/// definition or any tag. An empty needle matches everything.
pub fn word_matches(word: &WordEntry, needle: &str) -> bool {
    contains_folded(&word.word, needle)
        || contains_folded(&word.translation, needle)
        || contains_folded(&word.definition, needle)
        || word.tags.iter().any(|t| contains_folded(t, needle))
}

pub fn sentence_matches(sentence: &SentenceEntry, needle: &str) -> bool {
    contains_folded(&sentence.content, needle) || contains_folded(&sentence.translation, needle)
}

pub fn filter_words<'a>(
    words: &'a [WordEntry],
    search: &str,
    sort: SortOption,
) -> Vec<&'a WordEntry> {
    let needle = search.to_lowercase();
    let mut result: Vec<&WordEntry> = words
        .iter()
        .filter(|w| word_matches(w, &needle))
        .collect();

    match sort {
        SortOption::Newest => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Oldest => result.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOption::Alphabetical => result.sort_by(|a, b| compare_alphabetical(&a.word, &b.word)),
    }
    result
}

/// Sentences are always shown newest first; there is no sort option for them.
pub fn filter_sentences<'a>(
    sentences: &'a [SentenceEntry],
    search: &str,
    category: &CategoryFilter,
) -> Vec<&'a SentenceEntry> {
    let needle = search.to_lowercase();
    let mut result: Vec<&SentenceEntry> = sentences
        .iter()
        .filter(|s| sentence_matches(s, &needle) && category.accepts(&s.category))
        .collect();
    result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    result
}

/// Distinct sentence categories in first-seen order.
pub fn sentence_categories(sentences: &[SentenceEntry]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for sentence in sentences {
        if !categories.iter().any(|c| c == &sentence.category) {
            categories.push(sentence.category.clone());
        }
    }
    categories
}

/// Dictionary ordering: letters compare without accents or case first, so
/// "árbol" sorts between "apple" and "banana". Ties fall back to the accented
/// lowercase form ("resume" before "résumé"), then lowercase before uppercase
/// ("apple" before "Apple").
pub fn compare_alphabetical(a: &str, b: &str) -> Ordering {
    let (a_lower, b_lower) = (a.to_lowercase(), b.to_lowercase());
    base_letters(&a_lower)
        .cmp(&base_letters(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| b.cmp(a))
}

/// Canonical decomposition with combining marks dropped.
fn base_letters(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

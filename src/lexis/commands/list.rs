use crate::commands::{CmdResult, ListingInfo};
use crate::index::with_indexes;
use crate::model::{CategoryFilter, SentenceEntry, SortOption, Tab, WordEntry};
use crate::query::{filter_sentences, filter_words, sentence_categories};

pub fn words(all: &[WordEntry], search: &str, sort: SortOption) -> CmdResult {
    let view = filter_words(all, search, sort);
    let mut result = CmdResult::default().with_listing(ListingInfo {
        tab: Tab::Words,
        total: all.len(),
        search: search.to_string(),
        category: CategoryFilter::All,
    });
    result.listed_words = with_indexes(all, view);
    result
}

/// Lists sentences newest first, along with the category bar for the filter.
pub fn sentences(all: &[SentenceEntry], search: &str, category: &CategoryFilter) -> CmdResult {
    let view = filter_sentences(all, search, category);
    let mut result = CmdResult::default()
        .with_listing(ListingInfo {
            tab: Tab::Sentences,
            total: all.len(),
            search: search.to_string(),
            category: category.clone(),
        })
        .with_categories(sentence_categories(all));
    result.listed_sentences = with_indexes(all, view);
    result
}

use crate::collection::Entry;
use crate::config::LexisConfig;
use crate::index::DisplayEntry;
use crate::model::{CategoryFilter, SentenceEntry, Tab, WordEntry};
use std::path::PathBuf;

pub mod add;
pub mod categories;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod note;
pub mod paths;
pub mod view;

#[derive(Debug, Clone)]
pub struct LexisPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a listing was computed from, so a client can tell an empty
/// collection apart from a search with no results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingInfo {
    pub tab: Tab,
    pub total: usize,
    pub search: String,
    pub category: CategoryFilter,
}

impl ListingInfo {
    pub fn is_collection_empty(&self) -> bool {
        self.total == 0
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_words: Vec<WordEntry>,
    pub affected_sentences: Vec<SentenceEntry>,
    pub listed_words: Vec<DisplayEntry<WordEntry>>,
    pub listed_sentences: Vec<DisplayEntry<SentenceEntry>>,
    pub listing: Option<ListingInfo>,
    pub categories: Vec<String>,
    pub paths: Vec<PathBuf>,
    pub config: Option<LexisConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listing(mut self, listing: ListingInfo) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: LexisConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Routes entries of either type into the matching `CmdResult` fields.
pub trait ResultEntry: Entry {
    fn affected(result: &mut CmdResult) -> &mut Vec<Self>;
    fn listed(result: &mut CmdResult) -> &mut Vec<DisplayEntry<Self>>;
}

impl ResultEntry for WordEntry {
    fn affected(result: &mut CmdResult) -> &mut Vec<Self> {
        &mut result.affected_words
    }

    fn listed(result: &mut CmdResult) -> &mut Vec<DisplayEntry<Self>> {
        &mut result.listed_words
    }
}

impl ResultEntry for SentenceEntry {
    fn affected(result: &mut CmdResult) -> &mut Vec<Self> {
        &mut result.affected_sentences
    }

    fn listed(result: &mut CmdResult) -> &mut Vec<DisplayEntry<Self>> {
        &mut result.listed_sentences
    }
}

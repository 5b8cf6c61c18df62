use crate::error::{LexisError, Result};
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Sentinel category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "ALL";

/// A vocabulary record.
///
/// Field names on disk follow the camelCase layout of the persisted slots
/// (`partOfSpeech`, `createdAt`). Optional text and list fields may be
/// absent or `null` in older data; they are normalized to empty values
/// while deserializing so that no read site has to check for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub id: String,
    pub word: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub translation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub definition: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub part_of_speech: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub examples: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// A phrase record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceEntry {
    pub id: String,
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub translation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    pub created_at: i64,
}

/// User-supplied fields for a new word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDraft {
    pub word: String,
    pub translation: String,
    pub definition: String,
    pub part_of_speech: String,
    pub examples: Vec<String>,
    pub notes: String,
    pub tags: Vec<String>,
}

impl WordDraft {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Self::default()
        }
    }
}

/// User-supplied fields for a new sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceDraft {
    pub content: String,
    pub translation: String,
    pub category: String,
    pub notes: String,
}

/// The bundle a word lookup returns to pre-fill a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiResponse {
    pub translation: String,
    pub definition: String,
    pub part_of_speech: String,
    pub examples: Vec<String>,
    pub tags: Vec<String>,
}

impl WordEntry {
    /// Builds a new entry from a draft, assigning a fresh id and the current time.
    pub fn from_draft(draft: WordDraft) -> Result<Self> {
        let word = draft.word.trim().to_string();
        if word.is_empty() {
            return Err(LexisError::Api("Word cannot be empty".into()));
        }

        Ok(Self {
            id: new_id(),
            word,
            translation: draft.translation.trim().to_string(),
            definition: draft.definition.trim().to_string(),
            part_of_speech: draft.part_of_speech.trim().to_string(),
            examples: trimmed_list(draft.examples),
            notes: draft.notes,
            tags: trimmed_list(draft.tags),
            created_at: now_millis(),
        })
    }
}

impl SentenceEntry {
    /// Builds a new entry from a draft, assigning a fresh id and the current time.
    pub fn from_draft(draft: SentenceDraft) -> Result<Self> {
        let content = draft.content.trim().to_string();
        if content.is_empty() {
            return Err(LexisError::Api("Sentence cannot be empty".into()));
        }
        let translation = draft.translation.trim().to_string();
        if translation.is_empty() {
            return Err(LexisError::Api("Translation cannot be empty".into()));
        }

        Ok(Self {
            id: new_id(),
            content,
            translation,
            category: draft.category.trim().to_string(),
            notes: draft.notes,
            created_at: now_millis(),
        })
    }
}

/// Ordering applied to the words view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOption {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::Alphabetical => "alphabetical",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "newest" | "new" => Ok(SortOption::Newest),
            "oldest" | "old" => Ok(SortOption::Oldest),
            "alphabetical" | "alpha" | "az" => Ok(SortOption::Alphabetical),
            other => Err(LexisError::Api(format!(
                "Unknown sort option: {} (expected newest, oldest or alphabetical)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Words,
    Sentences,
}

/// Category restriction for the sentences view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s.to_string())
        }
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn trimmed_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

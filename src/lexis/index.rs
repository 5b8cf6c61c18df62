//! # Display Indexes
//!
//! Entries are identified by UUID strings, which are unpleasant to type. The
//! CLI instead refers to entries by a 1-based **display index**: the position
//! of the entry in the canonical newest-first ordering of its collection.
//!
//! The index is independent of any search or sort applied to a listing, so
//! `lexis word list --sort alphabetical` still shows each word with the same
//! number that `lexis word delete` accepts.
//!
//! A selector that is not a positive integer is matched against entry ids,
//! accepting any unique prefix.

use crate::collection::Entry;
use crate::error::{LexisError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Index(usize),
    Id(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(i) => write!(f, "{}", i),
            Selector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for Selector {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LexisError::Api("Empty selector".into()));
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<usize>() {
                Ok(0) | Err(_) => Err(LexisError::Api(format!("Invalid index: {}", s))),
                Ok(n) => Ok(Selector::Index(n)),
            };
        }
        Ok(Selector::Id(s.to_string()))
    }
}

/// An entry paired with its display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry<E> {
    pub index: usize,
    pub entry: E,
}

/// Canonical newest-first ordering, ties kept in collection order.
pub fn canonical_order<E: Entry>(entries: &[E]) -> Vec<&E> {
    let mut ordered: Vec<&E> = entries.iter().collect();
    ordered.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    ordered
}

/// Maps entry id to display index.
pub fn index_map<E: Entry>(entries: &[E]) -> HashMap<String, usize> {
    canonical_order(entries)
        .into_iter()
        .enumerate()
        .map(|(i, e)| (e.id().to_string(), i + 1))
        .collect()
}

/// Attaches display indexes to an already filtered and sorted view.
pub fn with_indexes<E: Entry>(all: &[E], view: Vec<&E>) -> Vec<DisplayEntry<E>> {
    let indexes = index_map(all);
    view.into_iter()
        .map(|entry| DisplayEntry {
            index: indexes.get(entry.id()).copied().unwrap_or_default(),
            entry: entry.clone(),
        })
        .collect()
}

/// Resolves a selector against a collection.
///
/// An index outside the collection or an ambiguous id prefix is an error; an
/// id that matches nothing resolves to `None`.
pub fn resolve<'a, E: Entry>(entries: &'a [E], selector: &Selector) -> Result<Option<&'a E>> {
    match selector {
        Selector::Index(n) => n
            .checked_sub(1)
            .and_then(|i| canonical_order(entries).get(i).copied())
            .map(Some)
            .ok_or_else(|| {
                LexisError::Api(format!("Index {} not found ({} {}s)", n, entries.len(), E::NOUN))
            }),
        Selector::Id(id) => {
            if let Some(exact) = entries.iter().find(|e| e.id() == id) {
                return Ok(Some(exact));
            }
            let mut candidates = entries.iter().filter(|e| e.id().starts_with(id.as_str()));
            match (candidates.next(), candidates.next()) {
                (Some(only), None) => Ok(Some(only)),
                (None, _) => Ok(None),
                (Some(_), Some(_)) => Err(LexisError::Api(format!(
                    "Id prefix {} matches more than one {}",
                    id,
                    E::NOUN
                ))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordEntry;

    fn word(id: &str, created_at: i64) -> WordEntry {
        WordEntry {
            id: id.into(),
            word: id.into(),
            translation: String::new(),
            definition: String::new(),
            part_of_speech: String::new(),
            examples: Vec::new(),
            notes: String::new(),
            tags: Vec::new(),
            created_at,
        }
    }

    #[test]
    fn parses_selectors() {
        assert_eq!("3".parse::<Selector>().unwrap(), Selector::Index(3));
        assert_eq!(
            "ab12".parse::<Selector>().unwrap(),
            Selector::Id("ab12".into())
        );
        assert!("0".parse::<Selector>().is_err());
        assert!("".parse::<Selector>().is_err());
    }

    #[test]
    fn index_one_is_newest() {
        let words = vec![word("old", 1), word("new", 3), word("mid", 2)];
        let found = resolve(&words, &Selector::Index(1)).unwrap().unwrap();
        assert_eq!(found.id, "new");
        assert!(resolve(&words, &Selector::Index(4)).is_err());
    }

    #[test]
    fn resolves_unique_id_prefix() {
        let words = vec![word("abc-1", 1), word("abd-2", 2)];
        assert_eq!(
            resolve(&words, &Selector::Id("abc".into())).unwrap().unwrap().id,
            "abc-1"
        );
        assert!(resolve(&words, &Selector::Id("ab".into())).is_err());
        assert!(resolve(&words, &Selector::Id("zzz".into())).unwrap().is_none());
    }

    #[test]
    fn indexes_survive_resorting() {
        let words = vec![word("b", 1), word("a", 2)];
        let view: Vec<&WordEntry> = vec![&words[0], &words[1]];
        let indexed = with_indexes(&words, view);
        assert_eq!(indexed[0].index, 2);
        assert_eq!(indexed[1].index, 1);
    }
}

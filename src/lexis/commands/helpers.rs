use crate::collection::Entry;
use crate::error::Result;
use crate::index::{resolve, Selector};

/// A selector together with the id it resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub selector: Selector,
    pub id: Option<String>,
}

/// Resolves every selector up front so that a bad index fails before anything
/// is mutated. Selectors naming the same entry twice are collapsed.
pub fn resolve_selectors<E: Entry>(entries: &[E], selectors: &[Selector]) -> Result<Vec<Resolved>> {
    let mut resolved: Vec<Resolved> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let id = resolve(entries, selector)?.map(|e| e.id().to_string());
        let duplicate = id.is_some() && resolved.iter().any(|r| r.id == id);
        if !duplicate {
            resolved.push(Resolved {
                selector: selector.clone(),
                id,
            });
        }
    }
    Ok(resolved)
}

/// Shortens long labels for one-line messages.
pub fn short_label(label: &str) -> String {
    const MAX_CHARS: usize = 40;
    if label.chars().count() <= MAX_CHARS {
        return label.to_string();
    }
    let mut short: String = label.chars().take(MAX_CHARS - 1).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use crate::model::WordEntry;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn collapses_duplicate_targets() {
        let store = StoreFixture::new()
            .with_word("run", 100, &[])
            .with_word("walk", 200, &[])
            .build();
        let words: Collection<WordEntry> = Collection::load(&store);

        let selectors = vec![Selector::Index(1), Selector::Id("w-200".into())];
        let resolved = resolve_selectors(words.entries(), &selectors).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id.as_deref(), Some("w-200"));
    }

    #[test]
    fn keeps_unmatched_ids() {
        let words: Vec<WordEntry> = Vec::new();
        let resolved = resolve_selectors(&words, &[Selector::Id("gone".into())]).unwrap();
        assert_eq!(resolved[0].id, None);
    }

    #[test]
    fn short_label_truncates() {
        let long = "x".repeat(60);
        assert_eq!(short_label(&long).chars().count(), 40);
        assert_eq!(short_label("short"), "short");
    }
}

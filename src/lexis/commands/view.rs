use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult, ResultEntry};
use crate::error::Result;
use crate::index::{index_map, resolve, DisplayEntry, Selector};

pub fn run<E: ResultEntry>(
    collection: &Collection<E>,
    selectors: &[Selector],
) -> Result<CmdResult> {
    let indexes = index_map(collection.entries());
    let mut result = CmdResult::default();

    for selector in selectors {
        match resolve(collection.entries(), selector)? {
            Some(entry) => {
                let index = indexes.get(entry.id()).copied().unwrap_or_default();
                E::listed(&mut result).push(DisplayEntry {
                    index,
                    entry: entry.clone(),
                });
            }
            None => result.add_message(CmdMessage::info(format!(
                "No {} matches {}",
                E::NOUN,
                selector
            ))),
        }
    }

    Ok(result)
}

use crate::collection::{Collection, Deletion};
use crate::commands::{CmdMessage, CmdResult, ResultEntry};
use crate::confirm::Confirm;
use crate::error::Result;
use crate::index::Selector;
use crate::store::DataStore;

use super::helpers::{resolve_selectors, short_label};

/// Deletes the selected entries, asking `confirm` once per entry.
pub fn run<E, S, C>(
    store: &mut S,
    collection: &mut Collection<E>,
    selectors: &[Selector],
    confirm: &mut C,
) -> Result<CmdResult>
where
    E: ResultEntry,
    S: DataStore,
    C: Confirm + ?Sized,
{
    let resolved = resolve_selectors(collection.entries(), selectors)?;
    let mut result = CmdResult::default();

    for target in resolved {
        let Some(id) = target.id else {
            result.add_message(CmdMessage::info(format!(
                "No {} matches {}",
                E::NOUN,
                target.selector
            )));
            continue;
        };

        match collection.delete(store, &id, confirm) {
            Deletion::Removed(entry) => {
                result.add_message(CmdMessage::success(format!(
                    "Deleted {} ({}): {}",
                    E::NOUN,
                    target.selector,
                    short_label(entry.label())
                )));
                E::affected(&mut result).push(entry);
            }
            Deletion::Declined => {
                result.add_message(CmdMessage::info(format!(
                    "Kept {} {}",
                    E::NOUN,
                    target.selector
                )));
            }
            Deletion::Missing => {
                result.add_message(CmdMessage::info(format!(
                    "No {} matches {}",
                    E::NOUN,
                    target.selector
                )));
            }
        }
    }

    Ok(result)
}

use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve, Selector};
use crate::model::WordEntry;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut S,
    words: &mut Collection<WordEntry>,
    selector: &Selector,
    note: &str,
) -> Result<CmdResult> {
    let id = resolve(words.entries(), selector)?.map(|w| w.id.clone());
    let mut result = CmdResult::default();

    let updated = id.and_then(|id| words.update_note(store, &id, note));
    match updated {
        Some(word) => {
            let message = if note.is_empty() {
                format!("Note cleared ({}): {}", selector, word.word)
            } else {
                format!("Note updated ({}): {}", selector, word.word)
            };
            result.add_message(CmdMessage::success(message));
            result.affected_words.push(word);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No word matches {}", selector)));
        }
    }

    Ok(result)
}

use crate::commands::CmdResult;
use crate::model::SentenceEntry;
use crate::query::sentence_categories;

pub fn run(sentences: &[SentenceEntry]) -> CmdResult {
    CmdResult::default().with_categories(sentence_categories(sentences))
}

//! Output templates.
//!
//! Templates live in `templates/` as standalone files and are embedded here. They are minijinja
//! templates rendered through [`super::render`], which registers the `style` filter.
//!
//! Line breaks are explicit: each template ends its own lines, and block tags strip the
//! whitespace around them so loops and conditionals never leak blank lines.
pub const WORD_LIST_TEMPLATE: &str = include_str!("templates/word_list.tmp");
pub const FULL_WORD_TEMPLATE: &str = include_str!("templates/full_word.tmp");
pub const SENTENCE_LIST_TEMPLATE: &str = include_str!("templates/sentence_list.tmp");
pub const FULL_SENTENCE_TEMPLATE: &str = include_str!("templates/full_sentence.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");

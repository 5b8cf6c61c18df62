//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Layout (widths, truncation, padding) is computed
//! here because it needs Unicode-aware measuring; the templates in `templates/` only arrange the
//! pieces and pick semantic styles through the `style` filter.
//!
//! Every public `render_*` function has an `_internal` twin taking `use_color: Option<bool>`:
//! `None` follows terminal detection, `Some(_)` forces the choice (tests use `Some(false)`).

use super::styles::{names, LEXIS_THEME};
use super::templates::{
    FULL_SENTENCE_TEMPLATE, FULL_WORD_TEMPLATE, MESSAGES_TEMPLATE, SENTENCE_LIST_TEMPLATE,
    TEXT_LIST_TEMPLATE, WORD_LIST_TEMPLATE,
};
use chrono::{DateTime, Utc};
use lexis::api::{CmdMessage, ListingInfo, MessageLevel};
use lexis::index::DisplayEntry;
use lexis::model::{CategoryFilter, SentenceEntry, WordEntry, ALL_CATEGORIES};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const LEFT_PAD: &str = "  ";
const CATEGORY_SEPARATOR: &str = "  ";

pub const EMPTY_WORDS_MESSAGE: &str =
    "Your dictionary is empty. Add a first word with `lexis word add <WORD>`.";
pub const EMPTY_SENTENCES_MESSAGE: &str =
    "No sentences saved yet. Add one with `lexis sentence add <TEXT> -t <TRANSLATION>`.";

#[derive(Serialize)]
struct WordLineData {
    index: String,
    word: String,
    pos: String,
    translation: String,
    padding: String,
    time_ago: String,
}

#[derive(Serialize)]
struct WordListData {
    words: Vec<WordLineData>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct SentenceLineData {
    index: String,
    content: String,
    padding: String,
    time_ago: String,
    indent: String,
    translation: String,
    category: String,
}

#[derive(Serialize)]
struct CategoryData {
    name: String,
    style: &'static str,
}

#[derive(Serialize)]
struct SentenceListData {
    show_bar: bool,
    categories: Vec<CategoryData>,
    separator: &'static str,
    sentences: Vec<SentenceLineData>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct FullWordEntry {
    index: String,
    id: String,
    word: String,
    pos: String,
    translation: String,
    definition: String,
    examples: Vec<String>,
    tags: String,
    notes: String,
    added: String,
}

#[derive(Serialize)]
struct FullWordData {
    words: Vec<FullWordEntry>,
}

#[derive(Serialize)]
struct FullSentenceEntry {
    index: String,
    id: String,
    content: String,
    translation: String,
    category: String,
    notes: String,
    added: String,
}

#[derive(Serialize)]
struct FullSentenceData {
    sentences: Vec<FullSentenceEntry>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders a template with the `style` filter bound to the lexis theme.
fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    let use_color = use_color.unwrap_or_else(console::colors_enabled);
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        LEXIS_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.render_str(template, data)
}

pub fn render_word_list(
    words: &[DisplayEntry<WordEntry>],
    listing: Option<&ListingInfo>,
) -> String {
    render_word_list_internal(words, listing, None)
}

fn render_word_list_internal(
    words: &[DisplayEntry<WordEntry>],
    listing: Option<&ListingInfo>,
    use_color: Option<bool>,
) -> String {
    let empty_message = empty_message(listing, EMPTY_WORDS_MESSAGE);
    let index_width = index_column_width(words.iter().map(|d| d.index));

    let lines = words
        .iter()
        .map(|dw| {
            let index = format!("{}{:>width$}. ", LEFT_PAD, dw.index, width = index_width);
            let fixed = index.width() + TIME_WIDTH + 2;
            let mut available = LINE_WIDTH.saturating_sub(fixed);

            let word = fit(&single_line(&dw.entry.word), &mut available);
            let pos = if dw.entry.part_of_speech.is_empty() {
                String::new()
            } else {
                fit(
                    &format!(" {}", single_line(&dw.entry.part_of_speech)),
                    &mut available,
                )
            };
            let translation = if dw.entry.translation.is_empty() {
                String::new()
            } else {
                fit(
                    &format!("  {}", single_line(&dw.entry.translation)),
                    &mut available,
                )
            };

            WordLineData {
                index,
                word,
                pos,
                translation,
                padding: " ".repeat(available + 2),
                time_ago: format_time_ago(dw.entry.created_at),
            }
        })
        .collect::<Vec<_>>();

    let data = WordListData {
        empty: lines.is_empty(),
        words: lines,
        empty_message,
    };

    render_template(WORD_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_sentence_list(
    sentences: &[DisplayEntry<SentenceEntry>],
    categories: &[String],
    listing: Option<&ListingInfo>,
) -> String {
    render_sentence_list_internal(sentences, categories, listing, None)
}

fn render_sentence_list_internal(
    sentences: &[DisplayEntry<SentenceEntry>],
    categories: &[String],
    listing: Option<&ListingInfo>,
    use_color: Option<bool>,
) -> String {
    let active = listing.map(|l| l.category.clone()).unwrap_or_default();
    let index_width = index_column_width(sentences.iter().map(|d| d.index));

    let bar = std::iter::once(ALL_CATEGORIES.to_string())
        .chain(categories.iter().cloned())
        .map(|name| {
            let is_active = CategoryFilter::from(name.as_str()) == active;
            CategoryData {
                name: if name.is_empty() {
                    "(none)".to_string()
                } else {
                    name
                },
                style: if is_active {
                    names::CATEGORY_ACTIVE
                } else {
                    names::CATEGORY
                },
            }
        })
        .collect::<Vec<_>>();

    let lines = sentences
        .iter()
        .map(|ds| {
            let index = format!("{}{:>width$}. ", LEFT_PAD, ds.index, width = index_width);
            let indent = " ".repeat(index.width());
            let mut available = LINE_WIDTH.saturating_sub(index.width() + TIME_WIDTH + 2);
            let content = fit(&single_line(&ds.entry.content), &mut available);

            let mut second = LINE_WIDTH.saturating_sub(indent.width());
            let translation = fit(&single_line(&ds.entry.translation), &mut second);
            let category = if matches!(active, CategoryFilter::All) && !ds.entry.category.is_empty()
            {
                let mut rest = second.saturating_sub(1);
                fit(&format!("[{}]", ds.entry.category), &mut rest)
            } else {
                String::new()
            };

            SentenceLineData {
                index,
                content,
                padding: " ".repeat(available + 2),
                time_ago: format_time_ago(ds.entry.created_at),
                indent,
                translation,
                category,
            }
        })
        .collect::<Vec<_>>();

    let data = SentenceListData {
        show_bar: !categories.is_empty(),
        categories: bar,
        separator: CATEGORY_SEPARATOR,
        empty: lines.is_empty(),
        sentences: lines,
        empty_message: empty_message(listing, EMPTY_SENTENCES_MESSAGE),
    };

    render_template(SENTENCE_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_full_words(words: &[DisplayEntry<WordEntry>]) -> String {
    render_full_words_internal(words, None)
}

fn render_full_words_internal(
    words: &[DisplayEntry<WordEntry>],
    use_color: Option<bool>,
) -> String {
    let words = words
        .iter()
        .map(|dw| {
            let w = &dw.entry;
            FullWordEntry {
                index: format!("{}.", dw.index),
                id: w.id.clone(),
                word: w.word.clone(),
                pos: w.part_of_speech.clone(),
                translation: w.translation.clone(),
                definition: w.definition.clone(),
                examples: w.examples.clone(),
                tags: w
                    .tags
                    .iter()
                    .map(|t| format!("#{}", t))
                    .collect::<Vec<_>>()
                    .join(" "),
                notes: w.notes.clone(),
                added: format_timestamp(w.created_at),
            }
        })
        .collect();

    render_template(FULL_WORD_TEMPLATE, &FullWordData { words }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_full_sentences(sentences: &[DisplayEntry<SentenceEntry>]) -> String {
    render_full_sentences_internal(sentences, None)
}

fn render_full_sentences_internal(
    sentences: &[DisplayEntry<SentenceEntry>],
    use_color: Option<bool>,
) -> String {
    let sentences = sentences
        .iter()
        .map(|ds| {
            let s = &ds.entry;
            FullSentenceEntry {
                index: format!("{}.", ds.index),
                id: s.id.clone(),
                content: s.content.clone(),
                translation: s.translation.clone(),
                category: s.category.clone(),
                notes: s.notes.clone(),
                added: format_timestamp(s.created_at),
            }
        })
        .collect();

    render_template(
        FULL_SENTENCE_TEMPLATE,
        &FullSentenceData { sentences },
        use_color,
    )
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_internal(lines, empty_message, None)
}

fn render_text_list_internal(
    lines: &[String],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout using the template system.
pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Empty collection and empty result are different situations and get different text.
fn empty_message(listing: Option<&ListingInfo>, collection_empty: &str) -> String {
    match listing {
        None => collection_empty.to_string(),
        Some(info) if info.is_collection_empty() => collection_empty.to_string(),
        Some(info) if !info.search.trim().is_empty() => {
            format!("No results match \"{}\"", info.search.trim())
        }
        Some(info) => match &info.category {
            CategoryFilter::Named(name) => format!("No sentences in category \"{}\"", name),
            CategoryFilter::All => collection_empty.to_string(),
        },
    }
}

fn index_column_width(indexes: impl Iterator<Item = usize>) -> usize {
    indexes.max().unwrap_or(1).to_string().len()
}

/// Truncates `s` to the remaining width and charges the used width against it.
fn fit(s: &str, available: &mut usize) -> String {
    let shown = truncate_to_width(s, *available);
    *available = available.saturating_sub(shown.width());
    shown
}

fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    if max_width > 0 {
        result.push('…');
    }
    result
}

fn to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default()
}

fn format_timestamp(millis: i64) -> String {
    to_datetime(millis).format("%Y-%m-%d %H:%M").to_string()
}

fn format_time_ago(millis: i64) -> String {
    let duration = Utc::now().signed_duration_since(to_datetime(millis));

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    // Left-pad the unit so "ago" lines up with "seconds ago"
    let time_str = time_str
        .replace("hours ago", "  hours ago")
        .replace("hour ago", "   hour ago")
        .replace("days ago", "   days ago")
        .replace("day ago", "    day ago")
        .replace("weeks ago", "  weeks ago")
        .replace("week ago", "   week ago")
        .replace("months ago", " months ago")
        .replace("month ago", "  month ago")
        .replace("years ago", "  years ago")
        .replace("year ago", "   year ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis::model::{now_millis, Tab};

    fn word(word: &str, translation: &str) -> WordEntry {
        WordEntry {
            id: format!("id-{}", word),
            word: word.to_string(),
            translation: translation.to_string(),
            definition: String::new(),
            part_of_speech: String::new(),
            examples: vec![],
            notes: String::new(),
            tags: vec![],
            created_at: now_millis(),
        }
    }

    fn sentence(content: &str, category: &str) -> SentenceEntry {
        SentenceEntry {
            id: format!("id-{}", content),
            content: content.to_string(),
            translation: format!("{} (translated)", content),
            category: category.to_string(),
            notes: String::new(),
            created_at: now_millis(),
        }
    }

    fn listing(tab: Tab, total: usize, search: &str, category: CategoryFilter) -> ListingInfo {
        ListingInfo {
            tab,
            total,
            search: search.to_string(),
            category,
        }
    }

    #[test]
    fn empty_dictionary_shows_empty_state() {
        let info = listing(Tab::Words, 0, "", CategoryFilter::All);
        let output = render_word_list_internal(&[], Some(&info), Some(false));
        assert_eq!(output.trim(), EMPTY_WORDS_MESSAGE);
    }

    #[test]
    fn search_without_hits_shows_no_results() {
        let info = listing(Tab::Words, 3, "xyz", CategoryFilter::All);
        let output = render_word_list_internal(&[], Some(&info), Some(false));
        assert_eq!(output.trim(), "No results match \"xyz\"");
    }

    #[test]
    fn word_line_has_index_word_and_translation() {
        let entries = vec![
            DisplayEntry {
                index: 1,
                entry: word("casa", "house"),
            },
            DisplayEntry {
                index: 2,
                entry: word("perro", "dog"),
            },
        ];
        let output = render_word_list_internal(&entries, None, Some(false));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. casa  house"));
        assert!(lines[1].starts_with("  2. perro  dog"));
        assert!(lines[0].width() <= LINE_WIDTH);
    }

    #[test]
    fn multi_line_translation_stays_on_one_line() {
        let entries = vec![DisplayEntry {
            index: 1,
            entry: word("banco", "bank\nbench"),
        }];
        let output = render_word_list_internal(&entries, None, Some(false));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("  1. banco  bank bench"));
    }

    #[test]
    fn long_words_are_truncated_to_line_width() {
        let long = "x".repeat(200);
        let entries = vec![DisplayEntry {
            index: 1,
            entry: word(&long, "y"),
        }];
        let output = render_word_list_internal(&entries, None, Some(false));
        let line = output.lines().next().unwrap();

        assert!(line.contains('…'));
        assert!(line.width() <= LINE_WIDTH);
    }

    #[test]
    fn sentence_list_shows_category_bar_and_translation() {
        let entries = vec![DisplayEntry {
            index: 1,
            entry: sentence("Hola", "greetings"),
        }];
        let categories = vec!["greetings".to_string(), "travel".to_string()];
        let output = render_sentence_list_internal(&entries, &categories, None, Some(false));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "ALL  greetings  travel");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("  1. Hola"));
        assert!(lines[3].contains("Hola (translated) [greetings]"));
    }

    #[test]
    fn filtered_sentence_list_omits_category_tag() {
        let entries = vec![DisplayEntry {
            index: 1,
            entry: sentence("Hola", "greetings"),
        }];
        let categories = vec!["greetings".to_string()];
        let info = listing(
            Tab::Sentences,
            1,
            "",
            CategoryFilter::Named("greetings".into()),
        );
        let output =
            render_sentence_list_internal(&entries, &categories, Some(&info), Some(false));
        assert!(!output.contains("[greetings]"));
    }

    #[test]
    fn empty_category_reports_category() {
        let info = listing(Tab::Sentences, 2, "", CategoryFilter::Named("food".into()));
        let output = render_sentence_list_internal(&[], &[], Some(&info), Some(false));
        assert_eq!(output.trim(), "No sentences in category \"food\"");
    }

    #[test]
    fn full_word_lists_every_filled_field() {
        let mut w = word("run", "correr");
        w.part_of_speech = "verb".into();
        w.examples = vec!["I run.".into(), "She runs.".into()];
        w.tags = vec!["sport".into()];
        let output = render_full_words_internal(
            &[DisplayEntry { index: 1, entry: w }],
            Some(false),
        );

        assert!(output.starts_with("1. run verb\n"));
        assert!(output.contains("Translation: correr\n"));
        assert!(output.contains("  - I run.\n  - She runs.\n"));
        assert!(output.contains("Tags: #sport\n"));
        assert!(!output.contains("Definition:"));
        assert!(!output.contains("Notes:"));
    }

    #[test]
    fn full_sentence_shows_category() {
        let output = render_full_sentences_internal(
            &[DisplayEntry {
                index: 2,
                entry: sentence("Adiós", "farewell"),
            }],
            Some(false),
        );
        assert!(output.starts_with("2. Adiós\n"));
        assert!(output.contains("Category: farewell\n"));
    }

    #[test]
    fn text_list_falls_back_to_empty_message() {
        assert_eq!(
            render_text_list_internal(&[], "Nothing here.", Some(false)),
            "Nothing here.\n"
        );
        assert_eq!(
            render_text_list_internal(&["a".into(), "b".into()], "x", Some(false)),
            "a\nb\n"
        );
    }

    #[test]
    fn messages_render_one_per_line() {
        let output = render_messages_internal(
            &[CmdMessage::success("Saved"), CmdMessage::warning("Careful")],
            Some(false),
        );
        assert_eq!(output, "Saved\nCareful\n");
    }

    #[test]
    fn truncation_respects_wide_characters() {
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
        assert_eq!(truncate_to_width("日本語です", 6), "日本…");
    }
}

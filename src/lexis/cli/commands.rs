use super::render::{
    print_messages, render_full_sentences, render_full_words, render_sentence_list,
    render_text_list, render_word_list,
};
use super::setup::{AddWordArgs, Cli, Commands, SentenceCommands, WordCommands};
use clap::Parser;
use directories::ProjectDirs;
use lexis::api::{CmdMessage, ConfigAction, LexisApi, LexisPaths};
use lexis::config::LexisConfig;
use lexis::confirm::{AlwaysConfirm, Confirm};
use lexis::error::{LexisError, Result};
use lexis::lookup::{GlossaryLookup, NoLookup};
use lexis::model::{CategoryFilter, SentenceDraft, SortOption, WordDraft};
use lexis::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Overrides the data directory (used by tests and portable installs).
pub const HOME_ENV: &str = "LEXIS_HOME";
/// Log filter directives, e.g. `LEXIS_LOG=lexis=debug`.
pub const LOG_ENV: &str = "LEXIS_LOG";

struct AppContext {
    api: LexisApi<FileStore>,
    config: LexisConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Word(cmd)) => match cmd {
            WordCommands::Add(args) => handle_add_word(&mut ctx, args),
            WordCommands::List { search, sort } => handle_list_words(&mut ctx, search, sort),
            WordCommands::View { selectors } => handle_view_words(&mut ctx, selectors),
            WordCommands::Note { selector, note } => {
                handle_note(&mut ctx, selector, note.join(" "))
            }
            WordCommands::Delete { selectors, yes } => {
                handle_delete_words(&mut ctx, selectors, yes)
            }
        },
        Some(Commands::Sentence(cmd)) => match cmd {
            SentenceCommands::Add {
                content,
                translation,
                category,
                notes,
            } => handle_add_sentence(
                &mut ctx,
                SentenceDraft {
                    content,
                    translation,
                    category,
                    notes,
                },
            ),
            SentenceCommands::List { search, category } => {
                handle_list_sentences(&mut ctx, search, category)
            }
            SentenceCommands::View { selectors } => handle_view_sentences(&mut ctx, selectors),
            SentenceCommands::Delete { selectors, yes } => {
                handle_delete_sentences(&mut ctx, selectors, yes)
            }
            SentenceCommands::Categories => handle_categories(&mut ctx),
        },
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Paths) => handle_paths(&mut ctx),
        None => handle_list_words(&mut ctx, None, None),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "lexis", "lexis")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LexisError::Config("Could not determine data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    tracing::debug!(data_dir = %data_dir.display(), "initializing");

    let config = LexisConfig::load_or_default(&data_dir);
    let store = FileStore::new(data_dir.clone());
    let api = LexisApi::new(store, LexisPaths { data_dir });

    Ok(AppContext { api, config })
}

/// Reads a yes/no answer from stdin. Anything but `y`/`yes` declines.
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(_) => matches!(input.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation");
                false
            }
        }
    }
}

fn handle_add_word(ctx: &mut AppContext, args: AddWordArgs) -> Result<()> {
    let draft = WordDraft {
        word: args.word,
        translation: args.translation,
        definition: args.definition,
        part_of_speech: args.part_of_speech,
        examples: args.examples,
        notes: args.notes,
        tags: args.tags,
    };

    let result = if !args.lookup {
        ctx.api.add_word(draft)?
    } else {
        match &ctx.config.glossary {
            Some(path) => match GlossaryLookup::load(path) {
                Ok(glossary) => ctx.api.add_word_with_lookup(draft, &glossary)?,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "could not load glossary");
                    let mut result = ctx.api.add_word(draft)?;
                    result.messages.insert(
                        0,
                        CmdMessage::warning(format!(
                            "Could not load glossary {} ({}); saved the fields you entered.",
                            path.display(),
                            e
                        )),
                    );
                    result
                }
            },
            None => ctx.api.add_word_with_lookup(draft, &NoLookup)?,
        }
    };

    print_messages(&result.messages);
    Ok(())
}

fn handle_list_words(
    ctx: &mut AppContext,
    search: Option<String>,
    sort: Option<SortOption>,
) -> Result<()> {
    let sort = sort.unwrap_or(ctx.config.default_sort);
    let result = ctx.api.list_words(search.as_deref().unwrap_or(""), sort);

    print!(
        "{}",
        render_word_list(&result.listed_words, result.listing.as_ref())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_view_words(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_words(&selectors)?;
    print!("{}", render_full_words(&result.listed_words));
    print_messages(&result.messages);
    Ok(())
}

fn handle_note(ctx: &mut AppContext, selector: String, note: String) -> Result<()> {
    let result = ctx.api.update_note(&selector, &note)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete_words(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    let result = if yes {
        ctx.api.delete_words(&selectors, &mut AlwaysConfirm)?
    } else {
        ctx.api.delete_words(&selectors, &mut TerminalConfirm)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_sentence(ctx: &mut AppContext, draft: SentenceDraft) -> Result<()> {
    let result = ctx.api.add_sentence(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list_sentences(
    ctx: &mut AppContext,
    search: Option<String>,
    category: String,
) -> Result<()> {
    let filter = CategoryFilter::from(category.as_str());
    let result = ctx
        .api
        .list_sentences(search.as_deref().unwrap_or(""), &filter);

    print!(
        "{}",
        render_sentence_list(
            &result.listed_sentences,
            &result.categories,
            result.listing.as_ref()
        )
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_view_sentences(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_sentences(&selectors)?;
    print!("{}", render_full_sentences(&result.listed_sentences));
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete_sentences(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    let result = if yes {
        ctx.api.delete_sentences(&selectors, &mut AlwaysConfirm)?
    } else {
        ctx.api.delete_sentences(&selectors, &mut TerminalConfirm)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.categories();
    let lines: Vec<String> = result
        .categories
        .iter()
        .map(|c| if c.is_empty() { "(none)".to_string() } else { c.clone() })
        .collect();
    print!("{}", render_text_list(&lines, "No categories yet."));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = lexis::config::CONFIG_KEYS
                .iter()
                .filter_map(|key| config.get(key).ok().map(|v| format!("{} = {}", key, v)))
                .collect();
            print!("{}", render_text_list(&lines, ""));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_paths(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.slot_paths();
    let lines: Vec<String> = result
        .paths
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    print!("{}", render_text_list(&lines, "No paths."));
    print_messages(&result.messages);
    Ok(())
}

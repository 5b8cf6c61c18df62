//! # CLI Layer
//!
//! One possible UI client for lexis. It is the only place that:
//! - Parses arguments (clap, [`setup`])
//! - Talks to the terminal: output, confirmation prompts, exit codes
//! - Decides where data lives (`$LEXIS_HOME` or the platform data dir)
//! - Installs the tracing subscriber
//!
//! Handlers in [`commands`] call `LexisApi` and pass the returned `CmdResult`
//! to [`render`], which formats it through the templates in `templates/`.
//!
//! CLI tests check parsing ([`setup`]) and output ([`render`]) only; business
//! logic is tested in the library.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;

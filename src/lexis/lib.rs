//! # Lexis Architecture
//!
//! Lexis is a personal vocabulary and phrase-book manager. Users record
//! **words** (translation, definition, part of speech, examples, notes, tags)
//! and **sentences** (translation, category, notes), then browse, search,
//! filter and sort the two collections. All state lives in local files.
//!
//! Like any good note tool, it is a library that happens to have a CLI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders templates             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns both collections for the session                    │
//! │  - Normalizes inputs (display indexes / id prefixes)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs) + Query engine (query.rs)         │
//! │  - Pure operations returning `CmdResult`                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection store (collection.rs)                           │
//! │  - add / delete / update_note, persisted after each change  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over named slots                         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. The two interactive collaborators, delete confirmation
//! ([`confirm::Confirm`]) and word enrichment ([`lookup::WordLookup`]), are
//! traits the caller supplies. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`collection`]: In-memory collections mirrored to storage
//! - [`commands`]: One module per operation
//! - [`config`]: Configuration management
//! - [`confirm`]: Delete confirmation collaborator
//! - [`error`]: Error types
//! - [`index`]: Display indexes and selectors
//! - [`lookup`]: Word enrichment collaborator
//! - [`model`]: Core data types
//! - [`query`]: Filtering and sorting of the visible view
//! - [`store`]: Storage abstraction and implementations

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod error;
pub mod index;
pub mod lookup;
pub mod model;
pub mod query;
pub mod store;

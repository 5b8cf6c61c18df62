//! # lexis
//!
//! Command-line client for the lexis vocabulary library. All behavior lives in the library
//! (`lexis::api`); this binary only parses arguments, wires up storage and logging, and renders
//! results. See `cli/mod.rs` for the layout of the CLI layer.
mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

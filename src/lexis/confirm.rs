//! Yes/no confirmation asked before every delete.
//!
//! The library never talks to a terminal itself; callers hand in whatever
//! implementation fits their UI. Any `FnMut(&str) -> bool` closure works.

pub const DELETE_WORD_PROMPT: &str = "Are you sure you want to delete this word?";
pub const DELETE_SENTENCE_PROMPT: &str = "Are you sure you want to delete this sentence?";

pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Accepts every prompt (`--yes`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

/// Declines every prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        false
    }
}

//! Whether the tool is blocked reading an answer from the user.
//!
//! The folder, replacement and `Proceed? (y/n)` questions hold a
//! [`PromptGuard`] while they wait. Ctrl-C or SIGTERM during one of them
//! ends the program at once, since nothing has been renamed yet. Outside a
//! question a rename run may be in progress, and the signal handler lets
//! it finish so the summary matches what happened on disk.

use std::sync::atomic::{AtomicBool, Ordering};

static WAITING_FOR_ANSWER: AtomicBool = AtomicBool::new(false);

/// Held for as long as one question is waiting on stdin
#[must_use = "the question counts as answered as soon as the guard is dropped"]
pub struct PromptGuard;

impl PromptGuard {
    pub fn activate() -> Self {
        WAITING_FOR_ANSWER.store(true, Ordering::SeqCst);
        Self
    }
}

impl Drop for PromptGuard {
    fn drop(&mut self) {
        WAITING_FOR_ANSWER.store(false, Ordering::SeqCst);
    }
}

/// True while a folder, replacement or confirmation question is unanswered
pub fn prompt_active() -> bool {
    WAITING_FOR_ANSWER.load(Ordering::SeqCst)
}

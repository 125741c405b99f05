#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod classify;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod operations;
pub mod output;
pub mod plan;
pub mod transform;

pub use classify::{contains_cjk, is_cjk_ideograph, CJK_UNIFIED_END, CJK_UNIFIED_START};
pub use config::{Extensions, RenameOptions, DEFAULT_EXTENSIONS};
pub use error::RenameError;
pub use interrupt::{prompt_active, PromptGuard};
pub use operations::{check_directory, rename_matching, rename_with_options};
pub use output::{format_event, RenameEvent, RenameFailure, RunSummary};
pub use plan::{execute, plan_entry, resolve_target, ClaimedTargets, DirectoryEntry, RenamePlan};
pub use transform::{candidate_base, fallback_name, replace_cjk, sanitize, split_name};

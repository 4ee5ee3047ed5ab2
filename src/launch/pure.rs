//! Pure functions for launching
//!
//! These functions have no side effects and are deterministic.

mod bundle;
mod command;
mod path;
mod quote;
mod rank;
mod sandbox;
mod score;

pub use bundle::{bundle_executable_path, info_plist_path, is_app_bundle, parse_bundle_executable};
pub use command::{format_plan, sandbox_invocation, target_invocation};
pub use path::{normalize_separators, path_depth};
pub use quote::{quote_arg, quote_command_line, split_command_line};
pub use rank::{pick_best, rank_candidates};
pub use sandbox::{render_sandbox_profile, SANDBOX_TEMPLATE};
pub use score::{score_candidates, score_path};

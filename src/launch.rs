//! Launch module - picking and starting a game's native entry point
//!
//! This module provides:
//! - Candidate discovery, stat probing, scoring and ranking
//! - App bundle resolution and sandbox profiles (where the platform allows)
//! - Command-line building with shell-safe quoting
//! - Child process execution with output forwarding
//!
//! ## Module Structure
//! - `types.rs`: Candidate, LaunchPlan, LaunchOutcome, SpawnRequest
//! - `pure/`: Pure functions (scoring, ranking, quoting, bundle paths, templates)
//! - `operations/`: Atomic side effects (stat, spawn, plist conversion, profile write, discovery)
//! - `pipelines/`: High-level orchestration (select, execute)

mod operations;
mod pipelines;
mod pure;
mod types;

// Re-export public API
pub use operations::{
    discover_executables, probe_candidates, resolve_bundle_executable, run_captured, spawn,
    write_sandbox_profile,
};
pub use pipelines::{
    launch_game, plan_launch, rank_executables, run_plan, select_executable, LaunchContext,
};
pub use pure::{
    format_plan, is_app_bundle, pick_best, quote_arg, quote_command_line, rank_candidates,
    render_sandbox_profile, score_path, split_command_line, SANDBOX_TEMPLATE,
};
pub use types::{
    Candidate, LaunchOutcome, LaunchPlan, SpawnRequest, LOGGER_NAME, STAT_CONCURRENCY,
    SUCCESS_MESSAGE,
};

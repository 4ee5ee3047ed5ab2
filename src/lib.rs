//! Pick the real entry point of an installed game and run it.
//!
//! Given an [`InstallRecord`], the launcher probes every declared executable,
//! scores and ranks the survivors, resolves macOS app bundles, optionally
//! wraps the command in a sandbox profile, and runs the child while streaming
//! its output to a [`LogSink`].

pub mod config;
pub mod error;
pub mod install;
pub mod launch;
pub mod logging;
pub mod paths;
pub mod platform;

pub use config::LauncherConfig;
pub use error::LaunchError;
pub use install::{load_install_record, InstallRecord};
pub use launch::{launch_game, Candidate, LaunchContext, LaunchOutcome, LaunchPlan};
pub use logging::{LogSink, MemorySink, TracingSink};
pub use platform::Platform;

//! Launch failure taxonomy
//!
//! A launch attempt either succeeds or fails with exactly one of these.
//! Filtered-out candidates are not errors and never show up here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    /// Every declared executable was missing or scored out
    #[error("No executables found")]
    NoExecutables,

    /// The bundle's Info.plist could not be converted or lacks the executable name
    #[error("Invalid app bundle {}: {reason}", .bundle.display())]
    BundleMetadata { bundle: PathBuf, reason: String },

    /// The child ran and exited unsuccessfully
    #[error("{} crashed: {description}", .exe_path.display())]
    Crash {
        exe_path: PathBuf,
        exit_code: i32,
        description: String,
    },

    /// The OS refused to start the command at all
    #[error("Could not spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Thread pool error: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

impl LaunchError {
    /// Stable machine-readable reason code
    pub fn code(&self) -> &'static str {
        match self {
            LaunchError::NoExecutables => "no-executables",
            LaunchError::BundleMetadata { .. } => "bundle-metadata",
            LaunchError::Crash { .. } => "crash",
            LaunchError::Spawn { .. } => "spawn",
            LaunchError::Io(_) => "io",
            LaunchError::Config(_) => "config",
            LaunchError::Pool(_) => "pool",
        }
    }

    /// Whether this is a known game-configuration problem rather than a fault
    pub fn is_reportable(&self) -> bool {
        matches!(
            self,
            LaunchError::NoExecutables | LaunchError::BundleMetadata { .. }
        )
    }
}

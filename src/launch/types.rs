//! Launch types and constants

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Logger name child output is forwarded under
pub const LOGGER_NAME: &str = "launch/native";

/// Message carried by a successful outcome
pub const SUCCESS_MESSAGE: &str = "child completed successfully";

/// Maximum number of simultaneous stat probes
pub const STAT_CONCURRENCY: usize = 4;

/// A possible entry point, relative to the install root.
///
/// Each pipeline stage returns new candidates rather than editing them:
/// `weight` is filled by the stat probe, `score` by the scorer and `depth`
/// by the depth pass. Until a stage has run its field keeps the value from
/// [`Candidate::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub path: String,
    /// File size in bytes, `None` until probed
    pub weight: Option<u64>,
    pub score: i32,
    /// Number of path segments, always at least 1 once computed
    pub depth: usize,
}

impl Candidate {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            weight: None,
            score: 0,
            depth: 0,
        }
    }

    pub fn with_weight(self, weight: u64) -> Self {
        Self {
            weight: Some(weight),
            ..self
        }
    }

    pub fn with_score(self, score: i32) -> Self {
        Self { score, ..self }
    }

    pub fn with_depth(self, depth: usize) -> Self {
        Self { depth, ..self }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchOutcome {
    Success { message: String },
}

/// Everything needed to start one process
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpawnRequest {
    pub command: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub env: BTreeMap<String, String>,
}

impl SpawnRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Default::default()
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

/// A fully resolved launch, ready to run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Install the plan was built for
    pub install_root: PathBuf,
    /// The real executable (bundle already resolved); reported on crash
    pub exe_path: PathBuf,
    /// Quoted command line the program and args were parsed from
    pub command_line: String,
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: BTreeMap<String, String>,
    /// Profile to render before spawning, when isolated
    pub sandbox_profile: Option<PathBuf>,
}

impl LaunchPlan {
    pub fn spawn_request(&self) -> SpawnRequest {
        SpawnRequest {
            command: self.program.clone(),
            args: self.args.clone(),
            cwd: Some(self.cwd.clone()),
            env: self.env.clone(),
        }
    }
}

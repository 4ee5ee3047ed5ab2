//! Install records - what was installed and where
//!
//! Records are YAML files written by whatever installed the game:
//!
//! ```yaml
//! install_root: /home/me/games/celeste
//! executables:
//!   - Celeste.exe
//!   - lib64/Celeste.bin.x86_64
//! args: ["--windowed"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::LaunchError;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct InstallRecord {
    /// Absolute directory the game was installed into
    pub install_root: PathBuf,

    /// Declared entry point candidates, relative to `install_root`.
    /// When empty, the install root is scanned instead.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub executables: Vec<String>,

    /// Extra arguments passed after the executable
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Extra environment for the child process
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    /// Per-install isolation override; `None` defers to the user preference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isolate: Option<bool>,
}

impl InstallRecord {
    pub fn new(install_root: impl Into<PathBuf>, executables: Vec<String>) -> Self {
        Self {
            install_root: install_root.into(),
            executables,
            ..Default::default()
        }
    }

    /// Resolve whether this launch should be sandboxed
    pub fn wants_isolation(&self, preference: bool) -> bool {
        self.isolate.unwrap_or(preference)
    }

    pub fn validate(&self) -> Result<(), LaunchError> {
        if !self.install_root.is_absolute() {
            return Err(LaunchError::Config(format!(
                "install_root must be absolute, got {}",
                self.install_root.display()
            )));
        }
        Ok(())
    }
}

pub fn load_install_record(path: &Path) -> Result<InstallRecord, LaunchError> {
    let file = File::open(path)?;
    let record: InstallRecord = serde_yaml::from_reader(BufReader::new(file))
        .map_err(|e| LaunchError::Config(format!("{}: {}", path.display(), e)))?;
    record.validate()?;
    Ok(record)
}

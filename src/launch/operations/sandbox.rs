//! Sandbox profile persistence

use std::path::{Path, PathBuf};

use crate::error::LaunchError;
use crate::launch::pure::{render_sandbox_profile, SANDBOX_TEMPLATE};
use crate::paths::sandbox_profile_path;

/// Render the profile for `install_root` and write it into the install's
/// metadata directory, replacing whatever was there.
///
/// Rewritten on every isolated launch. Two launches of the same install
/// racing on this file is unsupported.
pub fn write_sandbox_profile(install_root: &Path) -> Result<PathBuf, LaunchError> {
    let path = sandbox_profile_path(install_root);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, render_sandbox_profile(SANDBOX_TEMPLATE, install_root))?;
    tracing::debug!("Wrote sandbox profile {}", path.display());
    Ok(path)
}

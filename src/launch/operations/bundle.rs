//! App bundle resolution
//!
//! Converts `Contents/Info.plist` to JSON with the configured converter
//! (`plutil -convert json -o - <plist>`) and reads the executable name.

use std::path::{Path, PathBuf};

use super::spawn::run_captured;
use crate::error::LaunchError;
use crate::launch::pure::{bundle_executable_path, info_plist_path, parse_bundle_executable};
use crate::launch::types::{SpawnRequest, LOGGER_NAME};
use crate::logging::LogSink;

/// Absolute path of the binary a bundle runs.
///
/// Any failure (converter missing or failing, field absent) is a
/// [`LaunchError::BundleMetadata`] for this bundle. Nothing is retried.
pub fn resolve_bundle_executable(
    bundle: &Path,
    converter: &str,
    sink: &dyn LogSink,
) -> Result<PathBuf, LaunchError> {
    let bundle_error = |reason: String| LaunchError::BundleMetadata {
        bundle: bundle.to_path_buf(),
        reason,
    };

    let plist = info_plist_path(bundle);
    let request = SpawnRequest::new(converter).args([
        "-convert".to_string(),
        "json".to_string(),
        "-o".to_string(),
        "-".to_string(),
        plist.to_string_lossy().into_owned(),
    ]);

    let (code, json) = match run_captured(&request, sink, LOGGER_NAME) {
        Ok(result) => result,
        Err(e) => return Err(bundle_error(format!("could not run {}: {}", converter, e))),
    };
    if code != 0 {
        return Err(bundle_error(format!(
            "{} failed on {} with exit code {}",
            converter,
            plist.display(),
            code
        )));
    }

    let name = parse_bundle_executable(&json).map_err(bundle_error)?;
    let exe = bundle_executable_path(bundle, &name);
    tracing::info!("Resolved bundle {} to {}", bundle.display(), exe.display());
    Ok(exe)
}

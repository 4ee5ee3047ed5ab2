//! App bundle layout
//!
//! A bundle is a directory named `*.app` holding `Contents/Info.plist` and the
//! real binary under `Contents/MacOS/`.

use regex::Regex;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static APP_BUNDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.app[/\\]?$").expect("valid regex"));

/// Key naming the binary inside `Contents/MacOS`
const EXECUTABLE_KEY: &str = "CFBundleExecutable";

pub fn is_app_bundle(path: &str) -> bool {
    APP_BUNDLE.is_match(path)
}

pub fn info_plist_path(bundle: &Path) -> PathBuf {
    bundle.join("Contents").join("Info.plist")
}

pub fn bundle_executable_path(bundle: &Path, name: &str) -> PathBuf {
    bundle.join("Contents").join("MacOS").join(name)
}

/// Pull the executable name out of Info.plist converted to JSON
pub fn parse_bundle_executable(json: &str) -> Result<String, String> {
    let info: Value = serde_json::from_str(json).map_err(|e| format!("invalid Info.plist: {e}"))?;
    match info.get(EXECUTABLE_KEY) {
        Some(Value::String(name)) if !name.is_empty() => Ok(name.clone()),
        Some(_) => Err(format!("{EXECUTABLE_KEY} is not a non-empty string")),
        None => Err(format!("missing {EXECUTABLE_KEY}")),
    }
}

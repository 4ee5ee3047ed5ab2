//! Platform abstraction - WHAT the host can do at launch time
//!
//! The launch pipeline never compares OS names itself. It asks the platform
//! whether app bundles and sandbox isolation are available, so adding a new
//! host means adding an impl here and nothing in the ranking code.

/// Host capabilities consulted once at launch start
pub trait Platform: Send + Sync {
    /// Platform name for logging
    fn name(&self) -> &str;

    /// Whether `.app` directories are resolved through their Info.plist
    fn supports_app_bundles(&self) -> bool {
        false
    }

    /// Whether launches can be wrapped in a sandbox profile
    fn supports_sandbox(&self) -> bool {
        false
    }
}

pub struct MacOs;

impl Platform for MacOs {
    fn name(&self) -> &str {
        "macos"
    }

    fn supports_app_bundles(&self) -> bool {
        true
    }

    fn supports_sandbox(&self) -> bool {
        true
    }
}

pub struct Linux;

impl Platform for Linux {
    fn name(&self) -> &str {
        "linux"
    }
}

pub struct Windows;

impl Platform for Windows {
    fn name(&self) -> &str {
        "windows"
    }
}

/// Platform matching the host this binary was built for
pub fn current() -> Box<dyn Platform> {
    if cfg!(target_os = "macos") {
        Box::new(MacOs)
    } else if cfg!(target_os = "windows") {
        Box::new(Windows)
    } else {
        Box::new(Linux)
    }
}

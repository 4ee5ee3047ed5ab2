use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Name of the private metadata directory kept inside every install root
pub const METADATA_DIR: &str = ".nativelaunch";

/// File name of the rendered sandbox profile inside [`METADATA_DIR`]
pub const SANDBOX_PROFILE_NAME: &str = "isolate-app.sb";

pub static PATH_HOME: LazyLock<PathBuf> = LazyLock::new(|| {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir)
});

pub static PATH_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg_config_home).join("nativelaunch");
    }
    PATH_HOME.join(".config/nativelaunch")
});

/// Location of the sandbox profile for a given install root.
///
/// Every isolated launch of the same install overwrites this file.
pub fn sandbox_profile_path(install_root: &Path) -> PathBuf {
    install_root.join(METADATA_DIR).join(SANDBOX_PROFILE_NAME)
}

use serde::{Deserialize, Serialize};

/// User launch preferences (settings.json)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LauncherConfig {
    /// Wrap launches in a sandbox profile where the host supports it
    #[serde(default)]
    pub isolate_apps: bool,
    /// Virtual machine command used for `.jar` entry points
    #[serde(default = "default_java_command")]
    pub java_command: String,
    /// Property-list converter used to read bundle metadata
    #[serde(default = "default_plist_converter")]
    pub plist_converter: String,
    /// Sandbox wrapper invoked with `-f <profile>`
    #[serde(default = "default_sandbox_command")]
    pub sandbox_command: String,
}

fn default_java_command() -> String {
    "java".to_string()
}

fn default_plist_converter() -> String {
    "plutil".to_string()
}

fn default_sandbox_command() -> String {
    "sandbox-exec".to_string()
}

impl Default for LauncherConfig {
    fn default() -> Self {
        LauncherConfig {
            isolate_apps: false,
            java_command: default_java_command(),
            plist_converter: default_plist_converter(),
            sandbox_command: default_sandbox_command(),
        }
    }
}

//! Sandbox profile template

use std::path::Path;

use super::quote::escape_quoted;

/// Token replaced with the absolute install root
pub const INSTALL_LOCATION_PLACEHOLDER: &str = "{{INSTALL_LOCATION}}";

/// Seatbelt policy applied to isolated launches
pub const SANDBOX_TEMPLATE: &str = include_str!("../../../res/isolate-app.sb");

/// The root lands inside a quoted policy string, so `"` and `\` are escaped
pub fn render_sandbox_profile(template: &str, install_root: &Path) -> String {
    template.replace(
        INSTALL_LOCATION_PLACEHOLDER,
        &escape_quoted(&install_root.to_string_lossy()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_placeholder() {
        let rendered = render_sandbox_profile(SANDBOX_TEMPLATE, Path::new("/games/celeste"));
        assert!(!rendered.contains(INSTALL_LOCATION_PLACEHOLDER));
        assert!(rendered.contains("(subpath \"/games/celeste\")"));
        assert!(rendered.starts_with("(version 1)"));
    }

    #[test]
    fn quotes_and_backslashes_in_root_are_escaped() {
        let rendered =
            render_sandbox_profile(SANDBOX_TEMPLATE, Path::new("/games/My \"Best\" Game"));
        assert!(rendered.contains("(subpath \"/games/My \\\"Best\\\" Game\")"));

        let template = "(subpath \"{{INSTALL_LOCATION}}\")";
        let rendered = render_sandbox_profile(template, Path::new("/a\\b"));
        assert_eq!(rendered, "(subpath \"/a\\\\b\")");
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        let rendered = render_sandbox_profile("(version 1)\n(allow default)\n", Path::new("/x"));
        assert_eq!(rendered, "(version 1)\n(allow default)\n");
    }
}

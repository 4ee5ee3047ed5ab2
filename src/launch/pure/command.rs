// Pure command building functions (no I/O)

use std::path::Path;

use crate::launch::types::LaunchPlan;

fn is_jar(exe: &Path) -> bool {
    exe.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
}

/// Tokens that start the target itself.
///
/// `.jar` files run through the Java VM as `<java> -jar <path> [args...]`;
/// everything else is executed directly.
pub fn target_invocation(exe: &Path, args: &[String], java_command: &str) -> Vec<String> {
    let exe_str = exe.to_string_lossy().into_owned();
    let mut tokens = if is_jar(exe) {
        vec![java_command.to_string(), "-jar".to_string(), exe_str]
    } else {
        vec![exe_str]
    };
    tokens.extend(args.iter().cloned());
    tokens
}

/// Wrap `inner` as `<sandbox> -f <profile> <inner...>`
pub fn sandbox_invocation(
    sandbox_command: &str,
    profile: &Path,
    inner: Vec<String>,
) -> Vec<String> {
    let mut tokens = vec![
        sandbox_command.to_string(),
        "-f".to_string(),
        profile.to_string_lossy().into_owned(),
    ];
    tokens.extend(inner);
    tokens
}

/// Format a launch plan for debug logging (pure string building).
///
/// Returns the formatted string. Caller is responsible for printing.
pub fn format_plan(plan: &LaunchPlan) -> String {
    let mut output = String::new();

    output.push_str(&format!("EXE={}\n", plan.exe_path.display()));
    output.push_str(&format!("CWD={}\n", plan.cwd.display()));

    for (key, value) in &plan.env {
        output.push_str(&format!("{}={}\n", key, value));
    }

    if let Some(profile) = &plan.sandbox_profile {
        output.push_str(&format!("SANDBOX={}\n", profile.display()));
    }

    output.push_str(&plan.command_line);

    output
}

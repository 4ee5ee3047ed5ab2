//! Game execution pipeline

use crate::config::LauncherConfig;
use crate::error::LaunchError;
use crate::install::InstallRecord;
use crate::launch::operations::{resolve_bundle_executable, spawn, write_sandbox_profile};
use crate::launch::pure::{
    format_plan, is_app_bundle, normalize_separators, quote_command_line, sandbox_invocation,
    split_command_line, target_invocation,
};
use crate::launch::types::{Candidate, LaunchOutcome, LaunchPlan, LOGGER_NAME, SUCCESS_MESSAGE};
use crate::logging::LogSink;
use crate::paths::sandbox_profile_path;
use crate::platform::Platform;

use super::select::select_executable;

/// Collaborators a launch needs besides the install record
pub struct LaunchContext<'a> {
    pub platform: &'a dyn Platform,
    pub config: &'a LauncherConfig,
    pub sink: &'a dyn LogSink,
}

/// Select the best executable for `record` and run it to completion
pub fn launch_game(
    record: &InstallRecord,
    ctx: &LaunchContext,
) -> Result<LaunchOutcome, LaunchError> {
    record.validate()?;
    let candidate = select_executable(record)?;
    let plan = plan_launch(record, &candidate, ctx)?;
    run_plan(&plan, ctx.sink)
}

/// Resolve everything about launching `candidate` without starting it.
///
/// Bundle resolution runs the plist converter; nothing is written.
pub fn plan_launch(
    record: &InstallRecord,
    candidate: &Candidate,
    ctx: &LaunchContext,
) -> Result<LaunchPlan, LaunchError> {
    let cfg = ctx.config;
    let mut exe_path = record
        .install_root
        .join(normalize_separators(&candidate.path));

    if ctx.platform.supports_app_bundles() && is_app_bundle(&candidate.path) {
        exe_path = resolve_bundle_executable(&exe_path, &cfg.plist_converter, ctx.sink)?;
    }

    let mut tokens = target_invocation(&exe_path, &record.args, &cfg.java_command);

    let mut sandbox_profile = None;
    if record.wants_isolation(cfg.isolate_apps) {
        if ctx.platform.supports_sandbox() {
            let profile = sandbox_profile_path(&record.install_root);
            tokens = sandbox_invocation(&cfg.sandbox_command, &profile, tokens);
            sandbox_profile = Some(profile);
        } else {
            tracing::warn!(
                "Isolation requested but {} has no sandbox support, launching unsandboxed",
                ctx.platform.name()
            );
        }
    }

    let command_line = quote_command_line(&tokens);
    let mut parsed = split_command_line(&command_line)?.into_iter();
    let program = parsed
        .next()
        .ok_or_else(|| LaunchError::Config("empty command line".to_string()))?;
    let args: Vec<String> = parsed.collect();

    let cwd = exe_path
        .parent()
        .unwrap_or(record.install_root.as_path())
        .to_path_buf();

    Ok(LaunchPlan {
        install_root: record.install_root.clone(),
        exe_path,
        command_line,
        program,
        args,
        cwd,
        env: record.env.clone(),
        sandbox_profile,
    })
}

/// Spawn a planned launch and wait for it.
///
/// Child output goes to `sink` as `stdout: ...` / `stderr: ...`. A non-zero
/// exit becomes [`LaunchError::Crash`]; nothing is retried.
pub fn run_plan(plan: &LaunchPlan, sink: &dyn LogSink) -> Result<LaunchOutcome, LaunchError> {
    if plan.sandbox_profile.is_some() {
        write_sandbox_profile(&plan.install_root)?;
    }

    tracing::info!("Launching {}", plan.command_line);
    for line in format_plan(plan).lines() {
        tracing::debug!("{}", line);
    }

    let code = spawn(
        &plan.spawn_request(),
        |line| sink.log(LOGGER_NAME, &format!("stdout: {}", line)),
        |line| sink.log(LOGGER_NAME, &format!("stderr: {}", line)),
    )?;

    if code != 0 {
        return Err(LaunchError::Crash {
            exe_path: plan.exe_path.clone(),
            exit_code: code,
            description: format!("Exit code {}", code),
        });
    }

    tracing::info!("{} exited cleanly", plan.exe_path.display());
    Ok(LaunchOutcome::Success {
        message: SUCCESS_MESSAGE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use crate::platform::{Linux, MacOs};
    use std::path::{Path, PathBuf};

    fn ctx<'a>(
        platform: &'a dyn Platform,
        config: &'a LauncherConfig,
        sink: &'a dyn LogSink,
    ) -> LaunchContext<'a> {
        LaunchContext {
            platform,
            config,
            sink,
        }
    }

    #[test]
    fn jar_plan_runs_through_vm() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = InstallRecord::new(dir.path(), vec!["lib/Game.jar".to_string()]);
        record.args = vec!["--nosound".to_string()];
        let cfg = LauncherConfig::default();
        let sink = MemorySink::new();

        let plan = plan_launch(&record, &Candidate::new("lib/Game.jar"), &ctx(&Linux, &cfg, &sink))
            .unwrap();
        let jar = dir.path().join("lib/Game.jar");
        assert_eq!(plan.program, "java");
        assert_eq!(
            plan.args,
            vec!["-jar".to_string(), jar.to_string_lossy().into_owned(), "--nosound".to_string()]
        );
        assert_eq!(plan.cwd, dir.path().join("lib"));
        assert_eq!(plan.exe_path, jar);
    }

    #[test]
    fn paths_with_spaces_and_quotes_stay_single_tokens() {
        let mut record = InstallRecord::new(
            "/games/My \"Best\" Game",
            vec!["bin/run game.sh".to_string()],
        );
        record.args = vec!["--name".to_string(), "Dr. \"Q\"".to_string()];
        let cfg = LauncherConfig::default();
        let sink = MemorySink::new();

        let plan = plan_launch(
            &record,
            &Candidate::new("bin/run game.sh"),
            &ctx(&Linux, &cfg, &sink),
        )
        .unwrap();
        assert_eq!(plan.program, "/games/My \"Best\" Game/bin/run game.sh");
        assert_eq!(plan.args, vec!["--name", "Dr. \"Q\""]);
        assert_eq!(plan.cwd, PathBuf::from("/games/My \"Best\" Game/bin"));
    }

    #[test]
    fn isolation_is_skipped_without_sandbox_support() {
        let mut record = InstallRecord::new("/games/x", vec!["x.sh".to_string()]);
        record.isolate = Some(true);
        let cfg = LauncherConfig::default();
        let sink = MemorySink::new();

        let plan =
            plan_launch(&record, &Candidate::new("x.sh"), &ctx(&Linux, &cfg, &sink)).unwrap();
        assert_eq!(plan.sandbox_profile, None);
        assert_eq!(plan.program, "/games/x/x.sh");
    }

    #[test]
    fn isolation_wraps_command_on_macos() {
        let record = InstallRecord::new("/games/x", vec!["x.sh".to_string()]);
        let cfg = LauncherConfig {
            isolate_apps: true,
            ..Default::default()
        };
        let sink = MemorySink::new();

        let plan =
            plan_launch(&record, &Candidate::new("x.sh"), &ctx(&MacOs, &cfg, &sink)).unwrap();
        let profile = PathBuf::from("/games/x/.nativelaunch/isolate-app.sb");
        assert_eq!(plan.sandbox_profile, Some(profile.clone()));
        assert_eq!(plan.program, "sandbox-exec");
        assert_eq!(
            plan.args,
            vec![
                "-f".to_string(),
                profile.to_string_lossy().into_owned(),
                "/games/x/x.sh".to_string(),
            ]
        );
        assert!(!plan.command_line.ends_with('}'));
    }

    #[test]
    fn bundles_are_left_alone_off_macos() {
        let record = InstallRecord::new("/games/x", vec!["Game.app".to_string()]);
        let cfg = LauncherConfig {
            plist_converter: "/nonexistent/plutil".to_string(),
            ..Default::default()
        };
        let sink = MemorySink::new();
        let plan =
            plan_launch(&record, &Candidate::new("Game.app"), &ctx(&Linux, &cfg, &sink)).unwrap();
        assert_eq!(plan.program, "/games/x/Game.app");
    }

    #[test]
    fn bundle_error_aborts_plan_on_macos() {
        let record = InstallRecord::new("/games/x", vec!["Game.app".to_string()]);
        let cfg = LauncherConfig {
            plist_converter: "/nonexistent/plutil".to_string(),
            ..Default::default()
        };
        let sink = MemorySink::new();
        let err = plan_launch(&record, &Candidate::new("Game.app"), &ctx(&MacOs, &cfg, &sink))
            .unwrap_err();
        assert_eq!(err.code(), "bundle-metadata");
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        fn script(path: &Path, body: &str) {
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        #[test]
        fn successful_launch_forwards_output() {
            let dir = tempfile::tempdir().unwrap();
            script(&dir.path().join("start.sh"), "echo hello; echo careful >&2; echo \"$1\"");
            let mut record = InstallRecord::new(dir.path(), vec!["start.sh".to_string()]);
            record.args = vec!["arg with \"quotes\"".to_string()];
            let cfg = LauncherConfig::default();
            let sink = MemorySink::new();

            let outcome = launch_game(&record, &ctx(&Linux, &cfg, &sink)).unwrap();
            assert_eq!(
                outcome,
                LaunchOutcome::Success {
                    message: "child completed successfully".to_string()
                }
            );

            let messages = sink.messages();
            let stdout: Vec<_> = messages.iter().filter(|m| m.starts_with("stdout: ")).collect();
            assert_eq!(stdout, vec!["stdout: hello", "stdout: arg with \"quotes\""]);
            assert!(messages.contains(&"stderr: careful".to_string()));
            assert!(sink.entries().iter().all(|(logger, _)| logger == LOGGER_NAME));
        }

        #[test]
        fn working_directory_is_executable_parent() {
            let dir = tempfile::tempdir().unwrap();
            script(&dir.path().join("bin/start.sh"), "pwd");
            let record = InstallRecord::new(dir.path(), vec!["bin/start.sh".to_string()]);
            let cfg = LauncherConfig::default();
            let sink = MemorySink::new();

            launch_game(&record, &ctx(&Linux, &cfg, &sink)).unwrap();
            let pwd = sink.messages()[0].trim_start_matches("stdout: ").to_string();
            assert_eq!(
                Path::new(&pwd).canonicalize().unwrap(),
                dir.path().join("bin").canonicalize().unwrap()
            );
        }

        #[test]
        fn non_zero_exit_is_crash() {
            let dir = tempfile::tempdir().unwrap();
            script(&dir.path().join("game.sh"), "exit 1");
            let record = InstallRecord::new(dir.path(), vec!["game.sh".to_string()]);
            let cfg = LauncherConfig::default();
            let sink = MemorySink::new();

            let err = launch_game(&record, &ctx(&Linux, &cfg, &sink)).unwrap_err();
            match &err {
                LaunchError::Crash {
                    exe_path,
                    exit_code,
                    ..
                } => {
                    assert_eq!(exe_path, &dir.path().join("game.sh"));
                    assert_eq!(*exit_code, 1);
                }
                other => panic!("unexpected error {other:?}"),
            }
            let text = err.to_string();
            assert!(text.contains("Exit code 1"));
            assert!(text.contains(&*dir.path().join("game.sh").to_string_lossy()));
        }

        #[test]
        fn no_candidates_is_reported_not_spawned() {
            let dir = tempfile::tempdir().unwrap();
            let record = InstallRecord::new(dir.path(), vec!["gone.exe".to_string()]);
            let cfg = LauncherConfig::default();
            let sink = MemorySink::new();
            let err = launch_game(&record, &ctx(&Linux, &cfg, &sink)).unwrap_err();
            assert_eq!(err.code(), "no-executables");
            assert!(sink.messages().is_empty());
        }

        #[test]
        fn sandboxed_bundle_launch_end_to_end() {
            let dir = tempfile::tempdir().unwrap();
            let root = dir.path().join("install");
            let bundle = root.join("Game.app");
            std::fs::create_dir_all(bundle.join("Contents")).unwrap();
            std::fs::write(bundle.join("Contents/Info.plist"), "<plist/>").unwrap();
            script(&bundle.join("Contents/MacOS/Game"), "echo in game; pwd");

            let tools = dir.path().join("tools");
            let converter = tools.join("plutil");
            script(&converter, r#"echo '{"CFBundleExecutable": "Game"}'"#);
            // Stands in for sandbox-exec: check the profile exists, then run the rest
            let sandbox = tools.join("sandbox-exec");
            script(
                &sandbox,
                r#"[ "$1" = "-f" ] || exit 70
grep -q "(version 1)" "$2" || exit 71
shift 2
exec "$@""#,
            );

            let record = InstallRecord::new(&root, vec!["Game.app".to_string()]);
            let cfg = LauncherConfig {
                isolate_apps: true,
                plist_converter: converter.to_string_lossy().into_owned(),
                sandbox_command: sandbox.to_string_lossy().into_owned(),
                ..Default::default()
            };
            let sink = MemorySink::new();

            let outcome = launch_game(&record, &ctx(&MacOs, &cfg, &sink)).unwrap();
            assert!(matches!(outcome, LaunchOutcome::Success { .. }));
            let messages = sink.messages();
            assert_eq!(messages[0], "stdout: in game");
            let pwd = messages[1].trim_start_matches("stdout: ");
            assert_eq!(
                Path::new(pwd).canonicalize().unwrap(),
                bundle.join("Contents/MacOS").canonicalize().unwrap()
            );
            let profile =
                std::fs::read_to_string(root.join(".nativelaunch/isolate-app.sb")).unwrap();
            assert!(profile.contains(&*root.to_string_lossy()));
        }
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use nativelaunch::config::load_cfg;
use nativelaunch::launch::{format_plan, plan_launch, run_plan, select_executable};
use nativelaunch::{load_install_record, platform, LaunchContext, LaunchError, TracingSink};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let cli = match parse_args(args) {
        Some(Parsed::Run(cli)) => cli,
        Some(Parsed::Help) => {
            println!("{}", USAGE_TEXT);
            return ExitCode::SUCCESS;
        }
        None => {
            eprintln!("{}", USAGE_TEXT);
            return ExitCode::from(64);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = match e.downcast_ref::<LaunchError>() {
                Some(LaunchError::NoExecutables) => 2,
                Some(LaunchError::Crash { .. }) => 1,
                Some(LaunchError::BundleMetadata { .. }) => 3,
                _ => 70,
            };
            match e.downcast_ref::<LaunchError>() {
                Some(err) => tracing::error!(code = err.code(), "{:#}", e),
                None => tracing::error!("{:#}", e),
            }
            ExitCode::from(code)
        }
    }
}

struct Cli {
    record: PathBuf,
    isolate: bool,
    dry_run: bool,
    extra_args: Vec<String>,
}

enum Parsed {
    Help,
    Run(Cli),
}

/// Flags are only recognized before `--`; everything after it goes to the game
fn parse_args(args: Vec<String>) -> Option<Parsed> {
    let mut record = None;
    let mut isolate = false;
    let mut dry_run = false;
    let mut extra_args = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Some(Parsed::Help),
            "--isolate" => isolate = true,
            "--dry-run" => dry_run = true,
            "--" => {
                extra_args.extend(iter.by_ref());
            }
            _ if arg.starts_with("--") => return None,
            _ if record.is_none() => record = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }

    Some(Parsed::Run(Cli {
        record: record?,
        isolate,
        dry_run,
        extra_args,
    }))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut cfg = load_cfg();
    if cli.isolate {
        cfg.isolate_apps = true;
    }

    let mut record = load_install_record(&cli.record)?;
    record.args.extend(cli.extra_args);

    let platform = platform::current();
    let sink = TracingSink;
    let ctx = LaunchContext {
        platform: platform.as_ref(),
        config: &cfg,
        sink: &sink,
    };

    let candidate = select_executable(&record)?;
    let plan = plan_launch(&record, &candidate, &ctx)?;

    if cli.dry_run {
        println!("{}", format_plan(&plan));
        return Ok(());
    }

    match run_plan(&plan, &sink)? {
        nativelaunch::LaunchOutcome::Success { message } => {
            tracing::info!("{}", message);
        }
    }
    Ok(())
}

static USAGE_TEXT: &str = r#"
Usage: nativelaunch <install-record.yaml> [OPTIONS] [-- ARGS...]

Picks the most likely game executable declared by an install record and runs it.

Options:
    --isolate     Run inside a sandbox profile (macOS only, overrides settings.json)
    --dry-run     Print the resolved command instead of running it
    -- ARGS...    Extra arguments passed to the game
    --help        Show this text

Environment:
    RUST_LOG      Log filter (default: info)
"#;

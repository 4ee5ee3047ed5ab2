//! Spawn primitive
//!
//! Runs one command, feeds each stdout/stderr line to a callback and returns
//! the exit code. The game, the plist converter and the sandbox wrapper all
//! go through here.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, ExitStatus, Stdio};

use crate::error::LaunchError;
use crate::launch::types::SpawnRequest;
use crate::logging::LogSink;

/// Run `request` to completion.
///
/// Both streams are drained on their own threads, so a chatty stderr can't
/// stall stdout. Lines keep their order within a stream; there is no ordering
/// between the two. There is no timeout: this waits until the child exits.
pub fn spawn<O, E>(
    request: &SpawnRequest,
    mut on_stdout: O,
    mut on_stderr: E,
) -> Result<i32, LaunchError>
where
    O: FnMut(&str) + Send,
    E: FnMut(&str) + Send,
{
    let mut cmd = Command::new(&request.command);
    cmd.args(&request.args)
        .envs(&request.env)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = &request.cwd {
        cmd.current_dir(dir);
    }

    let mut child = cmd.spawn().map_err(|source| LaunchError::Spawn {
        command: request.command.clone(),
        source,
    })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let on_stdout = &mut on_stdout;
    let on_stderr = &mut on_stderr;

    let status = std::thread::scope(|s| -> std::io::Result<ExitStatus> {
        let stdout_thread = s.spawn(move || match stdout {
            Some(out) => drain_lines(out, on_stdout),
            None => Ok(()),
        });
        let stderr_thread = s.spawn(move || match stderr {
            Some(err) => drain_lines(err, on_stderr),
            None => Ok(()),
        });

        let status = child.wait()?;

        for handle in [stdout_thread, stderr_thread] {
            match handle.join() {
                Ok(result) => result?,
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }

        Ok(status)
    })?;

    Ok(exit_code(status))
}

/// Run `request` and collect its stdout; stderr goes to `sink`
pub fn run_captured(
    request: &SpawnRequest,
    sink: &dyn LogSink,
    logger: &str,
) -> Result<(i32, String), LaunchError> {
    let mut captured = String::new();
    let code = spawn(
        request,
        |line| {
            captured.push_str(line);
            captured.push('\n');
        },
        |line| sink.log(logger, &format!("stderr: {}", line)),
    )?;
    Ok((code, captured))
}

fn drain_lines<R: Read, F: FnMut(&str)>(reader: R, on_line: &mut F) -> std::io::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        on_line(&String::from_utf8_lossy(&buf));
    }
}

/// Exit code, or `128 + signal` for a child killed by a signal
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

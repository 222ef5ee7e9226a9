//! Subprocess execution with deadlines.
//!
//! Every non-interactive runtime call goes through here so a hung external
//! tool cannot hang the CLI: the child is polled against a deadline and
//! killed on expiry. Captured output is drained by dedicated reader
//! threads, otherwise a chatty child fills the pipe buffer and deadlocks
//! before the deadline fires.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use gamebox_common::error::{GameboxError, Result};

const POLL_INTERVAL_MS: u64 = 50;

/// Collected result of a captured subprocess run.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code of the child, `-1` if it was terminated by a signal.
    pub exit_code: i32,
    /// Everything the child wrote to standard output.
    pub stdout: String,
    /// Everything the child wrote to standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Returns whether the child exited with code zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Returns the most useful diagnostic stream: standard error when
    /// non-empty, standard output otherwise.
    #[must_use]
    pub fn diagnostic(&self) -> &str {
        let err = self.stderr.trim();
        if err.is_empty() { self.stdout.trim() } else { err }
    }
}

/// Runs a command to completion with piped output, under a deadline.
///
/// # Errors
///
/// Returns `Io` if the child cannot be spawned or waited on, and
/// `Timeout` if it outlives the deadline (the child is killed first).
pub fn run_captured(
    command: &mut Command,
    operation: &'static str,
    timeout: Duration,
) -> Result<CommandOutput> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(command, e))?;

    let stdout_reader = spawn_reader(child.stdout.take());
    let stderr_reader = spawn_reader(child.stderr.take());

    let status = wait_with_deadline(&mut child, command, operation, timeout)?;

    Ok(CommandOutput {
        exit_code: status.code().unwrap_or(-1),
        stdout: join_reader(stdout_reader),
        stderr: join_reader(stderr_reader),
    })
}

/// Runs a command to completion with inherited standard streams, under a
/// deadline. Used for long operations (image builds) whose progress the
/// operator should see live.
///
/// # Errors
///
/// Returns `Io` if the child cannot be spawned or waited on, and
/// `Timeout` if it outlives the deadline (the child is killed first).
pub fn run_streamed(
    command: &mut Command,
    operation: &'static str,
    timeout: Duration,
) -> Result<i32> {
    let mut child = command.spawn().map_err(|e| spawn_error(command, e))?;
    let status = wait_with_deadline(&mut child, command, operation, timeout)?;
    Ok(status.code().unwrap_or(-1))
}

/// Runs a command with inherited standard streams and no deadline,
/// returning its exit code. Used for the interactive shell attach, which
/// blocks for the whole remote session by design.
///
/// # Errors
///
/// Returns `Io` if the child cannot be spawned or waited on.
pub fn run_interactive(command: &mut Command) -> Result<i32> {
    let status = command.status().map_err(|e| spawn_error(command, e))?;
    Ok(status.code().unwrap_or(-1))
}

/// Polls the child until it exits or the deadline elapses; kills it on
/// expiry.
fn wait_with_deadline(
    child: &mut Child,
    command: &Command,
    operation: &'static str,
    timeout: Duration,
) -> Result<ExitStatus> {
    let start = Instant::now();

    loop {
        if let Some(status) = child.try_wait().map_err(|e| spawn_error(command, e))? {
            return Ok(status);
        }
        if start.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            tracing::warn!(operation, timeout_secs = timeout.as_secs(), "runtime call killed");
            return Err(GameboxError::Timeout {
                operation,
                seconds: timeout.as_secs(),
            });
        }
        std::thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
    }
}

fn spawn_error(command: &Command, source: std::io::Error) -> GameboxError {
    GameboxError::Io {
        path: PathBuf::from(command.get_program()),
        source,
    }
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<String>> {
    pipe.map(|mut reader| {
        std::thread::spawn(move || {
            let mut buffer = String::new();
            let _ = reader.read_to_string(&mut buffer);
            buffer
        })
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[test]
    fn captured_collects_streams_and_exit_code() {
        let mut cmd = Command::new("sh");
        let _ = cmd.args(["-c", "echo out; echo err 1>&2; exit 3"]);
        let output =
            run_captured(&mut cmd, "test", Duration::from_secs(5)).expect("sh should spawn");
        assert_eq!(output.exit_code, 3);
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert!(!output.success());
    }

    #[test]
    fn diagnostic_prefers_stderr() {
        let output = CommandOutput {
            exit_code: 1,
            stdout: "noise\n".into(),
            stderr: "the real problem\n".into(),
        };
        assert_eq!(output.diagnostic(), "the real problem");
    }

    #[test]
    fn diagnostic_falls_back_to_stdout() {
        let output = CommandOutput {
            exit_code: 1,
            stdout: "only channel\n".into(),
            stderr: String::new(),
        };
        assert_eq!(output.diagnostic(), "only channel");
    }

    #[test]
    fn captured_kills_child_past_deadline() {
        let mut cmd = Command::new("sh");
        let _ = cmd.args(["-c", "sleep 30"]);
        let result = run_captured(&mut cmd, "probe", Duration::from_millis(100));
        assert!(matches!(
            result,
            Err(GameboxError::Timeout { operation: "probe", .. })
        ));
    }

    #[test]
    fn missing_binary_is_an_io_error() {
        let mut cmd = Command::new("gamebox-test-no-such-binary");
        let result = run_captured(&mut cmd, "test", Duration::from_secs(1));
        assert!(matches!(result, Err(GameboxError::Io { .. })));
    }
}

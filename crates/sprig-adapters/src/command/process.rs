//! Production child-process runner using std::process.

use std::io::{Read, Write};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use sprig_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandResult, CommandSpec, TIMEOUT_EXIT_CODE},
    },
    error::SprigResult,
};

/// How often the child is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs external tools as real child processes.
///
/// Both output streams are drained on dedicated threads so a chatty child
/// cannot deadlock on a full pipe buffer. Completion is detected by polling
/// `try_wait`; when the bounded wait elapses the child is killed and reaped
/// before the result is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, spec: &CommandSpec) -> SprigResult<CommandResult> {
        let mut command = Command::new(spec.program());
        command
            .args(spec.arg_list())
            .current_dir(spec.cwd())
            .stdin(if spec.input().is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(command = %spec.display(), cwd = %spec.cwd().display(), "spawning");

        let mut child = command
            .spawn()
            .map_err(|e| launch_error(spec, e.to_string()))?;

        // Write the scripted response and close the stream immediately;
        // the invoker never reacts to the child's output.
        if let Some(input) = spec.input() {
            if let Some(mut stdin) = child.stdin.take() {
                match stdin.write_all(input.as_bytes()) {
                    Ok(()) => {}
                    // The child may exit (or close stdin) without reading
                    // the confirmation; that is its prerogative.
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                    Err(e) => {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(launch_error(spec, format!("failed to write stdin: {e}")));
                    }
                }
            }
        }

        let stdout_thread = drain(child.stdout.take());
        let stderr_thread = drain(child.stderr.take());

        let start = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if start.elapsed() > spec.timeout_duration() {
                        return Ok(timed_out_result(spec, child, stdout_thread, stderr_thread));
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(launch_error(spec, e.to_string()));
                }
            }
        };

        let stdout = join_stream(stdout_thread);
        let stderr = join_stream(stderr_thread);

        debug!(
            command = %spec.display(),
            exit_code = status.code().unwrap_or(-1),
            "child exited"
        );

        Ok(CommandResult {
            // None means killed by signal; report it as a failure code.
            exit_code: status.code().unwrap_or(-1),
            stdout,
            stderr,
            timed_out: false,
        })
    }
}

fn launch_error(spec: &CommandSpec, reason: String) -> sprig_core::error::SprigError {
    ApplicationError::Launch {
        command: spec.display(),
        reason,
    }
    .into()
}

fn drain(stream: Option<impl Read + Send + 'static>) -> Option<JoinHandle<Vec<u8>>> {
    stream.map(|mut stream| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stream.read_to_end(&mut buf);
            buf
        })
    })
}

fn join_stream(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    let bytes = handle
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Kill and reap the child, then assemble the timeout result with whatever
/// output was captured before the kill.
fn timed_out_result(
    spec: &CommandSpec,
    mut child: Child,
    stdout_thread: Option<JoinHandle<Vec<u8>>>,
    stderr_thread: Option<JoinHandle<Vec<u8>>>,
) -> CommandResult {
    debug!(
        command = %spec.display(),
        seconds = spec.timeout_duration().as_secs(),
        "bounded wait elapsed, killing child"
    );
    let _ = child.kill();
    let _ = child.wait();

    CommandResult {
        exit_code: TIMEOUT_EXIT_CODE,
        stdout: join_stream(stdout_thread),
        stderr: join_stream(stderr_thread),
        timed_out: true,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

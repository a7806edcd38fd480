//! Child-process execution with captured console streams
//!
//! An invocation moves through `Idle -> Started -> (Completed | Failed) -> Idle`.
//! All per-invocation state (trace buffers, child handle, stream readers)
//! lives on the stack of [`ProcessExecutor::execute_with_trace`]; the
//! executor itself only shares the handle of the current primary process so
//! that [`ProcessExecutor::cancel`] can reach it from another thread.

pub mod options;
pub mod result;
pub mod trace;

pub use options::ExecuteOptions;
pub use result::InvocationResult;
pub use trace::{PREAMBLE, Trace};

use crate::{
    command::RobotCommand,
    error::ExecutionError,
    interfaces::{ActionLogger, TracingLogger},
};
use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::{Arc, Mutex, MutexGuard};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;
use tracing::{debug, warn};

type SharedChild = Arc<Mutex<Child>>;

/// Slot holding the cancellable (primary) process, if any.
#[derive(Debug, Default, Clone)]
struct HandleSlot(Arc<Mutex<Option<SharedChild>>>);

impl HandleSlot {
    fn retain(&self, child: &SharedChild) {
        *lock(&self.0) = Some(Arc::clone(child));
    }

    /// Clears the slot only if it still points at `child`; a newer invocation may have replaced it.
    fn release(&self, child: &SharedChild) {
        let mut slot = lock(&self.0);
        if slot.as_ref().is_some_and(|current| Arc::ptr_eq(current, child)) {
            *slot = None;
        }
    }

    fn current(&self) -> Option<SharedChild> {
        lock(&self.0).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Text read from a child stream, plus the error that cut it short, if any.
struct Capture {
    text: String,
    error: Option<io::Error>,
}

impl Capture {
    fn empty() -> Self {
        Capture {
            text: String::new(),
            error: None,
        }
    }
}

/// A stream being drained on its own thread.
///
/// Bytes land in a shared buffer as they arrive, so whatever was read is
/// still available when the stream is abandoned.
struct StreamReader {
    buffer: Arc<Mutex<Vec<u8>>>,
    done: Receiver<Option<io::Error>>,
}

impl StreamReader {
    fn spawn<R: Read + Send + 'static>(mut stream: R) -> Self {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let (tx, done) = mpsc::channel();

        let shared = Arc::clone(&buffer);
        thread::spawn(move || {
            let mut chunk = [0u8; 8192];
            let error = loop {
                match stream.read(&mut chunk) {
                    Ok(0) => break None,
                    Ok(n) => lock(&shared).extend_from_slice(&chunk[..n]),
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => break Some(e),
                }
            };
            let _ = tx.send(error);
        });

        Self { buffer, done }
    }

    /// Waits for end-of-stream until `deadline`. A stream still held open by
    /// a leftover grandchild is cut off there.
    fn finish(self, deadline: Instant) -> Capture {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let error = match self.done.recv_timeout(remaining) {
            Ok(error) => error,
            Err(RecvTimeoutError::Timeout) => Some(io::Error::new(
                io::ErrorKind::TimedOut,
                "stream still open after the process exited",
            )),
            Err(RecvTimeoutError::Disconnected) => {
                Some(io::Error::other("stream reader panicked"))
            }
        };

        Capture {
            text: String::from_utf8_lossy(&lock(&self.buffer)).into_owned(),
            error,
        }
    }
}

fn finish_reader(reader: Option<StreamReader>, deadline: Instant) -> Capture {
    reader.map_or_else(Capture::empty, |reader| reader.finish(deadline))
}

/// Exit code as a string. Signal deaths follow the shell convention of `128 + signal`.
fn render_exit_status(status: ExitStatus) -> String {
    if let Some(code) = status.code() {
        return code.to_string();
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return (128 + signal).to_string();
        }
    }
    "-1".to_string()
}

/// What a launched child left behind.
struct Completed {
    status_code: String,
    stdout: Capture,
    stderr: Capture,
}

/// Launches argument vectors as child processes and reports on them.
pub struct ProcessExecutor {
    handle: HandleSlot,
    logger: Arc<dyn ActionLogger>,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new(Arc::new(TracingLogger))
    }
}

impl ProcessExecutor {
    pub fn new(logger: Arc<dyn ActionLogger>) -> Self {
        Self {
            handle: HandleSlot::default(),
            logger,
        }
    }

    pub fn execute(&self, command: &RobotCommand, options: &ExecuteOptions) -> InvocationResult {
        self.execute_with_trace(Trace::new(), command, options)
    }

    /// Runs `command`, continuing the request/response buffers in `trace`.
    ///
    /// Never fails: launch, wait, and stream errors become a status tag and
    /// an `<exception>` block in the response trace.
    pub fn execute_with_trace(
        &self,
        mut trace: Trace,
        command: &RobotCommand,
        options: &ExecuteOptions,
    ) -> InvocationResult {
        trace.record_request(command.to_request_line());
        if options.primary {
            trace.record_response(PREAMBLE);
        }

        let started = Instant::now();
        let outcome = if options.wait {
            self.run_to_completion(command, options)
        } else {
            self.launch_detached(command, options)
        };
        let duration = started.elapsed();

        let status_code = match outcome {
            Ok(completed) => {
                let status_code = options
                    .forced_status
                    .clone()
                    .unwrap_or(completed.status_code);

                trace.record_console(&completed.stdout.text);
                if let Some(err) = completed.stdout.error {
                    trace.record_exception(ExecutionError::Stream(err));
                }
                trace.record_exit_code(&status_code);

                if status_code != "0" {
                    trace.record_error_message(&completed.stderr.text);
                    if !completed.stderr.text.is_empty() {
                        self.logger.error(&completed.stderr.text, None);
                    }
                    if let Some(err) = completed.stderr.error {
                        let err = ExecutionError::Stream(err);
                        trace.record_exception(&err);
                        self.logger.error("Failed to read error stream", Some(&err));
                    }
                }
                status_code
            }
            Err(err) => {
                warn!("Invocation failed: {}", err);
                trace.record_exception(&err);
                self.logger.error(&err.to_string(), Some(&err));
                err.tag().to_string()
            }
        };

        debug!(
            "Finished '{}' with status {} in {:?}",
            command.to_request_line(),
            status_code,
            duration
        );
        InvocationResult::new(status_code, trace, duration)
    }

    /// Requests termination of the current primary process. No-op when there is none.
    pub fn cancel(&self) {
        let Some(child) = self.handle.current() else {
            debug!("cancel requested with no running process");
            return;
        };
        let mut child = lock(&child);
        match child.kill() {
            Ok(()) => debug!("Sent kill to process {}", child.id()),
            Err(e) => debug!("Kill for process {} had no effect: {}", child.id(), e),
        }
    }

    /// Whether a cancellable process is currently retained.
    pub fn has_running_process(&self) -> bool {
        self.handle.current().is_some()
    }

    fn spawn(command: &RobotCommand, piped: bool) -> Result<Child, ExecutionError> {
        let program = command.program().ok_or(ExecutionError::EmptyCommand)?;
        let stdio = || if piped { Stdio::piped() } else { Stdio::null() };

        Command::new(program)
            .args(command.arguments())
            .stdin(Stdio::null())
            .stdout(stdio())
            .stderr(stdio())
            .spawn()
            .map_err(|source| ExecutionError::Launch {
                program: program.to_string(),
                source,
            })
    }

    fn run_to_completion(
        &self,
        command: &RobotCommand,
        options: &ExecuteOptions,
    ) -> Result<Completed, ExecutionError> {
        let mut child = Self::spawn(command, true)?;

        // Drain while waiting so a chatty child cannot block on a full pipe.
        let stdout = child.stdout.take().map(StreamReader::spawn);
        let stderr = child.stderr.take().map(StreamReader::spawn);

        let child: SharedChild = Arc::new(Mutex::new(child));
        if options.primary {
            self.handle.retain(&child);
        }
        let waited = wait_for_exit(&child, options);
        if options.primary {
            self.handle.release(&child);
        }
        let status = waited?;

        // Grandchildren may inherit the pipes and keep them open past our child's exit.
        let drain_deadline = Instant::now() + options.stream_grace;
        Ok(Completed {
            status_code: render_exit_status(status),
            stdout: finish_reader(stdout, drain_deadline),
            stderr: finish_reader(stderr, drain_deadline),
        })
    }

    fn launch_detached(
        &self,
        command: &RobotCommand,
        options: &ExecuteOptions,
    ) -> Result<Completed, ExecutionError> {
        let child: SharedChild = Arc::new(Mutex::new(Self::spawn(command, false)?));
        if options.primary {
            self.handle.retain(&child);
        }

        let slot = self.handle.clone();
        let interval = options.poll_interval;
        thread::spawn(move || {
            loop {
                match lock(&child).try_wait() {
                    Ok(None) => {}
                    Ok(Some(_)) | Err(_) => break,
                }
                thread::sleep(interval);
            }
            slot.release(&child);
        });

        Ok(Completed {
            status_code: "0".to_string(),
            stdout: Capture::empty(),
            stderr: Capture::empty(),
        })
    }
}

/// Polls the child until it exits, giving `cancel` a chance to take the lock between polls.
fn wait_for_exit(
    child: &SharedChild,
    options: &ExecuteOptions,
) -> Result<ExitStatus, ExecutionError> {
    let deadline = options
        .timeout
        .map(|timeout| (Instant::now() + timeout, timeout));

    loop {
        {
            let mut child = lock(child);
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {}
                Err(e) => {
                    warn!("Lost track of process {}, killing: {}", child.id(), e);
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ExecutionError::Wait(e));
                }
            }
            if let Some((deadline, timeout)) = deadline
                && Instant::now() >= deadline
            {
                warn!("Process {} exceeded {:?}, killing", child.id(), timeout);
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExecutionError::Timeout(timeout));
            }
        }
        thread::sleep(options.poll_interval);
    }
}

//! Runs the nmap process and races it against cancellation.
//!
//! Idle → Launched → Completed | Cancelled | Failed. The controller owns
//! both output pipes until the process is finished and hands back the
//! collected bytes; on the cancelled path the process group is killed and
//! the child reaped before [`ScanError::Timeout`] is returned.

use crate::{Result, ScanError};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinError;
use tokio::time::{sleep, timeout};
use tokio_util::sync::CancellationToken;

/// Receives raw output chunks as nmap produces them.
pub type OutputSink = UnboundedSender<Vec<u8>>;

/// Upper bound on waiting for a killed child to be reaped.
const REAP_TIMEOUT: Duration = Duration::from_secs(5);

const READ_CHUNK: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    Idle,
    Launched,
    Completed,
    Cancelled,
    Failed,
}

/// What a finished process left behind.
#[derive(Debug)]
pub struct ProcessOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

pub struct Execution {
    binary: PathBuf,
    args: Vec<String>,
    cancel: CancellationToken,
    deadline: Option<Duration>,
    stdout_sink: Option<OutputSink>,
    stderr_sink: Option<OutputSink>,
    state: ExecutionState,
}

impl Execution {
    pub fn new(binary: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            binary: binary.into(),
            args,
            cancel: CancellationToken::new(),
            deadline: None,
            stdout_sink: None,
            stderr_sink: None,
            state: ExecutionState::Idle,
        }
    }

    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn stdout_sink(mut self, sink: Option<OutputSink>) -> Self {
        self.stdout_sink = sink;
        self
    }

    pub fn stderr_sink(mut self, sink: Option<OutputSink>) -> Self {
        self.stderr_sink = sink;
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn state(&self) -> ExecutionState {
        self.state
    }

    fn transition(&mut self, next: ExecutionState) {
        debug!("nmap execution {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Spawns the process and waits for it to exit, for the token to be
    /// cancelled or for the deadline to pass, whichever is observed first.
    pub async fn execute(&mut self) -> Result<ProcessOutput> {
        if self.cancel.is_cancelled() {
            self.transition(ExecutionState::Cancelled);
            return Err(ScanError::Timeout);
        }

        let mut command = Command::new(&self.binary);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        // Own process group, so helpers nmap forks are killed along with it.
        #[cfg(unix)]
        command.process_group(0);

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                self.transition(ExecutionState::Failed);
                return Err(ScanError::Execution(spawn_error_message(&self.binary, &e)));
            }
        };
        let pid = child.id();
        self.transition(ExecutionState::Launched);

        let mut stdout_task = tokio::spawn(drain(child.stdout.take(), self.stdout_sink.take()));
        let mut stderr_task = tokio::spawn(drain(child.stderr.take(), self.stderr_sink.take()));

        let deadline = self.deadline;
        let expired = async move {
            match deadline {
                Some(d) => sleep(d).await,
                None => std::future::pending::<()>().await,
            }
        };

        // The process only counts as finished once both pipes are closed;
        // anything it left behind holding them is covered by the race too.
        let finished = async {
            let status = child.wait().await;
            let stdout = (&mut stdout_task).await;
            let stderr = (&mut stderr_task).await;
            (status, stdout, stderr)
        };

        let outcome = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            _ = expired => None,
            outcome = finished => Some(outcome),
        };

        let Some((status, stdout, stderr)) = outcome else {
            stdout_task.abort();
            stderr_task.abort();
            terminate(&mut child, pid).await;
            self.transition(ExecutionState::Cancelled);
            return Err(ScanError::Timeout);
        };

        let output = status
            .map_err(|e| ScanError::Execution(e.to_string()))
            .and_then(|status| Ok((status, collect(stdout)?, collect(stderr)?)));
        let (status, stdout, stderr) = match output {
            Ok(output) => output,
            Err(e) => {
                self.transition(ExecutionState::Failed);
                return Err(e);
            }
        };
        self.transition(ExecutionState::Completed);

        if !status.success() {
            warn!("nmap exited with {}", status);
        }

        Ok(ProcessOutput {
            status,
            stdout,
            stderr,
        })
    }
}

fn spawn_error_message(binary: &Path, err: &std::io::Error) -> String {
    format!("{}: {}", binary.display(), err)
}

/// Kills the child's process group and waits a bounded time for the
/// child to be reaped.
async fn terminate(child: &mut Child, pid: Option<u32>) {
    #[cfg(unix)]
    if let Some(pid) = pid {
        use nix::sys::signal::{killpg, Signal};
        use nix::unistd::Pid;

        if let Err(e) = killpg(Pid::from_raw(pid as i32), Signal::SIGKILL) {
            debug!("killing process group {} failed: {}", pid, e);
        }
    }
    #[cfg(not(unix))]
    let _ = pid;

    if let Err(e) = child.start_kill() {
        // Already exited between the race and the kill.
        debug!("kill after cancellation failed: {}", e);
    }
    match timeout(REAP_TIMEOUT, child.wait()).await {
        Ok(Ok(status)) => debug!("cancelled nmap process reaped ({})", status),
        Ok(Err(e)) => warn!("failed to reap cancelled nmap process: {}", e),
        Err(_) => warn!("cancelled nmap process not reaped within {:?}", REAP_TIMEOUT),
    }
}

async fn drain<R>(reader: Option<R>, sink: Option<OutputSink>) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut collected = Vec::new();
    let Some(mut reader) = reader else {
        return Ok(collected);
    };

    let mut chunk = vec![0u8; READ_CHUNK];
    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        if let Some(sink) = &sink {
            // A dropped receiver only stops streaming, not collection.
            let _ = sink.send(chunk[..n].to_vec());
        }
        collected.extend_from_slice(&chunk[..n]);
    }
    Ok(collected)
}

fn collect(joined: std::result::Result<std::io::Result<Vec<u8>>, JoinError>) -> Result<Vec<u8>> {
    joined
        .map_err(|e| ScanError::Execution(format!("output reader failed: {}", e)))?
        .map_err(ScanError::from)
}

// src/session.rs
//! The editor session: language selection, source/stdin text, last output,
//! and the run lifecycle that drives the relay.

use crate::errors::Result;
use crate::languages::{self, Language};
use crate::relay::{NO_OUTPUT_MESSAGE, NormalizedResult, RunRequest};

pub const RUNNING_PLACEHOLDER: &str = "Running...";
pub const STOPPED_MESSAGE: &str = "Execution stopped";

/// Observable run lifecycle states. `Completed` means the last issued run's
/// result (success or failure) is what the output shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Running,
    Completed,
}

/// What one run came back with. Transport failure means the relay itself
/// could not be reached; program and validation failures arrive as a
/// `NormalizedResult` with `success == false`.
#[derive(Debug, Clone)]
pub enum RunReply {
    Completed(NormalizedResult),
    TransportFailed(String),
}

/// Ticket for one issued run. Replies carrying a ticket that is no longer
/// active are discarded, which closes the late-arrival race: a stopped or
/// superseded run can never overwrite newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunId(u64);

/// The controller's view of the relay endpoint.
pub trait RelayTransport {
    /// Submits one run request and returns the relay's normalized result.
    fn execute(
        &self,
        request: &RunRequest,
    ) -> impl std::future::Future<Output = Result<NormalizedResult>> + Send;
}

/// In-memory state for one editor tab. Single logical thread of control:
/// every mutation happens through user-input setters or `apply`.
pub struct EditorSession {
    language: &'static Language,
    code: String,
    stdin: String,
    output: String,
    status: RunStatus,
    active_run: Option<RunId>,
    issued_runs: u64,
}

impl EditorSession {
    /// Fresh session on the first catalog language, showing its starter code.
    pub fn new() -> Self {
        let language = &languages::LANGUAGES[0];
        Self {
            language,
            code: language.starter.to_string(),
            stdin: String::new(),
            output: String::new(),
            status: RunStatus::Idle,
            active_run: None,
            issued_runs: 0,
        }
    }

    pub fn language(&self) -> &'static Language {
        self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn stdin(&self) -> &str {
        &self.stdin
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn set_stdin(&mut self, stdin: impl Into<String>) {
        self.stdin = stdin.into();
    }

    /// Switches the active language. This is a full session reset: source
    /// text becomes the language's starter snippet, stdin and output are
    /// cleared, and any outstanding run is abandoned. Unknown ids leave the
    /// session untouched.
    pub fn select_language(&mut self, id: &str) -> bool {
        let Some(language) = languages::find(id) else {
            return false;
        };
        self.language = language;
        self.code = language.starter.to_string();
        self.stdin.clear();
        self.output.clear();
        self.status = RunStatus::Idle;
        self.active_run = None;
        true
    }

    /// Starts a run if there is code to run. Returns the ticket plus the
    /// request to send; the placeholder output is set before the caller gets
    /// a chance to touch the network. Issuing a second run while one is
    /// outstanding simply supersedes it.
    pub fn begin_run(&mut self) -> Option<(RunId, RunRequest)> {
        if self.code.trim().is_empty() {
            return None;
        }

        self.issued_runs += 1;
        let id = RunId(self.issued_runs);
        self.active_run = Some(id);
        self.status = RunStatus::Running;
        self.output = RUNNING_PLACEHOLDER.to_string();

        Some((
            id,
            RunRequest {
                language: self.language.id.to_string(),
                version: self.language.version.to_string(),
                code: self.code.clone(),
                stdin: self.stdin.clone(),
            },
        ))
    }

    /// Applies one run's reply. Returns false when the ticket is stale (the
    /// run was stopped or superseded), in which case nothing changes.
    pub fn apply(&mut self, id: RunId, reply: RunReply) -> bool {
        if self.active_run != Some(id) {
            return false;
        }
        self.active_run = None;
        self.status = RunStatus::Completed;
        self.output = match reply {
            RunReply::Completed(result) => {
                if result.success {
                    result
                        .output
                        .filter(|output| !output.is_empty())
                        .unwrap_or_else(|| NO_OUTPUT_MESSAGE.to_string())
                } else {
                    format!("Error: {}", result.error.unwrap_or_default())
                }
            }
            RunReply::TransportFailed(message) => format!("Network error: {}", message),
        };
        true
    }

    /// Stops the displayed run. No network-level cancellation is attempted;
    /// the outstanding relay call keeps going, but its ticket is invalidated
    /// so a late reply is discarded instead of overwriting this state.
    pub fn stop(&mut self) {
        self.active_run = None;
        self.status = RunStatus::Idle;
        self.output = STOPPED_MESSAGE.to_string();
    }

    /// Runs the current source to completion against a relay: one outbound
    /// call, its reply applied unless the run was invalidated meanwhile.
    /// Every failure ends up as output text; nothing is retried.
    pub async fn run<R: RelayTransport>(&mut self, relay: &R) -> bool {
        let Some((id, request)) = self.begin_run() else {
            return false;
        };
        let reply = match relay.execute(&request).await {
            Ok(result) => RunReply::Completed(result),
            Err(e) => RunReply::TransportFailed(e.to_string()),
        };
        self.apply(id, reply)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

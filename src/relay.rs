// src/relay.rs
use serde::{Deserialize, Serialize};

use crate::backend::ExecutionBackend;
use crate::errors::{RelayError, Result};
use crate::languages;

/// Compile/run limits attached to every backend payload. These are relay
/// policy, not caller-configurable.
pub const COMPILE_TIMEOUT_MS: u32 = 10_000;
pub const RUN_TIMEOUT_MS: u32 = 3_000;
/// The backend's "no limit" sentinel.
pub const NO_MEMORY_LIMIT: i64 = -1;

/// Returned instead of an empty string when a run succeeds silently.
pub const NO_OUTPUT_MESSAGE: &str = "Program executed successfully (no output)";

/// One run request as submitted by the editor. Absent fields decode to empty
/// strings and are caught by validation, so a malformed body still gets the
/// missing-fields error instead of a bare deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub stdin: String,
}

#[derive(Debug, Serialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

/// The execution backend's expected wire format.
#[derive(Debug, Serialize)]
pub struct BackendPayload {
    pub language: String,
    pub version: String,
    pub files: Vec<SourceFile>,
    pub stdin: String,
    pub args: Vec<String>,
    pub compile_timeout: u32,
    pub run_timeout: u32,
    pub compile_memory_limit: i64,
    pub run_memory_limit: i64,
}

/// The `run` object of a backend reply: raw process output plus how the
/// process ended.
#[derive(Debug, Clone, Deserialize)]
pub struct RunOutcome {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    pub code: i64,
    pub signal: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BackendResponse {
    pub run: RunOutcome,
}

/// What the relay hands back to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "exitCode", skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i64>,
}

fn validate(request: &RunRequest) -> Result<()> {
    if request.language.is_empty() || request.version.is_empty() || request.code.is_empty() {
        return Err(RelayError::MissingFields);
    }
    Ok(())
}

/// Translates a run request into the backend's wire format: one named source
/// file, the stdin text, no args, fixed limits.
pub fn build_payload(request: &RunRequest) -> BackendPayload {
    BackendPayload {
        language: request.language.clone(),
        version: request.version.clone(),
        files: vec![SourceFile {
            name: languages::file_name_for(&request.language).to_string(),
            content: request.code.clone(),
        }],
        stdin: request.stdin.clone(),
        args: Vec::new(),
        compile_timeout: COMPILE_TIMEOUT_MS,
        run_timeout: RUN_TIMEOUT_MS,
        compile_memory_limit: NO_MEMORY_LIMIT,
        run_memory_limit: NO_MEMORY_LIMIT,
    }
}

/// stdout then stderr, separated by a newline only when both are non-empty.
fn combined_output(run: &RunOutcome) -> String {
    let mut output = String::new();
    if !run.stdout.is_empty() {
        output.push_str(&run.stdout);
    }
    if !run.stderr.is_empty() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&run.stderr);
    }
    output
}

/// Classifies a backend outcome strictly by exit code. A nonzero exit carries
/// the combined output as the error text, falling back to an exit-code
/// message; a zero exit carries the combined output, falling back to the
/// fixed no-output message. The asymmetry is part of the contract.
pub fn normalize(run: &RunOutcome) -> NormalizedResult {
    let output = combined_output(run);

    if run.code != 0 {
        let error = if output.is_empty() {
            format!("Program exited with code {}", run.code)
        } else {
            output
        };
        return NormalizedResult {
            success: false,
            output: None,
            error: Some(error),
            exit_code: None,
        };
    }

    let output = if output.is_empty() {
        NO_OUTPUT_MESSAGE.to_string()
    } else {
        output
    };
    NormalizedResult {
        success: true,
        output: Some(output),
        error: None,
        exit_code: Some(run.code),
    }
}

/// Validate, translate, make exactly one backend call, normalize. Stateless:
/// the result is a pure function of the request and the backend's reply, so
/// no retry, no queueing, nothing retained between calls.
pub async fn execute<B: ExecutionBackend>(
    backend: &B,
    request: &RunRequest,
) -> Result<NormalizedResult> {
    validate(request)?;
    let payload = build_payload(request);
    let run = backend.run(&payload).await?;
    Ok(normalize(&run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend stub that replays a canned outcome and counts calls.
    struct StubBackend {
        outcome: RunOutcome,
        calls: AtomicUsize,
        last_payload: Mutex<Option<String>>,
    }

    impl StubBackend {
        fn returning(outcome: RunOutcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
                last_payload: Mutex::new(None),
            }
        }
    }

    impl ExecutionBackend for StubBackend {
        async fn run(&self, payload: &BackendPayload) -> Result<RunOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_payload.lock().unwrap() = Some(serde_json::to_string(payload).unwrap());
            Ok(self.outcome.clone())
        }
    }

    struct UnreachableBackend;

    impl ExecutionBackend for UnreachableBackend {
        async fn run(&self, _payload: &BackendPayload) -> Result<RunOutcome> {
            Err(RelayError::BackendStatus {
                status: 503,
                body: "backend offline".to_string(),
            })
        }
    }

    fn outcome(stdout: &str, stderr: &str, code: i64) -> RunOutcome {
        RunOutcome {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            code,
            signal: None,
        }
    }

    fn request(language: &str, version: &str, code: &str) -> RunRequest {
        RunRequest {
            language: language.to_string(),
            version: version.to_string(),
            code: code.to_string(),
            stdin: String::new(),
        }
    }

    #[tokio::test]
    async fn missing_fields_fail_before_any_backend_call() {
        let backend = StubBackend::returning(outcome("unreachable", "", 0));

        for req in [
            request("", "3.10.0", "print(1)"),
            request("python", "", "print(1)"),
            request("python", "3.10.0", ""),
        ] {
            let err = execute(&backend, &req).await.unwrap_err();
            assert!(matches!(err, RelayError::MissingFields));
            assert_eq!(err.status_code(), 400);
            assert_eq!(
                err.to_string(),
                "Missing required fields: language, version, or code"
            );
        }
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn silent_success_gets_the_no_output_message() {
        let backend = StubBackend::returning(outcome("", "", 0));
        let result = execute(&backend, &request("python", "3.10.0", "pass")).await.unwrap();
        assert!(result.success);
        assert_eq!(result.output.as_deref(), Some(NO_OUTPUT_MESSAGE));
        assert_eq!(result.exit_code, Some(0));
        assert!(result.error.is_none());
    }

    #[test]
    fn stdout_and_stderr_are_joined_by_a_single_newline() {
        let result = normalize(&outcome("A", "B", 0));
        assert_eq!(result.output.as_deref(), Some("A\nB"));

        // No separator when only one stream produced text.
        assert_eq!(normalize(&outcome("A", "", 0)).output.as_deref(), Some("A"));
        assert_eq!(normalize(&outcome("", "B", 0)).output.as_deref(), Some("B"));
    }

    #[test]
    fn nonzero_exit_reports_the_combined_output_as_error() {
        let result = normalize(&outcome("partial", "boom", 1));
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("partial\nboom"));
        assert!(result.output.is_none());
        assert!(result.exit_code.is_none());
    }

    #[test]
    fn nonzero_exit_without_output_reports_the_exit_code() {
        let result = normalize(&outcome("", "", 137));
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Program exited with code 137"));
    }

    #[tokio::test]
    async fn identical_requests_produce_identical_results() {
        let backend = StubBackend::returning(outcome("hi\n", "", 0));
        let req = request("python", "3.10.0", "print('hi')");
        let first = execute(&backend, &req).await.unwrap();
        let second = execute(&backend, &req).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn hello_world_round_trip() {
        let backend = StubBackend::returning(outcome("hi\n", "", 0));
        let result = execute(&backend, &request("python", "3.10.0", "print('hi')"))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({"success": true, "output": "hi\n", "exitCode": 0})
        );
    }

    #[tokio::test]
    async fn payload_carries_filename_stdin_and_fixed_limits() {
        let backend = StubBackend::returning(outcome("", "", 0));
        let mut req = request("go", "1.16.2", "package main");
        req.stdin = "42".to_string();
        execute(&backend, &req).await.unwrap();

        let payload = backend.last_payload.lock().unwrap().clone().unwrap();
        let payload: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(payload["files"][0]["name"], "main.go");
        assert_eq!(payload["files"][0]["content"], "package main");
        assert_eq!(payload["stdin"], "42");
        assert_eq!(payload["args"], serde_json::json!([]));
        assert_eq!(payload["compile_timeout"], 10_000);
        assert_eq!(payload["run_timeout"], 3_000);
        assert_eq!(payload["compile_memory_limit"], -1);
        assert_eq!(payload["run_memory_limit"], -1);
    }

    #[tokio::test]
    async fn backend_failure_is_a_server_error() {
        let err = execute(&UnreachableBackend, &request("c", "10.2.0", "int main(){}"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("503"));
    }
}

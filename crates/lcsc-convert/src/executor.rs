//! External converter process execution.
//!
//! Runs the configured converter as a child process with timeout management
//! and output capturing. The child is killed if the timeout elapses or the
//! calling future is dropped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;

use lcsc_core::config::ConverterConfig;
use lcsc_core::types::{ArtifactKind, LcscId};

use crate::error::ConverterError;

/// Maximum stderr characters carried in an error.
const STDERR_LIMIT: usize = 2000;

/// Outcome of a successful converter run.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Standard output from the process.
    pub stdout: String,
    /// Standard error from the process.
    pub stderr: String,
    /// Wall-clock duration.
    pub duration_ms: u64,
}

/// Paths and identity of a single conversion.
#[derive(Debug, Clone)]
pub struct ExecutionParams<'a> {
    /// Artifact being produced.
    pub kind: ArtifactKind,
    /// Component being converted.
    pub lcsc_id: &'a LcscId,
    /// CAD document written for the converter.
    pub input_path: PathBuf,
    /// Directory the converter writes into.
    pub output_dir: PathBuf,
}

/// Runs the external converter command.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    command: String,
    args: Vec<String>,
    env: HashMap<String, String>,
    timeout_seconds: u64,
}

impl ProcessExecutor {
    /// Create an executor from configuration.
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            env: config.env.clone(),
            timeout_seconds: config.timeout_seconds,
        }
    }

    /// Substitute template placeholders in the configured arguments.
    pub fn substitute_args(&self, params: &ExecutionParams<'_>) -> Vec<String> {
        let input = params.input_path.to_string_lossy();
        let output_dir = params.output_dir.to_string_lossy();

        self.args
            .iter()
            .map(|arg| {
                arg.replace("{kind}", params.kind.as_str())
                    .replace("{input}", &input)
                    .replace("{output_dir}", &output_dir)
                    .replace("{lcsc_id}", params.lcsc_id.as_str())
            })
            .collect()
    }

    /// Run the converter once.
    ///
    /// Non-zero exit, signal termination, spawn failure and timeout are all
    /// errors. Whether an artifact was produced is the caller's concern.
    pub async fn execute(
        &self,
        params: &ExecutionParams<'_>,
        working_dir: &Path,
    ) -> Result<ExecutionResult, ConverterError> {
        let start = Instant::now();
        let args = self.substitute_args(params);

        tracing::debug!(
            command = %self.command,
            args = ?args,
            kind = %params.kind,
            lcsc_id = %params.lcsc_id,
            "Executing converter"
        );

        let mut cmd = Command::new(&self.command);
        cmd.args(&args)
            .current_dir(working_dir)
            .envs(&self.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let timeout = Duration::from_secs(self.timeout_seconds);
        let result = tokio::time::timeout(timeout, cmd.output()).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let output = match result {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                tracing::error!(command = %self.command, error = %e, "Failed to start converter");
                return Err(ConverterError::Spawn {
                    command: self.command.clone(),
                    source: e,
                });
            }
            Err(_) => {
                tracing::error!(
                    command = %self.command,
                    kind = %params.kind,
                    lcsc_id = %params.lcsc_id,
                    "Converter timed out after {}s",
                    self.timeout_seconds
                );
                return Err(ConverterError::Timeout(self.timeout_seconds));
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            let Some(code) = output.status.code() else {
                return Err(ConverterError::Killed);
            };
            let excerpt: String = stderr.chars().take(500).collect();
            tracing::error!(
                command = %self.command,
                kind = %params.kind,
                lcsc_id = %params.lcsc_id,
                exit_code = code,
                stderr = %excerpt,
                "Converter failed"
            );
            return Err(ConverterError::ProcessFailed {
                code,
                stderr: stderr.chars().take(STDERR_LIMIT).collect(),
            });
        }

        tracing::debug!(
            kind = %params.kind,
            lcsc_id = %params.lcsc_id,
            duration_ms,
            "Converter finished"
        );

        Ok(ExecutionResult {
            stdout,
            stderr,
            duration_ms,
        })
    }
}

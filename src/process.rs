//! Running external command-line tools with captured output and a deadline

use crate::error::{DomainFinderError, Result};
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;

/// Captured result of one tool invocation
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl ToolOutput {
    /// Standard output followed by standard error, lowercased
    pub fn combined_lowercase(&self) -> String {
        let mut combined = String::with_capacity(self.stdout.len() + self.stderr.len());
        combined.push_str(&self.stdout);
        combined.push_str(&self.stderr);
        combined.to_lowercase()
    }
}

/// Run `program` with `args`, waiting at most `limit` for it to finish.
///
/// A non-zero exit is not an error here; callers decide what the exit code
/// means. The child is killed if the deadline passes.
pub async fn run_tool<I, S>(program: &str, args: I, limit: Duration) -> Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let start = Instant::now();

    let mut command = Command::new(program);
    command.args(args).kill_on_drop(true);

    let output = timeout(limit, command.output())
        .await
        .map_err(|_| DomainFinderError::timeout(program, limit))?
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => DomainFinderError::tool_missing(program),
            _ => DomainFinderError::spawn(program, e.to_string()),
        })?;

    let result = ToolOutput {
        code: output.status.code(),
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration: start.elapsed(),
    };

    tracing::debug!(
        tool = %program,
        code = ?result.code,
        duration_ms = %result.duration.as_millis(),
        "Tool finished"
    );

    Ok(result)
}

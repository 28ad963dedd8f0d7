//! Package fetching through the external toolchain
//!
//! Each attempt runs `<binary> <subcommand> <package>` as a child process and
//! waits for it to exit. Output is captured so the child cannot draw over the
//! live view; only the last stderr line is kept for the error message.

use crate::config::Settings;
use crate::error::FetchError;
use crate::toolchain::ToolchainConfig;
use rand::Rng;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command as TokioCommand;

/// Result of one fetch attempt
#[derive(Debug)]
pub struct FetchOutcome {
    pub package: String,
    pub result: Result<(), FetchError>,
}

/// Runs the toolchain's fetch command for one package at a time
#[derive(Debug, Clone)]
pub struct PackageFetcher {
    binary: String,
    subcommand: String,
    working_dir: PathBuf,
    max_delay: Duration,
}

impl PackageFetcher {
    /// Create a fetcher with no pause between attempts
    pub fn new(
        binary: impl Into<String>,
        subcommand: impl Into<String>,
        working_dir: PathBuf,
    ) -> Self {
        Self {
            binary: binary.into(),
            subcommand: subcommand.into(),
            working_dir,
            max_delay: Duration::ZERO,
        }
    }

    /// Create a fetcher from resolved settings
    pub fn from_settings<C: ToolchainConfig>(config: &C, settings: &Settings) -> Self {
        Self::new(
            settings.binary.clone(),
            config.fetch_subcommand(),
            settings.working_dir.clone(),
        )
        .with_max_delay(settings.max_delay)
    }

    /// Pause for a random duration below `max_delay` after each attempt
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Fetch one package. Failures are returned in the outcome, never raised.
    pub async fn fetch(&self, package: &str) -> FetchOutcome {
        let result = self.run(package).await;

        let delay = self.jitter();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        FetchOutcome {
            package: package.to_string(),
            result,
        }
    }

    async fn run(&self, package: &str) -> Result<(), FetchError> {
        let output = TokioCommand::new(&self.binary)
            .arg(&self.subcommand)
            .arg(package)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| FetchError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(FetchError::Exit {
                code: output.status.code(),
                stderr: last_line(&output.stderr),
            })
        }
    }

    fn jitter(&self) -> Duration {
        let max_ms = self.max_delay.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::rng().random_range(0..max_ms))
    }
}

/// Last non-empty line of captured output
fn last_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

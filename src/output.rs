//! GitHub Actions output file writer
//!
//! Appends `key=value` lines to the file named by `GITHUB_OUTPUT`. When the
//! variable is unset (local runs, other CI systems) every write is a no-op.

use crate::core::error::PublishError;
use crate::orchestration::PublishOutcome;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Environment variable naming the output file
const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Writer for GitHub Actions step outputs
#[derive(Debug, Clone)]
pub struct ActionsOutput {
    path: Option<PathBuf>,
}

impl ActionsOutput {
    /// Create a writer for an explicit output file, or a no-op writer for `None`
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Create a writer from the `GITHUB_OUTPUT` environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(GITHUB_OUTPUT_ENV).map(PathBuf::from))
    }

    /// Append a single `key=value` line; no-op when no output file is configured
    pub async fn set_output(&self, key: &str, value: &str) -> Result<(), PublishError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| PublishError::OutputWrite {
                message: e.to_string(),
            })?;

        file.write_all(format!("{}={}\n", key, value).as_bytes())
            .await
            .map_err(|e| PublishError::OutputWrite {
                message: e.to_string(),
            })?;

        Ok(())
    }

    /// Write the output keys for a publish outcome.
    ///
    /// A failed run writes no keys; the non-zero exit code is the sole
    /// failure signal to the caller.
    pub async fn record(&self, outcome: &PublishOutcome) -> Result<(), PublishError> {
        match outcome {
            PublishOutcome::AlreadyPublished { version } => {
                self.set_output("published", "true").await?;
                self.set_output("published_version", version).await?;
                self.set_output("already_published", "true").await?;
            }
            PublishOutcome::Published { version } => {
                self.set_output("published", "true").await?;
                self.set_output("published_version", version).await?;
            }
            PublishOutcome::Failed { .. } => {}
        }

        Ok(())
    }
}

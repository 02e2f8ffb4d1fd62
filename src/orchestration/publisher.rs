//! Publish orchestrator
//!
//! Drives the complete workflow: optional pull of the main branch, manifest
//! read, registry existence check, and the bounded publish-retry loop. The
//! orchestrator is generic over [`CommandRunner`] so every branch is testable
//! without real subprocesses.

use crate::core::config::PublishConfig;
use crate::core::cwd::CwdGuard;
use crate::core::error::PublishError;
use crate::core::retry::{RetryManager, RetryOptions};
use crate::core::runner::CommandRunner;
use crate::manifest::PackageManifest;
use crate::orchestration::outcome::PublishOutcome;

/// Script invoked for the actual publish, defined in the package manifest
const PUBLISH_SCRIPT: &str = "changeset:publish";

/// Main orchestrator for the trusted-publishing workflow
pub struct PublishOrchestrator<R: CommandRunner> {
    config: PublishConfig,
    runner: R,
    retry_options: RetryOptions,
}

impl<R: CommandRunner> PublishOrchestrator<R> {
    /// Create an orchestrator with the default retry policy (3 attempts,
    /// 10-second delay)
    pub fn new(config: PublishConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            retry_options: RetryOptions::default(),
        }
    }

    /// Override the retry policy
    pub fn with_retry_options(mut self, retry_options: RetryOptions) -> Self {
        self.retry_options = retry_options;
        self
    }

    /// Run the workflow to completion.
    ///
    /// Returns the tri-state outcome on a definitive result; `Err` is
    /// reserved for fatal conditions (manifest problems, pull failure,
    /// rejected commands) that abort before the retry loop concludes.
    pub async fn run(&self) -> Result<PublishOutcome, PublishError> {
        if self.config.should_pull {
            // Pull the latest changes the release job just pushed
            self.pull_latest().await?;
        }

        let manifest = PackageManifest::load(self.config.package_json_path()).await?;
        let name = manifest.package_name()?;
        let version = manifest.package_version()?;
        println!("Current version to publish: {}", version);

        println!("Checking if version {} is already published...", version);
        if self.version_exists(name, version).await? {
            println!("Version {} is already published to npm", version);
            return Ok(PublishOutcome::AlreadyPublished {
                version: version.to_string(),
            });
        }
        println!(
            "Version {} not found on npm, proceeding with publish...",
            version
        );

        let retry = RetryManager::new(self.retry_options.clone());
        let max_attempts = retry.max_attempts();

        let result = retry
            .retry(|attempt| self.publish_attempt(attempt, max_attempts))
            .await;

        match result {
            Ok(()) => {
                println!("✅ Published {}@{} to npm", name, version);
                Ok(PublishOutcome::Published {
                    version: version.to_string(),
                })
            }
            Err(error) => {
                eprintln!(
                    "❌ Failed to publish after {} attempts: {}",
                    max_attempts, error
                );
                Ok(PublishOutcome::Failed {
                    attempts: max_attempts,
                })
            }
        }
    }

    /// Pull the main branch before reading any files
    async fn pull_latest(&self) -> Result<(), PublishError> {
        let output = self.runner.run("git", &["pull", "origin", "main"]).await?;

        if !output.success() {
            return Err(PublishError::PullFailed {
                message: output.failure_message(),
            });
        }

        Ok(())
    }

    /// Query the registry for `<name>@<version>`.
    ///
    /// The exit status is the sole signal: 0 means the version exists, any
    /// non-zero status (E404 or otherwise) means it does not. Query failures
    /// other than "not found" are indistinguishable here and are treated as
    /// "absent".
    async fn version_exists(&self, name: &str, version: &str) -> Result<bool, PublishError> {
        let package_spec = format!("{}@{}", name, version);
        let output = self
            .runner
            .run("npm", &["view", &package_spec, "version"])
            .await?;

        Ok(output.success())
    }

    /// One publish attempt, entering the package root for its duration when
    /// a directory change is required
    async fn publish_attempt(&self, attempt: u32, max_attempts: u32) -> Result<(), PublishError> {
        println!("Publish attempt {} of {}...", attempt, max_attempts);

        // The guard restores the original directory when the attempt ends,
        // whether the publish command succeeded or not
        let _guard = if self.config.needs_cd() {
            Some(
                CwdGuard::enter(&self.config.js_root).map_err(|e| {
                    PublishError::PublishFailed {
                        message: e.to_string(),
                    }
                })?,
            )
        } else {
            None
        };

        let output = self.runner.run("npm", &["run", PUBLISH_SCRIPT]).await?;

        if !output.success() {
            return Err(PublishError::PublishFailed {
                message: output.failure_message(),
            });
        }

        Ok(())
    }
}

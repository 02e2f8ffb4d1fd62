//! npm trusted-publish CLI
//!
//! Publishes the package to npm via OIDC trusted publishing, as a single CI
//! step: skips the publish when the manifest version is already on the
//! registry, retries transient failures, and reports the result through the
//! GitHub Actions output file and the exit code.

use anyhow::Result;
use clap::Parser;
use npm_trusted_publish::{
    ActionsOutput, ProcessRunner, PublishConfig, PublishOrchestrator, ResolveOptions,
};
use std::process;

/// Publish to npm using OIDC trusted publishing
#[derive(Parser)]
#[command(name = "npm-trusted-publish")]
#[command(version = "0.1.0")]
#[command(about = "Publish to npm using OIDC trusted publishing", long_about = None)]
struct Cli {
    /// Pull latest changes before publishing (defaults to SHOULD_PULL)
    #[arg(long)]
    should_pull: bool,

    /// JavaScript package root directory (defaults to JS_ROOT, then auto-detect)
    #[arg(long, value_name = "PATH")]
    js_root: Option<String>,
}

#[tokio::main]
async fn main() {
    let result = run().await;

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("\n❌ Error");
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    println!("\n📦 npm-trusted-publish\n");

    let config = PublishConfig::resolve(ResolveOptions {
        // The flag can only be asserted on the command line; absence defers
        // to the environment
        cli_should_pull: cli.should_pull.then_some(true),
        cli_js_root: cli.js_root,
        env: std::env::vars().collect(),
        base_dir: std::env::current_dir()?,
    });

    let orchestrator = PublishOrchestrator::new(config, ProcessRunner::new());
    let outcome = orchestrator.run().await?;

    ActionsOutput::from_env().record(&outcome).await?;

    Ok(outcome.exit_code())
}

pub mod config;
pub mod cwd;
pub mod error;
pub mod retry;
pub mod runner;

pub use config::{PublishConfig, ResolveOptions};
pub use cwd::CwdGuard;
pub use error::PublishError;
pub use retry::{RetryManager, RetryOptions};
pub use runner::{CommandOutput, CommandRunner, ProcessRunner};

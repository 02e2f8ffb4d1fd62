pub mod core;
pub mod manifest;
pub mod orchestration;
pub mod output;

pub use crate::core::*;
pub use manifest::PackageManifest;
pub use orchestration::{PublishOrchestrator, PublishOutcome};
pub use output::ActionsOutput;

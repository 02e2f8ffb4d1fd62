pub mod outcome;
pub mod publisher;

pub use outcome::PublishOutcome;
pub use publisher::PublishOrchestrator;

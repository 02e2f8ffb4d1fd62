//! Publish outcome reported back to the calling pipeline

/// Tri-state result of a publish run
///
/// `AlreadyPublished` and `Published` map to exit code 0 so the pipeline step
/// stays idempotent under re-runs; `Failed` maps to exit code 1 and writes no
/// output keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The manifest version was already on the registry; nothing to do
    AlreadyPublished { version: String },

    /// The publish command succeeded
    Published { version: String },

    /// All publish attempts were exhausted
    Failed { attempts: u32 },
}

impl PublishOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AlreadyPublished { .. } | Self::Published { .. } => 0,
            Self::Failed { .. } => 1,
        }
    }

    /// Published version, when applicable
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::AlreadyPublished { version } | Self::Published { version } => Some(version),
            Self::Failed { .. } => None,
        }
    }
}

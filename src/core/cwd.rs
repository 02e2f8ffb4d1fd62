//! Scoped working-directory changes
//!
//! The process working directory is the one shared mutable resource in the
//! workflow. Every change to it goes through `CwdGuard`, which restores the
//! saved directory when dropped, on success, error, and panic paths alike.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Guard that changes the process working directory and restores the original
/// directory on drop
#[derive(Debug)]
pub struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    /// Change into `dir`, remembering the current directory for restoration
    pub fn enter<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let original = env::current_dir()?;
        env::set_current_dir(dir.as_ref())?;
        Ok(Self { original })
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        // Drop cannot propagate; a failed restore is reported and the
        // non-zero exit of whatever step follows surfaces the problem
        if let Err(e) = env::set_current_dir(&self.original) {
            eprintln!(
                "Failed to restore working directory to {}: {}",
                self.original.display(),
                e
            );
        }
    }
}

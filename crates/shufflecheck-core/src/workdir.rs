//! Scoped working-directory changes.
//!
//! The collaborator resolves its own data files relative to its working
//! directory, so the harness has to run it from the right place. The
//! guard keeps that change scoped: the previous directory is restored
//! when the guard drops, on normal exit and during unwinding alike.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// RAII guard over a working-directory change.
///
/// `set_current_dir` is process-global, so two live guards interleave
/// badly; callers hold at most one at a time.
#[derive(Debug)]
pub struct ScopedWorkDir {
    previous: PathBuf,
}

impl ScopedWorkDir {
    /// Switch into `dir`, remembering the current directory for restore.
    pub fn enter(dir: &Path) -> io::Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(dir)?;
        log::debug!(
            "working directory: {} -> {}",
            previous.display(),
            dir.display()
        );
        Ok(Self { previous })
    }

    /// The directory that will be restored on drop.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for ScopedWorkDir {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.previous) {
            log::error!(
                "failed to restore working directory {}: {err}",
                self.previous.display()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

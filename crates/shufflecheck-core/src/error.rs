//! Error taxonomy for a verification run.
//!
//! Only conditions that invalidate the run are errors. Recoverable
//! conditions (an observation count that differs from the request, a
//! chart that fails to render) are reported as warnings by the callers
//! that detect them.

use crate::permutation::Permutation;
use std::process::ExitStatus;
use thiserror::Error;

/// Fatal conditions that abort a verification run.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The collaborator process could not be started or fed its script.
    #[error("failed to run collaborator: {0}")]
    Launch(#[source] std::io::Error),

    /// The collaborator ran but exited with a non-zero status. Its
    /// captured stderr rides along for the diagnostic.
    #[error("collaborator exited with {status}")]
    CollaboratorFailed { status: ExitStatus, stderr: String },

    /// An extracted observation is not an ordering of the element set.
    /// Either the extraction logic or the collaborator is out of
    /// contract; the counts cannot be trusted.
    #[error("observed permutation {0} is not in the expected set")]
    UnknownPermutation(Permutation),

    /// Ambient I/O failure (working directory discovery and the like).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;

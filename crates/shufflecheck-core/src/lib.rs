//! # shufflecheck-core
//!
//! **Black-box uniformity verification for an external shuffle command.**
//!
//! `shufflecheck-core` drives a program that shuffles a small in-memory
//! list, captures everything it prints, and runs a chi-squared
//! goodness-of-fit test over the observed permutations. The program under
//! test stays a black box: commands go in on stdin, list reports come
//! back on stdout, and nothing else is assumed about it.
//!
//! ## Quick Start
//!
//! ```
//! use shufflecheck_core::{ObservationTable, analyze, extract};
//!
//! let stdout = "l = [1 2 3]\nl = [2 3 1]\nl = [1 3 2]\n";
//! let elements = [1, 2, 3];
//!
//! // The first report is the freshly built list, not a shuffle result.
//! let trailing = extract::strip_initial_state(stdout, &elements);
//!
//! let mut table = ObservationTable::new(&elements);
//! for perm in extract::Observations::new(trailing, elements.len()) {
//!     table.record(&perm)?;
//! }
//!
//! let result = analyze(&table);
//! assert_eq!(result.total_observations, 2);
//! # Ok::<(), shufflecheck_core::HarnessError>(())
//! ```
//!
//! ## Pipeline
//!
//! Script → Process → Extraction → Counting → Chi-squared
//!
//! [`CommandScript`] renders the stdin script, [`run_collaborator`] runs
//! the child to completion under a [`ScopedWorkDir`] owned by the caller,
//! [`extract`] pulls the permutations out of the captured text, and
//! [`analyze`] reduces the [`ObservationTable`] to a statistic, degrees
//! of freedom, and an informational p-value. The numbers are reported as
//! is; no pass/fail verdict is derived from them.

pub mod analysis;
pub mod driver;
pub mod error;
pub mod extract;
pub mod permutation;
pub mod script;
pub mod workdir;

pub use analysis::{AnalysisResult, ObservationTable, analyze, count_mismatch_warning};
pub use driver::{CapturedOutput, run_collaborator};
pub use error::{HarnessError, Result};
pub use extract::{Observations, strip_initial_state};
pub use permutation::{Permutation, enumerate};
pub use script::CommandScript;
pub use workdir::ScopedWorkDir;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Frequency accounting and chi-squared goodness-of-fit analysis.
//!
//! The [`ObservationTable`] counts extracted permutations over the full
//! universe of orderings, and [`analyze`] turns the counts into a
//! chi-squared statistic against the uniform distribution. The p-value is
//! informational: the harness reports the numbers and leaves the verdict
//! to the reader.

use crate::error::{HarnessError, Result};
use crate::permutation::{self, Permutation};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Observation table
// ---------------------------------------------------------------------------

/// Observation counts over every ordering of the element set.
///
/// All orderings are keys from construction, seeded at zero, so
/// permutations the collaborator never produced still appear in the
/// report. Key order is the enumeration order of
/// [`permutation::enumerate`] and stays stable across the table, the
/// analysis result, and the rendered outputs.
#[derive(Debug, Clone)]
pub struct ObservationTable {
    keys: Vec<Permutation>,
    counts: Vec<u64>,
    index: HashMap<Permutation, usize>,
}

impl ObservationTable {
    /// Seed the table with every ordering of `elements` at count zero.
    pub fn new(elements: &[u32]) -> Self {
        let keys = permutation::enumerate(elements);
        let counts = vec![0u64; keys.len()];
        let index = keys.iter().cloned().zip(0..).collect();
        Self {
            keys,
            counts,
            index,
        }
    }

    /// Record one observation.
    ///
    /// A permutation outside the universe means the extraction or the
    /// collaborator is out of contract, so it is a hard error rather
    /// than a silent drop.
    pub fn record(&mut self, perm: &Permutation) -> Result<()> {
        match self.index.get(perm) {
            Some(&i) => {
                self.counts[i] += 1;
                Ok(())
            }
            None => Err(HarnessError::UnknownPermutation(perm.clone())),
        }
    }

    /// Total observations recorded so far.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Keys in enumeration order.
    pub fn keys(&self) -> &[Permutation] {
        &self.keys
    }

    /// Counts, index-aligned with [`keys`](Self::keys).
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
}

// ---------------------------------------------------------------------------
// Chi-squared analysis
// ---------------------------------------------------------------------------

/// Chi-squared goodness-of-fit result against the uniform distribution.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub total_observations: u64,
    /// Expected count per permutation: total divided by the universe
    /// size, truncated.
    pub expected: u64,
    /// Per-permutation contributions, index-aligned with the table keys.
    pub contributions: Vec<f64>,
    /// Sum of the contributions.
    pub chi_squared: f64,
    /// Universe size minus one.
    pub degrees_of_freedom: usize,
    /// Survival-function p-value under the chi-squared distribution.
    /// Informational only; `None` when the sample cannot support the
    /// test.
    pub p_value: Option<f64>,
}

/// Run the goodness-of-fit computation over a filled table.
pub fn analyze(table: &ObservationTable) -> AnalysisResult {
    let total = table.total();
    let cells = table.keys().len() as u64;
    let expected = if cells == 0 { 0 } else { total / cells };
    let degrees_of_freedom = table.keys().len().saturating_sub(1);

    if expected == 0 {
        log::warn!(
            "{total} observations across {cells} permutations is too small for a chi-squared test"
        );
    }

    let contributions: Vec<f64> = table
        .counts()
        .iter()
        .map(|&observed| {
            if expected == 0 {
                0.0
            } else {
                let diff = observed as f64 - expected as f64;
                diff * diff / expected as f64
            }
        })
        .collect();
    let chi_squared: f64 = contributions.iter().sum();

    let p_value = if expected > 0 && degrees_of_freedom > 0 {
        ChiSquared::new(degrees_of_freedom as f64)
            .ok()
            .map(|dist| dist.sf(chi_squared))
    } else {
        None
    };

    AnalysisResult {
        total_observations: total,
        expected,
        contributions,
        chi_squared,
        degrees_of_freedom,
        p_value,
    }
}

/// Warning text for an extracted count that differs from the request.
/// `None` when the counts agree.
pub fn count_mismatch_warning(found: usize, requested: usize) -> Option<String> {
    if found == requested {
        None
    } else {
        Some(format!(
            "extracted {found} shuffle results but {requested} were requested"
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Permutation values and universe enumeration.
//!
//! A [`Permutation`] is one observed ordering of the element identifiers.
//! [`enumerate`] generates every possible ordering of an element set, which
//! seeds the observation table so that unobserved orderings still show up
//! in the report with a zero count.

use std::fmt;

/// An ordering of the element identifiers, immutable once built.
///
/// Displays as the concatenated identifier string (`123` for `[1, 2, 3]`),
/// which doubles as the label on the report table and the chart axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation(Vec<u32>);

impl Permutation {
    pub fn new(values: Vec<u32>) -> Self {
        Self(values)
    }

    /// Identifiers in observed order.
    pub fn values(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.0 {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl From<&[u32]> for Permutation {
    fn from(values: &[u32]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for Permutation {
    fn from(values: [u32; N]) -> Self {
        Self(values.to_vec())
    }
}

/// Enumerate every ordering of `elements`.
///
/// Order is lexicographic by input position: the first listed element
/// varies slowest, so `[1, 2, 3]` yields 123, 132, 213, 231, 312, 321.
/// Elements are assumed distinct.
pub fn enumerate(elements: &[u32]) -> Vec<Permutation> {
    let mut universe = Vec::new();
    let mut current = Vec::with_capacity(elements.len());
    let mut used = vec![false; elements.len()];
    extend(elements, &mut used, &mut current, &mut universe);
    universe
}

fn extend(
    elements: &[u32],
    used: &mut [bool],
    current: &mut Vec<u32>,
    universe: &mut Vec<Permutation>,
) {
    if current.len() == elements.len() {
        universe.push(Permutation(current.clone()));
        return;
    }
    for i in 0..elements.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(elements[i]);
        extend(elements, used, current, universe);
        current.pop();
        used[i] = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

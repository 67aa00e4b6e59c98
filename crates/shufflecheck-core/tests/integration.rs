//! Integration tests for shufflecheck-core.
//!
//! These tests verify the full verification pipeline over captured text:
//! initial-state strip → extraction → counting → chi-squared analysis.

use shufflecheck_core::{
    HarnessError, ObservationTable, analyze, count_mismatch_warning, enumerate, extract,
};

const ELEMENTS: [u32; 3] = [1, 2, 3];

/// Seeded pseudo-random stream for synthesizing noisy collaborator output.
fn lcg(state: &mut u64) -> usize {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    (*state >> 33) as usize
}

/// Run the captured-text half of the pipeline: strip, extract, count.
fn count_observations(text: &str) -> Result<ObservationTable, HarnessError> {
    let trailing = extract::strip_initial_state(text, &ELEMENTS);
    let mut table = ObservationTable::new(&ELEMENTS);
    for perm in extract::Observations::new(trailing, ELEMENTS.len()) {
        table.record(&perm)?;
    }
    Ok(table)
}

#[test]
fn uniform_output_analyzes_to_zero_statistic() {
    let keys = enumerate(&ELEMENTS);
    let mut text = String::from("cmd> l = [1 2 3]\n");
    for round in 0..6000 {
        let key = &keys[round % keys.len()];
        let v = key.values();
        text.push_str(&format!("cmd> l = [{} {} {}]\n", v[0], v[1], v[2]));
    }

    let table = count_observations(&text).unwrap();
    assert_eq!(table.total(), 6000);
    assert!(table.counts().iter().all(|&c| c == 1000));

    let result = analyze(&table);
    assert_eq!(result.expected, 1000);
    assert_eq!(result.chi_squared, 0.0);
    assert!(result.contributions.iter().all(|&c| c == 0.0));
    assert_eq!(result.degrees_of_freedom, 5);
}

#[test]
fn noisy_output_keeps_exact_accounting() {
    // Interleave valid reports with prompts, unclosed brackets, and
    // wrong-width reports. Every well-formed report must be counted and
    // nothing else; the garbage shifts no counts.
    let keys = enumerate(&ELEMENTS);
    let mut state = 0xdeadbeefu64;
    let mut text = String::from("l = [1 2 3]\n");
    let mut valid = 0u64;

    for _ in 0..5000 {
        match lcg(&mut state) % 5 {
            0 => text.push_str("cmd> shuffle\n"),
            1 => text.push_str("l = [1 2\n"),
            2 => text.push_str("l = [1 2 3 4]\n"),
            _ => {
                let key = &keys[lcg(&mut state) % keys.len()];
                let v = key.values();
                text.push_str(&format!("l = [{} {} {}]\n", v[0], v[1], v[2]));
                valid += 1;
            }
        }
    }

    let table = count_observations(&text).unwrap();
    assert_eq!(table.total(), valid);
}

#[test]
fn out_of_set_report_surfaces_unknown_permutation() {
    let text = "l = [1 2 3]\nl = [2 1 3]\nl = [4 5 6]\n";
    let err = count_observations(text).unwrap_err();
    assert!(matches!(err, HarnessError::UnknownPermutation(_)));
}

#[test]
fn short_output_warns_and_still_analyzes() {
    let keys = enumerate(&ELEMENTS);
    let mut text = String::from("l = [1 2 3]\n");
    for round in 0..5999 {
        let key = &keys[round % keys.len()];
        let v = key.values();
        text.push_str(&format!("l = [{} {} {}]\n", v[0], v[1], v[2]));
    }

    let table = count_observations(&text).unwrap();
    assert_eq!(table.total(), 5999);

    let warning = count_mismatch_warning(table.total() as usize, 6000).unwrap();
    assert!(warning.contains("5999"));
    assert!(warning.contains("6000"));

    let result = analyze(&table);
    assert_eq!(result.expected, 999);
    assert!(result.chi_squared > 0.0);
}

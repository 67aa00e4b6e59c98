//! Text report rendering.
//!
//! Layout: the found-count line and a short preview of the first
//! observations, then one table row per permutation with its observed
//! count, the expected count, and its chi-squared contribution, closed
//! by the aggregate statistics.

use shufflecheck_core::{AnalysisResult, ObservationTable, Permutation};

/// Combined width of the four table columns and their separators.
const RULE_WIDTH: usize = 51;

/// Print the observation summary and the frequency table to stdout.
pub fn print_report(
    observations: &[Permutation],
    table: &ObservationTable,
    result: &AnalysisResult,
) {
    println!("found {} shuffle results", observations.len());
    if !observations.is_empty() {
        println!("first observations: {}", preview(observations, 5));
    }
    println!();
    for line in table_lines(table, result) {
        println!("{line}");
    }
}

/// The first `limit` observations as space separated labels.
fn preview(observations: &[Permutation], limit: usize) -> String {
    let labels: Vec<String> = observations
        .iter()
        .take(limit)
        .map(|p| p.to_string())
        .collect();
    labels.join(" ")
}

/// The frequency table plus aggregate statistics, one entry per line.
fn table_lines(table: &ObservationTable, result: &AnalysisResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.keys().len() + 7);
    lines.push(format!(
        "{:<12} | {:>11} | {:>8} | {:>11}",
        "Permutation", "Observation", "Expected", "Chi-squared"
    ));
    lines.push("-".repeat(RULE_WIDTH));
    for (i, perm) in table.keys().iter().enumerate() {
        lines.push(format!(
            "{:<12} | {:>11} | {:>8} | {:>11.4}",
            perm,
            table.counts()[i],
            result.expected,
            result.contributions[i]
        ));
    }
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(format!("Total chi-squared: {:.4}", result.chi_squared));
    lines.push(format!("Degrees of freedom: {}", result.degrees_of_freedom));
    lines.push(match result.p_value {
        Some(p) => format!("P-value: {p:.4}"),
        None => "P-value: n/a (insufficient observations)".to_string(),
    });
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use shufflecheck_core::analyze;

    fn uniform_fixture() -> (ObservationTable, AnalysisResult) {
        let mut table = ObservationTable::new(&[1, 2, 3]);
        let keys: Vec<Permutation> = table.keys().to_vec();
        for key in &keys {
            for _ in 0..1000 {
                table.record(key).unwrap();
            }
        }
        let result = analyze(&table);
        (table, result)
    }

    #[test]
    fn test_preview_caps_at_limit() {
        let observations: Vec<Permutation> = ObservationTable::new(&[1, 2, 3])
            .keys()
            .to_vec();
        assert_eq!(preview(&observations, 5), "123 132 213 231 312");
        assert_eq!(preview(&observations[..2], 5), "123 132");
        assert_eq!(preview(&[], 5), "");
    }

    #[test]
    fn test_table_has_one_row_per_permutation() {
        let (table, result) = uniform_fixture();
        let lines = table_lines(&table, &result);
        for perm in table.keys() {
            let label = perm.to_string();
            assert!(
                lines.iter().any(|l| l.starts_with(&label)),
                "missing row for {label}"
            );
        }
    }

    #[test]
    fn test_uniform_table_statistics_lines() {
        let (table, result) = uniform_fixture();
        let lines = table_lines(&table, &result);
        assert!(lines.contains(&"Total chi-squared: 0.0000".to_string()));
        assert!(lines.contains(&"Degrees of freedom: 5".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("P-value: 1.0000")));
    }

    #[test]
    fn test_row_contains_counts_and_expected() {
        let (table, result) = uniform_fixture();
        let lines = table_lines(&table, &result);
        let row = lines
            .iter()
            .find(|l| l.starts_with("123"))
            .expect("row for 123");
        assert!(row.contains("1000"));
        assert!(row.contains("0.0000"));
    }

    #[test]
    fn test_empty_run_reports_unsupported_p_value() {
        let table = ObservationTable::new(&[1, 2, 3]);
        let result = analyze(&table);
        let lines = table_lines(&table, &result);
        assert!(
            lines
                .iter()
                .any(|l| l.contains("P-value: n/a"))
        );
    }
}

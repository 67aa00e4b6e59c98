//! Two-panel distribution chart rendering.
//!
//! The chart mirrors the text report visually: the top panel shows the
//! observed frequency per permutation against the expected value, the
//! bottom panel shows each permutation's chi-squared contribution. Saved
//! as a fixed 1200x1200 PNG via the [`plotters`] bitmap backend.

use plotters::prelude::*;
use shufflecheck_core::{AnalysisResult, ObservationTable};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during chart generation.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = std::result::Result<T, ChartError>;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 1200;

/// Render the two-panel distribution chart as a PNG at `output_path`.
///
/// Both panels share the permutation order of the table, so a bar at one
/// x position refers to the same permutation in both. The aggregate
/// numbers ride in the panel captions.
pub fn render(
    output_path: &Path,
    table: &ObservationTable,
    result: &AnalysisResult,
) -> Result<()> {
    if table.counts().len() != result.contributions.len() {
        return Err(ChartError::InvalidData(format!(
            "{} counts but {} contributions",
            table.counts().len(),
            result.contributions.len()
        )));
    }

    let labels: Vec<String> = table.keys().iter().map(|p| p.to_string()).collect();
    let counts: Vec<f64> = table.counts().iter().map(|&c| c as f64).collect();

    let root = BitMapBackend::new(output_path, (WIDTH, HEIGHT));
    let drawing_area = root.into_drawing_area();
    drawing_area
        .fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let (top, bottom) = drawing_area.split_vertically(HEIGHT / 2);

    draw_bar_panel(
        &top,
        &format!(
            "Shuffle Distribution ({} observations)",
            result.total_observations
        ),
        "Frequency",
        &labels,
        &counts,
        Some(result.expected as f64),
        BLUE.mix(0.5).filled(),
    )?;

    draw_bar_panel(
        &bottom,
        &format!(
            "Chi-squared Distribution (total {:.4}, df {})",
            result.chi_squared, result.degrees_of_freedom
        ),
        "Chi-squared value",
        &labels,
        &result.contributions,
        None,
        RED.mix(0.5).filled(),
    )?;

    drawing_area
        .present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draw one bar panel: one bar per label, optionally with a horizontal
/// reference line and its legend entry.
fn draw_bar_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    title: &str,
    y_label: &str,
    labels: &[String],
    values: &[f64],
    reference: Option<f64>,
    bar_style: ShapeStyle,
) -> Result<()> {
    let y_max = values
        .iter()
        .copied()
        .chain(reference)
        .fold(0.0f64, f64::max)
        .max(1.0)
        * 1.15;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((0..labels.len()).into_segmented(), 0.0..y_max)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Permutation")
        .y_desc(y_label)
        .x_labels(labels.len())
        .label_style(("sans-serif", 18))
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) if *i < labels.len() => labels[*i].clone(),
            _ => String::new(),
        })
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(values.iter().enumerate().map(|(i, &v)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), v),
                ],
                bar_style,
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    if let Some(expected) = reference {
        chart
            .draw_series(LineSeries::new(
                [
                    (SegmentValue::Exact(0), expected),
                    (SegmentValue::Exact(labels.len()), expected),
                ],
                RED.stroke_width(2),
            ))
            .map_err(|e| ChartError::Drawing(e.to_string()))?
            .label("Expected Value")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use shufflecheck_core::{Permutation, analyze};

    fn filled_table(per_key: u64) -> (ObservationTable, AnalysisResult) {
        let mut table = ObservationTable::new(&[1, 2, 3]);
        let keys: Vec<Permutation> = table.keys().to_vec();
        for key in &keys {
            for _ in 0..per_key {
                table.record(key).unwrap();
            }
        }
        let result = analyze(&table);
        (table, result)
    }

    #[test]
    fn test_mismatched_series_lengths_are_rejected() {
        let (table, mut result) = filled_table(10);
        result.contributions.pop();
        let path = std::env::temp_dir().join("shufflecheck-mismatch.png");
        let err = render(&path, &table, &result).unwrap_err();
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shuffle_distribution.png");
        let (table, result) = filled_table(1000);
        render(&path, &table, &result).unwrap();
        assert!(path.exists());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_handles_empty_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let (table, result) = filled_table(0);
        render(&path, &table, &result).unwrap();
        assert!(path.exists());
    }
}

//! CLI for shufflecheck: drive an external shuffle command and report on
//! how uniform its output looks.
//!
//! There are no runtime knobs. The element set, the observation count,
//! the collaborator command line, and the chart filename are fixed below
//! so every run of a given build measures exactly the same thing.

mod chart;
mod report;

use clap::Parser;
use shufflecheck_core::{
    CommandScript, HarnessError, ObservationTable, Permutation, ScopedWorkDir, analyze,
    count_mismatch_warning, extract, run_collaborator,
};
use std::path::{Path, PathBuf};

/// Shuffle observations requested per run.
const REPETITIONS: usize = 100_000;
/// Element identifiers inserted into the fresh list, in this order.
const ELEMENTS: [u32; 3] = [1, 2, 3];
/// Collaborator command, resolved relative to its working directory.
const COLLABORATOR: &str = "./qtest";
const COLLABORATOR_ARGS: [&str; 2] = ["-v", "3"];
/// The collaborator runs from the parent of the invocation directory.
const COLLABORATOR_DIR: &str = "..";
/// Chart output, written into the invocation directory.
const CHART_FILE: &str = "shuffle_distribution.png";

#[derive(Parser)]
#[command(name = "shufflecheck")]
#[command(about = "Chi-squared uniformity check for an external shuffle command")]
#[command(version = shufflecheck_core::VERSION)]
struct Cli {}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let _cli = Cli::parse();

    if let Err(err) = run() {
        print_fatal(&err);
        std::process::exit(1);
    }
}

fn run() -> shufflecheck_core::Result<()> {
    // Captured before any directory change so the chart lands where the
    // harness was invoked.
    let invocation_dir = std::env::current_dir()?;

    let script = CommandScript::build(&ELEMENTS, REPETITIONS);
    let captured = {
        let _workdir = ScopedWorkDir::enter(Path::new(COLLABORATOR_DIR))?;
        run_collaborator(COLLABORATOR, &COLLABORATOR_ARGS, &script)?
    };

    let trailing = extract::strip_initial_state(&captured.stdout, &ELEMENTS);
    let observations: Vec<Permutation> =
        extract::Observations::new(trailing, ELEMENTS.len()).collect();

    if let Some(warning) = count_mismatch_warning(observations.len(), script.repetitions()) {
        log::warn!("{warning}");
    }

    let mut table = ObservationTable::new(&ELEMENTS);
    for perm in &observations {
        table.record(perm)?;
    }
    let result = analyze(&table);

    report::print_report(&observations, &table, &result);

    render_chart(&invocation_dir, &table, &result);

    Ok(())
}

/// Render the chart next to where the harness was invoked. Chart trouble
/// never fails the run; the textual report has already been printed.
fn render_chart(
    invocation_dir: &Path,
    table: &ObservationTable,
    result: &shufflecheck_core::AnalysisResult,
) {
    let chart_path: PathBuf = invocation_dir.join(CHART_FILE);
    match chart::render(&chart_path, table, result) {
        Ok(()) => println!("\nChart saved to {}", chart_path.display()),
        Err(err) => log::warn!("chart rendering failed: {err}"),
    }
}

fn print_fatal(err: &HarnessError) {
    match err {
        HarnessError::CollaboratorFailed { status, stderr } => {
            eprintln!("collaborator exited with {status}");
            if !stderr.is_empty() {
                eprintln!("--- captured stderr ---");
                eprintln!("{}", stderr.trim_end());
            }
        }
        other => eprintln!("error: {other}"),
    }
}

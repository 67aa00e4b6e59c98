//! Collaborator process execution and output capture.
//!
//! One verification run is one child process, run to completion: the
//! whole command script goes in on stdin, both output streams come back
//! decoded, and the exit status decides whether the captured text can be
//! trusted.

use crate::error::{HarnessError, Result};
use crate::script::CommandScript;
use std::io::{ErrorKind, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

/// Everything the collaborator produced during one run.
#[derive(Debug)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

/// Run the collaborator to completion with `script` on its stdin.
///
/// The script is written from a separate thread while both output pipes
/// drain, so a script larger than the pipe buffer cannot deadlock
/// against a child that is already flooding stdout. A broken stdin pipe
/// is tolerated here; a child that stopped reading early tells its story
/// through the exit status. Any non-zero status is an error carrying the
/// captured stderr.
pub fn run_collaborator(
    program: &str,
    args: &[&str],
    script: &CommandScript,
) -> Result<CapturedOutput> {
    log::info!("running collaborator: {program} {}", args.join(" "));

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(HarnessError::Launch)?;

    let script_bytes = script.as_str().as_bytes().to_vec();
    let writer = child.stdin.take().map(|mut stdin| {
        // stdin drops when the thread finishes, so the child sees EOF.
        thread::spawn(move || stdin.write_all(&script_bytes))
    });

    let output = child.wait_with_output().map_err(HarnessError::Launch)?;

    if let Some(handle) = writer {
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(err)) if err.kind() == ErrorKind::BrokenPipe => {
                log::debug!("collaborator closed stdin before the script ended");
            }
            Ok(Err(err)) => return Err(HarnessError::Launch(err)),
            Err(_) => {
                return Err(HarnessError::Launch(std::io::Error::other(
                    "stdin writer thread panicked",
                )));
            }
        }
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(HarnessError::CollaboratorFailed {
            status: output.status,
            stderr,
        });
    }

    log::debug!(
        "collaborator finished: {} bytes stdout, {} bytes stderr",
        stdout.len(),
        stderr.len()
    );

    Ok(CapturedOutput {
        stdout,
        stderr,
        status: output.status,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

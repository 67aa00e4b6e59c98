//! Command script construction for the collaborator's stdin.

/// The full command sequence for one verification run.
///
/// Layout is fixed: `new`, one `it <v>` per element in listed order, the
/// requested number of `shuffle` commands, then `free` and `quit`. Every
/// line is newline terminated so the collaborator's reader never blocks
/// on a partial command.
#[derive(Debug, Clone)]
pub struct CommandScript {
    text: String,
    repetitions: usize,
}

impl CommandScript {
    /// Build the script for `elements` with `repetitions` shuffle commands.
    pub fn build(elements: &[u32], repetitions: usize) -> Self {
        let mut text = String::with_capacity(16 + elements.len() * 8 + repetitions * 8);
        text.push_str("new\n");
        for v in elements {
            text.push_str("it ");
            text.push_str(&v.to_string());
            text.push('\n');
        }
        for _ in 0..repetitions {
            text.push_str("shuffle\n");
        }
        text.push_str("free\n");
        text.push_str("quit\n");
        log::debug!(
            "built command script: {} lines, {} bytes",
            elements.len() + repetitions + 3,
            text.len()
        );
        Self { text, repetitions }
    }

    /// Number of `shuffle` commands in the script.
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Script text for the collaborator's stdin.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

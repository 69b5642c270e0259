//! How the walkthrough waits: fixed delays after each step and a blocking
//! prompt between routines.

use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

/// Source of the artificial pauses in the narration.
pub trait Pacer {
    /// Pause after a narrated step.
    fn delay(&mut self, duration: Duration);

    /// Block until the viewer asks to continue. The input itself is ignored.
    fn wait_for_continue(&mut self) -> io::Result<()>;
}

/// Sleeps for real and reads a line from stdin to continue.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPacer;

impl Pacer for TerminalPacer {
    fn delay(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }

    fn wait_for_continue(&mut self) -> io::Result<()> {
        let mut input = String::new();
        // EOF counts as "continue" so piped runs do not stall.
        io::stdin().lock().read_line(&mut input)?;
        Ok(())
    }
}

/// Never blocks; keeps a record of what it was asked to do.
#[derive(Debug, Default, Clone)]
pub struct InstantPacer {
    /// Every delay requested, in order
    pub delays: Vec<Duration>,
    /// Number of continue prompts answered
    pub continues: usize,
}

impl InstantPacer {
    /// Create a pacer with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of every delay that a terminal run would have slept.
    pub fn total_delay(&self) -> Duration {
        self.delays.iter().sum()
    }
}

impl Pacer for InstantPacer {
    fn delay(&mut self, duration: Duration) {
        self.delays.push(duration);
    }

    fn wait_for_continue(&mut self) -> io::Result<()> {
        self.continues += 1;
        Ok(())
    }
}

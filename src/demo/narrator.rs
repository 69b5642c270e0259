use crate::demo::pacing::Pacer;
use std::io::{self, Write};
use std::time::Duration;

const RULE_WIDTH: usize = 60;
const CONTINUE_PROMPT: &str = "⏸️  Press Enter to continue...";

/// Writes the walkthrough text and applies pacing between lines.
pub struct Narrator<W: Write, P: Pacer> {
    out: W,
    pacer: P,
    step_delay: Duration,
    pause_between_demos: bool,
}

impl<W: Write, P: Pacer> Narrator<W, P> {
    pub fn new(out: W, pacer: P, step_delay: Duration, pause_between_demos: bool) -> Self {
        Self { out, pacer, step_delay, pause_between_demos }
    }

    /// Section banner framed by `=` rules.
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "🎯 {}", title)?;
        writeln!(self.out, "{}", rule)
    }

    /// One simulated processing step, followed by the step delay.
    pub fn step(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "   {}", text)?;
        self.out.flush()?;
        self.pacer.delay(self.step_delay);
        Ok(())
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Waits for the viewer between routines. No-op when pauses are disabled.
    pub fn prompt_continue(&mut self) -> io::Result<()> {
        if !self.pause_between_demos {
            return Ok(());
        }
        write!(self.out, "\n{}", CONTINUE_PROMPT)?;
        self.out.flush()?;
        self.pacer.wait_for_continue()
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (W, P) {
        (self.out, self.pacer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::pacing::InstantPacer;

    fn narrator(pause: bool) -> Narrator<Vec<u8>, InstantPacer> {
        Narrator::new(Vec::new(), InstantPacer::new(), Duration::from_millis(500), pause)
    }

    #[test]
    fn header_is_framed_by_rules() {
        let mut n = narrator(false);
        n.header("TITLE").unwrap();
        let text = String::from_utf8(n.into_parts().0).unwrap();
        let rule = "=".repeat(60);
        assert_eq!(text, format!("\n{rule}\n🎯 TITLE\n{rule}\n"));
    }

    #[test]
    fn step_is_indented_and_delayed() {
        let mut n = narrator(false);
        n.step("🔍 1. Checking").unwrap();
        let (out, pacer) = n.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "   🔍 1. Checking\n");
        assert_eq!(pacer.delays, vec![Duration::from_millis(500)]);
    }

    #[test]
    fn prompt_respects_pause_setting() {
        let mut paused = narrator(true);
        paused.prompt_continue().unwrap();
        assert_eq!(paused.pacer().continues, 1);
        assert!(String::from_utf8_lossy(paused.writer()).contains("Press Enter"));

        let mut unpaused = narrator(false);
        unpaused.prompt_continue().unwrap();
        assert_eq!(unpaused.pacer().continues, 0);
        assert!(unpaused.writer().is_empty());
    }
}

use crate::config::DemoConfig;
use crate::demo::flows;
use crate::demo::narrator::Narrator;
use crate::demo::pacing::Pacer;
use crate::demo::{DemoContext, DemoKind, FlowOutcome};
use crate::Result;
use log::info;
use rand::{rngs::StdRng, Rng};
use std::io::Write;
use strum::IntoEnumIterator;

/// What a run did, routine by routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Routines in the order they ran, with their outcome
    pub outcomes: Vec<(DemoKind, FlowOutcome)>,
    /// Identifiers in the store once the run finished
    pub stored_identifiers: usize,
}

/// Drives the demo routines against one shared context.
pub struct DemoRunner<R: Rng, W: Write, P: Pacer> {
    ctx: DemoContext<R>,
    narrator: Narrator<W, P>,
}

impl<W: Write, P: Pacer> DemoRunner<StdRng, W, P> {
    /// Build a runner whose seed, step delay and pausing come from `config`.
    pub fn from_config(config: &DemoConfig, out: W, pacer: P) -> Self {
        let narrator = Narrator::new(out, pacer, config.step_delay(), config.pause_between_demos);
        Self::new(DemoContext::with_seed(config.seed), narrator)
    }
}

impl<R: Rng, W: Write, P: Pacer> DemoRunner<R, W, P> {
    pub fn new(ctx: DemoContext<R>, narrator: Narrator<W, P>) -> Self {
        Self { ctx, narrator }
    }

    /// Play every routine in order, pausing between them, then print the
    /// closing summary.
    pub fn run_complete(&mut self) -> Result<RunSummary> {
        self.narrator.line("🚀 FULL DEMO OF THE AUTOMATIC LOGIN/SIGN-UP SYSTEM")?;
        self.narrator.line("📱 No waiting list")?;
        self.narrator.blank()?;

        let kinds: Vec<DemoKind> = DemoKind::iter().collect();
        let mut outcomes = Vec::with_capacity(kinds.len());
        for (i, kind) in kinds.iter().copied().enumerate() {
            outcomes.push((kind, self.dispatch(kind)?));
            if i + 1 < kinds.len() {
                self.narrator.prompt_continue()?;
            }
        }

        self.print_final_summary()?;
        info!("Demo finished with {} stored profiles", self.ctx.store.len());
        Ok(RunSummary {
            outcomes,
            stored_identifiers: self.ctx.store.len(),
        })
    }

    /// Play a single routine without any continue prompt.
    pub fn run_single(&mut self, kind: DemoKind) -> Result<FlowOutcome> {
        self.dispatch(kind)
    }

    fn dispatch(&mut self, kind: DemoKind) -> Result<FlowOutcome> {
        info!("Running demo routine {}", kind);
        let outcome = match kind {
            DemoKind::GoogleLogin => flows::google_login(&mut self.ctx, &mut self.narrator)?,
            DemoKind::EmailSignup => flows::email_signup(&mut self.ctx, &mut self.narrator)?,
            DemoKind::PhoneSignup => flows::phone_signup(&mut self.ctx, &mut self.narrator)?,
            DemoKind::FakeData => flows::fake_data_showcase(&mut self.ctx, &mut self.narrator)?,
            DemoKind::AccessLevels => flows::access_showcase(&mut self.ctx, &mut self.narrator)?,
        };
        Ok(outcome)
    }

    fn print_final_summary(&mut self) -> Result<()> {
        let n = &mut self.narrator;
        n.header("FINAL SUMMARY")?;
        n.line("✅ System implemented successfully!")?;
        n.line("✅ Waiting list removed completely!")?;
        n.line("✅ Immediate access for every user!")?;
        n.line("✅ Complete profiles created automatically!")?;
        n.line("✅ Random photos generated!")?;
        n.line("✅ Every feature unlocked!")?;
        n.blank()?;
        n.line("🎉 The app is ready to deliver an amazing experience!")?;
        Ok(())
    }

    pub fn context(&self) -> &DemoContext<R> {
        &self.ctx
    }

    pub fn narrator(&self) -> &Narrator<W, P> {
        &self.narrator
    }

    pub fn into_parts(self) -> (DemoContext<R>, Narrator<W, P>) {
        (self.ctx, self.narrator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::InstantPacer;
    use crate::test_utils::get_test_config;

    #[test]
    fn run_complete_reports_every_routine() {
        let mut runner = DemoRunner::from_config(&get_test_config(), Vec::new(), InstantPacer::new());
        let summary = runner.run_complete().unwrap();

        assert_eq!(summary.outcomes.len(), 5);
        assert_eq!(summary.stored_identifiers, runner.context().store.len());
        assert!(runner.context().current_record().is_some());
        assert_eq!(runner.narrator().pacer().continues, 0);
    }

    fn fake_data_text() -> String {
        let mut runner = DemoRunner::from_config(&get_test_config(), Vec::new(), InstantPacer::new());
        runner.run_single(DemoKind::FakeData).unwrap();
        let (_, narrator) = runner.into_parts();
        String::from_utf8(narrator.into_parts().0).unwrap()
    }

    #[test]
    fn seeded_runs_print_identical_profiles() {
        assert_eq!(fake_data_text(), fake_data_text());
    }
}

// src/test_utils.rs

#![cfg(test)] // Ensure this module is only compiled for tests

use crate::config::DemoConfig;
use crate::demo::{DemoContext, InstantPacer, Narrator, ProfileGenerator};
use rand::rngs::StdRng;
use std::time::Duration;

/// Seeded, no pauses, nominal step delay recorded but never slept.
pub fn get_test_config() -> DemoConfig {
    DemoConfig {
        seed: Some(42),
        pause_between_demos: false,
        ..DemoConfig::default()
    }
}

/// A seeded context with an empty store.
pub fn test_context(seed: u64) -> DemoContext<StdRng> {
    DemoContext::new(ProfileGenerator::seeded(seed))
}

/// A narrator that captures output in memory and never blocks.
pub fn capture_narrator() -> Narrator<Vec<u8>, InstantPacer> {
    Narrator::new(Vec::new(), InstantPacer::new(), Duration::from_millis(500), false)
}

/// Everything the narrator has written so far.
pub fn captured_text(narrator: &Narrator<Vec<u8>, InstantPacer>) -> String {
    String::from_utf8_lossy(narrator.writer()).into_owned()
}

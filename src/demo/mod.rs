//! The narrated sign-up walkthrough.
//!
//! Each routine in [`flows`] receives the shared [`DemoContext`] (the
//! in-memory user store, the current user and the profile generator) plus a
//! [`Narrator`](narrator::Narrator) to print through. [`DemoRunner`] strings
//! the routines together.

pub mod catalog;
pub mod flows;
pub mod generator;
pub mod narrator;
pub mod pacing;
pub mod runner;

pub use generator::ProfileGenerator;
pub use narrator::Narrator;
pub use pacing::{InstantPacer, Pacer, TerminalPacer};
pub use runner::{DemoRunner, RunSummary};

use crate::storage::MemoryUserStore;
use crate::types::UserRecord;
use rand::{rngs::StdRng, Rng};
use strum::{Display, EnumIter, EnumString};

/// State shared by every demo routine.
pub struct DemoContext<R: Rng = StdRng> {
    /// Accounts created so far, keyed by email or phone
    pub store: MemoryUserStore,
    /// Identifier of the signed-in account, if any
    pub current_user: Option<String>,
    /// Source of fabricated profiles
    pub generator: ProfileGenerator<R>,
}

impl<R: Rng> DemoContext<R> {
    pub fn new(generator: ProfileGenerator<R>) -> Self {
        Self {
            store: MemoryUserStore::new(),
            current_user: None,
            generator,
        }
    }

    /// The record of the signed-in account.
    pub fn current_record(&self) -> Option<&UserRecord> {
        self.current_user.as_deref().and_then(|id| self.store.get(id))
    }
}

impl DemoContext<StdRng> {
    /// Context with a seeded generator, or an entropy-seeded one for `None`.
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(ProfileGenerator::seeded(seed)),
            None => Self::new(ProfileGenerator::from_entropy()),
        }
    }
}

/// The demo routines, in the order a full run plays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[strum(serialize_all = "kebab-case")]
pub enum DemoKind {
    /// Google login with automatic profile creation
    GoogleLogin,
    /// Email login redirected to sign-up
    EmailSignup,
    /// Phone login redirected to sign-up
    PhoneSignup,
    /// Fake profile data showcase
    FakeData,
    /// Access level showcase
    AccessLevels,
}

/// What a routine did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// A new profile was stored under this identifier
    Created(String),
    /// An existing profile was found under this identifier
    SignedIn(String),
    /// Nothing was stored
    Showcased,
}

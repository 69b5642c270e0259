//! Command line front end for the sign-up walkthrough.
//!
//! Without a subcommand the full walkthrough runs, exactly like `run`.

use crate::config::{validation, DemoConfig};
use crate::demo::flows::print_profile;
use crate::demo::{DemoKind, DemoRunner, InstantPacer, Narrator, ProfileGenerator, TerminalPacer};
use crate::{init, DemoError, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use serde::ser::{SerializeSeq, Serializer};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Automatic sign-up demo", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Seed for reproducible profiles
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Do not wait for Enter between routines
    #[arg(long, global = true, default_value_t = false)]
    pub no_pause: bool,
    /// Delay after each narrated step, in milliseconds
    #[arg(long, global = true)]
    pub step_delay_ms: Option<u64>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full walkthrough (default)
    Run,
    /// Run a single routine
    Demo {
        #[arg(value_enum)]
        kind: DemoKind,
    },
    /// Print freshly generated profiles
    Generate {
        /// Display name; a random one is used when omitted
        #[arg(long, requires = "email")]
        name: Option<String>,
        /// Email address; a random one is used when omitted
        #[arg(long, requires = "name")]
        email: Option<String>,
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Emit pretty-printed JSON instead of the narrated listing
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = init(cli.config.as_deref())?;
    apply_cli_overrides(&mut config, &cli)?;

    let stdout = io::stdout();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let mut runner = DemoRunner::from_config(&config, stdout.lock(), TerminalPacer);
            let summary = runner.run_complete()?;
            info!("Stored identifiers after run: {}", summary.stored_identifiers);
        }
        Commands::Demo { kind } => {
            config.pause_between_demos = false;
            let mut runner = DemoRunner::from_config(&config, stdout.lock(), TerminalPacer);
            runner.run_single(kind)?;
        }
        Commands::Generate { name, email, count, json } => {
            let identity = name.zip(email);
            generate(&config, identity, count, json, &mut stdout.lock())?;
        }
    }
    Ok(())
}

/// Command line flags win over file and environment settings.
pub fn apply_cli_overrides(config: &mut DemoConfig, cli: &Cli) -> Result<()> {
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(delay) = cli.step_delay_ms {
        config.step_delay_ms = delay;
    }
    if cli.no_pause {
        config.pause_between_demos = false;
    }
    validation::validate_config(config)?;
    Ok(())
}

/// Upper bound for `generate --count`.
pub const MAX_GENERATE_COUNT: u32 = 10_000;

/// Writes `count` generated profiles to `out`, one at a time as they are drawn.
pub fn generate<W: Write>(
    config: &DemoConfig,
    identity: Option<(String, String)>,
    count: u32,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if count == 0 || count > MAX_GENERATE_COUNT {
        return Err(DemoError::invalid_input(format!(
            "count must be between 1 and {}, got {}",
            MAX_GENERATE_COUNT, count
        )));
    }
    let mut generator: ProfileGenerator<StdRng> = match config.seed {
        Some(seed) => ProfileGenerator::seeded(seed),
        None => ProfileGenerator::from_entropy(),
    };
    let mut next_record = || {
        let (name, email) = match &identity {
            Some((name, email)) => (name.clone(), email.clone()),
            None => generator.random_identity(),
        };
        generator.generate(&name, &email)
    };

    if json {
        let mut serializer = serde_json::Serializer::pretty(&mut *out);
        let mut seq = (&mut serializer).serialize_seq(Some(count as usize))?;
        for _ in 0..count {
            seq.serialize_element(&next_record())?;
        }
        seq.end()?;
        writeln!(out)?;
        return Ok(());
    }

    let mut narrator = Narrator::new(out, InstantPacer::new(), config.step_delay(), false);
    for i in 1..=count {
        narrator.header(&format!("PROFILE {} OF {}", i, count))?;
        print_profile(&mut narrator, &next_record())?;
    }
    Ok(())
}

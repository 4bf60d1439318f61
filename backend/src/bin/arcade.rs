//! Arcade machine planner binary
//!
//! Reads play sessions from INPUT, one `begin end` record per line in
//! military time (`940 1200`), and writes the number of machines needed to
//! OUTPUT.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin arcade-machines -- sessions.txt machines.txt
//! cargo run --bin arcade-machines -- sessions.txt machines.txt --strategy sweep --force
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)
//! - `ARCADE_STRATEGY`, `ARCADE_INVERTED`, `ARCADE_OVERWRITE`: see `arcade_rust::config`

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use arcade_rust::parsing::InvertedPolicy;
use arcade_rust::services::{self, CountStrategy, PlanOptions};
use arcade_rust::ArcadeConfig;

#[derive(clap::Parser, Debug)]
#[command(
    name = "arcade-machines",
    version,
    about = "Compute how many arcade machines a day of play sessions needs",
    long_about = None
)]
struct Arguments {
    /// File with one `begin end` record per line
    #[arg(value_hint = clap::ValueHint::FilePath)]
    input: PathBuf,

    /// File to write the machine count to; must not exist yet
    #[arg(value_hint = clap::ValueHint::FilePath)]
    output: PathBuf,

    /// Configuration file (defaults to arcade.toml if present)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Counting strategy: pairwise (default, the reference count) or sweep
    ///
    /// The sweep reports the most sessions live at one instant, which can be
    /// lower than the pairwise count.
    #[arg(long, value_parser = parse_strategy)]
    strategy: Option<CountStrategy>,

    /// Keep sessions that end before they begin instead of failing
    #[arg(long, action = clap::ArgAction::SetTrue)]
    allow_inverted: bool,

    /// Replace OUTPUT if it already exists
    #[arg(long, action = clap::ArgAction::SetTrue)]
    force: bool,
}

impl Arguments {
    fn update_options(&self, options: &mut PlanOptions) {
        if let Some(strategy) = self.strategy {
            options.strategy = strategy;
        }

        if self.allow_inverted {
            options.inverted = InvertedPolicy::Tolerate;
        }

        if self.force {
            options.overwrite = true;
        }
    }
}

fn parse_strategy(s: &str) -> Result<CountStrategy, String> {
    s.parse()
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Arguments::parse();

    let config =
        ArcadeConfig::load(args.config.as_deref()).context("failed loading configuration")?;
    let mut options = config.plan_options()?;
    args.update_options(&mut options);

    info!(
        strategy = %options.strategy,
        inverted = %options.inverted,
        overwrite = options.overwrite,
        "Planning arcade machines"
    );

    let report = services::plan(&args.input, &args.output, &options)?;
    info!(
        "{} machines needed for {} sessions",
        report.machines, report.sessions
    );

    Ok(())
}

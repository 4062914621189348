// ABOUTME: Intensity CLI - command-line front end for the adaptive intensity engine
// ABOUTME: Evaluates contexts, tracks exercise swaps, and assesses strain from JSON or flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Evaluate a context file (or `-` for stdin)
//! intensity-cli evaluate --input context.json
//!
//! # Record a swap and print the prompt (if any) with the updated state
//! intensity-cli swap --state prefs.json --user u1 --from burpee --to jumping_jack --write
//!
//! # Traffic-light strain assessment
//! intensity-cli assess --heart-rate 150 --spo2 97 --max-heart-rate 185
//! ```

mod commands;
mod helpers;

use adaptive_intensity::config::ServiceConfig;
use adaptive_intensity::logging::LoggingConfig;
use adaptive_intensity::AdaptiveIntensityEngine;
use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(
    name = "intensity-cli",
    about = "Adaptive training intensity CLI",
    long_about = "Evaluate biometric snapshots against session history and track exercise swaps."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate an evaluation context and print the decision
    Evaluate {
        /// Path to a context JSON file, or `-` for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,
    },

    /// Record an exercise swap
    Swap {
        /// Path to a preference state JSON file (created if missing)
        #[arg(long)]
        state: PathBuf,

        /// User the swap belongs to
        #[arg(long)]
        user: String,

        /// Exercise that was replaced
        #[arg(long)]
        from: String,

        /// Exercise substituted in
        #[arg(long)]
        to: String,

        /// Write the updated state back to `--state`
        #[arg(long)]
        write: bool,
    },

    /// Assess strain for a single reading
    #[command(group(ArgGroup::new("basis").required(true).args(["max_heart_rate", "age"])))]
    Assess {
        /// Heart rate in bpm
        #[arg(long)]
        heart_rate: u32,

        /// Blood oxygen saturation in percent
        #[arg(long)]
        spo2: Option<f64>,

        /// Strain score (0-21)
        #[arg(long)]
        strain: Option<f64>,

        /// Calibrated max heart rate in bpm
        #[arg(long)]
        max_heart_rate: Option<u32>,

        /// Age in years, used to estimate max heart rate
        #[arg(long)]
        age: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let service = ServiceConfig::from_env()?;
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        service.log_level.to_tracing_level()
    };
    LoggingConfig::from_env()
        .with_level(level.as_str().to_ascii_lowercase())
        .init()?;
    info!("{}", service.summary());

    let engine = AdaptiveIntensityEngine::new(service.engine);
    debug!(rules = ?engine.rule_names(), "Engine ready");

    match cli.command {
        Command::Evaluate { input } => commands::evaluate::run(&engine, &input),
        Command::Swap {
            state,
            user,
            from,
            to,
            write,
        } => commands::swap::run(&engine, &state, &user, &from, &to, write),
        Command::Assess {
            heart_rate,
            spo2,
            strain,
            max_heart_rate,
            age,
        } => commands::assess::run(
            &engine,
            commands::assess::Reading {
                heart_rate,
                spo2,
                strain,
                max_heart_rate,
                age,
            },
        ),
    }
}

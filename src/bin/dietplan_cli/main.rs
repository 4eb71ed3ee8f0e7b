// ABOUTME: dietplan-cli - command-line front end for the diet plan engine
// ABOUTME: Generates plans from JSON profiles, runs batches, and prints energy calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a plan from a profile file
//! dietplan-cli generate --input profile.json --pretty
//!
//! # Generate a plan from stdin
//! cat profile.json | dietplan-cli generate
//!
//! # Generate plans for a JSON array of profiles
//! dietplan-cli batch --input profiles.json
//!
//! # Energy figures only
//! dietplan-cli calculate --weight 70 --height 170 --age 30 --gender female \
//!     --activity moderate --goal weight_loss
//!
//! # Show the effective configuration
//! dietplan-cli config
//! ```
//!
//! Failures print the JSON error envelope on stdout and exit with status 1.

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use dietplan_core::constants::service_names;
use dietplan_engine::errors::AppResult;
use dietplan_engine::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "dietplan-cli",
    about = "Diet Plan Engine CLI",
    long_about = "Generate bilingual (Arabic/English) diet plans from patient profiles."
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
    /// Generate a diet plan from one patient profile (JSON)
    Generate {
        /// Profile file; reads stdin when omitted
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Pretty-print the plan
        #[arg(long)]
        pretty: bool,
    },

    /// Generate diet plans for a JSON array of patient profiles
    Batch {
        /// Profiles file; reads stdin when omitted
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Pretty-print the results
        #[arg(long)]
        pretty: bool,
    },

    /// Calculate BMR, TDEE, target calories, BMI and macros
    Calculate {
        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Age in years
        #[arg(long)]
        age: f64,

        /// BMR formula branch (male or female)
        #[arg(long, default_value = "male")]
        gender: String,

        /// Activity level (sedentary, light, moderate, high)
        #[arg(long)]
        activity: String,

        /// Goal (weight_loss, muscle_gain, maintain, health)
        #[arg(long)]
        goal: String,
    },

    /// Print the effective engine configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    logging.service_name = service_names::DIETPLAN_CLI.to_owned();
    if cli.verbose {
        logging = logging.with_level("debug");
    } else if std::env::var("RUST_LOG").is_err() {
        logging = logging.with_level("warn");
    }
    if let Err(error) = logging.init() {
        eprintln!("dietplan-cli: logging disabled: {error}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!(code = ?error.code, "Command failed");
            helpers::io::print_error(error);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    match command {
        Command::Generate { input, pretty } => commands::generate::run(input.as_deref(), pretty),
        Command::Batch { input, pretty } => commands::batch::run(input.as_deref(), pretty),
        Command::Calculate {
            weight,
            height,
            age,
            gender,
            activity,
            goal,
        } => commands::calculate::run(weight, height, age, &gender, &activity, &goal),
        Command::Config => commands::config::run(),
    }
}

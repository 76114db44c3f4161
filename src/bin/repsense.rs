// ABOUTME: Repsense CLI - counts reps from recorded or synthetic landmark frames
// ABOUTME: Loads environment configuration, runs one session, and prints the stop report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Count curls from a recorded landmark stream
//! repsense run --exercise bicep_curl --weight 70 --height 175 --age 30 \
//!     --gender male --phone +15550100 --frames session.jsonl
//!
//! # Demo run on 12 generated curls with custom thresholds
//! repsense run --exercise "bicep curls" --weight 70 --height 175 --age 30 \
//!     --gender female --synthetic 12 --down-threshold 150 --up-threshold 40
//!
//! # Show the per-exercise configuration table
//! repsense exercises
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use repsense::config::{AppConfig, ExerciseCatalog, RepThresholds};
use repsense::logging::LoggingConfig;
use repsense::models::{ExerciseType, Gender, Profile};
use repsense::session::{
    run_session, LogAnnouncer, SessionController, StatusLine, StopFlag, StopReport,
};
use repsense_providers::{
    initialize_shared_client, LandmarkSource, ReplaySource, SyntheticCurlConfig,
    SyntheticCurlSource,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "repsense",
    version,
    about = "Count exercise reps from pose landmarks",
    long_about = "Counts repetitions from per-frame joint landmarks, credits calories per rep, and sends a summary when the session stops."
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
    /// Run one exercise session
    Run(RunArgs),

    /// List supported exercises and their calibration
    Exercises,
}

#[derive(clap::Args)]
struct RunArgs {
    /// Exercise id or phrase (e.g. `bicep_curl`, "lateral raises")
    #[arg(long)]
    exercise: ExerciseType,

    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Height in centimeters
    #[arg(long)]
    height: f64,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Gender (male or female)
    #[arg(long)]
    gender: Gender,

    /// Phone number receiving the summary SMS
    #[arg(long, default_value = "")]
    phone: String,

    /// JSON-lines file of recorded landmark frames
    #[arg(long, conflicts_with = "synthetic")]
    frames: Option<PathBuf>,

    /// Generate this many synthetic curls instead of reading frames
    #[arg(long)]
    synthetic: Option<u32>,

    /// Delay between replayed frames in milliseconds (0 replays as fast as possible)
    #[arg(long, default_value = "0")]
    pace_ms: u64,

    /// Angle above which the limb counts as extended
    #[arg(long)]
    down_threshold: Option<f64>,

    /// Angle below which the limb counts as contracted
    #[arg(long)]
    up_threshold: Option<f64>,
}

const DEFAULT_SYNTHETIC_REPS: u32 = 10;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;

    match cli.command {
        Command::Run(args) => run(args).await,
        Command::Exercises => {
            list_exercises();
            Ok(())
        }
    }
}

fn list_exercises() {
    println!("{:<15} {:<16} {:<40} {:>6} {:>6}", "ID", "PHRASE", "JOINTS", "DOWN", "UP");
    for config in ExerciseCatalog::standard().iter() {
        println!(
            "{:<15} {:<16} {:<40} {:>6.1} {:>6.1}",
            config.exercise.as_str(),
            config.exercise.phrase(),
            config.joints.to_string(),
            config.thresholds.down_degrees,
            config.thresholds.up_degrees
        );
    }
}

async fn run(args: RunArgs) -> Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    if !initialize_shared_client(config.http) {
        warn!("HTTP client already initialized, keeping existing timeouts");
    }

    let mut catalog = ExerciseCatalog::standard();
    if args.down_threshold.is_some() || args.up_threshold.is_some() {
        let current = catalog.get(args.exercise)?.thresholds;
        let thresholds = RepThresholds::new(
            args.down_threshold.unwrap_or(current.down_degrees),
            args.up_threshold.unwrap_or(current.up_degrees),
        )?;
        catalog.override_thresholds(args.exercise, thresholds)?;
    }
    let exercise = catalog.get(args.exercise)?;

    let profile = Profile {
        exercise: args.exercise,
        weight_kg: args.weight,
        height_cm: args.height,
        age_years: args.age,
        gender: args.gender,
        contact: args.phone,
    };
    if !profile.has_contact() {
        warn!("No phone number given; the summary SMS will be skipped");
    }

    let mut controller = SessionController::builder()
        .with_collaborators(&config)
        .subscriber(Arc::new(LogAnnouncer))
        .subscriber(Arc::new(StatusLine))
        .build();
    controller.start(profile, exercise).await?;

    let stop = StopFlag::new();
    spawn_ctrl_c_handler(stop.clone());

    let mut source: Box<dyn LandmarkSource> = if let Some(path) = args.frames {
        let replay = ReplaySource::open(&path)
            .await
            .with_context(|| format!("Cannot replay {}", path.display()))?;
        if args.pace_ms > 0 {
            Box::new(replay.with_pacing(Duration::from_millis(args.pace_ms)))
        } else {
            Box::new(replay)
        }
    } else {
        Box::new(SyntheticCurlSource::new(SyntheticCurlConfig {
            reps: args.synthetic.unwrap_or(DEFAULT_SYNTHETIC_REPS),
            ..SyntheticCurlConfig::default()
        }))
    };

    let report = run_session(&mut controller, source.as_mut(), &stop).await?;
    println!();
    if let Some(report) = report {
        print_report(&report);
    }
    Ok(())
}

/// Raise the stop flag on the first Ctrl-C
fn spawn_ctrl_c_handler(stop: StopFlag) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, stopping at the next frame");
                stop.request_stop();
            }
            Err(e) => warn!(error = %e, "Cannot listen for Ctrl-C"),
        }
    });
}

fn print_report(report: &StopReport) {
    let summary = &report.summary;
    println!("{}", summary.message());
    println!(
        "Frames: {} processed, {} skipped in {}s",
        summary.frames_processed,
        summary.frames_skipped,
        summary.duration().num_seconds()
    );
    for sink in &report.delivered {
        println!("Summary delivered via {sink}");
    }
    for warning in &report.warnings {
        println!("Warning: {warning}");
    }
}

// ABOUTME: Nurture CLI - command-line access to growth analytics over a JSON dataset
// ABOUTME: Prints insights, batch insights, chart overlays, and reference curves as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Insights for one child
//! nurture-cli insights --data growth.json --subject 6f1c...
//!
//! # Insights for every child in the dataset
//! NURTURE_DATA_FILE=growth.json nurture-cli batch
//!
//! # Weight curve with the child's measurements overlaid
//! nurture-cli chart --data growth.json --subject 6f1c... --metric weight
//!
//! # Raw reference curves
//! nurture-cli curves --metric height --sex female --max-age 12
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nurture_growth::{
    config::AppConfig,
    constants::growth_defaults::CURVE_MAX_AGE_MONTHS,
    errors::AppResult,
    logging::LoggingConfig,
    models::{GrowthMetric, ReferenceMetric, Sex},
};
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nurture-cli",
    about = "Nurture growth analytics CLI",
    long_about = "Computes percentile standing, growth trends, alerts, and reference curves from a JSON growth dataset."
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
    /// Growth insights for one subject
    Insights {
        /// Dataset file (defaults to `NURTURE_DATA_FILE`)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Subject identifier
        #[arg(long)]
        subject: Uuid,
    },

    /// Growth insights for every subject in the dataset
    Batch {
        /// Dataset file (defaults to `NURTURE_DATA_FILE`)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Reference curves with one subject's measurements overlaid
    Chart {
        /// Dataset file (defaults to `NURTURE_DATA_FILE`)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Subject identifier
        #[arg(long)]
        subject: Uuid,

        /// Metric to chart (weight or height)
        #[arg(long)]
        metric: GrowthMetric,

        /// Last month on the chart
        #[arg(long, default_value_t = CURVE_MAX_AGE_MONTHS)]
        max_age: u32,
    },

    /// Monthly reference curves for a metric and sex
    Curves {
        /// Metric (weight or height)
        #[arg(long)]
        metric: ReferenceMetric,

        /// Sex (male or female)
        #[arg(long)]
        sex: Sex,

        /// Last month in the series
        #[arg(long, default_value_t = CURVE_MAX_AGE_MONTHS)]
        max_age: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    LoggingConfig::for_cli(&config, cli.verbose).init()?;
    debug!("Configuration loaded: {}", config.summary());

    match cli.command {
        Command::Insights { data, subject } => {
            let service = commands::analytics::open_service(&config, data).await?;
            commands::analytics::insights(&service, subject).await?;
        }
        Command::Batch { data } => {
            let service = commands::analytics::open_service(&config, data).await?;
            commands::analytics::batch(&service).await?;
        }
        Command::Chart {
            data,
            subject,
            metric,
            max_age,
        } => {
            let service = commands::analytics::open_service(&config, data).await?;
            commands::analytics::chart(&service, subject, metric, max_age).await?;
        }
        Command::Curves {
            metric,
            sex,
            max_age,
        } => {
            commands::curves::print(metric, sex, max_age)?;
        }
    }

    Ok(())
}

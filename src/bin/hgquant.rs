//! Command-line front end for the Bateman decay calculator.
//!
//! Reads activities, half-lives and timepoints, prints the decay constants,
//! equations and results table, and optionally exports CSV sheets or JSON.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use hgquant::data::{parse_observations, parse_timestamp, read_timepoints, TimestampPrecision};
use hgquant::decay::{compute_series, DecayError, DecayParameters};
use hgquant::report::{build_workbook, default_export_stem, export_csv, export_json, format_report};
use hgquant::units::{convert_activity, ActivityUnit};
use hgquant::Settings;

/// Bateman decay calculator for a metastable parent and its ground-state daughter.
#[derive(Parser)]
#[command(name = "hgquant")]
#[command(version, about = "Bateman decay-chain calculator (e.g. Hg-197m → Hg-197g).")]
struct Cli {
    /// Settings file (default: platform config dir / hgquant / settings.json).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log output format: text or json.
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute activities at the given timepoints.
    Compute(ComputeArgs),
    /// Convert an activity value between per-volume units.
    Convert(ConvertArgs),
    /// Show or change settings.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
struct ComputeArgs {
    /// Initial parent activity at the reference time.
    #[arg(long)]
    parent: f64,

    /// Initial daughter activity at the reference time.
    #[arg(long, default_value_t = 0.0)]
    daughter: f64,

    /// Parent half-life in hours (default from settings).
    #[arg(long)]
    half_life_parent: Option<f64>,

    /// Daughter half-life in hours (default from settings).
    #[arg(long)]
    half_life_daughter: Option<f64>,

    /// Measurement timestamp, YYYY-MM-DD HH:MM[:SS] (default: now).
    #[arg(long)]
    reference: Option<String>,

    /// Timepoint to evaluate; repeat for several.
    #[arg(long = "timepoint", short = 't')]
    timepoints: Vec<String>,

    /// File with one timepoint per line.
    #[arg(long)]
    timepoints_file: Option<PathBuf>,

    /// Timestamp precision: full, seconds or minutes.
    #[arg(long, default_value = "full")]
    precision: TimestampPrecision,

    /// Export CSV sheets to this folder (default: the settings' save folder).
    #[arg(long, num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// Write the full result as JSON to this file.
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Args)]
struct ConvertArgs {
    value: f64,
    from: ActivityUnit,
    to: ActivityUnit,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print all settings.
    Show,
    /// Print one setting.
    Get { key: String },
    /// Change one setting.
    Set { key: String, value: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings_path = cli.settings.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;

    init_logging(&settings.log_level, &cli.log_format);
    debug!(path = %settings_path.display(), "settings loaded");

    match cli.command {
        Commands::Compute(args) => run_compute(args, &settings),
        Commands::Convert(args) => {
            let value = convert_activity(args.value, args.from, args.to)?;
            println!("{value} {}", args.to);
            Ok(())
        }
        Commands::Config { action } => run_config(action, settings, &settings_path),
    }
}

fn run_compute(args: ComputeArgs, settings: &Settings) -> Result<()> {
    let reference = match &args.reference {
        Some(text) => parse_timestamp(text, args.precision).context("reference timestamp")?,
        None => args.precision.apply(chrono::Local::now().naive_local()),
    };

    let mut lines = args.timepoints.clone();
    if let Some(path) = &args.timepoints_file {
        lines.extend(read_timepoints(path)?);
    }
    if lines.is_empty() {
        bail!("no timepoints given; use --timepoint or --timepoints-file");
    }

    let observations =
        parse_observations(reference, &lines, args.precision).context("timepoint")?;

    let params = DecayParameters::new(
        args.parent,
        args.daughter,
        args.half_life_parent.unwrap_or(settings.half_life_parent),
        args.half_life_daughter.unwrap_or(settings.half_life_daughter),
        reference,
    );

    let series = compute_series(&params, &observations).map_err(|e| match e {
        DecayError::DegenerateChain { .. } => anyhow::Error::new(e)
            .context("the half-lives make λg equal λ_IT; adjust one of them"),
        DecayError::InvalidParameter { .. } => anyhow::Error::new(e).context("invalid input"),
        DecayError::NonFiniteActivity { .. } => {
            anyhow::Error::new(e).context("timepoint is too far from the reference; check the date")
        }
    })?;

    let ctx = settings.report_context();
    println!("{}", format_report(&series, &ctx));

    if let Some(dir) = args.export {
        let dir = dir.unwrap_or_else(|| settings.export_dir());
        let now = chrono::Local::now().naive_local();
        let workbook = build_workbook(&series, &ctx, now);
        let paths = export_csv(&workbook, &dir, &default_export_stem(now))
            .context("could not save export; results are unchanged, retry with another folder")?;
        for p in paths {
            println!("saved {}", p.display());
        }
    }

    if let Some(path) = &args.json {
        export_json(&series, &ctx, path)?;
        println!("saved {}", path.display());
    }
    Ok(())
}

fn run_config(action: ConfigAction, mut settings: Settings, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            for key in hgquant::config::KEYS {
                println!("{key} = {}", settings.get(key).unwrap_or_default());
            }
        }
        ConfigAction::Get { key } => match settings.get(&key) {
            Some(value) => println!("{value}"),
            None => bail!("unknown setting '{key}'"),
        },
        ConfigAction::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(path)?;
            println!("{key} = {}", settings.get(&key).unwrap_or_default());
        }
    }
    Ok(())
}

/// Initialize tracing with the given filter and output format.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

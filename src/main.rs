use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use obstetric_core::constants::{
    DELIVERY_WINDOW_DAYS_ENV, LOW_APGAR_THRESHOLD_ENV, OBSERVATION_INTERVAL_MINUTES_ENV,
    OBSERVATION_WINDOW_MINUTES_ENV,
};
use obstetric_core::{config_from_env_values, AlertContext, DecisionEngine, EngineConfig};
use obstetric_records::{
    AntenatalVisits, NewbornApgar, ObstetricRecordFile, TetanusChain, VitalSigns,
};

#[derive(Parser)]
#[command(name = "obstetric")]
#[command(about = "Obstetric decision engine for pregnancy dates, risks, scores and schedules")]
struct Cli {
    /// Reference date (YYYY-MM-DD); defaults to today's local date
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expected delivery date, gestational age and trimester
    Dates {
        /// Obstetric record YAML file
        record: PathBuf,
    },
    /// Maternal risk factors
    Risks {
        /// Obstetric record YAML file
        record: PathBuf,
        /// Patient age in years, from the demographic record
        #[arg(long)]
        age: Option<u32>,
    },
    /// Score a newborn Apgar series
    Apgar {
        /// Apgar series YAML file
        series: PathBuf,
    },
    /// Check a post-partum observation for danger signs
    Postpartum {
        /// Vital observation YAML file
        observation: PathBuf,
    },
    /// Post-partum observation times
    Slots {
        /// Start of surveillance (YYYY-MM-DDTHH:MM:SS)
        start: NaiveDateTime,
    },
    /// Next antenatal visit and panel completeness
    NextVisit {
        /// Visit list YAML file
        visits: PathBuf,
        /// Date of the most recent visit, if not the latest date in the file
        #[arg(long)]
        last_visit_date: Option<NaiveDate>,
    },
    /// Next tetanus-toxoid dose
    Tetanus {
        /// Tetanus chain YAML file
        chain: PathBuf,
    },
    /// Maternity alerts for one pregnancy
    Alerts {
        /// Obstetric record YAML file
        record: PathBuf,
        /// Visit list YAML file
        #[arg(long)]
        visits: Option<PathBuf>,
        /// Apgar series YAML file
        #[arg(long)]
        apgar: Option<PathBuf>,
        /// Patient age in years
        #[arg(long)]
        age: Option<u32>,
    },
}

/// Main entry point for the obstetric runner.
///
/// Loads the requested record files, runs the matching calculator and prints the result as
/// pretty JSON on stdout. Logs go to stderr.
///
/// # Environment Variables
/// - `OBSTETRIC_LOW_APGAR_THRESHOLD`: 5-minute Apgar below which an alert is raised (default: 7)
/// - `OBSTETRIC_DELIVERY_WINDOW_DAYS`: days before delivery that raise a reminder (default: 7)
/// - `OBSTETRIC_OBSERVATION_WINDOW_MINUTES`: post-partum surveillance length (default: 120)
/// - `OBSTETRIC_OBSERVATION_INTERVAL_MINUTES`: spacing between observations (default: 15)
/// - `RUST_LOG`: log filter
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("obstetric=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let engine = DecisionEngine::new(Arc::new(config_from_env()?));
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    run(&engine, cli.command, today)
}

fn config_from_env() -> anyhow::Result<EngineConfig> {
    let cfg = config_from_env_values(
        std::env::var(LOW_APGAR_THRESHOLD_ENV).ok(),
        std::env::var(DELIVERY_WINDOW_DAYS_ENV).ok(),
        std::env::var(OBSERVATION_WINDOW_MINUTES_ENV).ok(),
        std::env::var(OBSERVATION_INTERVAL_MINUTES_ENV).ok(),
    )?;
    tracing::debug!(?cfg, "engine configuration resolved");
    Ok(cfg)
}

fn run(engine: &DecisionEngine, command: Commands, today: NaiveDate) -> anyhow::Result<()> {
    match command {
        Commands::Dates { record } => {
            let record = ObstetricRecordFile::parse(&read(&record)?)?;
            let dates = engine.pregnancy_dates(record.last_menstrual_period, today);
            if dates.is_none() {
                tracing::warn!("last menstrual period missing or out of range");
            }
            print_json(&dates)
        }
        Commands::Risks { record, age } => {
            let record = ObstetricRecordFile::parse(&read(&record)?)?;
            let factors = engine.risk_factors(&record, age);
            print_json(&serde_json::json!({
                "high_risk": !factors.is_empty(),
                "labels": factors.iter().map(|f| f.label()).collect::<Vec<_>>(),
                "factors": factors,
            }))
        }
        Commands::Apgar { series } => {
            let series = NewbornApgar::parse(&read(&series)?)?;
            print_json(&engine.assess_apgar(&series))
        }
        Commands::Postpartum { observation } => {
            let observation = VitalSigns::parse(&read(&observation)?)?;
            print_json(&engine.assess_vitals(&observation))
        }
        Commands::Slots { start } => print_json(&engine.observation_schedule(start)),
        Commands::NextVisit {
            visits,
            last_visit_date,
        } => {
            let visits = AntenatalVisits::parse(&read(&visits)?)?;
            print_json(&engine.antenatal_overview(&visits, last_visit_date))
        }
        Commands::Tetanus { chain } => {
            let chain = TetanusChain::parse(&read(&chain)?)?;
            print_json(&engine.next_tetanus_dose(&chain))
        }
        Commands::Alerts {
            record,
            visits,
            apgar,
            age,
        } => {
            let record = ObstetricRecordFile::parse(&read(&record)?)?;
            let visits = match visits {
                Some(path) => AntenatalVisits::parse(&read(&path)?)?,
                None => Vec::new(),
            };
            let apgar = match apgar {
                Some(path) => Some(NewbornApgar::parse(&read(&path)?)?),
                None => None,
            };
            let ctx = AlertContext {
                record: &record,
                patient_age: age,
                visits: &visits,
                apgar: apgar.as_ref(),
            };
            print_json(&engine.maternity_alerts(&ctx, today))
        }
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

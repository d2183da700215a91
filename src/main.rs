use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use statusboard::models::{Channel, FeatureRecord, ReleaseTimeline, RfcRef, RustcVersion};
use statusboard::{data, page};

#[derive(Parser)]
#[command(name = "statusboard")]
#[command(about = "Static status page generator for feature stabilization tracking")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the status page
    Render {
        /// Data file with the feature tables
        #[arg(long, default_value = "data.yml")]
        data: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "out")]
        out: PathBuf,

        /// Directory of static assets to copy into the output
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,

        /// Classify releases as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Validate the data file and report release channels
    Check {
        /// Data file with the feature tables
        #[arg(long, default_value = "data.yml")]
        data: PathBuf,

        /// Classify releases as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "statusboard=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Render {
            data,
            out,
            static_dir,
            date,
        }) => render(&data, &out, Some(&static_dir), date),
        Some(Commands::Check { data, date, json }) => check(&data, date, json),
        None => {
            // Default: generate with the stock paths.
            render(
                Path::new("data.yml"),
                Path::new("out"),
                Some(Path::new("static")),
                None,
            )
        }
    }
}

fn stable_release(date: Option<NaiveDate>) -> RustcVersion {
    let timeline = ReleaseTimeline::default();
    let stable = timeline.stable_at(date.unwrap_or_else(|| Utc::now().date_naive()));
    tracing::info!("current stable release is {stable}, beta is {}", stable.beta());
    stable
}

fn render(
    data_file: &Path,
    out_dir: &Path,
    static_dir: Option<&Path>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let tables = data::from_file(data_file)?;
    let stable = stable_release(date);
    let shell = page::PageShell::default();
    page::generate(&shell, &tables, stable, out_dir, static_dir)
}

/// One line of the check report.
#[derive(Serialize)]
struct RecordReport {
    title: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

/// Walk every record, failing on the first malformed version or RFC
/// reference, and report where each one stands.
fn check(data_file: &Path, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let tables = data::from_file(data_file)?;
    let stable = stable_release(date);

    // BTreeMap keeps the report ordering deterministic.
    let mut report: BTreeMap<&str, Vec<RecordReport>> = BTreeMap::new();
    for (id, records) in &tables {
        let entries = records
            .iter()
            .map(|record| {
                check_record(record, stable)
                    .with_context(|| format!("record `{}` in section `{id}`", record.title))
            })
            .collect::<Result<Vec<_>>>()?;
        report.insert(id.as_str(), entries);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    for (id, entries) in &report {
        println!("{id}:");
        for entry in entries {
            match entry.status {
                "unresolved" => println!(
                    "  {} - unresolved ({})",
                    entry.title,
                    entry.url.as_deref().unwrap_or_default()
                ),
                "stabilized" => println!(
                    "  {} - stabilized in {} [in {}]",
                    entry.title,
                    entry.version.as_deref().unwrap_or_default(),
                    entry.channel.map(|c| c.as_str()).unwrap_or_default()
                ),
                _ => println!("  {} - not stabilized yet", entry.title),
            }
        }
    }
    Ok(())
}

fn check_record(record: &FeatureRecord, stable: RustcVersion) -> Result<RecordReport> {
    let mut report = RecordReport {
        title: record.title.clone(),
        status: "not-stabilized",
        version: None,
        channel: None,
        url: None,
    };
    if let Some(unresolved) = &record.unresolved {
        let rfc = RfcRef::parse(unresolved)?;
        report.status = "unresolved";
        report.url = Some(rfc.url);
        return Ok(report);
    }
    if let Some(reference) = &record.rfc {
        RfcRef::parse(reference)?;
    }
    if let Some(stabilized) = &record.stabilized {
        let version: RustcVersion = stabilized.version.parse()?;
        report.status = "stabilized";
        report.channel = Some(Channel::classify(version, stable));
        report.version = Some(stabilized.version.clone());
    }
    Ok(report)
}

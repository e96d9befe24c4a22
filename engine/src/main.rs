// Engine main entry point: headless fetch/inspect commands.
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use engine::config::EngineSettings;
use engine::data::{Dataset, OhlcCsv};
use engine::services::history_service::{DEFAULT_END_DATE, DEFAULT_START_DATE};
use engine::services::{FetchForm, HistoryService};
use shared::utils::format_timestamp;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "engine")]
#[command(about = "Fetch Bitstamp OHLC history into a CSV file", long_about = None)]
struct Cli {
    /// JSON settings file; built-in defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch [start, end) and write the CSV export
    Fetch {
        /// Start date, YYYY-MM-DD (UTC)
        #[arg(long, default_value = DEFAULT_START_DATE)]
        start: String,
        /// End date, YYYY-MM-DD (UTC, exclusive)
        #[arg(long, default_value = DEFAULT_END_DATE)]
        end: String,
        /// Output file; defaults to export.directory/export.file_name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print row count and first rows of an exported CSV
    Inspect {
        path: PathBuf,
        /// Rows to show; defaults to export.preview_rows
        #[arg(short = 'n', long)]
        rows: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => EngineSettings::load(path).with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => EngineSettings::default(),
    };

    tracing_subscriber::fmt().with_max_level(settings.tracing_level()).init();
    info!("Starting engine...");

    match cli.command {
        Commands::Fetch { start, end, output } => fetch(&settings, &start, &end, output).await,
        Commands::Inspect { path, rows } => inspect(&settings, path, rows),
    }
}

async fn fetch(settings: &EngineSettings, start: &str, end: &str, output: Option<PathBuf>) -> Result<()> {
    let form = FetchForm::parse(start, end)?;
    let service = HistoryService::from_settings(settings)?;

    let view = service.fetch_view(&form).await;
    print!("{}", view.to_text());

    let Some(download) = view.download() else {
        bail!("nothing to export");
    };
    let path = output.unwrap_or_else(|| settings.export.output_path());
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    std::fs::write(&path, &download.contents).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Saved {}", path.display());
    Ok(())
}

fn inspect(settings: &EngineSettings, path: PathBuf, rows: Option<usize>) -> Result<()> {
    let dataset = Dataset::from(OhlcCsv::load(&path).with_context(|| format!("Failed to read {}", path.display()))?);
    println!("{}: {} rows", path.display(), dataset.len());
    if let (Some(first), Some(last)) = (dataset.records().first(), dataset.records().last()) {
        println!("from {} to {}", format_timestamp(first.timestamp), format_timestamp(last.timestamp));
    }
    for record in dataset.head(rows.unwrap_or(settings.export.preview_rows)) {
        println!(
            "{}  {}  {}  {}  {}  {}",
            format_timestamp(record.timestamp),
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume
        );
    }
    Ok(())
}

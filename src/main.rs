//! CLI entry point for the bikeshare explorer.
//!
//! Runs the interactive session by default, or prints the reports for a
//! single selection with the `report` subcommand.

use anyhow::Result;
use bikeshare_stats::{
    cities::CityCatalog,
    console::Console,
    filters::{City, DayFilter, MonthFilter, Selection},
    logging::env_filter,
    scroller::DEFAULT_WINDOW,
    session::{run_report, run_session},
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory holding the city CSV files [env: BIKESHARE_DATA_DIR]
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// JSON file mapping city names to data file names
    #[arg(long, global = true, value_name = "FILE")]
    cities: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick filters interactively and browse the statistics (default)
    Explore {
        /// Number of raw rows shown per page
        #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
        window: usize,
    },
    /// Print the statistics for one selection without prompting
    Report {
        /// Chicago, New York City or Washington
        #[arg(long)]
        city: City,

        /// January-June, or "all"
        #[arg(long, default_value = "all")]
        month: MonthFilter,

        /// Day of week, or "all"
        #[arg(long, default_value = "all")]
        day: DayFilter,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // stderr stays quiet by default so it does not interleave with prompts
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::WARN));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .or_else(|| std::env::var("BIKESHARE_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut catalog = CityCatalog::new(data_dir);
    if let Some(path) = &cli.cities {
        catalog = catalog.with_overrides_file(path)?;
    }
    info!(data_dir = %catalog.data_dir().display(), "City catalog ready");

    match cli.command.unwrap_or(Commands::Explore {
        window: DEFAULT_WINDOW,
    }) {
        Commands::Explore { window } => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut console = Console::new(stdin.lock(), stdout.lock());
            run_session(&mut console, &catalog, window)?;
        }
        Commands::Report { city, month, day } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_report(&mut out, &catalog, &Selection::new(city, month, day))?;
        }
    }

    Ok(())
}

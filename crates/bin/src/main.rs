//! Hobart dashboard entry point.

mod app;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hobart::data::load_universes;

/// Basket vs benchmark cumulative return dashboard.
#[derive(Debug, Parser)]
#[command(name = "hobart", version, about)]
struct Cli {
    /// Path to the basket universe CSV.
    #[arg(long, default_value = "data/baskets.csv")]
    baskets: PathBuf,

    /// Path to the benchmark universe CSV.
    #[arg(long, default_value = "data/benchmarks.csv")]
    benchmarks: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (baskets, benchmarks) = match load_universes(&cli.baskets, &cli.benchmarks) {
        Ok(tables) => tables,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        baskets = baskets.len(),
        benchmarks = benchmarks.len(),
        "universes loaded"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };
    let outcome = eframe::run_native(
        "Hobart Performance Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(app::DashboardApp::new(baskets, benchmarks)))),
    );
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

//! A command line interface to the parcel dispatcher.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use u_dispatch::adapter::{
    sample_records, write_records, ConsolePresenter, CsvRecordSource, Presenter, RecordSource,
};
use u_dispatch::config::DispatchConfig;
use u_dispatch::dispatch::dispatch;
use u_dispatch::evaluation::invoice;
use u_dispatch::models::ParcelRecord;
use u_dispatch::routing::plan;
use u_dispatch::selection::select;

#[derive(Parser)]
#[command(name = "u-dispatch", version, about = "Load, route and invoice a delivery truck")]
struct Cli {
    /// JSON configuration (depot, capacity, rates, distances).
    #[arg(long, global = true, env = "U_DISPATCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Select parcels that fit the truck and plan the delivery route.
    Route(ParcelsArg),
    /// Price every parcel of the file.
    Invoice(ParcelsArg),
    /// Route and invoice in one go.
    Run(ParcelsArg),
    /// Write a random parcel CSV to stdout.
    Sample {
        /// Number of parcels.
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Random seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Args)]
struct ParcelsArg {
    /// Parcel CSV with `Parcel ID`, `Name`, `Weight (kg)`, `Volume (m³)` and `Destination` columns.
    #[arg(long)]
    parcels: PathBuf,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<DispatchConfig> {
    match path {
        Some(path) => DispatchConfig::from_path(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => {
            info!("using built-in configuration");
            Ok(DispatchConfig::default())
        }
    }
}

fn load_parcels(path: &Path) -> Result<Vec<ParcelRecord>> {
    CsvRecordSource::from_path(path)
        .and_then(|mut source| source.load_records())
        .with_context(|| format!("failed to load parcels from {}", path.display()))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let stdout = io::stdout();
    let mut presenter = ConsolePresenter::new(stdout.lock());

    match cli.command {
        Command::Route(args) => {
            let records = load_parcels(&args.parcels)?;
            let selected = select(&records, &config.capacity);
            presenter.present_selection(&selected)?;
            let route = plan(&selected, &config.distances, &config.depot)
                .context("failed to plan the delivery route")?;
            presenter.present_route(&route)?;
        }
        Command::Invoice(args) => {
            let records = load_parcels(&args.parcels)?;
            let rows = invoice(&records, &config.distances, &config.depot, &config.rates);
            presenter.present_invoice(&rows)?;
        }
        Command::Run(args) => {
            let records = load_parcels(&args.parcels)?;
            let outcome = dispatch(&records, &config).context("failed to dispatch parcels")?;
            presenter.present_selection(&outcome.selected)?;
            presenter.present_route(&outcome.route)?;
            presenter.present_invoice(&outcome.invoice)?;
        }
        Command::Sample { count, seed } => {
            let cities: Vec<String> = config
                .distances
                .cities()
                .iter()
                .filter(|c| **c != config.depot)
                .cloned()
                .collect();
            let records = sample_records(count, seed, &cities);
            write_records(&records, presenter.into_inner())?;
            return Ok(());
        }
    }

    presenter.into_inner().flush()?;
    Ok(())
}

//! ncgrid - read grid points and time steps from netCDF model output.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ncgrid::data::Dataset;
use ncgrid::time::DisplayZone;
use ncgrid::util::{format_scalar, format_value};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "ncgrid")]
#[command(about = "Read grid points and time steps from netCDF model output", long_about = None)]
struct Args {
    /// Path to the NetCDF file to read
    #[arg(short, long, global = true, default_value = "file.nc")]
    file: PathBuf,

    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List variable names in file order
    Vars,

    /// Print the latitude and longitude at two indices
    Latlon {
        /// Latitude index
        #[arg(long, default_value_t = 8)]
        lat: usize,
        /// Longitude index
        #[arg(long, default_value_t = 4)]
        lon: usize,
    },

    /// Decode one step of the time axis
    Time {
        /// Time index
        #[arg(short, long, default_value_t = 7)]
        index: usize,
        /// Render in the system's local zone instead of UTC
        #[arg(long)]
        local: bool,
    },

    /// Read one grid point of a time × lat × lon variable
    Sample {
        /// Variable name
        #[arg(short, long, default_value = "index_of_airquality_194")]
        variable: String,
        /// Time index
        #[arg(long, default_value_t = 1)]
        time: usize,
        /// Latitude index
        #[arg(long, default_value_t = 0)]
        lat: usize,
        /// Longitude index
        #[arg(long, default_value_t = 431)]
        lon: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting ncgrid");
    }

    let dataset = Dataset::open(&args.file)?;
    run(&dataset, args.command)?;
    dataset.close();

    if args.log.is_some() {
        tracing::info!("ncgrid exited");
    }

    Ok(())
}

fn run(dataset: &Dataset, command: Command) -> Result<()> {
    match command {
        Command::Vars => {
            for name in dataset.list_variable_names() {
                println!("{}", name);
            }
        }
        Command::Latlon { lat, lon } => {
            let lat_value = dataset.lat_at(lat)?;
            let lon_value = dataset.lon_at(lon)?;
            println!(
                "Latitude index {} is {}, Longitude index {} is {}",
                lat,
                format_value(lat_value),
                lon,
                format_value(lon_value)
            );
        }
        Command::Time { index, local } => {
            let zone = if local {
                DisplayZone::Local
            } else {
                DisplayZone::Utc
            };
            let time = dataset.time_at(index)?;
            println!("{}th time index equals {}", index, time.to_iso8601(zone));
        }
        Command::Sample {
            variable,
            time,
            lat,
            lon,
        } => {
            let when = dataset.time_at(time)?;
            let lat_value = dataset.lat_at(lat)?;
            let lon_value = dataset.lon_at(lon)?;
            let value = dataset.component_value(&variable, time, lat, lon)?;
            println!(
                "{} is {} at time {}, latitude {}, longitude {}",
                variable,
                format_scalar(value),
                when,
                format_value(lat_value),
                format_value(lon_value)
            );
        }
    }
    Ok(())
}

//! mapstitch CLI - offline map snapshots from the command line.

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use mapstitch::config::{FetchConfig, SnapshotConfig};
use mapstitch::logging::{default_log_dir, default_log_file, init_logging};
use mapstitch::{GeoBounds, SnapshotService};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "mapstitch")]
#[command(about = "Fetch map tiles and stitch them into a single snapshot image")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch all tiles for a bounding box and composite them into one image
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Name used in the output filename
    name: String,

    /// Northern latitude of the bounding box, decimal degrees
    north: f64,

    /// Eastern longitude of the bounding box, decimal degrees
    east: f64,

    /// Southern latitude of the bounding box, decimal degrees
    south: f64,

    /// Western longitude of the bounding box, decimal degrees
    west: f64,

    /// Zoom level
    zoom: u8,

    /// Tile server URL template ({z}/{x}/{y} placeholders)
    #[arg(long)]
    server_url: Option<String>,

    /// Maximum number of concurrent tile downloads
    #[arg(long)]
    concurrency: Option<usize>,

    /// Per-attempt download timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Number of download attempts per tile
    #[arg(long)]
    max_retries: Option<u32>,

    /// Polite delay after each download, in seconds
    #[arg(long)]
    delay_secs: Option<f64>,

    /// Tile cache directory
    #[arg(long)]
    tile_dir: Option<PathBuf>,

    /// Output directory for the composite image
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl RunArgs {
    fn to_config(&self) -> SnapshotConfig {
        let mut fetch = FetchConfig::new();
        if let Some(url) = &self.server_url {
            fetch = fetch.with_url_template(url.clone());
        }
        if let Some(concurrency) = self.concurrency {
            fetch = fetch.with_concurrency(concurrency);
        }
        if let Some(secs) = self.timeout_secs {
            fetch = fetch.with_request_timeout_secs(secs);
        }
        if let Some(retries) = self.max_retries {
            fetch = fetch.with_max_retries(retries);
        }
        if let Some(secs) = self.delay_secs {
            fetch = fetch.with_inter_request_delay(Duration::from_secs_f64(secs));
        }

        let mut config = SnapshotConfig::new().with_fetch(fetch);
        if let Some(dir) = &self.tile_dir {
            config = config.with_tile_dir(dir.clone());
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir.clone());
        }
        config
    }
}

async fn run(args: RunArgs) -> Result<(), CliError> {
    let bounds = GeoBounds {
        north: args.north,
        east: args.east,
        south: args.south,
        west: args.west,
    };
    let zoom = args.zoom;
    let config = args.to_config();

    tracing::info!(
        name = %args.name,
        north = bounds.north,
        east = bounds.east,
        south = bounds.south,
        west = bounds.west,
        zoom,
        "Starting snapshot run"
    );

    let service = SnapshotService::new(config)?;
    let output = service.create(&args.name, bounds, zoom).await?;

    println!("Saved snapshot to {}", output.display());
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let _guard = match init_logging(default_log_dir(), default_log_file()) {
        Ok(guard) => guard,
        Err(e) => CliError::LoggingInit(e).exit(),
    };

    let result = match cli.command {
        Commands::Run(args) => run(args).await,
    };

    if let Err(e) = result {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args_parse() {
        let cli = Cli::try_parse_from([
            "mapstitch",
            "run",
            "berlin",
            "52.6",
            "13.5",
            "52.4",
            "13.2",
            "12",
        ])
        .unwrap();

        let Commands::Run(args) = cli.command;
        assert_eq!(args.name, "berlin");
        assert_eq!(args.north, 52.6);
        assert_eq!(args.east, 13.5);
        assert_eq!(args.south, 52.4);
        assert_eq!(args.west, 13.2);
        assert_eq!(args.zoom, 12);
        assert!(args.server_url.is_none());
    }

    #[test]
    fn test_missing_arguments_is_usage_error() {
        let result = Cli::try_parse_from(["mapstitch", "run", "berlin", "52.6"]);
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_overrides_flow_into_config() {
        let cli = Cli::try_parse_from([
            "mapstitch",
            "run",
            "demo",
            "1.0",
            "2.0",
            "0.0",
            "0.5",
            "3",
            "--server-url",
            "http://tiles.test/{z}/{x}/{y}.png",
            "--concurrency",
            "4",
            "--timeout-secs",
            "10",
            "--max-retries",
            "2",
            "--tile-dir",
            "/tmp/tiles",
            "--output-dir",
            "/tmp/maps",
        ])
        .unwrap();

        let Commands::Run(args) = cli.command;
        let config = args.to_config();

        assert_eq!(
            config.fetch().url_template(),
            "http://tiles.test/{z}/{x}/{y}.png"
        );
        assert_eq!(config.fetch().concurrency(), 4);
        assert_eq!(config.fetch().request_timeout(), Duration::from_secs(10));
        assert_eq!(config.fetch().max_retries(), 2);
        assert_eq!(config.tile_dir(), PathBuf::from("/tmp/tiles"));
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/maps"));
    }
}

//! Wayfind CLI - indoor route planning.
//!
//! - `wayfind nodes` - list or search points of interest
//! - `wayfind route` - plan a route between two points of interest
//! - `wayfind inspect` - floor plan and graph statistics

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use wayfind_cli::commands::{self, RouteStart};
use wayfind_cli::{OutputFormat, Venue, WayfindConfig};
use wayfind_geom::Point;
use wayfind_graph::GraphStrategy;

#[derive(Parser)]
#[command(name = "wayfind")]
#[command(about = "Indoor route planning around floor-plan obstacles", version)]
struct Cli {
    /// Config file (defaults to .wayfind/config.yaml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Output format (overrides the config file)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Clearance around obstacles in metres (overrides the config file)
    #[arg(long, global = true)]
    buffer: Option<f64>,

    /// Graph strategy (overrides the config file)
    #[arg(long, global = true)]
    strategy: Option<StrategyArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Waypoints,
    ObstacleVertices,
}

impl From<StrategyArg> for GraphStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Waypoints => GraphStrategy::Waypoints,
            StrategyArg::ObstacleVertices => GraphStrategy::ObstacleVertices,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List points of interest
    Nodes {
        /// GeoJSON floor plan
        #[arg(long)]
        plan: PathBuf,

        /// Only nodes whose name or location contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Plan a route
    Route {
        /// GeoJSON floor plan
        #[arg(long)]
        plan: PathBuf,

        /// Start point of interest
        #[arg(long, required_unless_present = "from_xy", conflicts_with = "from_xy")]
        from: Option<String>,

        /// Start position as "x,y" in source coordinates
        #[arg(long, value_parser = parse_xy)]
        from_xy: Option<Point>,

        /// Snap --from-xy to the nearest point of interest
        #[arg(long, requires = "from_xy")]
        snap: bool,

        /// Destination point of interest
        #[arg(long)]
        to: String,
    },

    /// Show floor plan and graph statistics
    Inspect {
        /// GeoJSON floor plan
        #[arg(long)]
        plan: PathBuf,
    },
}

fn parse_xy(raw: &str) -> std::result::Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {raw:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Point::new(x, y))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let logs = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        logs.json().init();
    } else {
        logs.init();
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let mut config = WayfindConfig::resolve(cli.config.as_deref(), &cwd)?;
    if let Some(buffer) = cli.buffer {
        config.graph.buffer_radius = buffer;
    }
    if let Some(strategy) = cli.strategy {
        config.graph.strategy = strategy.into();
    }
    config.graph.validate()?;
    let format = cli.format.unwrap_or(config.output);

    match cli.command {
        Commands::Nodes { plan, search } => {
            let venue = Venue::load(&plan, config.projection, &config.graph)?;
            let nodes = commands::list_nodes(&venue, search.as_deref());
            match format {
                OutputFormat::Json => print_json(&nodes),
                OutputFormat::Text => {
                    for node in &nodes {
                        println!("{node}");
                    }
                    Ok(())
                }
            }
        }
        Commands::Route {
            plan,
            from,
            from_xy,
            snap,
            to,
        } => {
            let venue = Venue::load(&plan, config.projection, &config.graph)?;
            let start = match (from, from_xy) {
                (Some(name), _) => RouteStart::Named(name),
                (None, Some(at)) => RouteStart::Position { at, snap },
                (None, None) => anyhow::bail!("either --from or --from-xy is required"),
            };
            let report = commands::route(&venue, &start, &to).await?;
            emit(format, &report)
        }
        Commands::Inspect { plan } => {
            let venue = Venue::load(&plan, config.projection, &config.graph)?;
            emit(format, &commands::inspect(&venue))
        }
    }
}

fn emit<T: Serialize + std::fmt::Display>(format: OutputFormat, value: &T) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Text => {
            print!("{value}");
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

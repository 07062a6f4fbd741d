//! CLI for computing the area enclosed by recorded waypoints.
//!
//! Provides:
//! - Convex hull and area of points given on the command line or in a JSON file
//! - SVG rendering of the points and their hull
//! - A replay of the built-in fake location route through a collection session

mod input;
mod render;

use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use geothgon_core::{HullArea, Session};
use log::info;

use crate::render::{render_svg, RenderConfig};

#[derive(Parser)]
#[command(name = "geothgon")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GEOTHGON_BUILD_SHA"), ")"))]
#[command(about = "Convex hull area of recorded waypoints", long_about = None)]
struct Cli {
    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Args)]
struct PointsArgs {
    /// Points, as "x,y"
    points: Vec<String>,

    /// JSON file containing an array of {"x": .., "y": ..} objects or [x, y] pairs
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the area enclosed by the points' convex hull
    Area {
        #[command(flatten)]
        points: PointsArgs,

        /// Print the hull and area as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the vertices of the points' convex hull, counter-clockwise
    Hull {
        #[command(flatten)]
        points: PointsArgs,

        /// Also print the hull's perimeter
        #[arg(long)]
        perimeter: bool,
    },

    /// Render the points and their convex hull as SVG
    Svg {
        #[command(flatten)]
        points: PointsArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Canvas width in pixels
        #[arg(long, default_value = "800")]
        width: f64,

        /// Canvas height in pixels
        #[arg(long, default_value = "600")]
        height: f64,

        /// Don't fill the hull
        #[arg(long)]
        no_fill: bool,

        /// Don't label points
        #[arg(long)]
        no_labels: bool,
    },

    /// Replay the built-in waypoint route: observe, mark, and compute the area
    Demo {
        /// Number of times to press "mark"
        #[arg(short, long, default_value = "7")]
        marks: usize,

        /// Print the hull and area as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_result(result: &HullArea, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("Area: {}", result.area);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = cli.log_level {
        logger.filter_level(geothgon_core::parse_log_level(Some(level.as_str())));
    }
    logger.init();

    match cli.command {
        Commands::Area { points, json } => {
            let set = input::load(&points.points, points.input.as_deref())?;
            print_result(&set.hull_area(), json)?;
        }
        Commands::Hull { points, perimeter } => {
            let set = input::load(&points.points, points.input.as_deref())?;
            let hull = set.hull_area().hull;
            for v in hull.iter() {
                println!("{}", v);
            }
            if perimeter {
                println!("Perimeter: {}", hull.perimeter());
            }
        }
        Commands::Svg { points, output, width, height, no_fill, no_labels } => {
            let set = input::load(&points.points, points.input.as_deref())?;
            let config = RenderConfig {
                width,
                height,
                fill: !no_fill,
                show_labels: !no_labels,
                ..RenderConfig::default()
            };
            let svg = render_svg(&set, &set.hull_area().hull, &config)?;
            match output {
                Some(path) => {
                    fs::write(&path, svg)?;
                    info!("wrote {}", path.display());
                }
                None => print!("{}", svg),
            }
        }
        Commands::Demo { marks, json } => {
            let mut session: Session = Session::default();
            for _ in 0..marks {
                let p = session.on_location_changed();
                let added = session.mark()?;
                if !json {
                    println!("Point now: {}{}", p, if added { "" } else { " (already marked)" });
                }
            }
            if !json {
                println!("Points:");
                for p in session.points() {
                    println!("  {}", p);
                }
            }
            print_result(&session.compute(), json)?;
        }
    }
    Ok(())
}

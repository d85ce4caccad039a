mod handlers;

use std::{path::PathBuf, process};

use clap::Parser;
use svg_schedule::{CanvasSize, ColorStrategy, RenderMode};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Render a weekly study timetable from a CSV of courses.
#[derive(Parser, Debug)]
#[command(name = "study-planner", version, about)]
pub struct Cli {
    /// Course table with columns course_name, credits, day, start_time,
    /// duration, room and lecturer
    pub input: PathBuf,

    /// `static` writes an SVG image, `interactive` an HTML page with hover details
    #[arg(short, long, env = "PLANNER_MODE", default_value = "static")]
    pub mode: RenderMode,

    /// Color of the title and the weekday header
    #[arg(long, env = "PLANNER_THEME", default_value = "skyblue")]
    pub theme: String,

    /// Canvas size in pixels, WIDTHxHEIGHT
    #[arg(long, default_value = "1200x900")]
    pub size: CanvasSize,

    /// Name shown in the title
    #[arg(short, long, env = "PLANNER_USER", default_value = "Student")]
    pub user: String,

    /// `spread` colors courses by row order, `by-name` by course name
    #[arg(long, default_value = "spread")]
    pub colors: ColorStrategy,

    /// Where to write the chart; defaults to the input path with an .svg or .html extension
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the computed blocks and axis bounds as JSON instead of rendering
    #[arg(long)]
    pub dump_blocks: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins over --verbose
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(why) = handlers::run(&cli) {
        error!(error = %why, "could not build timetable");
        eprintln!("Error: {:#}", why);
        process::exit(1);
    }
}

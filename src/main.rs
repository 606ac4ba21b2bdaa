//! `dbclust <input> <n> <eps> <min_pts>`: cluster a point file and write the
//! `n` largest groups next to it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use dbclust::io::{self, Delimiter};
use dbclust::Dbscan;

#[derive(Debug, Parser)]
#[command(name = "dbclust", version, about = "DBSCAN clustering of 2D points")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Headerless `id x y` file.
    input: PathBuf,

    /// Number of largest groups to write.
    n: usize,

    /// Neighborhood radius.
    eps: f64,

    /// Minimum neighborhood size, the point itself included. Values below 1
    /// make every point a core point.
    min_pts: i64,

    /// Column separator of the input file.
    #[arg(long, value_enum, default_value_t = Sep::Tab)]
    delimiter: Sep,

    /// Directory for the output files (defaults to the input's directory).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Sep {
    Tab,
    Comma,
    Whitespace,
}

impl From<Sep> for Delimiter {
    fn from(sep: Sep) -> Self {
        match sep {
            Sep::Tab => Delimiter::Tab,
            Sep::Comma => Delimiter::Comma,
            Sep::Whitespace => Delimiter::Whitespace,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// `min_pts` as the engine takes it: anything below 0 counts as 0.
fn clamp_min_pts(min_pts: i64) -> usize {
    usize::try_from(min_pts).unwrap_or_else(|_| {
        log::warn!("min_pts {min_pts} treated as 0");
        0
    })
}

/// Output base for `input`, moved into `output_dir` when one is given.
fn resolve_base(input: &Path, output_dir: Option<&Path>) -> dbclust::Result<PathBuf> {
    let base = io::output_base(input)?;
    match (output_dir, base.file_name()) {
        (Some(dir), Some(name)) => Ok(dir.join(name)),
        _ => Ok(base),
    }
}

fn run(cli: Cli) -> Result<()> {
    let points = io::read_points_from_path(&cli.input, cli.delimiter.into())
        .with_context(|| format!("failed to read points from {}", cli.input.display()))?;

    let labels = Dbscan::new(cli.eps, clamp_min_pts(cli.min_pts)).fit(&points);

    if let Some(dir) = &cli.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let base = resolve_base(&cli.input, cli.output_dir.as_deref())?;

    io::write_top_clusters(&labels, cli.n, &base)
        .with_context(|| format!("failed to write clusters to {}", base.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

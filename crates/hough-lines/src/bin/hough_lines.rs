use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use hough_lines::detect::{self, DetectError};
use hough_lines::{ForegroundPolarity, HoughParams};
use log::{info, LevelFilter};

/// Detect straight lines in an edge image with the Hough transform.
#[derive(Debug, Parser)]
#[command(name = "hough-lines", version, about)]
struct Cli {
    /// Edge image (any format the `image` crate decodes; converted to 8-bit gray).
    input: PathBuf,
    /// JSON file with `HoughParams`; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Angle samples over [0, π).
    #[arg(long)]
    theta_bins: Option<usize>,
    /// Minimal votes for a line.
    #[arg(long)]
    threshold: Option<u32>,
    /// Which pixels are edges.
    #[arg(long, value_enum, conflicts_with = "min_value")]
    polarity: Option<Polarity>,
    /// Treat every pixel with at least this value as an edge.
    #[arg(long)]
    min_value: Option<u8>,
    /// Keep only the K strongest lines in the report.
    #[arg(long)]
    top: Option<usize>,
    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Write the vote visualization (theta across, rho down) as an image.
    #[arg(long)]
    space: Option<PathBuf>,
    /// Default log level; `HOUGH_LINES_LOG` refines it per module.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Polarity {
    White,
    Black,
    Saturated,
}

impl From<Polarity> for ForegroundPolarity {
    fn from(p: Polarity) -> Self {
        match p {
            Polarity::White => ForegroundPolarity::White,
            Polarity::Black => ForegroundPolarity::Black,
            Polarity::Saturated => ForegroundPolarity::Saturated,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("image {path:?}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Detect(#[from] DetectError),
    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
    #[cfg(feature = "tracing")]
    #[error("failed to install tracing subscriber: {0}")]
    Tracing(Box<dyn std::error::Error + Send + Sync>),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hough-lines: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.log_level)?;

    let params = build_params(&cli)?;
    info!("params: {params:?}");

    let edges = image::open(&cli.input)
        .map_err(|source| CliError::Image {
            path: cli.input.clone(),
            source,
        })?
        .to_luma8();

    let space = detect::detect_lines(&edges, params)?;
    info!(
        "{}x{} image: {} foreground pixels, {} lines",
        edges.width(),
        edges.height(),
        space.foreground_pixels,
        space.maxima.len()
    );

    if let Some(path) = &cli.space {
        detect::visualization_image(&space)
            .save(path)
            .map_err(|source| CliError::Image {
                path: path.clone(),
                source,
            })?;
        info!("wrote vote visualization to {}", path.display());
    }

    let report = space.report_top(cli.top.unwrap_or(usize::MAX));
    let json = serde_json::to_string_pretty(&report)?;
    match &cli.json {
        Some(path) => write_file(path, &json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn build_params(cli: &Cli) -> Result<HoughParams, CliError> {
    let mut params = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| CliError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => HoughParams::default(),
    };

    if let Some(n) = cli.theta_bins {
        params.theta_bins = n;
    }
    if let Some(t) = cli.threshold {
        params.vote_threshold = t;
    }
    if let Some(p) = cli.polarity {
        params.foreground = p.into();
    }
    if let Some(v) = cli.min_value {
        params.foreground = ForegroundPolarity::AtLeast(v);
    }
    Ok(params)
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(not(feature = "tracing"))]
fn init_logging(level: LogLevel) -> Result<(), CliError> {
    hough_lines::core::init_with_level(level.into())?;
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_logging(level: LogLevel) -> Result<(), CliError> {
    hough_lines::core::init_tracing(level.into(), false).map_err(CliError::Tracing)
}

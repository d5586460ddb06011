//! Logger setup for the CLI and examples.
//!
//! Library crates only emit `log` records (and `tracing` spans with the
//! `tracing` feature); binaries pick one backend at startup. Both backends
//! write to stderr so stdout stays free for reports.

use std::io::Write;
use std::time::Instant;

use env_logger::{Builder, Env};
use log::LevelFilter;

#[cfg(feature = "tracing")]
use tracing_subscriber::{filter::Directive, fmt::format::FmtSpan, EnvFilter};

/// Environment variable with per-module overrides, in `RUST_LOG` syntax.
pub const LOG_ENV: &str = "HOUGH_LINES_LOG";

/// Install a stderr logger printing `[  0.012s DEBUG target] message`.
///
/// `level` is the default for every module; `HOUGH_LINES_LOG` may refine it
/// per module (`HOUGH_LINES_LOG=hough_lines_transform::vote=trace`).
/// Fails if a logger is already installed.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let started = Instant::now();
    Builder::new()
        .filter_level(level)
        .parse_env(Env::new().filter(LOG_ENV))
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{:7.3}s {:>5} {}] {}",
                started.elapsed().as_secs_f64(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
}

/// Install a `tracing` subscriber with span timings on close.
///
/// Same filtering rules as [`init_with_level`]. `json` switches to one JSON
/// object per event.
#[cfg(feature = "tracing")]
pub fn init_tracing(
    level: LevelFilter,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_directive(level))
        .with_env_var(LOG_ENV)
        .from_env_lossy();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    if json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder
            .with_timer(tracing_subscriber::fmt::time::Uptime::default())
            .try_init()
    }
}

#[cfg(feature = "tracing")]
fn level_directive(level: LevelFilter) -> Directive {
    use tracing_subscriber::filter::LevelFilter as Tracing;
    let level = match level {
        LevelFilter::Off => Tracing::OFF,
        LevelFilter::Error => Tracing::ERROR,
        LevelFilter::Warn => Tracing::WARN,
        LevelFilter::Info => Tracing::INFO,
        LevelFilter::Debug => Tracing::DEBUG,
        LevelFilter::Trace => Tracing::TRACE,
    };
    level.into()
}

//! Parking Fee Comparison Tool
//!
//! Reads parking sessions from stdin, prices each one under the hourly,
//! flat and progressive plans, and reports the cheapest plan per session.

use anyhow::Context;
use parking_core::{
    config::{LoggingConfig, ReportFormat},
    models::ParkingSession,
    AppConfig, ParkingError,
};
use parking_services::FeeComparisonService;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod input;
mod report;

/// Initialize tracing/logging
///
/// Logs go to stderr so they never interleave with the report on stdout.
fn init_tracing(logging: &LoggingConfig) {
    let level = &logging.level;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "parking_fees={},parking_services={},parking_core={}",
            level, level, level
        ))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Prompt for session lines until EOF or a blank line
///
/// Lines that fail to parse are reported and skipped.
fn read_sessions<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
) -> Result<Vec<ParkingSession>, ParkingError> {
    let mut sessions = Vec::new();
    let mut lines = reader.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().is_empty() {
            break;
        }

        match input::parse_session_line(&line) {
            Ok(session) => {
                info!("Accepted session of {}h", session.rounded_hours());
                sessions.push(session);
            }
            Err(e) if e.is_recoverable() => {
                warn!("Rejected input line {:?}: {}", line, e);
                writeln!(out, "{}", input::USAGE_HINT)?;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(sessions)
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config.logging);

    info!(
        "Starting parking fee comparison v{}",
        env!("CARGO_PKG_VERSION")
    );

    let service = FeeComparisonService::new(config.schedule.clone())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Parking Fee Comparison Tool\n")?;
    writeln!(out, "Fee Schedule:")?;
    for line in service.schedule().describe() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Enter parking sessions (format: MM/dd/yyyy HH:mm - MM/dd/yyyy HH:mm) one per line, empty to finish:"
    )?;

    let sessions = read_sessions(stdin.lock(), &mut out)?;
    let reports = service
        .evaluate_batch(&sessions)
        .context("fee schedule cannot price these sessions")?;

    let rendered = match config.report.format {
        ReportFormat::Table => report::render_table(&reports),
        ReportFormat::Json => report::render_json(&reports)?,
    };
    writeln!(out)?;
    write!(out, "{}", rendered)?;
    out.flush()?;

    info!("Processed {} sessions", reports.len());
    Ok(())
}

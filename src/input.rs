//! Parsing of session lines typed at the prompt
//!
//! A line holds an entry and an exit timestamp separated by a dash, e.g.
//! `03/15/2024 08:00 - 03/15/2024 11:30`.

use chrono::NaiveDateTime;
use parking_core::{models::ParkingSession, ParkingError, ParkingResult};

/// Shown to the user when a line cannot be parsed
pub const USAGE_HINT: &str = "Invalid format. Use: MM/dd/yyyy HH:mm - MM/dd/yyyy HH:mm";

const TIMESTAMP_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse one timestamp in any of the accepted formats
pub fn parse_timestamp(raw: &str) -> ParkingResult<NaiveDateTime> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| ParkingError::InvalidInput(format!("unrecognized timestamp: {:?}", raw)))
}

/// Parse an `entry - exit` line into a session
///
/// ISO dates contain dashes themselves, so `" - "` is tried first and a
/// bare `-` is only used when the line has exactly one.
pub fn parse_session_line(line: &str) -> ParkingResult<ParkingSession> {
    let (entry, exit) = line
        .split_once(" - ")
        .or_else(|| match line.matches('-').count() {
            1 => line.split_once('-'),
            _ => None,
        })
        .ok_or_else(|| {
            ParkingError::InvalidInput(format!(
                "missing entry/exit separator: {:?}",
                line.trim()
            ))
        })?;

    ParkingSession::new(parse_timestamp(entry)?, parse_timestamp(exit)?)
}

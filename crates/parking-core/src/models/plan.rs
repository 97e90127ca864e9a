//! Pricing plan identifiers and the best-plan result record

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParkingError;

/// Pricing plan a session can be billed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeePlan {
    Hourly,
    Flat,
    Progressive,
}

impl FeePlan {
    /// Canonical ordering; also the tie-break order for best-plan selection.
    pub const ALL: [FeePlan; 3] = [FeePlan::Hourly, FeePlan::Flat, FeePlan::Progressive];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeePlan::Hourly => "hourly",
            FeePlan::Flat => "flat",
            FeePlan::Progressive => "progressive",
        }
    }
}

impl fmt::Display for FeePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeePlan::Hourly => "Hourly",
            FeePlan::Flat => "Flat",
            FeePlan::Progressive => "Progressive",
        };
        f.pad(name)
    }
}

impl FromStr for FeePlan {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(FeePlan::Hourly),
            "flat" => Ok(FeePlan::Flat),
            "progressive" => Ok(FeePlan::Progressive),
            other => Err(ParkingError::InvalidInput(format!(
                "unknown fee plan: {}",
                other
            ))),
        }
    }
}

/// The cheapest plan for a session and what it costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanQuote {
    pub plan: FeePlan,
    pub amount: Decimal,
}

impl PlanQuote {
    pub fn new(plan: FeePlan, amount: Decimal) -> Self {
        Self { plan, amount }
    }

    /// Pick the minimum-amount quote; on ties the earliest quote wins.
    ///
    /// Returns `None` for an empty input.
    pub fn cheapest<I>(quotes: I) -> Option<PlanQuote>
    where
        I: IntoIterator<Item = PlanQuote>,
    {
        quotes.into_iter().fold(None, |best, quote| match best {
            Some(current) if current.amount <= quote.amount => Some(current),
            _ => Some(quote),
        })
    }
}

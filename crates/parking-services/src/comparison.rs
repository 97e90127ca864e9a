//! Fee comparison service
//!
//! Evaluates parking sessions under every pricing plan and picks the
//! cheapest one.

use parking_core::{
    models::{FeePlan, FeeSchedule, ParkingSession, PlanQuote},
    ParkingResult,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

/// Per-session result of a fee comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// 1-based position of the session in its batch
    pub index: usize,
    pub rounded_hours: u32,
    pub hourly: Decimal,
    pub flat: Decimal,
    pub progressive: Decimal,
    pub best: PlanQuote,
}

impl SessionReport {
    /// Fee for one plan
    pub fn fee(&self, plan: FeePlan) -> Decimal {
        match plan {
            FeePlan::Hourly => self.hourly,
            FeePlan::Flat => self.flat,
            FeePlan::Progressive => self.progressive,
        }
    }
}

/// Fee comparison service
///
/// Holds one schedule shared by every session it evaluates.
#[derive(Debug, Clone)]
pub struct FeeComparisonService {
    schedule: FeeSchedule,
}

impl FeeComparisonService {
    /// Create a new comparison service
    ///
    /// Fails with `Configuration` if the schedule breaks its invariants.
    pub fn new(schedule: FeeSchedule) -> ParkingResult<Self> {
        schedule.validate().map_err(|e| {
            error!("Rejected fee schedule: {}", e);
            e
        })?;
        Ok(Self { schedule })
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Compare all plans for a single session
    #[instrument(skip(self, session), fields(hours = session.rounded_hours()))]
    pub fn evaluate(
        &self,
        index: usize,
        session: &ParkingSession,
    ) -> ParkingResult<SessionReport> {
        let [hourly, flat, progressive] = session.fees(&self.schedule)?;

        for quote in [&hourly, &flat, &progressive] {
            debug!("{} fee: {}", quote.plan, quote.amount);
        }

        let best = PlanQuote::cheapest([hourly, flat, progressive]).unwrap_or(hourly);

        info!(
            "Session {}: best plan {} at {} for {}h",
            index,
            best.plan,
            best.amount,
            session.rounded_hours()
        );

        Ok(SessionReport {
            index,
            rounded_hours: session.rounded_hours(),
            hourly: hourly.amount,
            flat: flat.amount,
            progressive: progressive.amount,
            best,
        })
    }

    /// Compare all plans for every session, preserving input order
    ///
    /// The first error aborts the batch; no partial result is returned.
    #[instrument(skip(self, sessions), fields(count = sessions.len()))]
    pub fn evaluate_batch(
        &self,
        sessions: &[ParkingSession],
    ) -> ParkingResult<Vec<SessionReport>> {
        debug!("Evaluating {} sessions", sessions.len());

        sessions
            .iter()
            .enumerate()
            .map(|(i, session)| self.evaluate(i + 1, session))
            .collect::<ParkingResult<Vec<_>>>()
            .map_err(|e| {
                error!("Batch evaluation aborted: {}", e);
                e
            })
    }
}

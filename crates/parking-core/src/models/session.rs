//! Parking session model
//!
//! One stay in the lot, fixed at construction. Billable hours are the
//! duration rounded up to the next whole hour and are the only time unit
//! the pricing plans look at.

use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{FeePlan, FeeSchedule, PlanQuote};
use crate::error::ParkingError;
use crate::ParkingResult;

const SECONDS_PER_HOUR: i64 = 3600;

/// Parking session entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkingSession {
    entry_time: NaiveDateTime,
    exit_time: NaiveDateTime,
    rounded_hours: u32,
}

impl ParkingSession {
    /// Create a session from entry and exit timestamps
    ///
    /// # Errors
    /// `InvalidInput` when exit is not strictly after entry, or when the
    /// stay is too long to count in hours.
    pub fn new(entry_time: NaiveDateTime, exit_time: NaiveDateTime) -> ParkingResult<Self> {
        if exit_time <= entry_time {
            return Err(ParkingError::InvalidInput(
                "exit must be after entry".to_string(),
            ));
        }

        let rounded_hours = Self::billable_hours(exit_time - entry_time)?;

        Ok(Self {
            entry_time,
            exit_time,
            rounded_hours,
        })
    }

    /// Ceiling of a positive duration in whole hours
    fn billable_hours(duration: TimeDelta) -> ParkingResult<u32> {
        let seconds = duration.num_seconds();
        let partial = seconds % SECONDS_PER_HOUR != 0 || duration.subsec_nanos() > 0;
        let hours = seconds / SECONDS_PER_HOUR + i64::from(partial);

        u32::try_from(hours).map_err(|_| {
            ParkingError::InvalidInput(format!("parking duration of {} hours is too long", hours))
        })
    }

    pub fn entry_time(&self) -> NaiveDateTime {
        self.entry_time
    }

    pub fn exit_time(&self) -> NaiveDateTime {
        self.exit_time
    }

    pub fn duration(&self) -> TimeDelta {
        self.exit_time - self.entry_time
    }

    /// Billable hours (duration rounded up to the next whole hour)
    pub fn rounded_hours(&self) -> u32 {
        self.rounded_hours
    }

    /// Fee for this session under one plan
    ///
    /// # Errors
    /// `Configuration` for a progressive plan against a schedule with no
    /// tiers.
    pub fn calculate_fee(
        &self,
        plan: FeePlan,
        schedule: &FeeSchedule,
    ) -> ParkingResult<Decimal> {
        match plan {
            FeePlan::Hourly => Ok(schedule.hourly_fee(self.rounded_hours)),
            FeePlan::Flat => Ok(schedule.flat_fee(self.rounded_hours)),
            FeePlan::Progressive => schedule.progressive_fee(self.rounded_hours),
        }
    }

    /// Fees under every plan, in canonical order
    pub fn fees(&self, schedule: &FeeSchedule) -> ParkingResult<[PlanQuote; 3]> {
        let [hourly, flat, progressive] = FeePlan::ALL;
        Ok([
            PlanQuote::new(hourly, self.calculate_fee(hourly, schedule)?),
            PlanQuote::new(flat, self.calculate_fee(flat, schedule)?),
            PlanQuote::new(progressive, self.calculate_fee(progressive, schedule)?),
        ])
    }

    /// Cheapest plan for this session; ties go to the earlier plan in
    /// `FeePlan::ALL`.
    pub fn best_plan(&self, schedule: &FeeSchedule) -> ParkingResult<PlanQuote> {
        let quotes = self.fees(schedule)?;
        PlanQuote::cheapest(quotes)
            .ok_or_else(|| ParkingError::Configuration("no fee plans to compare".to_string()))
    }
}

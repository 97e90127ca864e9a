//! Fee schedule model
//!
//! Holds the rates and tier boundaries for all three pricing plans. A
//! schedule is shared read-only by every session evaluated against it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ParkingError;
use crate::ParkingResult;

/// Fee schedule configuration
///
/// Progressive tiers are widths in hours, consumed in declared order. A
/// width of 0 marks the unbounded final tier. Fields missing from a
/// deserialized schedule take their values from `FeeSchedule::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Charged per billable hour under the hourly plan
    pub hourly_rate: Decimal,

    /// Covers up to `flat_rate_hours` billable hours
    pub flat_rate: Decimal,

    /// Hours included in the flat rate
    pub flat_rate_hours: u32,

    /// Charged per hour beyond `flat_rate_hours`
    pub excess_rate: Decimal,

    /// Tier widths in hours (0 = unbounded, last only)
    pub progressive_tiers: Vec<u32>,

    /// One rate per tier, index-aligned with `progressive_tiers`
    pub progressive_rates: Vec<Decimal>,
}

impl FeeSchedule {
    /// Hourly plan: every billable hour at the same rate
    #[inline]
    pub fn hourly_fee(&self, hours: u32) -> Decimal {
        self.hourly_rate * Decimal::from(hours)
    }

    /// Flat plan: base amount up to the threshold, excess rate above it
    #[inline]
    pub fn flat_fee(&self, hours: u32) -> Decimal {
        if hours <= self.flat_rate_hours {
            return self.flat_rate;
        }

        let excess_hours = hours - self.flat_rate_hours;
        self.flat_rate + Decimal::from(excess_hours) * self.excess_rate
    }

    /// Progressive plan
    ///
    /// Hours fill each tier in order. Whatever is left once the declared
    /// tiers are exhausted is charged at the last tier's rate, which is how
    /// a width-0 final tier becomes unbounded.
    ///
    /// # Errors
    /// `Configuration` when no tiers are declared or the tier and rate
    /// sequences differ in length.
    pub fn progressive_fee(&self, hours: u32) -> ParkingResult<Decimal> {
        if self.progressive_tiers.len() != self.progressive_rates.len() {
            return Err(ParkingError::Configuration(format!(
                "progressive schedule has {} tiers but {} rates",
                self.progressive_tiers.len(),
                self.progressive_rates.len()
            )));
        }

        let last_rate = *self.progressive_rates.last().ok_or_else(|| {
            ParkingError::Configuration("progressive schedule declares no tiers".to_string())
        })?;

        let mut total = Decimal::ZERO;
        let mut remaining = hours;

        for (&width, &rate) in self.progressive_tiers.iter().zip(&self.progressive_rates) {
            if remaining == 0 {
                break;
            }
            let in_tier = remaining.min(width);
            total += Decimal::from(in_tier) * rate;
            remaining -= in_tier;
        }

        if remaining > 0 {
            total += Decimal::from(remaining) * last_rate;
        }

        Ok(total)
    }

    /// Validate schedule invariants
    ///
    /// An empty progressive schedule passes; only the progressive
    /// computation rejects it.
    pub fn validate(&self) -> ParkingResult<()> {
        let amounts = [
            ("hourly_rate", self.hourly_rate),
            ("flat_rate", self.flat_rate),
            ("excess_rate", self.excess_rate),
        ];
        for (name, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(ParkingError::Configuration(format!(
                    "{} cannot be negative: {}",
                    name, amount
                )));
            }
        }

        if self.progressive_tiers.len() != self.progressive_rates.len() {
            return Err(ParkingError::Configuration(format!(
                "progressive schedule has {} tiers but {} rates",
                self.progressive_tiers.len(),
                self.progressive_rates.len()
            )));
        }

        if let Some(rate) = self
            .progressive_rates
            .iter()
            .find(|r| **r < Decimal::ZERO)
        {
            return Err(ParkingError::Configuration(format!(
                "progressive rate cannot be negative: {}",
                rate
            )));
        }

        let last = self.progressive_tiers.len().saturating_sub(1);
        if let Some(pos) = self
            .progressive_tiers
            .iter()
            .position(|&width| width == 0)
        {
            if pos != last {
                return Err(ParkingError::Configuration(format!(
                    "unbounded tier (width 0) must be last, found at position {}",
                    pos + 1
                )));
            }
        }

        Ok(())
    }

    /// Human-readable summary of the three plans
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![
            format!("- Hourly Rate: ${}/hr", self.hourly_rate),
            format!(
                "- Flat Rate: ${} for first {} hrs, then ${}/hr",
                self.flat_rate, self.flat_rate_hours, self.excess_rate
            ),
        ];

        if self.progressive_rates.is_empty() {
            lines.push("- Progressive: not configured".to_string());
            return lines;
        }

        let bands: Vec<String> = self
            .progressive_tiers
            .iter()
            .zip(&self.progressive_rates)
            .enumerate()
            .map(|(i, (&width, rate))| match (i, width) {
                (_, 0) => format!("${}/hr thereafter", rate),
                (0, w) => format!("${} for first {} hrs", rate, w),
                (_, w) => format!("${} for next {} hrs", rate, w),
            })
            .collect();
        lines.push(format!("- Progressive: {}", bands.join(", ")));
        lines
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            hourly_rate: dec!(3.50),
            flat_rate: dec!(10.00),
            flat_rate_hours: 4,
            excess_rate: dec!(2.50),
            progressive_tiers: vec![2, 3, 0],
            progressive_rates: vec![dec!(4.00), dec!(3.00), dec!(2.00)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tiered(tiers: Vec<u32>, rates: Vec<Decimal>) -> FeeSchedule {
        FeeSchedule {
            progressive_tiers: tiers,
            progressive_rates: rates,
            ..Default::default()
        }
    }

    #[test]
    fn test_hourly_fee() {
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.hourly_fee(0), dec!(0));
        assert_eq!(schedule.hourly_fee(1), dec!(3.50));
        assert_eq!(schedule.hourly_fee(6), dec!(21.00));
    }

    #[test]
    fn test_flat_fee_within_threshold() {
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.flat_fee(1), dec!(10.00));
        assert_eq!(schedule.flat_fee(4), dec!(10.00));
    }

    #[test]
    fn test_flat_fee_with_excess() {
        let schedule = FeeSchedule::default();
        // 10.00 + 2 * 2.50
        assert_eq!(schedule.flat_fee(6), dec!(15.00));
    }

    #[test]
    fn test_flat_fee_zero_threshold() {
        let schedule = FeeSchedule {
            flat_rate_hours: 0,
            ..Default::default()
        };
        assert_eq!(schedule.flat_fee(0), dec!(10.00));
        assert_eq!(schedule.flat_fee(3), dec!(17.50));
    }

    #[test]
    fn test_progressive_fee_default_tiers() {
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.progressive_fee(1).unwrap(), dec!(4.00));
        assert_eq!(schedule.progressive_fee(2).unwrap(), dec!(8.00));
        assert_eq!(schedule.progressive_fee(5).unwrap(), dec!(17.00));
        assert_eq!(schedule.progressive_fee(6).unwrap(), dec!(19.00));
        assert_eq!(schedule.progressive_fee(7).unwrap(), dec!(21.00));
    }

    #[test]
    fn test_progressive_overflow_without_unbounded_tier() {
        // Hours beyond the last bounded tier still bill at its rate
        let schedule = tiered(vec![2, 3], vec![dec!(4.00), dec!(3.00)]);
        assert_eq!(schedule.progressive_fee(5).unwrap(), dec!(17.00));
        assert_eq!(schedule.progressive_fee(8).unwrap(), dec!(26.00));
    }

    #[test]
    fn test_progressive_single_unbounded_tier() {
        let schedule = tiered(vec![0], vec![dec!(1.25)]);
        assert_eq!(schedule.progressive_fee(4).unwrap(), dec!(5.00));
    }

    #[test]
    fn test_progressive_zero_hours() {
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.progressive_fee(0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_progressive_empty_schedule_fails() {
        let schedule = tiered(vec![], vec![]);
        let err = schedule.progressive_fee(3).unwrap_err();
        assert!(matches!(err, ParkingError::Configuration(_)));
    }

    #[test]
    fn test_progressive_length_mismatch_fails() {
        let schedule = tiered(vec![2, 0], vec![dec!(4.00)]);
        let err = schedule.progressive_fee(3).unwrap_err();
        assert!(matches!(err, ParkingError::Configuration(_)));
    }

    #[test]
    fn test_validate_default_schedule() {
        assert!(FeeSchedule::default().validate().is_ok());
    }

    #[test]
    fn test_validate_allows_empty_tiers() {
        assert!(tiered(vec![], vec![]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_mismatch() {
        let schedule = tiered(vec![2, 3, 0], vec![dec!(4.00), dec!(3.00)]);
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unbounded_tier_not_last() {
        let schedule = tiered(vec![2, 0, 3], vec![dec!(4.00), dec!(3.00), dec!(2.00)]);
        let err = schedule.validate().unwrap_err();
        assert_eq!(err.error_code(), "configuration_error");
    }

    #[test]
    fn test_validate_rejects_negative_rates() {
        let schedule = FeeSchedule {
            excess_rate: dec!(-1.00),
            ..Default::default()
        };
        assert!(schedule.validate().is_err());

        let schedule = tiered(vec![2, 0], vec![dec!(4.00), dec!(-2.00)]);
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_describe_default() {
        let lines = FeeSchedule::default().describe();
        assert_eq!(lines[0], "- Hourly Rate: $3.50/hr");
        assert_eq!(
            lines[1],
            "- Flat Rate: $10.00 for first 4 hrs, then $2.50/hr"
        );
        assert_eq!(
            lines[2],
            "- Progressive: $4.00 for first 2 hrs, $3.00 for next 3 hrs, $2.00/hr thereafter"
        );
    }

    proptest! {
        #[test]
        fn prop_hourly_fee_is_linear(h in 0u32..10_000) {
            let schedule = FeeSchedule::default();
            prop_assert_eq!(schedule.hourly_fee(h), Decimal::from(h) * dec!(3.50));
        }

        #[test]
        fn prop_flat_fee_shape(h in 0u32..10_000) {
            let schedule = FeeSchedule::default();
            let fee = schedule.flat_fee(h);
            if h <= schedule.flat_rate_hours {
                prop_assert_eq!(fee, schedule.flat_rate);
            } else {
                prop_assert_eq!(fee - schedule.flat_fee(h - 1), schedule.excess_rate);
            }
        }

        #[test]
        fn prop_progressive_fee_is_non_decreasing(h in 0u32..10_000) {
            let schedule = FeeSchedule::default();
            let here = schedule.progressive_fee(h).unwrap();
            let next = schedule.progressive_fee(h + 1).unwrap();
            prop_assert!(next >= here);
        }
    }
}

//! Domain models for parking fee comparison
//!
//! This module contains the session, schedule, and plan types shared by the
//! services and the CLI.

pub mod plan;
pub mod schedule;
pub mod session;

pub use plan::{FeePlan, PlanQuote};
pub use schedule::FeeSchedule;
pub use session::ParkingSession;

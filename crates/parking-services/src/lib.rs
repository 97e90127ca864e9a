//! Business logic services for parking fee comparison
//!
//! This crate orchestrates fee evaluation over batches of sessions.
//!
//! # Architecture
//!
//! - `FeeComparisonService` owns a validated, read-only `FeeSchedule`
//! - Every session is evaluated independently; a batch is a plain map
//!   over its input with no shared mutable state
//! - Intermediate fee values are traced, never printed
//!
//! # Services
//!
//! - `FeeComparisonService` - Per-session plan comparison and best-plan selection

pub mod comparison;

pub use comparison::{FeeComparisonService, SessionReport};

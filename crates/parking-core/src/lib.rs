//! Parking Fees Core Library
//!
//! This crate provides the foundational types, fee algorithms, and error
//! handling for the parking fee comparison system. It includes:
//!
//! - Domain models (ParkingSession, FeeSchedule, FeePlan)
//! - The hourly, flat, and progressive pricing algorithms
//! - Unified error handling
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;

pub use config::AppConfig;
pub use error::ParkingError;

/// Result type alias using ParkingError
pub type ParkingResult<T> = Result<T, ParkingError>;

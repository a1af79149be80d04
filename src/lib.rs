// ABOUTME: Main library entry point for the stride workout summary engine
// ABOUTME: Exposes workout models, calculators, formatters, logging, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![deny(unsafe_code)]

//! # Stride
//!
//! A workout summary engine that turns raw fitness-tracker sensor readings
//! into per-workout statistics: distance covered, mean speed, and calories
//! burned. Three workout kinds are supported - running, sports walking, and
//! swimming - each with its own calorie formula and, for swimming, its own
//! speed model based on pool geometry.
//!
//! ## Architecture
//!
//! - **Models**: workout kinds, sensor packets, and the summary value object
//! - **Intelligence**: the `Workout` calculation trait, the three concrete
//!   calculators, and the code-to-calculator factory
//! - **Formatters**: text and JSON rendering of summaries
//! - **Errors**: unified `AppError` taxonomy with `AppResult`
//!
//! ## Example
//!
//! ```rust
//! use stride::intelligence::{read_packet, Workout};
//!
//! # fn main() -> stride::errors::AppResult<()> {
//! let workout = read_packet("RUN", &[15_000.0, 1.0, 75.0])?;
//! let summary = workout.summary();
//! assert!((summary.distance_km - 9.75).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

/// Formula coefficients and unit conversions organized by workout kind
pub mod constants;

/// Unified error handling with `AppError` and the `AppResult` alias
pub mod errors;

/// Output format selection (text, JSON) and summary rendering
pub mod formatters;

/// Workout calculators and the sensor-packet factory
pub mod intelligence;

/// Structured logging setup built on tracing
pub mod logging;

/// Core data models (`WorkoutKind`, `SensorPacket`, `WorkoutSummary`)
pub mod models;

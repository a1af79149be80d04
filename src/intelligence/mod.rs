// ABOUTME: Workout calculation trait and the sensor-packet factory
// ABOUTME: Dispatches tracker codes to the matching calculator and binds readings positionally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Workout calculators.
//!
//! The [`Workout`] trait is the calculation contract: distance and mean
//! speed have shared default formulas, calories are kind-specific and
//! required. Swimming overrides both the stride length and the speed model
//! (pool geometry instead of step count).
//!
//! [`read_packet`] is the factory: it maps a tracker code to the matching
//! calculator and binds the packet's readings to its constructor
//! positionally.

/// Running calculator
pub mod running;

/// Pool swimming calculator
pub mod swimming;

/// Sports-walking calculator
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use tracing::debug;

use crate::constants::{stride_length, units};
use crate::errors::{AppError, AppResult};
use crate::models::{SensorPacket, WorkoutKind, WorkoutSummary};

/// Calculation contract shared by all workout kinds
///
/// Implementations are immutable after construction; every method is a pure
/// function of the constructor arguments.
pub trait Workout: std::fmt::Debug {
    /// The kind this calculator belongs to
    fn kind(&self) -> WorkoutKind;

    /// Recorded action count (steps or strokes)
    fn action(&self) -> f64;

    /// Workout duration in hours
    fn duration_h(&self) -> f64;

    /// Athlete weight in kilograms
    fn weight_kg(&self) -> f64;

    /// Meters advanced per recorded action
    fn stride_length_m(&self) -> f64 {
        stride_length::STEP_M
    }

    /// Distance covered in kilometers
    fn distance_km(&self) -> f64 {
        self.action() * self.stride_length_m() / units::M_IN_KM
    }

    /// Mean speed in km/h
    ///
    /// Duration is assumed positive; a zero duration yields the IEEE
    /// division result rather than an error.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    /// Energy spent in kilocalories, per the kind's own model
    fn calories_kcal(&self) -> f64;

    /// Assemble the summary value object for this workout
    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            workout: self.kind().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

/// Build the matching calculator for a tracker code and its raw readings
///
/// Readings are bound positionally to the selected kind's constructor.
///
/// # Errors
///
/// Returns [`AppError::UnknownWorkoutCode`] for codes outside
/// `RUN`/`WLK`/`SWM` and [`AppError::MalformedReadings`] when the reading
/// count does not match the kind's arity.
pub fn read_packet(code: &str, readings: &[f64]) -> AppResult<Box<dyn Workout>> {
    let kind: WorkoutKind = code.parse()?;
    let workout: Box<dyn Workout> = match kind {
        WorkoutKind::Running => match readings {
            &[action, duration_h, weight_kg] => {
                Box::new(Running::new(action, duration_h, weight_kg))
            }
            _ => return Err(malformed(kind, readings.len())),
        },
        WorkoutKind::SportsWalking => match readings {
            &[action, duration_h, weight_kg, height_cm] => {
                Box::new(SportsWalking::new(action, duration_h, weight_kg, height_cm))
            }
            _ => return Err(malformed(kind, readings.len())),
        },
        WorkoutKind::Swimming => match readings {
            &[action, duration_h, weight_kg, pool_length_m, pool_lengths] => Box::new(
                Swimming::new(action, duration_h, weight_kg, pool_length_m, pool_lengths),
            ),
            _ => return Err(malformed(kind, readings.len())),
        },
    };
    debug!(code, kind = %workout.kind(), "decoded sensor packet");
    Ok(workout)
}

/// [`read_packet`] over an owned [`SensorPacket`]
///
/// # Errors
///
/// Same conditions as [`read_packet`].
pub fn read_sensor_packet(packet: &SensorPacket) -> AppResult<Box<dyn Workout>> {
    read_packet(&packet.code, &packet.readings)
}

fn malformed(kind: WorkoutKind, got: usize) -> AppError {
    AppError::MalformedReadings {
        kind,
        expected: kind.expected_readings(),
        got,
    }
}

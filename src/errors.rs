// ABOUTME: Unified error handling for the stride workout engine
// ABOUTME: Defines the AppError taxonomy and the AppResult alias used across modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Unified error handling.
//!
//! Every fallible path in the crate surfaces one of the `AppError` variants
//! below. Errors are raised synchronously and propagated with `?`; there is
//! no retry or recovery layer in this system.

use crate::models::WorkoutKind;
use thiserror::Error;

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy
#[derive(Debug, Error)]
pub enum AppError {
    /// Sensor packet carried a workout code outside the recognized set
    /// (`SWM`, `RUN`, `WLK`)
    #[error("unknown workout code: {code:?}")]
    UnknownWorkoutCode {
        /// The unrecognized code as received from the sensor
        code: String,
    },

    /// Sensor packet reading count does not match the workout kind's
    /// constructor arity
    #[error("{kind} packet expects {expected} readings, got {got}")]
    MalformedReadings {
        /// Workout kind the packet was addressed to
        kind: WorkoutKind,
        /// Reading count the kind's constructor requires
        expected: usize,
        /// Reading count actually received
        got: usize,
    },

    /// Summary serialization failed
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_input() {
        let err = AppError::UnknownWorkoutCode {
            code: "XYZ".into(),
        };
        assert_eq!(err.to_string(), "unknown workout code: \"XYZ\"");

        let err = AppError::MalformedReadings {
            kind: WorkoutKind::Running,
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "Running packet expects 3 readings, got 2");
    }
}

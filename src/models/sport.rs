// ABOUTME: Workout kind enumeration and raw sensor packet model
// ABOUTME: Maps short tracker codes to kinds with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Enumeration of supported workout kinds
///
/// Each kind corresponds to one short code emitted by the tracker firmware
/// and to one calculator in [`crate::intelligence`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Running workout
    Running,
    /// Sports (race) walking workout
    SportsWalking,
    /// Pool swimming workout
    Swimming,
}

impl WorkoutKind {
    /// The tracker wire code for this kind
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Number of readings this kind's calculator is constructed from
    ///
    /// Running packets carry `[steps, duration_h, weight_kg]`; walking adds
    /// `height_cm`; swimming adds `pool_length_m` and `pool_lengths`.
    #[must_use]
    pub const fn expected_readings(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        };
        write!(f, "{name}")
    }
}

impl FromStr for WorkoutKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            "SWM" => Ok(Self::Swimming),
            other => Err(AppError::UnknownWorkoutCode {
                code: other.to_owned(),
            }),
        }
    }
}

/// One raw packet as received from the tracker
///
/// The readings are positional; their meaning depends on the workout code
/// (see [`WorkoutKind::expected_readings`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorPacket {
    /// Short workout code (`RUN`, `WLK`, `SWM`)
    pub code: String,
    /// Ordered numeric readings
    pub readings: Vec<f64>,
}

impl SensorPacket {
    /// Create a packet from a code and its readings
    #[must_use]
    pub fn new(code: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            readings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_parsing() {
        for kind in [
            WorkoutKind::Running,
            WorkoutKind::SportsWalking,
            WorkoutKind::Swimming,
        ] {
            assert_eq!(kind.code().parse::<WorkoutKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("run".parse::<WorkoutKind>().is_err());
        assert!("Swm".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn display_names_match_summary_labels() {
        assert_eq!(WorkoutKind::SportsWalking.to_string(), "SportsWalking");
        assert_eq!(WorkoutKind::Swimming.to_string(), "Swimming");
    }
}

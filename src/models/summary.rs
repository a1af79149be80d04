// ABOUTME: Computed workout summary value object
// ABOUTME: Immutable result of one calculation, serializable for JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use serde::{Deserialize, Serialize};

/// Summary of one completed workout
///
/// Produced once per calculation by [`crate::intelligence::Workout::summary`]
/// and never mutated afterwards. Rendering lives in [`crate::formatters`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSummary {
    /// Human-readable workout name (`Running`, `SportsWalking`, `Swimming`)
    pub workout: String,
    /// Workout duration in hours
    pub duration_h: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Energy spent in kilocalories
    pub calories_kcal: f64,
}

// ABOUTME: Pool swimming workout calculator
// ABOUTME: Overrides stride length and the speed model to use pool geometry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use crate::constants::{stride_length, swimming, units};
use crate::intelligence::Workout;
use crate::models::WorkoutKind;

/// Pool swimming workout calculator
///
/// Distance still derives from the action count (strokes, at stroke
/// length), but mean speed is computed from pool geometry: length of the
/// pool times the number of lengths swum, never from the stroke count.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    action: f64,
    duration_h: f64,
    weight_kg: f64,
    pool_length_m: f64,
    pool_lengths: f64,
}

impl Swimming {
    /// Create a calculator from stroke count, duration (hours), weight (kg),
    /// pool length (m), and the number of pool lengths swum
    #[must_use]
    pub const fn new(
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths: f64,
    ) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            pool_length_m,
            pool_lengths,
        }
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn stride_length_m(&self) -> f64 {
        stride_length::STROKE_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lengths / units::M_IN_KM / self.duration_h
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + swimming::SPEED_SHIFT)
            * swimming::WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_h
    }
}

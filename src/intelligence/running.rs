// ABOUTME: Running workout calculator
// ABOUTME: Speed-proportional calorie model over the shared step-distance formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use crate::constants::{running, units};
use crate::intelligence::Workout;
use crate::models::WorkoutKind;

/// Running workout calculator
///
/// Uses the shared step-length distance and speed formulas; calories grow
/// linearly with mean speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    action: f64,
    duration_h: f64,
    weight_kg: f64,
}

impl Running {
    /// Create a calculator from step count, duration (hours), and weight (kg)
    #[must_use]
    pub const fn new(action: f64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

impl Workout for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
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

    fn calories_kcal(&self) -> f64 {
        (running::SPEED_MULTIPLIER * self.mean_speed_kmh() + running::SPEED_SHIFT)
            * self.weight_kg
            / units::M_IN_KM
            * (self.duration_h * units::MIN_IN_H)
    }
}

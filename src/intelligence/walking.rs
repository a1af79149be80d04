// ABOUTME: Sports-walking workout calculator
// ABOUTME: Calorie model combining body weight with squared walking speed over height
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use crate::constants::{units, walking};
use crate::intelligence::Workout;
use crate::models::WorkoutKind;

/// Sports-walking workout calculator
///
/// Distance and speed come from the shared step formulas; the calorie model
/// additionally needs the athlete's height, since the dominant term is
/// squared speed (in m/s) over height (in m).
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    action: f64,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a calculator from step count, duration (hours), weight (kg),
    /// and height (cm)
    #[must_use]
    pub const fn new(action: f64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        }
    }
}

impl Workout for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
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
        let speed_ms = self.mean_speed_kmh() * units::KMH_IN_MS;
        let height_m = self.height_cm / units::CM_IN_M;
        (walking::WEIGHT_MULTIPLIER * self.weight_kg
            + speed_ms.powi(2) / height_m * walking::SPEED_HEIGHT_MULTIPLIER * self.weight_kg)
            * (self.duration_h * units::MIN_IN_H)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_and_speed_use_the_shared_step_formulas() {
        let walk = SportsWalking::new(9_000.0, 1.0, 75.0, 180.0);
        assert!((walk.distance_km() - 5.85).abs() < 1e-9);
        assert!((walk.mean_speed_kmh() - 5.85).abs() < 1e-9);
    }

    #[test]
    fn calories_match_the_weight_and_speed_height_model() {
        let walk = SportsWalking::new(9_000.0, 1.0, 75.0, 180.0);
        // (0.035 * 75 + (5.85 * 0.278)^2 / 1.8 * 0.029 * 75) * 60
        assert!((walk.calories_kcal() - 349.251_747_525).abs() < 1e-6);
    }

    #[test]
    fn taller_athlete_burns_fewer_calories_at_equal_speed() {
        let short = SportsWalking::new(9_000.0, 1.0, 75.0, 160.0);
        let tall = SportsWalking::new(9_000.0, 1.0, 75.0, 190.0);
        assert!(tall.calories_kcal() < short.calories_kcal());
    }
}

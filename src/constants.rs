// ABOUTME: Formula coefficients and unit conversions for workout calculations
// ABOUTME: Constants are grouped per domain so each calculator pulls only its own module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Workout formula constants.
//!
//! All coefficients are fixed at compile time. The per-kind calorie
//! coefficients come from the tracker vendor's published energy models and
//! are not configurable.

/// Unit conversions shared by all workout kinds
pub mod units {
    /// Meters per kilometer
    pub const M_IN_KM: f64 = 1000.0;

    /// Minutes per hour
    pub const MIN_IN_H: f64 = 60.0;

    /// km/h to m/s conversion factor
    pub const KMH_IN_MS: f64 = 0.278;

    /// Centimeters per meter
    pub const CM_IN_M: f64 = 100.0;
}

/// Distance covered per recorded sensor action
pub mod stride_length {
    /// Meters advanced per step (running, walking)
    pub const STEP_M: f64 = 0.65;

    /// Meters advanced per stroke (swimming)
    pub const STROKE_M: f64 = 1.38;
}

/// Running calorie model coefficients
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Additive speed shift
    pub const SPEED_SHIFT: f64 = 1.79;
}

/// Sports-walking calorie model coefficients
pub mod walking {
    /// Multiplier applied to body weight (kg)
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier applied to the squared-speed-over-height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie model coefficients
pub mod swimming {
    /// Additive shift applied to mean speed (km/h)
    pub const SPEED_SHIFT: f64 = 1.1;

    /// Multiplier applied to body weight (kg)
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

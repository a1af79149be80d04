// ABOUTME: Core data models for the stride workout engine
// ABOUTME: Re-exports workout kinds, sensor packets, and summary value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Core data models.

/// Workout kind enumeration and raw sensor packets
pub mod sport;

/// Computed workout summary value object
pub mod summary;

pub use sport::{SensorPacket, WorkoutKind};
pub use summary::WorkoutSummary;

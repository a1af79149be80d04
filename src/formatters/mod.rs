// ABOUTME: Output format abstraction for rendering workout summaries
// ABOUTME: Supports a fixed text template (default) and JSON serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Summary rendering.
//!
//! Purely presentational: a [`WorkoutSummary`] in, one string out. The text
//! template is fixed, every numeric field rendered to three decimals; the
//! JSON path serializes the summary struct as-is.

use crate::errors::AppResult;
use crate::models::WorkoutSummary;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-template text line (default)
    #[default]
    Text,
    /// JSON object, one summary per line
    Json,
}

impl OutputFormat {
    /// Parse format from a string parameter (case-insensitive)
    ///
    /// Unrecognized values fall back to `Text`.
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Render a summary in the requested format
///
/// # Errors
///
/// Returns [`crate::errors::AppError::Serialization`] if JSON encoding
/// fails.
pub fn format_summary(summary: &WorkoutSummary, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(format_text(summary)),
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
    }
}

/// Render the fixed text template
#[must_use]
pub fn format_text(summary: &WorkoutSummary) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
         Mean speed: {:.3} km/h; Calories burned: {:.3}.",
        summary.workout,
        summary.duration_h,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories_kcal
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WorkoutSummary {
        WorkoutSummary {
            workout: "Running".into(),
            duration_h: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories_kcal: 797.805,
        }
    }

    #[test]
    fn text_template_renders_three_decimals() {
        assert_eq!(
            format_text(&sample()),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 797.805."
        );
    }

    #[test]
    fn unknown_format_param_falls_back_to_text() {
        assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
    }

    #[test]
    fn json_round_trips_the_summary() {
        let rendered = format_summary(&sample(), OutputFormat::Json).unwrap();
        let parsed: WorkoutSummary = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, sample());
    }
}

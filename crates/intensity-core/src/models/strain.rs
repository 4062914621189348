// ABOUTME: Strain assessment result types for readiness displays
// ABOUTME: Traffic-light zones, overall status, and suggested training intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Traffic light for a single metric, ordered from safest to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLight {
    /// Normal
    Green,
    /// Elevated
    Yellow,
    /// Critical
    Orange,
    /// Stop
    Red,
}

/// Overall strain status, ordered from safest to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrainStatus {
    /// Ready to train as planned
    Ready,
    /// Train with extended rest
    Moderate,
    /// Train lightly
    Compromised,
    /// Stop training
    HighRisk,
}

impl StrainStatus {
    /// Status implied by the most severe traffic light
    #[must_use]
    pub const fn from_light(light: TrafficLight) -> Self {
        match light {
            TrafficLight::Green => Self::Ready,
            TrafficLight::Yellow => Self::Moderate,
            TrafficLight::Orange => Self::Compromised,
            TrafficLight::Red => Self::HighRisk,
        }
    }

    /// Suggested intensity for the status
    #[must_use]
    pub const fn suggested_intensity(&self) -> TrainingIntensity {
        match self {
            Self::Ready => TrainingIntensity::High,
            Self::Moderate => TrainingIntensity::Moderate,
            Self::Compromised => TrainingIntensity::Light,
            Self::HighRisk => TrainingIntensity::Rest,
        }
    }
}

/// Training intensity suggested for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingIntensity {
    /// Full intensity
    High,
    /// Reduced intensity
    Moderate,
    /// Light work only
    Light,
    /// No training
    Rest,
}

/// Snapshot-level strain assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrainAssessment {
    /// Worse of the heart rate and `SpO2` zones
    pub status: StrainStatus,
    /// Heart rate zone relative to max heart rate
    pub heart_rate_zone: TrafficLight,
    /// Blood oxygen zone; `None` without a valid reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spo2_zone: Option<TrafficLight>,
    /// Suggested intensity derived from the status
    pub intensity: TrainingIntensity,
    /// Heart rate as a percentage of the maximum heart rate
    pub heart_rate_percent_of_max: f64,
}

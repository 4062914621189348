// ABOUTME: User calibration data needed for heart-rate-relative decisions
// ABOUTME: Max heart rate, calibration flag, age, and optional gender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Subset of the user profile the engine reads
///
/// Owned and persisted by the account collaborator; the engine never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Maximum heart rate in bpm, measured or user-entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_heart_rate: Option<u32>,
    /// Whether `max_heart_rate` comes from a completed calibration
    #[serde(default)]
    pub calibration_complete: bool,
    /// Age in years, used for estimation when no calibrated value exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender ("male" or "female") for gender-specific estimation formulas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl UserProfile {
    /// Profile with a calibrated maximum heart rate
    #[must_use]
    pub const fn calibrated(max_heart_rate: u32) -> Self {
        Self {
            max_heart_rate: Some(max_heart_rate),
            calibration_complete: true,
            age: None,
            gender: None,
        }
    }

    /// Profile that only knows the user's age
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        Self {
            max_heart_rate: None,
            calibration_complete: false,
            age: Some(age),
            gender: None,
        }
    }
}

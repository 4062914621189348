// ABOUTME: Point-in-time wearable reading consumed by the intensity engine
// ABOUTME: Heart rate, optional blood oxygen saturation, and optional strain score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable biometric reading captured on a polling tick
///
/// Produced by the wearable collaborator and discarded after evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricSnapshot {
    /// Heart rate in beats per minute
    pub heart_rate: u32,
    /// Blood oxygen saturation in percent (0-100); `None` when no pulse oximetry is available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spo2: Option<f64>,
    /// Cardiovascular strain on the 0-21 wearable scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strain: Option<f64>,
    /// When the reading was taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
}

impl BiometricSnapshot {
    /// Create a heart-rate-only snapshot
    #[must_use]
    pub const fn new(heart_rate: u32) -> Self {
        Self {
            heart_rate,
            spo2: None,
            strain: None,
            captured_at: None,
        }
    }

    /// Attach a blood oxygen reading
    #[must_use]
    pub fn with_spo2(mut self, spo2: f64) -> Self {
        self.spo2 = Some(spo2);
        self
    }

    /// Attach a strain score
    #[must_use]
    pub fn with_strain(mut self, strain: f64) -> Self {
        self.strain = Some(strain);
        self
    }

    /// Attach the capture timestamp
    #[must_use]
    pub fn captured_at(mut self, at: DateTime<Utc>) -> Self {
        self.captured_at = Some(at);
        self
    }
}

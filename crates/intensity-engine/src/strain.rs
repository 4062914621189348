// ABOUTME: Traffic-light strain assessment for readiness displays
// ABOUTME: Maps heart rate share of max and SpO2 onto the same cutoffs the rules use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::EngineConfig;
use intensity_core::constants::spo2;
use intensity_core::models::{BiometricSnapshot, StrainAssessment, StrainStatus, TrafficLight};

/// Heart rate zone for a percentage of max heart rate
#[must_use]
pub fn heart_rate_light(percent_of_max: f64, config: &EngineConfig) -> TrafficLight {
    let thresholds = &config.heart_rate;
    if percent_of_max >= thresholds.stop_percent {
        TrafficLight::Red
    } else if percent_of_max >= thresholds.critical_percent {
        TrafficLight::Orange
    } else if percent_of_max >= thresholds.elevated_percent {
        TrafficLight::Yellow
    } else {
        TrafficLight::Green
    }
}

/// `SpO2` zone, or `None` for a missing or invalid reading
#[must_use]
pub fn spo2_light(reading: Option<f64>, config: &EngineConfig) -> Option<TrafficLight> {
    let value = reading
        .filter(|value| value.is_finite() && (spo2::MIN_VALID..=spo2::MAX_VALID).contains(value))?;
    let light = if value < config.spo2.stop_below {
        TrafficLight::Red
    } else if value <= config.spo2.critical_upper {
        TrafficLight::Orange
    } else {
        TrafficLight::Green
    };
    Some(light)
}

/// Assess a snapshot against a known max heart rate
///
/// A strain score at or above the high-strain threshold raises a green heart
/// rate zone to yellow, mirroring the rest extension it triggers.
#[must_use]
pub fn assess(
    snapshot: &BiometricSnapshot,
    max_heart_rate: f64,
    config: &EngineConfig,
) -> StrainAssessment {
    let percent = if max_heart_rate > 0.0 {
        f64::from(snapshot.heart_rate) / max_heart_rate * 100.0
    } else {
        0.0
    };

    let mut heart_rate_zone = heart_rate_light(percent, config);
    let high_strain = snapshot
        .strain
        .is_some_and(|strain| strain.is_finite() && strain >= config.high_strain_threshold);
    if high_strain {
        heart_rate_zone = heart_rate_zone.max(TrafficLight::Yellow);
    }

    let spo2_zone = spo2_light(snapshot.spo2, config);
    let worst = spo2_zone.map_or(heart_rate_zone, |zone| zone.max(heart_rate_zone));
    let status = StrainStatus::from_light(worst);

    StrainAssessment {
        status,
        heart_rate_zone,
        spo2_zone,
        intensity: status.suggested_intensity(),
        heart_rate_percent_of_max: percent,
    }
}

// ABOUTME: Input validation and clamping ahead of rule evaluation
// ABOUTME: Resolves the max heart rate basis and discards out-of-domain optional readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation
//!
//! Missing or out-of-domain optional readings never fail an evaluation. They
//! are dropped here, logged, and the rules that depend on them simply cannot
//! fire. The only hard failure is the absence of any max heart rate basis.

use crate::config::EngineConfig;
use intensity_core::constants::{heart_rate, spo2, strain};
use intensity_core::errors::{EngineError, EngineResult};
use intensity_core::intelligence::algorithms::MaxHrAlgorithm;
use intensity_core::models::{
    EvaluationContext, ExercisePreferenceState, SessionSummary, UserProfile,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where the maximum heart rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source", content = "algorithm")]
pub enum MaxHrSource {
    /// Measured during a completed calibration
    Calibrated,
    /// Estimated from age with the given formula
    Estimated(MaxHrAlgorithm),
    /// Supplied by the user without calibration
    Uncalibrated,
}

/// Maximum heart rate used for every heart-rate-relative rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateBasis {
    /// Maximum heart rate in bpm
    pub max_heart_rate: f64,
    /// Provenance of the value
    pub source: MaxHrSource,
}

impl HeartRateBasis {
    /// Whether the value is anything other than a calibrated measurement
    #[must_use]
    pub const fn is_estimate(&self) -> bool {
        !matches!(self.source, MaxHrSource::Calibrated)
    }

    /// Express a heart rate as a percentage of the maximum
    #[must_use]
    pub fn percent_of_max(&self, heart_rate: u32) -> f64 {
        f64::from(heart_rate) / self.max_heart_rate * 100.0
    }
}

/// Resolve the maximum heart rate for a profile
///
/// Preference order: calibrated value, age estimate, uncalibrated value.
///
/// # Errors
///
/// Returns `EngineError::Configuration` when neither a usable max heart rate
/// nor a usable age is available
pub fn resolve_max_heart_rate(
    profile: &UserProfile,
    algorithm: MaxHrAlgorithm,
) -> EngineResult<HeartRateBasis> {
    let supplied = profile.max_heart_rate.filter(|bpm| {
        let plausible = *bpm > 0 && *bpm <= heart_rate::MAX_REALISTIC_HEART_RATE;
        if !plausible {
            warn!(max_heart_rate = *bpm, "Discarding implausible max heart rate");
        }
        plausible
    });

    if profile.calibration_complete {
        if let Some(bpm) = supplied {
            return Ok(HeartRateBasis {
                max_heart_rate: f64::from(bpm),
                source: MaxHrSource::Calibrated,
            });
        }
    }

    if let Some(age) = profile.age {
        match algorithm.estimate(age, profile.gender.as_deref()) {
            Ok(bpm) => {
                return Ok(HeartRateBasis {
                    max_heart_rate: bpm,
                    source: MaxHrSource::Estimated(algorithm),
                });
            }
            Err(e) => warn!(age, error = %e, "Cannot estimate max heart rate from age"),
        }
    }

    supplied
        .map(|bpm| HeartRateBasis {
            max_heart_rate: f64::from(bpm),
            source: MaxHrSource::Uncalibrated,
        })
        .ok_or_else(|| {
            EngineError::configuration(
                "no maximum heart rate or usable age supplied; heart-rate-relative decisions need one",
            )
        })
}

/// Validated view of an evaluation context handed to every rule
#[derive(Debug, Clone)]
pub struct RuleInputs<'a> {
    /// Current heart rate in bpm
    pub heart_rate: u32,
    /// Heart rate as percentage of max
    pub heart_rate_percent: f64,
    /// Max heart rate basis
    pub basis: HeartRateBasis,
    /// Valid `SpO2` reading, if any
    pub spo2: Option<f64>,
    /// Valid strain reading, if any
    pub strain: Option<f64>,
    /// Rest the caller reported, limited to the configured ceiling
    pub reported_rest_seconds: Option<u32>,
    /// Rest used for increments (reported rest or the configured baseline)
    pub current_rest_seconds: u32,
    /// Exercise being performed
    pub exercise: &'a str,
    /// Working weight; zero means bodyweight
    pub current_weight: f64,
    /// Target reps per set
    pub current_reps: u32,
    /// Prior sessions, most recent first
    pub sessions: &'a [SessionSummary],
    /// User preferences
    pub preferences: &'a ExercisePreferenceState,
}

impl RuleInputs<'_> {
    /// Whether load cannot be adjusted for this exercise
    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.current_weight <= 0.0
    }
}

/// Validate a context and resolve its max heart rate
///
/// # Errors
///
/// Returns `EngineError::Configuration` when no max heart rate basis exists
pub fn sanitize<'a>(
    context: &'a EvaluationContext,
    config: &EngineConfig,
) -> EngineResult<RuleInputs<'a>> {
    let basis = resolve_max_heart_rate(&context.profile, config.maxhr_algorithm)?;
    let snapshot = &context.snapshot;

    let spo2 = snapshot.spo2.filter(|value| {
        let valid = value.is_finite() && (spo2::MIN_VALID..=spo2::MAX_VALID).contains(value);
        if !valid {
            warn!(spo2 = *value, "Ignoring out-of-range SpO2 reading");
        }
        valid
    });

    let strain = snapshot.strain.filter(|value| {
        let valid = value.is_finite() && (strain::MIN_VALID..=strain::MAX_VALID).contains(value);
        if !valid {
            warn!(strain = *value, "Ignoring out-of-range strain reading");
        }
        valid
    });

    let current_weight = if context.current_weight.is_finite() && context.current_weight >= 0.0 {
        context.current_weight
    } else {
        warn!(
            weight = context.current_weight,
            exercise = %context.current_exercise,
            "Treating invalid weight as bodyweight"
        );
        0.0
    };

    let rest_ceiling = config.rest.ceiling_seconds();
    let reported_rest_seconds = context
        .current_rest_seconds
        .map(|seconds| seconds.min(rest_ceiling));

    Ok(RuleInputs {
        heart_rate: snapshot.heart_rate,
        heart_rate_percent: basis.percent_of_max(snapshot.heart_rate),
        basis,
        spo2,
        strain,
        reported_rest_seconds,
        current_rest_seconds: reported_rest_seconds
            .unwrap_or_else(|| config.rest.baseline_seconds.min(rest_ceiling)),
        exercise: &context.current_exercise,
        current_weight,
        current_reps: context.current_reps,
        sessions: &context.recent_sessions,
        preferences: &context.preferences,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;
    use intensity_core::models::BiometricSnapshot;

    #[test]
    fn test_calibrated_value_wins_over_age() {
        let profile = UserProfile {
            max_heart_rate: Some(190),
            calibration_complete: true,
            age: Some(40),
            gender: None,
        };
        let basis = resolve_max_heart_rate(&profile, MaxHrAlgorithm::Fox).unwrap();
        assert_eq!(basis.max_heart_rate, 190.0);
        assert!(!basis.is_estimate());
    }

    #[test]
    fn test_uncalibrated_value_yields_to_age_estimate() {
        let profile = UserProfile {
            max_heart_rate: Some(200),
            calibration_complete: false,
            age: Some(40),
            gender: None,
        };
        let basis = resolve_max_heart_rate(&profile, MaxHrAlgorithm::Fox).unwrap();
        assert_eq!(basis.max_heart_rate, 180.0);
        assert_eq!(basis.source, MaxHrSource::Estimated(MaxHrAlgorithm::Fox));
    }

    #[test]
    fn test_uncalibrated_value_used_without_age() {
        let profile = UserProfile {
            max_heart_rate: Some(185),
            ..UserProfile::default()
        };
        let basis = resolve_max_heart_rate(&profile, MaxHrAlgorithm::Fox).unwrap();
        assert_eq!(basis.max_heart_rate, 185.0);
        assert!(basis.is_estimate());
    }

    #[test]
    fn test_missing_max_hr_and_age_is_configuration_error() {
        let result = resolve_max_heart_rate(&UserProfile::default(), MaxHrAlgorithm::Fox);
        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }

    #[test]
    fn test_invalid_age_counts_as_absent() {
        let result = resolve_max_heart_rate(&UserProfile::from_age(0), MaxHrAlgorithm::Fox);
        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }

    #[test]
    fn test_out_of_range_readings_are_dropped() {
        let snapshot = BiometricSnapshot::new(120).with_spo2(140.0).with_strain(f64::NAN);
        let context =
            EvaluationContext::new(snapshot, UserProfile::calibrated(180), "squat", -5.0, 8)
                .with_rest(240);

        let inputs = sanitize(&context, &EngineConfig::default()).unwrap();
        assert!(inputs.spo2.is_none());
        assert!(inputs.strain.is_none());
        assert!(inputs.is_bodyweight());
        assert_eq!(inputs.current_rest_seconds, 90);
    }
}

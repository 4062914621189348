// ABOUTME: Integration tests for traffic-light strain assessment
// ABOUTME: Validates zone boundaries, status derivation, and profile-based max heart rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

mod common;

use adaptive_intensity::models::{
    BiometricSnapshot, StrainStatus, TrafficLight, TrainingIntensity, UserProfile,
};
use adaptive_intensity::{AdaptiveIntensityEngine, EngineError};
use common::init_test_logging;

fn engine() -> AdaptiveIntensityEngine {
    init_test_logging();
    AdaptiveIntensityEngine::default()
}

#[test]
fn test_heart_rate_zone_boundaries() {
    let engine = engine();
    let cases = [
        (100, TrafficLight::Green, StrainStatus::Ready),
        (170, TrafficLight::Yellow, StrainStatus::Moderate),
        (188, TrafficLight::Orange, StrainStatus::Compromised),
        (200, TrafficLight::Red, StrainStatus::HighRisk),
    ];

    for (heart_rate, zone, status) in cases {
        let assessment = engine.assess_strain(&BiometricSnapshot::new(heart_rate), 200.0);
        assert_eq!(assessment.heart_rate_zone, zone, "hr {heart_rate}");
        assert_eq!(assessment.status, status, "hr {heart_rate}");
        assert_eq!(assessment.spo2_zone, None);
    }
}

#[test]
fn test_status_is_worse_of_both_zones() {
    let engine = engine();
    let snapshot = BiometricSnapshot::new(170).with_spo2(95.0);

    let assessment = engine.assess_strain(&snapshot, 200.0);
    assert_eq!(assessment.heart_rate_zone, TrafficLight::Yellow);
    assert_eq!(assessment.spo2_zone, Some(TrafficLight::Orange));
    assert_eq!(assessment.status, StrainStatus::Compromised);
    assert_eq!(assessment.intensity, TrainingIntensity::Light);
    assert_eq!(assessment.heart_rate_percent_of_max, 85.0);
}

#[test]
fn test_ready_status_suggests_high_intensity() {
    let assessment = engine().assess_strain(&BiometricSnapshot::new(90).with_spo2(99.0), 180.0);
    assert_eq!(assessment.status, StrainStatus::Ready);
    assert_eq!(assessment.intensity, TrainingIntensity::High);
}

#[test]
fn test_profile_based_assessment_estimates_max() {
    let engine = engine();
    let assessment = engine
        .assess_strain_for_profile(&BiometricSnapshot::new(171), &UserProfile::from_age(30))
        .unwrap();
    assert_eq!(assessment.heart_rate_percent_of_max, 90.0);
    assert_eq!(assessment.heart_rate_zone, TrafficLight::Yellow);

    let error = engine
        .assess_strain_for_profile(&BiometricSnapshot::new(171), &UserProfile::default())
        .unwrap_err();
    assert!(matches!(error, EngineError::Configuration(_)));
}

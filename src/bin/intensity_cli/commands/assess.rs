// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Assess command for intensity-cli
// ABOUTME: Builds a snapshot from flags and prints the traffic-light strain assessment

use crate::helpers::io::print_json;
use adaptive_intensity::models::{BiometricSnapshot, UserProfile};
use adaptive_intensity::AdaptiveIntensityEngine;
use anyhow::Result;
use serde_json::json;

/// Flags collected for one assessment
#[derive(Debug, Clone, Copy)]
pub struct Reading {
    pub heart_rate: u32,
    pub spo2: Option<f64>,
    pub strain: Option<f64>,
    pub max_heart_rate: Option<u32>,
    pub age: Option<u32>,
}

pub fn run(engine: &AdaptiveIntensityEngine, reading: Reading) -> Result<()> {
    let mut snapshot = BiometricSnapshot::new(reading.heart_rate);
    snapshot.spo2 = reading.spo2;
    snapshot.strain = reading.strain;

    let profile = UserProfile {
        max_heart_rate: reading.max_heart_rate,
        calibration_complete: reading.max_heart_rate.is_some(),
        age: reading.age,
        gender: None,
    };

    let assessment = engine.assess_strain_for_profile(&snapshot, &profile)?;
    print_json(&json!({
        "snapshot": snapshot,
        "assessment": assessment,
    }))
}

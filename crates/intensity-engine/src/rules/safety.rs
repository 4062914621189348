// ABOUTME: Safety rules that stop the workout or extend rest from live biometrics
// ABOUTME: Heart rate relative to max, SpO2 bands, and high strain scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::AdjustmentRule;
use crate::config::EngineConfig;
use crate::validation::RuleInputs;
use intensity_core::models::{AdjustmentDecision, AdjustmentKind};

/// Ends the workout on dangerous `SpO2` or heart rate at or above max
pub struct SafetyStopRule;

impl AdjustmentRule for SafetyStopRule {
    fn name(&self) -> &'static str {
        "safety_stop"
    }

    fn evaluate(
        &self,
        inputs: &RuleInputs<'_>,
        config: &EngineConfig,
    ) -> Option<AdjustmentDecision> {
        let reason = match inputs.spo2 {
            Some(spo2) if spo2 < config.spo2.stop_below => format!(
                "SpO2 {spo2:.0}% is below the {:.0}% safety limit; stop the workout",
                config.spo2.stop_below
            ),
            _ if inputs.heart_rate_percent >= config.heart_rate.stop_percent => format!(
                "Heart rate {} bpm is {:.0}% of max ({:.0} bpm); stop the workout",
                inputs.heart_rate, inputs.heart_rate_percent, inputs.basis.max_heart_rate
            ),
            _ => return None,
        };

        Some(AdjustmentDecision::new(
            AdjustmentKind::StopWorkout,
            0.0,
            reason,
            true,
            self.name(),
        ))
    }
}

/// Forces maximum rest near max heart rate or with borderline `SpO2`
pub struct CriticalStrainRule;

impl AdjustmentRule for CriticalStrainRule {
    fn name(&self) -> &'static str {
        "critical_strain"
    }

    fn evaluate(
        &self,
        inputs: &RuleInputs<'_>,
        config: &EngineConfig,
    ) -> Option<AdjustmentDecision> {
        let max_rest = config.rest.ceiling_seconds();
        let reason = if inputs.heart_rate_percent >= config.heart_rate.critical_percent {
            format!(
                "Heart rate at {:.0}% of max; resting the full {max_rest} s",
                inputs.heart_rate_percent
            )
        } else {
            let spo2 = inputs.spo2.filter(|spo2| {
                (config.spo2.stop_below..=config.spo2.critical_upper).contains(spo2)
            })?;
            format!("SpO2 {spo2:.0}% is borderline; resting the full {max_rest} s")
        };

        Some(AdjustmentDecision::new(
            AdjustmentKind::IncreaseRest,
            f64::from(max_rest),
            reason,
            true,
            self.name(),
        ))
    }
}

/// Extends rest for elevated heart rate or a high strain score
pub struct ElevatedStrainRule;

impl AdjustmentRule for ElevatedStrainRule {
    fn name(&self) -> &'static str {
        "elevated_strain"
    }

    fn evaluate(
        &self,
        inputs: &RuleInputs<'_>,
        config: &EngineConfig,
    ) -> Option<AdjustmentDecision> {
        let cause = if inputs.heart_rate_percent >= config.heart_rate.elevated_percent {
            format!("Heart rate at {:.0}% of max", inputs.heart_rate_percent)
        } else {
            let strain = inputs
                .strain
                .filter(|strain| *strain >= config.high_strain_threshold)?;
            format!("Strain score {strain:.1} is high")
        };

        let ceiling = config.rest.ceiling_seconds();
        let raw = inputs
            .current_rest_seconds
            .saturating_add(config.rest.increment_seconds());
        let new_rest = raw.min(ceiling);

        Some(AdjustmentDecision::new(
            AdjustmentKind::IncreaseRest,
            f64::from(new_rest),
            format!(
                "{cause}; extending rest from {} s to {new_rest} s",
                inputs.current_rest_seconds
            ),
            raw >= ceiling,
            self.name(),
        ))
    }
}

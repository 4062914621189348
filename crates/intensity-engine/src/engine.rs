// ABOUTME: Adaptive intensity engine entry point combining validation, rules, and preferences
// ABOUTME: Produces exactly one bounded decision per evaluation with stop always taking priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptive Intensity Engine
//!
//! The engine holds only immutable configuration and is `Send + Sync`.
//! Preference state belongs to the caller and is passed by mutable reference
//! to the operations that change it.

use crate::config::EngineConfig;
use crate::preferences;
use crate::rules::{default_rules, AdjustmentRule, SafetyStopRule};
use crate::strain;
use crate::validation::{resolve_max_heart_rate, sanitize, RuleInputs};
use intensity_core::errors::EngineResult;
use intensity_core::models::{
    AdjustmentDecision, AdjustmentKind, BiometricSnapshot, BlacklistPrompt, EvaluationContext,
    ExercisePreferenceState, StrainAssessment, UserProfile,
};
use rayon::prelude::*;
use std::iter;
use tracing::{debug, warn};

/// Rule-based engine mapping biometrics and history to one adjustment
pub struct AdaptiveIntensityEngine {
    config: EngineConfig,
    rules: Vec<Box<dyn AdjustmentRule>>,
}

impl Default for AdaptiveIntensityEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl AdaptiveIntensityEngine {
    /// Engine with the standard rule pipeline
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rules(config, default_rules())
    }

    /// Engine with a custom pipeline
    ///
    /// The safety stop always runs before `rules` and cannot be replaced.
    /// A config that fails validation is still accepted, but rest decisions
    /// stay within the hard 90 s ceiling and +30 s increment regardless.
    #[must_use]
    pub fn with_rules(config: EngineConfig, rules: Vec<Box<dyn AdjustmentRule>>) -> Self {
        if let Err(e) = config.validate() {
            warn!(error = %e, "Engine configuration failed validation; hard rest limits still apply");
        }
        Self { config, rules }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Names of the rules after the safety stop, in priority order
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Evaluate one context and return exactly one decision
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` when the profile has neither a max
    /// heart rate nor a usable age
    pub fn evaluate(&self, context: &EvaluationContext) -> EngineResult<AdjustmentDecision> {
        let inputs = sanitize(context, &self.config)?;

        let decision = iter::once(&SafetyStopRule as &dyn AdjustmentRule)
            .chain(self.rules.iter().map(Box::as_ref))
            .find_map(|rule| rule.evaluate(&inputs, &self.config))
            .unwrap_or_else(|| no_signal(&inputs));

        let decision = self
            .enforce_bounds(decision, &inputs)
            .with_max_heart_rate(inputs.basis.max_heart_rate, inputs.basis.is_estimate());

        debug!(
            exercise = inputs.exercise,
            heart_rate = inputs.heart_rate,
            heart_rate_percent = inputs.heart_rate_percent,
            rule = %decision.rule,
            kind = %decision.kind,
            value = decision.value,
            clamped = decision.clamped,
            "Intensity decision"
        );
        Ok(decision)
    }

    /// Evaluate many contexts in parallel, preserving input order
    #[must_use]
    pub fn evaluate_many(
        &self,
        contexts: &[EvaluationContext],
    ) -> Vec<EngineResult<AdjustmentDecision>> {
        contexts.par_iter().map(|context| self.evaluate(context)).collect()
    }

    /// Record an exercise substitution
    ///
    /// Returns a blacklist prompt once the same pair has been swapped
    /// `swap_prompt_threshold` times, and on every swap after that.
    #[must_use]
    pub fn track_exercise_swap(
        &self,
        state: &mut ExercisePreferenceState,
        user_id: &str,
        from_exercise: &str,
        to_exercise: &str,
    ) -> Option<BlacklistPrompt> {
        preferences::track_swap(
            state,
            &self.config.preferences,
            user_id,
            from_exercise,
            to_exercise,
        )
    }

    /// Blacklist the prompted exercise and reset its swap counters
    pub fn accept_blacklist_prompt(
        &self,
        state: &mut ExercisePreferenceState,
        prompt: &BlacklistPrompt,
    ) {
        preferences::accept_prompt(state, prompt);
    }

    /// Reset the swap counter for one pair
    pub fn reset_swap_count(
        &self,
        state: &mut ExercisePreferenceState,
        from_exercise: &str,
        to_exercise: &str,
    ) {
        state.clear_swap(from_exercise, to_exercise);
    }

    /// Reset every swap counter
    pub fn reset_all_swap_counts(&self, state: &mut ExercisePreferenceState) {
        state.clear_all_swaps();
    }

    /// Update the success rate for an exercise and return the new rate
    pub fn record_exercise_outcome(
        &self,
        state: &mut ExercisePreferenceState,
        exercise_id: &str,
        success: bool,
    ) -> f64 {
        preferences::record_outcome(state, &self.config.preferences, exercise_id, success)
    }

    /// Traffic-light assessment of a snapshot against a known max heart rate
    #[must_use]
    pub fn assess_strain(
        &self,
        snapshot: &BiometricSnapshot,
        max_heart_rate: f64,
    ) -> StrainAssessment {
        strain::assess(snapshot, max_heart_rate, &self.config)
    }

    /// Traffic-light assessment resolving max heart rate from a profile
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Configuration` when no max heart rate basis exists
    pub fn assess_strain_for_profile(
        &self,
        snapshot: &BiometricSnapshot,
        profile: &UserProfile,
    ) -> EngineResult<StrainAssessment> {
        let basis = resolve_max_heart_rate(profile, self.config.maxhr_algorithm)?;
        Ok(self.assess_strain(snapshot, basis.max_heart_rate))
    }

    /// Hold every decision to the rest ceiling and load caps
    fn enforce_bounds(
        &self,
        mut decision: AdjustmentDecision,
        inputs: &RuleInputs<'_>,
    ) -> AdjustmentDecision {
        let ceiling = if decision.kind.is_rest() {
            Some(f64::from(self.config.rest.ceiling_seconds()))
        } else {
            match decision.kind {
                AdjustmentKind::IncreaseLoad => Some(
                    inputs.current_weight * self.config.load.max_increase_percent / 100.0,
                ),
                AdjustmentKind::DecreaseLoad => Some(
                    inputs.current_weight * self.config.load.max_decrease_percent / 100.0,
                ),
                _ => None,
            }
        };

        let Some(ceiling) = ceiling else {
            return decision;
        };

        let bounded = if decision.value.is_finite() {
            decision.value.clamp(0.0, ceiling)
        } else {
            0.0
        };
        if (bounded - decision.value).abs() > f64::EPSILON || !decision.value.is_finite() {
            warn!(
                rule = %decision.rule,
                kind = %decision.kind,
                value = decision.value,
                bounded,
                "Decision value outside safety bounds"
            );
            decision.value = bounded;
            decision.clamped = true;
        }
        decision
    }
}

fn no_signal(inputs: &RuleInputs<'_>) -> AdjustmentDecision {
    AdjustmentDecision::new(
        AdjustmentKind::NoChange,
        0.0,
        format!(
            "Heart rate at {:.0}% of max with no progression signal for {}",
            inputs.heart_rate_percent, inputs.exercise
        ),
        false,
        "no_signal",
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    struct RunawayRestRule;

    impl AdjustmentRule for RunawayRestRule {
        fn name(&self) -> &'static str {
            "runaway_rest"
        }

        fn evaluate(
            &self,
            _inputs: &RuleInputs<'_>,
            _config: &EngineConfig,
        ) -> Option<AdjustmentDecision> {
            Some(AdjustmentDecision::new(
                AdjustmentKind::IncreaseRest,
                600.0,
                "too long",
                false,
                self.name(),
            ))
        }
    }

    fn context(heart_rate: u32) -> EvaluationContext {
        EvaluationContext::new(
            BiometricSnapshot::new(heart_rate),
            UserProfile::calibrated(180),
            "row",
            50.0,
            10,
        )
    }

    #[test]
    fn test_custom_rule_values_are_bounded() {
        let engine =
            AdaptiveIntensityEngine::with_rules(EngineConfig::default(), vec![Box::new(RunawayRestRule)]);
        let decision = engine.evaluate(&context(100)).unwrap();
        assert_eq!(decision.value, 90.0);
        assert!(decision.clamped);
    }

    #[test]
    fn test_unvalidated_rest_policy_cannot_exceed_hard_limits() {
        let mut config = EngineConfig::default();
        config.rest.max_seconds = 300;
        config.rest.max_increment_seconds = 120;
        config.rest.baseline_seconds = 200;
        assert!(config.validate().is_err());
        let engine = AdaptiveIntensityEngine::new(config.clone());

        let elevated = engine.evaluate(&context(160).with_rest(60)).unwrap();
        assert_eq!(elevated.kind, AdjustmentKind::IncreaseRest);
        assert_eq!(elevated.value, 90.0);
        assert!(elevated.clamped);

        let short_rest = engine.evaluate(&context(160).with_rest(30)).unwrap();
        assert_eq!(short_rest.value, 60.0);
        assert!(!short_rest.clamped);

        let baseline = engine.evaluate(&context(160)).unwrap();
        assert_eq!(baseline.value, 90.0);

        let critical = engine.evaluate(&context(172)).unwrap();
        assert_eq!(critical.value, 90.0);

        let custom = AdaptiveIntensityEngine::with_rules(config, vec![Box::new(RunawayRestRule)]);
        let decision = custom.evaluate(&context(100)).unwrap();
        assert_eq!(decision.value, 90.0);
        assert!(decision.clamped);
    }

    #[test]
    fn test_custom_rules_cannot_preempt_safety_stop() {
        let engine =
            AdaptiveIntensityEngine::with_rules(EngineConfig::default(), vec![Box::new(RunawayRestRule)]);
        let decision = engine.evaluate(&context(185)).unwrap();
        assert_eq!(decision.kind, AdjustmentKind::StopWorkout);
        assert_eq!(decision.rule, "safety_stop");
    }

    #[test]
    fn test_no_signal_without_history() {
        let engine = AdaptiveIntensityEngine::default();
        let decision = engine.evaluate(&context(130)).unwrap();
        assert_eq!(decision.kind, AdjustmentKind::NoChange);
        assert!(!decision.clamped);
        assert_eq!(decision.max_heart_rate, 180.0);
        assert!(!decision.max_heart_rate_estimated);
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AdaptiveIntensityEngine>();
    }
}

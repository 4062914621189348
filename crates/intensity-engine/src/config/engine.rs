// ABOUTME: Adaptive intensity engine configuration with thresholds, bounds, and policies
// ABOUTME: Defaults come from intensity-core constants; INTENSITY_* env vars override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! Every threshold the rule engine applies lives here. Source material states
//! the cutoffs inconsistently, so none of them is hard-coded in the rules.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export INTENSITY_HR_ELEVATED_PERCENT=83
//!    export INTENSITY_MAXHR_ALGORITHM=tanaka
//!    ```
//!
//! 2. Default values (if env vars not set)

use super::error::ConfigError;
use intensity_core::constants::{heart_rate, load, preferences, progression, rest, spo2, strain};
use intensity_core::intelligence::algorithms::MaxHrAlgorithm;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Heart rate cutoffs as percentage of max heart rate
    pub heart_rate: HeartRateThresholds,
    /// Blood oxygen cutoffs
    pub spo2: Spo2Thresholds,
    /// Strain score at or above which rest is extended
    #[serde(default = "default_high_strain")]
    pub high_strain_threshold: f64,
    /// Rest interval bounds
    pub rest: RestPolicy,
    /// Load and rep adjustment bounds
    pub load: LoadPolicy,
    /// History requirements for load changes
    pub progression: ProgressionPolicy,
    /// Preference learning parameters
    pub preferences: PreferencePolicy,
    /// Estimation formula used when no calibrated max heart rate exists
    #[serde(default)]
    pub maxhr_algorithm: MaxHrAlgorithm,
}

const fn default_high_strain() -> f64 {
    strain::HIGH_STRAIN_THRESHOLD
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            heart_rate: HeartRateThresholds::default(),
            spo2: Spo2Thresholds::default(),
            high_strain_threshold: default_high_strain(),
            rest: RestPolicy::default(),
            load: LoadPolicy::default(),
            progression: ProgressionPolicy::default(),
            preferences: PreferencePolicy::default(),
            maxhr_algorithm: MaxHrAlgorithm::default(),
        }
    }
}

/// Heart rate cutoffs, each a percentage of max heart rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateThresholds {
    /// Stop the workout at or above this
    pub stop_percent: f64,
    /// Force maximum rest at or above this
    pub critical_percent: f64,
    /// Extend rest at or above this
    pub elevated_percent: f64,
    /// Shorten rest below this
    pub recovered_percent: f64,
}

impl Default for HeartRateThresholds {
    fn default() -> Self {
        Self {
            stop_percent: heart_rate::STOP_PERCENT,
            critical_percent: heart_rate::CRITICAL_PERCENT,
            elevated_percent: heart_rate::ELEVATED_PERCENT,
            recovered_percent: heart_rate::RECOVERED_PERCENT,
        }
    }
}

/// Blood oxygen cutoffs in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spo2Thresholds {
    /// Stop the workout below this
    pub stop_below: f64,
    /// Readings from `stop_below` up to and including this force maximum rest
    pub critical_upper: f64,
}

impl Default for Spo2Thresholds {
    fn default() -> Self {
        Self {
            stop_below: spo2::STOP_BELOW,
            critical_upper: spo2::CRITICAL_UPPER,
        }
    }
}

/// Rest interval bounds in seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestPolicy {
    /// Rest assumed when the caller does not report one
    pub baseline_seconds: u32,
    /// Ceiling for any rest decision
    pub max_seconds: u32,
    /// Floor for rest reductions
    pub min_seconds: u32,
    /// Largest increase per evaluation
    pub max_increment_seconds: u32,
    /// Step for rest reductions
    pub decrement_seconds: u32,
}

impl Default for RestPolicy {
    fn default() -> Self {
        Self {
            baseline_seconds: rest::DEFAULT_BASELINE_SECONDS,
            max_seconds: rest::MAX_SECONDS,
            min_seconds: rest::MIN_SECONDS,
            max_increment_seconds: rest::MAX_INCREMENT_SECONDS,
            decrement_seconds: rest::DECREMENT_SECONDS,
        }
    }
}

impl RestPolicy {
    /// Rest ceiling actually applied, never above the hard 90 s limit
    #[must_use]
    pub fn ceiling_seconds(&self) -> u32 {
        self.max_seconds.min(rest::MAX_SECONDS)
    }

    /// Rest increase actually applied per evaluation, never above +30 s
    #[must_use]
    pub fn increment_seconds(&self) -> u32 {
        self.max_increment_seconds.min(rest::MAX_INCREMENT_SECONDS)
    }
}

/// Load and rep adjustment bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadPolicy {
    /// Progression step, percent of current weight
    pub increment_percent: f64,
    /// Progression cap, percent of current weight
    pub max_increase_percent: f64,
    /// Regression step, percent of current weight
    pub decrement_percent: f64,
    /// Regression cap, percent of current weight
    pub max_decrease_percent: f64,
    /// Reps never drop below this share of the current target
    pub min_rep_fraction: f64,
    /// Reps added or removed per decision
    pub rep_step: u32,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            increment_percent: load::INCREMENT_PERCENT,
            max_increase_percent: load::MAX_INCREASE_PERCENT,
            decrement_percent: load::DECREMENT_PERCENT,
            max_decrease_percent: load::MAX_DECREASE_PERCENT,
            min_rep_fraction: load::MIN_REP_FRACTION,
            rep_step: load::REP_STEP,
        }
    }
}

/// History requirements for progression and regression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPolicy {
    /// Recent sessions containing the exercise that are inspected
    pub history_window: usize,
    /// Sessions in the window that must agree
    pub required_sessions: usize,
    /// Progression is suppressed below this success rate
    pub min_success_rate: f64,
}

impl Default for ProgressionPolicy {
    fn default() -> Self {
        Self {
            history_window: progression::HISTORY_WINDOW,
            required_sessions: progression::REQUIRED_SESSIONS,
            min_success_rate: progression::MIN_SUCCESS_RATE,
        }
    }
}

/// Preference learning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencePolicy {
    /// Swaps of one pair before a blacklist prompt
    pub swap_prompt_threshold: u32,
    /// EMA weight for success rate updates
    pub learning_rate: f64,
    /// Starting success rate for unseen exercises
    pub initial_success_rate: f64,
}

impl Default for PreferencePolicy {
    fn default() -> Self {
        Self {
            swap_prompt_threshold: preferences::SWAP_PROMPT_THRESHOLD,
            learning_rate: preferences::SUCCESS_RATE_LEARNING_RATE,
            initial_success_rate: preferences::INITIAL_SUCCESS_RATE,
        }
    }
}

impl EngineConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when thresholds are out of order or a bound exceeds
    /// the hard safety limits (90s rest ceiling, +30s increment)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hr = &self.heart_rate;
        if !(hr.stop_percent > 0.0 && hr.stop_percent <= 150.0) {
            return Err(ConfigError::ValueOutOfRange(
                "heart_rate.stop_percent must be in (0, 150]",
            ));
        }
        if !(0.0 < hr.recovered_percent
            && hr.recovered_percent < hr.elevated_percent
            && hr.elevated_percent < hr.critical_percent
            && hr.critical_percent <= hr.stop_percent)
        {
            return Err(ConfigError::InvalidRange(
                "heart rate thresholds must satisfy 0 < recovered < elevated < critical <= stop",
            ));
        }

        let ox = &self.spo2;
        if !(spo2::MIN_VALID <= ox.stop_below
            && ox.stop_below <= ox.critical_upper
            && ox.critical_upper <= spo2::MAX_VALID)
        {
            return Err(ConfigError::InvalidRange(
                "spo2 thresholds must satisfy 0 <= stop_below <= critical_upper <= 100",
            ));
        }

        if !(strain::MIN_VALID..=strain::MAX_VALID).contains(&self.high_strain_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "high_strain_threshold must be within the 0-21 strain scale",
            ));
        }

        let rest_policy = &self.rest;
        if rest_policy.max_seconds > rest::MAX_SECONDS {
            return Err(ConfigError::ValueOutOfRange(
                "rest.max_seconds cannot exceed 90",
            ));
        }
        if rest_policy.max_increment_seconds == 0
            || rest_policy.max_increment_seconds > rest::MAX_INCREMENT_SECONDS
        {
            return Err(ConfigError::ValueOutOfRange(
                "rest.max_increment_seconds must be in 1..=30",
            ));
        }
        if !(rest_policy.min_seconds <= rest_policy.baseline_seconds
            && rest_policy.baseline_seconds <= rest_policy.max_seconds)
        {
            return Err(ConfigError::InvalidRange(
                "rest bounds must satisfy min <= baseline <= max",
            ));
        }
        if rest_policy.decrement_seconds == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "rest.decrement_seconds must be positive",
            ));
        }

        let load_policy = &self.load;
        if !(load_policy.max_increase_percent > 0.0 && load_policy.max_increase_percent <= 100.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "load.max_increase_percent must be in (0, 100]",
            ));
        }
        if !(load_policy.max_decrease_percent > 0.0 && load_policy.max_decrease_percent <= 100.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "load.max_decrease_percent must be in (0, 100]",
            ));
        }
        if !(load_policy.increment_percent > 0.0 && load_policy.increment_percent <= 100.0) {
            return Err(ConfigError::ValueOutOfRange(
                "load.increment_percent must be in (0, 100]",
            ));
        }
        if !(load_policy.decrement_percent > 0.0 && load_policy.decrement_percent <= 100.0) {
            return Err(ConfigError::ValueOutOfRange(
                "load.decrement_percent must be in (0, 100]",
            ));
        }
        if !(load_policy.min_rep_fraction > 0.0 && load_policy.min_rep_fraction <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "load.min_rep_fraction must be in (0, 1]",
            ));
        }
        if load_policy.rep_step == 0 {
            return Err(ConfigError::ValueOutOfRange("load.rep_step must be positive"));
        }

        let prog = &self.progression;
        if prog.history_window == 0
            || prog.required_sessions == 0
            || prog.required_sessions > prog.history_window
        {
            return Err(ConfigError::InvalidRange(
                "progression must satisfy 1 <= required_sessions <= history_window",
            ));
        }
        if !(0.0..=1.0).contains(&prog.min_success_rate) {
            return Err(ConfigError::ValueOutOfRange(
                "progression.min_success_rate must be in [0, 1]",
            ));
        }

        let prefs = &self.preferences;
        if prefs.swap_prompt_threshold == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "preferences.swap_prompt_threshold must be positive",
            ));
        }
        if !(prefs.learning_rate > 0.0 && prefs.learning_rate <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "preferences.learning_rate must be in (0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&prefs.initial_success_rate) {
            return Err(ConfigError::ValueOutOfRange(
                "preferences.initial_success_rate must be in [0, 1]",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        override_from_env(
            "INTENSITY_HR_STOP_PERCENT",
            &mut self.heart_rate.stop_percent,
        )?;
        override_from_env(
            "INTENSITY_HR_CRITICAL_PERCENT",
            &mut self.heart_rate.critical_percent,
        )?;
        override_from_env(
            "INTENSITY_HR_ELEVATED_PERCENT",
            &mut self.heart_rate.elevated_percent,
        )?;
        override_from_env(
            "INTENSITY_HR_RECOVERED_PERCENT",
            &mut self.heart_rate.recovered_percent,
        )?;

        override_from_env("INTENSITY_SPO2_STOP_BELOW", &mut self.spo2.stop_below)?;
        override_from_env(
            "INTENSITY_SPO2_CRITICAL_UPPER",
            &mut self.spo2.critical_upper,
        )?;
        override_from_env(
            "INTENSITY_HIGH_STRAIN_THRESHOLD",
            &mut self.high_strain_threshold,
        )?;

        override_from_env(
            "INTENSITY_BASELINE_REST_SECONDS",
            &mut self.rest.baseline_seconds,
        )?;
        override_from_env("INTENSITY_MAX_REST_SECONDS", &mut self.rest.max_seconds)?;
        override_from_env("INTENSITY_MIN_REST_SECONDS", &mut self.rest.min_seconds)?;
        override_from_env(
            "INTENSITY_MAX_REST_INCREMENT_SECONDS",
            &mut self.rest.max_increment_seconds,
        )?;

        override_from_env(
            "INTENSITY_LOAD_INCREMENT_PERCENT",
            &mut self.load.increment_percent,
        )?;
        override_from_env(
            "INTENSITY_MAX_LOAD_INCREASE_PERCENT",
            &mut self.load.max_increase_percent,
        )?;
        override_from_env(
            "INTENSITY_LOAD_DECREMENT_PERCENT",
            &mut self.load.decrement_percent,
        )?;
        override_from_env(
            "INTENSITY_MAX_LOAD_DECREASE_PERCENT",
            &mut self.load.max_decrease_percent,
        )?;

        override_from_env(
            "INTENSITY_MIN_SUCCESS_RATE",
            &mut self.progression.min_success_rate,
        )?;
        override_from_env(
            "INTENSITY_SWAP_PROMPT_THRESHOLD",
            &mut self.preferences.swap_prompt_threshold,
        )?;

        if let Ok(val) = env::var("INTENSITY_MAXHR_ALGORITHM") {
            self.maxhr_algorithm = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid INTENSITY_MAXHR_ALGORITHM".into()))?;
        }

        Ok(self)
    }
}

/// Replace `target` with the parsed value of `name` when the variable is set
fn override_from_env<T: FromStr>(name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_order_heart_rate_thresholds_rejected() {
        let mut config = EngineConfig::default();
        config.heart_rate.elevated_percent = 95.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_rest_ceiling_cannot_exceed_hard_limit() {
        let mut config = EngineConfig::default();
        config.rest.max_seconds = 120;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_rest_increment_cannot_exceed_thirty_seconds() {
        let mut config = EngineConfig::default();
        config.rest.max_increment_seconds = 45;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_required_sessions_cannot_exceed_window() {
        let mut config = EngineConfig::default();
        config.progression.required_sessions = 4;
        assert!(config.validate().is_err());
    }
}

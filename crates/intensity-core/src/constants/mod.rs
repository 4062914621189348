// ABOUTME: Physiological thresholds and safety bounds organized by domain
// ABOUTME: Default values for the adaptive intensity rules, overridable through EngineConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! The values here are the defaults the engine ships with. The source material
//! states several of them inconsistently, so every one of them is surfaced
//! again as a field on the engine configuration.

/// Heart rate thresholds expressed as percentage of maximum heart rate
///
/// References:
/// - American College of Sports Medicine (ACSM) Guidelines for Exercise Testing and Prescription, 11th Edition
/// - Fox, S.M. et al. (1971). "Physical activity and coronary heart disease." *Ann Clin Res*, 3(6), 404-432.
pub mod heart_rate {
    /// At or above this share of max HR the workout is stopped
    pub const STOP_PERCENT: f64 = 100.0;

    /// At or above this share of max HR rest is forced to the maximum
    pub const CRITICAL_PERCENT: f64 = 94.0;

    /// At or above this share of max HR rest is extended
    pub const ELEVATED_PERCENT: f64 = 85.0;

    /// Below this share of max HR the user is considered recovered between sets
    pub const RECOVERED_PERCENT: f64 = 60.0;

    /// Fox formula intercept (220 - age)
    pub const FOX_INTERCEPT: f64 = 220.0;

    /// Upper bound accepted for a supplied maximum heart rate
    pub const MAX_REALISTIC_HEART_RATE: u32 = 250;

    /// Youngest age accepted for max HR estimation
    pub const MIN_ESTIMATION_AGE: u32 = 1;

    /// Oldest age accepted for max HR estimation
    pub const MAX_ESTIMATION_AGE: u32 = 120;
}

/// Blood oxygen saturation thresholds (percent)
pub mod spo2 {
    /// Readings below this stop the workout
    pub const STOP_BELOW: f64 = 95.0;

    /// Upper bound (inclusive) of the critical band starting at `STOP_BELOW`
    pub const CRITICAL_UPPER: f64 = 96.0;

    /// Lowest physically meaningful reading
    pub const MIN_VALID: f64 = 0.0;

    /// Highest physically meaningful reading
    pub const MAX_VALID: f64 = 100.0;
}

/// Cardiovascular strain score bounds (0-21 scale used by commercial wearables)
pub mod strain {
    /// Lowest valid strain reading
    pub const MIN_VALID: f64 = 0.0;

    /// Highest valid strain reading
    pub const MAX_VALID: f64 = 21.0;

    /// Strain at or above this extends rest like an elevated heart rate
    pub const HIGH_STRAIN_THRESHOLD: f64 = 18.0;
}

/// Rest interval bounds in seconds
pub mod rest {
    /// Rest assumed when the caller does not report the current rest interval
    pub const DEFAULT_BASELINE_SECONDS: u32 = 60;

    /// Hard ceiling for any rest decision
    pub const MAX_SECONDS: u32 = 90;

    /// Floor used when shortening rest
    pub const MIN_SECONDS: u32 = 30;

    /// Largest increase a single evaluation may apply
    pub const MAX_INCREMENT_SECONDS: u32 = 30;

    /// Step used when shortening rest after fast recovery
    pub const DECREMENT_SECONDS: u32 = 15;
}

/// Load and repetition adjustment bounds
pub mod load {
    /// Default progression step as a percentage of the current weight
    pub const INCREMENT_PERCENT: f64 = 2.5;

    /// Largest progression step as a percentage of the current weight
    pub const MAX_INCREASE_PERCENT: f64 = 5.0;

    /// Default regression step as a percentage of the current weight
    pub const DECREMENT_PERCENT: f64 = 10.0;

    /// Largest regression step as a percentage of the current weight
    pub const MAX_DECREASE_PERCENT: f64 = 10.0;

    /// Reps are never reduced below this share of the current target
    pub const MIN_REP_FRACTION: f64 = 0.8;

    /// Reps added or removed per decision
    pub const REP_STEP: u32 = 1;
}

/// Session history windows for progression decisions
pub mod progression {
    /// Number of recent sessions containing the exercise that are inspected
    pub const HISTORY_WINDOW: usize = 3;

    /// Sessions in the window that must agree before load changes
    pub const REQUIRED_SESSIONS: usize = 2;

    /// Progression is suppressed when the recorded success rate is below this
    pub const MIN_SUCCESS_RATE: f64 = 0.5;
}

/// Exercise preference learning
pub mod preferences {
    /// Swaps of the same pair before a blacklist prompt is offered
    pub const SWAP_PROMPT_THRESHOLD: u32 = 3;

    /// Exponential moving average weight for success rate updates
    pub const SUCCESS_RATE_LEARNING_RATE: f64 = 0.1;

    /// Success rate assumed for an exercise with no recorded outcomes
    pub const INITIAL_SUCCESS_RATE: f64 = 0.5;
}

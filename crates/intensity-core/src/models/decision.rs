// ABOUTME: Engine output types: the adjustment decision and the blacklist prompt
// ABOUTME: Closed set of adjustment kinds with numeric value, reason, and clamp flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of adjustment produced by an evaluation
///
/// The unit of the accompanying value depends on the kind: seconds for rest
/// kinds, load units for load kinds, rep count for rep kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Lengthen the rest interval; value is the new rest in seconds
    IncreaseRest,
    /// Shorten the rest interval; value is the new rest in seconds
    DecreaseRest,
    /// Add load; value is the load delta
    IncreaseLoad,
    /// Remove load; value is the (non-negative) load delta
    DecreaseLoad,
    /// Add reps; value is the rep delta
    AddRep,
    /// Remove reps; value is the rep delta
    RemoveRep,
    /// End the workout immediately
    StopWorkout,
    /// Keep the current prescription
    NoChange,
}

impl AdjustmentKind {
    /// Wire name of the kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IncreaseRest => "increase_rest",
            Self::DecreaseRest => "decrease_rest",
            Self::IncreaseLoad => "increase_load",
            Self::DecreaseLoad => "decrease_load",
            Self::AddRep => "add_rep",
            Self::RemoveRep => "remove_rep",
            Self::StopWorkout => "stop_workout",
            Self::NoChange => "no_change",
        }
    }

    /// Whether the value is a rest duration in seconds
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        matches!(self, Self::IncreaseRest | Self::DecreaseRest)
    }

    /// Whether the value is a load delta
    #[must_use]
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::IncreaseLoad | Self::DecreaseLoad)
    }
}

impl fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision returned by a single evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentDecision {
    /// What to change
    pub kind: AdjustmentKind,
    /// Magnitude, in the unit implied by `kind`
    pub value: f64,
    /// Human-readable explanation
    pub reason: String,
    /// Whether a safety bound limited the value
    pub clamped: bool,
    /// Name of the rule that produced the decision
    pub rule: String,
    /// Maximum heart rate the decision was computed against (bpm)
    pub max_heart_rate: f64,
    /// Whether `max_heart_rate` was estimated rather than calibrated
    pub max_heart_rate_estimated: bool,
}

impl AdjustmentDecision {
    /// Create a decision; heart rate basis defaults to unknown until attached
    #[must_use]
    pub fn new(
        kind: AdjustmentKind,
        value: f64,
        reason: impl Into<String>,
        clamped: bool,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            value,
            reason: reason.into(),
            clamped,
            rule: rule.into(),
            max_heart_rate: 0.0,
            max_heart_rate_estimated: false,
        }
    }

    /// Attach the maximum heart rate the decision was based on
    #[must_use]
    pub fn with_max_heart_rate(mut self, bpm: f64, estimated: bool) -> Self {
        self.max_heart_rate = bpm;
        self.max_heart_rate_estimated = estimated;
        self
    }

    /// Whether this decision ends the workout
    #[must_use]
    pub const fn is_stop(&self) -> bool {
        matches!(self.kind, AdjustmentKind::StopWorkout)
    }
}

/// Suggestion to permanently blacklist an exercise after repeated substitutions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistPrompt {
    /// Identifier for correlating the user's answer
    pub prompt_id: Uuid,
    /// User the prompt is for
    pub user_id: String,
    /// Exercise suggested for the blacklist
    pub exercise_id: String,
    /// Exercise the user keeps substituting in
    pub replacement_id: String,
    /// Swaps recorded for the pair
    pub swap_count: u32,
    /// Message for the presentation layer
    pub message: String,
}

// ABOUTME: Fully-typed input record for a single intensity evaluation
// ABOUTME: Bundles snapshot, profile, history, current prescription, and preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{BiometricSnapshot, ExercisePreferenceState, SessionSummary, UserProfile};

/// Everything the engine needs to produce one decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
    /// Latest wearable reading
    pub snapshot: BiometricSnapshot,
    /// User calibration data
    pub profile: UserProfile,
    /// Rest interval currently prescribed, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_rest_seconds: Option<u32>,
    /// Prior sessions, most recent first
    #[serde(default)]
    pub recent_sessions: Vec<SessionSummary>,
    /// Exercise being performed
    pub current_exercise: String,
    /// Working weight in load units; zero for bodyweight exercises
    #[serde(default)]
    pub current_weight: f64,
    /// Target reps per set
    pub current_reps: u32,
    /// User exercise preferences
    #[serde(default)]
    pub preferences: ExercisePreferenceState,
}

impl EvaluationContext {
    /// Context with no history and default preferences
    #[must_use]
    pub fn new(
        snapshot: BiometricSnapshot,
        profile: UserProfile,
        current_exercise: impl Into<String>,
        current_weight: f64,
        current_reps: u32,
    ) -> Self {
        Self {
            snapshot,
            profile,
            current_rest_seconds: None,
            recent_sessions: Vec::new(),
            current_exercise: current_exercise.into(),
            current_weight,
            current_reps,
            preferences: ExercisePreferenceState::default(),
        }
    }

    /// Set the currently prescribed rest
    #[must_use]
    pub fn with_rest(mut self, seconds: u32) -> Self {
        self.current_rest_seconds = Some(seconds);
        self
    }

    /// Set the session history
    #[must_use]
    pub fn with_sessions(mut self, sessions: Vec<SessionSummary>) -> Self {
        self.recent_sessions = sessions;
        self
    }

    /// Set the preference state
    #[must_use]
    pub fn with_preferences(mut self, preferences: ExercisePreferenceState) -> Self {
        self.preferences = preferences;
        self
    }
}

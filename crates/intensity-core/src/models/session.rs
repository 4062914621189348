// ABOUTME: Session history summaries fed back into the engine by the caller
// ABOUTME: Per-exercise completion records and subjective feedback tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Subjective feedback the user left for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTag {
    /// Session felt easy
    TooEasy,
    /// Session felt right
    JustRight,
    /// Session felt too hard
    TooHard,
    /// No feedback given
    #[default]
    Unknown,
}

/// How one exercise went within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePerformance {
    /// Exercise identifier (e.g. `bench_press`)
    pub exercise_id: String,
    /// Whether every target rep of every set was completed
    pub completed_target_reps: bool,
    /// Working weight used, in load units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Reps per set performed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
}

impl ExercisePerformance {
    /// Record for an exercise with only the completion flag known
    #[must_use]
    pub fn new(exercise_id: impl Into<String>, completed_target_reps: bool) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            completed_target_reps,
            weight: None,
            reps: None,
        }
    }
}

/// Summary of a past training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Exercises performed
    #[serde(default)]
    pub exercises: Vec<ExercisePerformance>,
    /// Average heart rate over the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_heart_rate: Option<u32>,
    /// Subjective feedback tag
    #[serde(default)]
    pub feedback: FeedbackTag,
}

impl SessionSummary {
    /// Find the record for an exercise in this session
    #[must_use]
    pub fn performance_for(&self, exercise_id: &str) -> Option<&ExercisePerformance> {
        self.exercises
            .iter()
            .find(|performance| performance.exercise_id == exercise_id)
    }
}

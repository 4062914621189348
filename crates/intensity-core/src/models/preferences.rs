// ABOUTME: Per-user exercise preference state persisted by the caller between evaluations
// ABOUTME: Success rates, blacklist, preferred and avoided lists, and swap counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Mutable per-user exercise preferences
///
/// Swap counters are stored as a nested `from -> to -> count` map so the state
/// serializes to plain JSON objects. Callers sharing one state across threads
/// must serialize access themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExercisePreferenceState {
    /// Success rate (0.0-1.0) per exercise identifier
    #[serde(default)]
    pub success_rates: BTreeMap<String, f64>,
    /// Exercises the user never wants programmed
    #[serde(default)]
    pub blacklist: BTreeSet<String>,
    /// Exercises the user prefers
    #[serde(default)]
    pub preferred: Vec<String>,
    /// Exercises the user tolerates but would rather avoid
    #[serde(default)]
    pub avoided: Vec<String>,
    /// Substitutions since the last reset, keyed by original then replacement
    #[serde(default)]
    pub swap_counts: BTreeMap<String, BTreeMap<String, u32>>,
}

impl ExercisePreferenceState {
    /// Recorded success rate for an exercise, clamped to [0, 1]
    ///
    /// Non-finite stored values are treated as unknown.
    #[must_use]
    pub fn success_rate(&self, exercise_id: &str) -> Option<f64> {
        self.success_rates
            .get(exercise_id)
            .copied()
            .filter(|rate| rate.is_finite())
            .map(|rate| rate.clamp(0.0, 1.0))
    }

    /// Store a success rate, clamped to [0, 1]
    pub fn set_success_rate(&mut self, exercise_id: impl Into<String>, rate: f64) {
        let rate = if rate.is_finite() {
            rate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.success_rates.insert(exercise_id.into(), rate);
    }

    /// Whether the exercise is blacklisted
    #[must_use]
    pub fn is_blacklisted(&self, exercise_id: &str) -> bool {
        self.blacklist.contains(exercise_id)
    }

    /// Whether the exercise is on the avoided list
    #[must_use]
    pub fn is_avoided(&self, exercise_id: &str) -> bool {
        self.avoided.iter().any(|id| id == exercise_id)
    }

    /// Whether the exercise is on the preferred list
    #[must_use]
    pub fn is_preferred(&self, exercise_id: &str) -> bool {
        self.preferred.iter().any(|id| id == exercise_id)
    }

    /// Current swap count for a pair
    #[must_use]
    pub fn swap_count(&self, from: &str, to: &str) -> u32 {
        self.swap_counts
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied()
            .unwrap_or(0)
    }

    /// Add one swap for a pair and return the new count
    pub fn increment_swap(&mut self, from: &str, to: &str) -> u32 {
        let count = self
            .swap_counts
            .entry(from.to_owned())
            .or_default()
            .entry(to.to_owned())
            .or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Reset the counter for a single pair
    pub fn clear_swap(&mut self, from: &str, to: &str) {
        if let Some(targets) = self.swap_counts.get_mut(from) {
            targets.remove(to);
            if targets.is_empty() {
                self.swap_counts.remove(from);
            }
        }
    }

    /// Reset every counter that starts from an exercise
    pub fn clear_swaps_from(&mut self, from: &str) {
        self.swap_counts.remove(from);
    }

    /// Reset all counters
    pub fn clear_all_swaps(&mut self) {
        self.swap_counts.clear();
    }

    /// Blacklist an exercise and drop it from the preferred list
    pub fn blacklist_exercise(&mut self, exercise_id: &str) {
        self.preferred.retain(|id| id != exercise_id);
        self.blacklist.insert(exercise_id.to_owned());
    }
}

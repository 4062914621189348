// ABOUTME: Preference learning: swap tracking, blacklist prompts, and success rates
// ABOUTME: Mutates caller-owned ExercisePreferenceState passed by mutable reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise preference learning
//!
//! Swap counters move forward one step per substitution and only go back to
//! zero through an explicit reset or an accepted blacklist prompt. Once a pair
//! reaches the prompt threshold every further swap yields a prompt until the
//! caller acts on it.

use crate::config::PreferencePolicy;
use intensity_core::models::{BlacklistPrompt, ExercisePreferenceState};
use tracing::{debug, info};
use uuid::Uuid;

/// Record a substitution and return a blacklist prompt once the pair is due
#[must_use]
pub fn track_swap(
    state: &mut ExercisePreferenceState,
    policy: &PreferencePolicy,
    user_id: &str,
    from: &str,
    to: &str,
) -> Option<BlacklistPrompt> {
    if from == to {
        debug!(user_id, exercise = from, "Ignoring swap of an exercise for itself");
        return None;
    }

    let swap_count = state.increment_swap(from, to);
    debug!(user_id, from, to, swap_count, "Recorded exercise swap");

    if swap_count < policy.swap_prompt_threshold || state.is_blacklisted(from) {
        return None;
    }

    info!(user_id, from, to, swap_count, "Suggesting blacklist after repeated swaps");
    Some(BlacklistPrompt {
        prompt_id: Uuid::new_v4(),
        user_id: user_id.to_owned(),
        exercise_id: from.to_owned(),
        replacement_id: to.to_owned(),
        swap_count,
        message: format!(
            "You've swapped {from} for {to} {swap_count} times. Remove {from} from future workouts?"
        ),
    })
}

/// Apply an accepted blacklist prompt
pub fn accept_prompt(state: &mut ExercisePreferenceState, prompt: &BlacklistPrompt) {
    state.blacklist_exercise(&prompt.exercise_id);
    state.clear_swaps_from(&prompt.exercise_id);
    info!(
        user_id = %prompt.user_id,
        exercise = %prompt.exercise_id,
        prompt_id = %prompt.prompt_id,
        "Exercise blacklisted"
    );
}

/// Fold one outcome into the exercise's success rate and return the new rate
pub fn record_outcome(
    state: &mut ExercisePreferenceState,
    policy: &PreferencePolicy,
    exercise_id: &str,
    success: bool,
) -> f64 {
    let previous = state
        .success_rate(exercise_id)
        .unwrap_or(policy.initial_success_rate);
    let observed = if success { 1.0 } else { 0.0 };
    let updated = policy
        .learning_rate
        .mul_add(observed - previous, previous)
        .clamp(0.0, 1.0);

    state.set_success_rate(exercise_id, updated);
    debug!(exercise = exercise_id, success, previous, updated, "Updated success rate");
    updated
}

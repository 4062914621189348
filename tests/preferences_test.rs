// ABOUTME: Integration tests for exercise swap tracking and preference learning
// ABOUTME: Validates blacklist prompts, prompt acceptance, counter resets, and success rates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use adaptive_intensity::models::ExercisePreferenceState;
use adaptive_intensity::{AdaptiveIntensityEngine, EngineConfig};
use common::init_test_logging;

fn engine() -> AdaptiveIntensityEngine {
    init_test_logging();
    AdaptiveIntensityEngine::default()
}

#[test]
fn test_third_swap_returns_prompt() {
    let engine = engine();
    let mut state = ExercisePreferenceState::default();

    assert!(engine
        .track_exercise_swap(&mut state, "user-1", "burpee", "mountain_climber")
        .is_none());
    assert!(engine
        .track_exercise_swap(&mut state, "user-1", "burpee", "mountain_climber")
        .is_none());

    let prompt = engine
        .track_exercise_swap(&mut state, "user-1", "burpee", "mountain_climber")
        .unwrap();
    assert_eq!(prompt.user_id, "user-1");
    assert_eq!(prompt.exercise_id, "burpee");
    assert_eq!(prompt.replacement_id, "mountain_climber");
    assert_eq!(prompt.swap_count, 3);
    assert!(prompt.message.contains("burpee"));
}

#[test]
fn test_prompt_repeats_until_acted_on() {
    let engine = engine();
    let mut state = ExercisePreferenceState::default();
    for _ in 0..3 {
        let _ = engine.track_exercise_swap(&mut state, "u", "lunge", "step_up");
    }

    let fourth = engine
        .track_exercise_swap(&mut state, "u", "lunge", "step_up")
        .unwrap();
    assert_eq!(fourth.swap_count, 4);
}

#[test]
fn test_pairs_are_counted_independently() {
    let engine = engine();
    let mut state = ExercisePreferenceState::default();

    let _ = engine.track_exercise_swap(&mut state, "u", "lunge", "step_up");
    let _ = engine.track_exercise_swap(&mut state, "u", "lunge", "split_squat");
    let _ = engine.track_exercise_swap(&mut state, "u", "step_up", "lunge");

    assert_eq!(state.swap_count("lunge", "step_up"), 1);
    assert_eq!(state.swap_count("lunge", "split_squat"), 1);
    assert_eq!(state.swap_count("step_up", "lunge"), 1);
    assert!(engine
        .track_exercise_swap(&mut state, "u", "lunge", "step_up")
        .is_none());
}

#[test]
fn test_self_swap_changes_nothing() {
    let engine = engine();
    let mut state = ExercisePreferenceState::default();
    for _ in 0..4 {
        assert!(engine
            .track_exercise_swap(&mut state, "u", "plank", "plank")
            .is_none());
    }
    assert!(state.swap_counts.is_empty());
}

#[test]
fn test_accepting_prompt_blacklists_and_resets() {
    let engine = engine();
    let mut state = ExercisePreferenceState {
        preferred: vec!["burpee".to_owned(), "row".to_owned()],
        ..ExercisePreferenceState::default()
    };
    let _ = engine.track_exercise_swap(&mut state, "u", "burpee", "jumping_jack");
    let _ = engine.track_exercise_swap(&mut state, "u", "burpee", "high_knees");
    let _ = engine.track_exercise_swap(&mut state, "u", "burpee", "jumping_jack");
    let prompt = engine
        .track_exercise_swap(&mut state, "u", "burpee", "jumping_jack")
        .unwrap();

    engine.accept_blacklist_prompt(&mut state, &prompt);

    assert!(state.is_blacklisted("burpee"));
    assert!(!state.is_preferred("burpee"));
    assert!(state.is_preferred("row"));
    assert_eq!(state.swap_count("burpee", "jumping_jack"), 0);
    assert_eq!(state.swap_count("burpee", "high_knees"), 0);
}

#[test]
fn test_blacklisted_exercise_is_not_prompted_again() {
    let engine = engine();
    let mut state = ExercisePreferenceState::default();
    state.blacklist_exercise("burpee");

    for _ in 0..5 {
        assert!(engine
            .track_exercise_swap(&mut state, "u", "burpee", "jumping_jack")
            .is_none());
    }
    assert_eq!(state.swap_count("burpee", "jumping_jack"), 5);
}

#[test]
fn test_reset_operations() {
    let engine = engine();
    let mut state = ExercisePreferenceState::default();
    let _ = engine.track_exercise_swap(&mut state, "u", "a", "b");
    let _ = engine.track_exercise_swap(&mut state, "u", "a", "c");
    let _ = engine.track_exercise_swap(&mut state, "u", "d", "e");

    engine.reset_swap_count(&mut state, "a", "b");
    assert_eq!(state.swap_count("a", "b"), 0);
    assert_eq!(state.swap_count("a", "c"), 1);

    engine.reset_all_swap_counts(&mut state);
    assert!(state.swap_counts.is_empty());
}

#[test]
fn test_custom_prompt_threshold() {
    init_test_logging();
    let mut config = EngineConfig::default();
    config.preferences.swap_prompt_threshold = 1;
    let engine = AdaptiveIntensityEngine::new(config);
    let mut state = ExercisePreferenceState::default();

    assert!(engine
        .track_exercise_swap(&mut state, "u", "a", "b")
        .is_some());
}

#[test]
fn test_success_rate_stays_in_unit_interval() {
    let engine = engine();
    let mut state = ExercisePreferenceState::default();

    for _ in 0..200 {
        let rate = engine.record_exercise_outcome(&mut state, "deadlift", true);
        assert!((0.0..=1.0).contains(&rate));
    }
    assert!(state.success_rate("deadlift").unwrap() > 0.99);

    for _ in 0..200 {
        let rate = engine.record_exercise_outcome(&mut state, "deadlift", false);
        assert!((0.0..=1.0).contains(&rate));
    }
    assert!(state.success_rate("deadlift").unwrap() < 0.01);
}

#[test]
fn test_state_round_trips_through_json() {
    let engine = engine();
    let mut state = ExercisePreferenceState::default();
    let _ = engine.track_exercise_swap(&mut state, "u", "burpee", "jumping_jack");
    engine.record_exercise_outcome(&mut state, "burpee", false);

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["swap_counts"]["burpee"]["jumping_jack"], 1);

    let restored: ExercisePreferenceState = serde_json::from_value(json).unwrap();
    assert_eq!(restored, state);
}

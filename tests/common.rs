// ABOUTME: Shared test utilities and builders for integration tests
// ABOUTME: Provides quiet logging setup and evaluation context helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `adaptive_intensity`

use adaptive_intensity::models::{
    BiometricSnapshot, EvaluationContext, ExercisePerformance, FeedbackTag, SessionSummary,
    UserProfile,
};
use chrono::{Days, NaiveDate};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calibrated max heart rate used by most scenarios
pub const MAX_HR: u32 = 180;

/// Context for a weighted exercise with a calibrated 180 bpm max
pub fn weighted_context(heart_rate: u32, exercise: &str, weight: f64) -> EvaluationContext {
    EvaluationContext::new(
        BiometricSnapshot::new(heart_rate),
        UserProfile::calibrated(MAX_HR),
        exercise,
        weight,
        8,
    )
}

/// Context for a bodyweight exercise with a calibrated 180 bpm max
pub fn bodyweight_context(heart_rate: u32, exercise: &str, reps: u32) -> EvaluationContext {
    EvaluationContext::new(
        BiometricSnapshot::new(heart_rate),
        UserProfile::calibrated(MAX_HR),
        exercise,
        0.0,
        reps,
    )
}

/// One past session containing a single exercise
pub fn session(
    days_ago: u32,
    exercise: &str,
    completed: bool,
    feedback: FeedbackTag,
) -> SessionSummary {
    let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap() - Days::new(u64::from(days_ago));
    SessionSummary {
        date,
        exercises: vec![ExercisePerformance::new(exercise, completed)],
        average_heart_rate: Some(130),
        feedback,
    }
}

/// Most-recent-first history with one completion flag per session
pub fn history(exercise: &str, completed: &[bool]) -> Vec<SessionSummary> {
    completed
        .iter()
        .enumerate()
        .map(|(i, done)| session(2 * i as u32 + 2, exercise, *done, FeedbackTag::JustRight))
        .collect()
}

// ABOUTME: Property-style sweeps over the decision space of the intensity engine
// ABOUTME: Checks rest bounds, load caps, safety stop priority, and heart rate monotonicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

mod common;

use adaptive_intensity::models::{AdjustmentDecision, AdjustmentKind, EvaluationContext};
use adaptive_intensity::AdaptiveIntensityEngine;
use common::{history, init_test_logging, weighted_context};

static HISTORIES: [&[bool]; 4] = [&[], &[true, true, true], &[false, false, true], &[true]];

fn sweep() -> impl Iterator<Item = EvaluationContext> {
    (0..=260).step_by(5).flat_map(|heart_rate| {
        [None, Some(0), Some(30), Some(60), Some(90), Some(200)]
            .into_iter()
            .flat_map(move |rest| {
                [None, Some(90.0), Some(95.0), Some(96.0), Some(99.0)]
                    .into_iter()
                    .flat_map(move |spo2| {
                        HISTORIES.iter().map(move |completed| {
                            let mut context = weighted_context(heart_rate, "deadlift", 120.0)
                                .with_sessions(history("deadlift", completed));
                            context.current_rest_seconds = rest;
                            context.snapshot.spo2 = spo2;
                            context
                        })
                    })
            })
    })
}

#[test]
fn test_rest_decisions_stay_within_bounds() {
    init_test_logging();
    let engine = AdaptiveIntensityEngine::default();

    for context in sweep() {
        let decision = engine.evaluate(&context).unwrap();
        if decision.kind.is_rest() {
            assert!(
                (0.0..=90.0).contains(&decision.value),
                "rest {} out of bounds for {context:?}",
                decision.value
            );
        }
        if decision.kind == AdjustmentKind::IncreaseRest {
            let current = f64::from(context.current_rest_seconds.unwrap_or(60).min(90));
            assert!(decision.value - current <= 30.0 || decision.value == 90.0);
        }
    }
}

#[test]
fn test_load_deltas_are_non_negative_and_capped() {
    init_test_logging();
    let engine = AdaptiveIntensityEngine::default();

    for context in sweep() {
        let decision = engine.evaluate(&context).unwrap();
        match decision.kind {
            AdjustmentKind::IncreaseLoad => {
                assert!(decision.value >= 0.0);
                assert!(decision.value <= context.current_weight * 0.05 + 1e-9);
            }
            AdjustmentKind::DecreaseLoad => {
                assert!(decision.value >= 0.0);
                assert!(decision.value <= context.current_weight * 0.10 + 1e-9);
            }
            _ => {}
        }
    }
}

#[test]
fn test_stop_condition_always_stops() {
    init_test_logging();
    let engine = AdaptiveIntensityEngine::default();

    for context in sweep() {
        let low_spo2 = context.snapshot.spo2.is_some_and(|spo2| spo2 < 95.0);
        let at_max = context.snapshot.heart_rate >= 180;
        let decision = engine.evaluate(&context).unwrap();

        assert_eq!(
            decision.kind == AdjustmentKind::StopWorkout,
            low_spo2 || at_max,
            "unexpected decision {decision:?}"
        );
        if decision.is_stop() {
            assert!(decision.clamped);
        }
    }
}

fn severity(decision: &AdjustmentDecision) -> f64 {
    match decision.kind {
        AdjustmentKind::StopWorkout => f64::INFINITY,
        AdjustmentKind::IncreaseRest => decision.value,
        _ => 0.0,
    }
}

#[test]
fn test_rising_heart_rate_never_lowers_rest_severity() {
    init_test_logging();
    let engine = AdaptiveIntensityEngine::default();

    for rest in [30, 45, 60, 75] {
        let mut previous = 0.0;
        for heart_rate in 150..=185 {
            let context = weighted_context(heart_rate, "deadlift", 120.0).with_rest(rest);
            let current = severity(&engine.evaluate(&context).unwrap());
            assert!(
                current >= previous,
                "severity dropped at {heart_rate} bpm with {rest} s rest"
            );
            previous = current;
        }
    }
}

// ABOUTME: Criterion benchmarks for the adaptive intensity engine
// ABOUTME: Measures single evaluations, history-heavy evaluations, and parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the adaptive intensity engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use adaptive_intensity::models::{
    BiometricSnapshot, EvaluationContext, ExercisePerformance, FeedbackTag, SessionSummary,
    UserProfile,
};
use adaptive_intensity::AdaptiveIntensityEngine;
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const EXERCISES: [&str; 6] = [
    "bench_press",
    "squat",
    "deadlift",
    "pull_up",
    "row",
    "push_up",
];

/// Deterministic most-recent-first history with six exercises per session
fn generate_sessions(count: usize) -> Vec<SessionSummary> {
    let base_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    (0..count)
        .map(|index| SessionSummary {
            date: base_date - Days::new(index as u64 * 2),
            exercises: EXERCISES
                .iter()
                .enumerate()
                .map(|(offset, id)| ExercisePerformance::new(*id, (index + offset) % 3 != 0))
                .collect(),
            average_heart_rate: Some(130 + (index % 20) as u32),
            feedback: if index % 5 == 0 {
                FeedbackTag::TooHard
            } else {
                FeedbackTag::JustRight
            },
        })
        .collect()
}

fn context(heart_rate: u32, sessions: Vec<SessionSummary>) -> EvaluationContext {
    EvaluationContext::new(
        BiometricSnapshot::new(heart_rate).with_spo2(98.0),
        UserProfile::calibrated(185),
        "deadlift",
        140.0,
        5,
    )
    .with_rest(60)
    .with_sessions(sessions)
}

fn bench_single_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let engine = AdaptiveIntensityEngine::default();

    for (label, heart_rate) in [("stop", 190), ("elevated", 165), ("history", 120)] {
        let ctx = context(heart_rate, generate_sessions(10));
        group.bench_with_input(BenchmarkId::new("decision", label), &ctx, |b, ctx| {
            b.iter(|| engine.evaluate(black_box(ctx)));
        });
    }

    group.finish();
}

fn bench_history_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_length");
    let engine = AdaptiveIntensityEngine::default();

    for count in [3, 30, 300] {
        let ctx = context(120, generate_sessions(count));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("evaluate", count), &ctx, |b, ctx| {
            b.iter(|| engine.evaluate(black_box(ctx)));
        });
    }

    group.finish();
}

fn bench_batch_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_many");
    let engine = AdaptiveIntensityEngine::default();

    for count in [100, 1000] {
        let contexts: Vec<_> = (0..count)
            .map(|index| context(100 + (index % 90) as u32, generate_sessions(6)))
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("parallel", count), &contexts, |b, contexts| {
            b.iter(|| engine.evaluate_many(black_box(contexts)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_evaluation,
    bench_history_length,
    bench_batch_evaluation,
);
criterion_main!(benches);

// ABOUTME: History-driven rules for load progression, regression, and rest recovery
// ABOUTME: Inspects the most recent sessions containing the current exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::AdjustmentRule;
use crate::config::EngineConfig;
use crate::validation::RuleInputs;
use intensity_core::models::{
    AdjustmentDecision, AdjustmentKind, ExercisePerformance, FeedbackTag, SessionSummary,
};
use tracing::debug;

/// Outcome counts over the recent history window for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryWindow {
    /// Sessions inspected
    pub sessions: usize,
    /// Sessions where every target rep was completed without a `too_hard` tag
    pub successes: usize,
    /// Sessions where target reps were missed or the session felt too hard
    pub struggles: usize,
}

impl HistoryWindow {
    /// Summarize the most recent `window` sessions that include `exercise`
    #[must_use]
    pub fn collect(sessions: &[SessionSummary], exercise: &str, window: usize) -> Self {
        sessions
            .iter()
            .filter_map(|session| {
                session
                    .performance_for(exercise)
                    .map(|performance| (session, performance))
            })
            .take(window)
            .fold(Self::default(), |mut acc, (session, performance)| {
                acc.sessions += 1;
                if is_struggle(session, performance) {
                    acc.struggles += 1;
                } else {
                    acc.successes += 1;
                }
                acc
            })
    }
}

fn is_struggle(session: &SessionSummary, performance: &ExercisePerformance) -> bool {
    !performance.completed_target_reps || session.feedback == FeedbackTag::TooHard
}

fn percent_of(weight: f64, percent: f64) -> f64 {
    weight * percent / 100.0
}

/// Adds load or a rep after repeated successful sessions
pub struct ProgressionRule;

impl AdjustmentRule for ProgressionRule {
    fn name(&self) -> &'static str {
        "progression"
    }

    fn evaluate(
        &self,
        inputs: &RuleInputs<'_>,
        config: &EngineConfig,
    ) -> Option<AdjustmentDecision> {
        let policy = &config.progression;
        let history = HistoryWindow::collect(inputs.sessions, inputs.exercise, policy.history_window);
        if history.successes < policy.required_sessions {
            return None;
        }

        if inputs.preferences.is_avoided(inputs.exercise) {
            debug!(exercise = inputs.exercise, "Progression suppressed for avoided exercise");
            return None;
        }
        if let Some(rate) = inputs.preferences.success_rate(inputs.exercise) {
            if rate < policy.min_success_rate {
                debug!(
                    exercise = inputs.exercise,
                    success_rate = rate,
                    "Progression suppressed by low success rate"
                );
                return None;
            }
        }

        let summary = format!(
            "Completed target reps in {} of the last {} {} sessions",
            history.successes, history.sessions, inputs.exercise
        );
        let load = &config.load;

        let decision = if inputs.is_bodyweight() {
            AdjustmentDecision::new(
                AdjustmentKind::AddRep,
                f64::from(load.rep_step),
                format!("{summary}; adding {} rep", load.rep_step),
                false,
                self.name(),
            )
        } else {
            let percent = load.increment_percent.min(load.max_increase_percent);
            AdjustmentDecision::new(
                AdjustmentKind::IncreaseLoad,
                percent_of(inputs.current_weight, percent),
                format!("{summary}; adding {percent}% load"),
                load.increment_percent > load.max_increase_percent,
                self.name(),
            )
        };
        Some(decision)
    }
}

/// Removes load or a rep after repeated struggles
pub struct RegressionRule;

impl AdjustmentRule for RegressionRule {
    fn name(&self) -> &'static str {
        "regression"
    }

    fn evaluate(
        &self,
        inputs: &RuleInputs<'_>,
        config: &EngineConfig,
    ) -> Option<AdjustmentDecision> {
        let policy = &config.progression;
        let history = HistoryWindow::collect(inputs.sessions, inputs.exercise, policy.history_window);
        if history.struggles < policy.required_sessions {
            return None;
        }

        let summary = format!(
            "Struggled in {} of the last {} {} sessions",
            history.struggles, history.sessions, inputs.exercise
        );
        let load = &config.load;

        if !inputs.is_bodyweight() {
            let percent = load.decrement_percent.min(load.max_decrease_percent);
            return Some(AdjustmentDecision::new(
                AdjustmentKind::DecreaseLoad,
                percent_of(inputs.current_weight, percent),
                format!("{summary}; removing {percent}% load"),
                load.decrement_percent > load.max_decrease_percent,
                self.name(),
            ));
        }

        let rep_floor = min_reps(inputs.current_reps, load.min_rep_fraction);
        let decision = if inputs.current_reps >= rep_floor.saturating_add(load.rep_step) {
            AdjustmentDecision::new(
                AdjustmentKind::RemoveRep,
                f64::from(load.rep_step),
                format!("{summary}; removing {} rep", load.rep_step),
                false,
                self.name(),
            )
        } else {
            AdjustmentDecision::new(
                AdjustmentKind::NoChange,
                0.0,
                format!("{summary}; already at the {rep_floor}-rep floor"),
                true,
                self.name(),
            )
        };
        Some(decision)
    }
}

/// Lowest rep target allowed when regressing from `reps`
///
/// Rounds up so the result is never below `fraction` of the target: with
/// the default 0.8, a 7-rep target floors at 6 (86%), since truncating to 5
/// would leave only 71% of the target.
#[must_use]
pub fn min_reps(reps: u32, fraction: f64) -> u32 {
    let floor = (f64::from(reps) * fraction - REP_FLOOR_TOLERANCE).ceil() as u32;
    floor.max(1)
}

const REP_FLOOR_TOLERANCE: f64 = 1e-9;

/// Shortens rest once heart rate has recovered
pub struct FastRecoveryRule;

impl AdjustmentRule for FastRecoveryRule {
    fn name(&self) -> &'static str {
        "fast_recovery"
    }

    fn evaluate(
        &self,
        inputs: &RuleInputs<'_>,
        config: &EngineConfig,
    ) -> Option<AdjustmentDecision> {
        let rest = &config.rest;
        let current = inputs.reported_rest_seconds?;
        if inputs.heart_rate_percent >= config.heart_rate.recovered_percent
            || current <= rest.min_seconds
        {
            return None;
        }

        let raw = current.saturating_sub(rest.decrement_seconds);
        let new_rest = raw.max(rest.min_seconds);
        Some(AdjustmentDecision::new(
            AdjustmentKind::DecreaseRest,
            f64::from(new_rest),
            format!(
                "Heart rate recovered to {:.0}% of max; shortening rest from {current} s to {new_rest} s",
                inputs.heart_rate_percent
            ),
            raw <= rest.min_seconds,
            self.name(),
        ))
    }
}

// ABOUTME: Rule abstraction for the adaptive intensity decision pipeline
// ABOUTME: Each rule inspects validated inputs and either claims the decision or passes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Decision rules
//!
//! Rules run in a fixed priority order and the first one that returns a
//! decision wins. Safety rules live in [`safety`], history-driven load and
//! recovery rules in [`progression`].

use crate::config::EngineConfig;
use crate::validation::RuleInputs;
use intensity_core::models::AdjustmentDecision;

/// Safety stop and strain-driven rest rules
pub mod safety;

/// Progression, regression, and recovery rules
pub mod progression;

pub use progression::{FastRecoveryRule, ProgressionRule, RegressionRule};
pub use safety::{CriticalStrainRule, ElevatedStrainRule, SafetyStopRule};

/// A single step of the decision pipeline
pub trait AdjustmentRule: Send + Sync {
    /// Stable rule name reported in `AdjustmentDecision::rule`
    fn name(&self) -> &'static str;

    /// Produce a decision, or `None` to defer to the next rule
    fn evaluate(&self, inputs: &RuleInputs<'_>, config: &EngineConfig)
        -> Option<AdjustmentDecision>;
}

/// Rules evaluated after the safety stop, in priority order
#[must_use]
pub fn default_rules() -> Vec<Box<dyn AdjustmentRule>> {
    vec![
        Box::new(CriticalStrainRule),
        Box::new(ElevatedStrainRule),
        Box::new(ProgressionRule),
        Box::new(RegressionRule),
        Box::new(FastRecoveryRule),
    ]
}

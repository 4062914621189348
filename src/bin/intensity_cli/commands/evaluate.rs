// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Evaluate command for intensity-cli
// ABOUTME: Runs one evaluation context through the engine and prints the decision

use crate::helpers::io::{print_json, read_json};
use adaptive_intensity::models::EvaluationContext;
use adaptive_intensity::AdaptiveIntensityEngine;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn run(engine: &AdaptiveIntensityEngine, input: &Path) -> Result<()> {
    let context: EvaluationContext = read_json(input)?;
    let decision = engine
        .evaluate(&context)
        .with_context(|| format!("Cannot evaluate {}", context.current_exercise))?;

    info!(
        exercise = %context.current_exercise,
        kind = %decision.kind,
        rule = %decision.rule,
        "Evaluation complete"
    );
    print_json(&decision)
}

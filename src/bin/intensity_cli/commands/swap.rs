// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Swap command for intensity-cli
// ABOUTME: Records a substitution against a preference state file and reports blacklist prompts

use crate::helpers::io::{print_json, read_json_or_default, write_json};
use adaptive_intensity::models::ExercisePreferenceState;
use adaptive_intensity::AdaptiveIntensityEngine;
use anyhow::Result;
use serde_json::json;
use std::path::Path;
use tracing::info;

pub fn run(
    engine: &AdaptiveIntensityEngine,
    state_path: &Path,
    user: &str,
    from: &str,
    to: &str,
    write: bool,
) -> Result<()> {
    let mut state: ExercisePreferenceState = read_json_or_default(state_path)?;
    let prompt = engine.track_exercise_swap(&mut state, user, from, to);

    if write {
        write_json(state_path, &state)?;
        info!(path = %state_path.display(), "Preference state saved");
    }

    print_json(&json!({
        "prompt": prompt,
        "state": state,
    }))
}

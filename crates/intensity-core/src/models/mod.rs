// ABOUTME: Core data models for adaptive intensity decisions
// ABOUTME: Re-exports snapshot, profile, session, preference, decision, and strain types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models exchanged between the engine and its external collaborators.
//!
//! Everything here is plain data: the wearable collaborator produces
//! `BiometricSnapshot`s, the account collaborator owns `UserProfile`, the
//! session store owns `SessionSummary` history and `ExercisePreferenceState`,
//! and the presentation layer consumes `AdjustmentDecision`s.

mod biometrics;
mod context;
mod decision;
mod preferences;
mod profile;
mod session;
mod strain;

pub use biometrics::BiometricSnapshot;
pub use context::EvaluationContext;
pub use decision::{AdjustmentDecision, AdjustmentKind, BlacklistPrompt};
pub use preferences::ExercisePreferenceState;
pub use profile::UserProfile;
pub use session::{ExercisePerformance, FeedbackTag, SessionSummary};
pub use strain::{StrainAssessment, StrainStatus, TrafficLight, TrainingIntensity};

// ABOUTME: Adaptive intensity engine crate root
// ABOUTME: Configuration, validation, decision rules, strain assessment, and preference learning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Intensity Engine
//!
//! Rule-based adaptive training intensity. Given a biometric snapshot, the
//! user's calibration data, recent sessions, and the current exercise, the
//! engine returns one bounded [`AdjustmentDecision`](intensity_core::models::AdjustmentDecision).
//!
//! ```rust
//! use intensity_core::models::{BiometricSnapshot, EvaluationContext, UserProfile};
//! use intensity_engine::AdaptiveIntensityEngine;
//!
//! let engine = AdaptiveIntensityEngine::default();
//! let context = EvaluationContext::new(
//!     BiometricSnapshot::new(182).with_spo2(98.0),
//!     UserProfile::calibrated(180),
//!     "bench_press",
//!     60.0,
//!     8,
//! );
//! let decision = engine.evaluate(&context)?;
//! assert!(decision.is_stop());
//! # Ok::<(), intensity_core::EngineError>(())
//! ```

/// Engine thresholds, bounds, and environment overrides
pub mod config;

/// Engine entry point
pub mod engine;

/// Swap tracking, blacklist prompts, and success rates
pub mod preferences;

/// Decision rules in priority order
pub mod rules;

/// Traffic-light strain assessment
pub mod strain;

/// Input validation and max heart rate resolution
pub mod validation;

pub use config::{ConfigError, EngineConfig};
pub use engine::AdaptiveIntensityEngine;
pub use rules::AdjustmentRule;
pub use validation::{resolve_max_heart_rate, HeartRateBasis, MaxHrSource, RuleInputs};

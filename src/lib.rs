// ABOUTME: Main library entry point for the adaptive intensity engine workspace
// ABOUTME: Re-exports the core and engine crates plus service configuration and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Adaptive Intensity
//!
//! Rule-based adaptive training intensity for wearable-driven workouts. The
//! engine turns a biometric snapshot, calibration data, recent sessions, and
//! the current exercise into exactly one bounded adjustment: a rest change, a
//! load or rep change, a safety stop, or no change.
//!
//! ## Architecture
//!
//! - **`intensity_core`**: domain models, error taxonomy, constants, max HR formulas
//! - **`intensity_engine`**: configuration, validation, rules, strain assessment, preferences
//! - **this crate**: service configuration, structured logging, and the `intensity-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use adaptive_intensity::models::{BiometricSnapshot, EvaluationContext, UserProfile};
//! use adaptive_intensity::AdaptiveIntensityEngine;
//!
//! let engine = AdaptiveIntensityEngine::default();
//! let context = EvaluationContext::new(
//!     BiometricSnapshot::new(155),
//!     UserProfile::calibrated(180),
//!     "bench_press",
//!     60.0,
//!     8,
//! );
//! let decision = engine.evaluate(&context)?;
//! assert!(decision.value <= 90.0);
//! # Ok::<(), adaptive_intensity::EngineError>(())
//! ```

/// Service configuration from environment variables
pub mod config;

/// Service-level constants
pub mod constants;

/// Structured logging setup
pub mod logging;

pub use intensity_core::errors::{EngineError, EngineResult, ErrorCode};
pub use intensity_core::intelligence::algorithms::MaxHrAlgorithm;
pub use intensity_core::models;
pub use intensity_engine::{
    resolve_max_heart_rate, AdaptiveIntensityEngine, AdjustmentRule, EngineConfig,
    HeartRateBasis, MaxHrSource,
};

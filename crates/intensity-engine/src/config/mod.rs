// ABOUTME: Configuration module for the intensity-engine crate
// ABOUTME: Re-exports engine configuration types and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine thresholds, bounds, and policies
pub mod engine;

/// Configuration error types
pub mod error;

pub use engine::{
    EngineConfig, HeartRateThresholds, LoadPolicy, PreferencePolicy, ProgressionPolicy,
    RestPolicy, Spo2Thresholds,
};
pub use error::ConfigError;

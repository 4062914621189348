// ABOUTME: Core types and constants for the adaptive intensity engine
// ABOUTME: Foundation crate with error handling, domain models, constants, and max HR estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Intensity Core
//!
//! Foundation crate providing shared types and constants for adaptive training
//! intensity decisions. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `EngineError`, `ErrorCode`, and the `EngineResult` alias
//! - **constants**: Physiological thresholds and safety bounds used as engine defaults
//! - **models**: Biometric snapshots, profiles, session history, preferences, and decisions
//! - **intelligence**: Maximum heart rate estimation algorithms

/// Error taxonomy shared by the engine crates
pub mod errors;

/// Default thresholds and safety bounds organized by domain
pub mod constants;

/// Core data models (snapshots, profiles, sessions, preferences, decisions)
pub mod models;

/// Intelligence algorithm types (`MaxHrAlgorithm`)
pub mod intelligence;

pub use errors::{EngineError, EngineResult, ErrorCode};

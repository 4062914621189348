// ABOUTME: Configuration module for the adaptive intensity service layer
// ABOUTME: Bundles environment, log level, and engine configuration loaded at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: deployment mode and log level from environment variables
//! - **Engine**: thresholds and policies re-exported from `intensity_engine::config`

/// Environment and service configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServiceConfig};
pub use intensity_engine::config::{ConfigError, EngineConfig};

// ABOUTME: Error types for adaptive intensity evaluation
// ABOUTME: Defines stable error codes and the EngineError enum surfaced to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Engine Error Types
//!
//! Only two conditions ever reach the caller:
//! - `Configuration` - no basis exists for heart-rate-relative decisions
//! - `InvalidInput` - a value that cannot be degraded was supplied to a direct API
//!
//! Missing optional readings (`SpO2`, strain, session history) are not errors;
//! the engine narrows which rules can fire instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable error codes for callers that map errors onto their own responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Neither a maximum heart rate nor an age was supplied
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// A value outside its documented domain was supplied
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
}

impl ErrorCode {
    /// Wire representation of the code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigMissing => "CONFIG_MISSING",
            Self::InvalidInput => "INVALID_INPUT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No calibrated or estimated maximum heart rate can be derived
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input outside its valid domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Configuration(_) => ErrorCode::ConfigMissing,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
        }
    }
}

/// Result alias used throughout the engine crates
pub type EngineResult<T> = Result<T, EngineError>;

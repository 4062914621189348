// ABOUTME: Service-level constants for the adaptive intensity binaries
// ABOUTME: Service names and environment variable keys read at startup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Constants Module
//!
//! Service identity and environment keys. Physiological thresholds live in
//! `intensity_core::constants`.

/// Service names used in structured logs
pub mod service_names {
    /// Default service name
    pub const INTENSITY_ENGINE: &str = "adaptive-intensity";
}

/// Environment variable keys read by the service layer
pub mod env_keys {
    /// Deployment environment (development, testing, production)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level used when `RUST_LOG` is unset
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

// ABOUTME: Intelligence algorithm types for the intensity engine
// ABOUTME: Contains MaxHrAlgorithm for heart rate estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Maximum heart rate estimation algorithms
pub mod maxhr;

pub use maxhr::MaxHrAlgorithm;

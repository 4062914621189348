// ABOUTME: Intelligence module re-exports for algorithm types
// ABOUTME: Contains MaxHrAlgorithm used when a calibrated max heart rate is unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Maximum heart rate estimation algorithms
pub mod algorithms;

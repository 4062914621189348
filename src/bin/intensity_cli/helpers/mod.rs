// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for intensity-cli
// ABOUTME: Provides JSON input and output utilities

pub mod io;

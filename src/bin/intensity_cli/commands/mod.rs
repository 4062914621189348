// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for intensity-cli
// ABOUTME: Provides the evaluate, swap, and assess subcommands

pub mod assess;
pub mod evaluate;
pub mod swap;

// ABOUTME: Maximum heart rate estimation algorithms using age-predicted formulas
// ABOUTME: Implements Fox, Tanaka, Nes, and Gulati formulas for uncalibrated users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::heart_rate::{FOX_INTERCEPT, MAX_ESTIMATION_AGE, MIN_ESTIMATION_AGE};
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum heart rate estimation algorithm
///
/// Used only when the user has not completed a max HR calibration. The engine
/// defaults to `Fox` because the intensity rules were tuned against `220 - age`.
///
/// - `Fox`: Classic 220-age (±10-12 bpm error, tends to overestimate)
/// - `Tanaka`: 208-0.7xage (±7-8 bpm error)
/// - `Nes`: 211-0.64xage (±6-7 bpm error)
/// - `Gulati`: 206-0.88xage (women-specific, ±7-8 bpm error)
///
/// # Scientific References
///
/// - Fox, S.M. et al. (1971). "Physical activity and coronary heart disease." *Ann Clin Res*, 3(6), 404-432.
/// - Tanaka, H. et al. (2001). "Age-predicted maximal heart rate revisited." *J Am Coll Cardiol*, 37(1), 153-156.
/// - Nes, B.M. et al. (2013). "Age-predicted maximal heart rate." *Scand J Med Sci Sports*, 23(6), 697-704.
/// - Gulati, M. et al. (2010). "Heart rate response to exercise stress testing." *Circulation*, 122(2), 130-137.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaxHrAlgorithm {
    /// Fox formula: 220 - age
    #[default]
    Fox,

    /// Tanaka formula: 208 - 0.7 x age
    Tanaka,

    /// Nes formula: 211 - 0.64 x age
    Nes,

    /// Gulati formula: 206 - 0.88 x age
    ///
    /// Falls back to Tanaka when the gender is known to be male
    Gulati,
}

impl MaxHrAlgorithm {
    /// Estimate maximum heart rate from age
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if age is outside 1-120 years
    pub fn estimate(&self, age: u32, gender: Option<&str>) -> EngineResult<f64> {
        if !(MIN_ESTIMATION_AGE..=MAX_ESTIMATION_AGE).contains(&age) {
            return Err(EngineError::invalid_input(format!(
                "Age must be between {MIN_ESTIMATION_AGE} and {MAX_ESTIMATION_AGE} years, got {age}"
            )));
        }

        let age_f64 = f64::from(age);

        let max_hr = match self {
            Self::Fox => FOX_INTERCEPT - age_f64,
            Self::Tanaka => 0.7f64.mul_add(-age_f64, 208.0),
            Self::Nes => 0.64f64.mul_add(-age_f64, 211.0),
            Self::Gulati => {
                if gender.is_some_and(|g| g.eq_ignore_ascii_case("male")) {
                    0.7f64.mul_add(-age_f64, 208.0)
                } else {
                    0.88f64.mul_add(-age_f64, 206.0)
                }
            }
        };

        Ok(max_hr)
    }

    /// Get algorithm name for logging and configuration
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fox => "fox",
            Self::Tanaka => "tanaka",
            Self::Nes => "nes",
            Self::Gulati => "gulati",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Fox => "220 - age",
            Self::Tanaka => "208 - 0.7 x age",
            Self::Nes => "211 - 0.64 x age",
            Self::Gulati => "206 - 0.88 x age",
        }
    }
}

impl fmt::Display for MaxHrAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaxHrAlgorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fox" => Ok(Self::Fox),
            "tanaka" => Ok(Self::Tanaka),
            "nes" => Ok(Self::Nes),
            "gulati" => Ok(Self::Gulati),
            other => Err(EngineError::invalid_input(format!(
                "Unknown MaxHR algorithm: '{other}'. Valid options: fox, tanaka, nes, gulati"
            ))),
        }
    }
}

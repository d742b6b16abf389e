//! Threshold policy for the risk engine.
//!
//! The free functions exported from the crate root all use
//! [`RiskPolicy::STANDARD`]. A deployment that needs different cut-offs can
//! load its own policy from JSON and call the methods on it directly; any
//! field left out of the JSON keeps its standard value.
//!
//! Rejection-probability bands are not part of the policy. They are fixed
//! display labels, see [`crate::estimate_rejection_probability_range`].

use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// Days until the next review for each alert level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewSchedule {
    pub critical_days: u32,
    pub warning_days: u32,
    pub stable_days: u32,
}

impl ReviewSchedule {
    pub const STANDARD: ReviewSchedule = ReviewSchedule {
        critical_days: 1,
        warning_days: 3,
        stable_days: 30,
    };
}

impl Default for ReviewSchedule {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Numeric cut-offs used to classify a dd-cfDNA history.
/// Concentrations are ng/mL; all comparisons against them are strict `>`/`<`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskPolicy {
    /// Donor cfDNA strictly above this is Critical
    pub critical_above: f64,
    /// Donor cfDNA strictly above this (and not Critical) is Warning
    pub warning_above: f64,
    /// Point-to-point change (percent) beyond which a badge shows Up/Down
    pub badge_band_percent: f64,
    pub rapid_rise_ratio: f64,
    pub gradual_rise_ratio: f64,
    pub decrease_ratio: f64,
    pub review: ReviewSchedule,
}

impl RiskPolicy {
    pub const STANDARD: RiskPolicy = RiskPolicy {
        critical_above: 15.0,
        warning_above: 8.0,
        badge_band_percent: 10.0,
        rapid_rise_ratio: 1.5,
        gradual_rise_ratio: 1.1,
        decrease_ratio: 0.9,
        review: ReviewSchedule::STANDARD,
    };

    /// Parse and check a policy from a JSON string
    pub fn from_json(s: &str) -> Result<RiskPolicy, PolicyError> {
        let policy: RiskPolicy = serde_json::from_str(s)?;
        policy.check()?;
        log::debug!("loaded risk policy: {policy:?}");
        Ok(policy)
    }

    /// Load and check a policy from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<RiskPolicy, PolicyError> {
        let s = read_to_string(path)?;
        Self::from_json(&s)
    }

    /// Reject policies whose tiers would overlap or invert
    pub fn check(&self) -> Result<(), PolicyError> {
        let finite = [
            self.critical_above,
            self.warning_above,
            self.badge_band_percent,
            self.rapid_rise_ratio,
            self.gradual_rise_ratio,
            self.decrease_ratio,
        ]
        .iter()
        .all(|x| x.is_finite());
        if !finite {
            return Err(PolicyError::Invalid(
                "all thresholds must be finite".to_string(),
            ));
        }
        if self.warning_above >= self.critical_above {
            return Err(PolicyError::Invalid(format!(
                "warning_above ({}) must be below critical_above ({})",
                self.warning_above, self.critical_above
            )));
        }
        if self.badge_band_percent < 0.0 {
            return Err(PolicyError::Invalid(format!(
                "badge_band_percent ({}) must not be negative",
                self.badge_band_percent
            )));
        }
        if !(self.decrease_ratio < 1.0
            && 1.0 < self.gradual_rise_ratio
            && self.gradual_rise_ratio < self.rapid_rise_ratio)
        {
            return Err(PolicyError::Invalid(format!(
                "expected decrease_ratio < 1 < gradual_rise_ratio < rapid_rise_ratio, got {} / {} / {}",
                self.decrease_ratio, self.gradual_rise_ratio, self.rapid_rise_ratio
            )));
        }
        Ok(())
    }
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

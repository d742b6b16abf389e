use serde::{Deserialize, Serialize};

use graftwatch_types::Measurement;

use crate::error::RiskError;
use crate::policy::RiskPolicy;

/// Monitoring status derived from the current dd-cfDNA reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AlertLevel {
    Stable,
    Warning,
    Critical,
}

impl AlertLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            AlertLevel::Stable => "Stable",
            AlertLevel::Warning => "Warning",
            AlertLevel::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection risk tier, one-to-one with [`AlertLevel`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AlertLevel> for RiskLevel {
    fn from(level: AlertLevel) -> Self {
        match level {
            AlertLevel::Stable => RiskLevel::Low,
            AlertLevel::Warning => RiskLevel::Medium,
            AlertLevel::Critical => RiskLevel::High,
        }
    }
}

/// Classification of a single reading. Recomputed on every query, never stored.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub level: AlertLevel,
    pub risk_level: RiskLevel,
    pub title: &'static str,
    pub message: &'static str,
}

impl RiskAssessment {
    pub const fn for_level(level: AlertLevel) -> Self {
        match level {
            AlertLevel::Critical => RiskAssessment {
                level,
                risk_level: RiskLevel::High,
                title: "CRITICAL ALERT",
                message: "Elevated donor-derived DNA indicates high rejection probability. Immediate intervention required.",
            },
            AlertLevel::Warning => RiskAssessment {
                level,
                risk_level: RiskLevel::Medium,
                title: "WARNING",
                message: "Moderate elevation in donor DNA levels. Close monitoring recommended.",
            },
            AlertLevel::Stable => RiskAssessment {
                level,
                risk_level: RiskLevel::Low,
                title: "STABLE",
                message: "Patient biomarkers within normal expected ranges.",
            },
        }
    }
}

impl RiskPolicy {
    /// Map a dd-cfDNA concentration to an alert level.
    /// Anything that is not above `warning_above` (negatives and NaN included) is Stable.
    pub fn alert_level(&self, donor_cfdna: f64) -> AlertLevel {
        if donor_cfdna > self.critical_above {
            AlertLevel::Critical
        } else if donor_cfdna > self.warning_above {
            AlertLevel::Warning
        } else {
            AlertLevel::Stable
        }
    }

    pub fn classify(&self, donor_cfdna: f64) -> RiskAssessment {
        RiskAssessment::for_level(self.alert_level(donor_cfdna))
    }

    /// Classify the most recent measurement of a history
    pub fn assess_latest(&self, measurements: &[Measurement]) -> Result<RiskAssessment, RiskError> {
        let latest = measurements.last().ok_or(RiskError::EmptyHistory)?;
        let assessment = self.classify(latest.donor_cfdna);
        log::debug!(
            "assessed dd-cfDNA {} ng/mL from {} as {}",
            latest.donor_cfdna,
            latest.date,
            assessment.level
        );
        Ok(assessment)
    }
}

pub fn classify_risk(donor_cfdna: f64) -> RiskAssessment {
    RiskPolicy::STANDARD.classify(donor_cfdna)
}

pub fn assess_latest(measurements: &[Measurement]) -> Result<RiskAssessment, RiskError> {
    RiskPolicy::STANDARD.assess_latest(measurements)
}

/// Coarse rejection-probability label (percent range) for a dd-cfDNA value.
/// This is a display bucket, not a computed interval.
pub fn estimate_rejection_probability_range(donor_cfdna: f64) -> &'static str {
    if donor_cfdna > 20.0 {
        "85-95"
    } else if donor_cfdna > 15.0 {
        "70-85"
    } else if donor_cfdna > 10.0 {
        "40-60"
    } else if donor_cfdna > 5.0 {
        "15-30"
    } else {
        "5-10"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{history, init_test_logger};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn boundaries_use_strict_comparisons() {
        assert_eq!(classify_risk(8.0).level, AlertLevel::Stable);
        assert_eq!(classify_risk(8.0).risk_level, RiskLevel::Low);
        assert_eq!(classify_risk(8.01).level, AlertLevel::Warning);
        assert_eq!(classify_risk(15.0).level, AlertLevel::Warning);
        assert_eq!(classify_risk(15.0).risk_level, RiskLevel::Medium);
        assert_eq!(classify_risk(15.01).level, AlertLevel::Critical);
        assert_eq!(classify_risk(15.01).risk_level, RiskLevel::High);
    }

    #[test]
    fn assessment_text_matches_level() {
        let critical = classify_risk(25.7);
        assert_eq!(critical.title, "CRITICAL ALERT");
        assert_eq!(
            critical.message,
            "Elevated donor-derived DNA indicates high rejection probability. Immediate intervention required."
        );
        let warning = classify_risk(12.3);
        assert_eq!(warning.title, "WARNING");
        assert_eq!(
            warning.message,
            "Moderate elevation in donor DNA levels. Close monitoring recommended."
        );
        let stable = classify_risk(4.8);
        assert_eq!(stable.title, "STABLE");
        assert_eq!(
            stable.message,
            "Patient biomarkers within normal expected ranges."
        );
    }

    #[test]
    fn negative_and_nan_fall_through_to_stable() {
        assert_eq!(classify_risk(-3.0).level, AlertLevel::Stable);
        assert_eq!(classify_risk(f64::NAN).level, AlertLevel::Stable);
        assert_eq!(classify_risk(f64::INFINITY).level, AlertLevel::Critical);
    }

    #[test]
    fn assess_latest_uses_last_reading() {
        init_test_logger();
        let h = history(&[5.5, 12.3, 25.7]);
        assert_eq!(assess_latest(&h).unwrap().level, AlertLevel::Critical);
        assert_eq!(assess_latest(&h[..2]).unwrap().level, AlertLevel::Warning);
        assert_eq!(assess_latest(&[]), Err(RiskError::EmptyHistory));
    }

    #[test]
    fn rejection_probability_labels() {
        assert_eq!(estimate_rejection_probability_range(25.0), "85-95");
        assert_eq!(estimate_rejection_probability_range(16.0), "70-85");
        assert_eq!(estimate_rejection_probability_range(12.0), "40-60");
        assert_eq!(estimate_rejection_probability_range(6.0), "15-30");
        assert_eq!(estimate_rejection_probability_range(3.0), "5-10");
        // band edges belong to the lower band
        assert_eq!(estimate_rejection_probability_range(20.0), "70-85");
        assert_eq!(estimate_rejection_probability_range(5.0), "5-10");
    }

    #[test]
    fn custom_policy_moves_thresholds() {
        let policy = RiskPolicy {
            critical_above: 10.0,
            warning_above: 4.0,
            ..RiskPolicy::STANDARD
        };
        assert_eq!(policy.classify(12.3).level, AlertLevel::Critical);
        assert_eq!(policy.classify(5.1).level, AlertLevel::Warning);
        assert_eq!(policy.classify(4.0).level, AlertLevel::Stable);
    }

    #[test]
    fn risk_level_parallels_alert_level() {
        for level in [AlertLevel::Stable, AlertLevel::Warning, AlertLevel::Critical] {
            let a = RiskAssessment::for_level(level);
            assert_eq!(a.level, level);
            assert_eq!(a.risk_level, RiskLevel::from(level));
        }
    }

    proptest! {
        #[test]
        fn classification_matches_ranges(x in -100.0f64..100.0) {
            let expected = if x > 15.0 {
                AlertLevel::Critical
            } else if x > 8.0 {
                AlertLevel::Warning
            } else {
                AlertLevel::Stable
            };
            prop_assert_eq!(classify_risk(x).level, expected);
        }

        #[test]
        fn higher_reading_never_lowers_risk(a in 0.0f64..50.0, b in 0.0f64..50.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!((classify_risk(lo).risk_level as u8) <= (classify_risk(hi).risk_level as u8));
        }
    }
}

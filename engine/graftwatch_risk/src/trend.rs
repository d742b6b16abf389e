//! Point-to-point and overall dd-cfDNA trend analysis.

use serde::{Deserialize, Serialize};

use graftwatch_types::Measurement;

use crate::policy::RiskPolicy;

/// Percent change in donor cfDNA from the previous draw to `measurements[index]`.
///
/// The first draw has nothing to compare against and reports `0.0`. A zero
/// previous value yields a non-finite result, which is returned as-is;
/// [`classify_trend_badge`] turns it into [`TrendBadgeKind::Unavailable`].
/// Returns `None` when `index` is past the end of the history.
pub fn compute_point_trend(measurements: &[Measurement], index: usize) -> Option<f64> {
    let current = measurements.get(index)?;
    if index == 0 {
        return Some(0.0);
    }
    let previous = &measurements[index - 1];
    let percent = (current.donor_cfdna - previous.donor_cfdna) / previous.donor_cfdna * 100.0;
    if !percent.is_finite() {
        log::warn!(
            "no trend for draw on {}: previous dd-cfDNA is {}",
            current.date,
            previous.donor_cfdna
        );
    }
    Some(percent)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TrendBadgeKind {
    Up,
    Down,
    Stable,
    /// Change could not be computed (previous value was zero)
    Unavailable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendBadge {
    pub kind: TrendBadgeKind,
    pub text: String,
}

impl RiskPolicy {
    pub fn trend_badge(&self, percent: f64) -> TrendBadge {
        let band = self.badge_band_percent;
        // Halves round away from zero; `{:.1}` alone would round them to even.
        let shown = (percent * 10.0).round() / 10.0;
        if !percent.is_finite() {
            TrendBadge {
                kind: TrendBadgeKind::Unavailable,
                text: "N/A".to_string(),
            }
        } else if percent > band {
            TrendBadge {
                kind: TrendBadgeKind::Up,
                text: format!("+{shown:.1}%"),
            }
        } else if percent < -band {
            TrendBadge {
                kind: TrendBadgeKind::Down,
                text: format!("{shown:.1}%"),
            }
        } else {
            TrendBadge {
                kind: TrendBadgeKind::Stable,
                text: "Stable".to_string(),
            }
        }
    }

    /// One badge per draw, index-aligned with `measurements`
    pub fn measurement_trends(&self, measurements: &[Measurement]) -> Vec<TrendBadge> {
        (0..measurements.len())
            .filter_map(|i| compute_point_trend(measurements, i))
            .map(|percent| self.trend_badge(percent))
            .collect()
    }

    /// Direction over the last two draws.
    ///
    /// There are two rising tiers and a single falling tier.
    pub fn trend_direction(&self, measurements: &[Measurement]) -> TrendDirection {
        let [.., previous, latest] = measurements else {
            return TrendDirection::InsufficientData;
        };
        let (latest, previous) = (latest.donor_cfdna, previous.donor_cfdna);

        if latest > previous * self.rapid_rise_ratio {
            TrendDirection::RisingRapidly
        } else if latest > previous * self.gradual_rise_ratio {
            TrendDirection::GradualIncrease
        } else if latest < previous * self.decrease_ratio {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}

pub fn classify_trend_badge(percent: f64) -> TrendBadge {
    RiskPolicy::STANDARD.trend_badge(percent)
}

pub fn measurement_trends(measurements: &[Measurement]) -> Vec<TrendBadge> {
    RiskPolicy::STANDARD.measurement_trends(measurements)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TrendDirection {
    #[serde(rename = "Rising rapidly")]
    RisingRapidly,
    #[serde(rename = "Gradual increase")]
    GradualIncrease,
    Decreasing,
    Stable,
    #[serde(rename = "Insufficient data")]
    InsufficientData,
}

impl TrendDirection {
    pub const fn label(self) -> &'static str {
        match self {
            TrendDirection::RisingRapidly => "Rising rapidly",
            TrendDirection::GradualIncrease => "Gradual increase",
            TrendDirection::Decreasing => "Decreasing",
            TrendDirection::Stable => "Stable",
            TrendDirection::InsufficientData => "Insufficient data",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn overall_trend_direction(measurements: &[Measurement]) -> TrendDirection {
    RiskPolicy::STANDARD.trend_direction(measurements)
}

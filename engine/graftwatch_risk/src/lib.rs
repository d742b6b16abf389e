//! Rejection-risk engine for transplant recipients monitored by donor-derived
//! cell-free DNA (dd-cfDNA).
//!
//! Every function here is pure: no I/O, no clock reads, no shared state.
//! Callers pass "today" explicitly where a date is involved.
//!
//! ```
//! use chrono::NaiveDate;
//! use graftwatch_risk::{classify_risk, overall_trend_direction, AlertLevel, TrendDirection};
//! use graftwatch_types::Measurement;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 11, 4).unwrap();
//! let history = vec![
//!     Measurement::new(day, 135.8, 12.3),
//!     Measurement::new(day, 280.5, 25.7),
//! ];
//! assert_eq!(classify_risk(25.7).level, AlertLevel::Critical);
//! assert_eq!(overall_trend_direction(&history), TrendDirection::RisingRapidly);
//! ```

pub mod assessment;
pub mod error;
pub mod policy;
pub mod schedule;
pub mod trend;

pub use assessment::{
    assess_latest, classify_risk, estimate_rejection_probability_range, AlertLevel,
    RiskAssessment, RiskLevel,
};
pub use error::{PolicyError, RiskError};
pub use policy::{ReviewSchedule, RiskPolicy};
pub use schedule::{months_since_transplant, next_review_date};
pub use trend::{
    classify_trend_badge, compute_point_trend, measurement_trends, overall_trend_direction,
    TrendBadge, TrendBadgeKind, TrendDirection,
};

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;
    use std::sync::Once;

    use chrono::NaiveDate;
    use env_logger::Builder;
    use graftwatch_types::Measurement;
    use log::LevelFilter;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            let _ = Builder::new()
                .filter_level(LevelFilter::Debug)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{}] {}: {}",
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .is_test(true)
                .try_init();
        });
    }

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Build a history of donor values on consecutive days
    pub fn history(donor: &[f64]) -> Vec<Measurement> {
        let start = date("2025-10-25");
        donor
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Measurement::new(
                    start + chrono::Days::new(i as u64),
                    v * 10.0 + 100.0,
                    v,
                )
            })
            .collect()
    }
}

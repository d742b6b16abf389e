use chrono::{Datelike, Days, NaiveDate};

use crate::assessment::AlertLevel;
use crate::policy::RiskPolicy;

impl RiskPolicy {
    pub fn review_interval_days(&self, level: AlertLevel) -> u32 {
        match level {
            AlertLevel::Critical => self.review.critical_days,
            AlertLevel::Warning => self.review.warning_days,
            AlertLevel::Stable => self.review.stable_days,
        }
    }

    pub fn next_review_date(&self, level: AlertLevel, today: NaiveDate) -> NaiveDate {
        let days = Days::new(u64::from(self.review_interval_days(level)));
        today.checked_add_days(days).unwrap_or(NaiveDate::MAX)
    }
}

/// Date of the next clinical review: 1 day out for Critical, 3 for Warning, 30 for Stable
pub fn next_review_date(level: AlertLevel, today: NaiveDate) -> NaiveDate {
    RiskPolicy::STANDARD.next_review_date(level, today)
}

/// Whole calendar months between transplant and `today`, never less than 1.
///
/// Only year and month are compared, so 31 Jan -> 1 Feb counts as one month.
pub fn months_since_transplant(transplant_date: NaiveDate, today: NaiveDate) -> u32 {
    let months = (i64::from(today.year()) - i64::from(transplant_date.year())) * 12
        + (i64::from(today.month()) - i64::from(transplant_date.month()));
    u32::try_from(months.max(1)).unwrap_or(u32::MAX)
}

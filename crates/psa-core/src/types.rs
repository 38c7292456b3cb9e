//! Common value types used throughout PSA RS

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date range (start_date to end_date)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start_date: start,
            end_date: end,
        }
    }

    pub fn duration_days(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }

    /// Whether the range ended strictly before the given date.
    pub fn ended_before(&self, date: NaiveDate) -> bool {
        self.end_date.map(|end| end < date).unwrap_or(false)
    }
}

/// Division with a defined 0 sentinel on a zero denominator.
///
/// Financial ratios (SPI, CPI, variance percentages) must never surface
/// NaN or infinity to callers.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

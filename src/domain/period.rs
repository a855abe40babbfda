//! Symbolic reporting periods and the concrete windows they resolve to.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{first_of_month, first_of_year, start_of_day};

/// Reporting period selector. Anything unrecognized is treated as `Month`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    #[default]
    Month,
    Year,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "week" => Period::Week,
            "year" => Period::Year,
            "month" => Period::Month,
            other => {
                tracing::debug!(selector = other, "unrecognized period selector, using month");
                Period::Month
            }
        }
    }

    /// Resolves the window ending at `now`.
    pub fn window(self, now: DateTime<Utc>) -> AggregationWindow {
        let today = now.date_naive();
        let (start, label) = match self {
            Period::Week => (today - Duration::days(7), "Last 7 Days".to_string()),
            Period::Year => (first_of_year(today), format!("Year {}", today.year())),
            Period::Month => (first_of_month(today), now.format("%B %Y").to_string()),
        };
        AggregationWindow {
            start: start_of_day(start),
            end: now,
            label,
        }
    }
}

/// A date range scoping one aggregation, inclusive at both ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregationWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub label: String,
}

impl AggregationWindow {
    pub fn resolve(selector: &str, now: DateTime<Utc>) -> Self {
        Period::from_selector(selector).window(now)
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

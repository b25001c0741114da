//! Data types for the contribution calendar.
//!
//! The raw types mirror the shape of the GraphQL response
//! (`weeks[].contributionDays[]`) and are plain deserialize targets. Derived
//! types (`WeekAggregate`, `DayRecord`) carry parsed dates and are produced by
//! the [`crate::weekly`] pipeline.

use chrono::NaiveDate;
use serde::Deserialize;

/// One calendar date with its contribution count, as reported by the API.
///
/// The date stays a string here; parsing happens in [`crate::weekly`] so a
/// malformed value aborts the aggregation rather than the deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub date: String,
    pub contribution_count: u64,
}

/// A server-reported week bucket.
///
/// The server's week boundaries are not guaranteed to match calendar weeks;
/// the aggregator re-derives each week's start from its earliest day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    #[serde(default)]
    pub contribution_days: Vec<ContributionDay>,
}

/// The full contribution calendar for the queried range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    #[serde(default)]
    pub weeks: Vec<Week>,
}

impl ContributionCalendar {
    /// Flattens all weeks into a single list of days, preserving order.
    pub fn flat_days(&self) -> Vec<ContributionDay> {
        self.weeks
            .iter()
            .flat_map(|week| week.contribution_days.iter().cloned())
            .collect()
    }

    /// Total number of contribution days in the calendar.
    pub fn day_count(&self) -> usize {
        self.weeks
            .iter()
            .map(|week| week.contribution_days.len())
            .sum()
    }
}

/// Weekly total keyed by the Sunday that starts the calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekAggregate {
    pub week_start: NaiveDate,
    pub total: u64,
}

/// A contribution day with its date parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub count: u64,
}

//! Weekly aggregation of daily contribution records.
//!
//! The server groups days into week buckets, but those buckets do not
//! necessarily start on a calendar week boundary. Each aggregate is therefore
//! keyed by the Sunday of its earliest day's calendar week, so a bucket that
//! straddles a week boundary still lands on a well-defined start date.

use chrono::{Datelike, Days, NaiveDate};

use crate::model::{ContributionDay, DayRecord, Week, WeekAggregate};

/// Error type for unparseable contribution dates.
///
/// A bad date poisons the earliest-day computation, so aggregation aborts
/// without producing partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedDateError {
    pub input: String,
}

impl std::fmt::Display for MalformedDateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to parse contribution date '{}': expected YYYY-MM-DD",
            self.input
        )
    }
}

impl std::error::Error for MalformedDateError {}

/// Returns the Sunday on or before the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as u64;
    date - Days::new(offset)
}

fn parse_date(raw: &str) -> Result<NaiveDate, MalformedDateError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| MalformedDateError {
        input: raw.to_string(),
    })
}

/// Folds server week buckets into Sunday-keyed weekly totals.
///
/// Input order is preserved and weeks without days are skipped, so the output
/// is at most as long as the input. Fails on the first unparseable date.
pub fn aggregate(weeks: &[Week]) -> Result<Vec<WeekAggregate>, MalformedDateError> {
    let mut aggregates = Vec::with_capacity(weeks.len());

    for week in weeks {
        let mut total = 0u64;
        let mut earliest: Option<NaiveDate> = None;

        for day in &week.contribution_days {
            let date = parse_date(&day.date)?;
            total += day.contribution_count;
            if earliest.is_none_or(|current| date < current) {
                earliest = Some(date);
            }
        }

        if let Some(first) = earliest {
            aggregates.push(WeekAggregate {
                week_start: week_start(first),
                total,
            });
        }
    }

    Ok(aggregates)
}

/// Selects the `k` most recent days, newest first.
///
/// Returns fewer than `k` records when the input is smaller; an empty input
/// yields an empty result.
pub fn recent_days(
    days: &[ContributionDay],
    k: usize,
) -> Result<Vec<DayRecord>, MalformedDateError> {
    let mut records = Vec::with_capacity(days.len());
    for day in days {
        records.push(DayRecord {
            date: parse_date(&day.date)?,
            count: day.contribution_count,
        });
    }

    records.sort_by(|a, b| b.date.cmp(&a.date));
    records.truncate(k);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, count: u64) -> ContributionDay {
        ContributionDay {
            date: date.to_string(),
            contribution_count: count,
        }
    }

    fn week(days: Vec<ContributionDay>) -> Week {
        Week {
            contribution_days: days,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_aligns_to_sunday() {
        // 2024-01-01 is a Monday
        assert_eq!(week_start(date(2024, 1, 1)), date(2023, 12, 31));
        // Saturday maps back six days
        assert_eq!(week_start(date(2024, 3, 9)), date(2024, 3, 3));
    }

    #[test]
    fn week_start_is_identity_on_sundays() {
        let sunday = date(2024, 3, 3);
        assert_eq!(week_start(sunday), sunday);
    }

    #[test]
    fn week_start_is_idempotent() {
        let d = date(2024, 7, 18);
        assert_eq!(week_start(week_start(d)), week_start(d));
    }

    #[test]
    fn week_start_handles_year_rollover() {
        // 2025-01-03 is a Friday; its week starts in the previous year
        assert_eq!(week_start(date(2025, 1, 3)), date(2024, 12, 29));
    }

    #[test]
    fn aggregate_keys_week_by_earliest_day() {
        let weeks = vec![week(vec![day("2024-01-01", 3), day("2024-01-02", 5)])];

        let aggregates = aggregate(&weeks).unwrap();
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].week_start, date(2023, 12, 31));
        assert_eq!(aggregates[0].total, 8);
    }

    #[test]
    fn aggregate_skips_empty_weeks() {
        let weeks = vec![
            week(vec![day("2024-03-04", 1)]),
            week(vec![]),
            week(vec![day("2024-03-11", 2)]),
        ];

        let aggregates = aggregate(&weeks).unwrap();
        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].total, 1);
        assert_eq!(aggregates[1].total, 2);
    }

    #[test]
    fn aggregate_preserves_input_order() {
        let weeks = vec![
            week(vec![day("2024-03-11", 2)]),
            week(vec![day("2024-03-04", 1)]),
        ];

        let aggregates = aggregate(&weeks).unwrap();
        assert_eq!(aggregates[0].week_start, date(2024, 3, 10));
        assert_eq!(aggregates[1].week_start, date(2024, 3, 3));
    }

    #[test]
    fn aggregate_uses_earliest_day_even_out_of_order() {
        // Malformed upstream bucket: days listed newest-first and spanning
        // a week boundary. The key still comes from the earliest day.
        let weeks = vec![week(vec![
            day("2024-03-10", 4),
            day("2024-03-09", 1),
        ])];

        let aggregates = aggregate(&weeks).unwrap();
        assert_eq!(aggregates[0].week_start, date(2024, 3, 3));
        assert_eq!(aggregates[0].total, 5);
    }

    #[test]
    fn aggregate_conserves_total_contributions() {
        let weeks = vec![
            week(vec![day("2024-02-26", 7), day("2024-02-27", 0)]),
            week(vec![]),
            week(vec![
                day("2024-03-04", 2),
                day("2024-03-05", 3),
                day("2024-03-06", 11),
            ]),
        ];

        let day_sum: u64 = weeks
            .iter()
            .flat_map(|w| w.contribution_days.iter())
            .map(|d| d.contribution_count)
            .sum();
        let aggregate_sum: u64 = aggregate(&weeks).unwrap().iter().map(|a| a.total).sum();
        assert_eq!(aggregate_sum, day_sum);
    }

    #[test]
    fn aggregate_fails_fast_on_malformed_date() {
        let weeks = vec![
            week(vec![day("2024-03-04", 1)]),
            week(vec![day("2024-13-40", 9)]),
        ];

        let err = aggregate(&weeks).unwrap_err();
        assert_eq!(err.input, "2024-13-40");
    }

    #[test]
    fn recent_days_sorts_descending_and_truncates() {
        let days = vec![
            day("2024-03-04", 1),
            day("2024-03-06", 3),
            day("2024-03-05", 2),
            day("2024-03-07", 4),
        ];

        let recent = recent_days(&days, 3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].date, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(recent[1].date, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
        assert_eq!(recent[2].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn recent_days_returns_all_when_fewer_than_k() {
        let days = vec![
            day("2024-03-04", 1),
            day("2024-03-05", 2),
            day("2024-03-06", 3),
        ];

        let recent = recent_days(&days, 5).unwrap();
        assert_eq!(recent.len(), 3);
        assert!(recent.windows(2).all(|pair| pair[0].date > pair[1].date));
    }

    #[test]
    fn recent_days_empty_input_is_not_an_error() {
        assert!(recent_days(&[], 5).unwrap().is_empty());
    }

    #[test]
    fn recent_days_rejects_malformed_date() {
        let days = vec![day("not-a-date", 1)];
        let err = recent_days(&days, 5).unwrap_err();
        assert_eq!(err.input, "not-a-date");
    }
}

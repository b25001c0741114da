//! In-memory contribution source for tests.

use chrono::{DateTime, Utc};

use super::{ContributionSource, FetchError};
use crate::model::{ContributionCalendar, ContributionDay, Week};

/// Contribution source that returns a canned calendar or a canned error.
pub struct MockSource {
    result: Result<ContributionCalendar, FetchError>,
}

impl MockSource {
    /// Creates a source that yields the given calendar.
    pub fn with_calendar(calendar: ContributionCalendar) -> Self {
        Self {
            result: Ok(calendar),
        }
    }

    /// Creates a source that fails with the given error.
    pub fn with_error(error: FetchError) -> Self {
        Self { result: Err(error) }
    }

    /// A small two-week calendar spanning a month boundary.
    pub fn typical_calendar() -> ContributionCalendar {
        let day = |date: &str, count: u64| ContributionDay {
            date: date.to_string(),
            contribution_count: count,
        };

        ContributionCalendar {
            weeks: vec![
                Week {
                    contribution_days: vec![
                        day("2024-02-25", 1),
                        day("2024-02-26", 0),
                        day("2024-02-27", 4),
                        day("2024-02-28", 2),
                        day("2024-02-29", 0),
                        day("2024-03-01", 3),
                        day("2024-03-02", 0),
                    ],
                },
                Week {
                    contribution_days: vec![
                        day("2024-03-03", 5),
                        day("2024-03-04", 1),
                        day("2024-03-05", 0),
                    ],
                },
            ],
        }
    }
}

impl ContributionSource for MockSource {
    fn fetch(
        &self,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<ContributionCalendar, FetchError> {
        self.result.clone()
    }
}

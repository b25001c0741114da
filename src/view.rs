//! UI-agnostic view building.
//!
//! Turns aggregates and day records into plain label/value series and display
//! lines. The TUI widgets only map these onto ratatui types, so the formatting
//! rules stay testable without a terminal.

use crate::model::{DayRecord, WeekAggregate};

/// How chart bars are labeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelMode {
    /// Month abbreviation, emitted only when it changes from the previous bar.
    #[default]
    Month,
    /// Exact week start as `MM/DD` on every bar.
    Date,
}

impl LabelMode {
    pub fn toggled(self) -> Self {
        match self {
            LabelMode::Month => LabelMode::Date,
            LabelMode::Date => LabelMode::Month,
        }
    }
}

impl std::fmt::Display for LabelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelMode::Month => write!(f, "month"),
            LabelMode::Date => write!(f, "date"),
        }
    }
}

/// Builds one label per aggregate.
///
/// In month mode consecutive weeks of the same month get an empty label so the
/// month name appears once per run of bars.
pub fn bar_labels(aggregates: &[WeekAggregate], mode: LabelMode) -> Vec<String> {
    match mode {
        LabelMode::Month => {
            let mut labels = Vec::with_capacity(aggregates.len());
            let mut last_month = String::new();
            for aggregate in aggregates {
                let month = aggregate.week_start.format("%b").to_string();
                if month != last_month {
                    labels.push(month.clone());
                    last_month = month;
                } else {
                    labels.push(String::new());
                }
            }
            labels
        }
        LabelMode::Date => aggregates
            .iter()
            .map(|aggregate| aggregate.week_start.format("%m/%d").to_string())
            .collect(),
    }
}

/// Equal-length label and value series for the bar chart.
pub fn bar_series(aggregates: &[WeekAggregate], mode: LabelMode) -> (Vec<String>, Vec<u64>) {
    let labels = bar_labels(aggregates, mode);
    let values = aggregates.iter().map(|aggregate| aggregate.total).collect();
    (labels, values)
}

/// Display lines for the recent-days panel, one per day.
pub fn recent_lines(days: &[DayRecord]) -> Vec<String> {
    days.iter()
        .map(|day| format!("{}: {}", day.date.format("%Y-%m-%d"), day.count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn aggregate(y: i32, m: u32, d: u32, total: u64) -> WeekAggregate {
        WeekAggregate {
            week_start: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            total,
        }
    }

    #[test]
    fn month_labels_collapse_repeated_months() {
        let aggregates = vec![
            aggregate(2024, 3, 3, 1),
            aggregate(2024, 3, 10, 2),
            aggregate(2024, 3, 17, 3),
        ];

        assert_eq!(
            bar_labels(&aggregates, LabelMode::Month),
            vec!["Mar".to_string(), String::new(), String::new()]
        );
    }

    #[test]
    fn month_labels_reappear_on_month_change() {
        let aggregates = vec![
            aggregate(2024, 2, 18, 1),
            aggregate(2024, 2, 25, 2),
            aggregate(2024, 3, 3, 3),
            aggregate(2024, 3, 10, 4),
        ];

        assert_eq!(
            bar_labels(&aggregates, LabelMode::Month),
            vec![
                "Feb".to_string(),
                String::new(),
                "Mar".to_string(),
                String::new()
            ]
        );
    }

    #[test]
    fn date_labels_are_never_deduplicated() {
        let aggregates = vec![aggregate(2024, 3, 3, 1), aggregate(2024, 3, 10, 2)];

        assert_eq!(
            bar_labels(&aggregates, LabelMode::Date),
            vec!["03/03".to_string(), "03/10".to_string()]
        );
    }

    #[test]
    fn bar_series_pairs_labels_with_totals() {
        let aggregates = vec![aggregate(2024, 3, 3, 7), aggregate(2024, 3, 10, 0)];

        let (labels, values) = bar_series(&aggregates, LabelMode::Date);
        assert_eq!(labels.len(), values.len());
        assert_eq!(values, vec![7, 0]);
    }

    #[test]
    fn recent_lines_formats_date_and_count() {
        let days = vec![DayRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            count: 4,
        }];

        assert_eq!(recent_lines(&days), vec!["2024-03-07: 4".to_string()]);
    }

    #[test]
    fn label_mode_toggles_between_variants() {
        assert_eq!(LabelMode::Month.toggled(), LabelMode::Date);
        assert_eq!(LabelMode::Date.toggled(), LabelMode::Month);
    }
}

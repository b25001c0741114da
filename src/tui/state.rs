//! Application state.

use crate::model::{DayRecord, WeekAggregate};
use crate::view::{self, LabelMode};

/// State shared between input handling and rendering.
///
/// Holds the fully computed report; widgets read the pre-built label/value
/// series and never touch the pipeline.
pub struct AppState {
    pub aggregates: Vec<WeekAggregate>,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub recent: Vec<String>,
    pub recent_count: usize,
    pub label_mode: LabelMode,
    pub window_title: String,
    pub total_contributions: u64,
    pub show_help: bool,
}

impl AppState {
    pub fn new(
        aggregates: Vec<WeekAggregate>,
        recent_days: Vec<DayRecord>,
        label_mode: LabelMode,
        window_title: String,
    ) -> Self {
        let (labels, values) = view::bar_series(&aggregates, label_mode);
        let total_contributions = values.iter().sum();
        Self {
            aggregates,
            labels,
            values,
            recent: view::recent_lines(&recent_days),
            recent_count: recent_days.len(),
            label_mode,
            window_title,
            total_contributions,
            show_help: false,
        }
    }

    /// Switches between month and exact-date labels and rebuilds the series.
    pub fn toggle_label_mode(&mut self) {
        self.label_mode = self.label_mode.toggled();
        self.labels = view::bar_labels(&self.aggregates, self.label_mode);
    }
}

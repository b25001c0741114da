//! Time-window parser for the CLI `--window` argument.
//!
//! Supported formats:
//! - Days: `45d`
//! - Weeks: `6w`
//! - Months: `3m`
//! - Years: `1y`

use chrono::{DateTime, Days, Months, Utc};

/// Error type for window parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowParseError {
    pub input: String,
}

impl std::fmt::Display for WindowParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to parse window '{}': expected a positive number followed by \
             d, w, m or y (e.g. 45d, 6w, 3m, 1y)",
            self.input
        )
    }
}

impl std::error::Error for WindowParseError {}

/// Queried time window, counted back from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Days(u32),
    Weeks(u32),
    Months(u32),
    Years(u32),
}

impl Window {
    /// Returns the start of the window ending at `end`.
    pub fn start_from(&self, end: DateTime<Utc>) -> DateTime<Utc> {
        match *self {
            Window::Days(n) => end - Days::new(u64::from(n)),
            Window::Weeks(n) => end - Days::new(7 * u64::from(n)),
            Window::Months(n) => end - Months::new(n),
            Window::Years(n) => end - Months::new(12 * n),
        }
    }

    /// Human-readable description, e.g. "Last 3 Months".
    pub fn describe(&self) -> String {
        let (n, unit) = match *self {
            Window::Days(n) => (n, "Day"),
            Window::Weeks(n) => (n, "Week"),
            Window::Months(n) => (n, "Month"),
            Window::Years(n) => (n, "Year"),
        };
        if n == 1 {
            format!("Last {} {}", n, unit)
        } else {
            format!("Last {} {}s", n, unit)
        }
    }
}

/// Parses a window string like `45d`, `6w`, `3m` or `1y`.
pub fn parse_window(input: &str) -> Result<Window, WindowParseError> {
    let trimmed = input.trim();

    let error = || WindowParseError {
        input: input.to_string(),
    };

    if trimmed.len() < 2 || !trimmed.is_ascii() {
        return Err(error());
    }

    let (number, unit) = trimmed.split_at(trimmed.len() - 1);
    let value: u32 = number.parse().map_err(|_| error())?;
    if value == 0 || value > 9999 {
        return Err(error());
    }

    match unit {
        "d" => Ok(Window::Days(value)),
        "w" => Ok(Window::Weeks(value)),
        "m" => Ok(Window::Months(value)),
        "y" => Ok(Window::Years(value)),
        _ => Err(error()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_each_unit() {
        assert_eq!(parse_window("45d").unwrap(), Window::Days(45));
        assert_eq!(parse_window("6w").unwrap(), Window::Weeks(6));
        assert_eq!(parse_window("3m").unwrap(), Window::Months(3));
        assert_eq!(parse_window("1y").unwrap(), Window::Years(1));
    }

    #[test]
    fn parses_with_surrounding_whitespace() {
        assert_eq!(parse_window(" 2m ").unwrap(), Window::Months(2));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_window("").is_err());
        assert!(parse_window("m").is_err());
        assert!(parse_window("3x").is_err());
        assert!(parse_window("-3m").is_err());
        assert!(parse_window("0d").is_err());
        assert!(parse_window("three-m").is_err());
    }

    #[test]
    fn start_from_subtracts_days_and_weeks() {
        let start = Window::Days(14).start_from(end());
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());

        let start = Window::Weeks(2).start_from(end());
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn start_from_subtracts_calendar_months() {
        let start = Window::Months(3).start_from(end());
        assert_eq!(start, Utc.with_ymd_and_hms(2023, 12, 15, 12, 0, 0).unwrap());

        let start = Window::Years(1).start_from(end());
        assert_eq!(start, Utc.with_ymd_and_hms(2023, 3, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn describe_pluralizes() {
        assert_eq!(Window::Months(3).describe(), "Last 3 Months");
        assert_eq!(Window::Years(1).describe(), "Last 1 Year");
        assert_eq!(Window::Days(45).describe(), "Last 45 Days");
    }
}

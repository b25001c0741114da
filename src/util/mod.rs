//! Utility functions.

mod window;

pub use window::{Window, WindowParseError, parse_window};

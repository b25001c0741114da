//! ghgraph - GitHub contribution chart for the terminal.
//!
//! Fetches the authenticated user's contribution calendar from the GitHub
//! GraphQL API, folds the daily records into Sunday-aligned weekly totals and
//! renders them as an interactive bar chart with a recent-days summary panel.

pub mod github;
pub mod model;
pub mod tui;
pub mod util;
pub mod view;
pub mod weekly;

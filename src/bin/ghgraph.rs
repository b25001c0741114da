//! ghgraph - GitHub contribution chart for the terminal.
//!
//! Fetches the authenticated user's contribution calendar and shows weekly
//! totals as a bar chart with a recent-days panel.
//!
//! Usage:
//!   ghgraph                  # last 3 months, month labels
//!   ghgraph -w 1y            # last year
//!   ghgraph -w 6w --labels date
//!   ghgraph -d 7             # 7 days in the recent panel
//!
//! Requires a GitHub token in GITHUB_TOKEN or GH_TOKEN.

use chrono::Utc;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use ghgraph::github::{ContributionSource, GithubSource};
use ghgraph::tui::{App, AppState};
use ghgraph::util::parse_window;
use ghgraph::view::LabelMode;
use ghgraph::weekly;

/// GitHub weekly contribution chart.
#[derive(Parser)]
#[command(name = "ghgraph", about = "GitHub contribution chart for the terminal")]
struct Args {
    /// Queried time window: Nd, Nw, Nm or Ny (e.g. 45d, 6w, 3m, 1y).
    #[arg(short = 'w', long = "window", value_name = "WINDOW", default_value = "3m")]
    window: String,

    /// Bar label mode.
    #[arg(long = "labels", value_enum, default_value = "month")]
    labels: LabelArg,

    /// Number of days shown in the recent-days panel.
    #[arg(short = 'd', long = "days", value_name = "N", default_value_t = 5)]
    days: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LabelArg {
    /// Month abbreviation, shown once per run of bars.
    Month,
    /// Week start as MM/DD on every bar.
    Date,
}

impl From<LabelArg> for LabelMode {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::Month => LabelMode::Month,
            LabelArg::Date => LabelMode::Date,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let window = match parse_window(&args.window) {
        Ok(window) => window,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.days == 0 {
        eprintln!("Error: --days must be at least 1");
        std::process::exit(1);
    }

    let source = match GithubSource::from_env() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let to = Utc::now();
    let from = window.start_from(to);

    let calendar = match source.fetch(from, to) {
        Ok(calendar) => calendar,
        Err(e) => {
            eprintln!("Error fetching contributions: {}", e);
            std::process::exit(1);
        }
    };

    let aggregates = match weekly::aggregate(&calendar.weeks) {
        Ok(aggregates) => aggregates,
        Err(e) => {
            eprintln!("Error aggregating contributions: {}", e);
            std::process::exit(1);
        }
    };

    let days = calendar.flat_days();
    if days.is_empty() {
        println!("No contributions found in the {}.", window.describe().to_lowercase());
        return;
    }

    let recent = match weekly::recent_days(&days, args.days) {
        Ok(recent) => recent,
        Err(e) => {
            eprintln!("Error selecting recent days: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(aggregates, recent, args.labels.into(), window.describe());
    let app = App::new(state);

    if let Err(e) = app.run() {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

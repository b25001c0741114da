//! GitHub GraphQL contribution source.
//!
//! The `ContributionSource` trait is the seam between the pipeline and the
//! network: production code talks to the GraphQL endpoint through
//! [`GithubSource`], tests plug in [`mock::MockSource`].

pub mod mock;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::ContributionCalendar;

const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";
const REQUEST_TIMEOUT_SECS: u64 = 30;

const CONTRIBUTIONS_QUERY: &str = r#"
query($from: DateTime!, $to: DateTime!) {
  viewer {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}
"#;

/// Error types that can occur while fetching contribution data.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// No usable token in the environment.
    Auth(String),
    /// Network-level failure talking to the endpoint.
    Transport(String),
    /// The endpoint answered, but with an error payload.
    Api(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Auth(msg) => write!(f, "Authentication error: {}", msg),
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Api(msg) => write!(f, "API error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Abstraction for contribution-calendar data sources.
///
/// Object-safe so the binary can hold a `Box<dyn ContributionSource>` and the
/// tests can substitute a mock.
pub trait ContributionSource {
    /// Fetches the contribution calendar for the given time range.
    fn fetch(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<ContributionCalendar, FetchError>;
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    viewer: Viewer,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Viewer {
    contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: ContributionCalendar,
}

/// Extracts the calendar from a raw GraphQL response body.
fn decode_response(body: &str) -> Result<ContributionCalendar, FetchError> {
    let response: GraphQlResponse = serde_json::from_str(body)
        .map_err(|err| FetchError::Api(format!("Malformed response body: {}", err)))?;

    if let Some(error) = response.errors.first() {
        return Err(FetchError::Api(error.message.clone()));
    }

    let data = response
        .data
        .ok_or_else(|| FetchError::Api("Response contains no data".to_string()))?;

    Ok(data.viewer.contributions_collection.contribution_calendar)
}

/// Contribution source backed by the GitHub GraphQL API.
pub struct GithubSource {
    client: reqwest::blocking::Client,
    token: String,
    endpoint: String,
}

impl GithubSource {
    /// Creates a source authenticated with `GITHUB_TOKEN` or `GH_TOKEN`.
    pub fn from_env() -> Result<Self, FetchError> {
        let token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .map_err(|_| {
                FetchError::Auth("GITHUB_TOKEN or GH_TOKEN must be set".to_string())
            })?;

        if token.trim().is_empty() {
            return Err(FetchError::Auth("Token is empty".to_string()));
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("ghgraph/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|err| FetchError::Transport(format!("Failed to build client: {}", err)))?;

        Ok(Self {
            client,
            token,
            endpoint: GRAPHQL_ENDPOINT.to_string(),
        })
    }
}

impl ContributionSource for GithubSource {
    fn fetch(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<ContributionCalendar, FetchError> {
        let body = serde_json::json!({
            "query": CONTRIBUTIONS_QUERY,
            "variables": {
                "from": from.to_rfc3339(),
                "to": to.to_rfc3339(),
            },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api(format!(
                "GraphQL request failed with HTTP {}",
                status
            )));
        }

        let text = response
            .text()
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let calendar = decode_response(&text)?;
        tracing::debug!(
            weeks = calendar.weeks.len(),
            days = calendar.day_count(),
            "fetched contribution calendar"
        );
        Ok(calendar)
    }
}

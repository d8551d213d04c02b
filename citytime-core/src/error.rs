use reqwest::StatusCode;

/// Why a single city's weather could not be fetched.
///
/// The dashboard never surfaces these to clients; a failed fetch becomes
/// `weather: null` for that city.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather provider responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weather response has no current conditions")]
    MissingCurrent,

    #[error("unrecognised observation time '{0}'")]
    InvalidTime(String),
}

/// Failure of the aggregation as a whole, unrelated to any single fetch.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("city '{city}' has unknown timezone '{timezone}'")]
    UnknownTimezone { city: String, timezone: String },
}

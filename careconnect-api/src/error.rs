use careconnect_config::ConfigError;

/// Errors that escape to the page boundary. Write-path failures never take
/// this form; they are folded into [`crate::Outcome::Failure`] at the
/// dispatch site.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),
    // The raw message is what the page-level error boundary displays, so it
    // matches the UI copy exactly.
    #[error("Failed to fetch {entity}")]
    Fetch {
        entity: &'static str,
        status: reqwest::StatusCode,
    },
}

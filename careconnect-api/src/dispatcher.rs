//! HTTP execution and outcome mapping.
//!
//! Submissions follow a server-driven form model: a failed request is
//! returned to the caller as a value, a successful one transfers control
//! (invalidate the list view, navigate to it). Callers branch only on the
//! presence of a failure.

use careconnect_config::Config;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::error::ApiError;

/// The two list views of the UI. A route knows both the API collection it
/// is backed by and the page the user lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Programs,
    Residents,
}

impl Route {
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Programs => "programs",
            Self::Residents => "residents",
        }
    }

    #[must_use]
    pub const fn page(self) -> &'static str {
        match self {
            Self::Programs => "/programs",
            Self::Residents => "/residents",
        }
    }
}

/// Cache invalidation and navigation are owned by the UI shell, not by this
/// crate; the dispatcher only signals them.
pub trait Navigator {
    fn invalidate(&self, route: Route);
    fn navigate(&self, route: Route);
}

/// Result of a form submission. Success carries no payload: by the time the
/// caller sees [`Outcome::Redirected`], control has already moved to the
/// list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Failure { message: String },
    Redirected(Route),
}

impl Outcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Thin client over the facility API. Holds the injected configuration;
/// construction is cheap and the client is shared per page.
pub struct ApiClient {
    http: reqwest::Client,
    api_url: String,
    api_token: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_token: config.api_token.clone(),
        }
    }

    // The original front-end concatenates `{API_URL}programs` verbatim, so
    // the base URL carries the trailing slash.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// POSTs a JSON payload. Non-2xx statuses and transport errors are both
    /// folded into [`Outcome::Failure`] with the caller's static message;
    /// no response body is parsed and nothing is retried.
    pub(crate) async fn submit<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        failure_message: &str,
        route: Route,
        navigator: &impl Navigator,
    ) -> Outcome {
        let response = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await;
        match response {
            Ok(response) if response.status().is_success() => {
                debug!("POST {path} accepted, returning to {}", route.page());
                navigator.invalidate(route);
                navigator.navigate(route);
                Outcome::Redirected(route)
            }
            Ok(response) => {
                error!("POST {path} rejected with status {}", response.status());
                Outcome::failure(failure_message)
            }
            Err(err) => {
                error!("POST {path} failed: {err}");
                Outcome::failure(failure_message)
            }
        }
    }

    /// GETs a collection. A non-2xx response is fatal to the page load and
    /// propagates; the page boundary offers a manual retry.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        route: Route,
        entity: &'static str,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.endpoint(route.collection()))
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Fetch {
                entity,
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_know_their_paths() {
        assert_eq!(Route::Programs.collection(), "programs");
        assert_eq!(Route::Programs.page(), "/programs");
        assert_eq!(Route::Residents.collection(), "residents");
        assert_eq!(Route::Residents.page(), "/residents");
    }

    #[test]
    fn outcome_discriminates_on_failure() {
        assert!(Outcome::failure("nope").is_failure());
        assert!(!Outcome::Redirected(Route::Programs).is_failure());
    }
}

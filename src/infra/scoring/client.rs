// Responsible for all communication with the remote scoring service.

use crate::domain::model::PuzzleId;
use crate::infra::config;
use crate::infra::scoring::{ScoringClient, ScoringError};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// Talks to the scoring service over plain HTTP GET:
/// `<service_url>?puzzle=<id>&guess=<guess>`.
#[derive(Clone)]
pub struct HttpScoringClient {
    http: reqwest::Client,
    service_url: String,
}

impl HttpScoringClient {
    pub fn new(service_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            service_url: service_url.into(),
        })
    }

    /// Builds a client from `JOTTO_SERVICE_URL` / `JOTTO_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(config::service_url(), config::request_timeout()?)
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    fn target(&self) -> Result<Url, ScoringError> {
        Url::parse(&self.service_url).map_err(|e| ScoringError::Address {
            target: self.service_url.clone(),
            reason: e.to_string(),
        })
    }

    fn classify(&self, err: reqwest::Error) -> ScoringError {
        if err.is_builder() {
            ScoringError::Address {
                target: self.service_url.clone(),
                reason: err.to_string(),
            }
        } else {
            ScoringError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl ScoringClient for HttpScoringClient {
    async fn submit(&self, guess: &str, puzzle_id: PuzzleId) -> Result<String, ScoringError> {
        let url = self.target()?;
        let puzzle = puzzle_id.to_string();

        let response = self
            .http
            .get(url)
            .query(&[("puzzle", puzzle.as_str()), ("guess", guess)])
            .send()
            .await
            .map_err(|e| self.classify(e))?
            .error_for_status()
            .map_err(|e| self.classify(e))?;

        let body = response.text().await.map_err(|e| self.classify(e))?;

        // The reply is the first non-blank line; an empty body is left for the parser to reject.
        let reply = body
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string();

        tracing::debug!(%puzzle_id, guess, reply = %reply, "scoring service replied");
        Ok(reply)
    }
}

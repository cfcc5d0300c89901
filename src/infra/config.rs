//! Centralized configuration (environment variables + defaults).

use crate::domain::model::PuzzleId;
use anyhow::Context;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_SERVICE_URL: &str = "http://courses.csail.mit.edu/6.005/jotto.py";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_API_ADDR: &str = "0.0.0.0:3000";

/// Scoring service endpoint. The puzzle and guess are sent as query parameters.
pub fn service_url() -> String {
    std::env::var("JOTTO_SERVICE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string())
}

/// Per-request timeout for the scoring service.
pub fn request_timeout() -> anyhow::Result<Duration> {
    let secs = match std::env::var("JOTTO_REQUEST_TIMEOUT_SECS") {
        Ok(v) => v
            .parse::<u64>()
            .with_context(|| format!("JOTTO_REQUEST_TIMEOUT_SECS must be a valid u64, got {:?}", v))?
            .max(1),
        Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
    };
    Ok(Duration::from_secs(secs))
}

/// Puzzle that is current when the process starts.
pub fn default_puzzle() -> anyhow::Result<PuzzleId> {
    match std::env::var("JOTTO_DEFAULT_PUZZLE") {
        Ok(v) => {
            let n = v
                .parse::<i64>()
                .with_context(|| format!("JOTTO_DEFAULT_PUZZLE must be an integer, got {:?}", v))?;
            PuzzleId::new(n)
                .ok_or_else(|| anyhow::anyhow!("JOTTO_DEFAULT_PUZZLE must be positive, got {}", n))
        }
        Err(_) => Ok(PuzzleId::MIN),
    }
}

/// Bind address for the HTTP front end.
pub fn api_addr() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var("JOTTO_API_ADDR").unwrap_or_else(|_| DEFAULT_API_ADDR.to_string());
    raw.parse::<SocketAddr>()
        .with_context(|| format!("JOTTO_API_ADDR is not a socket address: {}", raw))
}

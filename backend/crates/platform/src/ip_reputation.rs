//! IP Reputation Lookup
//!
//! Advisory VPN/proxy/datacenter detection used by the claim anti-fraud
//! checks. Queries the ip-api.com line endpoint (plain-text, one field per
//! line) with a short timeout.
//!
//! ## Security Model
//! This signal is best-effort only. A lookup failure, timeout or disabled
//! config must never block the caller's main flow; callers treat errors as
//! "not flagged" and log them. The real enforcement boundary is the
//! transactional rate limit and atomic crediting in the ledger.

use std::net::IpAddr;
use std::time::Duration;

use thiserror::Error;

use crate::client::is_public_ip;

/// Default lookup endpoint (line format: one value per line)
const DEFAULT_ENDPOINT: &str = "http://ip-api.com/line";

/// Fields requested from the endpoint, in response-line order
const FIELDS: &str = "status,proxy,hosting";

/// Reputation lookup configuration
#[derive(Debug, Clone)]
pub struct IpReputationConfig {
    /// Master switch; disabled lookups return [`IpVerdict::Skipped`]
    pub enabled: bool,
    /// Base endpoint URL without trailing slash
    pub endpoint: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for IpReputationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(2),
        }
    }
}

impl IpReputationConfig {
    /// Config with lookups turned off (local development, tests)
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Outcome of a reputation lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVerdict {
    /// Looked up, no anonymizer/datacenter signal
    Clean,
    /// Looked up and flagged
    Flagged { proxy: bool, hosting: bool },
    /// Not looked up (disabled, or non-public address)
    Skipped,
}

impl IpVerdict {
    #[inline]
    pub fn is_flagged(&self) -> bool {
        matches!(self, IpVerdict::Flagged { .. })
    }
}

/// Reputation lookup errors
///
/// Callers should treat these as non-blocking (log and continue).
#[derive(Debug, Error)]
pub enum IpReputationError {
    #[error("Reputation lookup failed: {0}")]
    RequestFailed(String),

    #[error("Reputation service returned an unusable response")]
    MalformedResponse,
}

/// Look up the reputation of a client address
///
/// Private/loopback/link-local addresses and disabled configs short-circuit
/// to [`IpVerdict::Skipped`] without any network traffic.
pub async fn lookup(
    config: &IpReputationConfig,
    ip: IpAddr,
) -> Result<IpVerdict, IpReputationError> {
    if !config.enabled || !is_public_ip(&ip) {
        return Ok(IpVerdict::Skipped);
    }

    let url = format!("{}/{}?fields={}", config.endpoint, ip, FIELDS);

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| IpReputationError::RequestFailed(e.to_string()))?;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| IpReputationError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(IpReputationError::RequestFailed(format!(
            "HTTP {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| IpReputationError::RequestFailed(e.to_string()))?;

    parse_verdict(&body)
}

/// Parse the line-format response body: status, proxy, hosting
fn parse_verdict(body: &str) -> Result<IpVerdict, IpReputationError> {
    let mut lines = body.lines().map(str::trim);

    match lines.next() {
        Some("success") => {}
        _ => return Err(IpReputationError::MalformedResponse),
    }

    let proxy = parse_bool(lines.next())?;
    let hosting = parse_bool(lines.next())?;

    if proxy || hosting {
        Ok(IpVerdict::Flagged { proxy, hosting })
    } else {
        Ok(IpVerdict::Clean)
    }
}

fn parse_bool(line: Option<&str>) -> Result<bool, IpReputationError> {
    match line {
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        _ => Err(IpReputationError::MalformedResponse),
    }
}

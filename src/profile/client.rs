//! HTTP client for the property-profile backend.
//!
//! One GET per search:
//!
//! ```text
//! GET {base_url}/api/property-profile?address=<trimmed>[&radius_km=<r>]
//! ```
//!
//! A 404 means the address could not be geocoded. Anything else that isn't a
//! 2xx with a well-formed body is a generic failure.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::PropertyProfile;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const MIN_RADIUS_KM: f64 = 0.5;
pub const MAX_RADIUS_KM: f64 = 10.0;

/// Errors from a profile fetch.
#[derive(Debug)]
pub enum FetchError {
    /// Connection-level failure (DNS, refused, reset).
    Network(String),
    /// Backend answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not a valid profile.
    Parse(String),
    /// No answer within the configured timeout.
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
            FetchError::Timeout => write!(f, "request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Everything the fetcher needs for one lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRequest {
    /// Already trimmed, never empty.
    pub address: String,
    pub radius_km: Option<f64>,
}

/// Returns the radius only if it lies within the backend's accepted range.
pub fn valid_radius(radius_km: Option<f64>) -> Option<f64> {
    radius_km.filter(|r| r.is_finite() && (MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(r))
}

#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_profile(&self, request: &ProfileRequest) -> Result<PropertyProfile, FetchError>;
}

pub struct HttpProfileClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpProfileClient {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ProfileFetcher for HttpProfileClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_profile(&self, request: &ProfileRequest) -> Result<PropertyProfile, FetchError> {
        let url = format!("{}/api/property-profile", self.base_url);

        let mut query: Vec<(&str, String)> = vec![("address", request.address.trim().to_string())];
        if let Some(radius) = valid_radius(request.radius_km) {
            query.push(("radius_km", radius.to_string()));
        } else if let Some(radius) = request.radius_km {
            debug!("Omitting out-of-range radius {radius} km");
        }

        info!("Profile request: address={:?}, radius_km={:?}", request.address, request.radius_km);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Profile response status: {status}");

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Profile API error: {} - {}", status.as_u16(), message);
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_str::<PropertyProfile>(&body).map_err(|e| {
            warn!("Malformed profile body: {e}");
            FetchError::Parse(e.to_string())
        })
    }
}

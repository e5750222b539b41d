//! EU VIES REST API client.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::core::{ViesError, ViesLookup, ViesTransport};

/// Public VIES REST endpoint. Lookups go to `{base}/ms/{cc}/vat/{number}`.
pub const VIES_BASE_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api";

/// VIES API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViesApiResponse {
    is_valid: Option<bool>,
    request_date: Option<String>,
    user_error: Option<String>,
    name: Option<String>,
    address: Option<String>,
    // Error fields
    error_wrappers: Option<Vec<ViesErrorWrapper>>,
}

#[derive(Debug, Deserialize)]
struct ViesErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

/// Live VIES client over HTTPS.
///
/// The VIES API has no authentication; it is a free public service, and
/// a slow one. Every request is bounded by the timeout given at
/// construction.
#[derive(Debug, Clone)]
pub struct HttpViesClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpViesClient {
    /// Build a client for `base_url` (normally [`VIES_BASE_URL`]).
    ///
    /// # Errors
    ///
    /// Returns `ViesError::Network` if the TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ViesError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ViesError::Network(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// URL queried for a given member state and number.
    pub fn lookup_url(&self, country_code: &str, number: &str) -> String {
        format!("{}/ms/{country_code}/vat/{number}", self.base_url)
    }

    fn transport_error(&self, e: reqwest::Error) -> ViesError {
        if e.is_timeout() {
            ViesError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else {
            ViesError::Network(e.to_string())
        }
    }
}

impl ViesTransport for HttpViesClient {
    async fn lookup(&self, country_code: &str, number: &str) -> Result<ViesLookup, ViesError> {
        let resp = self
            .client
            .get(self.lookup_url(country_code, number))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(ViesError::ApiError(format!("HTTP {status}: {body}")));
        }

        parse_lookup(&body)
    }
}

/// Parse a VIES lookup body.
///
/// A `userError` other than `VALID`/`INVALID` means VIES could not answer
/// (member state down, rate limited) and is reported as an API error, not
/// as an invalid number.
fn parse_lookup(body: &str) -> Result<ViesLookup, ViesError> {
    let api_resp: ViesApiResponse = serde_json::from_str(body)
        .map_err(|e: serde_json::Error| ViesError::ParseError(e.to_string()))?;

    // Check for API-level errors
    if let Some(err) = api_resp.error_wrappers.as_ref().and_then(|w| w.first()) {
        let msg = err
            .message
            .clone()
            .or_else(|| err.error.clone())
            .unwrap_or_else(|| "unknown error".into());
        return Err(ViesError::ApiError(msg));
    }

    if let Some(code) = api_resp.user_error.as_deref() {
        if code != "VALID" && code != "INVALID" {
            return Err(ViesError::ApiError(code.to_string()));
        }
    }

    let valid = api_resp
        .is_valid
        .ok_or_else(|| ViesError::ParseError("missing field `isValid`".into()))?;

    Ok(ViesLookup {
        valid,
        request_date: api_resp.request_date,
        name: api_resp.name.filter(|n| n != "---" && !n.is_empty()),
        address: api_resp.address.filter(|a| a != "---" && !a.is_empty()),
    })
}

//! EU VAT verification through the VIES registry.
//!
//! This is the only validator with network I/O. The registry is reached
//! through [`ViesTransport`] so the HTTP client can be swapped for a fake
//! in tests; the live client lives in [`crate::vies`] behind the `vies`
//! feature.

use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::alphanumeric_upper;
use super::jurisdiction::is_eu_member_code;
use super::types::{VerificationResult, VerificationType};

/// Registry answer for a single VAT number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViesLookup {
    /// Whether the VAT number is currently valid.
    pub valid: bool,
    /// Registered company name (if disclosed).
    pub name: Option<String>,
    /// Registered address (if disclosed).
    pub address: Option<String>,
    /// Date of the request as reported by VIES (YYYY-MM-DD...).
    pub request_date: Option<String>,
}

/// Failure talking to VIES.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ViesError {
    /// Connection, DNS or TLS failure.
    #[error("VIES network error: {0}")]
    Network(String),
    /// The lookup did not complete within the configured bound.
    #[error("VIES request timed out after {0} ms")]
    Timeout(u64),
    /// VIES answered with an error (HTTP status or member state unavailable).
    #[error("VIES API error: {0}")]
    ApiError(String),
    /// The response body was not the expected JSON.
    #[error("VIES parse error: {0}")]
    ParseError(String),
}

/// Something that can ask VIES about a VAT number.
///
/// `country_code` is an uppercased member state prefix and `number` the
/// uppercased remainder of the VAT ID.
pub trait ViesTransport: Send + Sync {
    fn lookup(
        &self,
        country_code: &str,
        number: &str,
    ) -> impl Future<Output = Result<ViesLookup, ViesError>> + Send;
}

impl<T: ViesTransport> ViesTransport for Arc<T> {
    fn lookup(
        &self,
        country_code: &str,
        number: &str,
    ) -> impl Future<Output = Result<ViesLookup, ViesError>> + Send {
        (**self).lookup(country_code, number)
    }
}

/// Normalize a VAT ID and split it into member state prefix and number.
///
/// Rejects, without any network call, IDs whose prefix is not one of the
/// 27 VIES member states or which have nothing after the prefix.
pub fn split_vat_id(business_id: &str) -> Result<(String, String), String> {
    let cleaned = alphanumeric_upper(business_id);
    if cleaned.len() < 3 {
        return Err(
            "VAT number must start with a 2-letter EU country code followed by the number".into(),
        );
    }

    let (country_code, number) = cleaned.split_at(2);
    if !is_eu_member_code(country_code) {
        return Err(format!(
            "Invalid EU country code '{country_code}'. VAT numbers must start with an EU member state prefix (e.g. DE, FR, IT)"
        ));
    }
    Ok((country_code.to_string(), number.to_string()))
}

/// Verify an EU VAT number against VIES.
///
/// Transport failures are logged and folded into an unverified result with
/// `error` set; this function never fails.
pub async fn verify_eu_vat<T: ViesTransport>(
    transport: &T,
    business_id: &str,
) -> VerificationResult {
    let (country_code, number) = match split_vat_id(business_id) {
        Ok(parts) => parts,
        Err(reason) => {
            return VerificationResult::failed("EU", VerificationType::Vat).with_reason(reason);
        }
    };

    match transport.lookup(&country_code, &number).await {
        Ok(lookup) if lookup.valid => {
            let mut result = VerificationResult::passed("EU", VerificationType::Vat)
                .with_note("Verified via the EU VIES registry");
            if let Some(name) = lookup.name.filter(|n| n != "---" && !n.trim().is_empty()) {
                result = result.with_business_name(name);
            }
            result
        }
        Ok(_) => VerificationResult::failed("EU", VerificationType::Vat)
            .with_reason("VAT number is not registered or not active for intra-EU trade")
            .with_note("Not found in the EU VIES registry"),
        Err(e) => {
            tracing::warn!(country_code = %country_code, error = %e, "VIES lookup failed");
            VerificationResult::failed("EU", VerificationType::Vat)
                .with_reason("Unable to reach the EU VIES registry. Please try again later")
                .with_error(e.to_string())
        }
    }
}

use serde::{Deserialize, Serialize};

/// Inbound verification request.
///
/// Both fields are optional on the wire so that a missing field is reported
/// as an unverified result instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    /// Jurisdiction code or name, case-insensitive (e.g. "INDIA", "Germany", "uk").
    #[serde(default)]
    pub country: Option<String>,
    /// Raw identifier as typed by the user; punctuation and whitespace allowed.
    #[serde(default)]
    pub business_id: Option<String>,
}

impl VerificationRequest {
    pub fn new(country: impl Into<String>, business_id: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            business_id: Some(business_id.into()),
        }
    }
}

/// Which rule produced a [`VerificationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationType {
    /// Indian Goods and Services Tax registration number.
    #[serde(rename = "GST")]
    Gst,
    /// EU VAT number checked against VIES.
    #[serde(rename = "VAT")]
    Vat,
    /// US Employer Identification Number.
    #[serde(rename = "EIN")]
    Ein,
    /// UK Companies House number.
    #[serde(rename = "Company Number")]
    CompanyNumber,
    /// UAE trade license.
    #[serde(rename = "Trade License")]
    TradeLicense,
    /// Canadian Business Number.
    #[serde(rename = "Business Number")]
    BusinessNumber,
    /// Australian Business Number.
    #[serde(rename = "ABN")]
    Abn,
    /// Unsupported jurisdiction, manual document review.
    Manual,
    /// Internal failure caught at the dispatcher boundary.
    Error,
    /// Request was missing a country or identifier.
    Unknown,
}

impl VerificationType {
    /// The tag string as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gst => "GST",
            Self::Vat => "VAT",
            Self::Ein => "EIN",
            Self::CompanyNumber => "Company Number",
            Self::TradeLicense => "Trade License",
            Self::BusinessNumber => "Business Number",
            Self::Abn => "ABN",
            Self::Manual => "Manual",
            Self::Error => "Error",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for VerificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform outcome of every verification call.
///
/// A result is always well-formed: rejected identifiers, unsupported
/// countries, registry outages and internal failures are all expressed
/// here rather than as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// True only if the identifier passed the jurisdiction's check.
    pub verified: bool,
    /// Canonical jurisdiction label.
    pub country: String,
    /// Registered name, when the check source can supply one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// The rule that executed.
    pub verification_type: VerificationType,
    /// Why verification failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Display-safe explanation, including caveats of format-only checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Follow-up action for the user (manual verification only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,
    /// Diagnostic message of a caught failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResult {
    fn new(
        verified: bool,
        country: impl Into<String>,
        verification_type: VerificationType,
    ) -> Self {
        Self {
            verified,
            country: country.into(),
            business_name: None,
            verification_type,
            reason: None,
            note: None,
            next_step: None,
            error: None,
        }
    }

    /// A result for an identifier that passed its check.
    pub fn passed(country: impl Into<String>, verification_type: VerificationType) -> Self {
        Self::new(true, country, verification_type)
    }

    /// A result for an identifier that did not pass its check.
    pub fn failed(country: impl Into<String>, verification_type: VerificationType) -> Self {
        Self::new(false, country, verification_type)
    }

    pub fn with_business_name(mut self, name: impl Into<String>) -> Self {
        self.business_name = Some(name.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_next_step(mut self, next_step: impl Into<String>) -> Self {
        self.next_step = Some(next_step.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

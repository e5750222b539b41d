//! Verification dispatcher: normalizes the country, picks the validator,
//! writes the audit line and guarantees a well-formed result.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use super::abn::verify_abn;
use super::error::VerifyError;
use super::eu_vat::{ViesTransport, verify_eu_vat};
use super::format::{
    verify_business_number, verify_company_number, verify_ein, verify_gst, verify_trade_license,
};
use super::jurisdiction::Jurisdiction;
use super::manual::verify_manual;
use super::types::{VerificationRequest, VerificationResult, VerificationType};

/// A synchronous, registry-free validator.
pub type LocalValidator = fn(&str) -> Result<VerificationResult, VerifyError>;

static DEFAULT_VALIDATORS: &[(Jurisdiction, LocalValidator)] = &[
    (Jurisdiction::India, verify_gst),
    (Jurisdiction::Usa, verify_ein),
    (Jurisdiction::UnitedKingdom, verify_company_number),
    (Jurisdiction::Uae, verify_trade_license),
    (Jurisdiction::Canada, verify_business_number),
    (Jurisdiction::Australia, verify_abn),
];

/// Entry point for business identifier verification.
///
/// Holds the VIES transport used for EU VAT numbers and the table of local
/// validators. Calls share no mutable state; one `Verifier` can serve any
/// number of concurrent requests.
#[derive(Clone)]
pub struct Verifier<T> {
    transport: T,
    validators: Vec<(Jurisdiction, LocalValidator)>,
}

impl<T: fmt::Debug> fmt::Debug for Verifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let jurisdictions: Vec<_> = self.validators.iter().map(|(j, _)| j).collect();
        f.debug_struct("Verifier")
            .field("transport", &self.transport)
            .field("local_validators", &jurisdictions)
            .finish()
    }
}

impl<T: ViesTransport> Verifier<T> {
    /// Create a verifier with the built-in validators.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            validators: DEFAULT_VALIDATORS.to_vec(),
        }
    }

    /// Replace the local validator for a jurisdiction.
    ///
    /// The EU path always goes through the VIES transport and cannot be
    /// overridden here: passing [`Jurisdiction::EuropeanUnion`] leaves the
    /// verifier unchanged.
    pub fn with_local_validator(
        mut self,
        jurisdiction: Jurisdiction,
        validator: LocalValidator,
    ) -> Self {
        if jurisdiction == Jurisdiction::EuropeanUnion {
            tracing::warn!("ignoring local validator for EU; VAT numbers are checked against VIES");
            return self;
        }
        match self.validators.iter_mut().find(|(j, _)| *j == jurisdiction) {
            Some(slot) => slot.1 = validator,
            None => self.validators.push((jurisdiction, validator)),
        }
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Verify a business identifier for a country.
    ///
    /// Never fails: missing input, rejected formats, unsupported countries,
    /// registry outages and internal failures all come back as a
    /// [`VerificationResult`].
    pub async fn verify_business(&self, country: &str, business_id: &str) -> VerificationResult {
        let result = self.dispatch(country, business_id).await;
        tracing::info!(
            target: "bizverify::audit",
            country = %result.country,
            verification_type = %result.verification_type,
            verified = result.verified,
            "business verification"
        );
        result
    }

    /// [`verify_business`](Self::verify_business) for a wire request.
    pub async fn verify_request(&self, request: &VerificationRequest) -> VerificationResult {
        self.verify_business(
            request.country.as_deref().unwrap_or_default(),
            request.business_id.as_deref().unwrap_or_default(),
        )
        .await
    }

    async fn dispatch(&self, country: &str, business_id: &str) -> VerificationResult {
        if country.trim().is_empty() || business_id.trim().is_empty() {
            let country = country.trim().to_uppercase();
            return VerificationResult::failed(country, VerificationType::Unknown)
                .with_reason("Country and business ID are both required");
        }

        match Jurisdiction::classify(country) {
            None => verify_manual(country),
            Some(Jurisdiction::EuropeanUnion) => self.run_eu(business_id).await,
            Some(jurisdiction) => self.run_local(jurisdiction, business_id),
        }
    }

    async fn run_eu(&self, business_id: &str) -> VerificationResult {
        let lookup = AssertUnwindSafe(verify_eu_vat(&self.transport, business_id));
        match lookup.catch_unwind().await {
            Ok(result) => result,
            Err(payload) => internal_error(
                Jurisdiction::EuropeanUnion,
                &VerifyError::Internal(panic_message(payload, "VIES transport panicked")),
            ),
        }
    }

    fn run_local(&self, jurisdiction: Jurisdiction, business_id: &str) -> VerificationResult {
        let Some(&(_, validator)) = self.validators.iter().find(|(j, _)| *j == jurisdiction) else {
            let msg = format!("no validator registered for {}", jurisdiction.label());
            return internal_error(jurisdiction, &VerifyError::Internal(msg));
        };

        match panic::catch_unwind(AssertUnwindSafe(|| validator(business_id))) {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => internal_error(jurisdiction, &e),
            Err(payload) => internal_error(
                jurisdiction,
                &VerifyError::Internal(panic_message(payload, "validator panicked")),
            ),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>, fallback: &str) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| fallback.to_string())
}

fn internal_error(jurisdiction: Jurisdiction, error: &VerifyError) -> VerificationResult {
    tracing::error!(country = jurisdiction.label(), error = %error, "validator failed");
    VerificationResult::failed(jurisdiction.label(), VerificationType::Error)
        .with_reason("Verification could not be completed due to an internal error")
        .with_error(error.to_string())
}

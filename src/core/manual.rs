use super::types::{VerificationResult, VerificationType};

/// Catch-all for countries without an automated rule.
///
/// This is an expected outcome, not an error: the user is routed to the
/// document upload workflow.
pub fn verify_manual(country: &str) -> VerificationResult {
    VerificationResult::failed(country.trim().to_uppercase(), VerificationType::Manual)
        .with_note("Automated verification is not available for this country")
        .with_next_step("Upload your business registration documents for manual verification")
}

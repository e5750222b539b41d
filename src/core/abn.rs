//! Australian Business Number checksum.

use super::error::VerifyError;
use super::format::digits_only;
use super::types::{VerificationResult, VerificationType};

const ABN_WEIGHTS: [i64; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// Apply the ATO checksum to an 11-digit ABN.
///
/// Subtract 1 from the first digit, weight each digit, and require the sum
/// to be divisible by 89.
pub fn abn_checksum_valid(digits: &[u8; 11]) -> bool {
    let sum: i64 = digits
        .iter()
        .zip(ABN_WEIGHTS)
        .enumerate()
        .map(|(i, (&d, w))| {
            let d = i64::from(d);
            if i == 0 { (d - 1) * w } else { d * w }
        })
        .sum();
    sum % 89 == 0
}

/// Australia: 11-digit ABN with checksum.
pub fn verify_abn(business_id: &str) -> Result<VerificationResult, VerifyError> {
    let cleaned = digits_only(business_id);

    let mut digits = [0u8; 11];
    if cleaned.len() != digits.len() {
        return Ok(VerificationResult::failed("Australia", VerificationType::Abn)
            .with_reason("ABN must contain exactly 11 digits"));
    }
    for (slot, b) in digits.iter_mut().zip(cleaned.bytes()) {
        *slot = b - b'0';
    }

    if !abn_checksum_valid(&digits) {
        return Ok(VerificationResult::failed("Australia", VerificationType::Abn)
            .with_reason("ABN checksum failed; the number contains a typo or is not a real ABN"));
    }

    Ok(VerificationResult::passed("Australia", VerificationType::Abn).with_note(
        "ABN checksum valid. Registration status was not checked against the ABN Lookup service",
    ))
}

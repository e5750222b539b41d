//! Format-only validators: India (GST), USA (EIN), UK (Company Number),
//! UAE (Trade License) and Canada (Business Number).
//!
//! None of these contact a registry. A passing result only says the
//! identifier has a plausible shape, and every note says so.

use std::sync::OnceLock;

use regex::Regex;

use super::error::VerifyError;
use super::types::{VerificationResult, VerificationType};

const GST_PATTERN: &str = r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$";
const COMPANY_NUMBER_PATTERN: &str = r"^[A-Z0-9]{8}$";

static GST_RE: OnceLock<Regex> = OnceLock::new();
static COMPANY_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> Result<&'static Regex, VerifyError> {
    if let Some(re) = cell.get() {
        return Ok(re);
    }
    let re = Regex::new(pattern)?;
    Ok(cell.get_or_init(|| re))
}

/// Keep ASCII letters and digits, uppercased.
pub(crate) fn alphanumeric_upper(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Keep ASCII digits only.
pub(crate) fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// India: 15-character GSTIN.
///
/// On success `business_name` is filled with the five-letter name segment
/// of the embedded PAN. That is a placeholder derived from the identifier
/// itself, not a registry lookup, and the note says so.
pub fn verify_gst(business_id: &str) -> Result<VerificationResult, VerifyError> {
    let cleaned = alphanumeric_upper(business_id);
    let re = compiled(&GST_RE, GST_PATTERN)?;

    if !re.is_match(&cleaned) {
        return Ok(VerificationResult::failed("India", VerificationType::Gst).with_reason(
            "Invalid GST format. Expected 15 characters: 2-digit state code, \
             10-character PAN, entity number, 'Z' and a check character",
        ));
    }

    Ok(VerificationResult::passed("India", VerificationType::Gst)
        .with_business_name(&cleaned[2..7])
        .with_note(
            "GST format validated only. Full verification requires a paid GST registry API; \
             the business name is a placeholder derived from the identifier",
        ))
}

/// USA: Employer Identification Number, 9 digits.
pub fn verify_ein(business_id: &str) -> Result<VerificationResult, VerifyError> {
    let cleaned = digits_only(business_id);
    if cleaned.len() != 9 {
        return Ok(VerificationResult::failed("USA", VerificationType::Ein)
            .with_reason("EIN must contain exactly 9 digits (format XX-XXXXXXX)"));
    }
    Ok(VerificationResult::passed("USA", VerificationType::Ein)
        .with_note("EIN format validated only, not checked against the IRS registry"))
}

/// UK: Companies House number, 8 alphanumeric characters.
pub fn verify_company_number(business_id: &str) -> Result<VerificationResult, VerifyError> {
    let cleaned = alphanumeric_upper(business_id);
    let re = compiled(&COMPANY_NUMBER_RE, COMPANY_NUMBER_PATTERN)?;

    if !re.is_match(&cleaned) {
        return Ok(
            VerificationResult::failed("UK", VerificationType::CompanyNumber)
                .with_reason("Company number must be exactly 8 letters or digits"),
        );
    }
    Ok(VerificationResult::passed("UK", VerificationType::CompanyNumber).with_note(
        "Company number format validated only, not checked against Companies House",
    ))
}

/// UAE: trade license, at least 6 digits.
pub fn verify_trade_license(business_id: &str) -> Result<VerificationResult, VerifyError> {
    let cleaned = digits_only(business_id);
    if cleaned.len() < 6 {
        return Ok(VerificationResult::failed("UAE", VerificationType::TradeLicense)
            .with_reason("Trade license number must contain at least 6 digits"));
    }
    Ok(VerificationResult::passed("UAE", VerificationType::TradeLicense).with_note(
        "Trade license format accepted. Manual document verification is still required",
    ))
}

/// Canada: Business Number, 9 digits.
pub fn verify_business_number(business_id: &str) -> Result<VerificationResult, VerifyError> {
    let cleaned = digits_only(business_id);
    if cleaned.len() != 9 {
        return Ok(
            VerificationResult::failed("Canada", VerificationType::BusinessNumber)
                .with_reason("Business Number must contain exactly 9 digits"),
        );
    }
    Ok(VerificationResult::passed("Canada", VerificationType::BusinessNumber)
        .with_note("Business Number format validated only, not checked against the CRA registry"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- GST ---

    #[test]
    fn gst_valid() {
        let r = verify_gst("22AAAAA0000A1Z5").unwrap();
        assert!(r.verified);
        assert_eq!(r.verification_type, VerificationType::Gst);
        assert_eq!(r.business_name.as_deref(), Some("AAAAA"));
        assert!(r.note.unwrap().contains("placeholder"));
    }

    #[test]
    fn gst_lowercase_and_separators() {
        let r = verify_gst("27 aapfu-0939f 1zv").unwrap();
        assert!(r.verified);
        assert_eq!(r.business_name.as_deref(), Some("AAPFU"));
    }

    #[test]
    fn gst_invalid() {
        let r = verify_gst("not-a-gst").unwrap();
        assert!(!r.verified);
        assert!(r.reason.unwrap().contains("GST format"));
        assert!(r.business_name.is_none());
    }

    #[test]
    fn gst_entity_digit_zero_rejected() {
        // 13th character must be 1-9 or A-Z
        assert!(!verify_gst("22AAAAA0000A0Z5").unwrap().verified);
    }

    #[test]
    fn gst_missing_z_rejected() {
        assert!(!verify_gst("22AAAAA0000A1Y5").unwrap().verified);
    }

    // --- EIN ---

    #[test]
    fn ein_with_dash() {
        assert!(verify_ein("12-3456789").unwrap().verified);
    }

    #[test]
    fn ein_too_short() {
        let r = verify_ein("123").unwrap();
        assert!(!r.verified);
        assert!(r.reason.is_some());
    }

    #[test]
    fn ein_letters_are_ignored() {
        // letters are stripped, leaving 9 digits
        assert!(verify_ein("EIN 12-3456789").unwrap().verified);
    }

    // --- UK ---

    #[test]
    fn company_number_valid() {
        assert!(verify_company_number("AB123456").unwrap().verified);
        assert!(verify_company_number("sc 123456").unwrap().verified);
    }

    #[test]
    fn company_number_too_short() {
        assert!(!verify_company_number("AB1234").unwrap().verified);
    }

    #[test]
    fn company_number_too_long() {
        assert!(!verify_company_number("AB12345678").unwrap().verified);
    }

    // --- UAE ---

    #[test]
    fn trade_license_minimum_length() {
        let r = verify_trade_license("123456").unwrap();
        assert!(r.verified);
        assert!(r.note.unwrap().contains("Manual document verification"));
        assert!(!verify_trade_license("12345").unwrap().verified);
    }

    #[test]
    fn trade_license_long_is_fine() {
        assert!(verify_trade_license("CN-1234567890").unwrap().verified);
    }

    // --- Canada ---

    #[test]
    fn business_number_valid() {
        assert!(verify_business_number("123 456 789").unwrap().verified);
    }

    #[test]
    fn business_number_with_program_account_rejected() {
        // 123456789RT0001 has 13 digits after stripping
        assert!(!verify_business_number("123456789RT0001").unwrap().verified);
    }

    #[test]
    fn cleaning_helpers() {
        assert_eq!(alphanumeric_upper("ab-12 c"), "AB12C");
        assert_eq!(digits_only("ab-12 c3"), "123");
    }
}

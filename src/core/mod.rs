//! Business identifier verification core.
//!
//! Country dispatch, per-jurisdiction format and checksum rules, the EU VAT
//! registry validator and the manual fallback. Everything here is
//! runtime-agnostic; the only async path is the VIES lookup, reached
//! through the [`ViesTransport`] seam.

mod abn;
mod dispatch;
mod error;
mod eu_vat;
mod format;
mod jurisdiction;
mod manual;
mod types;

pub use abn::{abn_checksum_valid, verify_abn};
pub use dispatch::{LocalValidator, Verifier};
pub use error::VerifyError;
pub use eu_vat::{ViesError, ViesLookup, ViesTransport, split_vat_id, verify_eu_vat};
pub use format::{
    verify_business_number, verify_company_number, verify_ein, verify_gst, verify_trade_license,
};
pub use jurisdiction::{Jurisdiction, is_eu_member_code};
pub use manual::verify_manual;
pub use types::{VerificationRequest, VerificationResult, VerificationType};

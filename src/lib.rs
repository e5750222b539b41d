//! # bizverify
//!
//! Multi-jurisdiction business identifier verification: Indian GST, US EIN,
//! UK company numbers, UAE trade licenses, Canadian Business Numbers,
//! Australian ABNs (with checksum) and EU VAT numbers checked live against
//! the VIES registry. Unsupported countries are routed to manual review.
//!
//! Every call returns a [`VerificationResult`](crate::core::VerificationResult);
//! rejected formats, registry outages and internal failures are results,
//! never errors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bizverify::core::*;
//! use bizverify::vies::ViesConfig;
//!
//! let verifier = Verifier::new(ViesConfig::default().into_transport()?);
//!
//! let r = verifier.verify_business("Australia", "51 824 753 556").await;
//! assert!(r.verified);
//! assert_eq!(r.verification_type, VerificationType::Abn);
//! ```
//!
//! Most rules are format-only: a passing result means the identifier is
//! plausible, not that it is registered. Only the EU path consults a live
//! registry. The business name returned for India is a placeholder derived
//! from the GSTIN itself.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, country dispatch, format/checksum rules, VIES transport trait |
//! | `vies` | Live VIES HTTP client, lookup deadline, TTL cache |
//! | `server` | axum HTTP endpoint and the `bizverify-server` binary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "vies")]
pub mod vies;

#[cfg(feature = "server")]
pub mod server;

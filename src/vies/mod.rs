//! Live EU VIES transport.
//!
//! [`HttpViesClient`] talks to the public REST API, [`Deadline`] bounds each
//! lookup and [`CachedTransport`] reuses recent answers. [`ViesConfig`]
//! assembles the three into the stack used in production.
//!
//! # Example
//!
//! ```ignore
//! use bizverify::core::Verifier;
//! use bizverify::vies::ViesConfig;
//!
//! let verifier = Verifier::new(ViesConfig::default().into_transport()?);
//! let result = verifier.verify_business("Germany", "DE 123 456 789").await;
//! println!("{}", result.verified);
//! ```

mod cache;
mod client;
mod config;
mod deadline;

pub use cache::CachedTransport;
pub use client::{HttpViesClient, VIES_BASE_URL};
pub use config::{LiveTransport, ViesConfig};
pub use deadline::Deadline;

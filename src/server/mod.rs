//! HTTP surface for the verifier.
//!
//! Exposes the single verification operation as `POST /api/verify-business`
//! plus a jurisdiction listing and a health probe. Configuration comes from
//! `BIZVERIFY_*` environment variables; see [`ServerConfig`].

mod config;
mod error;
mod routes;

pub use config::{
    ConfigError, ENV_BIND, ENV_VIES_CACHE_CAPACITY, ENV_VIES_CACHE_TTL_SECS, ENV_VIES_TIMEOUT_MS,
    ENV_VIES_URL, ServerConfig,
};
pub use error::AppError;
pub use routes::{AppState, JurisdictionInfo, router};

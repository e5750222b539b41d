use std::time::Duration;

use super::cache::CachedTransport;
use super::client::{HttpViesClient, VIES_BASE_URL};
use super::deadline::Deadline;
use crate::core::ViesError;

/// The transport stack used against the real registry.
pub type LiveTransport = CachedTransport<Deadline<HttpViesClient>>;

/// Settings for the live VIES transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViesConfig {
    /// REST API root, without trailing slash.
    pub base_url: String,
    /// Upper bound for a single lookup, connect to last byte.
    pub timeout: Duration,
    /// How long an answer is reused. Zero disables the cache.
    pub cache_ttl: Duration,
    /// Maximum number of cached answers.
    pub cache_capacity: usize,
}

impl Default for ViesConfig {
    fn default() -> Self {
        Self {
            base_url: VIES_BASE_URL.to_string(),
            timeout: Duration::from_secs(5),
            cache_ttl: Duration::from_secs(300),
            cache_capacity: 1024,
        }
    }
}

impl ViesConfig {
    /// Build the cached, deadline-bounded HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns `ViesError::Network` if the HTTP client cannot be created.
    pub fn into_transport(self) -> Result<LiveTransport, ViesError> {
        let client = HttpViesClient::new(self.base_url, self.timeout)?;
        Ok(CachedTransport::new(
            Deadline::new(client, self.timeout),
            self.cache_ttl,
            self.cache_capacity,
        ))
    }
}

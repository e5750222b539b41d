use std::time::Duration;

use crate::core::{ViesError, ViesLookup, ViesTransport};

/// Bounds every lookup of the wrapped transport.
///
/// Expiry is reported as [`ViesError::Timeout`]; the inner future is dropped.
#[derive(Debug, Clone)]
pub struct Deadline<T> {
    inner: T,
    limit: Duration,
}

impl<T> Deadline<T> {
    pub fn new(inner: T, limit: Duration) -> Self {
        Self { inner, limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: ViesTransport> ViesTransport for Deadline<T> {
    async fn lookup(&self, country_code: &str, number: &str) -> Result<ViesLookup, ViesError> {
        match tokio::time::timeout(self.limit, self.inner.lookup(country_code, number)).await {
            Ok(result) => result,
            Err(_) => Err(ViesError::Timeout(
                u64::try_from(self.limit.as_millis()).unwrap_or(u64::MAX),
            )),
        }
    }
}

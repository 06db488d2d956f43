use std::fmt;
use std::future::Future;

use super::record::ResultSet;

/// The three NHTSA Safety Ratings queries the resolver depends on.
///
/// Implementations own transport policy (timeouts, retries); the resolver
/// only sees a result set or a [`LookupError`].
pub trait RatingsLookup: Send + Sync {
    fn lookup_by_year_make_model(
        &self,
        year: &str,
        make: &str,
        model: &str,
    ) -> impl Future<Output = Result<ResultSet, LookupError>> + Send;

    fn lookup_all_models_for_make_year(
        &self,
        year: &str,
        make: &str,
    ) -> impl Future<Output = Result<ResultSet, LookupError>> + Send;

    fn lookup_detail_by_id(
        &self,
        vehicle_id: u64,
    ) -> impl Future<Output = Result<ResultSet, LookupError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("cannot build lookup URL from base '{0}'")]
    InvalidBase(String),
}

impl LookupError {
    pub fn transport(url: impl fmt::Display, err: impl fmt::Display) -> Self {
        Self::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

//! Shared plumbing for the NHTSA JSON endpoints.

use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::NhtsaConfig;
use crate::ratings::LookupError;

pub(crate) fn build_client(config: &NhtsaConfig) -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()
}

/// Appends `segments` to `base`, percent-encoding each one, and asks for JSON.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, LookupError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| LookupError::InvalidBase(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    url.query_pairs_mut().append_pair("format", "json");
    Ok(url)
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: Url,
) -> Result<T, LookupError> {
    debug!(%url, "requesting NHTSA endpoint");
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|err| LookupError::transport(&url, err))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.json::<T>().await.map_err(|err| LookupError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })
}

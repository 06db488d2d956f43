use reqwest::Client;
use tracing::warn;
use url::Url;

use super::domain::{self, Envelope, MakeEntry, ModelEntry, RawMake, RawModel, VpicError};
use crate::config::NhtsaConfig;
use crate::http;

/// Client for the vPIC make/model listings.
#[derive(Debug, Clone)]
pub struct VpicClient {
    client: Client,
    base_url: Url,
}

impl VpicClient {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn from_config(config: &NhtsaConfig) -> Result<Self, reqwest::Error> {
        let client = http::build_client(config)?;
        Ok(Self::new(client, config.vpic_base_url.clone()))
    }

    pub async fn all_makes(&self) -> Result<Vec<MakeEntry>, VpicError> {
        let url = http::endpoint(&self.base_url, &["GetAllMakes"])
            .map_err(VpicError::MakesUnavailable)?;
        let envelope: Envelope<RawMake> = http::get_json(&self.client, url)
            .await
            .map_err(|err| {
                warn!(error = %err, "vPIC make listing failed");
                VpicError::MakesUnavailable(err)
            })?;
        Ok(domain::map_makes(envelope.results))
    }

    pub async fn models_for_make_year(
        &self,
        make: &str,
        year: &str,
    ) -> Result<Vec<ModelEntry>, VpicError> {
        let (make, year) = (make.trim(), year.trim());
        if make.is_empty() || year.is_empty() {
            return Err(VpicError::MissingParameter);
        }

        let unavailable = |source| VpicError::ModelsUnavailable {
            make: make.to_string(),
            source,
        };
        let url = http::endpoint(
            &self.base_url,
            &["GetModelsForMakeYear", "make", make, "modelyear", year],
        )
        .map_err(unavailable)?;
        let envelope: Envelope<RawModel> = http::get_json(&self.client, url)
            .await
            .map_err(|err| {
                warn!(make, year, error = %err, "vPIC model listing failed");
                unavailable(err)
            })?;
        Ok(domain::map_models(envelope.results))
    }
}

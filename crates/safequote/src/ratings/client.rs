use reqwest::Client;
use url::Url;

use super::lookup::{LookupError, RatingsLookup};
use super::record::ResultSet;
use crate::config::NhtsaConfig;
use crate::http;

/// [`RatingsLookup`] over the public NHTSA Safety Ratings API.
#[derive(Debug, Clone)]
pub struct NhtsaRatingsClient {
    client: Client,
    base_url: Url,
}

impl NhtsaRatingsClient {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn from_config(config: &NhtsaConfig) -> Result<Self, reqwest::Error> {
        let client = http::build_client(config)?;
        Ok(Self::new(client, config.ratings_base_url.clone()))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn fetch(&self, segments: &[&str]) -> Result<ResultSet, LookupError> {
        let url = http::endpoint(&self.base_url, segments)?;
        http::get_json(&self.client, url).await
    }
}

impl RatingsLookup for NhtsaRatingsClient {
    async fn lookup_by_year_make_model(
        &self,
        year: &str,
        make: &str,
        model: &str,
    ) -> Result<ResultSet, LookupError> {
        self.fetch(&["modelyear", year, "make", make, "model", model])
            .await
    }

    async fn lookup_all_models_for_make_year(
        &self,
        year: &str,
        make: &str,
    ) -> Result<ResultSet, LookupError> {
        self.fetch(&["modelyear", year, "make", make]).await
    }

    async fn lookup_detail_by_id(&self, vehicle_id: u64) -> Result<ResultSet, LookupError> {
        let id = vehicle_id.to_string();
        self.fetch(&["VehicleId", &id]).await
    }
}

use serde::{Deserialize, Serialize};

use crate::ratings::LookupError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MakeEntry {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VpicError {
    #[error("Make and year are required")]
    MissingParameter,
    #[error("Failed to load vehicle makes. Please try again.")]
    MakesUnavailable(#[source] LookupError),
    #[error("Failed to load models for {make}. Please try again.")]
    ModelsUnavailable {
        make: String,
        #[source]
        source: LookupError,
    },
}

/// vPIC response envelope. Only `Results` matters here.
#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
    #[serde(rename = "Results", default = "Vec::new")]
    pub(super) results: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawMake {
    #[serde(rename = "Make_ID")]
    id: u64,
    #[serde(rename = "Make_Name", default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawModel {
    #[serde(rename = "Model_ID")]
    id: u64,
    #[serde(rename = "Model_Name", default)]
    name: Option<String>,
}

/// Alphabetical, case-insensitive; entries without a name are dropped.
pub(super) fn map_makes(raw: Vec<RawMake>) -> Vec<MakeEntry> {
    let mut makes: Vec<MakeEntry> = raw
        .into_iter()
        .filter_map(|make| named(make.name).map(|name| MakeEntry { id: make.id, name }))
        .collect();
    makes.sort_by(|a, b| alphabetical(&a.name, &b.name));
    makes
}

/// Like [`map_makes`], and a model name listed more than once keeps its first id.
pub(super) fn map_models(raw: Vec<RawModel>) -> Vec<ModelEntry> {
    let mut models: Vec<ModelEntry> = raw
        .into_iter()
        .filter_map(|model| named(model.name).map(|name| ModelEntry { id: model.id, name }))
        .collect();
    models.sort_by(|a, b| alphabetical(&a.name, &b.name));
    models.dedup_by(|later, earlier| later.name == earlier.name);
    models
}

fn named(name: Option<String>) -> Option<String> {
    name.map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn alphabetical(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogRow {
    pub(crate) id: u32,
    pub(crate) make: String,
    pub(crate) model: String,
    pub(crate) year: u16,
    pub(crate) condition: String,
    #[serde(rename = "type")]
    pub(crate) vehicle_type: String,
    pub(crate) price: u32,
    pub(crate) mileage: u32,
    pub(crate) safety_rating: u8,
    #[serde(default)]
    pub(crate) image: String,
    #[serde(default, deserialize_with = "feature_list")]
    pub(crate) safety_features: Vec<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<CatalogRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<CatalogRow>().collect()
}

fn feature_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(split_features)
        .unwrap_or_default())
}

fn split_features(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) fn split_features_for_tests(raw: &str) -> Vec<String> {
    split_features(raw)
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::RatingField;
use super::interpret::{self, RatingValue};

/// One NHTSA result, kept as the service's own key/value object so that the
/// detail merge carries every field the service sends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingRecord(Map<String, Value>);

impl RatingRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    pub fn get(&self, field: RatingField) -> Option<&Value> {
        self.0.get(field.key())
    }

    /// Overlays `detail` on this record; detail values win on shared keys.
    pub fn merged_with(mut self, detail: RatingRecord) -> RatingRecord {
        self.0.extend(detail.0);
        self
    }

    pub fn is_rated(&self, field: RatingField) -> bool {
        self.get(field).is_some_and(interpret::is_rated)
    }

    pub fn rating(&self, field: RatingField) -> Option<RatingValue> {
        self.get(field).and_then(interpret::classify)
    }

    /// Non-blank string content of a field.
    pub fn text(&self, field: RatingField) -> Option<String> {
        self.get(field)
            .filter(|value| interpret::is_rated(value))
            .map(interpret::display_text)
            .filter(|text| !text.trim().is_empty())
    }

    /// A rated fraction rendered as a percentage.
    pub fn percentage(&self, field: RatingField) -> Option<String> {
        self.get(field)
            .filter(|value| interpret::is_rated(value))
            .and_then(interpret::as_f64)
            .map(interpret::format_percentage)
    }

    /// Counts default to zero when absent or unparseable.
    pub fn count(&self, field: RatingField) -> u64 {
        self.get(field).and_then(interpret::as_u64).unwrap_or(0)
    }

    /// Identifier used for the detail lookup. Zero means "no vehicle".
    pub fn vehicle_id(&self) -> Option<u64> {
        self.get(RatingField::VehicleId)
            .and_then(interpret::as_u64)
            .filter(|id| *id != 0)
    }

    /// The `Model` string exactly as the service sent it; blank names are `None`.
    pub fn model_name(&self) -> Option<&str> {
        self.get(RatingField::Model)
            .and_then(Value::as_str)
            .filter(|model| !model.trim().is_empty())
    }

    pub fn description(&self) -> Option<String> {
        self.text(RatingField::VehicleDescription)
    }
}

impl From<Map<String, Value>> for RatingRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Envelope returned by every NHTSA ratings endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(rename = "Count", default)]
    pub count: u64,
    #[serde(rename = "Message", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "Results", default)]
    pub results: Vec<RatingRecord>,
}

impl ResultSet {
    pub fn new(results: Vec<RatingRecord>) -> Self {
        Self {
            count: results.len() as u64,
            message: None,
            results,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// A zero count or an empty result list both mean "nothing found".
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.results.is_empty()
    }

    pub fn first(&self) -> Option<&RatingRecord> {
        if self.is_empty() {
            None
        } else {
            self.results.first()
        }
    }

    pub fn into_first(self) -> Option<RatingRecord> {
        if self.is_empty() {
            None
        } else {
            self.results.into_iter().next()
        }
    }
}

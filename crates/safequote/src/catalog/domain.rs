use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    Preowned,
}

impl Condition {
    pub const fn ordered() -> [Self; 2] {
        [Self::New, Self::Preowned]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Preowned => "Preowned",
        }
    }
}

impl FromStr for Condition {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|condition| condition.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FilterParseError::UnknownCondition(trimmed.to_string()))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Hatchback,
    Truck,
}

impl VehicleType {
    pub const fn ordered() -> [Self; 4] {
        [Self::Sedan, Self::Suv, Self::Hatchback, Self::Truck]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
            Self::Hatchback => "Hatchback",
            Self::Truck => "Truck",
        }
    }
}

impl FromStr for VehicleType {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FilterParseError::UnknownVehicleType(trimmed.to_string()))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: u32,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub condition: Condition,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub price: u32,
    pub mileage: u32,
    pub safety_rating: u8,
    #[serde(rename = "image")]
    pub image_ref: String,
    pub safety_features: Vec<String>,
}

impl VehicleRecord {
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Either every value of a dimension or a single one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = FilterParseError>,
{
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            value.parse().map(Selection::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(value) => write!(f, "{value}"),
        }
    }
}

pub type ConditionFilter = Selection<Condition>;
pub type TypeFilter = Selection<VehicleType>;

/// Query supplied fresh for every filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub condition: ConditionFilter,
    pub vehicle_type: TypeFilter,
    /// Inclusive lower bound.
    pub min_safety_rating: u8,
    /// Inclusive upper bound in whole dollars.
    pub max_price: u32,
}

impl FilterSpec {
    pub const MAX_SAFETY_RATING: u8 = 5;

    /// Admits every record in any catalog.
    pub const fn permissive() -> Self {
        Self {
            condition: Selection::All,
            vehicle_type: Selection::All,
            min_safety_rating: 1,
            max_price: u32::MAX,
        }
    }
}

impl Default for FilterSpec {
    /// The filter the vehicle finder opens with.
    fn default() -> Self {
        Self {
            condition: Selection::All,
            vehicle_type: Selection::All,
            min_safety_rating: 4,
            max_price: 50_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterParseError {
    #[error("unknown vehicle condition '{0}' (expected all, new or preowned)")]
    UnknownCondition(String),
    #[error("unknown vehicle type '{0}' (expected all, sedan, suv, hatchback or truck)")]
    UnknownVehicleType(String),
}

mod parser;

use super::domain::{Condition, FilterParseError, VehicleRecord, VehicleType};
use super::inventory::Catalog;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use parser::CatalogRow;

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("vehicle {id}: {source}")]
    Field {
        id: u32,
        #[source]
        source: FilterParseError,
    },
    #[error("vehicle {id}: safety rating {rating} is outside 1-5")]
    SafetyRating { id: u32, rating: u8 },
    #[error("vehicle id {0} appears more than once")]
    DuplicateId(u32),
}

/// Loads an alternative inventory from a CSV export shaped like the built-in one.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogImportError> {
        let mut seen = HashSet::new();
        let mut vehicles = Vec::new();

        for row in parser::parse_rows(reader)? {
            if !seen.insert(row.id) {
                return Err(CatalogImportError::DuplicateId(row.id));
            }
            vehicles.push(record_from_row(row)?);
        }

        tracing::debug!(vehicles = vehicles.len(), "catalog import complete");
        Ok(Catalog::from_records(vehicles))
    }
}

fn record_from_row(row: CatalogRow) -> Result<VehicleRecord, CatalogImportError> {
    let id = row.id;
    let field_error = |source| CatalogImportError::Field { id, source };

    let condition: Condition = row.condition.parse().map_err(field_error)?;
    let vehicle_type: VehicleType = row.vehicle_type.parse().map_err(field_error)?;
    if !(1..=5).contains(&row.safety_rating) {
        return Err(CatalogImportError::SafetyRating {
            id,
            rating: row.safety_rating,
        });
    }

    Ok(VehicleRecord {
        id,
        make: row.make,
        model: row.model,
        year: row.year,
        condition,
        vehicle_type,
        price: row.price,
        mileage: row.mileage,
        safety_rating: row.safety_rating,
        image_ref: row.image,
        safety_features: row.safety_features,
    })
}

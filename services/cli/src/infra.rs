use std::path::Path;

use safequote::catalog::{
    Catalog, CatalogImporter, ConditionFilter, FilterSpec, TypeFilter, VehicleRecord,
};
use safequote::error::AppError;
use url::Url;

pub(crate) fn parse_condition(raw: &str) -> Result<ConditionFilter, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

pub(crate) fn parse_vehicle_type(raw: &str) -> Result<TypeFilter, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

pub(crate) fn parse_star_rating(raw: &str) -> Result<u8, String> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|stars| (1..=FilterSpec::MAX_SAFETY_RATING).contains(stars))
        .ok_or_else(|| format!("'{raw}' is not a star rating between 1 and 5"))
}

pub(crate) fn parse_required(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("a value is required".to_string());
    }
    Ok(trimmed.to_string())
}

pub(crate) fn parse_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|err| format!("invalid URL '{raw}': {err}"))?;
    if url.cannot_be_a_base() {
        return Err(format!("'{raw}' cannot be used as a base URL"));
    }
    Ok(url)
}

/// The built-in inventory, or a CSV export when a path is given.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, AppError> {
    match path {
        Some(path) => Ok(CatalogImporter::from_path(path)?),
        None => Ok(Catalog::standard()),
    }
}

pub(crate) fn find_vehicle(catalog: &Catalog, id: u32) -> Result<VehicleRecord, AppError> {
    catalog
        .find(id)
        .cloned()
        .ok_or(AppError::UnknownVehicle(id))
}

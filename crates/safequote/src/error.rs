use std::fmt;

use crate::catalog::{CatalogImportError, FilterParseError};
use crate::config::ConfigError;
use crate::ratings::ResolveError;
use crate::telemetry::TelemetryError;
use crate::vpic::VpicError;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Http(reqwest::Error),
    Catalog(CatalogImportError),
    Filter(FilterParseError),
    Ratings(ResolveError),
    Vpic(VpicError),
    Serialize(serde_json::Error),
    UnknownVehicle(u32),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {err}"),
            AppError::Telemetry(err) => write!(f, "telemetry error: {err}"),
            AppError::Io(err) => write!(f, "io error: {err}"),
            AppError::Http(err) => write!(f, "http client error: {err}"),
            AppError::Catalog(err) => write!(f, "catalog error: {err}"),
            AppError::Filter(err) => write!(f, "invalid filter: {err}"),
            AppError::Ratings(err) => write!(f, "{err}"),
            AppError::Vpic(err) => write!(f, "{err}"),
            AppError::Serialize(err) => write!(f, "could not render output: {err}"),
            AppError::UnknownVehicle(id) => write!(f, "no vehicle with id {id} in the catalog"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Http(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Filter(err) => Some(err),
            AppError::Ratings(err) => Some(err),
            AppError::Vpic(err) => Some(err),
            AppError::Serialize(err) => Some(err),
            AppError::UnknownVehicle(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<CatalogImportError> for AppError {
    fn from(value: CatalogImportError) -> Self {
        Self::Catalog(value)
    }
}

impl From<FilterParseError> for AppError {
    fn from(value: FilterParseError) -> Self {
        Self::Filter(value)
    }
}

impl From<ResolveError> for AppError {
    fn from(value: ResolveError) -> Self {
        Self::Ratings(value)
    }
}

impl From<VpicError> for AppError {
    fn from(value: VpicError) -> Self {
        Self::Vpic(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

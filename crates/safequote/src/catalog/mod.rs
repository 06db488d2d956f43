//! Fixed vehicle inventory and the filters the vehicle finder applies to it.

pub mod domain;
mod filter;
mod import;
mod inventory;

pub use domain::{
    Condition, ConditionFilter, FilterParseError, FilterSpec, Selection, TypeFilter,
    VehicleRecord, VehicleType,
};
pub use filter::{filter_vehicles, matches_spec, top_safety_picks, TOP_PICK_LIMIT};
pub use import::{CatalogImportError, CatalogImporter};
pub use inventory::Catalog;

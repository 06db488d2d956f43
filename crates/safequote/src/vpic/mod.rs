//! Make and model listings from the NHTSA vPIC catalog, plus the model-year
//! range offered by year pickers.

mod client;
mod domain;
mod years;

pub use client::VpicClient;
pub use domain::{MakeEntry, ModelEntry, VpicError};
pub use years::{default_year_range, year_range, EARLIEST_MODEL_YEAR};

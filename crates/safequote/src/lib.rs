//! Data core of the SafeQuote vehicle finder: catalog filtering, NHTSA safety
//! rating resolution, vPIC make/model listings and partner quote estimates.

pub mod catalog;
pub mod config;
pub mod error;
pub mod insurance;
pub mod ratings;
pub mod telemetry;
pub mod vpic;

mod http;

pub use error::AppError;

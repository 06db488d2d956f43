//! NHTSA 5-Star Safety Ratings: lookup, recovery of catalog model names that
//! the service does not know verbatim, detail enrichment, and the report view.
//!
//! [`SafetyRatingResolver`] is generic over [`RatingsLookup`] so that the
//! three-query flow can run against [`NhtsaRatingsClient`] or a scripted fake.

pub mod client;
pub mod fields;
pub mod interpret;
pub mod lookup;
pub mod record;
pub mod report;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use client::NhtsaRatingsClient;
pub use fields::RatingField;
pub use interpret::{classify, format_percentage, is_rated, RatingValue, NOT_RATED};
pub use lookup::{LookupError, RatingsLookup};
pub use record::{RatingRecord, ResultSet};
pub use report::{AlertKind, RatingReport, ReportAlert, ReportRow, ReportSection, RowValue};
pub use resolver::{
    select_variant, RatingQuery, Resolution, ResolveError, SafetyRatingResolver,
    RATING_LAG_GUIDANCE,
};

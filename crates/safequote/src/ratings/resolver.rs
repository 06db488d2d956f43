use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::lookup::{LookupError, RatingsLookup};
use super::record::{RatingRecord, ResultSet};

/// Guidance attached to every not-found failure.
pub const RATING_LAG_GUIDANCE: &str =
    "Try an earlier year, NHTSA ratings lag newest model years by 6-12 months.";

/// Vehicle the caller wants ratings for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingQuery {
    pub year: String,
    pub make: String,
    pub model: String,
}

impl RatingQuery {
    pub fn new(year: impl ToString, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            year: year.to_string().trim().to_string(),
            make: make.into().trim().to_string(),
            model: model.into().trim().to_string(),
        }
    }
}

impl RatingQuery {
    /// All three fields are non-blank.
    pub fn is_complete(&self) -> bool {
        [&self.year, &self.make, &self.model]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

impl fmt::Display for RatingQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.make, self.model)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Year, make and model are required")]
    MissingParameter,
    #[error("Vehicle not found or API error: {0}")]
    LookupFailed(#[source] LookupError),
    #[error("No safety ratings found for {year} {make} {model}. {}", RATING_LAG_GUIDANCE)]
    NotFound {
        year: String,
        make: String,
        model: String,
    },
}

impl ResolveError {
    fn not_found(query: &RatingQuery) -> Self {
        Self::NotFound {
            year: query.year.clone(),
            make: query.make.clone(),
            model: query.model.clone(),
        }
    }
}

/// A resolved record plus how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub record: RatingRecord,
    /// Catalog model name used when the exact query found nothing.
    pub recovered_model: Option<String>,
    /// Whether the detail lookup contributed fields.
    pub enriched: bool,
}

/// Steps of the locate phase. `Primary` is the exact query; `Recovering`
/// searches the make/year listing for a variant; `Recovered` re-queries
/// with the chosen variant's model name.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    Primary,
    Recovering,
    Recovered { model: String },
    Failed,
}

impl Stage {
    fn name(&self) -> &'static str {
        match self {
            Stage::Primary => "primary",
            Stage::Recovering => "recovering",
            Stage::Recovered { .. } => "recovered",
            Stage::Failed => "failed",
        }
    }
}

/// Resolves NHTSA ratings for a year/make/model with variant recovery and
/// best-effort detail enrichment.
#[derive(Debug, Clone)]
pub struct SafetyRatingResolver<L> {
    lookup: L,
}

impl<L> SafetyRatingResolver<L>
where
    L: RatingsLookup,
{
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub async fn resolve(&self, query: &RatingQuery) -> Result<RatingRecord, ResolveError> {
        self.resolve_with_trace(query)
            .await
            .map(|resolution| resolution.record)
    }

    pub async fn resolve_with_trace(
        &self,
        query: &RatingQuery,
    ) -> Result<Resolution, ResolveError> {
        if !query.is_complete() {
            return Err(ResolveError::MissingParameter);
        }

        let (base, recovered_model) = self.locate(query).await?;
        let (record, enriched) = self.enrich(base).await;

        Ok(Resolution {
            record,
            recovered_model,
            enriched,
        })
    }

    async fn locate(
        &self,
        query: &RatingQuery,
    ) -> Result<(RatingRecord, Option<String>), ResolveError> {
        let mut stage = Stage::Primary;

        loop {
            debug!(stage = stage.name(), %query, "resolving safety ratings");
            stage = match stage {
                Stage::Primary => {
                    let found = self
                        .lookup
                        .lookup_by_year_make_model(&query.year, &query.make, &query.model)
                        .await
                        .map_err(ResolveError::LookupFailed)?;
                    match found.into_first() {
                        Some(base) => return Ok((base, None)),
                        None => Stage::Recovering,
                    }
                }
                Stage::Recovering => {
                    let listing = self
                        .lookup
                        .lookup_all_models_for_make_year(&query.year, &query.make)
                        .await
                        .map_err(ResolveError::LookupFailed)?;
                    match select_variant(&query.model, &listing) {
                        Some(model) => Stage::Recovered { model },
                        None => Stage::Failed,
                    }
                }
                Stage::Recovered { model } => {
                    let found = self
                        .lookup
                        .lookup_by_year_make_model(&query.year, &query.make, &model)
                        .await
                        .map_err(ResolveError::LookupFailed)?;
                    match found.into_first() {
                        Some(base) => return Ok((base, Some(model))),
                        None => Stage::Failed,
                    }
                }
                Stage::Failed => return Err(ResolveError::not_found(query)),
            };
        }
    }

    async fn enrich(&self, base: RatingRecord) -> (RatingRecord, bool) {
        let Some(vehicle_id) = base.vehicle_id() else {
            return (base, false);
        };

        match self.lookup.lookup_detail_by_id(vehicle_id).await {
            Ok(detail) => match detail.into_first() {
                Some(detail) => (base.merged_with(detail), true),
                None => {
                    debug!(vehicle_id, "detail lookup returned no results");
                    (base, false)
                }
            },
            Err(err) => {
                warn!(vehicle_id, error = %err, "could not fetch detailed ratings");
                (base, false)
            }
        }
    }
}

/// First listing entry whose model name is related to `query_model`,
/// compared case-insensitively with surrounding whitespace ignored. Ties go
/// to service order. The returned name is the service's string as sent, so
/// the re-query asks for exactly what the listing offered.
pub fn select_variant(query_model: &str, listing: &ResultSet) -> Option<String> {
    let wanted = query_model.trim().to_lowercase();
    if wanted.is_empty() || listing.is_empty() {
        return None;
    }

    listing
        .results
        .iter()
        .filter_map(RatingRecord::model_name)
        .find(|candidate| variant_matches(&wanted, &candidate.trim().to_lowercase()))
        .map(str::to_string)
}

fn variant_matches(query: &str, candidate: &str) -> bool {
    candidate == query
        || candidate.starts_with(query)
        || candidate.contains(query)
        || query.starts_with(candidate)
}

#[cfg(test)]
pub(crate) fn variant_matches_for_tests(query: &str, candidate: &str) -> bool {
    variant_matches(&query.to_lowercase(), &candidate.to_lowercase())
}

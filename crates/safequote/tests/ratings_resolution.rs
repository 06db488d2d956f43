use std::sync::Mutex;

use safequote::ratings::{
    LookupError, RatingQuery, RatingRecord, RatingReport, RatingsLookup, ResolveError, ResultSet,
    RowValue, SafetyRatingResolver,
};
use serde_json::{json, Value};

/// Serves canned NHTSA answers keyed by the exact request.
#[derive(Default)]
struct CannedRatings {
    by_model: Vec<((String, String, String), ResultSet)>,
    listings: Vec<((String, String), ResultSet)>,
    details: Vec<(u64, Result<ResultSet, LookupError>)>,
    requests: Mutex<Vec<String>>,
}

impl CannedRatings {
    fn log(&self, entry: String) {
        self.requests.lock().expect("request log").push(entry);
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log").clone()
    }
}

impl RatingsLookup for CannedRatings {
    async fn lookup_by_year_make_model(
        &self,
        year: &str,
        make: &str,
        model: &str,
    ) -> Result<ResultSet, LookupError> {
        self.log(format!("model {year}/{make}/{model}"));
        Ok(self
            .by_model
            .iter()
            .find(|((y, mk, md), _)| y == year && mk == make && md == model)
            .map(|(_, set)| set.clone())
            .unwrap_or_default())
    }

    async fn lookup_all_models_for_make_year(
        &self,
        year: &str,
        make: &str,
    ) -> Result<ResultSet, LookupError> {
        self.log(format!("listing {year}/{make}"));
        Ok(self
            .listings
            .iter()
            .find(|((y, mk), _)| y == year && mk == make)
            .map(|(_, set)| set.clone())
            .unwrap_or_default())
    }

    async fn lookup_detail_by_id(&self, vehicle_id: u64) -> Result<ResultSet, LookupError> {
        self.log(format!("detail {vehicle_id}"));
        self.details
            .iter()
            .find(|(id, _)| *id == vehicle_id)
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| Ok(ResultSet::empty()))
    }
}

fn set(records: Vec<Value>) -> ResultSet {
    ResultSet::new(
        records
            .into_iter()
            .map(|value| serde_json::from_value::<RatingRecord>(value).expect("record"))
            .collect(),
    )
}

fn key3(year: &str, make: &str, model: &str) -> (String, String, String) {
    (year.to_string(), make.to_string(), model.to_string())
}

#[tokio::test]
async fn recovered_variant_feeds_a_complete_report() {
    let ratings = CannedRatings {
        by_model: vec![(
            key3("2024", "Toyota", "Camry LE"),
            set(vec![json!({
                "VehicleId": 19110,
                "VehicleDescription": "2024 Toyota Camry LE 4 DR FWD",
                "OverallRating": "5"
            })]),
        )],
        listings: vec![(
            ("2024".to_string(), "Toyota".to_string()),
            set(vec![
                json!({"VehicleId": 1, "Model": "Corolla"}),
                json!({"VehicleId": 2, "Model": "Camry LE"}),
            ]),
        )],
        details: vec![(
            19110,
            Ok(set(vec![json!({
                "VehicleId": 19110,
                "RolloverPossibility": 0.153,
                "NHTSAElectronicStabilityControl": "Standard",
                "RecallsCount": 2
            })])),
        )],
        ..CannedRatings::default()
    };
    let resolver = SafetyRatingResolver::new(ratings);

    let resolution = resolver
        .resolve_with_trace(&RatingQuery::new(2024, "Toyota", "Camry"))
        .await
        .expect("variant resolves");
    assert_eq!(resolution.recovered_model.as_deref(), Some("Camry LE"));
    assert!(resolution.enriched);

    let report = RatingReport::from_record(&resolution.record);
    let rollover = report.section("Rollover Details").expect("rollover section");
    assert_eq!(
        rollover.rows[0].value,
        RowValue::Percentage {
            value: "15.3%".to_string()
        }
    );
    assert_eq!(
        report.alerts[0].message,
        "There are 2 open recalls for this model year."
    );

    assert_eq!(
        resolver.lookup().requests(),
        [
            "model 2024/Toyota/Camry",
            "listing 2024/Toyota",
            "model 2024/Toyota/Camry LE",
            "detail 19110",
        ]
    );
}

#[tokio::test]
async fn detail_outage_still_returns_base_ratings() {
    let base = json!({"VehicleId": 7, "OverallRating": "4"});
    let ratings = CannedRatings {
        by_model: vec![(key3("2022", "Honda", "Civic"), set(vec![base.clone()]))],
        details: vec![(
            7,
            Err(LookupError::Transport {
                url: "https://api.nhtsa.gov/SafetyRatings/VehicleId/7".to_string(),
                message: "connection reset".to_string(),
            }),
        )],
        ..CannedRatings::default()
    };
    let resolver = SafetyRatingResolver::new(ratings);

    let record = resolver
        .resolve(&RatingQuery::new("2022", "Honda", "Civic"))
        .await
        .expect("base record");
    assert_eq!(
        record,
        serde_json::from_value::<RatingRecord>(base).expect("record")
    );
}

#[tokio::test]
async fn unknown_vehicle_reports_guidance() {
    let resolver = SafetyRatingResolver::new(CannedRatings::default());

    let error = resolver
        .resolve(&RatingQuery::new(2026, "Rivian", "R3"))
        .await
        .expect_err("nothing known");
    assert!(matches!(error, ResolveError::NotFound { .. }));
    assert_eq!(
        error.to_string(),
        "No safety ratings found for 2026 Rivian R3. Try an earlier year, NHTSA ratings lag newest model years by 6-12 months."
    );
}

#[tokio::test]
async fn resolver_can_be_shared_across_tasks() {
    let ratings = CannedRatings {
        by_model: vec![(
            key3("2024", "Mazda", "CX-5"),
            set(vec![json!({"VehicleId": 0, "OverallRating": "5"})]),
        )],
        ..CannedRatings::default()
    };
    let resolver = std::sync::Arc::new(SafetyRatingResolver::new(ratings));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let resolver = resolver.clone();
            tokio::spawn(async move {
                resolver
                    .resolve(&RatingQuery::new(2024, "Mazda", "CX-5"))
                    .await
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.expect("task joins"));
    }
}

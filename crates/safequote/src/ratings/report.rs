use serde::Serialize;

use super::fields::RatingField;
use super::interpret::RatingValue;
use super::record::RatingRecord;

const SUMMARY_FIELDS: [RatingField; 4] = [
    RatingField::OverallRating,
    RatingField::OverallFrontCrashRating,
    RatingField::OverallSideCrashRating,
    RatingField::RolloverRating,
];

const DETAILED_CRASH_FIELDS: [RatingField; 7] = [
    RatingField::FrontCrashDriversideRating,
    RatingField::FrontCrashPassengersideRating,
    RatingField::SideCrashDriversideRating,
    RatingField::SideCrashPassengersideRating,
    RatingField::SidePoleCrashRating,
    RatingField::CombinedSideBarrierAndPoleRatingFront,
    RatingField::CombinedSideBarrierAndPoleRatingRear,
];

const FEATURE_FIELDS: [RatingField; 3] = [
    RatingField::ElectronicStabilityControl,
    RatingField::ForwardCollisionWarning,
    RatingField::LaneDepartureWarning,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowValue {
    Rating { rating: RatingValue },
    Percentage { value: String },
    Feature { availability: String, standard: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: RowValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub heading: &'static str,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Complaints,
    Recalls,
    Investigations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportAlert {
    pub kind: AlertKind,
    pub count: u64,
    pub message: String,
}

/// Display-ready view of a resolved record. Unrated fields never appear;
/// sections with nothing rated are dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub sections: Vec<ReportSection>,
    pub alerts: Vec<ReportAlert>,
}

impl RatingReport {
    pub fn from_record(record: &RatingRecord) -> Self {
        let sections = [
            section("Safety Ratings", rating_rows(record, &SUMMARY_FIELDS)),
            section(
                "Detailed Crash Ratings",
                rating_rows(record, &DETAILED_CRASH_FIELDS),
            ),
            section("Rollover Details", rollover_rows(record)),
            section("Safety Features", feature_rows(record)),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            description: record.description(),
            model_year: record.text(RatingField::ModelYear),
            picture: record.text(RatingField::VehiclePicture),
            sections,
            alerts: alerts(record),
        }
    }

    pub fn section(&self, heading: &str) -> Option<&ReportSection> {
        self.sections
            .iter()
            .find(|section| section.heading == heading)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.alerts.is_empty()
    }
}

fn section(heading: &'static str, rows: Vec<ReportRow>) -> Option<ReportSection> {
    (!rows.is_empty()).then_some(ReportSection { heading, rows })
}

fn rating_rows(record: &RatingRecord, fields: &[RatingField]) -> Vec<ReportRow> {
    fields
        .iter()
        .filter_map(|field| rating_row(record, *field))
        .collect()
}

fn rating_row(record: &RatingRecord, field: RatingField) -> Option<ReportRow> {
    record.rating(field).map(|rating| ReportRow {
        label: field.label(),
        value: RowValue::Rating { rating },
    })
}

fn rollover_rows(record: &RatingRecord) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = rating_row(record, RatingField::RolloverRating2)
        .into_iter()
        .collect();

    for field in [
        RatingField::RolloverPossibility,
        RatingField::RolloverPossibility2,
    ] {
        if let Some(value) = record.percentage(field) {
            rows.push(ReportRow {
                label: field.label(),
                value: RowValue::Percentage { value },
            });
        }
    }

    if let Some(tip) = record.text(RatingField::DynamicTipResult) {
        rows.push(ReportRow {
            label: RatingField::DynamicTipResult.label(),
            value: RowValue::Rating {
                rating: RatingValue::Text(tip),
            },
        });
    }

    rows
}

fn feature_rows(record: &RatingRecord) -> Vec<ReportRow> {
    FEATURE_FIELDS
        .iter()
        .filter_map(|field| {
            record.text(*field).map(|availability| ReportRow {
                label: field.label(),
                value: RowValue::Feature {
                    standard: availability == "Standard",
                    availability,
                },
            })
        })
        .collect()
}

fn alerts(record: &RatingRecord) -> Vec<ReportAlert> {
    let mut alerts = Vec::new();

    let complaints = record.count(RatingField::ComplaintsCount);
    if complaints > 0 {
        alerts.push(ReportAlert {
            kind: AlertKind::Complaints,
            count: complaints,
            message: format!(
                "There have been {complaints} complaints filed for this model year."
            ),
        });
    }

    let recalls = record.count(RatingField::RecallsCount);
    if recalls > 0 {
        alerts.push(ReportAlert {
            kind: AlertKind::Recalls,
            count: recalls,
            message: format!("There are {recalls} open recalls for this model year."),
        });
    }

    let investigations = record.count(RatingField::InvestigationCount);
    if investigations > 0 {
        alerts.push(ReportAlert {
            kind: AlertKind::Investigations,
            count: investigations,
            message: format!(
                "There are {investigations} ongoing investigation(s) for this model year."
            ),
        });
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn camry() -> RatingRecord {
        serde_json::from_value(json!({
            "VehicleDescription": "2024 Toyota Camry 4 DR FWD",
            "VehicleId": 19110,
            "ModelYear": 2024,
            "OverallRating": "5",
            "OverallFrontCrashRating": "4",
            "OverallSideCrashRating": "5",
            "RolloverRating": "Not Rated",
            "FrontCrashDriversideRating": "",
            "SidePoleCrashRating": "5",
            "RolloverPossibility": 0.153,
            "RolloverPossibility2": 0,
            "dynamicTipResult": "No Tip",
            "NHTSAElectronicStabilityControl": "Standard",
            "NHTSAForwardCollisionWarning": "Optional",
            "NHTSALaneDepartureWarning": "",
            "ComplaintsCount": 12,
            "RecallsCount": 0,
            "InvestigationCount": "1"
        }))
        .expect("record")
    }

    #[test]
    fn summary_section_omits_not_rated_rows() {
        let report = RatingReport::from_record(&camry());
        let summary = report.section("Safety Ratings").expect("summary");
        let labels: Vec<&str> = summary.rows.iter().map(|row| row.label).collect();
        assert_eq!(
            labels,
            ["Overall Rating", "Front Crash Rating", "Side Crash Rating"]
        );
        assert_eq!(
            summary.rows[1].value,
            RowValue::Rating {
                rating: RatingValue::Stars(4)
            }
        );
    }

    #[test]
    fn detailed_section_keeps_only_rated_seats() {
        let report = RatingReport::from_record(&camry());
        let detailed = report.section("Detailed Crash Ratings").expect("detail");
        assert_eq!(detailed.rows.len(), 1);
        assert_eq!(detailed.rows[0].label, "Side Pole Crash Rating");
    }

    #[test]
    fn rollover_section_formats_percentages() {
        let report = RatingReport::from_record(&camry());
        let rollover = report.section("Rollover Details").expect("rollover");
        assert_eq!(
            rollover.rows[0],
            ReportRow {
                label: "Rollover Possibility",
                value: RowValue::Percentage {
                    value: "15.3%".to_string()
                },
            }
        );
        assert_eq!(rollover.rows.len(), 2);
        assert_eq!(rollover.rows[1].label, "Dynamic Tip Result");
    }

    #[test]
    fn features_mark_standard_equipment() {
        let report = RatingReport::from_record(&camry());
        let features = report.section("Safety Features").expect("features");
        assert_eq!(
            features.rows,
            vec![
                ReportRow {
                    label: "Electronic Stability Control",
                    value: RowValue::Feature {
                        availability: "Standard".to_string(),
                        standard: true,
                    },
                },
                ReportRow {
                    label: "Forward Collision Warning",
                    value: RowValue::Feature {
                        availability: "Optional".to_string(),
                        standard: false,
                    },
                },
            ]
        );
    }

    #[test]
    fn alerts_skip_zero_counts() {
        let report = RatingReport::from_record(&camry());
        let kinds: Vec<AlertKind> = report.alerts.iter().map(|alert| alert.kind).collect();
        assert_eq!(kinds, [AlertKind::Complaints, AlertKind::Investigations]);
        assert_eq!(
            report.alerts[1].message,
            "There are 1 ongoing investigation(s) for this model year."
        );
    }

    #[test]
    fn header_fields_are_carried() {
        let report = RatingReport::from_record(&camry());
        assert_eq!(
            report.description.as_deref(),
            Some("2024 Toyota Camry 4 DR FWD")
        );
        assert_eq!(report.model_year.as_deref(), Some("2024"));
        assert!(report.picture.is_none());
    }

    #[test]
    fn any_rated_row_is_enough_to_show_its_section() {
        let record: RatingRecord = serde_json::from_value(json!({
            "RolloverRating2": "Not Rated",
            "RolloverPossibility": 0,
            "RolloverPossibility2": 0.2,
            "combinedSideBarrierAndPoleRating-Rear": "4"
        }))
        .expect("record");
        let report = RatingReport::from_record(&record);

        let rollover = report.section("Rollover Details").expect("rollover shown");
        assert_eq!(rollover.rows.len(), 1);
        assert_eq!(rollover.rows[0].label, "Rollover Possibility (Alt)");
        assert_eq!(
            rollover.rows[0].value,
            RowValue::Percentage {
                value: "20.0%".to_string()
            }
        );

        let detailed = report.section("Detailed Crash Ratings").expect("detail shown");
        assert_eq!(detailed.rows[0].label, "Side Barrier Rating - Rear");
        assert!(report.section("Safety Ratings").is_none());
        assert!(report.section("Safety Features").is_none());
    }

    #[test]
    fn unrated_record_produces_empty_report() {
        let record: RatingRecord = serde_json::from_value(json!({
            "OverallRating": "Not Rated",
            "ComplaintsCount": 0
        }))
        .expect("record");
        assert!(RatingReport::from_record(&record).is_empty());
    }
}

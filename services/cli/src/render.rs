use serde::Serialize;

use safequote::catalog::{FilterSpec, VehicleRecord};
use safequote::error::AppError;
use safequote::insurance::InsuranceQuote;
use safequote::ratings::{RatingQuery, RatingReport, RatingValue, ResolveError, RowValue};

const ALTERNATIVE_RESOURCES: [(&str, &str); 2] = [
    ("NHTSA", "https://www.nhtsa.gov/ratings"),
    ("IIHS", "https://www.iihs.org/ratings"),
];

#[derive(Serialize)]
pub(crate) struct RatingsView<'a> {
    pub(crate) query: &'a RatingQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) recovered_model: Option<&'a str>,
    pub(crate) enriched: bool,
    pub(crate) report: &'a RatingReport,
}

#[derive(Serialize)]
pub(crate) struct RatingsFailure<'a> {
    query: &'a RatingQuery,
    error: String,
    resources: Vec<&'static str>,
}

impl<'a> RatingsFailure<'a> {
    pub(crate) fn new(query: &'a RatingQuery, error: &ResolveError) -> Self {
        Self {
            query,
            error: error.to_string(),
            resources: ALTERNATIVE_RESOURCES.iter().map(|(_, url)| *url).collect(),
        }
    }
}

pub(crate) fn json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn vehicle_list(spec: &FilterSpec, vehicles: &[VehicleRecord]) {
    println!(
        "Vehicles (condition: {}, type: {}, {}+ stars, up to {})",
        spec.condition,
        spec.vehicle_type,
        spec.min_safety_rating,
        dollars(spec.max_price)
    );
    if vehicles.is_empty() {
        println!("No vehicles match these filters. Try widening the price or rating range.");
        return;
    }
    for vehicle in vehicles {
        vehicle_line(vehicle);
    }
}

pub(crate) fn top_picks(max_price: u32, picks: &[VehicleRecord]) {
    println!("Top safety picks up to {}", dollars(max_price));
    if picks.is_empty() {
        println!("No five-star vehicles in this price range.");
        return;
    }
    for pick in picks {
        vehicle_line(pick);
    }
}

fn vehicle_line(vehicle: &VehicleRecord) {
    println!(
        "  #{:<3} {:<28} {:<9} {:<10} {:>8}  {:>7} mi  {}",
        vehicle.id,
        vehicle.display_name(),
        vehicle.condition,
        vehicle.vehicle_type,
        dollars(vehicle.price),
        vehicle.mileage,
        stars(vehicle.safety_rating)
    );
    if !vehicle.safety_features.is_empty() {
        println!("        {}", vehicle.safety_features.join(", "));
    }
}

pub(crate) fn rating_report(query: &RatingQuery, recovered: Option<&str>, report: &RatingReport) {
    let title = report
        .description
        .clone()
        .unwrap_or_else(|| query.to_string());
    println!("{title}");
    if let Some(model) = recovered {
        println!("  (matched NHTSA model \"{model}\" for \"{}\")", query.model);
    }
    if let Some(picture) = &report.picture {
        println!("  {picture}");
    }

    if report.sections.is_empty() {
        println!("\nNHTSA has not published star ratings for this vehicle yet.");
    }
    for section in &report.sections {
        println!("\n{}", section.heading);
        for row in &section.rows {
            println!("  {:<32} {}", row.label, row_value(&row.value));
        }
    }

    for alert in &report.alerts {
        println!("\n! {}", alert.message);
    }
}

fn row_value(value: &RowValue) -> String {
    match value {
        RowValue::Rating {
            rating: RatingValue::Stars(count),
        } => stars(*count),
        RowValue::Rating {
            rating: RatingValue::Text(text),
        } => text.clone(),
        RowValue::Percentage { value } => value.clone(),
        RowValue::Feature {
            availability,
            standard: true,
        } => format!("{availability} ✓"),
        RowValue::Feature { availability, .. } => availability.clone(),
    }
}

/// Printed ahead of the error itself, which `main` reports on stderr.
pub(crate) fn rating_failure() {
    print!("{}", alternative_resources());
}

fn alternative_resources() -> String {
    let mut text = String::from("You can also check safety ratings directly:\n");
    for (name, url) in ALTERNATIVE_RESOURCES {
        text.push_str(&format!("  - {name}: {url}\n"));
    }
    text
}

pub(crate) fn name_list<'a>(heading: &str, entries: impl Iterator<Item = (u64, &'a str)>) {
    let entries: Vec<_> = entries.collect();
    println!("{} {heading}", entries.len());
    for (id, name) in entries {
        println!("  {id:>6}  {name}");
    }
}

pub(crate) fn quotes(vehicle: Option<&VehicleRecord>, quotes: &[InsuranceQuote]) {
    match vehicle {
        Some(vehicle) => println!("Insurance quotes for a {}", vehicle.display_name()),
        None => println!("Example quotes for a typical safe vehicle. These are sample rates."),
    }
    for quote in quotes {
        let marker = if quote.recommended { " (recommended)" } else { "" };
        println!(
            "\n{}{marker}\n  ${}/month, {}% safe-vehicle discount, rated {:.1}\n  {}",
            quote.provider, quote.monthly_price, quote.discount, quote.rating, quote.url
        );
        for item in &quote.coverage {
            println!("  - {item}");
        }
    }
}

fn stars(count: u8) -> String {
    let filled = usize::from(count.min(5));
    format!("{}{} ({count}/5)", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_group_thousands() {
        assert_eq!(dollars(0), "$0");
        assert_eq!(dollars(950), "$950");
        assert_eq!(dollars(25_000), "$25,000");
        assert_eq!(dollars(1_234_567), "$1,234,567");
    }

    #[test]
    fn stars_fill_from_the_left() {
        assert_eq!(stars(4), "★★★★☆ (4/5)");
        assert_eq!(stars(5), "★★★★★ (5/5)");
    }

    #[test]
    fn standard_features_are_marked() {
        let standard = RowValue::Feature {
            availability: "Standard".to_string(),
            standard: true,
        };
        let optional = RowValue::Feature {
            availability: "Optional".to_string(),
            standard: false,
        };
        assert_eq!(row_value(&standard), "Standard ✓");
        assert_eq!(row_value(&optional), "Optional");
    }

    #[test]
    fn failure_text_lists_resources_without_repeating_the_error() {
        let text = alternative_resources();
        assert!(text.contains("https://www.nhtsa.gov/ratings"));
        assert!(text.contains("https://www.iihs.org/ratings"));
        assert!(!text.contains("No safety ratings found"));
    }

    #[test]
    fn failure_payload_lists_alternative_resources() {
        let query = RatingQuery::new(2026, "Rivian", "R3");
        let error = ResolveError::NotFound {
            year: "2026".to_string(),
            make: "Rivian".to_string(),
            model: "R3".to_string(),
        };
        let failure = RatingsFailure::new(&query, &error);
        assert_eq!(failure.resources.len(), 2);
        assert!(failure.error.contains("2026 Rivian R3"));
    }
}

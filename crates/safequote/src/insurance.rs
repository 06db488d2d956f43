//! Partner insurance quote estimates shown next to a catalog vehicle.

use serde::Serialize;

use crate::catalog::{Condition, VehicleRecord};

const NEW_BASE_MONTHLY: u32 = 180;
const PREOWNED_BASE_MONTHLY: u32 = 150;
const DISCOUNT_PER_STAR: u32 = 2;
/// Records with no rating are priced as if five-star.
const UNRATED_STARS: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceQuote {
    pub provider: &'static str,
    pub url: &'static str,
    pub monthly_price: u32,
    pub rating: f32,
    pub discount: u8,
    pub recommended: bool,
    pub coverage: Vec<&'static str>,
}

struct Partner {
    provider: &'static str,
    url: &'static str,
    surcharge: u32,
    rating: f32,
    discount: u8,
    recommended: bool,
    coverage: &'static [&'static str],
}

const PARTNERS: [Partner; 3] = [
    Partner {
        provider: "SafeGuard Insurance",
        url: "https://www.progressive.com/",
        surcharge: 0,
        rating: 4.8,
        discount: 15,
        recommended: true,
        coverage: &[
            "Liability Coverage",
            "Collision Coverage",
            "Comprehensive Coverage",
            "Teen Driver Discount",
            "24/7 Roadside Assistance",
        ],
    },
    Partner {
        provider: "DriveSecure",
        url: "https://www.geico.com/",
        surcharge: 20,
        rating: 4.6,
        discount: 10,
        recommended: false,
        coverage: &[
            "Full Coverage",
            "Accident Forgiveness",
            "New Driver Support",
            "Mobile App Tracking",
        ],
    },
    Partner {
        provider: "YouthShield Auto",
        url: "https://www.statefarm.com/",
        surcharge: 35,
        rating: 4.5,
        discount: 12,
        recommended: false,
        coverage: &[
            "Liability & Collision",
            "Teen Safety Program",
            "Defensive Driving Discount",
            "Parent Portal Access",
        ],
    },
];

/// Estimated monthly quotes from each partner, recommended partner first.
pub fn quotes_for(vehicle: &VehicleRecord) -> Vec<InsuranceQuote> {
    priced(Some(vehicle.condition), vehicle.safety_rating)
}

/// Sample rates shown before the visitor has picked a vehicle.
pub fn sample_quotes() -> Vec<InsuranceQuote> {
    priced(None, 0)
}

fn priced(condition: Option<Condition>, safety_rating: u8) -> Vec<InsuranceQuote> {
    let base = match condition {
        Some(Condition::New) => NEW_BASE_MONTHLY,
        Some(Condition::Preowned) | None => PREOWNED_BASE_MONTHLY,
    };
    let stars = match safety_rating {
        0 => UNRATED_STARS,
        stars => stars,
    };
    let discounted = base.saturating_sub(u32::from(stars) * DISCOUNT_PER_STAR);

    PARTNERS
        .iter()
        .map(|partner| InsuranceQuote {
            provider: partner.provider,
            url: partner.url,
            monthly_price: discounted + partner.surcharge,
            rating: partner.rating,
            discount: partner.discount,
            recommended: partner.recommended,
            coverage: partner.coverage.to_vec(),
        })
        .collect()
}

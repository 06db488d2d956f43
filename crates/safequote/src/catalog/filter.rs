use super::domain::{FilterSpec, Selection, VehicleRecord};

/// Number of picks the finder highlights above the results grid.
pub const TOP_PICK_LIMIT: usize = 4;

/// Returns the records admitted by `spec`, in catalog order.
pub fn filter_vehicles(catalog: &[VehicleRecord], spec: &FilterSpec) -> Vec<VehicleRecord> {
    catalog
        .iter()
        .filter(|vehicle| matches_spec(vehicle, spec))
        .cloned()
        .collect()
}

pub fn matches_spec(vehicle: &VehicleRecord, spec: &FilterSpec) -> bool {
    spec.condition.admits(&vehicle.condition)
        && spec.vehicle_type.admits(&vehicle.vehicle_type)
        && vehicle.safety_rating >= spec.min_safety_rating
        && vehicle.price <= spec.max_price
}

/// Five-star vehicles within the price ceiling of `spec`, ignoring its
/// condition, type and rating choices.
pub fn top_safety_picks(
    catalog: &[VehicleRecord],
    spec: &FilterSpec,
    limit: usize,
) -> Vec<VehicleRecord> {
    let five_star = FilterSpec {
        condition: Selection::All,
        vehicle_type: Selection::All,
        min_safety_rating: FilterSpec::MAX_SAFETY_RATING,
        max_price: spec.max_price,
    };

    catalog
        .iter()
        .filter(|vehicle| matches_spec(vehicle, &five_star))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{Condition, VehicleType};
    use crate::catalog::Catalog;

    fn spec(condition: &str, vehicle_type: &str, min_rating: u8, max_price: u32) -> FilterSpec {
        FilterSpec {
            condition: condition.parse().expect("valid condition"),
            vehicle_type: vehicle_type.parse().expect("valid type"),
            min_safety_rating: min_rating,
            max_price,
        }
    }

    #[test]
    fn permissive_spec_returns_catalog_in_order() {
        let catalog = Catalog::standard();
        let result = filter_vehicles(catalog.vehicles(), &FilterSpec::permissive());
        assert_eq!(result, catalog.vehicles());
    }

    #[test]
    fn condition_filter_is_case_insensitive() {
        let catalog = Catalog::standard();
        let lower = filter_vehicles(catalog.vehicles(), &spec("new", "all", 1, 100_000));
        let upper = filter_vehicles(catalog.vehicles(), &spec("NEW", "all", 1, 100_000));

        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
        assert!(lower.iter().all(|v| v.condition == Condition::New));
    }

    #[test]
    fn type_filter_matches_suv_label() {
        let catalog = Catalog::standard();
        let suvs = filter_vehicles(catalog.vehicles(), &spec("all", "suv", 1, 100_000));
        let models: Vec<&str> = suvs.iter().map(|v| v.model.as_str()).collect();
        assert_eq!(models, ["CX-5", "Outback", "Rogue", "CR-V"]);
        assert!(suvs.iter().all(|v| v.vehicle_type == VehicleType::Suv));
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let catalog = Catalog::standard();
        let result = filter_vehicles(catalog.vehicles(), &spec("all", "all", 1, 25_000));
        assert!(result.iter().any(|v| v.model == "Civic" && v.price == 25_000));
        assert!(result.iter().all(|v| v.price <= 25_000));
    }

    #[test]
    fn combined_filters_can_yield_nothing() {
        let catalog = Catalog::standard();
        let result = filter_vehicles(catalog.vehicles(), &spec("new", "truck", 5, 10_000));
        assert!(result.is_empty());
    }

    #[test]
    fn rating_above_scale_yields_nothing() {
        let catalog = Catalog::standard();
        let result = filter_vehicles(catalog.vehicles(), &spec("all", "all", 6, u32::MAX));
        assert!(result.is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        assert!(filter_vehicles(&[], &FilterSpec::permissive()).is_empty());
    }

    #[test]
    fn top_picks_ignore_condition_and_type_but_keep_price() {
        let catalog = Catalog::standard();
        let narrowed = spec("preowned", "hatchback", 1, 30_000);
        let picks = top_safety_picks(catalog.vehicles(), &narrowed, TOP_PICK_LIMIT);

        let models: Vec<&str> = picks.iter().map(|v| v.model.as_str()).collect();
        assert_eq!(models, ["Civic", "Corolla", "Outback"]);
    }

    #[test]
    fn top_picks_respect_limit() {
        let catalog = Catalog::standard();
        let picks = top_safety_picks(catalog.vehicles(), &FilterSpec::default(), TOP_PICK_LIMIT);
        assert_eq!(picks.len(), TOP_PICK_LIMIT);
        assert!(picks.iter().all(|v| v.safety_rating == 5));
    }
}

use safequote::catalog::{filter_vehicles, top_safety_picks, FilterSpec};
use safequote::config::AppConfig;
use safequote::error::AppError;
use safequote::insurance::{quotes_for, sample_quotes};
use safequote::ratings::{NhtsaRatingsClient, RatingQuery, RatingReport, SafetyRatingResolver};
use safequote::telemetry;
use safequote::vpic::{default_year_range, year_range, VpicClient};
use tracing::{info, warn};

use crate::cli::{
    GlobalArgs, ModelsArgs, QuotesArgs, RatingsArgs, TopPicksArgs, VehiclesArgs, YearsArgs,
};
use crate::infra::{find_vehicle, load_catalog};
use crate::render;

/// Loaded configuration plus the output mode chosen on the command line.
pub(crate) struct Session {
    pub(crate) config: AppConfig,
    pub(crate) json: bool,
}

impl Session {
    pub(crate) fn start(global: GlobalArgs) -> Result<Self, AppError> {
        let mut config = AppConfig::load()?;

        if let Some(url) = global.ratings_base_url {
            config.nhtsa.ratings_base_url = url;
        }
        if let Some(url) = global.vpic_base_url {
            config.nhtsa.vpic_base_url = url;
        }

        telemetry::init(&config.telemetry)?;
        info!(
            ?config.environment,
            ratings = %config.nhtsa.ratings_base_url,
            vpic = %config.nhtsa.vpic_base_url,
            "safequote cli ready"
        );

        Ok(Self {
            config,
            json: global.json,
        })
    }
}

pub(crate) fn run_vehicles(session: &Session, args: VehiclesArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let spec = FilterSpec {
        condition: args.condition,
        vehicle_type: args.vehicle_type,
        min_safety_rating: args.min_rating,
        max_price: args.max_price,
    };

    let matches = filter_vehicles(catalog.vehicles(), &spec);
    info!(total = catalog.len(), matched = matches.len(), "catalog filtered");

    if session.json {
        return render::json(&matches);
    }
    render::vehicle_list(&spec, &matches);
    Ok(())
}

pub(crate) fn run_top_picks(session: &Session, args: TopPicksArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let spec = FilterSpec {
        max_price: args.max_price,
        ..FilterSpec::default()
    };
    let picks = top_safety_picks(catalog.vehicles(), &spec, args.limit);

    if session.json {
        return render::json(&picks);
    }
    render::top_picks(args.max_price, &picks);
    Ok(())
}

pub(crate) async fn run_ratings(session: &Session, args: RatingsArgs) -> Result<(), AppError> {
    let query = match args.vehicle {
        Some(id) => {
            let catalog = load_catalog(args.catalog.as_deref())?;
            let vehicle = find_vehicle(&catalog, id)?;
            RatingQuery::new(vehicle.year, vehicle.make, vehicle.model)
        }
        None => RatingQuery::new(
            args.year.unwrap_or_default(),
            args.make.unwrap_or_default(),
            args.model.unwrap_or_default(),
        ),
    };

    let client = NhtsaRatingsClient::from_config(&session.config.nhtsa)?;
    let resolver = SafetyRatingResolver::new(client);

    info!(%query, "looking up safety ratings");
    match resolver.resolve_with_trace(&query).await {
        Ok(resolution) => {
            let report = RatingReport::from_record(&resolution.record);
            if session.json {
                return render::json(&render::RatingsView {
                    query: &query,
                    recovered_model: resolution.recovered_model.as_deref(),
                    enriched: resolution.enriched,
                    report: &report,
                });
            }
            render::rating_report(&query, resolution.recovered_model.as_deref(), &report);
            Ok(())
        }
        Err(err) => {
            warn!(%query, error = %err, "safety ratings unavailable");
            if session.json {
                render::json(&render::RatingsFailure::new(&query, &err))?;
            } else {
                render::rating_failure();
            }
            Err(err.into())
        }
    }
}

pub(crate) async fn run_makes(session: &Session) -> Result<(), AppError> {
    let client = VpicClient::from_config(&session.config.nhtsa)?;
    let makes = client.all_makes().await?;

    if session.json {
        return render::json(&makes);
    }
    render::name_list(
        "makes",
        makes.iter().map(|make| (make.id, make.name.as_str())),
    );
    Ok(())
}

pub(crate) async fn run_models(session: &Session, args: ModelsArgs) -> Result<(), AppError> {
    let client = VpicClient::from_config(&session.config.nhtsa)?;
    let models = client.models_for_make_year(&args.make, &args.year).await?;

    if session.json {
        return render::json(&models);
    }
    render::name_list(
        &format!("{} {} models", args.year.trim(), args.make.trim()),
        models.iter().map(|model| (model.id, model.name.as_str())),
    );
    Ok(())
}

pub(crate) fn run_quotes(session: &Session, args: QuotesArgs) -> Result<(), AppError> {
    let (vehicle, quotes) = match args.vehicle {
        Some(id) => {
            let catalog = load_catalog(args.catalog.as_deref())?;
            let vehicle = find_vehicle(&catalog, id)?;
            let quotes = quotes_for(&vehicle);
            (Some(vehicle), quotes)
        }
        None => (None, sample_quotes()),
    };

    if session.json {
        return render::json(&quotes);
    }
    render::quotes(vehicle.as_ref(), &quotes);
    Ok(())
}

pub(crate) fn run_years(session: &Session, args: YearsArgs) -> Result<(), AppError> {
    let years = match args.end {
        Some(end) => year_range(args.start, end),
        None => default_year_range()
            .into_iter()
            .filter(|year| *year >= args.start)
            .collect(),
    };

    if session.json {
        return render::json(&years);
    }
    for year in years {
        println!("{year}");
    }
    Ok(())
}

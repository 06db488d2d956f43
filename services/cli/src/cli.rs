use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use safequote::catalog::{ConditionFilter, TypeFilter, TOP_PICK_LIMIT};
use safequote::error::AppError;
use safequote::vpic::EARLIEST_MODEL_YEAR;
use url::Url;

use crate::commands::{self, Session};

#[derive(Parser, Debug)]
#[command(
    name = "safequote",
    about = "Find safe vehicles, check NHTSA crash ratings and compare insurance quotes",
    version
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog vehicles matching a filter
    Vehicles(VehiclesArgs),
    /// Show the five-star vehicles under a price ceiling
    TopPicks(TopPicksArgs),
    /// Look up NHTSA 5-Star Safety Ratings for a vehicle
    Ratings(RatingsArgs),
    /// List every make known to the NHTSA vehicle catalog
    Makes,
    /// List models offered by a make in a model year
    Models(ModelsArgs),
    /// Estimate partner insurance quotes
    Quotes(QuotesArgs),
    /// List the model years offered by year pickers
    Years(YearsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    pub(crate) json: bool,
    /// Override the NHTSA Safety Ratings base URL
    #[arg(long, global = true, value_parser = crate::infra::parse_url)]
    pub(crate) ratings_base_url: Option<Url>,
    /// Override the NHTSA vPIC base URL
    #[arg(long, global = true, value_parser = crate::infra::parse_url)]
    pub(crate) vpic_base_url: Option<Url>,
}

#[derive(Args, Debug)]
pub(crate) struct VehiclesArgs {
    /// all, new or preowned
    #[arg(long, default_value = "all", value_parser = crate::infra::parse_condition)]
    pub(crate) condition: ConditionFilter,
    /// all, sedan, suv, hatchback or truck
    #[arg(long = "type", default_value = "all", value_parser = crate::infra::parse_vehicle_type)]
    pub(crate) vehicle_type: TypeFilter,
    /// Minimum NHTSA star rating (1-5)
    #[arg(long, default_value_t = 4, value_parser = crate::infra::parse_star_rating)]
    pub(crate) min_rating: u8,
    /// Maximum price in whole dollars
    #[arg(long, default_value_t = 50_000)]
    pub(crate) max_price: u32,
    /// Catalog CSV export to browse instead of the built-in inventory
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct TopPicksArgs {
    /// Maximum price in whole dollars
    #[arg(long, default_value_t = 50_000)]
    pub(crate) max_price: u32,
    /// Number of picks to show
    #[arg(long, default_value_t = TOP_PICK_LIMIT)]
    pub(crate) limit: usize,
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RatingsArgs {
    /// Catalog vehicle to look up instead of --year/--make/--model
    #[arg(long, conflicts_with_all = ["year", "make", "model"])]
    pub(crate) vehicle: Option<u32>,
    #[arg(long, required_unless_present = "vehicle", value_parser = crate::infra::parse_required)]
    pub(crate) year: Option<String>,
    #[arg(long, required_unless_present = "vehicle", value_parser = crate::infra::parse_required)]
    pub(crate) make: Option<String>,
    #[arg(long, required_unless_present = "vehicle", value_parser = crate::infra::parse_required)]
    pub(crate) model: Option<String>,
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ModelsArgs {
    #[arg(long)]
    pub(crate) make: String,
    #[arg(long)]
    pub(crate) year: String,
}

#[derive(Args, Debug)]
pub(crate) struct QuotesArgs {
    /// Catalog vehicle to quote. Sample rates are shown when omitted.
    #[arg(long)]
    pub(crate) vehicle: Option<u32>,
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct YearsArgs {
    /// Earliest year to list
    #[arg(long, default_value_t = EARLIEST_MODEL_YEAR)]
    pub(crate) start: i32,
    /// Latest year to list (defaults to next year)
    #[arg(long)]
    pub(crate) end: Option<i32>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let session = Session::start(cli.global)?;

    match cli.command {
        Command::Vehicles(args) => commands::run_vehicles(&session, args),
        Command::TopPicks(args) => commands::run_top_picks(&session, args),
        Command::Ratings(args) => commands::run_ratings(&session, args).await,
        Command::Makes => commands::run_makes(&session).await,
        Command::Models(args) => commands::run_models(&session, args).await,
        Command::Quotes(args) => commands::run_quotes(&session, args),
        Command::Years(args) => commands::run_years(&session, args),
    }
}

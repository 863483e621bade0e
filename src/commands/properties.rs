//! Properties command - Search listings from the terminal.

use crate::cli::args::PropertiesArgs;
use crate::config::Config;
use crate::domain::PropertySearch;
use crate::errors::AppResult;
use crate::infra::open_store;
use crate::services::Services;

/// Execute the properties command
pub async fn execute(args: PropertiesArgs, config: Config) -> AppResult<()> {
    let services = Services::from_store(open_store(&config).await?);

    let search = PropertySearch {
        owner_id: args.owner_id,
        city: args.city,
        minimum_price_per_night: args.minimum_price_per_night,
        maximum_price_per_night: args.maximum_price_per_night,
        minimum_rating: args.minimum_rating,
    };

    let listings = services
        .properties()
        .get_all_properties(search, args.limit)
        .await?;
    tracing::debug!(count = listings.len(), "Properties found");

    super::print_json(&listings)
}

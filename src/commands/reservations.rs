//! Reservations command - A guest's past stays.

use crate::cli::args::ReservationsArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::open_store;
use crate::services::Services;

/// Execute the reservations command
pub async fn execute(args: ReservationsArgs, config: Config) -> AppResult<()> {
    let services = Services::from_store(open_store(&config).await?);

    let reservations = services
        .reservations()
        .get_all_reservations(args.guest_id, args.limit)
        .await?;
    tracing::debug!(count = reservations.len(), guest_id = args.guest_id, "Reservations found");

    super::print_json(&reservations)
}

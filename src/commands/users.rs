//! User command - Look up one user.

use crate::cli::args::UserArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::open_store;
use crate::services::Services;

/// Execute the user command
pub async fn execute(args: UserArgs, config: Config) -> AppResult<()> {
    let services = Services::from_store(open_store(&config).await?);
    let users = services.users();

    let user = match (args.lookup.id, args.lookup.email) {
        (Some(id), _) => users.get_user_with_id(id).await?,
        (None, Some(email)) => users.get_user_with_email(&email).await?,
        (None, None) => return Err(AppError::bad_request("pass --id or --email")),
    };

    super::print_json(&user.ok_or_not_found()?)
}

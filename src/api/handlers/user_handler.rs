//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::{QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult, OptionExt};

/// Query parameters for the email lookup
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Email address, matched case-insensitively
    pub email: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(find_user_by_email).post(create_user))
        .route("/:id", get(get_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.add_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user_with_id(id).await?;
    Ok(Json(user.ok_or_not_found()?))
}

/// Find a user by email
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(EmailQuery),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Missing email"),
        (status = 404, description = "No user with that email")
    )
)]
pub async fn find_user_by_email(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<EmailQuery>,
) -> AppResult<Json<User>> {
    let email = query
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("email is required"))?;

    let user = state.user_service.get_user_with_email(email.trim()).await?;
    Ok(Json(user.ok_or_not_found()?))
}

//! User management controller.
//!
//! Each handler picks its own failure status: reads answer 404 for any
//! service failure, writes answer 500 with the error text.

use crate::{
    extractors::{ValidatedJson, ValidatedJsonRejection},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use registry_core::{ErrorResponse, UserId};
use registry_service::{CreateUserRequest, UpdateUserRequest, UserResponse, UserWithAgeResponse};
use tracing::{debug, error, info, warn};

/// Creates the user router.
///
/// Routing is strict: `/users/` is not an alias for `/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body or validation failure", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    debug!("Create user request: {}", request.name);

    let user = state.user_service.create_user(request).await.map_err(|e| {
        error!("Failed to create user: {}", e);
        AppError::internal(&e)
    })?;

    info!(id = %user.id, name = %user.name, "User created");
    Ok(created(user))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users in id order", body = [UserWithAgeResponse]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserWithAgeResponse>> {
    debug!("List users request");

    let users = state.user_service.list_users().await.map_err(|e| {
        error!("Failed to list users: {}", e);
        AppError::internal(&e)
    })?;

    info!(count = users.len(), "Users listed");
    ok(users)
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User with derived age", body = UserWithAgeResponse),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserWithAgeResponse> {
    debug!("Get user request: {}", id);

    let user_id = parse_user_id(&id)?;

    let user = state
        .user_service
        .get_user_by_id(user_id)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                warn!("User {} not found", user_id);
            } else {
                error!("Failed to get user {}: {}", user_id, e);
            }
            AppError::not_found("user not found")
        })?;

    info!(id = %user.id, "User fetched");
    ok(user)
}

/// Replace a user's name and date of birth.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid ID, malformed body or validation failure", body = ErrorResponse),
        (status = 500, description = "Store failure or unknown user", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<ValidatedJson<UpdateUserRequest>, ValidatedJsonRejection>,
) -> Result<Json<UserResponse>, Response> {
    debug!("Update user request: {}", id);

    // The id is checked before the body.
    let user_id = parse_user_id(&id).map_err(IntoResponse::into_response)?;
    let ValidatedJson(request) = body.map_err(IntoResponse::into_response)?;

    let user = state
        .user_service
        .update_user(user_id, request)
        .await
        .map_err(|e| {
            error!("Failed to update user {}: {}", user_id, e);
            AppError::internal(&e).into_response()
        })?;

    info!(id = %user.id, name = %user.name, "User updated");
    Ok(Json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 500, description = "Store failure or unknown user", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    let user_id = parse_user_id(&id)?;

    state.user_service.delete_user(user_id).await.map_err(|e| {
        error!("Failed to delete user {}: {}", user_id, e);
        AppError::internal(&e)
    })?;

    info!(id = %user_id, "User deleted");
    Ok(no_content())
}

fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id).map_err(|e| {
        warn!("Invalid ID param {:?}: {}", id, e);
        AppError::bad_request("invalid user ID")
    })
}

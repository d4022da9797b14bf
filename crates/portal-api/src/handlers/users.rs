//! Admin user management handlers.
//!
//! Every handler takes [`AdminUser`] ahead of its path, query and
//! body extractors.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

use portal_entity::user::UserRole;
use portal_service::NewUser;

use crate::dto::request::{CreateUserRequest, ListUsersQuery, UpdateUserRequest};
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, ApiQuery, UserId, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    ApiQuery(query): ApiQuery<ListUsersQuery>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let filter = query.filter()?;
    let page = state
        .directory
        .list_users(&filter, query.page_request())
        .await?;

    Ok(Json(ApiResponse::paged(
        "Users retrieved successfully",
        page,
        UserResponse::from,
    )))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    UserId(id): UserId,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.directory.get_user(id).await?;
    Ok(Json(ApiResponse::ok("User retrieved successfully", user.into())))
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    let role = req.role.parse::<UserRole>()?;
    let user = state
        .directory
        .create_user(NewUser {
            username: req.username,
            password: req.password,
            role,
        })
        .await?;

    info!(actor_id = admin.id, user_id = user.id, "Admin created user");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("User created successfully", user.into())),
    ))
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    admin: AdminUser,
    UserId(id): UserId,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.directory.update_user(id, req.into_changes()?).await?;

    info!(actor_id = admin.id, user_id = id, "Admin updated user");
    Ok(Json(ApiResponse::ok("User updated successfully", user.into())))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    admin: AdminUser,
    UserId(id): UserId,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.directory.delete_user(id).await?;

    info!(actor_id = admin.id, user_id = id, "Admin deleted user");
    Ok(Json(ApiResponse::ok_message("User deleted successfully")))
}

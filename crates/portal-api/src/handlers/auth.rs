//! Auth handlers: login, refresh, profile, change-password.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{ChangePasswordRequest, LoginRequest, RefreshRequest};
use crate::dto::response::{ApiResponse, TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let tokens = state.tokens.login(&req.username, &req.password).await?;
    Ok(Json(ApiResponse::ok("Login successful", tokens.into())))
}

/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let tokens = state.tokens.refresh(&req.refresh_token).await?;
    Ok(Json(ApiResponse::ok("Tokens refreshed successfully", tokens.into())))
}

/// GET /api/v1/auth/profile
pub async fn profile(auth: AuthUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::ok(
        "Profile retrieved successfully",
        auth.0.into_user().into(),
    ))
}

/// PUT /api/v1/auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .tokens
        .change_password(auth.id, &req.current_password, &req.new_password)
        .await?;
    Ok(Json(ApiResponse::ok_message("Password changed successfully")))
}

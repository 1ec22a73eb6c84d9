use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, MessageResponse, SignupRequest},
        principals,
        repo::User,
    },
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> ApiResult<Json<MessageResponse>> {
    if payload.password != payload.confirm_password {
        warn!(username = %payload.username, "signup password mismatch");
        return Err(ApiError::validation(
            "confirmPassword",
            "Passwords do not match.",
        ));
    }

    let errors = payload.validate();
    if !errors.is_empty() {
        warn!(username = %payload.username, ?errors, "signup validation failed");
        return Err(ApiError::Validation(errors));
    }

    // Check-then-insert; not atomic, concurrent identical signups can race.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email is already registered"));
    }

    let user = User::create(
        &state.db,
        &payload.username,
        &payload.email,
        &payload.password,
        &payload.confirm_password,
    )
    .await?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok(Json(MessageResponse {
        message: "User registered successfully",
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    // Special principals win over stored users; a failed rule falls through
    // to the regular lookup rather than rejecting outright.
    if let Some(user_type) = principals::resolve(&payload.username, &payload.password) {
        info!(%user_type, "special principal logged in");
        return Ok(Json(LoginResponse {
            user_type: user_type.to_string(),
            user_id: None,
            user_name: None,
        }));
    }

    match User::find_by_username(&state.db, &payload.username).await? {
        Some(user) if user.password == payload.password => {
            info!(user_id = %user.id, username = %user.username, "user logged in");
            Ok(Json(LoginResponse {
                user_type: "user".to_string(),
                user_id: Some(user.id),
                user_name: Some(user.username),
            }))
        }
        _ => {
            warn!(username = %payload.username, "login invalid credentials");
            Err(ApiError::InvalidCredentials)
        }
    }
}

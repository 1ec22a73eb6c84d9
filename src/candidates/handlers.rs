use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use bytes::Bytes;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    candidates::{
        dto::{ApprovalResponse, DetailsPayload, MessageResponse, UserDetailsItem},
        repo::UserDetails,
    },
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn candidate_routes() -> Router<AppState> {
    Router::new()
        .route("/add-details", post(add_details))
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024)) // 20MB, CV held fully in memory
        .route("/approval-status/:name", get(approval_status))
        .route("/check-approval/:user_id", get(check_approval))
        .route("/approve-user/:user_id", put(approve_user))
        .route("/user-details", get(list_user_details))
        .route("/download-cv/:user_id", get(download_cv))
}

/// POST /add-details (multipart)
/// Fields: `data` (JSON: name, email, exp) and `cv` (the file).
#[instrument(skip(state, multipart))]
pub async fn add_details(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let mut data: Option<String> = None;
    let mut cv: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("data") => data = Some(field.text().await?),
            Some("cv") => cv = Some(field.bytes().await?),
            _ => {}
        }
    }

    let data = data.ok_or(ApiError::MissingUploadField("data"))?;
    let cv = cv.ok_or(ApiError::MissingUploadField("cv"))?;
    let payload: DetailsPayload = serde_json::from_str(&data)?;

    let details = UserDetails::create(
        &state.db,
        &payload.name,
        &payload.email,
        &payload.exp.as_text(),
        &cv,
    )
    .await?;

    info!(details_id = %details.id, name = %details.name, cv_bytes = cv.len(), "user details added");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User details added successfully",
        }),
    ))
}

/// GET /approval-status/:name
///
/// Lookup by candidate name. Reports false for unknown names rather than 404.
#[instrument(skip(state))]
pub async fn approval_status(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ApprovalResponse>> {
    let details = UserDetails::find_by_name(&state.db, &name).await?;
    let approved = details.map(|d| d.approved).unwrap_or(false);
    Ok(Json(ApprovalResponse { approved }))
}

/// GET /check-approval/:user_id
///
/// Same contract as approval-status but keyed by record id. The two routes
/// are intentionally kept separate; existing clients call both.
#[instrument(skip(state))]
pub async fn check_approval(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<ApprovalResponse>> {
    let details = UserDetails::find_by_id(&state.db, user_id).await?;
    let approved = details.map(|d| d.approved).unwrap_or(false);
    Ok(Json(ApprovalResponse { approved }))
}

/// PUT /approve-user/:user_id
///
/// Unconditional approval; succeeds even when the id matches nothing.
#[instrument(skip(state))]
pub async fn approve_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    UserDetails::approve(&state.db, user_id).await?;
    info!(%user_id, "user approved");
    Ok(Json(MessageResponse {
        message: "User approved successfully",
    }))
}

/// GET /user-details
#[instrument(skip(state))]
pub async fn list_user_details(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserDetailsItem>>> {
    let rows = UserDetails::list_all(&state.db).await?;
    let items = rows
        .into_iter()
        .map(|d| UserDetailsItem {
            name: d.name,
            email: d.email,
            exp: d.exp,
            cv: serde_bytes::ByteBuf::from(d.cv),
        })
        .collect();
    Ok(Json(items))
}

/// GET /download-cv/:user_id
#[instrument(skip(state))]
pub async fn download_cv(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<(HeaderMap, Vec<u8>)> {
    let details = UserDetails::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::MissingRecord)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        attachment_disposition(&details.name)
            .parse()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("content-disposition: {e}")))?,
    );

    info!(%user_id, name = %details.name, cv_bytes = details.cv.len(), "cv downloaded");
    Ok((headers, details.cv))
}

fn attachment_disposition(name: &str) -> String {
    format!("attachment; filename=\"{}_CV.pdf\"", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_uses_candidate_name() {
        assert_eq!(
            attachment_disposition("Alice"),
            "attachment; filename=\"Alice_CV.pdf\""
        );
    }

    #[test]
    fn disposition_parses_as_a_header_value() {
        let value: HeaderValue = attachment_disposition("Bob").parse().unwrap();
        assert!(value.to_str().unwrap().ends_with("Bob_CV.pdf\""));
    }
}

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::BookingDraft;
use crate::services::calendar::generate_ics;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ConfirmationQuery {
    #[serde(flatten)]
    pub draft: BookingDraft,
    pub reference: Option<String>,
}

pub async fn download_ics(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConfirmationQuery>,
) -> Result<Response, AppError> {
    let reference = query
        .reference
        .as_deref()
        .and_then(|r| Uuid::parse_str(r).ok())
        .ok_or_else(|| AppError::NotFound("booking reference".to_string()))?;

    // a visit that has already happened still gets its calendar entry
    let request = query.draft.booking(NaiveDate::MIN)?;

    let ics = generate_ics(
        &reference.to_string(),
        &request,
        &state.config.center_name,
        Utc::now(),
    );
    let disposition = format!("attachment; filename=\"visit-{reference}.ics\"");

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        ics,
    )
        .into_response())
}

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, ValidationErrors};
use crate::models::{
    GeoPoint, RecommendRouteInput, RecommendRouteOutput, RouteRequest, SlotAvailability,
};
use crate::services::ai::route;
use crate::services::validation;
use crate::state::AppState;

// GET /api/slots?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    date: NaiveDate,
    slots: Vec<SlotAvailability>,
}

pub async fn slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let date = validation::validate_date(query.date.as_deref(), state.today())?;
    Ok(Json(SlotsResponse {
        date,
        slots: state.ledger.availability(date),
    }))
}

// POST /api/route
pub async fn recommend_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RouteRequest>,
) -> Result<Json<RecommendRouteOutput>, AppError> {
    let user = GeoPoint::parse(&body.user_location).map_err(|e| {
        tracing::debug!(error = %e, "rejected user location");
        let mut errors = ValidationErrors::default();
        errors.push("userLocation", "Location must be \"latitude,longitude\".");
        AppError::Validation(errors)
    })?;

    let input = RecommendRouteInput {
        user_location: user.to_string(),
        experience_center_location: state.config.center_location.clone(),
    };

    tracing::info!(user_location = %input.user_location, "requesting route recommendation");

    let output = route::recommend_route(state.llm.as_ref(), &input)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "error getting route recommendation");
            AppError::Ai("Failed to get route from AI model.".to_string())
        })?;

    Ok(Json(output))
}

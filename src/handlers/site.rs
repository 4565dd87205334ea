use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::errors::AppError;
use crate::models::{GeoPoint, LoginForm};
use crate::services::validation;
use crate::state::AppState;
use crate::views;

pub async fn login_page() -> Html<String> {
    Html(views::site::login_page(None, None))
}

// POST /login: checks the form only, there are no accounts behind it
pub async fn submit_login(Form(form): Form<LoginForm>) -> Response {
    match validation::validate_login(&form) {
        Ok(()) => {
            tracing::info!(email = %form.email.trim(), "login accepted");
            Redirect::to("/home").into_response()
        }
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::site::login_page(Some(&form), Some(&errors))),
        )
            .into_response(),
    }
}

pub async fn home_page() -> Html<String> {
    Html(views::site::home_page())
}

pub async fn map_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let center = GeoPoint::parse(&state.config.center_location)
        .map_err(|e| AppError::Config(e.to_string()))?;
    Ok(Html(views::site::map_page(&state.config.center_name, center)))
}

pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        views::STYLE_CSS,
    )
}

pub async fn map_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        views::MAP_JS,
    )
}

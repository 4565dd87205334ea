pub mod api;
pub mod booking;
pub mod calendar;
pub mod health;
pub mod site;

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let api = Router::new()
        .route("/api/slots", get(api::slots))
        .route("/api/route", post(api::recommend_route))
        .layer(cors);

    Router::new()
        .route("/health", get(health::health))
        .route("/", get(site::login_page))
        .route("/login", post(site::submit_login))
        .route("/home", get(site::home_page))
        .route("/map", get(site::map_page))
        .route("/static/style.css", get(site::style_css))
        .route("/static/map.js", get(site::map_js))
        .route(
            "/book/date",
            get(booking::date_page).post(booking::submit_date),
        )
        .route(
            "/book/time",
            get(booking::time_page).post(booking::submit_time),
        )
        .route(
            "/book/details",
            get(booking::details_page).post(booking::submit_details),
        )
        .route(
            "/book/contact",
            get(booking::contact_page).post(booking::submit_contact),
        )
        .route(
            "/book/payment",
            get(booking::payment_page).post(booking::submit_payment),
        )
        .route(
            "/book/confirmation.ics",
            get(calendar::download_ics),
        )
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

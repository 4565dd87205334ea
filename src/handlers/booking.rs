//! The five wizard steps. GET renders a step from the query string, POST
//! validates that step's input and redirects to the next one with the state
//! so far. Any step reached without the earlier steps' values sends the
//! visitor back to the start.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::errors::ReservationError;
use crate::models::{BookingDraft, BookingRequest, Step, Visit};
use crate::services::{checkout, validation};
use crate::state::AppState;
use crate::views;

fn start_over() -> Response {
    Redirect::to("/book/date?error=missing").into_response()
}

/// Redirects to the step after `from`, carrying `draft` along.
fn advance(draft: &BookingDraft, from: Step) -> Response {
    match from.next() {
        Some(to) => Redirect::to(&draft.url_for(to)).into_response(),
        None => start_over(),
    }
}

fn rerender(status: StatusCode, html: String) -> Response {
    (status, Html(html)).into_response()
}

// ── Step 1: date ──

#[derive(Deserialize, Default)]
pub struct DatePageQuery {
    pub date: Option<String>,
    pub error: Option<String>,
}

pub async fn date_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DatePageQuery>,
) -> Html<String> {
    let missing = query.error.as_deref() == Some("missing");
    Html(views::wizard::date_page(
        state.today(),
        query.date.as_deref(),
        None,
        missing,
    ))
}

pub async fn submit_date(
    State(state): State<Arc<AppState>>,
    Form(draft): Form<BookingDraft>,
) -> Response {
    let today = state.today();
    match validation::validate_date(draft.date.as_deref(), today) {
        Ok(date) => {
            let next = BookingDraft {
                date: Some(date.format("%Y-%m-%d").to_string()),
                ..Default::default()
            };
            advance(&next, Step::Date)
        }
        Err(errors) => rerender(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::wizard::date_page(today, draft.date.as_deref(), Some(&errors), false),
        ),
    }
}

// ── Step 2: time ──

pub async fn time_page(
    State(state): State<Arc<AppState>>,
    Query(draft): Query<BookingDraft>,
) -> Response {
    let Ok(date) = draft.visit_date(state.today()) else {
        return start_over();
    };
    let slots = state.ledger.availability(date);
    Html(views::wizard::time_page(&draft, date, &slots, None)).into_response()
}

pub async fn submit_time(
    State(state): State<Arc<AppState>>,
    Form(draft): Form<BookingDraft>,
) -> Response {
    let Ok(date) = draft.visit_date(state.today()) else {
        return start_over();
    };

    let (status, message) = match validation::validate_time(draft.time.as_deref()) {
        Ok(time) if state.ledger.available(date, time) > 0 => {
            let next = BookingDraft {
                date: draft.date.clone(),
                time: Some(time.label()),
                ..Default::default()
            };
            return advance(&next, Step::Time);
        }
        Ok(_) => (StatusCode::CONFLICT, ReservationError::SoldOut.to_string()),
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            errors.message_for("time").unwrap_or_default().to_string(),
        ),
    };

    let slots = state.ledger.availability(date);
    rerender(
        status,
        views::wizard::time_page(&draft, date, &slots, Some(&message)),
    )
}

// ── Step 3: visitor details ──

pub async fn details_page(
    State(state): State<Arc<AppState>>,
    Query(draft): Query<BookingDraft>,
) -> Response {
    let Ok((date, _)) = draft.slot(state.today()) else {
        return start_over();
    };
    let visitors = draft.visitors.as_deref().unwrap_or("1");
    Html(views::wizard::details_page(
        &draft,
        date,
        visitors,
        state.config.ticket_price,
        None,
    ))
    .into_response()
}

pub async fn submit_details(
    State(state): State<Arc<AppState>>,
    Form(draft): Form<BookingDraft>,
) -> Response {
    let Ok((date, time)) = draft.slot(state.today()) else {
        return start_over();
    };

    match validation::validate_visitors(draft.visitors.as_deref()) {
        Ok(visitors) => {
            let next = BookingDraft {
                date: draft.date.clone(),
                time: Some(time.label()),
                visitors: Some(visitors.to_string()),
                ..Default::default()
            };
            advance(&next, Step::Details)
        }
        Err(errors) => rerender(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::wizard::details_page(
                &draft,
                date,
                draft.visitors.as_deref().unwrap_or_default(),
                state.config.ticket_price,
                Some(&errors),
            ),
        ),
    }
}

// ── Step 4: contact ──

pub async fn contact_page(
    State(state): State<Arc<AppState>>,
    Query(draft): Query<BookingDraft>,
) -> Response {
    if draft.require(Step::Contact, state.today()).is_err() {
        return start_over();
    }
    Html(views::wizard::contact_page(&draft, None)).into_response()
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Form(draft): Form<BookingDraft>,
) -> Response {
    let Ok(visit) = draft.visit(state.today()) else {
        return start_over();
    };

    match validation::validate_contact(&draft) {
        Ok(contact) => {
            let request = BookingRequest { visit, contact };
            advance(&BookingDraft::from(&request), Step::Contact)
        }
        Err(errors) => rerender(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::wizard::contact_page(&draft, Some(&errors)),
        ),
    }
}

// ── Step 5: payment ──

pub async fn payment_page(
    State(state): State<Arc<AppState>>,
    Query(draft): Query<BookingDraft>,
) -> Response {
    let Ok(request) = draft.booking(state.today()) else {
        return start_over();
    };
    Html(views::wizard::payment_page(
        &request,
        state.config.ticket_price,
        None,
    ))
    .into_response()
}

pub async fn submit_payment(
    State(state): State<Arc<AppState>>,
    Form(draft): Form<BookingDraft>,
) -> Response {
    let Ok(request) = draft.booking(state.today()) else {
        return start_over();
    };

    match checkout::confirm_booking(&state.ledger, request.clone(), state.config.ticket_price) {
        Ok(confirmed) => Html(views::wizard::confirmation_page(&confirmed)).into_response(),
        Err(e) => {
            let Visit { date, time, .. } = request.visit;
            tracing::warn!(%date, %time, error = %e, "payment refused");
            rerender(
                StatusCode::CONFLICT,
                views::wizard::payment_page(
                    &request,
                    state.config.ticket_price,
                    Some(&e.to_string()),
                ),
            )
        }
    }
}

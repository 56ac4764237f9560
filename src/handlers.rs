use crate::errors::AppError;
use crate::ledger;
use crate::models::{
    FoodCountEntry, HistoryResponse, RemoveFoodRequest, RolloverRequest, RolloverResponse,
    SelectFoodRequest, SessionData, SessionResponse, TrackerData,
};
use crate::session;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use chrono::{Local, Locale};
use tracing::error;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&display_date(), &data.session.totals))
}

pub async fn get_session(State(state): State<AppState>) -> Result<Json<SessionResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(session_response(&data.session, None)))
}

pub async fn get_history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(HistoryResponse {
        entries: data.ledger.entries.clone(),
        running_calories: data.ledger.running_calories,
    }))
}

pub async fn select_food(
    State(state): State<AppState>,
    Json(payload): Json<SelectFoodRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut data = state.data.lock().await;
    let added = session::select_food(&mut data.session, &payload.name, payload.nutrients())?;
    ledger::add_calories(&mut data.ledger, added.calories);

    let warning = stage(&state, &data).await;
    Ok(Json(session_response(&data.session, warning)))
}

pub async fn remove_food(
    State(state): State<AppState>,
    Json(payload): Json<RemoveFoodRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut data = state.data.lock().await;
    let removed = session::remove_food(&mut data.session, &payload.name)?;
    ledger::add_calories(&mut data.ledger, -removed.calories);

    let warning = stage(&state, &data).await;
    Ok(Json(session_response(&data.session, warning)))
}

pub async fn rollover(
    State(state): State<AppState>,
    Json(payload): Json<RolloverRequest>,
) -> Result<Json<RolloverResponse>, AppError> {
    let label = payload
        .date
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .unwrap_or_else(stat_date);

    let mut data = state.data.lock().await;
    let entry = ledger::record_rollover(&mut data.ledger, label);

    let warning = stage(&state, &data).await;
    Ok(Json(RolloverResponse {
        entry,
        running_calories: data.ledger.running_calories,
        warning,
    }))
}

pub async fn rollover_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let mut data = state.data.lock().await;
    ledger::record_rollover(&mut data.ledger, stat_date());
    stage(&state, &data).await;
    Ok(Redirect::to("/"))
}

// A failed write loses durability, not the mutation: the state stays applied
// in memory and the client gets a warning instead of an error.
async fn stage(state: &AppState, data: &TrackerData) -> Option<String> {
    match persist_data(&state.data_path, data).await {
        Ok(()) => None,
        Err(err) => {
            error!("failed to persist data file: {}", err.message);
            Some(format!("saved in memory only: {}", err.message))
        }
    }
}

fn session_response(session: &SessionData, warning: Option<String>) -> SessionResponse {
    SessionResponse {
        date: display_date(),
        totals: session.totals.clone(),
        foods: session
            .foods
            .iter()
            .map(|(name, record)| FoodCountEntry {
                name: name.clone(),
                count: record.count,
            })
            .collect(),
        warning,
    }
}

fn display_date() -> String {
    let formatted = Local::now()
        .date_naive()
        .format_localized("%A %-d %B", Locale::fr_FR)
        .to_string();
    capitalize_first(formatted)
}

fn stat_date() -> String {
    Local::now()
        .date_naive()
        .format_localized("%-d %B %Y", Locale::fr_FR)
        .to_string()
}

fn capitalize_first(value: String) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => value,
    }
}

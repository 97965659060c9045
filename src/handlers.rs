use crate::errors::AppError;
use crate::models::{
    ActivityQuery, ActivityRecord, ActivityResponse, DisciplineCount, TickRequest, TickResponse,
};
use crate::state::AppState;
use crate::stats::{build_activity, discipline_counts};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.ticks.lock().await;
    Html(render_index(&today_string(), data.ticks.len()))
}

pub async fn list_ticks(State(state): State<AppState>) -> Json<Vec<ActivityRecord>> {
    let data = state.ticks.lock().await;
    Json(data.ticks.clone())
}

pub async fn add_tick(
    State(state): State<AppState>,
    Json(payload): Json<TickRequest>,
) -> Result<Json<TickResponse>, AppError> {
    let response = apply_tick(&state, payload).await?;
    Ok(Json(response))
}

pub async fn add_tick_form(
    State(state): State<AppState>,
    Form(payload): Form<TickRequest>,
) -> Result<Redirect, AppError> {
    apply_tick(&state, payload).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_disciplines(State(state): State<AppState>) -> Json<Vec<DisciplineCount>> {
    let data = state.ticks.lock().await;
    Json(discipline_counts(&data.ticks))
}

pub async fn get_activity(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<ActivityResponse>, AppError> {
    let data = state.ticks.lock().await;
    let response = build_activity(&data, query.discipline.as_deref(), query.window.as_deref())?;
    Ok(Json(response))
}

async fn apply_tick(state: &AppState, payload: TickRequest) -> Result<TickResponse, AppError> {
    let tick = normalize_tick(payload)?;
    let mut data = state.ticks.lock().await;
    let mut next = data.clone();
    next.ticks.push(tick.clone());

    persist_data(&state.data_path, &next).await?;
    *data = next;
    info!(date = %tick.date, discipline = ?tick.discipline, "logged tick");

    Ok(TickResponse {
        tick,
        total_ticks: data.ticks.len(),
    })
}

fn normalize_tick(payload: TickRequest) -> Result<ActivityRecord, AppError> {
    let date = payload.date.trim();
    if date.is_empty() {
        return Err(AppError::bad_request("date must not be empty"));
    }

    let discipline = payload
        .discipline
        .as_deref()
        .map(str::trim)
        .filter(|tag| !tag.is_empty());

    Ok(ActivityRecord::new(discipline, date))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

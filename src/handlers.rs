use crate::errors::{AppError, ValidationError};
use crate::models::{EntryForm, LogResponse};
use crate::state::AppState;
use crate::summary::build_summary;
use crate::table::{EntryId, FoodLog, LogRow};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use tracing::{debug, info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let log = state.log.lock().await;
    Html(render_page(&log, &state, None))
}

pub async fn get_log(State(state): State<AppState>) -> Json<LogResponse> {
    let log = state.log.lock().await;
    Json(to_response(&log, &state))
}

pub async fn submit_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryForm>,
) -> Result<Json<LogResponse>, AppError> {
    let mut log = state.log.lock().await;
    apply_submit(&mut log, &payload)?;
    Ok(Json(to_response(&log, &state)))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<LogResponse> {
    let mut log = state.log.lock().await;
    apply_delete(&mut log, &id);
    Json(to_response(&log, &state))
}

/// Plain form submission. Rejected input re-renders the page with the
/// message instead of redirecting.
pub async fn submit_form(State(state): State<AppState>, Form(form): Form<EntryForm>) -> Response {
    let mut log = state.log.lock().await;
    match apply_submit(&mut log, &form) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => {
            let page = render_page(&log, &state, Some(&err.to_string()));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
        }
    }
}

pub async fn delete_form(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let mut log = state.log.lock().await;
    apply_delete(&mut log, &id);
    Redirect::to("/")
}

fn apply_submit(log: &mut FoodLog, form: &EntryForm) -> Result<LogRow, ValidationError> {
    match log.submit_entry(&form.food, &form.amount, &form.kcal_per_unit) {
        Ok(row) => {
            info!(
                id = %row.id,
                rank = row.rank,
                food = %row.food,
                amount = row.amount,
                kcal = row.kcal,
                "entry added"
            );
            Ok(row)
        }
        Err(err) => {
            warn!(field = %err.field(), "rejected entry: {err}");
            Err(err)
        }
    }
}

/// Any path segment that does not name a live entry, numeric or not, is a no-op.
fn apply_delete(log: &mut FoodLog, raw_id: &str) {
    let Ok(id) = raw_id.parse::<EntryId>() else {
        debug!(id = raw_id, "delete ignored, not an entry id");
        return;
    };
    let rank = log.rank_of(id);
    match (rank, log.delete_entry(id)) {
        (Some(rank), Some(entry)) => info!(
            id = %entry.id,
            rank,
            food = %entry.food,
            remaining = log.len(),
            "entry deleted"
        ),
        _ => debug!(id = %id, "delete ignored, no such entry"),
    }
}

fn render_page(log: &FoodLog, state: &AppState, error: Option<&str>) -> String {
    let summary = build_summary(log, state.budget);
    render_index(&log.snapshot(), &summary, error)
}

fn to_response(log: &FoodLog, state: &AppState) -> LogResponse {
    LogResponse::new(log.snapshot(), build_summary(log, state.budget))
}

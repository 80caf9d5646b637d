use crate::errors::AppError;
use crate::models::{
    DayResponse, NotesRequest, PlanResponse, TodayResponse, ToggleRequest, ViewMode, ViewRequest,
    ViewResponse,
};
use crate::plan::{PlanStore, TASKS, WEEKLY_GOALS, day_label};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    response::{Html, Redirect},
};
use tracing::debug;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = state.today();
    let plan = state.plan.lock().await;
    Html(render_index(&day_label(today), plan.view()))
}

pub async fn get_plan(State(state): State<AppState>) -> Json<PlanResponse> {
    let today = state.today();
    let plan = state.plan.lock().await;
    let days = (0..plan.days().len())
        .map(|index| day_response(&plan, index))
        .collect();

    Json(PlanResponse {
        start_date: plan.start_date().to_string(),
        view: plan.view(),
        today_index: plan.current_day_index(today),
        tasks: TASKS.to_vec(),
        goals: WEEKLY_GOALS.to_vec(),
        days,
    })
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    let today = state.today();
    let plan = state.plan.lock().await;
    let day_index = plan.current_day_index(today);
    let day = usize::try_from(day_index)
        .ok()
        .filter(|index| *index < plan.days().len())
        .map(|index| day_response(&plan, index));

    Json(TodayResponse {
        date: today.to_string(),
        day_index,
        active: day.is_some(),
        day,
    })
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let mut plan = state.plan.lock().await;
    let done = plan.toggle_task(payload.day, payload.task)?;
    debug!("day {} task {} -> {done}", payload.day, payload.task);
    Ok(Json(day_response(&plan, payload.day)))
}

pub async fn set_notes(
    State(state): State<AppState>,
    Json(payload): Json<NotesRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let mut plan = state.plan.lock().await;
    plan.set_notes(payload.day, payload.notes)?;
    debug!("day {} notes updated", payload.day);
    Ok(Json(day_response(&plan, payload.day)))
}

pub async fn set_view(
    State(state): State<AppState>,
    Json(payload): Json<ViewRequest>,
) -> Json<ViewResponse> {
    let mut plan = state.plan.lock().await;
    plan.set_view(payload.view);
    Json(ViewResponse { view: plan.view() })
}

pub async fn switch_view(
    State(state): State<AppState>,
    Path(mode): Path<String>,
) -> Result<Redirect, AppError> {
    let view = ViewMode::from_tag(&mode)
        .ok_or_else(|| AppError::bad_request("view must be 'today', 'weekly' or 'adjust'"))?;
    let mut plan = state.plan.lock().await;
    plan.set_view(view);
    Ok(Redirect::to("/"))
}

fn day_response(plan: &PlanStore, index: usize) -> DayResponse {
    let record = plan.day(index).cloned().unwrap_or_default();
    let date = plan.date_for(index);
    DayResponse {
        index,
        date: date.to_string(),
        label: day_label(date),
        completed: record.completed,
        notes: record.notes,
    }
}

//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs ids, sizes and basic result info.

use std::sync::Arc;
use axum::{extract::State, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::catalog::objective_catalog;
use crate::levels::LEVEL_TABLE;
use crate::logic::*;
use crate::normalize::filter_tasks_by_tier;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info")]
pub async fn http_get_objectives() -> impl IntoResponse {
  let objectives = objective_catalog();
  info!(target: "goals_planner", count = objectives.len(), "HTTP objectives listed");
  Json(ObjectivesOut { objectives })
}

#[instrument(level = "info")]
pub async fn http_get_levels() -> impl IntoResponse {
  Json(LevelsOut { levels: &LEVEL_TABLE })
}

#[instrument(level = "info", skip(body), fields(objective_id = %body.sub_objective_id, months = body.duration_months))]
pub async fn http_post_breakdown(Json(body): Json<BreakdownIn>) -> impl IntoResponse {
  let out = build_breakdown(&body);
  info!(target: "breakdown", family = out.objective_family, tasks = out.tasks.len(), "HTTP breakdown served");
  Json(out)
}

#[instrument(level = "info", skip(state, body), fields(target_score = body.target_score, days = ?body.days_remaining))]
pub async fn http_post_study_plan(
  State(state): State<Arc<AppState>>,
  Json(body): Json<StudyPlanIn>,
) -> impl IntoResponse {
  let plan = study_plan_for(&state, &body);
  info!(target: "study_plan", daily = plan.daily_minutes_required, difficulty = ?plan.difficulty_level, "HTTP study plan served");
  Json(plan)
}

#[instrument(level = "info", skip(body), fields(tasks = body.tasks.len(), tier = ?body.tier))]
pub async fn http_post_tier_filter(Json(body): Json<TierFilterIn>) -> impl IntoResponse {
  Json(filter_tasks_by_tier(&body.tasks, body.tier))
}

#[instrument(level = "info", skip(body), fields(items = body.items.len()))]
pub async fn http_post_progress(Json(body): Json<ProgressIn>) -> impl IntoResponse {
  Json(ProgressOut { percent: progress_percent(&body.items) })
}

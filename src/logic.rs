//! Core behaviors behind the HTTP handlers.
//!
//! This includes:
//!   - Breakdown generation plus the tier split the dashboard renders
//!   - Resolving a study-plan request (days or target date) against the loaded tuning
//!   - Weighted goal progress

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, instrument};

use crate::domain::{StudyPlan, TaskBreakdownConfig};
use crate::generator::generate_task_breakdown;
use crate::normalize::filter_tasks_by_tier;
use crate::objective::Objective;
use crate::progress::{calculate_study_plan_with, days_remaining, weighted_progress, ProgressItem};
use crate::protocol::{BreakdownOut, StudyPlanIn};
use crate::state::AppState;

#[instrument(level = "info", skip(config), fields(objective_id = %config.sub_objective_id, tier = ?config.user_tier))]
pub fn build_breakdown(config: &TaskBreakdownConfig) -> BreakdownOut {
  let family = Objective::from_id(&config.sub_objective_id).family();
  let tasks = generate_task_breakdown(config);
  let split = filter_tasks_by_tier(&tasks, config.user_tier);

  let accessible: Vec<u32> = split.accessible.iter().map(|t| t.display_order).collect();
  let locked: Vec<u32> = split.locked.iter().map(|t| t.display_order).collect();
  info!(target: "breakdown", family, total = tasks.len(), locked = locked.len(), "Breakdown built");

  BreakdownOut { objective_family: family, tasks, accessible, locked }
}

/// Days left for a study-plan request. Negative inputs clamp to zero.
pub fn resolve_days(req: &StudyPlanIn, today: NaiveDate) -> u32 {
  match (req.days_remaining, req.target_date) {
    (Some(d), _) => u32::try_from(d.max(0)).unwrap_or(u32::MAX),
    (None, Some(date)) => days_remaining(date, today),
    (None, None) => 0,
  }
}

#[instrument(level = "info", skip(state, req), fields(target_score = req.target_score, club = req.include_speaking_club))]
pub fn study_plan_for(state: &AppState, req: &StudyPlanIn) -> StudyPlan {
  study_plan_on(state, req, Utc::now().date_naive())
}

pub fn study_plan_on(state: &AppState, req: &StudyPlanIn, today: NaiveDate) -> StudyPlan {
  let days = resolve_days(req, today);
  debug!(target: "study_plan", days, "Resolved study horizon");
  calculate_study_plan_with(
    &state.config,
    &req.objective_label,
    &req.current_scores,
    req.target_score,
    days,
    req.include_speaking_club,
  )
}

pub fn progress_percent(items: &[ProgressItem]) -> u32 {
  weighted_progress(items)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::PlannerConfig;
  use crate::domain::{DifficultyLevel, MembershipTier, SkillScores};

  fn plan_req(days: Option<i64>, date: Option<NaiveDate>) -> StudyPlanIn {
    StudyPlanIn {
      objective_label: "IELTS 7.0".into(),
      current_scores: SkillScores::uniform(6.0),
      target_score: 7.0,
      days_remaining: days,
      target_date: date,
      include_speaking_club: false,
    }
  }

  #[test]
  fn explorer_split_covers_every_task_once() {
    let out = build_breakdown(&TaskBreakdownConfig {
      sub_objective_id: "ielts_70".into(),
      user_tier: MembershipTier::Explorer,
      ..Default::default()
    });
    assert_eq!(out.objective_family, "ielts");
    assert!(!out.locked.is_empty());
    let mut all: Vec<u32> = out.accessible.iter().chain(out.locked.iter()).copied().collect();
    all.sort_unstable();
    assert_eq!(all, (1..=out.tasks.len() as u32).collect::<Vec<_>>());
  }

  #[test]
  fn elevated_tier_locks_nothing() {
    let out = build_breakdown(&TaskBreakdownConfig {
      sub_objective_id: "public_speaking".into(),
      user_tier: MembershipTier::Visionary,
      ..Default::default()
    });
    assert!(out.locked.is_empty());
  }

  #[test]
  fn days_take_precedence_and_clamp() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let later = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
    assert_eq!(resolve_days(&plan_req(Some(30), Some(later)), today), 30);
    assert_eq!(resolve_days(&plan_req(Some(-5), None), today), 0);
    assert_eq!(resolve_days(&plan_req(None, Some(later)), today), 10);
    assert_eq!(resolve_days(&plan_req(None, None), today), 0);
  }

  #[test]
  fn study_plan_uses_loaded_tuning() {
    let mut config = PlannerConfig::default();
    config.study_plan.minutes_per_band = 1200;
    let state = AppState { config };
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    // 1 band * 1200 / 100 days = 12/day
    let plan = study_plan_on(&state, &plan_req(Some(100), None), today);
    assert_eq!(plan.daily_minutes_required, 12);
    assert_eq!(plan.difficulty_level, DifficultyLevel::Easy);
  }
}

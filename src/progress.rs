//! Study-plan calculator and goal progress helpers.
//!
//! `calculate_study_plan` turns a band gap and a number of remaining days into a
//! daily study load. It never fails: a zero-day horizon is treated as one day,
//! and when a gap remains the result is reported as `Extreme` with the daily
//! load capped at `max_daily_minutes`.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::PlannerConfig;
use crate::domain::{DifficultyLevel, SkillScores, SpeakingClubImpact, StudyPlan};
use crate::util::{fill_template, percent_of, round_half_up};

/// Calculate with the built-in tuning.
pub fn calculate_study_plan(
  objective_label: &str,
  current: &SkillScores,
  target_score: f32,
  days_remaining: u32,
  include_speaking_club: bool,
) -> StudyPlan {
  calculate_study_plan_with(
    &PlannerConfig::default(),
    objective_label,
    current,
    target_score,
    days_remaining,
    include_speaking_club,
  )
}

#[instrument(level = "debug", target = "study_plan", skip(cfg, current))]
pub fn calculate_study_plan_with(
  cfg: &PlannerConfig,
  objective_label: &str,
  current: &SkillScores,
  target_score: f32,
  days_remaining: u32,
  include_speaking_club: bool,
) -> StudyPlan {
  let tuning = &cfg.study_plan;
  let gap = band_gap(current, target_score);
  let days = days_remaining.max(1);

  let total_minutes = round_half_up(gap * tuning.minutes_per_band as f64);

  let (daily, difficulty, template) = if total_minutes == 0 {
    (tuning.maintenance_minutes, DifficultyLevel::Easy, &cfg.recommendations.maintain)
  } else {
    let daily = round_half_up(total_minutes as f64 / days as f64)
      .max(1)
      .min(tuning.max_daily_minutes.max(1));
    let difficulty = if days_remaining == 0 {
      DifficultyLevel::Extreme
    } else {
      classify(cfg, daily)
    };
    let template = match difficulty {
      DifficultyLevel::Easy => &cfg.recommendations.easy,
      DifficultyLevel::Moderate => &cfg.recommendations.moderate,
      DifficultyLevel::Challenging => &cfg.recommendations.challenging,
      DifficultyLevel::Extreme => &cfg.recommendations.extreme,
    };
    (daily, difficulty, template)
  };

  let label = objective_label.trim();
  let label = if label.is_empty() { "your goal" } else { label };
  let recommendation = fill_template(
    template,
    &[
      ("objective", label),
      ("minutes", &daily.to_string()),
      ("days", &days.to_string()),
    ],
  );

  let speaking_club_impact = include_speaking_club.then(|| speaking_club_impact(cfg, days, total_minutes));

  debug!(target: "study_plan", gap, total_minutes, daily, ?difficulty, "Study plan calculated");

  StudyPlan {
    daily_minutes_required: daily,
    difficulty_level: difficulty,
    recommendation,
    speaking_club_impact,
  }
}

/// Remaining band gap on the 0..9 scale. Missing current scores count as zero.
fn band_gap(current: &SkillScores, target: f32) -> f64 {
  if !target.is_finite() {
    return 0.0;
  }
  let current = current.average().unwrap_or(0.0) as f64;
  (target as f64 - current).max(0.0)
}

fn classify(cfg: &PlannerConfig, daily: u32) -> DifficultyLevel {
  let t = &cfg.study_plan;
  if daily < t.easy_below {
    DifficultyLevel::Easy
  } else if daily < t.moderate_below {
    DifficultyLevel::Moderate
  } else if daily < t.challenging_below {
    DifficultyLevel::Challenging
  } else {
    DifficultyLevel::Extreme
  }
}

fn speaking_club_impact(cfg: &PlannerConfig, days: u32, total_minutes: u32) -> SpeakingClubImpact {
  let club = &cfg.speaking_club;
  let per_week = if club.sessions_per_week.is_finite() { club.sessions_per_week.max(0.0) } else { 0.0 };
  let sessions = ((days as f64 / 7.0) * per_week).ceil();
  let total_sessions = if sessions >= u32::MAX as f64 { u32::MAX } else { (sessions as u32).max(1) };

  let club_minutes = total_sessions as u64 * club.session_minutes as u64;
  let contribution = percent_of(club_minutes, total_minutes as u64).min(club.max_contribution_percent);

  SpeakingClubImpact { contribution_percent: contribution, total_sessions }
}

/// Whole days from `today` until `target`, floored at zero.
pub fn days_remaining(target: NaiveDate, today: NaiveDate) -> u32 {
  let days = (target - today).num_days();
  u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Absolute due time of a stored task given its creation time and deadline offset.
pub fn resolve_deadline(created_at: DateTime<Utc>, deadline_days: Option<u32>) -> Option<DateTime<Utc>> {
  deadline_days.and_then(|d| created_at.checked_add_signed(Duration::days(d as i64)))
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressItem {
  pub weight: u32,
  #[serde(default)]
  pub completed: bool,
}

/// Goal completion as the weighted share of completed tasks, 0..=100.
pub fn weighted_progress(items: &[ProgressItem]) -> u32 {
  let total: u64 = items.iter().map(|i| i.weight as u64).sum();
  let done: u64 = items.iter().filter(|i| i.completed).map(|i| i.weight as u64).sum();
  percent_of(done, total).min(100)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn zero_days_is_extreme_and_finite() {
    let plan = calculate_study_plan("IELTS 7.0", &SkillScores::uniform(5.5), 7.0, 0, false);
    assert_eq!(plan.difficulty_level, DifficultyLevel::Extreme);
    assert_eq!(plan.daily_minutes_required, 1440);
    assert!(plan.speaking_club_impact.is_none());
  }

  #[test]
  fn thresholds_pick_each_category() {
    // one band = 12000 minutes
    let cases = [
      (1000, DifficultyLevel::Easy),        // 12/day
      (300, DifficultyLevel::Moderate),     // 40/day
      (150, DifficultyLevel::Challenging),  // 80/day
      (60, DifficultyLevel::Extreme),       // 200/day
    ];
    for (days, expected) in cases {
      let plan = calculate_study_plan("TOEFL", &SkillScores::uniform(5.0), 6.0, days, false);
      assert_eq!(plan.difficulty_level, expected, "days = {days}");
    }
  }

  #[test]
  fn daily_minutes_round_half_up() {
    // 0.5 band = 6000 minutes over 80 days = 75/day
    let plan = calculate_study_plan("x", &SkillScores::uniform(6.0), 6.5, 80, false);
    assert_eq!(plan.daily_minutes_required, 75);
    assert_eq!(plan.difficulty_level, DifficultyLevel::Challenging);
  }

  #[test]
  fn target_already_reached_recommends_maintenance() {
    let plan = calculate_study_plan("IELTS 6.0", &SkillScores::uniform(7.0), 6.0, 30, true);
    assert_eq!(plan.daily_minutes_required, 15);
    assert_eq!(plan.difficulty_level, DifficultyLevel::Easy);
    assert!(plan.recommendation.contains("already reached"));
    assert!(plan.recommendation.contains("IELTS 6.0"));
    let impact = plan.speaking_club_impact.unwrap();
    assert_eq!(impact.contribution_percent, 0);
  }

  #[test]
  fn partial_scores_use_present_skills_only() {
    let current = SkillScores { reading: Some(6.0), writing: Some(5.0), ..Default::default() };
    // average 5.5, gap 1.0 over 400 days = 30/day
    let plan = calculate_study_plan("x", &current, 6.5, 400, false);
    assert_eq!(plan.daily_minutes_required, 30);
    assert_eq!(plan.difficulty_level, DifficultyLevel::Moderate);
  }

  #[test]
  fn speaking_club_impact_is_capped() {
    // 12 weeks at 2 sessions => 24 sessions, 1440 minutes of 12000
    let plan = calculate_study_plan("x", &SkillScores::uniform(5.0), 6.0, 84, true);
    let impact = plan.speaking_club_impact.unwrap();
    assert_eq!(impact.total_sessions, 24);
    assert_eq!(impact.contribution_percent, 12);

    let plan = calculate_study_plan("x", &SkillScores::uniform(6.0), 6.5, 365, true);
    assert_eq!(plan.speaking_club_impact.unwrap().contribution_percent, 30);
  }

  #[test]
  fn short_horizon_still_books_one_session() {
    let plan = calculate_study_plan("x", &SkillScores::uniform(5.0), 6.0, 1, true);
    assert_eq!(plan.speaking_club_impact.unwrap().total_sessions, 1);
  }

  #[test]
  fn custom_tuning_changes_thresholds_and_text() {
    let mut cfg = PlannerConfig::default();
    cfg.study_plan.minutes_per_band = 600;
    cfg.recommendations.easy = "{minutes}m/{days}d for {objective}".into();
    let plan = calculate_study_plan_with(&cfg, "", &SkillScores::uniform(5.0), 6.0, 60, false);
    assert_eq!(plan.daily_minutes_required, 10);
    assert_eq!(plan.recommendation, "10m/60d for your goal");
  }

  #[test]
  fn non_finite_target_degrades_to_maintenance() {
    let plan = calculate_study_plan("x", &SkillScores::default(), f32::NAN, 10, false);
    assert_eq!(plan.difficulty_level, DifficultyLevel::Easy);
  }

  #[test]
  fn days_remaining_floors_at_zero() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    assert_eq!(days_remaining(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(), today), 30);
    assert_eq!(days_remaining(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(), today), 0);
  }

  #[test]
  fn deadline_resolves_from_creation_time() {
    let created = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    assert_eq!(resolve_deadline(created, None), None);
    let due = resolve_deadline(created, Some(14)).unwrap();
    assert_eq!(due, Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap());
  }

  #[test]
  fn weighted_progress_counts_completed_weight() {
    let items = vec![
      ProgressItem { weight: 20, completed: true },
      ProgressItem { weight: 30, completed: false },
      ProgressItem { weight: 50, completed: true },
    ];
    assert_eq!(weighted_progress(&items), 70);
    assert_eq!(weighted_progress(&[]), 0);
    assert_eq!(weighted_progress(&[ProgressItem { weight: 0, completed: true }]), 0);
  }
}

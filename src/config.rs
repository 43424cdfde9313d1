//! Loading planner tuning (study-plan thresholds, speaking club cadence, recommendation texts) from TOML.
//!
//! Every section and field is optional; anything omitted keeps the built-in default.
//! See `PlannerConfig` for the expected schema.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct PlannerConfig {
  #[serde(default)]
  pub study_plan: StudyPlanTuning,
  #[serde(default)]
  pub speaking_club: SpeakingClubTuning,
  #[serde(default)]
  pub recommendations: Recommendations,
}

/// Constants behind `progress::calculate_study_plan`.
/// Thresholds compare against daily minutes; a value below `easy_below` is easy, and so on.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StudyPlanTuning {
  /// Study minutes needed to close one band (1.0 on the 0..9 scale).
  pub minutes_per_band: u32,
  /// Daily minutes suggested once the target is already reached.
  pub maintenance_minutes: u32,
  pub easy_below: u32,
  pub moderate_below: u32,
  pub challenging_below: u32,
  /// Upper bound for the reported daily load.
  pub max_daily_minutes: u32,
}

impl Default for StudyPlanTuning {
  fn default() -> Self {
    Self {
      minutes_per_band: 12_000,
      maintenance_minutes: 15,
      easy_below: 30,
      moderate_below: 60,
      challenging_below: 120,
      max_daily_minutes: 1440,
    }
  }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpeakingClubTuning {
  pub sessions_per_week: f64,
  pub session_minutes: u32,
  /// Cap on the share of the required study time the club is credited with.
  pub max_contribution_percent: u32,
}

impl Default for SpeakingClubTuning {
  fn default() -> Self {
    Self { sessions_per_week: 2.0, session_minutes: 60, max_contribution_percent: 30 }
  }
}

/// Recommendation templates. Placeholders: {objective}, {minutes}, {days}.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Recommendations {
  pub easy: String,
  pub moderate: String,
  pub challenging: String,
  pub extreme: String,
  pub maintain: String,
}

impl Default for Recommendations {
  fn default() -> Self {
    Self {
      easy: "About {minutes} minutes a day keeps {objective} comfortably on track over the next {days} days.".into(),
      moderate: "Plan {minutes} minutes a day for {objective}. Build a fixed daily slot so the {days} days count.".into(),
      challenging: "{objective} needs {minutes} minutes a day for {days} days. Split it into two sessions and lean on mentor feedback.".into(),
      extreme: "{minutes} minutes a day for {days} days is very demanding for {objective}. Consider extending the deadline or adjusting the target.".into(),
      maintain: "You have already reached the target for {objective}. {minutes} minutes a day will keep your skills sharp.".into(),
    }
  }
}

/// Attempt to load `PlannerConfig` from PLANNER_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_planner_config_from_env() -> Option<PlannerConfig> {
  let path = std::env::var("PLANNER_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_planner_config(&s) {
      Ok(cfg) => {
        info!(target: "goals_planner", %path, "Loaded planner config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "goals_planner", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "goals_planner", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

pub fn parse_planner_config(s: &str) -> Result<PlannerConfig, toml::de::Error> {
  toml::from_str::<PlannerConfig>(s)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_yields_defaults() {
    assert_eq!(parse_planner_config("").unwrap(), PlannerConfig::default());
  }

  #[test]
  fn partial_sections_keep_remaining_defaults() {
    let cfg = parse_planner_config(
      r#"
      [study_plan]
      minutes_per_band = 6000

      [speaking_club]
      sessions_per_week = 3.0

      [recommendations]
      easy = "Relax: {minutes} min"
      "#,
    )
    .unwrap();
    assert_eq!(cfg.study_plan.minutes_per_band, 6000);
    assert_eq!(cfg.study_plan.easy_below, 30);
    assert_eq!(cfg.speaking_club.sessions_per_week, 3.0);
    assert_eq!(cfg.speaking_club.max_contribution_percent, 30);
    assert_eq!(cfg.recommendations.easy, "Relax: {minutes} min");
    assert_eq!(cfg.recommendations.maintain, Recommendations::default().maintain);
  }

  #[test]
  fn malformed_document_is_an_error() {
    assert!(parse_planner_config("[study_plan]\nminutes_per_band = \"lots\"").is_err());
  }
}

//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and dashboard independently.

use serde::{Deserialize, Serialize};

use crate::catalog::ObjectiveEntry;
use crate::domain::{GeneratedTask, MembershipTier, SkillScores, TaskBreakdownConfig};
use crate::levels::LevelBand;
use crate::progress::ProgressItem;

/// Breakdown request: the generator config plus nothing else.
pub type BreakdownIn = TaskBreakdownConfig;

#[derive(Debug, Serialize)]
pub struct BreakdownOut {
    pub objective_family: &'static str,
    pub tasks: Vec<GeneratedTask>,
    /// Titles are not unique, so the split is reported by display order.
    pub accessible: Vec<u32>,
    pub locked: Vec<u32>,
}

/// Study plan request. Either `days_remaining` or `target_date` (YYYY-MM-DD) may be given;
/// `days_remaining` wins when both are present. With neither, the horizon is zero days.
#[derive(Debug, Deserialize)]
pub struct StudyPlanIn {
    #[serde(default, alias = "objectiveLabel")]
    pub objective_label: String,
    #[serde(default, alias = "currentScores")]
    pub current_scores: SkillScores,
    #[serde(alias = "targetScore")]
    pub target_score: f32,
    #[serde(default, alias = "daysRemaining")]
    pub days_remaining: Option<i64>,
    #[serde(default, alias = "targetDate")]
    pub target_date: Option<chrono::NaiveDate>,
    #[serde(default, alias = "includeSpeakingClub")]
    pub include_speaking_club: bool,
}

#[derive(Debug, Deserialize)]
pub struct TierFilterIn {
    pub tasks: Vec<GeneratedTask>,
    #[serde(default)]
    pub tier: MembershipTier,
}

#[derive(Debug, Deserialize)]
pub struct ProgressIn {
    pub items: Vec<ProgressItem>,
}
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressOut {
    pub percent: u32,
}

#[derive(Debug, Serialize)]
pub struct ObjectivesOut {
    pub objectives: Vec<ObjectiveEntry>,
}

#[derive(Debug, Serialize)]
pub struct LevelsOut {
    pub levels: &'static [LevelBand],
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

//! Task breakdown generation.
//!
//! Flow:
//! 1) The objective id is resolved to an `Objective` family (unknown ids -> conversation fluency).
//! 2) A `PlanContext` derives week count, proficiency gap and intensity from the config.
//! 3) The family builder emits its fixed task sequence with raw weights.
//! 4) The list is normalized (weights to shares of 100, display order 1..=N).
//!
//! Builders are pure. Raw weights within each builder sum to 100 in every branch, so
//! normalization only has to renumber.

use tracing::{debug, instrument};

use crate::domain::{GeneratedTask, ProficiencyLevel, TaskBreakdownConfig};
use crate::levels::{get_level_gap, ielts_to_cefr};
use crate::normalize::assign_order_and_normalize;
use crate::objective::Objective;
use crate::util::round_half_up;

mod career;
mod communication;
mod exams;
mod quizzes;
mod scholarship;

const DEFAULT_CEFR_GAP: u8 = 1;
const INTENSITY_PER_STEP: f64 = 0.25;
const MAX_INTENSITY: f64 = 2.0;
/// Repetition counts are written against a six month plan.
const BASELINE_MONTHS: f64 = 6.0;
/// Longer requests are planned as five years.
pub const MAX_PLAN_MONTHS: u32 = 60;

/// Quantities derived once per request and shared by every builder.
#[derive(Clone, Debug)]
pub struct PlanContext {
  pub months: u32,
  pub weeks: u32,
  pub gap: u8,
  pub intensity: f64,
  pub label: String,
  pub current_score: Option<f32>,
  pub target_score: Option<f32>,
  pub current_level: Option<ProficiencyLevel>,
  pub target_level: Option<ProficiencyLevel>,
}

impl PlanContext {
  pub fn from_config(config: &TaskBreakdownConfig) -> Self {
    let months = config.duration_months.clamp(1, MAX_PLAN_MONTHS);
    let weeks = round_half_up(months as f64 * 52.0 / 12.0).max(1);

    let current = config.current_level.or_else(|| config.current_score.map(ielts_to_cefr));
    let target = config.target_level.or_else(|| config.target_score.map(ielts_to_cefr));
    let gap = match (current, target) {
      (Some(c), Some(t)) => get_level_gap(c, t),
      _ => DEFAULT_CEFR_GAP,
    };

    Self {
      months,
      weeks,
      gap,
      intensity: intensity_for_steps(gap as f64),
      label: config.objective_label.trim().to_string(),
      current_score: config.current_score.filter(|s| s.is_finite()),
      target_score: config.target_score.filter(|s| s.is_finite()),
      current_level: config.current_level,
      target_level: config.target_level,
    }
  }

  /// Replace the CEFR-based intensity with one derived from a band-score gap
  /// (half a band counts as one step).
  pub fn with_band_gap(mut self, band_gap: f32) -> Self {
    let steps = (band_gap.max(0.0) / 0.5) as f64;
    self.intensity = intensity_for_steps(steps);
    self
  }

  /// `max(1, round(base * intensity * months / 6))`.
  pub fn reps(&self, base: u32) -> u32 {
    round_half_up(base as f64 * self.intensity * (self.months as f64 / BASELINE_MONTHS)).max(1)
  }

  /// Deadline offset in days for a point `fraction` of the way through the plan.
  /// Snapped to whole weeks, never earlier than the first week.
  pub fn deadline_at(&self, fraction: f64) -> u32 {
    let week = round_half_up(self.weeks as f64 * fraction.clamp(0.0, 1.0));
    week.saturating_mul(7).max(7)
  }

  /// Offset of the plan's last day.
  pub fn final_deadline(&self) -> u32 {
    self.weeks.saturating_mul(7)
  }

  /// User-facing objective name, falling back to the family's own label.
  pub fn label_or<'a>(&'a self, fallback: &'a str) -> &'a str {
    if self.label.is_empty() { fallback } else { &self.label }
  }
}

fn intensity_for_steps(steps: f64) -> f64 {
  (1.0 + INTENSITY_PER_STEP * steps).clamp(1.0, MAX_INTENSITY)
}

/// Raw (un-normalized) task list for an already resolved objective.
pub fn build_raw_tasks(objective: &Objective, ctx: &PlanContext) -> Vec<GeneratedTask> {
  match *objective {
    Objective::Ielts { target_band } => exams::ielts_tasks(ctx, target_band),
    Objective::Toefl { target_score } => exams::toefl_tasks(ctx, target_score),
    Objective::SchoolFinals(level) => exams::school_finals_tasks(ctx, level),
    Objective::DomesticScholarship(def) => scholarship::domestic_scholarship_tasks(ctx, def),
    Objective::GlobalScholarship(def) => scholarship::global_scholarship_tasks(ctx, def),
    Objective::StudentExchange(def) => scholarship::student_exchange_tasks(ctx, def),
    Objective::IvyAdmissions(level) => scholarship::ivy_admissions_tasks(ctx, level),
    Objective::AcademicWriting(track) => scholarship::academic_writing_tasks(ctx, track),
    Objective::InterviewMastery(kind) => career::interview_tasks(ctx, kind),
    Objective::RemoteWork(industry) => career::remote_work_tasks(ctx, industry),
    Objective::Freelancing(niche) => career::freelancing_tasks(ctx, niche),
    Objective::LeadershipEnglish => career::leadership_tasks(ctx),
    Objective::TechnicalEnglish(industry) => career::technical_english_tasks(ctx, industry),
    Objective::StartupPitching => career::startup_pitch_tasks(ctx),
    Objective::PublicSpeaking => communication::public_speaking_tasks(ctx),
    Objective::WorkingHoliday(country) => communication::working_holiday_tasks(ctx, country),
    Objective::ConversationFluency => communication::conversation_fluency_tasks(ctx),
  }
}

/// Generate the normalized task breakdown for a goal.
///
/// Deterministic and total: the same config always yields the same list, and every
/// config yields a non-empty list whose weights sum to 100.
#[instrument(level = "debug", skip(config), fields(objective_id = %config.sub_objective_id, months = config.duration_months))]
pub fn generate_task_breakdown(config: &TaskBreakdownConfig) -> Vec<GeneratedTask> {
  let objective = Objective::from_id(&config.sub_objective_id);
  let ctx = PlanContext::from_config(config);
  let tasks = assign_order_and_normalize(build_raw_tasks(&objective, &ctx));
  debug!(
    target: "breakdown",
    family = objective.family(),
    task_count = tasks.len(),
    weeks = ctx.weeks,
    gap = ctx.gap,
    intensity = ctx.intensity,
    "Generated task breakdown"
  );
  tasks
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::objective_catalog;
  use crate::domain::{MembershipTier, TaskType};
  use crate::normalize::filter_tasks_by_tier;
  use rand::{rngs::StdRng, Rng, SeedableRng};

  fn config(id: &str) -> TaskBreakdownConfig {
    TaskBreakdownConfig {
      sub_objective_id: id.to_string(),
      objective_label: String::new(),
      duration_months: 6,
      user_tier: MembershipTier::Insider,
      current_level: Some(ProficiencyLevel::B1),
      target_level: Some(ProficiencyLevel::C1),
      current_score: Some(5.5),
      target_score: Some(7.0),
    }
  }

  fn all_ids() -> Vec<String> {
    let mut ids: Vec<String> = objective_catalog().into_iter().map(|e| e.id).collect();
    ids.push("unknown_xyz".into());
    ids.push("scholarship_domestic_unknown".into());
    ids.push("remote_work_space".into());
    ids
  }

  #[test]
  fn ielts_scenario_starts_with_diagnostic() {
    let tasks = generate_task_breakdown(&config("ielts_70"));
    assert!(!tasks.is_empty());
    assert_eq!(tasks[0].title, "Complete Full IELTS Diagnostic Test");
    assert_eq!(tasks[0].deadline_days, Some(7));
    assert_eq!(tasks.iter().map(|t| t.weight).sum::<u32>(), 100);
  }

  #[test]
  fn unknown_objective_uses_conversation_builder() {
    let fallback = generate_task_breakdown(&config("unknown_xyz"));
    let explicit = generate_task_breakdown(&config("conversation_fluency"));
    assert_eq!(fallback, explicit);
    assert_eq!(fallback.iter().map(|t| t.weight).sum::<u32>(), 100);
  }

  #[test]
  fn raw_weights_sum_to_hundred_for_every_family() {
    for id in all_ids() {
      let cfg = config(&id);
      let raw = build_raw_tasks(&Objective::from_id(&id), &PlanContext::from_config(&cfg));
      assert_eq!(raw.iter().map(|t| t.weight).sum::<u32>(), 100, "objective {id}");
    }
  }

  #[test]
  fn every_family_has_dense_order_and_full_weight() {
    for id in all_ids() {
      let tasks = generate_task_breakdown(&config(&id));
      assert!(!tasks.is_empty(), "objective {id}");
      let sum: i64 = tasks.iter().map(|t| t.weight as i64).sum();
      assert!((sum - 100).abs() <= 1, "objective {id} sums to {sum}");
      let order: Vec<u32> = tasks.iter().map(|t| t.display_order).collect();
      let expected: Vec<u32> = (1..=tasks.len() as u32).collect();
      assert_eq!(order, expected, "objective {id}");
    }
  }

  #[test]
  fn generation_is_deterministic() {
    for id in all_ids() {
      let a = serde_json::to_string(&generate_task_breakdown(&config(&id))).expect("json");
      let b = serde_json::to_string(&generate_task_breakdown(&config(&id))).expect("json");
      assert_eq!(a, b, "objective {id}");
    }
  }

  #[test]
  fn task_attachments_are_well_formed() {
    for id in all_ids() {
      for task in generate_task_breakdown(&config(&id)) {
        assert!(!task.title.trim().is_empty(), "objective {id}");
        assert!(task.estimated_minutes > 0, "{} in {id}", task.title);
        assert!(task.verification_quiz.iter().all(|q| q.is_well_formed()), "{} in {id}", task.title);
        if task.task_type == TaskType::MentorAssessed {
          assert!(task.requires_pro, "{} in {id} is mentor-assessed but open", task.title);
        }
        if task.linked_event_type.is_some() {
          assert_ne!(task.task_type, TaskType::SelfTracked, "{} in {id}", task.title);
        }
      }
    }
  }

  #[test]
  fn deadlines_stay_inside_the_plan() {
    for months in [1, 3, 6, 12, 24] {
      for id in all_ids() {
        let mut cfg = config(&id);
        cfg.duration_months = months;
        let last_day = PlanContext::from_config(&cfg).final_deadline();
        for task in generate_task_breakdown(&cfg) {
          if let Some(d) = task.deadline_days {
            assert!(d >= 7 && d <= last_day.max(7), "{} in {id}: {d} > {last_day}", task.title);
          }
        }
      }
    }
  }

  #[test]
  fn explorer_cannot_open_mentor_tasks() {
    let tasks = generate_task_breakdown(&config("ielts_70"));
    let split = filter_tasks_by_tier(&tasks, MembershipTier::Explorer);
    assert!(!split.locked.is_empty());
    assert!(split.locked.iter().all(|t| t.requires_pro));
    assert!(split.accessible.iter().all(|t| !t.requires_pro));
  }

  #[test]
  fn longer_plans_and_bigger_gaps_scale_repetitions() {
    let short = PlanContext::from_config(&TaskBreakdownConfig { duration_months: 3, ..config("x") });
    let long = PlanContext::from_config(&TaskBreakdownConfig { duration_months: 12, ..config("x") });
    assert!(long.reps(10) > short.reps(10));

    let small_gap = PlanContext::from_config(&TaskBreakdownConfig {
      target_level: Some(ProficiencyLevel::B2),
      ..config("x")
    });
    let big_gap = PlanContext::from_config(&TaskBreakdownConfig {
      current_level: Some(ProficiencyLevel::A1),
      ..config("x")
    });
    assert!(big_gap.intensity > small_gap.intensity);
    assert!(big_gap.intensity <= MAX_INTENSITY);
  }

  #[test]
  fn zero_months_and_missing_levels_degrade_gracefully() {
    let cfg = TaskBreakdownConfig {
      sub_objective_id: "toefl_100".into(),
      duration_months: 0,
      ..Default::default()
    };
    let ctx = PlanContext::from_config(&cfg);
    assert_eq!(ctx.months, 1);
    assert_eq!(ctx.gap, DEFAULT_CEFR_GAP);
    assert!(ctx.reps(1) >= 1);
    assert!(!generate_task_breakdown(&cfg).is_empty());
  }

  #[test]
  fn extreme_durations_are_capped_at_five_years() {
    for months in [61, 100_000_000, u32::MAX] {
      for id in all_ids() {
        let mut cfg = config(&id);
        cfg.duration_months = months;
        let ctx = PlanContext::from_config(&cfg);
        assert_eq!(ctx.months, MAX_PLAN_MONTHS);
        let tasks = generate_task_breakdown(&cfg);
        assert_eq!(tasks.iter().map(|t| t.weight).sum::<u32>(), 100, "objective {id}");
        for task in &tasks {
          assert!(task.deadline_days.map_or(true, |d| d <= ctx.final_deadline()), "{} in {id}", task.title);
        }
      }
    }
    let mut five_years = config("ielts_70");
    five_years.duration_months = MAX_PLAN_MONTHS;
    let mut huge = config("ielts_70");
    huge.duration_months = u32::MAX;
    assert_eq!(generate_task_breakdown(&five_years), generate_task_breakdown(&huge));
  }

  fn score(rng: &mut StdRng) -> f32 {
    if rng.gen_bool(0.1) {
      [f32::MAX, -f32::MAX, f32::NAN, f32::INFINITY, 120.0][rng.gen_range(0..5)]
    } else {
      rng.gen_range(0..=18) as f32 / 2.0
    }
  }

  #[test]
  fn randomized_configs_keep_invariants() {
    let ids = all_ids();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
      let id = &ids[rng.gen_range(0..ids.len())];
      let cfg = TaskBreakdownConfig {
        sub_objective_id: id.clone(),
        objective_label: String::new(),
        duration_months: if rng.gen_bool(0.2) {
          [61, 1_000, 100_000_000, u32::MAX][rng.gen_range(0..4)]
        } else {
          rng.gen_range(0..=36)
        },
        user_tier: MembershipTier::Explorer,
        current_level: Some(ProficiencyLevel::ALL[rng.gen_range(0..6)]),
        target_level: Some(ProficiencyLevel::ALL[rng.gen_range(0..6)]),
        current_score: Some(score(&mut rng)),
        target_score: Some(score(&mut rng)),
      };
      let tasks = generate_task_breakdown(&cfg);
      let sum: i64 = tasks.iter().map(|t| t.weight as i64).sum();
      assert!((sum - 100).abs() <= 1, "{id}: {sum}");

      let split = filter_tasks_by_tier(&tasks, cfg.user_tier);
      assert_eq!(split.accessible.len() + split.locked.len(), tasks.len());
      for t in &tasks {
        let in_accessible = split.accessible.iter().any(|a| a.display_order == t.display_order);
        let in_locked = split.locked.iter().any(|l| l.display_order == t.display_order);
        assert!(in_accessible != in_locked, "{id}: {} in both or neither", t.title);
      }
    }
  }
}

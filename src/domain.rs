//! Domain models: proficiency levels, membership tiers, generated tasks and the study plan.

use serde::{Deserialize, Serialize};

/// CEFR proficiency level. Declaration order is the ordinal order (A1 lowest).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProficiencyLevel {
  A1,
  A2,
  B1,
  B2,
  C1,
  C2,
}

impl ProficiencyLevel {
  pub const ALL: [ProficiencyLevel; 6] = [
    ProficiencyLevel::A1,
    ProficiencyLevel::A2,
    ProficiencyLevel::B1,
    ProficiencyLevel::B2,
    ProficiencyLevel::C1,
    ProficiencyLevel::C2,
  ];

  pub fn index(self) -> u8 {
    self as u8
  }

  pub fn as_str(self) -> &'static str {
    match self {
      ProficiencyLevel::A1 => "A1",
      ProficiencyLevel::A2 => "A2",
      ProficiencyLevel::B1 => "B1",
      ProficiencyLevel::B2 => "B2",
      ProficiencyLevel::C1 => "C1",
      ProficiencyLevel::C2 => "C2",
    }
  }
}

/// Community membership tier. Insider and Visionary are the elevated tiers.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MembershipTier {
  Explorer,
  Insider,
  Visionary,
}
impl Default for MembershipTier {
  fn default() -> Self { MembershipTier::Explorer }
}

impl MembershipTier {
  pub fn is_elevated(self) -> bool {
    matches!(self, MembershipTier::Insider | MembershipTier::Visionary)
  }
}

/// Who verifies that a task is done.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
  SelfTracked,
  MentorAssessed,
  SystemLinked,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
  Writing,
  Reading,
  Listening,
  Speaking,
  Test,
  Admin,
  Event,
}

/// Recurring community event a task can be linked to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
  SpeakingClub,
  WritingClinic,
  MockInterview,
  MockTest,
  Webinar,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
  pub question: String,
  pub options: Vec<String>,
  pub correct_index: usize,
  pub explanation: String,
}

impl QuizQuestion {
  pub fn new(question: &str, options: &[&str], correct_index: usize, explanation: &str) -> Self {
    Self {
      question: question.to_string(),
      options: options.iter().map(|o| (*o).to_string()).collect(),
      correct_index,
      explanation: explanation.to_string(),
    }
  }

  pub fn is_well_formed(&self) -> bool {
    self.options.len() >= 2 && self.correct_index < self.options.len()
  }
}

/// One recommended learning activity.
///
/// `weight` is a raw relative weight until the list goes through
/// `normalize::assign_order_and_normalize`, after which it is a 0..=100 share.
/// `deadline_days` is an offset from the (externally stored) creation time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneratedTask {
  pub title: String,
  pub description: String,
  pub task_type: TaskType,
  pub category: TaskCategory,
  pub weight: u32,
  pub requires_pro: bool,
  pub deadline_days: Option<u32>,
  pub display_order: u32,
  pub estimated_minutes: u32,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub verification_quiz: Vec<QuizQuestion>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub completion_criteria: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub materials: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub linked_event_type: Option<EventType>,
}

impl GeneratedTask {
  pub fn new<T: Into<String>, D: Into<String>>(
    title: T,
    description: D,
    task_type: TaskType,
    category: TaskCategory,
    weight: u32,
  ) -> Self {
    GeneratedTask {
      title: title.into(),
      description: description.into(),
      task_type,
      category,
      weight,
      requires_pro: false,
      deadline_days: None,
      display_order: 0,
      estimated_minutes: 30,
      verification_quiz: Vec::new(),
      completion_criteria: None,
      materials: Vec::new(),
      linked_event_type: None,
    }
  }

  pub fn pro(mut self) -> Self {
    self.requires_pro = true;
    self
  }

  pub fn with_deadline(mut self, days: u32) -> Self {
    self.deadline_days = Some(days);
    self
  }

  pub fn with_minutes(mut self, minutes: u32) -> Self {
    self.estimated_minutes = minutes;
    self
  }

  pub fn with_quiz(mut self, quiz: Vec<QuizQuestion>) -> Self {
    self.verification_quiz = quiz;
    self
  }

  pub fn with_criteria<S: Into<String>>(mut self, criteria: S) -> Self {
    self.completion_criteria = Some(criteria.into());
    self
  }

  pub fn with_materials(mut self, materials: &[&str]) -> Self {
    self.materials = materials.iter().map(|m| (*m).to_string()).collect();
    self
  }

  pub fn linked_to(mut self, event: EventType) -> Self {
    self.linked_event_type = Some(event);
    self
  }
}

/// Input for the task breakdown generator. Built by the dashboard from stored goal records.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct TaskBreakdownConfig {
  #[serde(alias = "subObjectiveId")]
  pub sub_objective_id: String,
  #[serde(default, alias = "objectiveLabel")]
  pub objective_label: String,
  #[serde(default = "default_duration_months", alias = "durationMonths")]
  pub duration_months: u32,
  #[serde(default, alias = "userTier")]
  pub user_tier: MembershipTier,
  #[serde(default, alias = "currentLevel")] pub current_level: Option<ProficiencyLevel>,
  #[serde(default, alias = "targetLevel")] pub target_level: Option<ProficiencyLevel>,
  #[serde(default, alias = "current_ielts", alias = "currentIELTS", alias = "currentIelts", alias = "currentScore")]
  pub current_score: Option<f32>,
  #[serde(default, alias = "target_ielts", alias = "targetIELTS", alias = "targetIelts", alias = "targetScore")]
  pub target_score: Option<f32>,
}

fn default_duration_months() -> u32 { 6 }

/// Per-skill band scores (IELTS-style 0..9 scale). Missing skills are ignored.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SkillScores {
  #[serde(default)] pub reading: Option<f32>,
  #[serde(default)] pub listening: Option<f32>,
  #[serde(default)] pub speaking: Option<f32>,
  #[serde(default)] pub writing: Option<f32>,
}

impl SkillScores {
  pub fn uniform(band: f32) -> Self {
    Self { reading: Some(band), listening: Some(band), speaking: Some(band), writing: Some(band) }
  }

  /// Mean of the present skills, or `None` when no skill is recorded.
  pub fn average(&self) -> Option<f32> {
    let present: Vec<f32> = [self.reading, self.listening, self.speaking, self.writing]
      .into_iter()
      .flatten()
      .filter(|v| v.is_finite())
      .collect();
    if present.is_empty() {
      None
    } else {
      Some(present.iter().sum::<f32>() / present.len() as f32)
    }
  }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
  Easy,
  Moderate,
  Challenging,
  Extreme,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpeakingClubImpact {
  pub contribution_percent: u32,
  pub total_sessions: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StudyPlan {
  pub daily_minutes_required: u32,
  pub difficulty_level: DifficultyLevel,
  pub recommendation: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub speaking_club_impact: Option<SpeakingClubImpact>,
}

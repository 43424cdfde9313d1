//! Objective resolution: maps a free-form objective id onto a closed set of families.
//!
//! Ids are matched case-insensitively by prefix. Anything unrecognised resolves to
//! `Objective::ConversationFluency`, which is the regular default, not an error.

use tracing::debug;

use crate::catalog::{
  self, ExchangeDef, FreelanceNicheDef, IndustryDef, ScholarshipDef, WhvCountryDef,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritingTrack {
  Essay,
  Thesis,
  Journal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdmissionLevel {
  Undergraduate,
  Graduate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchoolLevel {
  Junior,
  Senior,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterviewKind {
  Job,
  Scholarship,
  Visa,
}

#[derive(Clone, Copy, Debug)]
pub enum Objective {
  /// Target band parsed from the id suffix (`ielts_70` -> 7.0), if any.
  Ielts { target_band: Option<f32> },
  Toefl { target_score: Option<u32> },
  DomesticScholarship(&'static ScholarshipDef),
  GlobalScholarship(&'static ScholarshipDef),
  AcademicWriting(WritingTrack),
  StudentExchange(&'static ExchangeDef),
  IvyAdmissions(AdmissionLevel),
  SchoolFinals(SchoolLevel),
  InterviewMastery(InterviewKind),
  RemoteWork(&'static IndustryDef),
  PublicSpeaking,
  WorkingHoliday(&'static WhvCountryDef),
  Freelancing(&'static FreelanceNicheDef),
  LeadershipEnglish,
  TechnicalEnglish(&'static IndustryDef),
  StartupPitching,
  ConversationFluency,
}

impl Objective {
  /// Resolve an objective id. Total: never fails.
  pub fn from_id(id: &str) -> Objective {
    let norm = id.trim().to_lowercase();
    let id = norm.as_str();

    let resolved = if let Some(rest) = id.strip_prefix("ielts") {
      Objective::Ielts { target_band: parse_band_suffix(rest) }
    } else if let Some(rest) = id.strip_prefix("toefl") {
      Objective::Toefl { target_score: rest.trim_start_matches('_').parse::<u32>().ok().filter(|s| *s <= 120) }
    } else if let Some(rest) = id.strip_prefix("scholarship_domestic") {
      Objective::DomesticScholarship(catalog::domestic_scholarship(suffix(rest)))
    } else if let Some(rest) = id.strip_prefix("scholarship_global") {
      Objective::GlobalScholarship(catalog::global_scholarship(suffix(rest)))
    } else if let Some(rest) = id.strip_prefix("academic_writing") {
      let track = match suffix(rest) {
        "thesis" => WritingTrack::Thesis,
        "journal" => WritingTrack::Journal,
        _ => WritingTrack::Essay,
      };
      Objective::AcademicWriting(track)
    } else if let Some(rest) = id.strip_prefix("exchange") {
      Objective::StudentExchange(catalog::exchange_program(suffix(rest)))
    } else if let Some(rest) = id.strip_prefix("ivy") {
      let level = if suffix(rest).starts_with("grad") { AdmissionLevel::Graduate } else { AdmissionLevel::Undergraduate };
      Objective::IvyAdmissions(level)
    } else if let Some(rest) = id.strip_prefix("school_finals") {
      let level = if suffix(rest) == "junior" { SchoolLevel::Junior } else { SchoolLevel::Senior };
      Objective::SchoolFinals(level)
    } else if let Some(rest) = id.strip_prefix("interview") {
      let kind = match suffix(rest) {
        "scholarship" => InterviewKind::Scholarship,
        "visa" => InterviewKind::Visa,
        _ => InterviewKind::Job,
      };
      Objective::InterviewMastery(kind)
    } else if let Some(rest) = id.strip_prefix("remote_work") {
      Objective::RemoteWork(catalog::industry(suffix(rest)))
    } else if id.starts_with("public_speaking") {
      Objective::PublicSpeaking
    } else if let Some(rest) = id.strip_prefix("whv") {
      Objective::WorkingHoliday(catalog::whv_country(suffix(rest)))
    } else if let Some(rest) = id.strip_prefix("freelance") {
      Objective::Freelancing(catalog::freelance_niche(suffix(rest)))
    } else if id.starts_with("leadership") {
      Objective::LeadershipEnglish
    } else if let Some(rest) = id.strip_prefix("technical_english") {
      Objective::TechnicalEnglish(catalog::industry(suffix(rest)))
    } else if id.starts_with("startup_pitch") {
      Objective::StartupPitching
    } else {
      Objective::ConversationFluency
    };

    if matches!(resolved, Objective::ConversationFluency) && !id.starts_with("conversation") {
      debug!(target: "breakdown", objective_id = %id, "Unrecognised objective id; using conversation fluency");
    }
    resolved
  }

  /// Stable family tag, matching the catalog's `family` field.
  pub fn family(&self) -> &'static str {
    match self {
      Objective::Ielts { .. } => "ielts",
      Objective::Toefl { .. } => "toefl",
      Objective::DomesticScholarship(_) => "domestic_scholarship",
      Objective::GlobalScholarship(_) => "global_scholarship",
      Objective::AcademicWriting(_) => "academic_writing",
      Objective::StudentExchange(_) => "student_exchange",
      Objective::IvyAdmissions(_) => "ivy_admissions",
      Objective::SchoolFinals(_) => "school_finals",
      Objective::InterviewMastery(_) => "interview_mastery",
      Objective::RemoteWork(_) => "remote_work",
      Objective::PublicSpeaking => "public_speaking",
      Objective::WorkingHoliday(_) => "working_holiday",
      Objective::Freelancing(_) => "freelancing",
      Objective::LeadershipEnglish => "leadership_english",
      Objective::TechnicalEnglish(_) => "technical_english",
      Objective::StartupPitching => "startup_pitching",
      Objective::ConversationFluency => "conversation_fluency",
    }
  }
}

/// Strip the `_` separator that follows a family prefix.
fn suffix(rest: &str) -> &str {
  rest.trim_start_matches('_')
}

/// `"_70"` -> 7.0, `"_65"` -> 6.5, `"_7.5"` -> 7.5, `"_8"` -> 8.0. Values outside 0..=9 are dropped.
fn parse_band_suffix(rest: &str) -> Option<f32> {
  let s = suffix(rest);
  if s.is_empty() {
    return None;
  }
  let value = if s.contains('.') {
    s.parse::<f32>().ok()?
  } else if s.len() == 1 {
    s.parse::<u32>().ok()? as f32
  } else {
    s.parse::<u32>().ok()? as f32 / 10.0
  };
  if (0.0..=9.0).contains(&value) { Some(value) } else { None }
}

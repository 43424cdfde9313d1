//! Static reference tables used by the task builders and the objective catalog.
//!
//! All tables are compiled in and never change at runtime. Lookups are total: an unknown
//! key resolves to the table's default entry.

use serde::Serialize;

#[derive(Clone, Copy, Debug)]
pub struct ScholarshipDef {
  pub key: &'static str,
  pub name: &'static str,
  pub host: &'static str,
  pub essay_count: u32,
  pub reference_letters: u32,
  pub has_interview: bool,
  pub english_requirement: &'static str,
  pub essay_focus: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ExchangeDef {
  pub key: &'static str,
  pub name: &'static str,
  pub english_requirement: &'static str,
  pub duration_label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct IndustryDef {
  pub key: &'static str,
  pub name: &'static str,
  pub core_terms: &'static [&'static str],
  pub key_document: &'static str,
  pub key_meeting: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct WhvCountryDef {
  pub key: &'static str,
  pub country: &'static str,
  pub visa_name: &'static str,
  pub english_requirement: &'static str,
  pub common_jobs: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct FreelanceNicheDef {
  pub key: &'static str,
  pub name: &'static str,
  pub deliverable: &'static str,
  pub platforms: &'static [&'static str],
}

pub static DEFAULT_DOMESTIC_SCHOLARSHIP: ScholarshipDef = ScholarshipDef {
  key: "domestic",
  name: "Domestic Scholarship",
  host: "Indonesia",
  essay_count: 2,
  reference_letters: 1,
  has_interview: true,
  english_requirement: "IELTS 6.5 / TOEFL iBT 80",
  essay_focus: "your contribution plan for Indonesia",
};

pub static DOMESTIC_SCHOLARSHIPS: &[ScholarshipDef] = &[
  ScholarshipDef {
    key: "lpdp",
    name: "LPDP Scholarship",
    host: "Indonesia",
    essay_count: 2,
    reference_letters: 1,
    has_interview: true,
    english_requirement: "IELTS 6.5 / TOEFL iBT 80",
    essay_focus: "\"My Contribution to Indonesia\" and your study plan",
  },
  ScholarshipDef {
    key: "bim",
    name: "Beasiswa Indonesia Maju",
    host: "Indonesia",
    essay_count: 1,
    reference_letters: 1,
    has_interview: true,
    english_requirement: "IELTS 6.5",
    essay_focus: "your achievement record and future impact",
  },
  ScholarshipDef {
    key: "bi",
    name: "Bank Indonesia Scholarship",
    host: "Indonesia",
    essay_count: 1,
    reference_letters: 1,
    has_interview: true,
    english_requirement: "TOEFL ITP 500",
    essay_focus: "the role of economics in your community",
  },
  ScholarshipDef {
    key: "djarum",
    name: "Djarum Beasiswa Plus",
    host: "Indonesia",
    essay_count: 1,
    reference_letters: 1,
    has_interview: true,
    english_requirement: "none (soft-skill program in English)",
    essay_focus: "leadership experience and organisational impact",
  },
  ScholarshipDef {
    key: "kse",
    name: "Karya Salemba Empat Scholarship",
    host: "Indonesia",
    essay_count: 1,
    reference_letters: 0,
    has_interview: false,
    english_requirement: "none",
    essay_focus: "financial need and academic motivation",
  },
];

pub static DEFAULT_GLOBAL_SCHOLARSHIP: ScholarshipDef = ScholarshipDef {
  key: "global",
  name: "Global Scholarship",
  host: "abroad",
  essay_count: 3,
  reference_letters: 2,
  has_interview: true,
  english_requirement: "IELTS 6.5",
  essay_focus: "leadership, networking, study plan and career plan",
};

pub static GLOBAL_SCHOLARSHIPS: &[ScholarshipDef] = &[
  ScholarshipDef {
    key: "chevening",
    name: "Chevening Scholarship",
    host: "United Kingdom",
    essay_count: 4,
    reference_letters: 2,
    has_interview: true,
    english_requirement: "IELTS 6.5",
    essay_focus: "leadership, networking, study in the UK and career plan",
  },
  ScholarshipDef {
    key: "fulbright",
    name: "Fulbright Scholarship",
    host: "United States",
    essay_count: 2,
    reference_letters: 3,
    has_interview: true,
    english_requirement: "TOEFL iBT 80 / IELTS 6.5",
    essay_focus: "personal statement and study objective",
  },
  ScholarshipDef {
    key: "aas",
    name: "Australia Awards Scholarship",
    host: "Australia",
    essay_count: 4,
    reference_letters: 2,
    has_interview: true,
    english_requirement: "IELTS 6.5",
    essay_focus: "development impact and reintegration plan",
  },
  ScholarshipDef {
    key: "mext",
    name: "MEXT Scholarship",
    host: "Japan",
    essay_count: 1,
    reference_letters: 2,
    has_interview: true,
    english_requirement: "written English test",
    essay_focus: "field of study and research plan",
  },
  ScholarshipDef {
    key: "gks",
    name: "Global Korea Scholarship",
    host: "South Korea",
    essay_count: 3,
    reference_letters: 2,
    has_interview: false,
    english_requirement: "TOEFL iBT 80 / IELTS 5.5",
    essay_focus: "personal statement, study plan and self-introduction",
  },
  ScholarshipDef {
    key: "daad",
    name: "DAAD Scholarship",
    host: "Germany",
    essay_count: 1,
    reference_letters: 2,
    has_interview: true,
    english_requirement: "IELTS 6.5",
    essay_focus: "motivation letter linked to development relevance",
  },
  ScholarshipDef {
    key: "erasmus",
    name: "Erasmus Mundus Joint Masters",
    host: "Europe",
    essay_count: 1,
    reference_letters: 2,
    has_interview: false,
    english_requirement: "IELTS 6.5",
    essay_focus: "motivation letter for the consortium",
  },
];

pub static DEFAULT_EXCHANGE: ExchangeDef = ExchangeDef {
  key: "exchange",
  name: "Student Exchange Program",
  english_requirement: "IELTS 6.0",
  duration_label: "one semester",
};

pub static EXCHANGE_PROGRAMS: &[ExchangeDef] = &[
  ExchangeDef { key: "iisma", name: "IISMA", english_requirement: "IELTS 6.5 / Duolingo 110", duration_label: "one semester" },
  ExchangeDef { key: "global_ugrad", name: "Global UGRAD", english_requirement: "TOEFL ITP 500", duration_label: "one semester" },
  ExchangeDef { key: "yes", name: "Kennedy-Lugar YES", english_requirement: "program English test", duration_label: "one academic year" },
  ExchangeDef { key: "jenesys", name: "JENESYS", english_requirement: "interview in English", duration_label: "two weeks" },
  ExchangeDef { key: "aiesec", name: "AIESEC Global Volunteer", english_requirement: "conversational English", duration_label: "six weeks" },
];

static IT_TERMS: &[&str] = &["deployment", "pull request", "sprint", "backlog", "incident", "API", "stakeholder", "rollback"];
static HEALTHCARE_TERMS: &[&str] = &["triage", "discharge summary", "vital signs", "handover", "contraindication", "informed consent", "referral", "diagnosis"];
static ENGINEERING_TERMS: &[&str] = &["specification", "tolerance", "load test", "site inspection", "change order", "compliance", "prototype", "root cause"];
static FINANCE_TERMS: &[&str] = &["balance sheet", "forecast", "reconciliation", "audit trail", "cash flow", "variance", "compliance", "liquidity"];
static HOSPITALITY_TERMS: &[&str] = &["check-in", "upsell", "complaint handling", "reservation", "amenities", "occupancy", "guest feedback", "itinerary"];
static MARKETING_TERMS: &[&str] = &["conversion", "campaign brief", "brand voice", "funnel", "engagement rate", "A/B test", "copywriting", "persona"];
static SUPPORT_TERMS: &[&str] = &["ticket", "escalation", "SLA", "knowledge base", "canned response", "follow-up", "refund", "troubleshooting"];
static GENERAL_TERMS: &[&str] = &["deadline", "deliverable", "follow-up", "agenda", "action item", "feedback", "priority", "update"];

pub static DEFAULT_INDUSTRY: IndustryDef = IndustryDef {
  key: "general",
  name: "General Professional",
  core_terms: GENERAL_TERMS,
  key_document: "status update email",
  key_meeting: "team meeting",
};

pub static INDUSTRIES: &[IndustryDef] = &[
  IndustryDef { key: "it", name: "Information Technology", core_terms: IT_TERMS, key_document: "incident report", key_meeting: "daily stand-up" },
  IndustryDef { key: "healthcare", name: "Healthcare", core_terms: HEALTHCARE_TERMS, key_document: "patient handover note", key_meeting: "ward round" },
  IndustryDef { key: "engineering", name: "Engineering", core_terms: ENGINEERING_TERMS, key_document: "technical specification", key_meeting: "design review" },
  IndustryDef { key: "finance", name: "Finance", core_terms: FINANCE_TERMS, key_document: "monthly variance report", key_meeting: "budget review" },
  IndustryDef { key: "hospitality", name: "Hospitality", core_terms: HOSPITALITY_TERMS, key_document: "guest complaint response", key_meeting: "shift briefing" },
  IndustryDef { key: "marketing", name: "Marketing", core_terms: MARKETING_TERMS, key_document: "campaign brief", key_meeting: "client pitch" },
  IndustryDef { key: "customer_support", name: "Customer Support", core_terms: SUPPORT_TERMS, key_document: "ticket resolution reply", key_meeting: "escalation call" },
];

pub static DEFAULT_WHV_COUNTRY: WhvCountryDef = WhvCountryDef {
  key: "whv",
  country: "your destination country",
  visa_name: "Working Holiday Visa",
  english_requirement: "functional English",
  common_jobs: &["hospitality", "farm work", "retail"],
};

pub static WHV_COUNTRIES: &[WhvCountryDef] = &[
  WhvCountryDef {
    key: "australia",
    country: "Australia",
    visa_name: "Work and Holiday Visa (subclass 462)",
    english_requirement: "IELTS 4.5 (functional English)",
    common_jobs: &["farm work", "hospitality", "warehouse"],
  },
  WhvCountryDef {
    key: "new_zealand",
    country: "New Zealand",
    visa_name: "Working Holiday Visa",
    english_requirement: "IELTS 4.5",
    common_jobs: &["fruit picking", "hospitality", "tourism"],
  },
];

pub static DEFAULT_FREELANCE_NICHE: FreelanceNicheDef = FreelanceNicheDef {
  key: "freelance",
  name: "Freelancing",
  deliverable: "client project",
  platforms: &["Upwork", "Fiverr", "LinkedIn"],
};

pub static FREELANCE_NICHES: &[FreelanceNicheDef] = &[
  FreelanceNicheDef { key: "writing", name: "Freelance Writing", deliverable: "blog article", platforms: &["Upwork", "Contently", "LinkedIn"] },
  FreelanceNicheDef { key: "design", name: "Freelance Design", deliverable: "design mockup", platforms: &["Dribbble", "Behance", "Upwork"] },
  FreelanceNicheDef { key: "development", name: "Freelance Development", deliverable: "web feature", platforms: &["Upwork", "Toptal", "GitHub"] },
  FreelanceNicheDef { key: "translation", name: "Freelance Translation", deliverable: "translated document", platforms: &["ProZ", "Upwork", "Gengo"] },
  FreelanceNicheDef { key: "virtual_assistant", name: "Virtual Assistance", deliverable: "weekly admin report", platforms: &["Upwork", "OnlineJobs", "Fiverr"] },
];

fn find<'a, T>(table: &'a [T], key: &str, key_of: impl Fn(&T) -> &str) -> Option<&'a T> {
  table.iter().find(|row| key_of(row) == key)
}

pub fn domestic_scholarship(key: &str) -> &'static ScholarshipDef {
  find(DOMESTIC_SCHOLARSHIPS, key, |s| s.key).unwrap_or(&DEFAULT_DOMESTIC_SCHOLARSHIP)
}

pub fn global_scholarship(key: &str) -> &'static ScholarshipDef {
  find(GLOBAL_SCHOLARSHIPS, key, |s| s.key).unwrap_or(&DEFAULT_GLOBAL_SCHOLARSHIP)
}

pub fn exchange_program(key: &str) -> &'static ExchangeDef {
  find(EXCHANGE_PROGRAMS, key, |e| e.key).unwrap_or(&DEFAULT_EXCHANGE)
}

pub fn industry(key: &str) -> &'static IndustryDef {
  find(INDUSTRIES, key, |i| i.key).unwrap_or(&DEFAULT_INDUSTRY)
}

pub fn whv_country(key: &str) -> &'static WhvCountryDef {
  find(WHV_COUNTRIES, key, |c| c.key).unwrap_or(&DEFAULT_WHV_COUNTRY)
}

pub fn freelance_niche(key: &str) -> &'static FreelanceNicheDef {
  find(FREELANCE_NICHES, key, |n| n.key).unwrap_or(&DEFAULT_FREELANCE_NICHE)
}

/// One selectable objective, as listed to the dashboard.
#[derive(Clone, Debug, Serialize)]
pub struct ObjectiveEntry {
  pub id: String,
  pub family: &'static str,
  pub label: String,
}

fn entry(id: impl Into<String>, family: &'static str, label: impl Into<String>) -> ObjectiveEntry {
  ObjectiveEntry { id: id.into(), family, label: label.into() }
}

/// Every objective id the router recognises explicitly (the fallback is listed last).
pub fn objective_catalog() -> Vec<ObjectiveEntry> {
  let mut out = Vec::new();

  for band in ["60", "65", "70", "75", "80"] {
    out.push(entry(format!("ielts_{band}"), "ielts", format!("IELTS {}.{}", &band[..1], &band[1..])));
  }
  for score in ["80", "90", "100", "110"] {
    out.push(entry(format!("toefl_{score}"), "toefl", format!("TOEFL iBT {score}")));
  }
  for s in DOMESTIC_SCHOLARSHIPS {
    out.push(entry(format!("scholarship_domestic_{}", s.key), "domestic_scholarship", s.name));
  }
  for s in GLOBAL_SCHOLARSHIPS {
    out.push(entry(format!("scholarship_global_{}", s.key), "global_scholarship", s.name));
  }
  for (track, label) in [("essay", "Academic Essay Writing"), ("thesis", "Thesis Writing in English"), ("journal", "Journal Article Publication")] {
    out.push(entry(format!("academic_writing_{track}"), "academic_writing", label));
  }
  for e in EXCHANGE_PROGRAMS {
    out.push(entry(format!("exchange_{}", e.key), "student_exchange", e.name));
  }
  out.push(entry("ivy_undergraduate", "ivy_admissions", "Ivy League Undergraduate Admission"));
  out.push(entry("ivy_graduate", "ivy_admissions", "Ivy League Graduate Admission"));
  out.push(entry("school_finals_junior", "school_finals", "Junior High English Finals"));
  out.push(entry("school_finals_senior", "school_finals", "Senior High English Finals"));
  for (kind, label) in [("job", "Job Interview Mastery"), ("scholarship", "Scholarship Interview Mastery"), ("visa", "Visa Interview Mastery")] {
    out.push(entry(format!("interview_{kind}"), "interview_mastery", label));
  }
  for i in INDUSTRIES {
    out.push(entry(format!("remote_work_{}", i.key), "remote_work", format!("Remote Work Readiness: {}", i.name)));
  }
  out.push(entry("public_speaking", "public_speaking", "Public Speaking Confidence"));
  for c in WHV_COUNTRIES {
    out.push(entry(format!("whv_{}", c.key), "working_holiday", format!("{} {}", c.country, c.visa_name)));
  }
  for n in FREELANCE_NICHES {
    out.push(entry(format!("freelance_{}", n.key), "freelancing", n.name));
  }
  out.push(entry("leadership_english", "leadership_english", "Leadership English"));
  for i in INDUSTRIES {
    out.push(entry(format!("technical_english_{}", i.key), "technical_english", format!("Technical English: {}", i.name)));
  }
  out.push(entry("startup_pitch", "startup_pitching", "Startup Pitching in English"));
  out.push(entry("conversation_fluency", "conversation_fluency", "Conversation Fluency"));
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unknown_keys_fall_back_to_defaults() {
    assert_eq!(domestic_scholarship("nope").name, "Domestic Scholarship");
    assert_eq!(global_scholarship("").name, "Global Scholarship");
    assert_eq!(exchange_program("x").name, "Student Exchange Program");
    assert_eq!(industry("space").key, "general");
    assert_eq!(whv_country("mars").visa_name, "Working Holiday Visa");
    assert_eq!(freelance_niche("?").key, "freelance");
  }

  #[test]
  fn known_keys_resolve() {
    assert_eq!(domestic_scholarship("lpdp").name, "LPDP Scholarship");
    assert_eq!(global_scholarship("chevening").essay_count, 4);
    assert_eq!(industry("it").key_meeting, "daily stand-up");
  }

  #[test]
  fn catalog_ids_are_unique() {
    let catalog = objective_catalog();
    let mut ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
  }

  #[test]
  fn industries_carry_vocabulary() {
    for i in INDUSTRIES {
      assert!(i.core_terms.len() >= 5, "{} has too few terms", i.key);
    }
  }
}

//! Study-abroad and academic builders: scholarships, exchanges, admissions, academic writing.

use crate::catalog::{ExchangeDef, ScholarshipDef};
use crate::domain::EventType::{MockInterview, SpeakingClub, WritingClinic};
use crate::domain::TaskCategory::{Admin, Event, Listening, Reading, Speaking, Test, Writing};
use crate::domain::TaskType::{MentorAssessed, SelfTracked, SystemLinked};
use crate::domain::GeneratedTask;
use crate::objective::{AdmissionLevel, WritingTrack};

use super::{quizzes, PlanContext};

fn plural(n: u32, one: &str, many: &str) -> String {
  if n == 1 { format!("{n} {one}") } else { format!("{n} {many}") }
}

/// Interview slot shared by both scholarship builders. Programs without an interview get
/// an equally weighted self-presentation task in its place.
fn interview_or_pitch(ctx: &PlanContext, def: &ScholarshipDef, weight: u32) -> GeneratedTask {
  if def.has_interview {
    let sessions = ctx.reps(3);
    GeneratedTask::new(
      format!("Interview Simulation with Mentor ({sessions})"),
      format!("Panel-style mock interviews modelled on the {} selection round, with feedback on content and delivery.", def.name),
      MentorAssessed, Speaking, weight,
    )
    .pro()
    .linked_to(MockInterview)
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(sessions * 45)
  } else {
    GeneratedTask::new(
      "Record a Motivation Video Pitch",
      format!("Record a two-minute video explaining why you fit the {} and review it against your essays.", def.name),
      SelfTracked, Speaking, weight,
    )
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(60)
  }
}

fn references_or_portfolio(ctx: &PlanContext, def: &ScholarshipDef, weight: u32) -> GeneratedTask {
  if def.reference_letters > 0 {
    GeneratedTask::new(
      format!("Request {}", plural(def.reference_letters, "Reference Letter", "Reference Letters")),
      "Brief your referees with your CV, essays and the deadline, and follow up politely in English.",
      SelfTracked, Admin, weight,
    )
    .with_deadline(ctx.deadline_at(0.45))
    .with_minutes(def.reference_letters * 30)
    .with_criteria("Referees confirmed submission")
  } else {
    GeneratedTask::new(
      "Compile Achievement Portfolio",
      "Collect certificates, transcripts and evidence of activities into one organised portfolio.",
      SelfTracked, Admin, weight,
    )
    .with_deadline(ctx.deadline_at(0.45))
    .with_minutes(90)
  }
}

pub fn domestic_scholarship_tasks(ctx: &PlanContext, def: &ScholarshipDef) -> Vec<GeneratedTask> {
  let review_rounds = ctx.reps(3);
  let club = ctx.reps(6);
  let aptitude = ctx.reps(5);

  vec![
    GeneratedTask::new(
      format!("Check {} Eligibility & Document Checklist", def.name),
      "Read the official guidebook and list every required document with its deadline.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(7)
    .with_minutes(60)
    .with_criteria("Checklist saved with deadlines"),
    GeneratedTask::new(
      format!("Prepare English Certificate ({})", def.english_requirement),
      "Book and sit the English test the program accepts, early enough to retake if needed.",
      SelfTracked, Test, 15,
    )
    .with_deadline(ctx.deadline_at(0.4))
    .with_minutes(180),
    GeneratedTask::new(
      format!("Draft {}: {}", plural(def.essay_count, "Essay", "Essays"), def.essay_focus),
      "Write complete first drafts that connect your background, study plan and contribution.",
      SelfTracked, Writing, 15,
    )
    .with_deadline(ctx.deadline_at(0.35))
    .with_minutes(def.essay_count.max(1) * 180),
    GeneratedTask::new(
      format!("Essay Review with Mentor ({review_rounds} rounds)"),
      "Revise each essay with a mentor who has reviewed successful applications.",
      MentorAssessed, Writing, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(review_rounds * 60),
    references_or_portfolio(ctx, def, 5),
    GeneratedTask::new(
      "Prepare Study Plan / Research Proposal",
      "Outline your program, courses and the research question you want to pursue.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.55))
    .with_minutes(240),
    interview_or_pitch(ctx, def, 15),
    GeneratedTask::new(
      format!("Speaking Club: Practise Answering Motivation Questions ({club})"),
      "Answer 'why this program' and 'how will you contribute' questions with peers.",
      SystemLinked, Event, 10,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(club * 60),
    GeneratedTask::new(
      format!("Online Aptitude Test Practice ({aptitude} Sets)"),
      "Timed verbal, numerical and logical reasoning sets.",
      SelfTracked, Test, 5,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(aptitude * 45),
    GeneratedTask::new(
      format!("Submit the {} Application", def.name),
      "Upload every document, check the confirmation email and keep a copy of the submission.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(ctx.deadline_at(0.65))
    .with_minutes(60)
    .with_criteria("Submission confirmation uploaded"),
  ]
}

pub fn global_scholarship_tasks(ctx: &PlanContext, def: &ScholarshipDef) -> Vec<GeneratedTask> {
  let review_rounds = ctx.reps(4);
  let club = ctx.reps(6);
  let alumni = ctx.reps(3);

  vec![
    GeneratedTask::new(
      format!("Shortlist Universities & Check {} Criteria", def.name),
      format!("Pick three eligible courses in {} and confirm each one meets the scholarship rules.", def.host),
      SelfTracked, Admin, 5,
    )
    .with_deadline(7)
    .with_minutes(120),
    GeneratedTask::new(
      format!("Reach {}", def.english_requirement),
      "Sit the required English test with enough margin to meet every university's minimum.",
      SelfTracked, Test, 15,
    )
    .with_deadline(ctx.deadline_at(0.4))
    .with_minutes(180),
    GeneratedTask::new(
      format!("Write {}: {}", plural(def.essay_count, "Essay", "Essays"), def.essay_focus),
      "Draft each essay within its word limit, using concrete examples rather than general claims.",
      SelfTracked, Writing, 15,
    )
    .with_deadline(ctx.deadline_at(0.4))
    .with_minutes(def.essay_count.max(1) * 180),
    GeneratedTask::new(
      format!("Mentor Essay Review ({review_rounds} rounds)"),
      "Structured feedback from a mentor who knows the selection criteria.",
      MentorAssessed, Writing, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.55))
    .with_minutes(review_rounds * 60),
    references_or_portfolio(ctx, def, 5),
    GeneratedTask::new(
      "Build an Academic CV in English",
      "A two-page CV with education, experience, publications and leadership roles.",
      SelfTracked, Writing, 5,
    )
    .with_deadline(ctx.deadline_at(0.3))
    .with_minutes(120)
    .with_materials(&["academic_cv_template.docx"]),
    GeneratedTask::new(
      format!("Research Your Host Country: {}", def.host),
      "Read about the education system, culture and alumni network you will join.",
      SelfTracked, Reading, 5,
    )
    .with_deadline(ctx.deadline_at(0.3))
    .with_minutes(90),
    interview_or_pitch(ctx, def, 15),
    GeneratedTask::new(
      format!("Speaking Club: Discuss Global Issues ({club})"),
      "Build confidence discussing development, policy and your field in English.",
      SystemLinked, Event, 10,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(club * 60),
    GeneratedTask::new(
      format!("Submit Before the {} Deadline", def.name),
      "Submit the online application and save the confirmation.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(60)
    .with_criteria("Submission confirmation uploaded"),
    GeneratedTask::new(
      format!("Networking Email to Alumni ({alumni})"),
      "Write short, specific emails asking alumni about their application experience.",
      SelfTracked, Writing, 5,
    )
    .with_deadline(ctx.deadline_at(0.45))
    .with_minutes(alumni * 20),
  ]
}

pub fn student_exchange_tasks(ctx: &PlanContext, def: &ExchangeDef) -> Vec<GeneratedTask> {
  let videos = ctx.reps(12);
  let club = ctx.reps(8);
  let interviews = ctx.reps(3);

  vec![
    GeneratedTask::new(
      format!("Check {} Requirements & Timeline", def.name),
      "Confirm eligibility, partner universities and every selection stage.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(7)
    .with_minutes(60),
    GeneratedTask::new(
      format!("Meet the English Requirement: {}", def.english_requirement),
      "Prepare for and pass the English test the program uses in selection.",
      SelfTracked, Test, 20,
    )
    .with_deadline(ctx.deadline_at(0.45))
    .with_minutes(180),
    GeneratedTask::new(
      "Motivation Essay Draft",
      format!("Explain what you want to learn during {} abroad and how you will share it back home.", def.duration_label),
      SelfTracked, Writing, 15,
    )
    .with_deadline(ctx.deadline_at(0.35))
    .with_minutes(180),
    GeneratedTask::new(
      "Essay Review with Mentor",
      "Tighten structure and language with mentor feedback.",
      MentorAssessed, Writing, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.45))
    .with_minutes(60),
    GeneratedTask::new(
      format!("Campus Life Vocabulary & Listening ({videos} Videos)"),
      "Watch lectures and campus tours and note the words you would need in your first week.",
      SelfTracked, Listening, 10,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(videos * 20),
    GeneratedTask::new(
      format!("Speaking Club: Cross-Cultural Conversations ({club})"),
      "Practise small talk, introducing your culture and asking follow-up questions.",
      SystemLinked, Event, 15,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(club * 60),
    GeneratedTask::new(
      format!("Selection Interview Practice ({interviews})"),
      "Mock selection interviews with a mentor, including questions on adaptability.",
      MentorAssessed, Speaking, 10,
    )
    .pro()
    .linked_to(MockInterview)
    .with_deadline(ctx.deadline_at(0.75))
    .with_minutes(interviews * 30),
    GeneratedTask::new(
      "Prepare Learning Agreement & Documents",
      "Match courses with your home university and gather passport, visa and insurance documents.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(120),
    GeneratedTask::new(
      "Pre-Departure Survival English",
      "Rehearse airport, housing, bank and doctor conversations.",
      SelfTracked, Speaking, 5,
    )
    .with_deadline(ctx.deadline_at(0.95))
    .with_minutes(90),
  ]
}

pub fn ivy_admissions_tasks(ctx: &PlanContext, level: AdmissionLevel) -> Vec<GeneratedTask> {
  let graduate = level == AdmissionLevel::Graduate;
  let schools = if graduate { 6 } else { 10 };
  let critiques = ctx.reps(4);
  let alumni = ctx.reps(2);
  let club = ctx.reps(6);
  let supplements = ctx.reps(6);

  let (test_title, test_desc) = if graduate {
    ("GRE Verbal Prep", "Text completion, sentence equivalence and reading comprehension drills.")
  } else {
    ("SAT Reading & Writing Prep", "Adaptive-module practice on evidence, vocabulary in context and grammar.")
  };
  let english_target = if graduate { "TOEFL iBT 105+ or IELTS 7.5" } else { "TOEFL iBT 100+ or IELTS 7.0" };
  let (essay_title, essay_desc) = if graduate {
    ("Statement of Purpose", "Your research interests, preparation and fit with named faculty, in about 1,000 words.")
  } else {
    ("Common App Personal Essay (650 words)", "A story that shows who you are beyond grades and scores.")
  };
  let supplement_title = if graduate {
    "Personal History Statement".to_string()
  } else {
    format!("Supplemental Essays ({supplements})")
  };

  vec![
    GeneratedTask::new(
      format!("Build Your College List ({schools} Schools)"),
      "Balance reach, target and likely schools and note each application's requirements.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(ctx.deadline_at(0.05))
    .with_minutes(180),
    GeneratedTask::new(test_title, test_desc, SelfTracked, Test, 15)
      .with_deadline(ctx.deadline_at(0.5))
      .with_minutes(1200),
    GeneratedTask::new(
      format!("English Proficiency Score: {english_target}"),
      "Plan your test date so scores arrive before the first deadline.",
      SelfTracked, Test, 10,
    )
    .with_deadline(ctx.deadline_at(0.45))
    .with_minutes(240),
    GeneratedTask::new(essay_title, essay_desc, SelfTracked, Writing, 15)
      .with_deadline(ctx.deadline_at(0.4))
      .with_minutes(600),
    GeneratedTask::new(
      supplement_title,
      "Answer each school's prompts specifically; no recycled paragraphs.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.55))
    .with_minutes(supplements * 90),
    GeneratedTask::new(
      format!("Essay Critique with Ivy Mentor ({critiques} rounds)"),
      "Line-by-line critique from a mentor admitted to a top-tier program.",
      MentorAssessed, Writing, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(critiques * 60),
    GeneratedTask::new(
      "Recommendation Letters Briefing",
      "Send each recommender a brag sheet with the stories you want them to highlight.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(90),
    GeneratedTask::new(
      "Activities List & Resume",
      "Describe each activity with strong verbs and measurable impact.",
      SelfTracked, Writing, 5,
    )
    .with_deadline(ctx.deadline_at(0.35))
    .with_minutes(120),
    GeneratedTask::new(
      format!("Alumni Interview Simulation ({alumni})"),
      "Practise conversational interviews that probe curiosity and fit.",
      MentorAssessed, Speaking, 10,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.75))
    .with_minutes(alumni * 45),
    GeneratedTask::new(
      format!("Speaking Club: Defend Your Ideas ({club})"),
      "Debate-style sessions to sharpen spontaneous argument in English.",
      SystemLinked, Event, 5,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(club * 60),
    GeneratedTask::new(
      "Submit Applications",
      "Submit every application and confirm all materials are marked complete in each portal.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(120)
    .with_criteria("Portal screenshots showing complete status"),
  ]
}

pub fn academic_writing_tasks(ctx: &PlanContext, track: WritingTrack) -> Vec<GeneratedTask> {
  let exercises = ctx.reps(12);
  let sources = ctx.reps(10);
  let rounds = ctx.reps(3);
  let clinics = ctx.reps(4);
  let drafts = ctx.reps(4);

  let (reading_title, reading_desc) = match track {
    WritingTrack::Essay => (
      format!("Read {sources} Model Essays"),
      "Annotate thesis statements, topic sentences and how evidence is introduced.",
    ),
    WritingTrack::Thesis => (
      format!("Literature Review: Summarise {sources} Sources"),
      "Write a structured summary of each source and note how it relates to your question.",
    ),
    WritingTrack::Journal => (
      format!("Analyse {sources} Articles in Your Target Journal"),
      "Study how published articles frame the research gap and report results.",
    ),
  };
  let (draft_title, draft_desc) = match track {
    WritingTrack::Essay => (
      format!("Draft {drafts} Argumentative Essays"),
      "Write essays with a clear position, counter-argument and rebuttal.",
    ),
    WritingTrack::Thesis => (
      "Draft Thesis Chapter Outline & Introduction".to_string(),
      "Outline every chapter and write a full introduction with research questions.",
    ),
    WritingTrack::Journal => (
      "Draft Manuscript (IMRaD Structure)".to_string(),
      "Write Introduction, Methods, Results and Discussion sections to the journal's guidelines.",
    ),
  };
  let (final_title, final_desc) = match track {
    WritingTrack::Essay => ("Submit Final Portfolio", "Compile your best revised essays into a final portfolio."),
    WritingTrack::Thesis => ("Submit Chapter to Supervisor", "Send the revised chapter with a short cover note on changes."),
    WritingTrack::Journal => ("Submit to Journal & Draft Cover Letter", "Prepare the cover letter and submit through the journal's system."),
  };

  vec![
    GeneratedTask::new(
      "Writing Diagnostic: Submit a Sample",
      "Upload a recent piece of academic writing as your baseline.",
      SelfTracked, Writing, 5,
    )
    .with_deadline(7)
    .with_minutes(30),
    GeneratedTask::new(
      "Academic Style & Hedging Language",
      "Learn formal register, hedging and cautious claims.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.2))
    .with_minutes(90)
    .with_quiz(quizzes::academic_style()),
    GeneratedTask::new(
      format!("Paraphrasing & Citation Practice ({exercises} Exercises)"),
      "Paraphrase source passages and cite them correctly in APA style.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.35))
    .with_minutes(exercises * 20)
    .with_materials(&["apa_quick_guide.pdf"]),
    GeneratedTask::new(reading_title, reading_desc, SelfTracked, Reading, 15)
      .with_deadline(ctx.deadline_at(0.4))
      .with_minutes(sources * 45),
    GeneratedTask::new(draft_title, draft_desc, SelfTracked, Writing, 20)
      .with_deadline(ctx.deadline_at(0.7))
      .with_minutes(600),
    GeneratedTask::new(
      format!("Mentor Feedback on Draft ({rounds} rounds)"),
      "Detailed comments on argument, structure and language from a writing mentor.",
      MentorAssessed, Writing, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(rounds * 60),
    GeneratedTask::new(
      format!("Writing Clinic Attendance ({clinics})"),
      "Bring a paragraph to the community writing clinic for live peer editing.",
      SystemLinked, Event, 10,
    )
    .linked_to(WritingClinic)
    .with_deadline(ctx.deadline_at(0.75))
    .with_minutes(clinics * 90),
    GeneratedTask::new(
      "Self-Edit with a Revision Checklist",
      "Check cohesion, article use, subject-verb agreement and citation format.",
      SelfTracked, Writing, 5,
    )
    .with_deadline(ctx.deadline_at(0.85))
    .with_minutes(60)
    .with_materials(&["revision_checklist.pdf"]),
    GeneratedTask::new(final_title, final_desc, SelfTracked, Admin, 10)
      .with_deadline(ctx.final_deadline())
      .with_minutes(60),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{domestic_scholarship, global_scholarship};
  use crate::domain::TaskBreakdownConfig;

  fn ctx() -> PlanContext {
    PlanContext::from_config(&TaskBreakdownConfig { duration_months: 6, ..Default::default() })
  }

  #[test]
  fn unknown_domestic_scholarship_uses_generic_label() {
    let tasks = domestic_scholarship_tasks(&ctx(), domestic_scholarship("nope"));
    assert_eq!(tasks[0].title, "Check Domestic Scholarship Eligibility & Document Checklist");
  }

  #[test]
  fn no_interview_program_swaps_in_video_pitch() {
    let kse = domestic_scholarship_tasks(&ctx(), domestic_scholarship("kse"));
    assert!(kse.iter().any(|t| t.title == "Record a Motivation Video Pitch"));
    assert!(kse.iter().any(|t| t.title == "Compile Achievement Portfolio"));

    let lpdp = domestic_scholarship_tasks(&ctx(), domestic_scholarship("lpdp"));
    assert!(lpdp.iter().any(|t| t.title.starts_with("Interview Simulation")));
    assert_eq!(kse.len(), lpdp.len());
  }

  #[test]
  fn reference_count_is_pluralised() {
    let chevening = global_scholarship_tasks(&ctx(), global_scholarship("chevening"));
    assert!(chevening.iter().any(|t| t.title == "Request 2 Reference Letters"));
    let lpdp = domestic_scholarship_tasks(&ctx(), domestic_scholarship("lpdp"));
    assert!(lpdp.iter().any(|t| t.title == "Request 1 Reference Letter"));
  }

  #[test]
  fn ivy_levels_pick_different_tests() {
    let undergrad = ivy_admissions_tasks(&ctx(), AdmissionLevel::Undergraduate);
    let grad = ivy_admissions_tasks(&ctx(), AdmissionLevel::Graduate);
    assert_eq!(undergrad[1].title, "SAT Reading & Writing Prep");
    assert_eq!(grad[1].title, "GRE Verbal Prep");
  }

  #[test]
  fn writing_tracks_end_differently() {
    for (track, last) in [
      (WritingTrack::Essay, "Submit Final Portfolio"),
      (WritingTrack::Thesis, "Submit Chapter to Supervisor"),
      (WritingTrack::Journal, "Submit to Journal & Draft Cover Letter"),
    ] {
      let tasks = academic_writing_tasks(&ctx(), track);
      assert_eq!(tasks.last().map(|t| t.title.as_str()), Some(last));
    }
  }
}

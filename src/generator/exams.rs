//! Test-preparation builders: IELTS, TOEFL iBT and school English finals.

use crate::domain::EventType::{MockTest, SpeakingClub};
use crate::domain::TaskCategory::{Admin, Event, Listening, Reading, Speaking, Test, Writing};
use crate::domain::TaskType::{MentorAssessed, SelfTracked, SystemLinked};
use crate::domain::GeneratedTask;
use crate::levels::{cefr_to_ielts, toefl_to_ielts};
use crate::objective::SchoolLevel;

use super::{quizzes, PlanContext};

const DEFAULT_IELTS_TARGET: f32 = 7.0;
const DEFAULT_IELTS_CURRENT: f32 = 5.5;
const DEFAULT_TOEFL_TARGET: u32 = 90;

pub fn ielts_tasks(ctx: &PlanContext, target_band: Option<f32>) -> Vec<GeneratedTask> {
  let target = target_band.or(ctx.target_score).unwrap_or(DEFAULT_IELTS_TARGET);
  let current = ctx
    .current_score
    .or_else(|| ctx.current_level.map(cefr_to_ielts))
    .unwrap_or(DEFAULT_IELTS_CURRENT);
  let ctx = &ctx.clone().with_band_gap(target - current);

  let listening = ctx.reps(16);
  let reading = ctx.reps(20);
  let task1 = ctx.reps(8);
  let task2 = ctx.reps(10);
  let club = ctx.reps(8);
  let speaking_mocks = ctx.reps(4);
  let words = ctx.reps(300);
  let mocks = ctx.reps(3).max(2);

  vec![
    GeneratedTask::new(
      "Complete Full IELTS Diagnostic Test",
      format!("Sit a full timed IELTS Academic practice test to find your starting band (currently about {current:.1}) before aiming for {target:.1}."),
      SelfTracked, Test, 5,
    )
    .with_deadline(7)
    .with_minutes(165)
    .with_criteria("Band recorded for Listening, Reading, Writing and Speaking")
    .with_materials(&["ielts_diagnostic_test.pdf", "ielts_answer_sheet.pdf"]),
    GeneratedTask::new(
      "Master IELTS Task Types & Band Descriptors",
      "Learn every question type in the four papers and how examiners apply the public band descriptors.",
      SelfTracked, Test, 5,
    )
    .with_deadline(ctx.deadline_at(0.1))
    .with_minutes(90)
    .with_quiz(quizzes::ielts_format())
    .with_materials(&["ielts_band_descriptors.pdf"]),
    GeneratedTask::new(
      format!("Listening Practice: {listening} Full Sections"),
      "Complete Cambridge-style listening sections under timed conditions and log every wrong answer by question type.",
      SelfTracked, Listening, 10,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(listening * 30)
    .with_criteria("Error log kept for every section"),
    GeneratedTask::new(
      format!("Reading Practice: {reading} Academic Passages"),
      "Work through academic passages in 20 minutes each, focusing on True/False/Not Given and matching headings.",
      SelfTracked, Reading, 10,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(reading * 20),
    GeneratedTask::new(
      format!("Writing Task 1: {task1} Reports"),
      "Describe charts, tables, maps and processes in 150+ words with a clear overview paragraph.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(task1 * 20)
    .with_materials(&["task1_overview_phrases.pdf"]),
    GeneratedTask::new(
      format!("Writing Task 2: {task2} Essays with Mentor Feedback"),
      "Write 250+ word essays and get each one scored against the four band descriptors by a mentor.",
      MentorAssessed, Writing, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.75))
    .with_minutes(task2 * 40)
    .with_criteria(format!("Mentor-scored essay at band {target:.1} or above")),
    GeneratedTask::new(
      format!("Speaking Club: Attend {club} Sessions"),
      "Practise Part 2 long turns and Part 3 discussions with other members at the weekly speaking club.",
      SystemLinked, Event, 10,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(club * 60),
    GeneratedTask::new(
      format!("1-on-1 Speaking Mock Interviews ({speaking_mocks})"),
      "Full three-part speaking tests with a mentor acting as examiner, with band feedback on fluency, vocabulary, grammar and pronunciation.",
      MentorAssessed, Speaking, 10,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.85))
    .with_minutes(speaking_mocks * 20),
    GeneratedTask::new(
      format!("Build Academic Vocabulary: {words} Words"),
      "Learn high-frequency academic words with collocations and use each in a sentence of your own.",
      SelfTracked, Reading, 5,
    )
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes((words / 10).max(1) * 15)
    .with_materials(&["academic_word_list.pdf"]),
    GeneratedTask::new(
      format!("Full Mock Test Under Exam Conditions ({mocks})"),
      "Join the community mock test days and sit all four papers in one session.",
      SystemLinked, Test, 10,
    )
    .linked_to(MockTest)
    .with_deadline(ctx.deadline_at(0.9))
    .with_minutes(mocks * 165),
    GeneratedTask::new(
      "Register for the Official IELTS Test",
      "Book your test date and venue so the final weeks of the plan line up with exam day.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(30)
    .with_criteria("Booking confirmation uploaded"),
    GeneratedTask::new(
      "Final Review & Test-Day Strategy",
      "Revisit your error logs, rehearse timing for each paper and prepare your test-day checklist.",
      SelfTracked, Test, 5,
    )
    .with_deadline(ctx.final_deadline())
    .with_minutes(120),
  ]
}

pub fn toefl_tasks(ctx: &PlanContext, target_score: Option<u32>) -> Vec<GeneratedTask> {
  let target = target_score
    .or_else(|| ctx.target_score.filter(|s| *s > 9.0 && *s <= 120.0).map(|s| s as u32))
    .unwrap_or(DEFAULT_TOEFL_TARGET);
  let ctx = match ctx.current_score.filter(|s| *s > 9.0 && *s <= 120.0) {
    Some(current) => ctx.clone().with_band_gap(toefl_to_ielts(target) - toefl_to_ielts(current as u32)),
    None => ctx.clone(),
  };
  let ctx = &ctx;

  let reading = ctx.reps(20);
  let listening = ctx.reps(20);
  let integrated_speaking = ctx.reps(12);
  let club = ctx.reps(8);
  let integrated_writing = ctx.reps(8);
  let discussion = ctx.reps(8);
  let notes = ctx.reps(10);
  let mocks = ctx.reps(3).max(2);

  vec![
    GeneratedTask::new(
      "Take a TOEFL iBT Diagnostic Test",
      "Sit a complete practice test to get section scores before planning the rest of your preparation.",
      SelfTracked, Test, 5,
    )
    .with_deadline(7)
    .with_minutes(120)
    .with_criteria("Section scores recorded"),
    GeneratedTask::new(
      "Learn the TOEFL iBT Format & Scoring",
      "Understand each section, its timing and how raw answers convert to the 0-30 section scale.",
      SelfTracked, Test, 5,
    )
    .with_deadline(ctx.deadline_at(0.1))
    .with_minutes(60)
    .with_quiz(quizzes::toefl_format()),
    GeneratedTask::new(
      format!("Reading: {reading} Academic Passages"),
      "Timed passages with a focus on inference, vocabulary-in-context and prose summary questions.",
      SelfTracked, Reading, 10,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(reading * 18),
    GeneratedTask::new(
      format!("Listening: {listening} Lectures and Conversations"),
      "Campus conversations and academic lectures, answered from your own notes.",
      SelfTracked, Listening, 10,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(listening * 10),
    GeneratedTask::new(
      format!("Integrated Speaking Tasks ({integrated_speaking})"),
      "Record integrated responses and get delivery, language use and topic development feedback from a mentor.",
      MentorAssessed, Speaking, 10,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(integrated_speaking * 15),
    GeneratedTask::new(
      format!("Independent Speaking Club Sessions ({club})"),
      "Practise giving and defending opinions in timed turns at the speaking club.",
      SystemLinked, Event, 10,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(club * 60),
    GeneratedTask::new(
      format!("Integrated Writing Responses ({integrated_writing})"),
      "Summarise how a lecture challenges a reading passage in about 150-225 words.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(integrated_writing * 25),
    GeneratedTask::new(
      format!("Academic Discussion Writing with Mentor Feedback ({discussion})"),
      "Write academic discussion posts and have each one scored by a mentor.",
      MentorAssessed, Writing, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.75))
    .with_minutes(discussion * 20),
    GeneratedTask::new(
      format!("Note-Taking Drills ({notes})"),
      "Build an abbreviation system and practise capturing lecture structure in real time.",
      SelfTracked, Listening, 5,
    )
    .with_deadline(ctx.deadline_at(0.4))
    .with_minutes(notes * 15),
    GeneratedTask::new(
      format!("Full Mock Tests ({mocks})"),
      "Sit full mock tests on community mock test days.",
      SystemLinked, Test, 10,
    )
    .linked_to(MockTest)
    .with_deadline(ctx.deadline_at(0.9))
    .with_minutes(mocks * 120),
    GeneratedTask::new(
      "Register for TOEFL iBT & Send Score Reports",
      "Book a test date and choose the institutions that should receive your free score reports.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(30)
    .with_criteria("Registration confirmation uploaded"),
    GeneratedTask::new(
      format!("Final Review for {target} Points"),
      "Review weak question types and rehearse your test-day routine.",
      SelfTracked, Test, 5,
    )
    .with_deadline(ctx.final_deadline())
    .with_minutes(120),
  ]
}

pub fn school_finals_tasks(ctx: &PlanContext, level: SchoolLevel) -> Vec<GeneratedTask> {
  let level_name = match level {
    SchoolLevel::Junior => "Junior High",
    SchoolLevel::Senior => "Senior High",
  };
  let units = ctx.reps(10);
  let texts = ctx.reps(24);
  let listening = ctx.reps(12);
  let functional = ctx.reps(8);
  let words = ctx.reps(200);
  let essays = ctx.reps(3);
  let simulations = ctx.reps(4).max(2);

  vec![
    GeneratedTask::new(
      format!("Collect the {level_name} Exam Syllabus and Past Papers"),
      "Gather the official exam outline and at least three years of past papers.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(7)
    .with_minutes(45),
    GeneratedTask::new(
      format!("Grammar Review: {units} Topic Units"),
      "Tenses, passive voice, conditionals and reported speech, each unit closed with a short exercise set.",
      SelfTracked, Writing, 15,
    )
    .with_deadline(ctx.deadline_at(0.4))
    .with_minutes(units * 45)
    .with_quiz(quizzes::grammar_review()),
    GeneratedTask::new(
      format!("Reading Comprehension: {texts} Past-Paper Texts"),
      "Answer main-idea, detail and reference questions from past exam texts.",
      SelfTracked, Reading, 20,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(texts * 20),
    GeneratedTask::new(
      format!("Listening Section Practice ({listening} Sets)"),
      "Timed listening sets using past exam recordings.",
      SelfTracked, Listening, 15,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(listening * 25),
    GeneratedTask::new(
      format!("Short Functional Texts Writing ({functional})"),
      "Write notices, announcements, invitations and short letters in the exam's format.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(functional * 20),
    GeneratedTask::new(
      format!("Vocabulary Deck: {words} Exam Words"),
      "Study the most frequent words from past papers with spaced repetition.",
      SelfTracked, Reading, 10,
    )
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes((words / 10).max(1) * 10),
    GeneratedTask::new(
      format!("Teacher-Marked Practice Essay ({essays})"),
      "Submit practice essays for marking against the exam rubric.",
      MentorAssessed, Writing, 10,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(essays * 45),
    GeneratedTask::new(
      format!("Timed Past-Paper Simulations ({simulations})"),
      "Sit complete past papers at community mock test sessions.",
      SystemLinked, Test, 10,
    )
    .linked_to(MockTest)
    .with_deadline(ctx.deadline_at(0.9))
    .with_minutes(simulations * 120),
    GeneratedTask::new(
      "Final Week Revision Plan",
      "Review your error notebook and the topics that cost the most marks in simulations.",
      SelfTracked, Test, 5,
    )
    .with_deadline(ctx.final_deadline())
    .with_minutes(180),
  ]
}

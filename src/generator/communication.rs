//! Speaking-centred builders: public speaking, working holiday, and the conversation fluency default.

use crate::catalog::WhvCountryDef;
use crate::domain::EventType::{MockInterview, SpeakingClub, Webinar};
use crate::domain::TaskCategory::{Admin, Event, Listening, Speaking, Test, Writing};
use crate::domain::TaskType::{MentorAssessed, SelfTracked, SystemLinked};
use crate::domain::GeneratedTask;

use super::{quizzes, PlanContext};

pub fn public_speaking_tasks(ctx: &PlanContext) -> Vec<GeneratedTask> {
  let impromptu = ctx.reps(20);
  let talks = ctx.reps(8);
  let club = ctx.reps(8);
  let feedback = ctx.reps(3);
  let drills = ctx.reps(12);

  vec![
    GeneratedTask::new(
      "Record a Baseline 2-Minute Talk",
      "Talk about any topic you know well and keep the recording to compare at the end.",
      SelfTracked, Speaking, 5,
    )
    .with_deadline(7)
    .with_minutes(20),
    GeneratedTask::new(
      "Speech Structure Fundamentals",
      "Openings, signposting, the rule of three and memorable closings.",
      SelfTracked, Speaking, 5,
    )
    .with_deadline(ctx.deadline_at(0.15))
    .with_minutes(60)
    .with_quiz(quizzes::speech_structure()),
    GeneratedTask::new(
      format!("Impromptu Speaking Drills ({impromptu})"),
      "Draw a random topic and speak for one minute with a clear point, reason and example.",
      SelfTracked, Speaking, 15,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(impromptu * 5),
    GeneratedTask::new(
      format!("Analyse {talks} TED Talks"),
      "Note how each speaker opens, uses stories and handles pauses.",
      SelfTracked, Listening, 10,
    )
    .with_deadline(ctx.deadline_at(0.4))
    .with_minutes(talks * 30),
    GeneratedTask::new(
      "Write & Rehearse a 5-Minute Speech",
      "Script it, cut it to keywords, and rehearse until you can deliver it from notes.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.45))
    .with_minutes(180),
    GeneratedTask::new(
      format!("Deliver at Speaking Club ({club} Sessions)"),
      "Take a speaking role at each session: table topics, prepared speech or evaluator.",
      SystemLinked, Event, 20,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(club * 60),
    GeneratedTask::new(
      format!("Mentor Delivery Feedback ({feedback})"),
      "A mentor reviews recordings for pace, intonation, gestures and audience connection.",
      MentorAssessed, Speaking, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(feedback * 45),
    GeneratedTask::new(
      format!("Vocal Variety & Pronunciation Drills ({drills})"),
      "Stress, pausing and pitch exercises on short passages.",
      SelfTracked, Speaking, 10,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(drills * 15),
    GeneratedTask::new(
      "Q&A Handling Practice",
      "Rehearse bridging, clarifying and admitting what you don't know.",
      SelfTracked, Speaking, 5,
    )
    .with_deadline(ctx.deadline_at(0.75))
    .with_minutes(45),
    GeneratedTask::new(
      "Final Showcase Talk",
      "Deliver your five-minute speech at the community showcase webinar.",
      SystemLinked, Event, 5,
    )
    .linked_to(Webinar)
    .with_deadline(ctx.final_deadline())
    .with_minutes(60),
  ]
}

pub fn working_holiday_tasks(ctx: &PlanContext, country: &WhvCountryDef) -> Vec<GeneratedTask> {
  let scenarios = ctx.reps(12);
  let enquiries = ctx.reps(6);
  let safety = ctx.reps(8);
  let podcasts = ctx.reps(10);
  let club = ctx.reps(6);
  let jobs = country.common_jobs.join(", ");

  vec![
    GeneratedTask::new(
      format!("Check {} Eligibility", country.visa_name),
      format!("Confirm age limits, quotas, funds and supporting letters for {}.", country.country),
      SelfTracked, Admin, 5,
    )
    .with_deadline(7)
    .with_minutes(60),
    GeneratedTask::new(
      format!("Reach {}", country.english_requirement),
      "Sit the English test accepted for the visa and keep the result for the application.",
      SelfTracked, Test, 15,
    )
    .with_deadline(ctx.deadline_at(0.45))
    .with_minutes(180),
    GeneratedTask::new(
      format!("Survival English: {scenarios} Everyday Scenarios"),
      "Renting a room, opening a bank account, seeing a doctor and asking for directions.",
      SelfTracked, Speaking, 15,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(scenarios * 20),
    GeneratedTask::new(
      format!("Write an English Resume for {jobs}"),
      "A one-page resume that highlights reliability, availability and relevant experience.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.4))
    .with_minutes(120),
    GeneratedTask::new(
      format!("Phone & Walk-In Job Enquiry Role-Plays ({enquiries})"),
      "Introduce yourself, ask about vacancies and confirm shifts.",
      SelfTracked, Speaking, 10,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(enquiries * 20),
    GeneratedTask::new(
      format!("Workplace Safety & Instructions Listening ({safety})"),
      "Follow spoken safety briefings and multi-step instructions.",
      SelfTracked, Listening, 10,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(safety * 20),
    GeneratedTask::new(
      format!("Accent Exposure: {podcasts} {} Podcasts", country.country),
      "Listen to local podcasts and note slang and phrases you hear repeatedly.",
      SelfTracked, Listening, 10,
    )
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(podcasts * 30),
    GeneratedTask::new(
      format!("Speaking Club Attendance ({club})"),
      "Practise small talk and workplace conversation with the community.",
      SystemLinked, Event, 10,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.75))
    .with_minutes(club * 60),
    GeneratedTask::new(
      "Mentor Mock Job Interview",
      format!("A short interview for a {} role, with feedback on clarity and confidence.", country.common_jobs.first().copied().unwrap_or("casual")),
      MentorAssessed, Speaking, 10,
    )
    .pro()
    .linked_to(MockInterview)
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(45),
    GeneratedTask::new(
      "Pre-Departure Admin (Tax File, Bank, Housing)",
      format!("Prepare the forms and phrases you need in your first week in {}.", country.country),
      SelfTracked, Admin, 5,
    )
    .with_deadline(ctx.final_deadline())
    .with_minutes(120),
  ]
}

/// Default builder for any objective the router does not recognise.
pub fn conversation_fluency_tasks(ctx: &PlanContext) -> Vec<GeneratedTask> {
  let label = ctx.label_or("everyday conversation");
  let shadowing = ctx.reps(40);
  let chunks = ctx.reps(100);
  let club = ctx.reps(12);
  let exchanges = ctx.reps(10);
  let podcasts = ctx.reps(15);
  let entries = ctx.reps(30);
  let checks = ctx.reps(2);

  vec![
    GeneratedTask::new(
      "Set Your Fluency Baseline",
      format!("Record a three-minute self-introduction and note what stops you in {label}."),
      SelfTracked, Speaking, 5,
    )
    .with_deadline(7)
    .with_minutes(20),
    GeneratedTask::new(
      format!("Daily Shadowing Practice ({shadowing} Sessions)"),
      "Repeat short native-speaker clips immediately after hearing them, copying rhythm and intonation.",
      SelfTracked, Listening, 15,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(shadowing * 15),
    GeneratedTask::new(
      format!("Conversation Phrases: {chunks} Chunks"),
      "Learn ready-made phrases for opinions, agreeing, disagreeing and keeping a conversation going.",
      SelfTracked, Speaking, 10,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes((chunks / 10).max(1) * 15)
    .with_quiz(quizzes::conversation_phrases()),
    GeneratedTask::new(
      format!("Speaking Club Attendance ({club} Sessions)"),
      "Join the weekly speaking club and speak in every breakout room.",
      SystemLinked, Event, 20,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.9))
    .with_minutes(club * 60),
    GeneratedTask::new(
      format!("Language Exchange Conversations ({exchanges})"),
      "Thirty-minute conversations with a partner, switching languages halfway.",
      SelfTracked, Speaking, 15,
    )
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(exchanges * 30),
    GeneratedTask::new(
      format!("Listening: {podcasts} Podcast Episodes"),
      "Conversational podcasts; write down three useful expressions from each.",
      SelfTracked, Listening, 10,
    )
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(podcasts * 30),
    GeneratedTask::new(
      format!("Journal in English ({entries} Entries)"),
      "Write a short daily entry using at least one new phrase.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.85))
    .with_minutes(entries * 10),
    GeneratedTask::new(
      format!("Mentor Fluency Check ({checks})"),
      "A mentor rates fluency, range and pronunciation and sets your next focus.",
      MentorAssessed, Speaking, 10,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.95))
    .with_minutes(checks * 30),
    GeneratedTask::new(
      "Re-Record Your Self-Introduction",
      "Record the same introduction again and compare it with your baseline.",
      SelfTracked, Speaking, 5,
    )
    .with_deadline(ctx.final_deadline())
    .with_minutes(20),
  ]
}

//! Career builders: interviews, remote work, freelancing, leadership, technical English, pitching.

use crate::catalog::{FreelanceNicheDef, IndustryDef};
use crate::domain::EventType::{MockInterview, SpeakingClub, Webinar};
use crate::domain::TaskCategory::{Admin, Event, Listening, Reading, Speaking, Test, Writing};
use crate::domain::TaskType::{MentorAssessed, SelfTracked, SystemLinked};
use crate::domain::GeneratedTask;
use crate::objective::InterviewKind;

use super::{quizzes, PlanContext};

/// First `n` industry terms as a readable list.
fn term_list(industry: &IndustryDef, n: usize) -> String {
  industry.core_terms.iter().take(n).copied().collect::<Vec<_>>().join(", ")
}

pub fn interview_tasks(ctx: &PlanContext, kind: InterviewKind) -> Vec<GeneratedTask> {
  let questions = ctx.reps(20);
  let stories = ctx.reps(6);
  let recordings = ctx.reps(15);
  let drills = ctx.reps(10);
  let club = ctx.reps(6);
  let mocks = ctx.reps(3);

  let research = match kind {
    InterviewKind::Job => "Company and Role",
    InterviewKind::Scholarship => "Scholarship Values and Panel Format",
    InterviewKind::Visa => "Visa Category and Consular Requirements",
  };
  let evidence = match kind {
    InterviewKind::Visa => GeneratedTask::new(
      "Ties-to-Home Evidence Summary",
      "Prepare short, truthful answers about your plans, finances and reasons to return home.",
      SelfTracked, Writing, 10,
    ),
    _ => GeneratedTask::new(
      format!("STAR Method Story Bank ({stories} Stories)"),
      "Write Situation-Task-Action-Result stories for leadership, conflict, failure and achievement questions.",
      SelfTracked, Writing, 10,
    ),
  }
  .with_deadline(ctx.deadline_at(0.4))
  .with_minutes(stories * 30);
  let closing = match kind {
    InterviewKind::Visa => GeneratedTask::new(
      "Document Folder Final Check",
      "Organise every supporting document in the order the officer is likely to ask for it.",
      SelfTracked, Admin, 5,
    ),
    _ => GeneratedTask::new(
      "Follow-Up / Thank-You Email",
      "Draft a concise thank-you email you can personalise within 24 hours of the interview.",
      SelfTracked, Writing, 5,
    ),
  }
  .with_deadline(ctx.deadline_at(0.9))
  .with_minutes(30);

  vec![
    GeneratedTask::new(
      format!("Research the {research}"),
      "Collect the facts you need to give specific, informed answers.",
      SelfTracked, Reading, 5,
    )
    .with_deadline(7)
    .with_minutes(90),
    GeneratedTask::new(
      format!("Write Answers to {questions} Common Questions"),
      "Draft bullet-point answers, not scripts, so you sound natural when speaking.",
      SelfTracked, Writing, 15,
    )
    .with_deadline(ctx.deadline_at(0.3))
    .with_minutes(questions * 15),
    evidence,
    GeneratedTask::new(
      format!("Record and Review {recordings} Practice Answers"),
      "Record yourself, then check for filler words, pace and whether you answered the question asked.",
      SelfTracked, Speaking, 15,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(recordings * 10),
    GeneratedTask::new(
      format!("Pronunciation & Fluency Drills ({drills} Sessions)"),
      "Shadow model answers and work on word stress and linking.",
      SelfTracked, Speaking, 10,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(drills * 20),
    GeneratedTask::new(
      format!("Speaking Club Hot-Seat Sessions ({club})"),
      "Take the hot seat and answer unseen questions from other members.",
      SystemLinked, Event, 10,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(club * 60),
    GeneratedTask::new(
      format!("Mock Interview with Mentor ({mocks})"),
      "Realistic interviews with scored feedback on content, language and presence.",
      MentorAssessed, Speaking, 20,
    )
    .pro()
    .linked_to(MockInterview)
    .with_deadline(ctx.deadline_at(0.85))
    .with_minutes(mocks * 45),
    GeneratedTask::new(
      "Body Language & Virtual Interview Setup",
      "Set up camera, light and sound, and practise posture and eye contact.",
      SelfTracked, Speaking, 5,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(45)
    .with_quiz(quizzes::interview_presence()),
    closing,
    GeneratedTask::new(
      "Final Rehearsal",
      "Run through your strongest answers the day before and prepare questions to ask.",
      SelfTracked, Speaking, 5,
    )
    .with_deadline(ctx.final_deadline())
    .with_minutes(60),
  ]
}

pub fn remote_work_tasks(ctx: &PlanContext, industry: &IndustryDef) -> Vec<GeneratedTask> {
  let emails = ctx.reps(15);
  let calls = ctx.reps(8);
  let recordings = ctx.reps(12);
  let mocks = ctx.reps(2);
  let club = ctx.reps(6);
  let applications = ctx.reps(10);

  vec![
    GeneratedTask::new(
      "Audit Your Remote-Work English",
      "Rate yourself on email, chat, video calls and documentation, and pick your two weakest areas.",
      SelfTracked, Test, 5,
    )
    .with_deadline(7)
    .with_minutes(45),
    GeneratedTask::new(
      format!("Professional Email Writing ({emails} Emails)"),
      "Requests, updates, apologies and follow-ups with clear subject lines and calls to action.",
      SelfTracked, Writing, 15,
    )
    .with_deadline(ctx.deadline_at(0.4))
    .with_minutes(emails * 20),
    GeneratedTask::new(
      format!("{} Vocabulary: {}", industry.name, term_list(industry, 5)),
      "Learn the terms your future team will use daily and write one example sentence per term.",
      SelfTracked, Reading, 10,
    )
    .with_deadline(ctx.deadline_at(0.3))
    .with_minutes(120),
    GeneratedTask::new(
      format!("Async Writing Practice: {}", industry.key_document),
      "Write it so a teammate in another time zone can act on it without a follow-up call.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(60),
    GeneratedTask::new(
      format!("Video Call Simulations: {} ({calls})", industry.key_meeting),
      "Give concise updates, ask clarifying questions and disagree politely on camera.",
      SelfTracked, Speaking, 15,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(calls * 30),
    GeneratedTask::new(
      format!("Listening: {recordings} Remote Meeting Recordings"),
      "Follow real meeting recordings with different accents and summarise the decisions.",
      SelfTracked, Listening, 10,
    )
    .with_deadline(ctx.deadline_at(0.55))
    .with_minutes(recordings * 30),
    GeneratedTask::new(
      "English CV & LinkedIn Profile Review",
      "A mentor reviews your CV and profile for remote-friendly wording and impact.",
      MentorAssessed, Writing, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.45))
    .with_minutes(90),
    GeneratedTask::new(
      format!("Remote Job Interview Mock ({mocks})"),
      "Video interviews covering time management, self-direction and async collaboration.",
      MentorAssessed, Speaking, 10,
    )
    .pro()
    .linked_to(MockInterview)
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(mocks * 45),
    GeneratedTask::new(
      format!("Speaking Club Attendance ({club})"),
      "Keep speaking regularly with the community.",
      SystemLinked, Event, 5,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(club * 60),
    GeneratedTask::new(
      format!("Apply to {applications} Remote Roles"),
      "Send tailored applications with a short cover message for each role.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(ctx.final_deadline())
    .with_minutes(applications * 30)
    .with_criteria("Application tracker updated"),
  ]
}

pub fn freelancing_tasks(ctx: &PlanContext, niche: &FreelanceNicheDef) -> Vec<GeneratedTask> {
  let samples = ctx.reps(3);
  let proposals = ctx.reps(10);
  let calls = ctx.reps(4);
  let club = ctx.reps(6);
  let sent = ctx.reps(20);
  let platforms = niche.platforms.join(", ");

  vec![
    GeneratedTask::new(
      format!("Define Your {} Offer", niche.name),
      "Write a one-paragraph offer: who you help, what you deliver and how long it takes.",
      SelfTracked, Writing, 5,
    )
    .with_deadline(7)
    .with_minutes(45),
    GeneratedTask::new(
      format!("Write a Client-Winning Profile on {platforms}"),
      "Headline, overview and skills written for the client, not about yourself.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.2))
    .with_minutes(120),
    GeneratedTask::new(
      format!("Build {samples} Portfolio Samples: {}", niche.deliverable),
      "Create samples that show the exact work clients hire for, each with a short English case note.",
      SelfTracked, Writing, 15,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(samples * 240),
    GeneratedTask::new(
      format!("Proposal Writing Practice ({proposals})"),
      "Answer real job posts with short proposals that restate the problem and propose a first step.",
      SelfTracked, Writing, 15,
    )
    .with_deadline(ctx.deadline_at(0.45))
    .with_minutes(proposals * 25),
    GeneratedTask::new(
      "Mentor Review of Profile & Proposals",
      "A mentor reviews tone, clarity and persuasiveness of your profile and best proposals.",
      MentorAssessed, Writing, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(60),
    GeneratedTask::new(
      format!("Client Call Role-Play ({calls})"),
      "Discovery calls: ask about goals, budget and timeline, then summarise back.",
      SelfTracked, Speaking, 10,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(calls * 30),
    GeneratedTask::new(
      "Negotiation & Scope Language",
      "Learn phrases for rates, revisions, scope changes and payment reminders.",
      SelfTracked, Speaking, 10,
    )
    .with_deadline(ctx.deadline_at(0.55))
    .with_minutes(60)
    .with_quiz(quizzes::negotiation_language()),
    GeneratedTask::new(
      format!("Speaking Club Attendance ({club})"),
      "Practise explaining your services out loud to new people.",
      SystemLinked, Event, 5,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(club * 60),
    GeneratedTask::new(
      format!("Send {sent} Proposals"),
      "Apply to real projects and track replies.",
      SelfTracked, Admin, 10,
    )
    .with_deadline(ctx.deadline_at(0.9))
    .with_minutes(sent * 20)
    .with_criteria("Proposal tracker shows every submission"),
    GeneratedTask::new(
      "Deliver First Project & Request a Review",
      "Deliver on time, send a clear hand-off message and ask for a public review.",
      SelfTracked, Admin, 5,
    )
    .with_deadline(ctx.final_deadline())
    .with_minutes(60),
  ]
}

pub fn leadership_tasks(ctx: &PlanContext) -> Vec<GeneratedTask> {
  let label = ctx.label_or("Leadership English");
  let meetings = ctx.reps(6);
  let notes = ctx.reps(6);
  let presentations = ctx.reps(2);
  let reports = ctx.reps(8);
  let articles = ctx.reps(8);
  let webinars = ctx.reps(2);

  vec![
    GeneratedTask::new(
      "Leadership Communication Self-Assessment",
      format!("Score yourself on meetings, feedback, presenting and writing for {label}."),
      SelfTracked, Test, 5,
    )
    .with_deadline(7)
    .with_minutes(30),
    GeneratedTask::new(
      "Meeting Facilitation Phrases",
      "Opening, time-keeping, inviting quieter voices and closing with actions.",
      SelfTracked, Speaking, 10,
    )
    .with_deadline(ctx.deadline_at(0.2))
    .with_minutes(60)
    .with_quiz(quizzes::meeting_facilitation()),
    GeneratedTask::new(
      format!("Lead {meetings} Practice Meetings"),
      "Run short agenda-driven meetings with peers and collect feedback.",
      SelfTracked, Speaking, 15,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(meetings * 45),
    GeneratedTask::new(
      format!("Giving Feedback: Write {notes} Feedback Notes"),
      "Use situation-behaviour-impact to give specific, kind and clear feedback.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(notes * 20),
    GeneratedTask::new(
      format!("Persuasive Presentation ({presentations})"),
      "Present a proposal to a mentor acting as a sceptical executive.",
      MentorAssessed, Speaking, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(presentations * 60),
    GeneratedTask::new(
      format!("Executive Email & Report Writing ({reports})"),
      "Bottom-line-up-front emails and one-page reports.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.55))
    .with_minutes(reports * 30),
    GeneratedTask::new(
      "Difficult Conversations Role-Play",
      "Practise delivering bad news, handling pushback and negotiating priorities with a mentor.",
      MentorAssessed, Speaking, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.75))
    .with_minutes(60),
    GeneratedTask::new(
      "Host a Speaking Club Session",
      "Facilitate one community speaking club from opening to wrap-up.",
      SystemLinked, Event, 10,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(90),
    GeneratedTask::new(
      format!("Read {articles} Leadership Articles"),
      "Summarise each article's main idea in three sentences.",
      SelfTracked, Reading, 5,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(articles * 20),
    GeneratedTask::new(
      format!("Leadership Webinar Attendance ({webinars})"),
      "Join community leadership webinars and ask at least one question live.",
      SystemLinked, Event, 5,
    )
    .linked_to(Webinar)
    .with_deadline(ctx.deadline_at(0.9))
    .with_minutes(webinars * 60),
  ]
}

pub fn technical_english_tasks(ctx: &PlanContext, industry: &IndustryDef) -> Vec<GeneratedTask> {
  let terms = ctx.reps(150);
  let documents = ctx.reps(12);
  let written = ctx.reps(3);
  let explanations = ctx.reps(8);
  let meetings = ctx.reps(6);
  let talks = ctx.reps(10);
  let webinars = ctx.reps(2);

  vec![
    GeneratedTask::new(
      format!("{} English Needs Analysis", industry.name),
      "List the documents, meetings and conversations where you need English at work.",
      SelfTracked, Test, 5,
    )
    .with_deadline(7)
    .with_minutes(45),
    GeneratedTask::new(
      format!("Core Terminology: {terms} Terms"),
      format!("Build a flashcard deck starting with: {}.", term_list(industry, industry.core_terms.len())),
      SelfTracked, Reading, 15,
    )
    .with_deadline(ctx.deadline_at(0.4))
    .with_minutes((terms / 10).max(1) * 15),
    GeneratedTask::new(
      format!("Read {documents} Industry Documents"),
      "Manuals, standards, reports or articles from your field, noting recurring phrases.",
      SelfTracked, Reading, 15,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(documents * 40),
    GeneratedTask::new(
      format!("Write {written} Practice Documents: {}", industry.key_document),
      "Follow the standard structure and keep sentences short and precise.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.45))
    .with_minutes(written * 60),
    GeneratedTask::new(
      format!("Technical Explanation Drills ({explanations})"),
      "Explain a process from your work to a non-expert in under two minutes.",
      SelfTracked, Speaking, 10,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes(explanations * 20),
    GeneratedTask::new(
      format!("{} Simulation ({meetings})", industry.key_meeting),
      "Role-play the meeting with peers using the terminology deck.",
      SelfTracked, Speaking, 10,
    )
    .with_deadline(ctx.deadline_at(0.65))
    .with_minutes(meetings * 30),
    GeneratedTask::new(
      format!("Listening: {talks} Industry Talks"),
      "Conference talks or webinars in your field; note new terms and how speakers define them.",
      SelfTracked, Listening, 10,
    )
    .with_deadline(ctx.deadline_at(0.55))
    .with_minutes(talks * 30),
    GeneratedTask::new(
      "Mentor Review of Technical Writing",
      "A mentor with industry background reviews your practice documents.",
      MentorAssessed, Writing, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(60),
    GeneratedTask::new(
      format!("Technical Webinar ({webinars})"),
      "Attend community technical English webinars.",
      SystemLinked, Event, 5,
    )
    .linked_to(Webinar)
    .with_deadline(ctx.deadline_at(0.8))
    .with_minutes(webinars * 60),
    GeneratedTask::new(
      "Capstone: Present a Work Process in English",
      "A ten-minute walkthrough of a real process from your job, assessed by a mentor.",
      MentorAssessed, Speaking, 5,
    )
    .pro()
    .with_deadline(ctx.final_deadline())
    .with_minutes(60),
  ]
}

pub fn startup_pitch_tasks(ctx: &PlanContext) -> Vec<GeneratedTask> {
  let decks = ctx.reps(6);
  let takes = ctx.reps(6);
  let questions = ctx.reps(20);
  let reviews = ctx.reps(2);
  let emails = ctx.reps(10);

  vec![
    GeneratedTask::new(
      "Write Your One-Line Value Proposition",
      "Who it is for, what problem it solves and why now, in one sentence.",
      SelfTracked, Writing, 5,
    )
    .with_deadline(7)
    .with_minutes(30),
    GeneratedTask::new(
      format!("Study {decks} Winning Pitch Decks"),
      "Note how each deck moves from problem to traction to ask.",
      SelfTracked, Reading, 10,
    )
    .with_deadline(ctx.deadline_at(0.2))
    .with_minutes(decks * 30),
    GeneratedTask::new(
      "Draft a 10-Slide Pitch Deck",
      "Problem, solution, market, product, traction, business model, competition, team, financials, ask.",
      SelfTracked, Writing, 15,
    )
    .with_deadline(ctx.deadline_at(0.4))
    .with_minutes(300)
    .with_materials(&["pitch_deck_template.pptx"]),
    GeneratedTask::new(
      format!("Record a 3-Minute Pitch ({takes} Takes)"),
      "Record, watch back and cut every sentence that does not earn its place.",
      SelfTracked, Speaking, 15,
    )
    .with_deadline(ctx.deadline_at(0.5))
    .with_minutes(takes * 20),
    GeneratedTask::new(
      format!("Investor Q&A Drills ({questions} Questions)"),
      "Answer tough investor questions in under 30 seconds each.",
      SelfTracked, Speaking, 10,
    )
    .with_deadline(ctx.deadline_at(0.6))
    .with_minutes((questions / 2).max(1) * 5),
    GeneratedTask::new(
      "Pitch Vocabulary & Metrics Language",
      "Traction, runway, burn rate, CAC, LTV and how to say numbers clearly.",
      SelfTracked, Reading, 5,
    )
    .with_deadline(ctx.deadline_at(0.3))
    .with_minutes(45)
    .with_quiz(quizzes::pitch_vocabulary()),
    GeneratedTask::new(
      format!("Mentor Pitch Review ({reviews})"),
      "Deliver the full pitch to a mentor and get feedback on story, clarity and delivery.",
      MentorAssessed, Speaking, 15,
    )
    .pro()
    .with_deadline(ctx.deadline_at(0.7))
    .with_minutes(reviews * 45),
    GeneratedTask::new(
      "Pitch at Speaking Club",
      "Pitch live to community members and take their questions.",
      SystemLinked, Event, 10,
    )
    .linked_to(SpeakingClub)
    .with_deadline(ctx.deadline_at(0.75))
    .with_minutes(60),
    GeneratedTask::new(
      format!("Cold Email to {emails} Investors/Partners"),
      "Short, specific emails with one clear ask.",
      SelfTracked, Writing, 10,
    )
    .with_deadline(ctx.deadline_at(0.85))
    .with_minutes(emails * 20),
    GeneratedTask::new(
      "Demo Day Rehearsal",
      "Final timed run-through at the community demo day webinar.",
      SystemLinked, Event, 5,
    )
    .linked_to(Webinar)
    .with_deadline(ctx.final_deadline())
    .with_minutes(60),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{freelance_niche, industry};
  use crate::domain::TaskBreakdownConfig;

  fn ctx() -> PlanContext {
    PlanContext::from_config(&TaskBreakdownConfig { duration_months: 6, ..Default::default() })
  }

  #[test]
  fn visa_interview_swaps_story_bank_and_closing() {
    let visa = interview_tasks(&ctx(), InterviewKind::Visa);
    assert!(visa.iter().any(|t| t.title == "Ties-to-Home Evidence Summary"));
    assert!(visa.iter().any(|t| t.title == "Document Folder Final Check"));
    let job = interview_tasks(&ctx(), InterviewKind::Job);
    assert!(job.iter().any(|t| t.title.starts_with("STAR Method Story Bank")));
    assert_eq!(visa.len(), job.len());
  }

  #[test]
  fn industry_vocabulary_is_templated() {
    let tasks = remote_work_tasks(&ctx(), industry("it"));
    assert!(tasks.iter().any(|t| t.title == "Information Technology Vocabulary: deployment, pull request, sprint, backlog, incident"));
    assert!(tasks.iter().any(|t| t.title == "Async Writing Practice: incident report"));
  }

  #[test]
  fn freelance_profile_names_platforms() {
    let tasks = freelancing_tasks(&ctx(), freelance_niche("design"));
    assert_eq!(tasks[1].title, "Write a Client-Winning Profile on Dribbble, Behance, Upwork");
  }

  #[test]
  fn mock_interviews_stay_mentor_gated() {
    let tasks = interview_tasks(&ctx(), InterviewKind::Job);
    let mock = tasks.iter().find(|t| t.title.starts_with("Mock Interview")).expect("mock");
    assert!(mock.requires_pro);
    assert_eq!(mock.linked_event_type, Some(MockInterview));
  }
}

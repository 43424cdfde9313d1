//! Verification quizzes attached to knowledge tasks.

use crate::domain::QuizQuestion;

pub fn ielts_format() -> Vec<QuizQuestion> {
  vec![
    QuizQuestion::new(
      "How long is the IELTS Academic Writing test?",
      &["40 minutes", "60 minutes", "90 minutes", "2 hours"],
      1,
      "Writing lasts 60 minutes: about 20 minutes for Task 1 and 40 for Task 2.",
    ),
    QuizQuestion::new(
      "Which Writing task carries more weight in the band score?",
      &["Task 1", "Task 2", "Both are equal"],
      1,
      "Task 2 counts twice as much as Task 1.",
    ),
    QuizQuestion::new(
      "Which of these is one of the four Writing band descriptors?",
      &["Spelling Accuracy", "Lexical Resource", "Handwriting", "Word Count"],
      1,
      "The descriptors are Task Response/Achievement, Coherence and Cohesion, Lexical Resource, and Grammatical Range and Accuracy.",
    ),
  ]
}

pub fn toefl_format() -> Vec<QuizQuestion> {
  vec![
    QuizQuestion::new(
      "What is the maximum total TOEFL iBT score?",
      &["100", "120", "160", "990"],
      1,
      "Each of the four sections is scored 0-30, for a total of 120.",
    ),
    QuizQuestion::new(
      "What does an integrated speaking task ask you to do?",
      &[
        "Speak about a personal preference only",
        "Combine information from reading and/or listening in your answer",
        "Read a passage aloud",
      ],
      1,
      "Integrated tasks require you to summarise and connect source material.",
    ),
  ]
}

pub fn grammar_review() -> Vec<QuizQuestion> {
  vec![
    QuizQuestion::new(
      "Choose the correct sentence.",
      &[
        "She have finished her homework.",
        "She has finished her homework.",
        "She finish her homework yesterday already.",
      ],
      1,
      "Third person singular takes 'has' in the present perfect.",
    ),
    QuizQuestion::new(
      "If I ___ more time, I would join the club.",
      &["have", "had", "will have", "am having"],
      1,
      "The second conditional uses the past simple in the if-clause.",
    ),
    QuizQuestion::new(
      "The letter ___ by the principal yesterday.",
      &["signed", "was signed", "has signed", "is signing"],
      1,
      "A past passive uses was/were + past participle.",
    ),
  ]
}

pub fn academic_style() -> Vec<QuizQuestion> {
  vec![
    QuizQuestion::new(
      "Which sentence uses appropriate academic hedging?",
      &[
        "This proves that social media ruins sleep.",
        "These findings suggest that social media use may affect sleep quality.",
        "Everyone knows social media is bad for sleep.",
      ],
      1,
      "Hedging ('suggest', 'may') signals the strength of a claim accurately.",
    ),
    QuizQuestion::new(
      "Which is the most formal alternative to 'a lot of'?",
      &["loads of", "a considerable number of", "tons of"],
      1,
      "Academic register avoids informal quantifiers.",
    ),
  ]
}

pub fn interview_presence() -> Vec<QuizQuestion> {
  vec![
    QuizQuestion::new(
      "In a video interview, where should you look while answering?",
      &["At your own image", "At the camera", "At your notes"],
      1,
      "Looking at the camera reads as eye contact to the interviewer.",
    ),
    QuizQuestion::new(
      "What does the R in the STAR method stand for?",
      &["Reason", "Result", "Role", "Request"],
      1,
      "Situation, Task, Action, Result.",
    ),
  ]
}

pub fn speech_structure() -> Vec<QuizQuestion> {
  vec![
    QuizQuestion::new(
      "What is the main job of a speech opening?",
      &["List every point in detail", "Hook the audience and state the purpose", "Thank the organisers at length"],
      1,
      "A strong opening earns attention and tells listeners why to keep listening.",
    ),
    QuizQuestion::new(
      "Which technique best signals a move to your next point?",
      &["A long pause with no words", "A signpost phrase such as 'Moving on to...'", "Speaking faster"],
      1,
      "Signposting keeps the audience oriented.",
    ),
  ]
}

pub fn negotiation_language() -> Vec<QuizQuestion> {
  vec![
    QuizQuestion::new(
      "A client asks for extra work outside the agreed scope. Which reply is most professional?",
      &[
        "No, that's not my job.",
        "Happy to help. That falls outside our current scope, so I'll send a quote for it.",
        "Sure, I'll do it for free.",
      ],
      1,
      "Acknowledge, name the scope boundary, then offer a paid path.",
    ),
    QuizQuestion::new(
      "What does 'deliverable' mean in a contract?",
      &["A shipping fee", "A concrete output the freelancer hands over", "A payment deadline"],
      1,
      "Deliverables are the agreed outputs of the project.",
    ),
  ]
}

pub fn meeting_facilitation() -> Vec<QuizQuestion> {
  vec![
    QuizQuestion::new(
      "Which phrase politely brings a discussion back on track?",
      &["Stop talking about that.", "Let's park that for now and come back to the agenda.", "That's irrelevant."],
      1,
      "'Park' defers a topic without dismissing the speaker.",
    ),
    QuizQuestion::new(
      "What should close every meeting you lead?",
      &["A joke", "A summary of decisions and action items with owners", "The next meeting's date only"],
      1,
      "Clear owners and actions make a meeting productive.",
    ),
  ]
}

pub fn pitch_vocabulary() -> Vec<QuizQuestion> {
  vec![
    QuizQuestion::new(
      "What does 'traction' mean in a pitch?",
      &["Office location", "Evidence that customers want the product", "The founding date"],
      1,
      "Traction is measurable proof of demand: users, revenue, growth.",
    ),
    QuizQuestion::new(
      "TAM stands for...",
      &["Total Addressable Market", "Target Audience Metric", "Team Allocation Model"],
      0,
      "TAM is the total revenue opportunity for the product.",
    ),
  ]
}

pub fn conversation_phrases() -> Vec<QuizQuestion> {
  vec![
    QuizQuestion::new(
      "Which phrase buys you thinking time naturally?",
      &["I don't know.", "That's a good question, let me think...", "Next question."],
      1,
      "Fillers like this keep the conversation flowing while you plan.",
    ),
    QuizQuestion::new(
      "Which response best keeps a conversation going?",
      &["Yes.", "Yes, I went last year. Have you been there too?", "Okay."],
      1,
      "Answer, add detail, and return a question.",
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_bank_is_well_formed() {
    let banks = [
      ielts_format(),
      toefl_format(),
      grammar_review(),
      academic_style(),
      interview_presence(),
      speech_structure(),
      negotiation_language(),
      meeting_facilitation(),
      pitch_vocabulary(),
      conversation_phrases(),
    ];
    for bank in banks {
      assert!(!bank.is_empty());
      for q in bank {
        assert!(q.is_well_formed(), "{}", q.question);
        assert!(!q.explanation.is_empty());
      }
    }
  }
}

//! Scoring state for one run through a generated quiz.
//!
//! A session owns its questions. Each question can be answered once, then
//! [`QuizSession::advance`] moves on; advancing past the last question
//! finishes the session and unlocks the summary verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::study_engine::models::QuizQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Outstanding,
    WellDone,
    GoodEffort,
}

impl Verdict {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Verdict::Outstanding,
            70.. => Verdict::WellDone,
            _    => Verdict::GoodEffort,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Outstanding => write!(f, "Outstanding!"),
            Verdict::WellDone    => write!(f, "Well done!"),
            Verdict::GoodEffort  => write!(f, "Good effort!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_option_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent.
    pub percentage: u32,
    pub verdict: Verdict,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    position: usize,
    selected: Option<usize>,
    score: usize,
    finished: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let finished = questions.is_empty();
        QuizSession { questions, position: 0, selected: None, score: 0, finished }
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        if self.finished {
            return None;
        }
        self.questions.get(self.position)
    }

    /// Zero-based position of the current question.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Share of questions already behind the player, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        // An empty session starts finished.
        if self.finished {
            return 1.0;
        }
        self.position as f32 / self.questions.len() as f32
    }

    /// Lock in an answer for the current question.
    pub fn answer(&mut self, option: usize) -> Result<AnswerOutcome, SessionError> {
        let question = self.current().ok_or(SessionError::Finished)?;
        if self.selected.is_some() {
            return Err(SessionError::AlreadyAnswered);
        }
        if option >= question.options.len() {
            return Err(SessionError::OptionOutOfRange {
                option,
                available: question.options.len(),
            });
        }

        let outcome = AnswerOutcome {
            is_correct: question.is_correct(option),
            correct_option_index: question.correct_option_index,
        };
        self.selected = Some(option);
        if outcome.is_correct {
            self.score += 1;
        }
        Ok(outcome)
    }

    /// Move to the next question; returns `false` once the quiz is finished.
    ///
    /// Skipping an unanswered question is allowed and scores nothing.
    pub fn advance(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.selected = None;
        if self.position + 1 < self.questions.len() {
            self.position += 1;
            true
        } else {
            self.finished = true;
            false
        }
    }

    /// Final tally. Only available once the session is finished.
    pub fn summary(&self) -> Option<QuizSummary> {
        if !self.finished {
            return None;
        }
        let total = self.questions.len();
        let percentage = if total == 0 {
            0
        } else {
            (self.score as f64 * 100.0 / total as f64).round() as u32
        };
        Some(QuizSummary {
            score: self.score,
            total,
            percentage,
            verdict: Verdict::from_percentage(percentage),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study_engine::models::{Card, ProverbCard, TextPair};

    fn question(correct: usize) -> QuizQuestion {
        let mut options: Vec<String> = vec!["w1".into(), "w2".into(), "w3".into()];
        options.insert(correct, "right".into());
        QuizQuestion {
            card: Card::Proverb(ProverbCard { text: TextPair::new("src", "right") }),
            options,
            correct_option_index: correct,
        }
    }

    #[test]
    fn scores_correct_answers_and_finishes() {
        let mut s = QuizSession::new(vec![question(0), question(2)]);
        assert_eq!(s.answer(0), Ok(AnswerOutcome { is_correct: true, correct_option_index: 0 }));
        assert!(s.advance());
        let miss = s.answer(1).unwrap();
        assert!(!miss.is_correct);
        assert_eq!(miss.correct_option_index, 2);
        assert!(!s.advance());
        assert!(s.is_finished());

        let summary = s.summary().unwrap();
        assert_eq!((summary.score, summary.total, summary.percentage), (1, 2, 50));
        assert_eq!(summary.verdict, Verdict::GoodEffort);
    }

    #[test]
    fn rejects_misuse() {
        let mut s = QuizSession::new(vec![question(1)]);
        assert_eq!(
            s.answer(4),
            Err(SessionError::OptionOutOfRange { option: 4, available: 4 })
        );
        s.answer(1).unwrap();
        assert_eq!(s.answer(1), Err(SessionError::AlreadyAnswered));
        assert_eq!(s.score(), 1);
        s.advance();
        assert_eq!(s.answer(0), Err(SessionError::Finished));
        assert!(s.summary().is_some());
    }

    #[test]
    fn summary_waits_for_the_end() {
        let s = QuizSession::new(vec![question(0)]);
        assert!(s.summary().is_none());
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn empty_session_is_already_finished() {
        let s = QuizSession::new(Vec::new());
        assert!(s.is_finished());
        assert!(s.current().is_none());
        assert_eq!(s.summary().unwrap().total, 0);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_percentage(100), Verdict::Outstanding);
        assert_eq!(Verdict::from_percentage(90), Verdict::Outstanding);
        assert_eq!(Verdict::from_percentage(89), Verdict::WellDone);
        assert_eq!(Verdict::from_percentage(70), Verdict::WellDone);
        assert_eq!(Verdict::from_percentage(69), Verdict::GoodEffort);
        assert_eq!(Verdict::WellDone.to_string(), "Well done!");
    }
}

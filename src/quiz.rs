//! Trivia quiz progression
//!
//! `NotStarted -> Asking(0) -> .. -> Asking(n-1)`, and the last answer
//! completes the run: the summary is handed back to the caller and the quiz
//! drops back to `NotStarted`.

use crate::data::QuizQuestion;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    Asking(usize),
}

/// Final result of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
}

impl QuizSummary {
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score == self.total
    }
}

/// What happened after an answer was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// More questions remain
    Next { correct: bool, correct_answer: &'static str },
    /// That was the last question
    Completed { correct: bool, correct_answer: &'static str, summary: QuizSummary },
    /// No question was being asked
    Ignored,
}

pub struct Quiz {
    questions: &'static [QuizQuestion],
    phase: QuizPhase,
    score: usize,
    last_summary: Option<QuizSummary>,
}

impl Quiz {
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            phase: QuizPhase::NotStarted,
            score: 0,
            last_summary: None,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn last_summary(&self) -> Option<QuizSummary> {
        self.last_summary
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        match self.phase {
            QuizPhase::Asking(i) => self.questions.get(i),
            QuizPhase::NotStarted => None,
        }
    }

    /// Questions answered so far in the current run
    pub fn answered(&self) -> usize {
        match self.phase {
            QuizPhase::Asking(i) => i,
            QuizPhase::NotStarted => 0,
        }
    }

    /// 0..=100
    pub fn progress_percent(&self) -> u8 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.answered() * 100 / self.questions.len()) as u8
    }

    /// Enter the first question. Restarting mid-run resets the score.
    pub fn start(&mut self) {
        if self.questions.is_empty() {
            return;
        }
        self.score = 0;
        self.phase = QuizPhase::Asking(0);
        debug!(total = self.questions.len(), "Quiz started");
    }

    pub fn answer(&mut self, choice: &str) -> AnswerOutcome {
        let QuizPhase::Asking(index) = self.phase else {
            return AnswerOutcome::Ignored;
        };
        let Some(question) = self.questions.get(index) else {
            self.phase = QuizPhase::NotStarted;
            return AnswerOutcome::Ignored;
        };

        let correct = choice == question.correct_answer;
        if correct {
            self.score += 1;
        }
        debug!(question = index, correct, score = self.score, "Quiz answer");

        let next = index + 1;
        if next < self.questions.len() {
            self.phase = QuizPhase::Asking(next);
            return AnswerOutcome::Next {
                correct,
                correct_answer: question.correct_answer,
            };
        }

        let summary = QuizSummary {
            score: self.score,
            total: self.questions.len(),
        };
        self.phase = QuizPhase::NotStarted;
        self.last_summary = Some(summary);
        AnswerOutcome::Completed {
            correct,
            correct_answer: question.correct_answer,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::QUIZ_QUESTIONS;

    #[test]
    fn test_answer_before_start_is_ignored() {
        let mut quiz = Quiz::new(QUIZ_QUESTIONS);
        assert_eq!(quiz.answer("Five"), AnswerOutcome::Ignored);
        assert_eq!(quiz.phase(), QuizPhase::NotStarted);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn test_one_correct_then_two_wrong() {
        let mut quiz = Quiz::new(QUIZ_QUESTIONS);
        quiz.start();
        assert_eq!(quiz.phase(), QuizPhase::Asking(0));

        let first = QUIZ_QUESTIONS[0].correct_answer;
        assert!(matches!(quiz.answer(first), AnswerOutcome::Next { correct: true, .. }));
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.phase(), QuizPhase::Asking(1));

        assert!(matches!(quiz.answer("A pack"), AnswerOutcome::Next { correct: false, .. }));
        let outcome = quiz.answer("Six");
        let expected = QuizSummary { score: 1, total: 3 };
        assert_eq!(
            outcome,
            AnswerOutcome::Completed {
                correct: false,
                correct_answer: "Five",
                summary: expected,
            }
        );
        assert_eq!(quiz.phase(), QuizPhase::NotStarted);
        assert_eq!(quiz.last_summary(), Some(expected));
    }

    #[test]
    fn test_score_counts_exact_matches_only() {
        let mut quiz = Quiz::new(QUIZ_QUESTIONS);
        quiz.start();
        // Case and whitespace differences are wrong answers
        quiz.answer("12-16 Hours");
        quiz.answer(" A clowder");
        let outcome = quiz.answer("Five");
        match outcome {
            AnswerOutcome::Completed { summary, .. } => {
                assert_eq!(summary.score, 1);
                assert!(summary.score <= summary.total);
                assert!(!summary.is_perfect());
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_perfect_run() {
        let mut quiz = Quiz::new(QUIZ_QUESTIONS);
        quiz.start();
        let mut last = AnswerOutcome::Ignored;
        for q in QUIZ_QUESTIONS {
            assert!(quiz.score() <= quiz.answered());
            last = quiz.answer(q.correct_answer);
        }
        match last {
            AnswerOutcome::Completed { summary, .. } => assert!(summary.is_perfect()),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_progress_percent() {
        let mut quiz = Quiz::new(QUIZ_QUESTIONS);
        assert_eq!(quiz.progress_percent(), 0);
        quiz.start();
        assert_eq!(quiz.progress_percent(), 0);
        quiz.answer("x");
        assert_eq!(quiz.progress_percent(), 33);
        quiz.answer("x");
        assert_eq!(quiz.progress_percent(), 66);
        quiz.answer("x");
        assert_eq!(quiz.progress_percent(), 0);
    }

    #[test]
    fn test_restart_resets_score() {
        let mut quiz = Quiz::new(QUIZ_QUESTIONS);
        quiz.start();
        quiz.answer(QUIZ_QUESTIONS[0].correct_answer);
        quiz.start();
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.phase(), QuizPhase::Asking(0));
        assert_eq!(quiz.current_question(), Some(&QUIZ_QUESTIONS[0]));
    }

    #[test]
    fn test_empty_bank_never_starts() {
        let mut quiz = Quiz::new(&[]);
        quiz.start();
        assert_eq!(quiz.phase(), QuizPhase::NotStarted);
        assert_eq!(quiz.progress_percent(), 0);
    }
}

//! Ephemeral page state and the user actions that mutate it.
//! Nothing here touches egui or the runtime; the `App` renders it every frame.

use crate::constants::LIKE_CELEBRATION_EVERY;
use crate::data::{BreedEntry, BREEDS, FACTS, QUIZ_QUESTIONS};
use crate::facts::FactCycle;
use crate::quiz::{AnswerOutcome, Quiz};
use crate::theme::ThemeKey;
use crate::types::{scroll_top_visible, InfoTab, Toast, ToastKind};
use tracing::{debug, info};

pub struct PageState {
    pub likes: u32,
    pub facts: FactCycle,
    pub quiz: Quiz,
    pub theme: ThemeKey,
    pub tab: InfoTab,
    pub breed_index: usize,
    pub show_scroll_top: bool,
    pub toast: Option<Toast>,
    /// Set by actions that earn confetti; consumed by the renderer
    pub celebration_pending: bool,
}

impl PageState {
    pub fn new(theme: ThemeKey) -> Self {
        Self {
            likes: 0,
            facts: FactCycle::new(FACTS.len()),
            quiz: Quiz::new(QUIZ_QUESTIONS),
            theme,
            tab: InfoTab::Characteristics,
            breed_index: 0,
            show_scroll_top: false,
            toast: None,
            celebration_pending: false,
        }
    }

    fn notify(&mut self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) {
        self.toast = Some(Toast::new(kind, title, description));
    }

    // ------------------------------------------------------------------------
    // Likes
    // ------------------------------------------------------------------------

    pub fn like(&mut self) -> u32 {
        self.likes = self.likes.saturating_add(1);
        let likes = self.likes;
        self.notify(
            ToastKind::Success,
            "Thanks for the love!",
            format!("This page has been liked {} times.", likes),
        );
        if likes % LIKE_CELEBRATION_EVERY == 0 {
            self.celebration_pending = true;
        }
        debug!(likes, "Page liked");
        likes
    }

    // ------------------------------------------------------------------------
    // Facts
    // ------------------------------------------------------------------------

    pub fn current_fact(&self) -> &'static str {
        FACTS.get(self.facts.index()).copied().unwrap_or_default()
    }

    /// Apply `ticks` timer rotations
    pub fn rotate_facts(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.facts.advance();
        }
    }

    // ------------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------------

    pub fn select_theme(&mut self, key: ThemeKey) {
        if self.theme != key {
            info!(from = ?self.theme, to = ?key, "Theme changed");
            self.theme = key;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.select_theme(self.theme.toggled());
    }

    // ------------------------------------------------------------------------
    // Carousel
    // ------------------------------------------------------------------------

    pub fn current_breed(&self) -> &'static BreedEntry {
        &BREEDS[self.breed_index % BREEDS.len()]
    }

    pub fn next_breed(&mut self) {
        self.breed_index = (self.breed_index + 1) % BREEDS.len();
    }

    pub fn prev_breed(&mut self) {
        self.breed_index = (self.breed_index + BREEDS.len() - 1) % BREEDS.len();
    }

    pub fn select_breed(&mut self, index: usize) {
        if index < BREEDS.len() {
            self.breed_index = index;
        }
    }

    // ------------------------------------------------------------------------
    // Quiz
    // ------------------------------------------------------------------------

    pub fn start_quiz(&mut self) {
        self.quiz.start();
    }

    pub fn answer_quiz(&mut self, choice: &str) -> AnswerOutcome {
        let outcome = self.quiz.answer(choice);
        match outcome {
            AnswerOutcome::Next { correct, correct_answer } => {
                self.answer_feedback(correct, correct_answer);
            }
            AnswerOutcome::Completed { summary, .. } => {
                info!(score = summary.score, total = summary.total, "Quiz completed");
                self.notify(
                    ToastKind::Info,
                    "Quiz completed!",
                    format!("Your score: {}/{}", summary.score, summary.total),
                );
                if summary.is_perfect() {
                    self.celebration_pending = true;
                }
            }
            AnswerOutcome::Ignored => {}
        }
        outcome
    }

    fn answer_feedback(&mut self, correct: bool, correct_answer: &str) {
        if correct {
            self.notify(ToastKind::Success, "Correct!", "Great job! You got it right.");
        } else {
            self.notify(
                ToastKind::Error,
                "Wrong answer",
                format!("The correct answer was: {}", correct_answer),
            );
        }
    }

    // ------------------------------------------------------------------------
    // Scroll
    // ------------------------------------------------------------------------

    pub fn on_scroll(&mut self, offset_y: f32) {
        self.show_scroll_top = scroll_top_visible(offset_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{QuizPhase, QuizSummary};

    #[test]
    fn test_n_likes_gives_count_n() {
        let mut page = PageState::new(ThemeKey::Light);
        for n in 1..=25u32 {
            assert_eq!(page.like(), n);
            assert_eq!(page.likes, n);
        }
        let toast = page.toast.as_ref().unwrap();
        assert_eq!(toast.description, "This page has been liked 25 times.");
    }

    #[test]
    fn test_tenth_like_celebrates() {
        let mut page = PageState::new(ThemeKey::Light);
        for _ in 0..9 {
            page.like();
        }
        assert!(!page.celebration_pending);
        page.like();
        assert!(page.celebration_pending);
    }

    #[test]
    fn test_fact_rotation_cycles() {
        let mut page = PageState::new(ThemeKey::Light);
        let first = page.current_fact();
        page.rotate_facts(1);
        assert_ne!(page.current_fact(), first);
        page.rotate_facts(FACTS.len() - 1);
        assert_eq!(page.current_fact(), first);
        page.rotate_facts(FACTS.len() * 3);
        assert_eq!(page.facts.index(), 0);
    }

    #[test]
    fn test_theme_toggle_light_dark_light() {
        let mut page = PageState::new(ThemeKey::Light);
        page.toggle_theme();
        assert_eq!(page.theme, ThemeKey::Dark);
        assert_eq!(page.theme.palette(), ThemeKey::Dark.palette());
        page.toggle_theme();
        assert_eq!(page.theme, ThemeKey::Light);
    }

    #[test]
    fn test_select_each_theme() {
        let mut page = PageState::new(ThemeKey::Light);
        for key in ThemeKey::ALL {
            page.select_theme(key);
            assert_eq!(page.theme.palette(), key.palette());
        }
    }

    #[test]
    fn test_carousel_wraps() {
        let mut page = PageState::new(ThemeKey::Light);
        page.prev_breed();
        assert_eq!(page.breed_index, BREEDS.len() - 1);
        page.next_breed();
        assert_eq!(page.current_breed().name, "Siamese");
        page.select_breed(99);
        assert_eq!(page.breed_index, 0);
        page.select_breed(2);
        assert_eq!(page.current_breed().name, "Maine Coon");
    }

    #[test]
    fn test_quiz_scenario_one_of_three() {
        let mut page = PageState::new(ThemeKey::Light);
        page.start_quiz();
        page.answer_quiz(QUIZ_QUESTIONS[0].correct_answer);
        assert_eq!(page.quiz.score(), 1);
        assert_eq!(page.quiz.phase(), QuizPhase::Asking(1));
        assert_eq!(page.toast.as_ref().unwrap().kind, ToastKind::Success);

        page.answer_quiz("A herd");
        assert_eq!(page.toast.as_ref().unwrap().kind, ToastKind::Error);
        page.answer_quiz("Three");

        assert_eq!(page.quiz.phase(), QuizPhase::NotStarted);
        assert_eq!(page.quiz.last_summary(), Some(QuizSummary { score: 1, total: 3 }));
        let toast = page.toast.as_ref().unwrap();
        assert_eq!(toast.description, "Your score: 1/3");
        assert!(!page.celebration_pending);
    }

    #[test]
    fn test_perfect_quiz_celebrates() {
        let mut page = PageState::new(ThemeKey::Dark);
        page.start_quiz();
        for q in QUIZ_QUESTIONS {
            page.answer_quiz(q.correct_answer);
        }
        assert!(page.celebration_pending);
    }

    #[test]
    fn test_scroll_toggles_button() {
        let mut page = PageState::new(ThemeKey::Light);
        page.on_scroll(1000.0);
        assert!(page.show_scroll_top);
        page.on_scroll(0.0);
        assert!(!page.show_scroll_top);
    }
}

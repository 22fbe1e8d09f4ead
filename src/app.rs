use eframe::egui;

use crate::bank::QuestionBank;
use crate::quiz::Quiz;
use crate::session::SessionBuilder;
use crate::ui::{QuizAction, QuizUI};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    InProgress,
    Results,
}

pub struct QuizApp {
    bank: QuestionBank,
    session_size: usize,
    ui: QuizUI,
    quiz: Quiz,
    screen: Screen,
}

/// Seed for a new attempt, taken from the wall clock.
pub fn fresh_seed() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl QuizApp {
    pub fn new(bank: QuestionBank, session_size: usize, seed: i64) -> Self {
        let quiz = Self::start_session(&bank, session_size, seed);
        Self {
            bank,
            session_size,
            ui: QuizUI::default(),
            quiz,
            screen: Screen::InProgress,
        }
    }

    fn start_session(bank: &QuestionBank, session_size: usize, seed: i64) -> Quiz {
        let questions = SessionBuilder::new(bank.entries())
            .with_size(session_size)
            .build(seed);
        log::info!(
            "Started session with {} of {} questions (seed {})",
            questions.len(),
            bank.len(),
            seed
        );
        Quiz::new(questions, seed)
    }

    // Read by tests; the egui shell goes through `update`.
    #[allow(dead_code)]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[allow(dead_code)]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn select_option(&mut self, option: usize) {
        if self.screen == Screen::InProgress {
            self.quiz.select_option(option);
        }
    }

    pub fn go_next(&mut self) {
        if self.screen == Screen::InProgress {
            self.quiz.next_question();
        }
    }

    pub fn go_previous(&mut self) {
        if self.screen == Screen::InProgress {
            self.quiz.previous_question();
        }
    }

    pub fn finish(&mut self) {
        if self.screen == Screen::InProgress {
            let results = self.quiz.results();
            log::info!(
                "Quiz finished: {}/{} correct, {} answered (seed {})",
                results.correct,
                results.total,
                self.quiz.answered_count(),
                self.quiz.seed
            );
            self.screen = Screen::Results;
        }
    }

    /// Throws away the current attempt and draws a new one from `seed`.
    pub fn retake(&mut self, seed: i64) {
        self.quiz = Self::start_session(&self.bank, self.session_size, seed);
        self.screen = Screen::InProgress;
    }

    fn apply(&mut self, action: QuizAction) {
        match action {
            QuizAction::None => {}
            QuizAction::SelectOption(option) => self.select_option(option),
            QuizAction::PreviousQuestion => self.go_previous(),
            QuizAction::NextQuestion => self.go_next(),
            QuizAction::Finish => self.finish(),
            QuizAction::Retake => self.retake(fresh_seed()),
        }
    }
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let action = match self.screen {
                Screen::InProgress => self.ui.show_question(ui, &self.quiz),
                Screen::Results => self.ui.show_results(ui, &self.quiz, self.session_size),
            };
            self.apply(action);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBankEntry;

    fn bank(n: usize) -> QuestionBank {
        QuestionBank::from_entries(
            (0..n)
                .map(|i| QuestionBankEntry::new(format!("Q{i}"), &["a", "b", "c"], Some(0)))
                .collect(),
        )
    }

    #[test]
    fn starts_in_progress_with_blank_answers() {
        let app = QuizApp::new(bank(100), 45, 42);
        assert_eq!(app.screen(), Screen::InProgress);
        assert_eq!(app.quiz().len(), 45);
        assert_eq!(app.quiz().answered_count(), 0);
        assert_eq!(app.quiz().current_index, 0);
    }

    #[test]
    fn finish_then_retake_resets_the_attempt() {
        let mut app = QuizApp::new(bank(100), 45, 42);
        app.select_option(1);
        app.go_next();
        app.go_next();
        app.finish();
        assert_eq!(app.screen(), Screen::Results);

        app.go_next();
        assert_eq!(app.quiz().current_index, 2);

        app.retake(43);
        assert_eq!(app.screen(), Screen::InProgress);
        assert_eq!(app.quiz().current_index, 0);
        assert_eq!(app.quiz().answered_count(), 0);
        assert_eq!(app.quiz().seed, 43);
    }

    #[test]
    fn retake_with_same_seed_reproduces_session() {
        let mut app = QuizApp::new(bank(100), 45, 42);
        let before = app.quiz().questions.clone();
        app.retake(42);
        assert_eq!(app.quiz().questions, before);
    }

    #[test]
    fn ineligible_entries_never_reach_a_session() {
        let mut entries = vec![
            QuestionBankEntry::new("Lonely", &["only"], Some(0)),
            QuestionBankEntry::new("  ", &["a", "b"], Some(0)),
        ];
        entries.extend(bank(3).entries().iter().cloned());
        let bank = QuestionBank::from_entries(entries);

        for seed in 0..20 {
            let app = QuizApp::new(bank.clone(), 45, seed);
            assert_eq!(app.quiz().len(), 3);
            assert!(app
                .quiz()
                .questions
                .iter()
                .all(|q| q.question.starts_with('Q')));
        }
    }

    #[test]
    fn empty_bank_gives_empty_session() {
        let mut app = QuizApp::new(QuestionBank::default(), 45, 1);
        assert!(app.quiz().is_empty());
        app.select_option(0);
        app.go_next();
        app.finish();
        assert_eq!(app.screen(), Screen::Results);
    }
}

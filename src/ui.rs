use egui::{RichText, Ui};

use crate::quiz::Quiz;

pub struct QuizUI {
    pub question_font_size: f32,
    pub option_font_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    None,
    SelectOption(usize),
    PreviousQuestion,
    NextQuestion,
    Finish,
    Retake,
}

impl Default for QuizUI {
    fn default() -> Self {
        Self {
            question_font_size: 20.0,
            option_font_size: 16.0,
        }
    }
}

impl QuizUI {
    pub fn show_question(&mut self, ui: &mut Ui, quiz: &Quiz) -> QuizAction {
        let Some(question) = quiz.current_question() else {
            ui.heading("Nu există întrebări disponibile.");
            return if ui.button("Finalizează").clicked() {
                QuizAction::Finish
            } else {
                QuizAction::None
            };
        };

        let mut action = QuizAction::None;

        ui.label(
            RichText::new(format!(
                "Întrebarea {} din {}",
                quiz.current_index + 1,
                quiz.len()
            ))
            .size(16.0)
            .strong(),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(&question.question)
                .size(self.question_font_size)
                .strong(),
        );
        ui.add_space(16.0);

        let selected = quiz.current_answer();
        egui::ScrollArea::vertical()
            .id_source(("options", quiz.current_index))
            .auto_shrink([false; 2])
            .max_height((ui.available_height() - 48.0).max(0.0))
            .show(ui, |ui| {
                for (i, option) in question.options.iter().enumerate() {
                    let label = egui::SelectableLabel::new(
                        selected == Some(i),
                        RichText::new(option).size(self.option_font_size),
                    );
                    if ui.add_sized([ui.available_width(), 40.0], label).clicked() {
                        action = QuizAction::SelectOption(i);
                    }
                    ui.add_space(12.0);
                }
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!quiz.is_first(), egui::Button::new("Înapoi"))
                .clicked()
            {
                action = QuizAction::PreviousQuestion;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if quiz.is_last() {
                    if ui.button("Finalizează").clicked() {
                        action = QuizAction::Finish;
                    }
                } else if ui.button("Înainte").clicked() {
                    action = QuizAction::NextQuestion;
                }
            });
        });

        action
    }

    pub fn show_results(&mut self, ui: &mut Ui, quiz: &Quiz, session_size: usize) -> QuizAction {
        let results = quiz.results();
        let mut action = QuizAction::None;

        ui.heading(RichText::new("Rezultate").size(24.0).strong());
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!(
                "Scor: {} / {} ({:.1}%)",
                results.correct,
                results.total,
                results.percentage()
            ))
            .size(18.0),
        );
        ui.add_space(16.0);

        egui::ScrollArea::vertical()
            .id_source("results")
            .auto_shrink([false; 2])
            .max_height((ui.available_height() - 48.0).max(0.0))
            .show(ui, |ui| {
                for (i, outcome) in results.outcomes.iter().enumerate() {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new(format!("Q{}. {}", i + 1, outcome.question.question))
                                .strong(),
                        );
                        ui.add_space(6.0);
                        if let Some(answer) = outcome.selected_option() {
                            ui.label(format!("Răspunsul tău: {}", answer));
                        }
                        if let Some(correct) = outcome.question.correct_option() {
                            ui.label(format!("Răspuns corect: {}", correct));
                        }
                        ui.add_space(4.0);
                        if outcome.is_correct {
                            ui.label(RichText::new("✅ Corect").color(egui::Color32::GREEN));
                        } else {
                            ui.label(RichText::new("❌ Incorect").color(egui::Color32::RED));
                        }
                    });
                    ui.add_space(12.0);
                }
            });

        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(format!("Reia testul ({} aleator)", session_size))
                .clicked()
            {
                action = QuizAction::Retake;
            }
        });

        action
    }
}

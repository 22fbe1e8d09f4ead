mod app;
mod bank;
mod config;
mod quiz;
mod session;
mod ui;

use app::QuizApp;
use bank::{BankError, QuestionBank};
use config::UserConfig;
use eframe::egui;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("window error: {0}")]
    Window(String),
}

fn main() -> Result<(), AppError> {
    let config = UserConfig::load();
    TermLogger::init(
        config.level_filter(),
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let bank = match &config.bank_path {
        Some(path) => QuestionBank::load(path),
        None => QuestionBank::bundled(),
    }
    .map_err(|e| {
        log::error!("Failed to load question bank: {}", e);
        e
    })?;
    if bank.is_empty() {
        log::warn!("Question bank has no eligible questions");
    }

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(480.0, 800.0)),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let session_size = config.session_size;
    eframe::run_native(
        "AMG Quiz",
        options,
        Box::new(move |cc| {
            if dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }
            Box::new(QuizApp::new(bank, session_size, app::fresh_seed()))
        }),
    )
    .map_err(|e| AppError::Window(e.to_string()))
}

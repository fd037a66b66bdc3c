//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, Frame, RichText, TopBottomPanel};
use tracing::debug;

use crate::{GameEngine, GamePhase};
use super::board_view::BoardView;
use super::theme::*;

/// Status line for the current game
fn status_text(engine: &GameEngine) -> String {
    match engine.phase() {
        GamePhase::InProgress => format!("{}'s turn", engine.current_turn().name()),
        GamePhase::Draw => "Draw!".to_string(),
        GamePhase::BlackWon | GamePhase::WhiteWon => match engine.winner() {
            Some(winner) => format!("{} wins!", winner.name()),
            None => String::new(),
        },
    }
}

/// Two-player hot-seat Gomoku window
#[derive(Default)]
pub struct GomokuApp {
    engine: GameEngine,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Route a board click: play while the game runs, start a new game once it has ended.
    pub fn handle_click(&mut self, row: i32, col: i32) {
        if self.engine.phase().is_terminal() {
            self.engine.reset();
        } else {
            let phase = self.engine.apply_move(row, col);
            debug!(row, col, ?phase, "board click");
        }
    }

    /// Status line and New Game button
    fn render_status_bar(&mut self, ctx: &Context) {
        let status = status_text(&self.engine);
        let color = if self.engine.phase().is_terminal() {
            WIN_HIGHLIGHT
        } else {
            TEXT_PRIMARY
        };

        TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(status).size(16.0).strong().color(color));
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(format!("Move #{}", self.engine.stone_count()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("New Game").clicked() {
                            self.engine.reset();
                        }
                    });
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                let banner = self
                    .engine
                    .phase()
                    .is_terminal()
                    .then(|| status_text(&self.engine));

                let clicked = self.board_view.show(ui, &self.engine, banner.as_deref());

                if let Some((row, col)) = clicked {
                    self.handle_click(row, col);
                }
            });
    }

    /// N - New game
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.engine.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.render_status_bar(ctx);
        self.render_board(ctx);
    }
}

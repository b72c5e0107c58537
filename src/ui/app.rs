//! Main application for the Breakthru GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::Color;
use crate::eval::{EvalBreakdown, EvalVariant};

use super::board_view::{BoardClick, BoardView};
use super::game_state::{GameState, ResultView};
use super::theme::*;

/// Repaint interval while the game thread may still send updates
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main Breakthru application
pub struct BreakthruApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    /// Evaluator shown in the debug card
    debug_variant: EvalVariant,
}

impl BreakthruApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
            show_debug: false,
            debug_variant: EvalVariant::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                    ui.separator();
                    ui.radio_value(&mut self.debug_variant, EvalVariant::Balanced, "Balanced eval");
                    ui.radio_value(
                        &mut self.debug_variant,
                        EvalVariant::MaterialWeighted,
                        "Material-weighted eval",
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let seat = match self.state.perspective {
                        Some(color) => format!("You: {color}"),
                        None => "Spectating".to_string(),
                    };
                    ui.label(seat);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(view) = self.state.result_view() {
                    ui.add_space(10.0);
                    Self::render_result_card(ui, view);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("BREAKTHRU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Seat and progress
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (name, accent) = match self.state.perspective {
                Some(Color::Gold) => ("GOLD", GOLD_TILE),
                Some(Color::Silver) => ("SILVER", SILVER_TILE),
                None => ("AI vs AI", TEXT_PRIMARY),
            };
            ui.label(RichText::new(name).size(18.0).strong().color(accent));

            let status = if self.state.outcome.is_some() {
                "Game over"
            } else if self.state.highlights.is_empty() {
                "Playing..."
            } else {
                "Pick a destination"
            };
            ui.label(RichText::new(status).size(12.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("Update #{}", self.state.updates))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Accumulated AI think time
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI TIME").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format_think_time(self.state.think_time))
                    .size(24.0)
                    .color(TEXT_PRIMARY),
            );
        });
    }

    /// Evaluation features of the shown board
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("EVAL DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            for color in Color::ALL {
                let eval = EvalBreakdown::of(&self.state.board, color, self.debug_variant);
                let ships = self.state.board.piece_count(color);
                ui.label(
                    RichText::new(format!("{color} ({ships} pieces)"))
                        .size(12.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                ui.label(
                    RichText::new(format!(
                        "material {}  flagship {}\ncontrol {}  mobility {}",
                        eval.material, eval.flagship, eval.control, eval.mobility
                    ))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
                );
                ui.label(RichText::new(format!("score {}", eval.score)).size(11.0).color(TEXT_PRIMARY));
                ui.add_space(4.0);
            }
        });
    }

    fn render_result_card(ui: &mut egui::Ui, view: ResultView) {
        let accent = match view {
            ResultView::Won => RESULT_WIN,
            ResultView::Lost => RESULT_LOSS,
            ResultView::Tie | ResultView::Neutral(_) => RESULT_TIE,
        };

        Self::card_frame().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(view.title()).size(12.0).color(accent));
                ui.add_space(6.0);
                ui.label(RichText::new(view.message()).size(16.0).strong().color(TEXT_PRIMARY));
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(ui, &self.state.board, &self.state.highlights);

            if let Some(BoardClick(pos)) = clicked {
                self.state.click(pos);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
        });
    }
}

/// `m min, s sec`
fn format_think_time(total: Duration) -> String {
    let secs = total.as_secs();
    format!("{} min, {} sec", secs / 60, secs % 60)
}

impl eframe::App for BreakthruApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.poll_events();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_running() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}

//! Board rendering for the Breakthru GUI

use egui::{CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Color, Move, Pos, BOARD_SIZE, FILES};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached tile size for coordinate calculations
    cell_size: f32,
    /// Area covered by the 11x11 tiles, labels excluded
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

/// A click on the board widget.
///
/// `None` inside means the click missed the tiles (labels or margin).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardClick(pub Option<Pos>);

impl BoardView {
    /// Render the board and return the click, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, highlights: &[Move]) -> Option<BoardClick> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);
        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        );

        self.draw_tiles(&painter, board, highlights);
        self.draw_coordinates(&painter);

        if let Some(pointer_pos) = response.hover_pos() {
            if let Some(pos) = self.screen_to_board(pointer_pos) {
                painter.rect_filled(self.tile_rect(pos), CornerRadius::ZERO, hover_tile());
            }
        }

        if response.clicked() {
            let pos = response.interact_pointer_pos().and_then(|p| self.screen_to_board(p));
            return Some(BoardClick(pos));
        }
        None
    }

    /// Draw every tile with its fill color and piece symbol
    fn draw_tiles(&self, painter: &Painter, board: &Board, highlights: &[Move]) {
        let font = FontId::monospace(self.cell_size * PIECE_FONT_RATIO);
        let stroke = Stroke::new(TILE_GAP, GRID_LINE);

        for pos in Pos::all() {
            let rect = self.tile_rect(pos);
            let piece = board.get(pos);
            let target = highlights.iter().any(|m| m.to == pos);

            // Occupied highlighted tiles are capture targets
            let fill = match (target, piece) {
                (true, Some(_)) => CAPTURE_TARGET,
                (true, None) => MOTION_TARGET,
                (false, Some(p)) if p.owner() == Color::Gold => GOLD_TILE,
                (false, Some(_)) => SILVER_TILE,
                (false, None) => EMPTY_TILE,
            };

            painter.rect_filled(rect, CornerRadius::ZERO, fill);
            painter.rect_stroke(rect, CornerRadius::ZERO, stroke, egui::StrokeKind::Inside);

            if let Some(p) = piece {
                painter.text(
                    self.board_to_screen(pos),
                    egui::Align2::CENTER_CENTER,
                    p.symbol(),
                    font.clone(),
                    GRID_LINE,
                );
            }
        }
    }

    /// Draw file letters above and below, rank numbers on both sides
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(LABEL_FONT_SIZE);
        let half = BOARD_MARGIN * 0.5;

        for (col, letter) in FILES.iter().enumerate() {
            let x = self.grid_rect.min.x + (col as f32 + 0.5) * self.cell_size;
            let label = *letter;

            let top = Pos2::new(x, self.grid_rect.min.y - half);
            painter.text(top, egui::Align2::CENTER_CENTER, label, font.clone(), LABEL);
            let bottom = Pos2::new(x, self.grid_rect.max.y + half);
            painter.text(bottom, egui::Align2::CENTER_CENTER, label, font.clone(), LABEL);
        }

        for row in 0..BOARD_SIZE {
            let rank = (BOARD_SIZE - row).to_string();
            let y = self.grid_rect.min.y + (row as f32 + 0.5) * self.cell_size;

            let left = Pos2::new(self.grid_rect.min.x - half, y);
            painter.text(left, egui::Align2::CENTER_CENTER, &rank, font.clone(), LABEL);
            let right = Pos2::new(self.grid_rect.max.x + half, y);
            painter.text(right, egui::Align2::CENTER_CENTER, &rank, font.clone(), LABEL);
        }
    }

    fn tile_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates (tile center)
    fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.tile_rect(pos).center()
    }
}

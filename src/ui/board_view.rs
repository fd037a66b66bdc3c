//! Board rendering for the Gomoku GUI

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{GameEngine, Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// The cell is returned unchecked: clicks just outside the grid map to
    /// out-of-range coordinates and are left for the engine to reject.
    pub fn show(&mut self, ui: &mut egui::Ui, engine: &GameEngine, banner: Option<&str>) -> Option<(i32, i32)> {
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(BOARD_EXTENT), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, engine);

        if let Some(pos) = engine.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = engine.winning_line() {
            self.draw_winning_line(&painter, line);
        }

        if !engine.phase().is_terminal() {
            if let Some(pointer_pos) = response.hover_pos() {
                let (row, col) = self.screen_to_cell(pointer_pos);
                if let Some(pos) = Pos::try_new(row, col) {
                    self.draw_hover_preview(&painter, pos, engine.current_turn(), engine.cell_at(pos) == Stone::Empty);
                }
            }
        }

        if let Some(text) = banner {
            self.draw_banner(&painter, text);
        }

        if response.clicked() {
            response
                .interact_pointer_pos()
                .map(|pointer_pos| self.screen_to_cell(pointer_pos))
        } else {
            None
        }
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let far = BOARD_MARGIN + (BOARD_SIZE as f32 - 1.0) * CELL_SIZE;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * CELL_SIZE;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, far);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(far, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (A-O, 1-15)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(12.0);
        let label_offset = BOARD_MARGIN * 0.5;

        for col in 0..BOARD_SIZE {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * CELL_SIZE;
            let pos = Pos2::new(x, self.board_rect.min.y + label_offset);
            painter.text(pos, Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        // Row labels (15-1, displayed top to bottom)
        for row in 0..BOARD_SIZE {
            let num = BOARD_SIZE - row;
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * CELL_SIZE;
            let pos = Pos2::new(self.board_rect.min.x + label_offset, y);
            painter.text(pos, Align2::CENTER_CENTER, num.to_string(), font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, engine: &GameEngine) {
        let board = engine.board();
        for stone in [Stone::Black, Stone::White] {
            if let Some(stones) = board.stones(stone) {
                for pos in stones.iter_ones() {
                    self.draw_stone(painter, pos, stone);
                }
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = CELL_SIZE * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = CELL_SIZE * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    /// Translucent stone for the player to move, red when the cell is taken
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = CELL_SIZE * STONE_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Stone::Empty => return,
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Centered end-of-game message over the board
    fn draw_banner(&self, painter: &Painter, text: &str) {
        let galley = painter.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(BANNER_FONT_SIZE),
            BANNER_TEXT,
        );
        let text_rect = Align2::CENTER_CENTER.anchor_size(self.board_rect.center(), galley.size());

        painter.rect_filled(text_rect.expand(12.0), CornerRadius::same(8), banner_bg());
        painter.galley(text_rect.min, galley, BANNER_TEXT);
    }

    /// Convert screen coordinates to the nearest intersection.
    ///
    /// Not clamped to the board.
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> (i32, i32) {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN + CELL_SIZE * 0.5) / CELL_SIZE).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN + CELL_SIZE * 0.5) / CELL_SIZE).floor() as i32;
        (row, col)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * CELL_SIZE;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * CELL_SIZE;
        Pos2::new(x, y)
    }
}

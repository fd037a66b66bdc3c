//! Game engine: board, turn and outcome for a two-player game
//!
//! The engine is the only owner of game state. The presentation layer holds
//! one `GameEngine`, feeds it clicks through [`GameEngine::apply_move`] and
//! reads the result back through the accessors.
//!
//! Invalid input is not an error at this level: moves off the board, onto an
//! occupied cell or after the game has ended are ignored and leave every
//! observable piece of state untouched. [`GameEngine::try_move`] performs the
//! same operation but reports why a move was refused.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameEngine, GamePhase, Stone};
//!
//! let mut game = GameEngine::new();
//! for col in 0..4 {
//!     game.apply_move(7, col); // Black
//!     game.apply_move(0, col); // White
//! }
//! assert_eq!(game.apply_move(7, 4), GamePhase::BlackWon);
//! assert_eq!(game.winner(), Some(Stone::Black));
//!
//! // Ignored: the game is over
//! assert_eq!(game.apply_move(10, 10), GamePhase::BlackWon);
//! ```

use derive_more::{Display, Error};
use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::rules::{find_five_line, has_five_at_pos};

/// Overall game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    InProgress,
    Draw,
    BlackWon,
    WhiteWon,
}

impl GamePhase {
    /// Drawn or won. Only `reset` leaves a terminal phase.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GamePhase::InProgress
    }

    /// Winning color, if any
    #[inline]
    pub fn winner(self) -> Option<Stone> {
        match self {
            GamePhase::BlackWon => Some(Stone::Black),
            GamePhase::WhiteWon => Some(Stone::White),
            GamePhase::InProgress | GamePhase::Draw => None,
        }
    }

    /// Phase for a win by `stone`. `Empty` cannot win.
    #[inline]
    fn won_by(stone: Stone) -> Self {
        match stone {
            Stone::Black => GamePhase::BlackWon,
            Stone::White => GamePhase::WhiteWon,
            Stone::Empty => GamePhase::InProgress,
        }
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[display("({}, {}) is already occupied", pos.row, pos.col)]
    Occupied { pos: Pos },
    #[display("game is over ({phase:?})")]
    GameOver { phase: GamePhase },
}

/// Board, turn and phase for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    phase: GamePhase,
    current_turn: Stone,
    last_move: Option<Pos>,
    winning_line: Option<Vec<Pos>>,
}

impl GameEngine {
    /// Empty board, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: GamePhase::InProgress,
            current_turn: Stone::Black,
            last_move: None,
            winning_line: None,
        }
    }

    /// Start a new game. Always succeeds.
    pub fn reset(&mut self) {
        info!(
            previous_phase = ?self.phase,
            stones = self.board.stone_count(),
            "new game"
        );
        *self = Self::new();
    }

    /// Attempt a move for the player whose turn it is.
    ///
    /// Rejected moves are a no-op; the returned phase is then the unchanged
    /// current phase.
    pub fn apply_move(&mut self, row: i32, col: i32) -> GamePhase {
        match self.try_move(row, col) {
            Ok(phase) => phase,
            Err(err) => {
                debug!(row, col, %err, "move rejected");
                self.phase
            }
        }
    }

    /// Attempt a move, reporting why it was refused.
    pub fn try_move(&mut self, row: i32, col: i32) -> Result<GamePhase, MoveError> {
        if self.phase.is_terminal() {
            return Err(MoveError::GameOver { phase: self.phase });
        }
        let pos = Pos::try_new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { pos });
        }

        let color = self.current_turn;
        self.board.place_stone(pos, color);
        self.last_move = Some(pos);
        debug!(row, col, color = color.name(), "stone placed");

        // Win is checked before draw: a filling move that makes five wins
        if self.has_won(color, pos) {
            self.phase = GamePhase::won_by(color);
            self.winning_line = find_five_line(&self.board, pos, color);
            info!(
                winner = color.name(),
                stones = self.board.stone_count(),
                "game won"
            );
        } else if self.is_draw() {
            self.phase = GamePhase::Draw;
            info!("game drawn");
        } else {
            self.current_turn = color.opponent();
        }

        Ok(self.phase)
    }

    /// Whether `player` has five or more in a row through `pos`.
    #[inline]
    pub fn has_won(&self, player: Stone, pos: Pos) -> bool {
        has_five_at_pos(&self.board, pos, player)
    }

    /// Every cell is occupied.
    #[inline]
    pub fn is_draw(&self) -> bool {
        self.board.is_full()
    }

    #[inline]
    pub fn cell_at(&self, pos: Pos) -> Stone {
        self.board.get(pos)
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Player to move next. After a win this stays on the winner.
    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.phase.winner()
    }

    /// The full run that ended the game, ordered along the line
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.board.stone_count()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};

    /// Play a sequence of moves, each of which must be accepted.
    fn play(engine: &mut GameEngine, moves: &[(i32, i32)]) -> GamePhase {
        let mut phase = engine.phase();
        for &(row, col) in moves {
            phase = engine
                .try_move(row, col)
                .unwrap_or_else(|e| panic!("move ({row}, {col}) rejected: {e}"));
        }
        phase
    }

    /// Stripes that never give either color more than two in a row in any direction.
    /// Black gets 113 cells, White 112.
    fn drawn_pattern(row: usize, col: usize) -> Stone {
        if (col + 2 * row) % 4 < 2 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.phase(), GamePhase::InProgress);
        assert_eq!(engine.current_turn(), Stone::Black);
        assert_eq!(engine.stone_count(), 0);
        assert!(engine.last_move().is_none());
        assert!(engine.winning_line().is_none());
        assert_eq!(engine, GameEngine::default());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(7, 7), (7, 8), (8, 8)]);
        engine.reset();

        assert_eq!(engine.phase(), GamePhase::InProgress);
        assert_eq!(engine.current_turn(), Stone::Black);
        for idx in 0..TOTAL_CELLS {
            assert_eq!(engine.cell_at(Pos::from_index(idx)), Stone::Empty);
        }
        assert!(engine.last_move().is_none());
    }

    #[test]
    fn test_turn_alternates() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(7, 7), GamePhase::InProgress);
        assert_eq!(engine.cell_at(Pos::new(7, 7)), Stone::Black);
        assert_eq!(engine.current_turn(), Stone::White);

        engine.apply_move(7, 8);
        assert_eq!(engine.cell_at(Pos::new(7, 8)), Stone::White);
        assert_eq!(engine.current_turn(), Stone::Black);
        assert_eq!(engine.last_move(), Some(Pos::new(7, 8)));
    }

    #[test]
    fn test_same_cell_twice_rejected() {
        let mut engine = GameEngine::new();
        engine.apply_move(3, 3);
        let before = engine.clone();

        assert_eq!(engine.apply_move(3, 3), GamePhase::InProgress);
        assert_eq!(engine.cell_at(Pos::new(3, 3)), Stone::Black);
        assert_eq!(engine.current_turn(), Stone::White);
        assert_eq!(engine, before);
        assert_eq!(
            engine.try_move(3, 3),
            Err(MoveError::Occupied { pos: Pos::new(3, 3) })
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = GameEngine::new();
        engine.apply_move(0, 0);
        let before = engine.clone();

        let size = BOARD_SIZE as i32;
        for (row, col) in [(-1, 0), (0, -1), (size, 0), (0, size), (i32::MAX, i32::MIN)] {
            assert_eq!(engine.apply_move(row, col), GamePhase::InProgress);
            assert_eq!(engine.try_move(row, col), Err(MoveError::OutOfBounds { row, col }));
        }
        assert_eq!(engine, before);
    }

    #[test]
    fn test_horizontal_win() {
        let mut engine = GameEngine::new();
        play(
            &mut engine,
            &[(7, 0), (0, 0), (7, 1), (0, 2), (7, 2), (0, 4), (7, 3), (0, 6)],
        );
        assert_eq!(engine.phase(), GamePhase::InProgress);

        assert_eq!(engine.apply_move(7, 4), GamePhase::BlackWon);
        assert_eq!(engine.winner(), Some(Stone::Black));
        // Winning move does not advance the turn
        assert_eq!(engine.current_turn(), Stone::Black);
        assert_eq!(
            engine.winning_line(),
            Some(&[
                Pos::new(7, 0),
                Pos::new(7, 1),
                Pos::new(7, 2),
                Pos::new(7, 3),
                Pos::new(7, 4),
            ][..])
        );
    }

    #[test]
    fn test_vertical_win() {
        let mut engine = GameEngine::new();
        let phase = play(
            &mut engine,
            &[
                (0, 0), (5, 5),
                (0, 2), (6, 5),
                (0, 4), (7, 5),
                (0, 6), (8, 5),
                (0, 8), (9, 5),
            ],
        );
        assert_eq!(phase, GamePhase::WhiteWon);
        assert_eq!(engine.current_turn(), Stone::White);
    }

    #[test]
    fn test_main_diagonal_win_through_middle() {
        let mut engine = GameEngine::new();
        let phase = play(
            &mut engine,
            &[
                (2, 2), (14, 0),
                (3, 3), (14, 1),
                (5, 5), (14, 2),
                (6, 6), (14, 3),
                (4, 4),
            ],
        );
        assert_eq!(phase, GamePhase::BlackWon);
        assert_eq!(engine.winning_line().map(<[Pos]>::len), Some(5));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut engine = GameEngine::new();
        let phase = play(
            &mut engine,
            &[
                (14, 0), (4, 10),
                (14, 2), (5, 9),
                (14, 4), (6, 8),
                (14, 6), (7, 7),
                (14, 8), (8, 6),
            ],
        );
        assert_eq!(phase, GamePhase::WhiteWon);
        assert_eq!(engine.winner(), Some(Stone::White));
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let mut engine = GameEngine::new();
        play(
            &mut engine,
            &[(7, 0), (0, 0), (7, 1), (0, 2), (7, 2), (0, 4), (7, 3), (0, 6), (7, 4)],
        );
        let before = engine.clone();

        assert_eq!(engine.apply_move(10, 10), GamePhase::BlackWon);
        assert_eq!(engine.apply_move(7, 4), GamePhase::BlackWon);
        assert_eq!(engine.apply_move(-3, 99), GamePhase::BlackWon);
        assert_eq!(engine, before);
        assert_eq!(
            engine.try_move(10, 10),
            Err(MoveError::GameOver { phase: GamePhase::BlackWon })
        );

        engine.reset();
        assert_eq!(engine.apply_move(10, 10), GamePhase::InProgress);
    }

    #[test]
    fn test_full_board_draw() {
        let mut black = Vec::new();
        let mut white = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = (row as i32, col as i32);
                match drawn_pattern(row, col) {
                    Stone::Black => black.push(cell),
                    _ => white.push(cell),
                }
            }
        }
        assert_eq!(black.len(), 113);
        assert_eq!(white.len(), 112);

        let mut engine = GameEngine::new();
        for (b, w) in black.iter().zip(white.iter()) {
            assert_eq!(engine.apply_move(b.0, b.1), GamePhase::InProgress);
            assert_eq!(engine.apply_move(w.0, w.1), GamePhase::InProgress);
        }
        assert_eq!(engine.stone_count(), 224);

        let last = black[112];
        assert_eq!(engine.apply_move(last.0, last.1), GamePhase::Draw);
        assert!(engine.is_draw());
        assert_eq!(engine.winner(), None);

        let before = engine.clone();
        assert_eq!(engine.apply_move(0, 0), GamePhase::Draw);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_win_beats_draw_on_last_cell() {
        // Row 0 becomes B B B B _ B W ..., leaving (0, 4) as the last empty cell
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            let stone = match (pos.row, pos.col) {
                (0, 4) => Stone::Empty,
                (0, 2) | (0, 3) => Stone::Black,
                (row, col) => drawn_pattern(row as usize, col as usize),
            };
            board.place_stone(pos, stone);
        }

        let mut engine = GameEngine::new();
        engine.board = board;
        engine.current_turn = Stone::Black;
        assert_eq!(engine.stone_count(), 224);

        assert_eq!(engine.apply_move(0, 4), GamePhase::BlackWon);
        assert!(engine.board().is_full());
        assert_eq!(engine.winning_line().map(<[Pos]>::len), Some(6));
    }

    #[test]
    fn test_move_error_messages() {
        assert_eq!(
            MoveError::OutOfBounds { row: -1, col: 3 }.to_string(),
            "(-1, 3) is off the board"
        );
        assert_eq!(
            MoveError::Occupied { pos: Pos::new(3, 3) }.to_string(),
            "(3, 3) is already occupied"
        );
        assert_eq!(
            MoveError::GameOver { phase: GamePhase::Draw }.to_string(),
            "game is over (Draw)"
        );
    }

    #[test]
    fn test_phase_helpers() {
        assert!(!GamePhase::InProgress.is_terminal());
        assert!(GamePhase::Draw.is_terminal());
        assert!(GamePhase::BlackWon.is_terminal());
        assert_eq!(GamePhase::WhiteWon.winner(), Some(Stone::White));
        assert_eq!(GamePhase::Draw.winner(), None);
    }
}

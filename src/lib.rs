//! Two-player Gomoku on a 15x15 board
//!
//! Free-style rules:
//! - Black moves first, players alternate
//! - Five or more stones in a row (horizontal, vertical or diagonal) wins
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Five-in-a-row detection
//! - [`engine`]: Game state, move validation and outcome
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameEngine, GamePhase, Pos, Stone};
//!
//! let mut game = GameEngine::new();
//! game.apply_move(7, 7);
//! assert_eq!(game.cell_at(Pos::new(7, 7)), Stone::Black);
//! assert_eq!(game.current_turn(), Stone::White);
//!
//! // Occupied cell: ignored
//! game.apply_move(7, 7);
//! assert_eq!(game.current_turn(), Stone::White);
//! assert_eq!(game.phase(), GamePhase::InProgress);
//! ```

pub mod board;
pub mod engine;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{GameEngine, GamePhase, MoveError};

//! Game rules for free-style Gomoku
//!
//! Five or more in a row wins; a full board with no five is a draw.

pub mod win;

pub use win::{find_five_line, has_five_at_pos, WIN_LENGTH};

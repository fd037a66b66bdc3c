//! Win condition checking
//!
//! A player wins by forming five or more consecutive stones horizontally,
//! vertically or diagonally. Overlines count.
//!
//! Only the stone just placed can create a new run, so every check walks
//! outward from that stone along the four lines through it instead of
//! scanning whole rows.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE (main)
    (1, -1), // Diagonal SW (anti)
];

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Count consecutive `color` stones starting one step from `pos` in direction `(dr, dc)`.
#[inline]
fn count_direction(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while let Some(next) = Pos::try_new(r, c) {
        if board.get(next) != color {
            break;
        }
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Fast five-in-a-row check through a specific position.
///
/// Checks the 4 lines through `pos`, treating `pos` itself as `color`.
/// No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + count_direction(board, pos, color, dr, dc) + count_direction(board, pos, color, -dr, -dc)
            >= WIN_LENGTH
    })
}

/// Find the full winning run through `pos`.
///
/// Returns the positions of the run ordered along the line, or `None` if no
/// direction through `pos` reaches five.
pub fn find_five_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, pos, color, -dr, -dc) as i32;
        let forward = count_direction(board, pos, color, dr, dc) as i32;
        if (1 + back + forward) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .map(|i| {
                    Pos::new(
                        (pos.row as i32 + dr * i) as u8,
                        (pos.col as i32 + dc * i) as u8,
                    )
                })
                .collect();
            return Some(line);
        }
    }
    None
}

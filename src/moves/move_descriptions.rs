//! Textual move records.
//!
//! Each ply is logged as the moving piece's id followed by its destination:
//! `E2E4` for a quiet move, `D1xD7` for a capture and `E1OG1` for castling.

use crate::game_state::chess_types::{PieceId, Square};

pub const CAPTURE_MARKER: char = 'x';
pub const CASTLING_MARKER: char = 'O';

#[inline]
pub fn describe_move(piece: PieceId, to: Square, capture: bool) -> String {
    if capture {
        format!("{piece}{CAPTURE_MARKER}{to}")
    } else {
        format!("{piece}{to}")
    }
}

#[inline]
pub fn describe_castling(king: PieceId, to: Square) -> String {
    format!("{king}{CASTLING_MARKER}{to}")
}

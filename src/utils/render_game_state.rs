//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the occupancy grid for debugging,
//! tests, and the interactive driver.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Render the board to a Unicode string for terminal output, row 8 on top.
pub fn render_board(board: &BoardState) -> String {
    render_board_with_marks(board, &[])
}

/// Same as [`render_board`], drawing `marks` on empty squares as `*`.
pub fn render_board_with_marks(board: &BoardState, marks: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("  A B C D E F G H\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let Some(square) = Square::new(file, rank) else {
                continue;
            };
            match board.piece_at(square) {
                Some(piece) => out.push(piece_to_unicode(piece.color(), piece.kind())),
                None if marks.contains(&square) => out.push('*'),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  A B C D E F G H");

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

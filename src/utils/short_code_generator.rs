//! BoardState-to-short-code serializer.
//!
//! Renders both encodings and keeps the shorter one: the absolute form lists
//! every active piece, the default form (leading `X`) lists only the pieces
//! that deviate from the standard start. Equal lengths favor the default form.

use crate::game_state::board_state::BoardState;
use crate::game_state::piece_instance::PieceInstance;

/// Leading marker of the default encoding.
pub const DEFAULT_MODE_MARKER: char = 'X';
/// Suffix of a captured piece in the default encoding.
pub const INACTIVE_MARKER: char = 'X';
/// Prefix of a promoted piece in both encodings.
pub const PROMOTED_MARKER: char = 'P';

pub fn generate_short_code(board: &BoardState) -> String {
    let mut absolute_entries = Vec::new();
    let mut default_entries = Vec::new();

    for piece in board.pieces() {
        let id = piece.id();
        let prefix = promoted_prefix(piece);
        let digit = move_digit(piece.move_count());

        match board.positions().square(id) {
            Some(square) => {
                let displaced = square != id.home();
                if displaced {
                    absolute_entries.push(format!("{prefix}{id}{square}{digit}"));
                } else {
                    absolute_entries.push(format!("{prefix}{id}{digit}"));
                }
                if displaced || piece.has_moved() || piece.is_promoted() {
                    default_entries.push(format!("{prefix}{id}{square}{digit}"));
                }
            }
            None => default_entries.push(format!("{prefix}{id}{INACTIVE_MARKER}")),
        }
    }

    let absolute = absolute_entries.join(",");
    let default = format!("{DEFAULT_MODE_MARKER}{}", default_entries.join(","));
    if default.len() <= absolute.len() {
        default
    } else {
        absolute
    }
}

fn promoted_prefix(piece: &PieceInstance) -> String {
    if piece.is_promoted() {
        PROMOTED_MARKER.to_string()
    } else {
        String::new()
    }
}

/// Move count as a single digit: 0 is left out, anything above 9 clamps to 9.
fn move_digit(count: usize) -> String {
    match count {
        0 => String::new(),
        1..=9 => count.to_string(),
        _ => "9".to_owned(),
    }
}

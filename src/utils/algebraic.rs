//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `E4`) and `Square`
//! values reused by the short-code codec, the move log and the drivers.
//! Input is case-insensitive; output is always upper-case.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "E4" or "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_uppercase();
    let rank = bytes[1];

    if !(b'A'..=b'H').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(char::from(bytes[0])));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(char::from(rank)));
    }

    Square::new(file - b'A', rank - b'1')
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(square.to_owned()))
}

/// Convert a square to algebraic notation (for example: "E4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let mut text = String::with_capacity(2);
    text.push(square.file_char());
    text.push(square.rank_char());
    text
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_square_conversions() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        assert_eq!(a1, Square::new(0, 0).expect("A1 exists"));
        let h8 = algebraic_to_square("H8").expect("H8 should parse");
        assert_eq!(h8.index(), 63);
        assert_eq!(square_to_algebraic(h8), "H8");
        assert_eq!(square_to_algebraic(algebraic_to_square("e4").expect("e4")), "E4");
    }

    #[test]
    fn rejects_invalid_algebraic() {
        assert_eq!(
            algebraic_to_square("I1"),
            Err(ChessErrors::InvalidAlgebraicChar('I'))
        );
        assert_eq!(
            algebraic_to_square("A9"),
            Err(ChessErrors::InvalidAlgebraicChar('9'))
        );
        assert!(matches!(
            algebraic_to_square("E10"),
            Err(ChessErrors::InvalidAlgebraicString(_))
        ));
        assert!(algebraic_to_square("").is_err());
    }
}

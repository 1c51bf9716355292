//! Short-code-to-position parser.
//!
//! Rebuilds the 32 pieces and their positions from either encoding. Move
//! counts come back as synthetic history (no real move indices), so a loaded
//! pawn can never be taken en passant on the first ply.

use std::collections::HashSet;

use crate::chess_errors::ChessErrors;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{home_kind, standard_pieces, standard_positions};
use crate::game_state::chess_types::{Color, PieceId, PieceKind, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::game_state::piece_positions::{Occupancy, PiecePositions};
use crate::utils::short_code_generator::{DEFAULT_MODE_MARKER, INACTIVE_MARKER, PROMOTED_MARKER};

/// Pieces and positions decoded from a short code, ready to build a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortCodeSetup {
    pub pieces: Vec<PieceInstance>,
    pub positions: PiecePositions,
}

impl ShortCodeSetup {
    pub fn into_board(self) -> BoardState {
        BoardState::new(self.pieces, self.positions)
    }
}

/// One decoded entry: where the piece stands (if anywhere) and how often it moved.
struct Entry {
    id: PieceId,
    promoted: bool,
    square: Option<Square>,
    moves: usize,
}

pub fn parse_short_code(code: &str) -> Result<ShortCodeSetup, ChessErrors> {
    let code = code.trim();
    let (default_mode, body) = match code.strip_prefix(DEFAULT_MODE_MARKER) {
        Some(rest) => (true, rest),
        None => (false, code),
    };

    let mut pieces = standard_pieces();
    let mut positions = if default_mode {
        standard_positions()
    } else {
        PiecePositions::all_inactive()
    };

    let mut seen = HashSet::new();
    if !body.is_empty() {
        for raw in body.split(',') {
            let entry = if default_mode {
                parse_default_entry(raw)?
            } else {
                parse_absolute_entry(raw)?
            };
            if !seen.insert(entry.id) {
                return Err(ChessErrors::DuplicatePieceId(entry.id));
            }
            apply_entry(&entry, &mut pieces, &mut positions)?;
        }
    }

    Occupancy::from_positions(&positions).map_err(ChessErrors::SquareOccupiedTwice)?;
    for color in [Color::Light, Color::Dark] {
        if !positions.is_active(PieceId::king_of(color)) {
            return Err(ChessErrors::KingMissing(color));
        }
    }

    Ok(ShortCodeSetup { pieces, positions })
}

fn apply_entry(
    entry: &Entry,
    pieces: &mut [PieceInstance],
    positions: &mut PiecePositions,
) -> Result<(), ChessErrors> {
    let piece = &mut pieces[entry.id.slot()];
    if entry.promoted {
        if home_kind(entry.id) != PieceKind::Pawn {
            return Err(ChessErrors::PromotedNonPawn(entry.id));
        }
        piece.promote(PieceKind::Queen);
    }
    piece.set_synthetic_moves(entry.moves);

    match entry.square {
        Some(square) => positions.place(entry.id, square),
        None => positions.deactivate(entry.id),
    }
    Ok(())
}

/// `[P]id square [digit]` or `[P]idX`.
fn parse_default_entry(raw: &str) -> Result<Entry, ChessErrors> {
    let (promoted, id, rest) = split_entry(raw)?;
    let inactive = rest.len() == 1 && rest.starts_with(INACTIVE_MARKER);
    if inactive {
        return Ok(Entry {
            id,
            promoted,
            square: None,
            moves: 1,
        });
    }

    let (square, digit) = match rest.len() {
        2 => (parse_square(raw, rest)?, None),
        3 => (parse_square(raw, &rest[..2])?, Some(parse_digit(raw, &rest[2..])?)),
        _ => return Err(malformed(raw)),
    };
    Ok(Entry {
        id,
        promoted,
        square: Some(square),
        moves: digit.unwrap_or(1),
    })
}

/// `[P]id [square] [digit]`.
fn parse_absolute_entry(raw: &str) -> Result<Entry, ChessErrors> {
    let (promoted, id, rest) = split_entry(raw)?;
    let (square, digit) = match rest.len() {
        0 => (id.home(), None),
        1 => (id.home(), Some(parse_digit(raw, rest)?)),
        2 => (parse_square(raw, rest)?, None),
        3 => (parse_square(raw, &rest[..2])?, Some(parse_digit(raw, &rest[2..])?)),
        _ => return Err(malformed(raw)),
    };
    let implied = usize::from(square != id.home());
    Ok(Entry {
        id,
        promoted,
        square: Some(square),
        moves: digit.unwrap_or(implied),
    })
}

/// Strip the promotion marker and the id, returning what follows them.
fn split_entry(raw: &str) -> Result<(bool, PieceId, &str), ChessErrors> {
    if !raw.is_ascii() {
        return Err(malformed(raw));
    }
    let (promoted, text) = match raw.strip_prefix(PROMOTED_MARKER) {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    if text.len() < 2 {
        return Err(malformed(raw));
    }

    let (id_text, rest) = text.split_at(2);
    let home = parse_square(raw, id_text)?;
    let id = PieceId::new(home).ok_or_else(|| ChessErrors::UnknownPieceId(id_text.to_owned()))?;
    Ok((promoted, id, rest))
}

fn parse_square(raw: &str, text: &str) -> Result<Square, ChessErrors> {
    text.parse().map_err(|_| malformed(raw))
}

fn parse_digit(raw: &str, text: &str) -> Result<usize, ChessErrors> {
    match text.as_bytes() {
        [digit @ b'0'..=b'9'] => Ok(usize::from(digit - b'0')),
        _ => Err(malformed(raw)),
    }
}

fn malformed(raw: &str) -> ChessErrors {
    ChessErrors::MalformedShortCodeEntry(raw.to_owned())
}

#[cfg(test)]
mod tests {
    use super::parse_short_code;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::{standard_positions, STARTING_POSITION_SHORT_CODE};
    use crate::game_state::chess_types::{Color, PieceId, PieceKind, Square};
    use crate::utils::short_code_generator::generate_short_code;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn id(text: &str) -> PieceId {
        text.parse().expect("test id should parse")
    }

    #[test]
    fn bare_marker_is_the_standard_start() {
        let setup = parse_short_code(STARTING_POSITION_SHORT_CODE).expect("start code parses");
        assert_eq!(setup.positions, standard_positions());
        assert!(setup.pieces.iter().all(|piece| !piece.has_moved()));
    }

    #[test]
    fn absolute_code_places_only_listed_pieces() {
        let setup = parse_short_code("E1,E8,C2C7").expect("sparse code parses");
        let active: Vec<_> = setup.positions.active().collect();
        assert_eq!(
            active,
            vec![
                (PieceId::DARK_KING, sq("E8")),
                (id("C2"), sq("C7")),
                (PieceId::LIGHT_KING, sq("E1")),
            ]
        );

        // Missing digit: home means unmoved, elsewhere means one move.
        assert_eq!(setup.pieces[PieceId::LIGHT_KING.slot()].move_count(), 0);
        assert_eq!(setup.pieces[id("C2").slot()].history(), &[None]);
        assert_eq!(setup.pieces[id("C2").slot()].kind(), PieceKind::Pawn);
    }

    #[test]
    fn default_code_overrides_listed_pieces() {
        let setup = parse_short_code("XD7X,D8X,PE2D83,G1F3").expect("default code parses");
        assert!(!setup.positions.is_active(id("D7")));
        assert!(!setup.positions.is_active(id("D8")));
        assert_eq!(setup.positions.square(id("E2")), Some(sq("D8")));
        assert_eq!(setup.positions.square(id("G1")), Some(sq("F3")));
        assert_eq!(setup.positions.square(id("A2")), Some(sq("A2")));

        let e2 = &setup.pieces[id("E2").slot()];
        assert_eq!(e2.kind(), PieceKind::Queen);
        assert!(e2.is_promoted());
        assert_eq!(e2.move_count(), 3);
        assert_eq!(setup.pieces[id("G1").slot()].move_count(), 1);
    }

    #[test]
    fn encoded_boards_parse_back_to_the_same_code() {
        for code in ["X", "XD7X,E2D52", "E8,C2C71,E1", "XD8X,PE2D83,G1F31", "E84,E12,H1H71"] {
            let board = parse_short_code(code).expect("code parses").into_board();
            assert_eq!(generate_short_code(&board), code);
        }
    }

    #[test]
    fn malformed_codes_are_rejected() {
        let cases = [
            ("E1,E8,C2C7Q", ChessErrors::MalformedShortCodeEntry("C2C7Q".to_owned())),
            ("E1,E8,", ChessErrors::MalformedShortCodeEntry(String::new())),
            ("E1,E8,E4", ChessErrors::UnknownPieceId("E4".to_owned())),
            ("E1,E8,C2Z9", ChessErrors::MalformedShortCodeEntry("C2Z9".to_owned())),
            ("E1,E8,E1", ChessErrors::DuplicatePieceId(PieceId::LIGHT_KING)),
            ("E1,E8,D1E8", ChessErrors::SquareOccupiedTwice(sq("E8"))),
            ("E1,D8", ChessErrors::KingMissing(Color::Dark)),
            ("XE1X", ChessErrors::KingMissing(Color::Light)),
            ("E1,E8,PD1", ChessErrors::PromotedNonPawn(id("D1"))),
            ("XE2E4Y", ChessErrors::MalformedShortCodeEntry("E2E4Y".to_owned())),
        ];
        for (code, expected) in cases {
            assert_eq!(parse_short_code(code), Err(expected), "code {code}");
        }
    }
}

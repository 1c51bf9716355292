//! Check detection by simulation.
//!
//! A candidate is played on private copies of the occupancy grid and the
//! position table, then every opposing piece's pseudo-legal captures are
//! regenerated against that copy. The live board is never touched.

use crate::game_state::chess_types::{Capture, Color, PieceId, PieceKind, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::move_generation::legal_move_generator::generate_pseudo_legal;
use crate::move_generation::move_generator::GenerationContext;

/// One option under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    Move(Square),
    Capture(Capture),
}

impl Candidate {
    #[inline]
    pub fn destination(self) -> Square {
        match self {
            Candidate::Move(square) => square,
            Candidate::Capture(capture) => capture.square,
        }
    }
}

/// Opposing pieces that could capture the mover's king after `candidate`.
pub fn resulting_checks(
    ctx: &GenerationContext<'_>,
    piece: &PieceInstance,
    candidate: Candidate,
) -> Vec<PieceId> {
    let mut occupancy = *ctx.occupancy;
    let mut positions = *ctx.positions;

    if let Candidate::Capture(capture) = candidate {
        // A king is never removed; capturing one only ever means "gives check".
        if let Some(taken) = occupancy.get(capture.taken) {
            if ctx.piece(taken).kind() != PieceKind::King {
                positions.deactivate(taken);
                occupancy.set(capture.taken, None);
            }
        }
    }

    let to = candidate.destination();
    if let Some(from) = positions.square(piece.id()) {
        occupancy.set(from, None);
    }
    occupancy.set(to, Some(piece.id()));
    positions.place(piece.id(), to);

    let Some(king_square) = positions.square(PieceId::king_of(piece.color())) else {
        return Vec::new();
    };

    let simulated = GenerationContext {
        pieces: ctx.pieces,
        occupancy: &occupancy,
        positions: &positions,
        move_index: ctx.move_index + 1,
    };
    attackers_of(&simulated, piece.color().opposite(), king_square)
}

/// Active pieces of `attacker` whose pseudo-legal captures reach `square`.
pub fn attackers_of(
    ctx: &GenerationContext<'_>,
    attacker: Color,
    square: Square,
) -> Vec<PieceId> {
    ctx.positions
        .active()
        .filter(|(id, _)| id.color() == attacker)
        .filter(|(id, _)| {
            generate_pseudo_legal(ctx, ctx.piece(*id))
                .captures
                .iter()
                .any(|capture| capture.square == square)
        })
        .map(|(id, _)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{attackers_of, resulting_checks, Candidate};
    use crate::game_state::chess_rules::standard_pieces;
    use crate::game_state::chess_types::{Capture, Color, PieceId, Square};
    use crate::game_state::piece_positions::{Occupancy, PiecePositions};
    use crate::move_generation::move_generator::GenerationContext;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn id(text: &str) -> PieceId {
        text.parse().expect("test id should parse")
    }

    #[test]
    fn simulation_leaves_live_state_untouched() {
        let pieces = standard_pieces();
        let mut positions = PiecePositions::all_inactive();
        positions.place(PieceId::LIGHT_KING, sq("E1"));
        positions.place(PieceId::DARK_KING, sq("E8"));
        positions.place(id("D1"), sq("D1"));
        positions.place(id("A8"), sq("D5"));
        let occupancy = Occupancy::from_positions(&positions).expect("sparse layout");
        let ctx = GenerationContext {
            pieces: &pieces,
            occupancy: &occupancy,
            positions: &positions,
            move_index: 7,
        };

        let queen = ctx.piece(id("D1"));
        let checks = resulting_checks(&ctx, queen, Candidate::Capture(Capture::direct(sq("D5"))));
        assert!(checks.is_empty());

        // Stepping the queen off the D-file is fine too: nothing lines up with E1.
        assert!(resulting_checks(&ctx, queen, Candidate::Move(sq("C2"))).is_empty());

        assert_eq!(positions.square(id("A8")), Some(sq("D5")));
        assert_eq!(occupancy.get(sq("D1")), Some(id("D1")));
        assert!(occupancy.matches(&positions));
    }

    #[test]
    fn king_walking_into_a_rook_file_is_reported() {
        let pieces = standard_pieces();
        let mut positions = PiecePositions::all_inactive();
        positions.place(PieceId::LIGHT_KING, sq("E1"));
        positions.place(PieceId::DARK_KING, sq("E8"));
        positions.place(id("H8"), sq("D8"));
        let occupancy = Occupancy::from_positions(&positions).expect("sparse layout");
        let ctx = GenerationContext {
            pieces: &pieces,
            occupancy: &occupancy,
            positions: &positions,
            move_index: 2,
        };

        let king = ctx.piece(PieceId::LIGHT_KING);
        assert_eq!(resulting_checks(&ctx, king, Candidate::Move(sq("D1"))), vec![id("H8")]);
        assert!(resulting_checks(&ctx, king, Candidate::Move(sq("F1"))).is_empty());
        assert!(attackers_of(&ctx, Color::Dark, sq("E1")).is_empty());
    }
}

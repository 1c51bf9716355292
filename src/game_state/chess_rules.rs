//! Canonical chess-rule constants.
//!
//! Standard starting layout, the ranks special pawn rules depend on, and the
//! square handed back by random selection when nothing can move.

use crate::game_state::chess_types::{Color, PieceId, PieceKind, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::game_state::piece_positions::PiecePositions;

/// Short code of the standard starting position (default mode, nothing deviates).
pub const STARTING_POSITION_SHORT_CODE: &str = "X";

/// Back rank from file A to file H.
pub const BACK_RANK_KINDS: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Square returned by random selection when the side to move has no options.
pub const RANDOM_MOVE_FALLBACK: Square = match Square::new(4, 0) {
    Some(square) => square,
    None => panic!("E1 is on the board"),
};

/// Kind a piece starts the game as.
#[inline]
pub const fn home_kind(id: PieceId) -> PieceKind {
    match id.home().rank() {
        1 | 6 => PieceKind::Pawn,
        _ => BACK_RANK_KINDS[id.home().file() as usize],
    }
}

/// Zero-based rank an enemy pawn must stand on to be taken en passant by `capturer`.
#[inline]
pub const fn en_passant_rank(capturer: Color) -> u8 {
    match capturer {
        Color::Light => 4,
        Color::Dark => 3,
    }
}

/// The 32 pieces of a fresh game, in canonical slot order.
pub fn standard_pieces() -> Vec<PieceInstance> {
    PieceId::all()
        .map(|id| PieceInstance::new(id, home_kind(id)))
        .collect()
}

/// Every piece active on its home square.
pub fn standard_positions() -> PiecePositions {
    let mut positions = PiecePositions::all_inactive();
    for id in PieceId::all() {
        positions.place(id, id.home());
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::{home_kind, standard_pieces, RANDOM_MOVE_FALLBACK};
    use crate::game_state::chess_types::{PieceId, PieceKind};

    #[test]
    fn standard_layout_has_expected_kinds() {
        let pieces = standard_pieces();
        assert_eq!(pieces.len(), 32);
        assert_eq!(pieces.iter().filter(|p| p.kind() == PieceKind::Pawn).count(), 16);
        assert_eq!(pieces.iter().filter(|p| p.kind() == PieceKind::King).count(), 2);

        assert_eq!(home_kind(PieceId::LIGHT_KING), PieceKind::King);
        assert_eq!(home_kind("D8".parse().expect("id")), PieceKind::Queen);
        assert_eq!(home_kind("G1".parse().expect("id")), PieceKind::Knight);
        assert_eq!(RANDOM_MOVE_FALLBACK.to_string(), "E1");
    }
}

//! Per-piece identity and move history.
//!
//! A `PieceInstance` lives for the whole game. Captured pieces are only
//! deactivated in the position table; the instance itself keeps its kind,
//! promotion flag and history so the short code can still describe it.

use crate::game_state::chess_types::{Color, PieceId, PieceKind, Square};

/// One of the 32 pieces of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceInstance {
    id: PieceId,
    color: Color,
    kind: PieceKind,
    promoted: bool,
    // `None` marks a move reconstructed from a short code rather than played.
    history: Vec<Option<u32>>,
}

impl PieceInstance {
    pub fn new(id: PieceId, kind: PieceKind) -> Self {
        Self {
            id,
            color: id.color(),
            kind,
            promoted: false,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn is_promoted(&self) -> bool {
        self.promoted
    }

    #[inline]
    pub fn history(&self) -> &[Option<u32>] {
        &self.history
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        !self.history.is_empty()
    }

    /// True when this piece's only move was played at `move_index`.
    #[inline]
    pub fn only_move_was(&self, move_index: u32) -> bool {
        matches!(self.history.as_slice(), [Some(index)] if *index == move_index)
    }

    /// Step from `from` by a side-relative `(row, col)` delta.
    ///
    /// The delta is scaled by the owner's orientation, so `(1, 0)` is always
    /// "forward" for the piece. Returns `None` off the board.
    #[inline]
    pub fn toward(&self, from: Square, d_rank: i8, d_file: i8) -> Option<Square> {
        let orientation = self.color.orientation();
        from.offset(orientation * d_rank, orientation * d_file)
    }

    #[inline]
    pub fn record_move(&mut self, move_index: u32) {
        self.history.push(Some(move_index));
    }

    /// Replace the history with `count` moves of unknown index.
    pub fn set_synthetic_moves(&mut self, count: usize) {
        self.history = vec![None; count];
    }

    pub fn promote(&mut self, kind: PieceKind) {
        self.kind = kind;
        self.promoted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::PieceInstance;
    use crate::game_state::chess_types::{PieceId, PieceKind, Square};

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn forward_is_relative_to_owner() {
        let light = PieceInstance::new("E2".parse().expect("id"), PieceKind::Pawn);
        let dark = PieceInstance::new("E7".parse().expect("id"), PieceKind::Pawn);

        assert_eq!(light.toward(sq("E2"), 1, 0), Some(sq("E3")));
        assert_eq!(dark.toward(sq("E7"), 1, 0), Some(sq("E6")));
        assert_eq!(light.toward(sq("E2"), 1, 1), Some(sq("F3")));
        assert_eq!(dark.toward(sq("E7"), 1, 1), Some(sq("D6")));
        assert_eq!(light.toward(sq("H8"), 1, 0), None);
    }

    #[test]
    fn history_tracks_moves_and_promotion() {
        let mut pawn = PieceInstance::new("A2".parse::<PieceId>().expect("id"), PieceKind::Pawn);
        assert!(!pawn.has_moved());

        pawn.record_move(4);
        assert!(pawn.only_move_was(4));
        assert!(!pawn.only_move_was(3));

        pawn.record_move(6);
        assert_eq!(pawn.move_count(), 2);
        assert!(!pawn.only_move_was(6));

        pawn.promote(PieceKind::Queen);
        assert_eq!(pawn.kind(), PieceKind::Queen);
        assert!(pawn.is_promoted());

        pawn.set_synthetic_moves(3);
        assert_eq!(pawn.history(), &[None, None, None]);
    }
}

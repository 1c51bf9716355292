//! Inputs shared by every move generator.
//!
//! A `GenerationContext` is a read-only view of a board: the live one during
//! a refresh, or a simulated copy while checking whether a candidate move
//! exposes its own king.

use crate::game_state::chess_types::PieceId;
use crate::game_state::piece_instance::PieceInstance;
use crate::game_state::piece_positions::{Occupancy, PiecePositions};

#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    /// All 32 pieces in canonical slot order.
    pub pieces: &'a [PieceInstance],
    pub occupancy: &'a Occupancy,
    pub positions: &'a PiecePositions,
    /// Global move index of the ply about to be played.
    pub move_index: u32,
}

impl<'a> GenerationContext<'a> {
    #[inline]
    pub fn piece(&self, id: PieceId) -> &'a PieceInstance {
        &self.pieces[id.slot()]
    }
}

/// How a square relates to the piece being generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileRelation {
    Blank,
    Friend,
    Enemy,
}

//! Rook move generation.
//!
//! Emits quiet moves along each orthogonal ray and at most one capture per
//! ray. Castling is driven from the king's side, never from here.

use crate::game_state::chess_types::{MoveOptions, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::move_generation::legal_move_shared::slide;
use crate::move_generation::move_generator::GenerationContext;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(
    ctx: &GenerationContext<'_>,
    rook: &PieceInstance,
    from: Square,
    out: &mut MoveOptions,
) {
    slide(ctx, rook, from, &ROOK_DIRECTIONS, out);
}

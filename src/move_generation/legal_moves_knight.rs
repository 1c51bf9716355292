use crate::game_state::chess_types::{MoveOptions, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::move_generation::legal_move_shared::leap;
use crate::move_generation::move_generator::GenerationContext;
use crate::moves::knight_moves::KNIGHT_OFFSETS;

pub fn generate_knight_moves(
    ctx: &GenerationContext<'_>,
    knight: &PieceInstance,
    from: Square,
    out: &mut MoveOptions,
) {
    leap(ctx, knight, from, &KNIGHT_OFFSETS, out);
}

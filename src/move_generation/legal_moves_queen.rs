use crate::game_state::chess_types::{MoveOptions, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::move_generation::legal_move_shared::slide;
use crate::move_generation::move_generator::GenerationContext;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(
    ctx: &GenerationContext<'_>,
    queen: &PieceInstance,
    from: Square,
    out: &mut MoveOptions,
) {
    slide(ctx, queen, from, &QUEEN_DIRECTIONS, out);
}

use crate::game_state::chess_types::{MoveOptions, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::move_generation::legal_move_shared::slide;
use crate::move_generation::move_generator::GenerationContext;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(
    ctx: &GenerationContext<'_>,
    bishop: &PieceInstance,
    from: Square,
    out: &mut MoveOptions,
) {
    slide(ctx, bishop, from, &BISHOP_DIRECTIONS, out);
}

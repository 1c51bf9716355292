use crate::game_state::chess_types::{MoveOptions, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::move_generation::legal_move_shared::leap;
use crate::move_generation::move_generator::GenerationContext;
use crate::moves::king_moves::KING_OFFSETS;

/// Adjacent steps only; castling candidates come from the board, which owns
/// the attack maps they are validated against.
pub fn generate_king_moves(
    ctx: &GenerationContext<'_>,
    king: &PieceInstance,
    from: Square,
    out: &mut MoveOptions,
) {
    leap(ctx, king, from, &KING_OFFSETS, out);
}

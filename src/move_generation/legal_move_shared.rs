use crate::game_state::chess_types::{Capture, MoveOptions, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::move_generation::move_generator::{GenerationContext, TileRelation};

#[inline]
pub fn piece_at<'a>(ctx: &GenerationContext<'a>, square: Square) -> Option<&'a PieceInstance> {
    ctx.occupancy.get(square).map(|id| ctx.piece(id))
}

#[inline]
pub fn relation_to(ctx: &GenerationContext<'_>, piece: &PieceInstance, square: Square) -> TileRelation {
    match piece_at(ctx, square) {
        None => TileRelation::Blank,
        Some(other) if other.color() == piece.color() => TileRelation::Friend,
        Some(_) => TileRelation::Enemy,
    }
}

/// Walk each ray until the edge or the first occupied square, which is taken
/// as a capture when it holds an enemy.
pub fn slide(
    ctx: &GenerationContext<'_>,
    piece: &PieceInstance,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut MoveOptions,
) {
    for &(d_rank, d_file) in directions {
        let mut step = 1i8;
        while let Some(target) = piece.toward(from, d_rank * step, d_file * step) {
            match relation_to(ctx, piece, target) {
                TileRelation::Blank => out.moves.push(target),
                TileRelation::Enemy => {
                    out.captures.push(Capture::direct(target));
                    break;
                }
                TileRelation::Friend => break,
            }
            step += 1;
        }
    }
}

/// Single steps to fixed offsets (knight and king).
pub fn leap(
    ctx: &GenerationContext<'_>,
    piece: &PieceInstance,
    from: Square,
    offsets: &[(i8, i8)],
    out: &mut MoveOptions,
) {
    for &(d_rank, d_file) in offsets {
        let Some(target) = piece.toward(from, d_rank, d_file) else {
            continue;
        };
        match relation_to(ctx, piece, target) {
            TileRelation::Blank => out.moves.push(target),
            TileRelation::Enemy => out.captures.push(Capture::direct(target)),
            TileRelation::Friend => {}
        }
    }
}

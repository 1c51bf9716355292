use crate::game_state::chess_rules::en_passant_rank;
use crate::game_state::chess_types::{Capture, MoveOptions, PieceKind, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::move_generation::legal_move_shared::{piece_at, relation_to};
use crate::move_generation::move_generator::{GenerationContext, TileRelation};
use crate::moves::pawn_moves::{PAWN_CAPTURE_PAIRS, PAWN_DOUBLE_STEP, PAWN_SINGLE_STEP};

pub fn generate_pawn_moves(
    ctx: &GenerationContext<'_>,
    pawn: &PieceInstance,
    from: Square,
    out: &mut MoveOptions,
) {
    let (d_rank, d_file) = PAWN_SINGLE_STEP;
    if let Some(one_step) = pawn.toward(from, d_rank, d_file) {
        if relation_to(ctx, pawn, one_step) == TileRelation::Blank {
            out.moves.push(one_step);

            let (d_rank, d_file) = PAWN_DOUBLE_STEP;
            if !pawn.has_moved() {
                if let Some(two_step) = pawn.toward(from, d_rank, d_file) {
                    if relation_to(ctx, pawn, two_step) == TileRelation::Blank {
                        out.moves.push(two_step);
                    }
                }
            }
        }
    }

    // captures and en-passant
    for ((cap_rank, cap_file), (side_rank, side_file)) in PAWN_CAPTURE_PAIRS {
        let Some(diagonal) = pawn.toward(from, cap_rank, cap_file) else {
            continue;
        };

        if relation_to(ctx, pawn, diagonal) == TileRelation::Enemy {
            out.captures.push(Capture::direct(diagonal));
            continue;
        }

        if !pawn.has_moved() {
            continue;
        }
        let Some(lateral) = pawn.toward(from, side_rank, side_file) else {
            continue;
        };
        if lateral.rank() != en_passant_rank(pawn.color())
            || relation_to(ctx, pawn, lateral) != TileRelation::Enemy
        {
            continue;
        }

        let Some(victim) = piece_at(ctx, lateral) else {
            continue;
        };
        let just_double_stepped = ctx
            .move_index
            .checked_sub(1)
            .is_some_and(|previous| victim.only_move_was(previous));
        if victim.kind() == PieceKind::Pawn && just_double_stepped {
            out.captures.push(Capture {
                square: diagonal,
                taken: lateral,
            });
        }
    }
}

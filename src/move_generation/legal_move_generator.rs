//! Per-piece move generation pipeline.
//!
//! `generate_pseudo_legal` applies the movement geometry of the piece's kind.
//! `generate_legal` runs it, appends any castling candidates, and drops every
//! option that would leave the mover's own king capturable.

use crate::game_state::chess_types::{MoveOptions, PieceKind, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::move_generation::legal_move_checks::{resulting_checks, Candidate};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::GenerationContext;

/// Movement geometry only. Inactive pieces have no options.
pub fn generate_pseudo_legal(ctx: &GenerationContext<'_>, piece: &PieceInstance) -> MoveOptions {
    let mut out = MoveOptions::default();
    let Some(from) = ctx.positions.square(piece.id()) else {
        return out;
    };

    match piece.kind() {
        PieceKind::Pawn => generate_pawn_moves(ctx, piece, from, &mut out),
        PieceKind::Knight => generate_knight_moves(ctx, piece, from, &mut out),
        PieceKind::Bishop => generate_bishop_moves(ctx, piece, from, &mut out),
        PieceKind::Rook => generate_rook_moves(ctx, piece, from, &mut out),
        PieceKind::Queen => generate_queen_moves(ctx, piece, from, &mut out),
        PieceKind::King => generate_king_moves(ctx, piece, from, &mut out),
    }

    out
}

/// Pseudo-legal options plus `castles`, filtered by simulation.
pub fn generate_legal(
    ctx: &GenerationContext<'_>,
    piece: &PieceInstance,
    castles: &[Square],
) -> MoveOptions {
    let mut options = generate_pseudo_legal(ctx, piece);
    options.moves.extend_from_slice(castles);

    options
        .moves
        .retain(|&to| resulting_checks(ctx, piece, Candidate::Move(to)).is_empty());
    options
        .captures
        .retain(|&capture| resulting_checks(ctx, piece, Candidate::Capture(capture)).is_empty());

    options
}

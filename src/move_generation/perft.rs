//! Leaf-node counting over the legal move tree.
//!
//! Every ply is played through [`Game::play`] on a clone, so the counts cover
//! the whole controller path: option caches, castling, en passant and
//! auto-promotion.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game::{ActivateResult, Game, GameOutcome, MoveResultState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// A single legal ply of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ply {
    pub from: Square,
    pub to: Square,
    pub en_passant: bool,
    pub promotion: bool,
}

/// Every legal ply of the side to move, in canonical piece order.
pub fn legal_plies(game: &Game) -> Vec<Ply> {
    let board = game.board();
    let mut plies = Vec::new();

    for (id, from) in board.positions().active() {
        if id.color() != game.turn() {
            continue;
        }
        let piece = board.piece(id);
        let promotes = |to: Square| {
            piece.kind() == PieceKind::Pawn && to.rank() == piece.color().promotion_rank()
        };

        let options = board.options(id);
        for &to in &options.moves {
            plies.push(Ply {
                from,
                to,
                en_passant: false,
                promotion: promotes(to),
            });
        }
        for capture in &options.captures {
            plies.push(Ply {
                from,
                to: capture.square,
                en_passant: capture.is_en_passant(),
                promotion: promotes(capture.square),
            });
        }
    }

    plies
}

pub fn perft(game: &Game, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for ply in legal_plies(game) {
        let mut child = game.clone();
        let result = child.play(ply.from, ply.to);
        debug_assert!(
            matches!(result, ActivateResult::Move { .. } | ActivateResult::Capture { .. }),
            "cached ply {ply:?} was not played: {result:?}"
        );
        if depth == 1 {
            total.merge(leaf_counts(&ply, &result));
        } else {
            total.merge(perft(&child, depth - 1));
        }
    }

    total
}

fn leaf_counts(ply: &Ply, result: &ActivateResult) -> PerftCounts {
    let (status, captured, castled): (&MoveResultState, bool, bool) = match result {
        ActivateResult::Move {
            status, castled, ..
        } => (status, false, castled.is_some()),
        ActivateResult::Capture { status, .. } => (status, true, false),
        _ => unreachable!("perft only counts plies the controller played"),
    };

    PerftCounts {
        nodes: 1,
        captures: usize::from(captured),
        en_passant: usize::from(ply.en_passant),
        castles: usize::from(castled),
        promotions: usize::from(ply.promotion),
        checks: usize::from(status.checked),
        checkmates: usize::from(matches!(status.outcome(), GameOutcome::Checkmate { .. })),
    }
}

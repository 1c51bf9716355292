//! Turn sequencing and the click-driven selection state machine.
//!
//! A `Game` owns its `BoardState` and is driven one square at a time through
//! [`Game::activate`]: the first click on a piece of the side to move selects
//! it, the second click either plays one of its cached options or cancels.
//! Every played ply records the move, flips the turn and refreshes the board.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::chess_errors::ChessErrors;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{standard_pieces, standard_positions, RANDOM_MOVE_FALLBACK};
use crate::game_state::chess_types::{Capture, Color, PieceId, PieceKind, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::game_state::piece_positions::PiecePositions;
use crate::moves::king_moves::castling_path_files;
use crate::moves::move_descriptions::{describe_castling, describe_move};
use crate::utils::short_code_parser::parse_short_code;

/// Outcome of a single square activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivateResult {
    /// A piece was selected; its options are listed.
    Touch {
        piece: PieceId,
        moves: Vec<Square>,
        captures: Vec<Capture>,
    },
    /// The selected piece moved to an empty square. `castled` names the rook
    /// that moved with the king.
    Move {
        piece: PieceId,
        to: Square,
        castled: Option<PieceId>,
        status: MoveResultState,
    },
    /// The selected piece took `captured` and landed on `to`.
    Capture {
        piece: PieceId,
        captured: PieceId,
        to: Square,
        status: MoveResultState,
    },
    /// The selection was dropped.
    Cancel,
    /// Nothing could be selected on that square.
    Invalid,
}

/// Summary of the position after a ply, seen from the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResultState {
    pub turn: Color,
    pub checked: bool,
    pub moves: usize,
    pub captures: usize,
    /// Set for kings-only boards, boards where nobody can move, and positions
    /// where the side to move has no option while out of check.
    pub stalemate: bool,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl MoveResultState {
    pub fn outcome(&self) -> GameOutcome {
        if self.stalemate {
            GameOutcome::Stalemate
        } else if self.moves + self.captures == 0 {
            GameOutcome::Checkmate {
                winner: self.turn.opposite(),
            }
        } else {
            GameOutcome::Ongoing
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    board: BoardState,
    turn: Color,
    move_index: u32,
    move_log: Vec<String>,
    selection: Option<PieceId>,
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

impl Game {
    pub fn new(pieces: Vec<PieceInstance>, positions: PiecePositions, turn: Color) -> Self {
        Self {
            board: BoardState::new(pieces, positions),
            turn,
            move_index: 0,
            move_log: Vec::new(),
            selection: None,
        }
    }

    pub fn standard() -> Self {
        Self::new(standard_pieces(), standard_positions(), Color::Light)
    }

    /// Load a short-code position with `turn` to move.
    ///
    /// The side that just moved may not be left in check.
    pub fn from_short_code(code: &str, turn: Color) -> Result<Self, ChessErrors> {
        let setup = parse_short_code(code)?;
        let game = Self::new(setup.pieces, setup.positions, turn);
        if game.board.is_in_check(turn.opposite()) {
            return Err(ChessErrors::WaitingSideInCheck(turn.opposite()));
        }
        Ok(game)
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn move_index(&self) -> u32 {
        self.move_index
    }

    #[inline]
    pub fn move_log(&self) -> &[String] {
        &self.move_log
    }

    #[inline]
    pub fn selected(&self) -> Option<PieceId> {
        self.selection
    }

    /// Click `square`.
    pub fn activate(&mut self, square: Square) -> ActivateResult {
        if let Some(selected) = self.selection.take() {
            if self.board.positions().square(selected) == Some(square) {
                return ActivateResult::Cancel;
            }

            let options = self.board.options(selected);
            let is_move = options.moves.contains(&square);
            let capture = options.captures.iter().find(|c| c.square == square).copied();

            if is_move {
                let castled = self.move_piece(selected, square, false);
                return ActivateResult::Move {
                    piece: selected,
                    to: square,
                    castled,
                    status: self.move_result_state(),
                };
            }

            if let Some(capture) = capture {
                let Some(captured) = self.board.occupancy().get(capture.taken) else {
                    return ActivateResult::Cancel;
                };
                // Only a hand-built position can offer this; it stays a check.
                if self.board.piece(captured).kind() == PieceKind::King {
                    return ActivateResult::Cancel;
                }
                self.board.piece_capture(captured);
                self.move_piece(selected, square, true);
                return ActivateResult::Capture {
                    piece: selected,
                    captured,
                    to: square,
                    status: self.move_result_state(),
                };
            }

            // Clicking another own piece switches the selection.
            match self.board.piece_at(square) {
                Some(piece) if piece.color() == self.turn => {}
                _ => return ActivateResult::Cancel,
            }
        }

        self.touch(square)
    }

    /// Click `from`, then `to`. Returns the first result if it was not a selection.
    pub fn play(&mut self, from: Square, to: Square) -> ActivateResult {
        match self.activate(from) {
            ActivateResult::Touch { .. } => self.activate(to),
            other => other,
        }
    }

    fn touch(&mut self, square: Square) -> ActivateResult {
        let Some(piece) = self.board.piece_at(square) else {
            return ActivateResult::Invalid;
        };
        if piece.color() != self.turn {
            return ActivateResult::Invalid;
        }

        let id = piece.id();
        let options = self.board.options(id);
        if options.is_empty() {
            return ActivateResult::Invalid;
        }

        let result = ActivateResult::Touch {
            piece: id,
            moves: options.moves.clone(),
            captures: options.captures.clone(),
        };
        self.selection = Some(id);
        result
    }

    /// Apply a ply whose capture (if any) has already been taken off the board.
    fn move_piece(&mut self, id: PieceId, to: Square, capture: bool) -> Option<PieceId> {
        let castling = self.castling_rook(id, to);
        self.board.piece_mut(id).record_move(self.move_index);

        match castling {
            Some((rook, rook_to)) => {
                self.board.piece_mut(rook).record_move(self.move_index);
                self.board.piece_move(rook, rook_to);
                self.move_log.push(describe_castling(id, to));
            }
            None => self.move_log.push(describe_move(id, to, capture)),
        }

        self.move_index += 1;
        self.board.piece_move(id, to);
        self.turn = self.turn.opposite();
        self.board.refresh(self.move_index);

        castling.map(|(rook, _)| rook)
    }

    /// Rook and its destination when moving `id` to `to` is a castle.
    fn castling_rook(&self, id: PieceId, to: Square) -> Option<(PieceId, Square)> {
        let king = self.board.piece(id);
        if king.kind() != PieceKind::King
            || king.has_moved()
            || self.board.positions().square(id) != Some(id.home())
            || to.rank() != king.color().home_rank()
        {
            return None;
        }

        let rook_file = match to.file() {
            2 => 0,
            6 => 7,
            _ => return None,
        };
        let rook = to.with_file(rook_file).and_then(PieceId::new)?;
        if self.board.positions().square(rook) != Some(rook.home()) || self.board.piece(rook).has_moved() {
            return None;
        }
        let rook_to = to.with_file(castling_path_files(rook_file)[0])?;
        Some((rook, rook_to))
    }

    pub fn move_result_state(&self) -> MoveResultState {
        let own = self.board.reverse_index(self.turn);
        let moves = own.total_moves();
        let captures = own.total_captures();

        let opponent = self.board.reverse_index(self.turn.opposite());
        let nobody_can_move = moves + captures + opponent.total_moves() + opponent.total_captures() == 0;
        let only_kings = self.board.active_count(Color::Light) == 1
            && self.board.active_count(Color::Dark) == 1;
        let checked = self.board.is_in_check(self.turn);

        MoveResultState {
            turn: self.turn,
            checked,
            moves,
            captures,
            stalemate: only_kings || nobody_can_move || (moves + captures == 0 && !checked),
            code: self.board.to_short_code(),
        }
    }

    /// Square a random player would click next, using the thread RNG.
    pub fn random_move(&self) -> Square {
        self.random_move_with(&mut rand::rng())
    }

    /// Square a random player would click next.
    ///
    /// With a selection this is one of the selected piece's destinations (or
    /// its own square when it has none); otherwise it is the square of a
    /// random piece of the side to move that has options.
    pub fn random_move_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Square {
        if let Some(selected) = self.selection {
            let destinations: Vec<Square> = self.board.options(selected).destinations().collect();
            return match destinations.choose(rng) {
                Some(square) => *square,
                None => self
                    .board
                    .positions()
                    .square(selected)
                    .unwrap_or(RANDOM_MOVE_FALLBACK),
            };
        }

        let movable: Vec<Square> = self
            .board
            .positions()
            .active()
            .filter(|(id, _)| id.color() == self.turn && !self.board.options(*id).is_empty())
            .map(|(_, square)| square)
            .collect();
        movable.choose(rng).copied().unwrap_or(RANDOM_MOVE_FALLBACK)
    }
}

//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type for recoverable input failures:
//! square text that does not name a square, and short codes that cannot be
//! turned into a consistent position. Interactions with a running game never
//! produce errors; invalid clicks are reported as `Cancel` / `Invalid`
//! results instead. Broken internal invariants (a missing king, an occupancy
//! grid that disagrees with the position table) are bugs and are asserted,
//! not returned.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceId, Square};

/// Unified error type for parsing squares and short codes.
///
/// Every variant carries the offending token so callers can print precise
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A single character was not a file (`A`..`H`) or rank (`1`..`8`).
    InvalidAlgebraicChar(char),

    /// Square text was not exactly one file character and one rank character.
    InvalidAlgebraicString(String),

    /// A short-code entry did not match the grammar of its mode.
    ///
    /// Payload: the entry as written, without the separating commas.
    MalformedShortCodeEntry(String),

    /// A short-code entry referenced a square that is not a piece's home.
    UnknownPieceId(String),

    /// The same id appeared in more than one short-code entry.
    DuplicatePieceId(PieceId),

    /// Two active pieces were placed on the same square.
    SquareOccupiedTwice(Square),

    /// A short code left one side without its king.
    KingMissing(Color),

    /// The promotion marker was attached to a piece that did not start as a pawn.
    PromotedNonPawn(PieceId),

    /// The side that is not to move is already in check.
    WaitingSideInCheck(Color),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicChar(ch) => {
                write!(f, "invalid algebraic character '{ch}'")
            }
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid algebraic square: {s}"),
            ChessErrors::MalformedShortCodeEntry(entry) => {
                write!(f, "malformed short code entry: {entry}")
            }
            ChessErrors::UnknownPieceId(id) => write!(f, "unknown piece id: {id}"),
            ChessErrors::DuplicatePieceId(id) => write!(f, "piece id {id} listed twice"),
            ChessErrors::SquareOccupiedTwice(square) => {
                write!(f, "square {square} holds more than one piece")
            }
            ChessErrors::KingMissing(color) => write!(f, "{} king is not on the board", color.name()),
            ChessErrors::PromotedNonPawn(id) => {
                write!(f, "piece {id} is marked promoted but did not start as a pawn")
            }
            ChessErrors::WaitingSideInCheck(color) => {
                write!(f, "{} king is in check with {} to move", color.name(), color.opposite().name())
            }
        }
    }
}

impl Error for ChessErrors {}

//! Core value types shared by every subsystem.
//!
//! Squares are addressed by (file, rank) pairs with `0 == A` / `0 == row 1`,
//! and pieces are identified for their whole life by the square they started
//! on, so a `PieceId` is just a home square on ranks 1, 2, 7 or 8.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;

/// Side owning a piece. `Light` moves first and advances toward row 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Multiplier turning side-relative directions into board directions.
    #[inline]
    pub const fn orientation(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Zero-based rank holding this side's king and rooks at the start.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Zero-based rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }
}

/// Piece kind (color is carried separately by the owning `PieceInstance`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A board coordinate. `file` and `rank` are both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Build a square from a `0..64` grid index (`0 == A1`, `63 == H8`).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Self {
                file: (index % 8) as u8,
                rank: (index / 8) as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Step by absolute board deltas, `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Square::new(file as u8, rank as u8)
        } else {
            None
        }
    }

    /// Same rank, different file.
    #[inline]
    pub fn with_file(self, file: u8) -> Option<Self> {
        Square::new(file, self.rank)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }

    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'A' + self.file)
    }

    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'1' + self.rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::algebraic::square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::algebraic::algebraic_to_square(s)
    }
}

/// Stable identity of a piece: the square it started the game on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(Square);

impl PieceId {
    pub const LIGHT_KING: PieceId = PieceId(Square { file: 4, rank: 0 });
    pub const DARK_KING: PieceId = PieceId(Square { file: 4, rank: 7 });

    /// Only squares on ranks 1, 2, 7 and 8 name pieces.
    #[inline]
    pub const fn new(home: Square) -> Option<Self> {
        match home.rank {
            0 | 1 | 6 | 7 => Some(Self(home)),
            _ => None,
        }
    }

    #[inline]
    pub const fn home(self) -> Square {
        self.0
    }

    /// Owner implied by the home square.
    #[inline]
    pub const fn color(self) -> Color {
        if self.0.rank < 2 {
            Color::Light
        } else {
            Color::Dark
        }
    }

    /// Position of this id in the canonical ordering (A8..H8, A7..H7, A2..H2, A1..H1).
    #[inline]
    pub const fn slot(self) -> usize {
        let row = match self.0.rank {
            7 => 0,
            6 => 1,
            1 => 2,
            _ => 3,
        };
        row * 8 + self.0.file as usize
    }

    /// Inverse of [`PieceId::slot`]; `slot` must be below 32.
    #[inline]
    pub const fn from_slot(slot: usize) -> Self {
        let rank = match slot / 8 {
            0 => 7,
            1 => 6,
            2 => 1,
            _ => 0,
        };
        Self(Square {
            file: (slot % 8) as u8,
            rank,
        })
    }

    /// All 32 ids in canonical order.
    pub fn all() -> impl Iterator<Item = PieceId> {
        (0..32).map(PieceId::from_slot)
    }

    #[inline]
    pub const fn king_of(color: Color) -> Self {
        match color {
            Color::Light => Self::LIGHT_KING,
            Color::Dark => Self::DARK_KING,
        }
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PieceId {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let home: Square = s.parse()?;
        PieceId::new(home).ok_or_else(|| ChessErrors::UnknownPieceId(s.to_owned()))
    }
}

/// A capture destination together with the square whose occupant is removed.
///
/// The two only differ for en passant, where the capturing pawn lands behind
/// the pawn it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture {
    pub square: Square,
    pub taken: Square,
}

impl Capture {
    #[inline]
    pub const fn direct(square: Square) -> Self {
        Self {
            square,
            taken: square,
        }
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.square != self.taken
    }
}

/// Moves and captures available to one piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOptions {
    pub moves: Vec<Square>,
    pub captures: Vec<Capture>,
}

impl MoveOptions {
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len() + self.captures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.captures.is_empty()
    }

    /// Every destination square, quiet moves first.
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves
            .iter()
            .copied()
            .chain(self.captures.iter().map(|c| c.square))
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, PieceId, Square};

    #[test]
    fn square_index_round_trip_and_offsets() {
        let e4: Square = "E4".parse().expect("E4 should parse");
        assert_eq!(e4.index(), 28);
        assert_eq!(Square::from_index(28), Some(e4));
        assert_eq!(e4.to_string(), "E4");
        assert_eq!(e4.offset(4, 0), None);
        assert_eq!(e4.offset(-3, -4).map(|s| s.to_string()), Some("A1".to_owned()));
    }

    #[test]
    fn piece_ids_cover_four_ranks_in_canonical_order() {
        let ids: Vec<PieceId> = Square::all().filter_map(PieceId::new).collect();
        assert_eq!(ids.len(), 32);

        let mut slots: Vec<usize> = ids.iter().map(|id| id.slot()).collect();
        slots.sort_unstable();
        assert_eq!(slots, (0..32).collect::<Vec<_>>());

        assert!(PieceId::all().enumerate().all(|(slot, id)| id.slot() == slot));

        let a8: PieceId = "A8".parse().expect("A8 is an id");
        assert_eq!(a8.slot(), 0);
        assert_eq!(a8.color(), Color::Dark);
        assert_eq!(PieceId::LIGHT_KING.slot(), 28);
        assert!("E4".parse::<PieceId>().is_err());
    }
}

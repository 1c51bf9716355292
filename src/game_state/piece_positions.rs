//! Position table and occupancy grid.
//!
//! Both are fixed-size `Copy` arrays so a copy taken for move simulation
//! shares nothing with the live board.

use crate::game_state::chess_types::{PieceId, Square};

/// Per-piece square, `None` once the piece has been captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecePositions {
    squares: [Option<Square>; 32],
}

impl PiecePositions {
    pub const fn all_inactive() -> Self {
        Self {
            squares: [None; 32],
        }
    }

    #[inline]
    pub fn square(&self, id: PieceId) -> Option<Square> {
        self.squares[id.slot()]
    }

    #[inline]
    pub fn is_active(&self, id: PieceId) -> bool {
        self.squares[id.slot()].is_some()
    }

    #[inline]
    pub fn place(&mut self, id: PieceId, square: Square) {
        self.squares[id.slot()] = Some(square);
    }

    #[inline]
    pub fn deactivate(&mut self, id: PieceId) {
        self.squares[id.slot()] = None;
    }

    /// Active pieces with their squares, in canonical order.
    pub fn active(&self) -> impl Iterator<Item = (PieceId, Square)> + '_ {
        PieceId::all().filter_map(|id| self.square(id).map(|square| (id, square)))
    }
}

/// Square → occupying piece id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    grid: [Option<PieceId>; 64],
}

impl Occupancy {
    pub const fn empty() -> Self {
        Self { grid: [None; 64] }
    }

    /// Build the grid from active positions; `Err` names the first square
    /// claimed by two pieces.
    pub fn from_positions(positions: &PiecePositions) -> Result<Self, Square> {
        let mut occupancy = Self::empty();
        for (id, square) in positions.active() {
            if occupancy.get(square).is_some() {
                return Err(square);
            }
            occupancy.set(square, Some(id));
        }
        Ok(occupancy)
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<PieceId> {
        self.grid[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, id: Option<PieceId>) {
        self.grid[square.index()] = id;
    }

    /// Occupied squares with their occupants.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|id| (square, id)))
    }

    /// True when this grid and `positions` describe the same active pieces.
    pub fn matches(&self, positions: &PiecePositions) -> bool {
        positions
            .active()
            .all(|(id, square)| self.get(square) == Some(id))
            && self
                .occupied()
                .all(|(square, id)| positions.square(id) == Some(square))
    }
}

#[cfg(test)]
mod tests {
    use super::{Occupancy, PiecePositions};
    use crate::game_state::chess_rules::standard_positions;
    use crate::game_state::chess_types::{PieceId, Square};

    #[test]
    fn standard_grid_matches_positions() {
        let positions = standard_positions();
        let occupancy = Occupancy::from_positions(&positions).expect("no collisions at start");
        assert_eq!(occupancy.occupied().count(), 32);
        assert!(occupancy.matches(&positions));

        let e2: PieceId = "E2".parse().expect("id");
        assert_eq!(occupancy.get(e2.home()), Some(e2));
    }

    #[test]
    fn collisions_and_mismatches_are_detected() {
        let e4: Square = "E4".parse().expect("square");
        let mut positions = PiecePositions::all_inactive();
        positions.place("E2".parse().expect("id"), e4);
        positions.place("D7".parse().expect("id"), e4);
        assert_eq!(Occupancy::from_positions(&positions), Err(e4));

        positions.deactivate("D7".parse().expect("id"));
        let mut occupancy = Occupancy::from_positions(&positions).expect("single piece");
        assert!(occupancy.matches(&positions));
        occupancy.set(e4, None);
        assert!(!occupancy.matches(&positions));
    }
}

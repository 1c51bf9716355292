//! Board model with per-ply option caches.
//!
//! `BoardState` owns the 32 pieces, the position table and the occupancy
//! grid, plus everything derived from them: each piece's legal options, the
//! per-side reverse indices (square → pieces able to move or capture there)
//! and each king's current check set. Derived data is rebuilt from scratch by
//! [`BoardState::refresh`] after every ply.

use crate::game_state::chess_types::{Color, MoveOptions, PieceId, PieceKind, Square};
use crate::game_state::piece_instance::PieceInstance;
use crate::game_state::piece_positions::{Occupancy, PiecePositions};
use crate::move_generation::legal_move_generator::generate_legal;
use crate::move_generation::move_generator::GenerationContext;
use crate::moves::king_moves::castling_path_files;
use crate::utils::short_code_generator::generate_short_code;

/// Square → ids of one side's pieces that can reach it.
#[derive(Debug, Clone)]
pub struct ReverseIndex {
    moves: [Vec<PieceId>; 64],
    captures: [Vec<PieceId>; 64],
}

impl Default for ReverseIndex {
    fn default() -> Self {
        Self {
            moves: std::array::from_fn(|_| Vec::new()),
            captures: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl ReverseIndex {
    fn insert(&mut self, id: PieceId, options: &MoveOptions) {
        for square in &options.moves {
            self.moves[square.index()].push(id);
        }
        for capture in &options.captures {
            self.captures[capture.square.index()].push(id);
        }
    }

    #[inline]
    pub fn moves_into(&self, square: Square) -> &[PieceId] {
        &self.moves[square.index()]
    }

    #[inline]
    pub fn captures_into(&self, square: Square) -> &[PieceId] {
        &self.captures[square.index()]
    }

    pub fn total_moves(&self) -> usize {
        self.moves.iter().map(Vec::len).sum()
    }

    pub fn total_captures(&self) -> usize {
        self.captures.iter().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone)]
pub struct BoardState {
    pieces: Vec<PieceInstance>,
    positions: PiecePositions,
    occupancy: Occupancy,
    options: Vec<MoveOptions>,
    reverse: [ReverseIndex; 2],
    // [color] -> pieces currently attacking that color's king
    checks: [Vec<PieceId>; 2],
}

impl BoardState {
    /// Build a board and compute its caches for move index 0.
    ///
    /// # Panics
    /// If `pieces` is not the 32 pieces in canonical slot order, if two
    /// active pieces share a square, or if either king is inactive.
    pub fn new(pieces: Vec<PieceInstance>, positions: PiecePositions) -> Self {
        assert_eq!(pieces.len(), 32, "a board holds exactly 32 pieces");
        for (slot, piece) in pieces.iter().enumerate() {
            assert_eq!(piece.id().slot(), slot, "piece {} is out of slot order", piece.id());
        }
        for color in [Color::Light, Color::Dark] {
            let king = PieceId::king_of(color);
            assert_eq!(pieces[king.slot()].kind(), PieceKind::King, "{king} must be a king");
            assert!(positions.is_active(king), "{} king must be on the board", color.name());
        }
        let occupancy = match Occupancy::from_positions(&positions) {
            Ok(occupancy) => occupancy,
            Err(square) => panic!("square {square} holds more than one piece"),
        };

        let mut board = Self {
            pieces,
            positions,
            occupancy,
            options: vec![MoveOptions::default(); 32],
            reverse: [ReverseIndex::default(), ReverseIndex::default()],
            checks: [Vec::new(), Vec::new()],
        };
        board.refresh(0);
        board
    }

    /// Recompute every cache for the ply about to be played at `move_index`.
    pub fn refresh(&mut self, move_index: u32) {
        debug_assert!(self.is_consistent(), "occupancy and positions diverged");

        let ctx = GenerationContext {
            pieces: &self.pieces,
            occupancy: &self.occupancy,
            positions: &self.positions,
            move_index,
        };

        let mut options: Vec<MoveOptions> = self
            .pieces
            .iter()
            .map(|piece| generate_legal(&ctx, piece, &[]))
            .collect();
        let plain_index = build_reverse_index(&self.pieces, &options);

        // Castling paths are checked against the opponent's quiet moves of this ply.
        for color in [Color::Light, Color::Dark] {
            let king = PieceId::king_of(color);
            let castles = self.castling_candidates(king, &plain_index[color.opposite().index()]);
            if !castles.is_empty() {
                options[king.slot()] = generate_legal(&ctx, ctx.piece(king), &castles);
            }
        }

        let reverse = build_reverse_index(&self.pieces, &options);
        let checks = [Color::Light, Color::Dark].map(|color| {
            let king_square = self.king_square(color);
            reverse[color.opposite().index()]
                .captures_into(king_square)
                .iter()
                .copied()
                .filter(|id| self.positions.is_active(*id))
                .collect()
        });

        self.options = options;
        self.reverse = reverse;
        self.checks = checks;
    }

    /// Castling destinations currently open to `king`.
    pub fn king_castles(&self, king: PieceId) -> Vec<Square> {
        self.castling_candidates(king, &self.reverse[king.color().opposite().index()])
    }

    fn castling_candidates(&self, king: PieceId, opponent: &ReverseIndex) -> Vec<Square> {
        let mut castles = Vec::new();
        if self.piece(king).has_moved() || self.positions.square(king) != Some(king.home()) {
            return castles;
        }

        let rank = king.color().home_rank();
        for rook_file in [0u8, 7] {
            let Some(rook) = Square::new(rook_file, rank).and_then(PieceId::new) else {
                continue;
            };
            if self.positions.square(rook) != Some(rook.home()) || self.piece(rook).has_moved() {
                continue;
            }

            let path = castling_path_files(rook_file);
            let clear = path.iter().filter_map(|&file| Square::new(file, rank)).all(|square| {
                self.occupancy.get(square).is_none() && opponent.moves_into(square).is_empty()
            });
            if let Some(destination) = Square::new(path[1], rank).filter(|_| clear) {
                castles.push(destination);
            }
        }

        castles
    }

    /// Take `id` off the board.
    pub fn piece_capture(&mut self, id: PieceId) {
        assert_ne!(self.piece(id).kind(), PieceKind::King, "kings are never captured");
        if let Some(square) = self.positions.square(id) {
            self.occupancy.set(square, None);
        }
        self.positions.deactivate(id);
    }

    /// Relocate `id`, promoting a pawn that reaches its far rank to a queen.
    pub fn piece_move(&mut self, id: PieceId, to: Square) {
        debug_assert!(
            self.occupancy.get(to).filter(|occupant| *occupant != id).is_none(),
            "{to} must be cleared before {id} moves there"
        );
        if let Some(from) = self.positions.square(id) {
            self.occupancy.set(from, None);
        }
        self.occupancy.set(to, Some(id));
        self.positions.place(id, to);

        let piece = &mut self.pieces[id.slot()];
        if piece.kind() == PieceKind::Pawn && to.rank() == piece.color().promotion_rank() {
            piece.promote(PieceKind::Queen);
        }
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &PieceInstance {
        &self.pieces[id.slot()]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut PieceInstance {
        &mut self.pieces[id.slot()]
    }

    #[inline]
    pub fn pieces(&self) -> &[PieceInstance] {
        &self.pieces
    }

    #[inline]
    pub fn positions(&self) -> &PiecePositions {
        &self.positions
    }

    #[inline]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&PieceInstance> {
        self.occupancy.get(square).map(|id| self.piece(id))
    }

    /// Cached legal options of `id` (empty for captured pieces).
    #[inline]
    pub fn options(&self, id: PieceId) -> &MoveOptions {
        &self.options[id.slot()]
    }

    #[inline]
    pub fn reverse_index(&self, color: Color) -> &ReverseIndex {
        &self.reverse[color.index()]
    }

    /// Pieces giving check to `color`'s king.
    #[inline]
    pub fn checks(&self, color: Color) -> &[PieceId] {
        &self.checks[color.index()]
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        !self.checks[color.index()].is_empty()
    }

    pub fn king_square(&self, color: Color) -> Square {
        match self.positions.square(PieceId::king_of(color)) {
            Some(square) => square,
            None => panic!("{} king left the board", color.name()),
        }
    }

    pub fn active_count(&self, color: Color) -> usize {
        self.positions.active().filter(|(id, _)| id.color() == color).count()
    }

    /// True when the occupancy grid and the active positions agree.
    pub fn is_consistent(&self) -> bool {
        self.occupancy.matches(&self.positions)
    }

    pub fn to_short_code(&self) -> String {
        generate_short_code(self)
    }
}

fn build_reverse_index(pieces: &[PieceInstance], options: &[MoveOptions]) -> [ReverseIndex; 2] {
    let mut reverse = [ReverseIndex::default(), ReverseIndex::default()];
    for (piece, piece_options) in pieces.iter().zip(options) {
        reverse[piece.color().index()].insert(piece.id(), piece_options);
    }
    reverse
}

#[cfg(test)]
mod tests {
    use super::BoardState;
    use crate::game_state::chess_rules::{standard_pieces, standard_positions};
    use crate::game_state::chess_types::{Color, PieceId, PieceKind, Square};
    use crate::game_state::piece_instance::PieceInstance;
    use crate::game_state::piece_positions::PiecePositions;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn id(text: &str) -> PieceId {
        text.parse().expect("test id should parse")
    }

    /// Board with only the listed pieces; pieces placed away from home are
    /// marked as having moved once.
    fn sparse_board(placements: &[(&str, &str)]) -> BoardState {
        let mut pieces: Vec<PieceInstance> = standard_pieces();
        let mut positions = PiecePositions::all_inactive();
        for (piece, square) in placements {
            let piece_id = id(piece);
            let square = sq(square);
            positions.place(piece_id, square);
            if square != piece_id.home() {
                pieces[piece_id.slot()].set_synthetic_moves(1);
            }
        }
        BoardState::new(pieces, positions)
    }

    #[test]
    fn standard_board_offers_twenty_moves_per_side() {
        let board = BoardState::new(standard_pieces(), standard_positions());
        for color in [Color::Light, Color::Dark] {
            let index = board.reverse_index(color);
            assert_eq!(index.total_moves(), 20);
            assert_eq!(index.total_captures(), 0);
            assert!(!board.is_in_check(color));
        }
        assert!(board.is_consistent());
        assert_eq!(board.reverse_index(Color::Light).moves_into(sq("F3")).len(), 2);
        assert!(board.king_castles(PieceId::LIGHT_KING).is_empty());
    }

    #[test]
    fn open_back_rank_offers_both_castles() {
        let board = sparse_board(&[("E1", "E1"), ("A1", "A1"), ("H1", "H1"), ("E8", "E8")]);
        assert_eq!(board.king_castles(PieceId::LIGHT_KING), vec![sq("C1"), sq("G1")]);

        let king = board.options(PieceId::LIGHT_KING);
        assert!(king.moves.contains(&sq("C1")));
        assert!(king.moves.contains(&sq("G1")));
    }

    #[test]
    fn attacked_or_blocked_path_prevents_castling() {
        // Dark rook on F5 sweeps F1, closing the king side only.
        let board = sparse_board(&[
            ("E1", "E1"),
            ("A1", "A1"),
            ("H1", "H1"),
            ("E8", "E8"),
            ("A8", "F5"),
        ]);
        assert_eq!(board.king_castles(PieceId::LIGHT_KING), vec![sq("C1")]);

        // A knight still on B1 blocks the queen side.
        let board = sparse_board(&[
            ("E1", "E1"),
            ("A1", "A1"),
            ("B1", "B1"),
            ("H1", "H1"),
            ("E8", "E8"),
        ]);
        assert_eq!(board.king_castles(PieceId::LIGHT_KING), vec![sq("G1")]);
    }

    #[test]
    fn moved_rook_or_king_loses_castling() {
        let mut board = sparse_board(&[("E1", "E1"), ("A1", "A1"), ("H1", "H1"), ("E8", "E8")]);
        board.piece_mut(id("H1")).record_move(0);
        board.refresh(1);
        assert_eq!(board.king_castles(PieceId::LIGHT_KING), vec![sq("C1")]);

        board.piece_mut(PieceId::LIGHT_KING).record_move(2);
        board.refresh(3);
        assert!(board.king_castles(PieceId::LIGHT_KING).is_empty());
        assert!(!board.options(PieceId::LIGHT_KING).moves.contains(&sq("C1")));
    }

    #[test]
    fn check_set_lists_attackers() {
        let board = sparse_board(&[("E1", "E1"), ("E8", "E8"), ("D1", "B5"), ("G8", "F6")]);
        // Queen on B5 checks E8 along the diagonal through C6 and D7.
        assert_eq!(board.checks(Color::Dark), &[id("D1")]);
        assert!(board.is_in_check(Color::Dark));
        assert!(!board.is_in_check(Color::Light));

        // The knight may only interpose on D7.
        let knight = board.options(id("G8"));
        assert_eq!(knight.moves, vec![sq("D7")]);
        assert!(knight.captures.is_empty());
    }

    #[test]
    fn piece_move_and_capture_keep_grid_consistent() {
        let mut board = BoardState::new(standard_pieces(), standard_positions());
        board.piece_move(id("E2"), sq("E4"));
        assert_eq!(board.piece_at(sq("E4")).map(|p| p.id()), Some(id("E2")));
        assert!(board.piece_at(sq("E2")).is_none());

        board.piece_capture(id("D7"));
        assert!(!board.positions().is_active(id("D7")));
        assert!(board.piece_at(sq("D7")).is_none());
        assert!(board.is_consistent());
        assert_eq!(board.active_count(Color::Dark), 15);
    }

    #[test]
    fn pawn_reaching_far_rank_becomes_queen() {
        let mut board = sparse_board(&[("E1", "E1"), ("E8", "H8"), ("A2", "A7"), ("H7", "H2")]);
        board.piece_move(id("A2"), sq("A8"));
        board.piece_move(id("H7"), sq("H1"));
        board.refresh(1);

        for promoted in ["A2", "H7"] {
            let piece = board.piece(id(promoted));
            assert_eq!(piece.kind(), PieceKind::Queen);
            assert!(piece.is_promoted());
        }
        assert!(!board.options(id("A2")).is_empty());
    }

    #[test]
    #[should_panic(expected = "kings are never captured")]
    fn capturing_a_king_is_a_bug() {
        let mut board = BoardState::new(standard_pieces(), standard_positions());
        board.piece_capture(PieceId::DARK_KING);
    }
}

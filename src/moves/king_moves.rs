//! King step geometry and castling file layout.

/// N, NE, E, SE, S, SW, W, NW.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Files that must be empty and unattacked for a rook on `rook_file`,
/// listed so that index 1 is the king's destination file.
pub const fn castling_path_files(rook_file: u8) -> &'static [u8] {
    if rook_file == 0 {
        // D, C, B
        &[3, 2, 1]
    } else {
        // F, G
        &[5, 6]
    }
}

#[cfg(test)]
mod tests {
    use super::{castling_path_files, KING_OFFSETS};
    use crate::game_state::chess_types::Square;

    fn in_board(from: Square) -> impl Iterator<Item = Square> {
        KING_OFFSETS
            .iter()
            .filter_map(move |&(d_rank, d_file)| from.offset(d_rank, d_file))
    }

    #[test]
    fn king_targets_count_by_region() {
        let d4: Square = "D4".parse().expect("D4 should parse");
        let a1: Square = "A1".parse().expect("A1 should parse");
        let e1: Square = "E1".parse().expect("E1 should parse");
        assert_eq!(in_board(d4).count(), 8);
        assert_eq!(in_board(a1).count(), 3);
        assert_eq!(in_board(e1).count(), 5);
    }

    #[test]
    fn castling_destination_is_second_path_file() {
        assert_eq!(castling_path_files(0)[1], 2);
        assert_eq!(castling_path_files(7)[1], 6);
    }
}


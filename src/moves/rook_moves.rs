//! Orthogonal ray directions.

/// N, E, S, W as `(row_delta, col_delta)`.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

#[cfg(test)]
mod tests {
    use super::ROOK_DIRECTIONS;
    use crate::game_state::chess_types::Square;

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        let d4: Square = "D4".parse().expect("D4 should parse");
        let mut count = 0;
        for (d_rank, d_file) in ROOK_DIRECTIONS {
            let mut step = 1;
            while d4.offset(d_rank * step, d_file * step).is_some() {
                count += 1;
                step += 1;
            }
        }
        assert_eq!(count, 14);
    }
}

//! Diagonal ray directions.

/// NW, NE, SW, SE as `(row_delta, col_delta)`.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

#[cfg(test)]
mod tests {
    use super::BISHOP_DIRECTIONS;
    use crate::game_state::chess_types::Square;

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        let d4: Square = "D4".parse().expect("D4 should parse");
        let mut count = 0;
        for (d_rank, d_file) in BISHOP_DIRECTIONS {
            let mut step = 1;
            while d4.offset(d_rank * step, d_file * step).is_some() {
                count += 1;
                step += 1;
            }
        }
        assert_eq!(count, 13);
    }
}

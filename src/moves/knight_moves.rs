//! Knight jump geometry.
//!
//! Offsets are `(row_delta, col_delta)` pairs; the move generator scales them
//! by the owner's orientation before stepping.

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

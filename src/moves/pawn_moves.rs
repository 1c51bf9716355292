//! Pawn step geometry, relative to the owner's forward direction.

pub const PAWN_SINGLE_STEP: (i8, i8) = (1, 0);
pub const PAWN_DOUBLE_STEP: (i8, i8) = (2, 0);

/// Diagonal capture offsets paired with the lateral square an en-passant
/// victim would stand on.
pub const PAWN_CAPTURE_PAIRS: [((i8, i8), (i8, i8)); 2] = [((1, -1), (0, -1)), ((1, 1), (0, 1))];

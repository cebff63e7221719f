//! Unbounded offset sets for every piece, before any clipping to the board.
//!
//! Non-sliding pieces apply each offset once, sliding pieces repeat each unit
//! step until the ray leaves the window.

use crate::direction::{
    EAST, NORTH, NORTH_EAST, NORTH_WEST, SOUTH, SOUTH_EAST, SOUTH_WEST, WEST,
};

/// Both forward and backward diagonals: the attacker's colour decides which
/// half applies, and that is left to the consumer.
pub const PAWN_ATTACKS: [i16; 4] = [NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST];

/// Single and double pushes for either colour plus the capture diagonals.
pub const PAWN_MOVES: [i16; 8] = [
    NORTH,
    SOUTH,
    2 * NORTH,
    2 * SOUTH,
    NORTH_EAST,
    NORTH_WEST,
    SOUTH_EAST,
    SOUTH_WEST,
];

pub const KNIGHT_JUMPS: [i16; 8] = [
    2 * NORTH + EAST,
    2 * NORTH + WEST,
    2 * EAST + NORTH,
    2 * EAST + SOUTH,
    2 * SOUTH + EAST,
    2 * SOUTH + WEST,
    2 * WEST + NORTH,
    2 * WEST + SOUTH,
];

pub const BISHOP_STEPS: [i16; 4] = [NORTH_EAST, SOUTH_EAST, SOUTH_WEST, NORTH_WEST];

pub const ROOK_STEPS: [i16; 4] = [NORTH, EAST, SOUTH, WEST];

pub const QUEEN_STEPS: [i16; 8] = [
    NORTH, EAST, SOUTH, WEST, NORTH_EAST, SOUTH_EAST, SOUTH_WEST, NORTH_WEST,
];

pub const KING_STEPS: [i16; 8] = QUEEN_STEPS;

/// King steps plus the two-square castling hops.
pub const KING_MOVES: [i16; 10] = [
    NORTH,
    EAST,
    SOUTH,
    WEST,
    NORTH_EAST,
    SOUTH_EAST,
    SOUTH_WEST,
    NORTH_WEST,
    2 * EAST,
    2 * WEST,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn knight_jumps_are_two_plus_one_perpendicular() {
        for jump in KNIGHT_JUMPS {
            let found = Direction::ORTHOGONALS.iter().any(|a| {
                Direction::ORTHOGONALS.iter().any(|b| {
                    a.offset().abs() != b.offset().abs() && a.times(2) + b.offset() == jump
                })
            });
            assert!(found, "{jump} is not a knight jump");
        }
        let mut sorted = KNIGHT_JUMPS;
        sorted.sort();
        assert!(sorted.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn queen_is_rook_and_bishop() {
        for step in QUEEN_STEPS {
            assert!(ROOK_STEPS.contains(&step) ^ BISHOP_STEPS.contains(&step));
        }
        assert_eq!(QUEEN_STEPS.len(), ROOK_STEPS.len() + BISHOP_STEPS.len());
    }

    #[test]
    fn line_steps_follow_the_geometry() {
        assert_eq!(BISHOP_STEPS, Direction::DIAGONALS.map(|d| d.offset()));
        assert_eq!(ROOK_STEPS, Direction::ORTHOGONALS.map(|d| d.offset()));
    }

    #[test]
    fn sliding_steps_are_unit_directions() {
        for step in QUEEN_STEPS.iter().chain(&KING_STEPS) {
            assert!(Direction::from_offset(*step).is_some());
        }
    }

    #[test]
    fn king_moves_extend_king_steps() {
        assert_eq!(KING_MOVES[..8], KING_STEPS);
        assert!(KING_MOVES.contains(&Direction::East.times(2)));
        assert!(KING_MOVES.contains(&Direction::West.times(2)));
    }
}

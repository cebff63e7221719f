//! Square-to-square lookups over the generated 0x88 tables.
//!
//! Both tables are indexed by `to - from + 0x77`.

mod generated {
    use util::{direction::*, piece::MovePiece};

    include!(concat!(env!("OUT_DIR"), "/lookup.rs"));
}

pub use generated::{ATTACKS, ATTACK_DIRECTIONS, MOVES, MOVE_DIRECTIONS};

use util::{
    direction::Direction,
    piece::{AttackPiece, MovePiece},
    square::Square,
    table::ORIGIN,
};

pub const fn table_index(from: &Square, to: &Square) -> usize {
    (*to as i16 - *from as i16 + ORIGIN as i16) as usize
}

/// Whether `piece` on `from` attacks `to` on an empty board. Pawns match both
/// diagonals, callers pick the half that fits the pawn's colour.
pub fn attacks(piece: AttackPiece, from: &Square, to: &Square) -> bool {
    ATTACKS[table_index(from, to)] & piece.bit() != 0
}

pub fn attack_direction(from: &Square, to: &Square) -> Option<Direction> {
    Direction::from_offset(ATTACK_DIRECTIONS[table_index(from, to)])
}

pub fn can_move(piece: MovePiece, from: &Square, to: &Square) -> bool {
    MOVES[table_index(from, to)] & piece.bit() != 0
}

pub fn move_direction(from: &Square, to: &Square) -> Option<Direction> {
    Direction::from_offset(MOVE_DIRECTIONS[table_index(from, to)])
}

/// Squares strictly between `from` and `to`, empty when they share no line.
pub fn squares_between(from: &Square, to: &Square) -> Vec<Square> {
    let mut between = Vec::new();
    let Some(direction) = attack_direction(from, to) else {
        return between;
    };
    let mut curr = *from;
    while let Some(sq) = curr.increment_checked(direction.offset()) {
        if sq == *to {
            break;
        }
        between.push(sq);
        curr = sq;
    }
    between
}

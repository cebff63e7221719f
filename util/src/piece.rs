//! The two piece numberings.
//!
//! The attack table and the move table were generated against different
//! consumer enums, so the bit positions differ. Keep them apart.

use std::fmt::Debug;

use crate::reach;

/// How a table is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Every entry, row by row.
    Dense,
    /// Only non-zero entries, keyed by symbolic offsets.
    Sparse,
}

pub trait PieceKind: Debug + Copy + PartialEq + 'static {
    /// Name of the reachability table this numbering feeds.
    const TABLE: &'static str;
    /// Path of the enum as written in generated Rust source.
    const TYPE_NAME: &'static str;
    const LAYOUT: Layout;
    const ALL: &'static [Self];
    const NON_SLIDING: &'static [Self];
    const SLIDING: &'static [Self];

    fn offsets(&self) -> &'static [i16];
    fn bit(&self) -> u8;
    fn name(&self) -> &'static str;

    fn is_sliding(&self) -> bool {
        Self::SLIDING.contains(self)
    }
}

/// Numbering used by the attack table. Bit 0 belongs to `None` and is never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AttackPiece {
    None = 0,
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl AttackPiece {
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Pawn => "PAWN",
            Self::Knight => "KNIGHT",
            Self::Bishop => "BISHOP",
            Self::Rook => "ROOK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
        }
    }
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as PieceKind>::ALL
            .iter()
            .copied()
            .find(|p| p.name() == name)
    }
}

impl PieceKind for AttackPiece {
    const TABLE: &'static str = "attacks";
    const TYPE_NAME: &'static str = "AttackPiece";
    const LAYOUT: Layout = Layout::Dense;
    const ALL: &'static [Self] = &[
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];
    const NON_SLIDING: &'static [Self] = &[Self::Pawn, Self::Knight, Self::King];
    const SLIDING: &'static [Self] = &[Self::Bishop, Self::Rook, Self::Queen];

    fn offsets(&self) -> &'static [i16] {
        match self {
            Self::None => &[],
            Self::Pawn => &reach::PAWN_ATTACKS,
            Self::Knight => &reach::KNIGHT_JUMPS,
            Self::Bishop => &reach::BISHOP_STEPS,
            Self::Rook => &reach::ROOK_STEPS,
            Self::Queen => &reach::QUEEN_STEPS,
            Self::King => &reach::KING_STEPS,
        }
    }
    fn bit(&self) -> u8 {
        AttackPiece::bit(*self)
    }
    fn name(&self) -> &'static str {
        AttackPiece::name(*self)
    }
}

/// Numbering used by the move table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MovePiece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl MovePiece {
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pawn => "PAWN",
            Self::Knight => "KNIGHT",
            Self::Bishop => "BISHOP",
            Self::Rook => "ROOK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
        }
    }
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as PieceKind>::ALL
            .iter()
            .copied()
            .find(|p| p.name() == name)
    }
}

impl PieceKind for MovePiece {
    const TABLE: &'static str = "moves";
    const TYPE_NAME: &'static str = "MovePiece";
    const LAYOUT: Layout = Layout::Sparse;
    const ALL: &'static [Self] = &[
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];
    const NON_SLIDING: &'static [Self] = &[Self::Pawn, Self::Knight, Self::King];
    const SLIDING: &'static [Self] = &[Self::Bishop, Self::Rook, Self::Queen];

    fn offsets(&self) -> &'static [i16] {
        match self {
            Self::Pawn => &reach::PAWN_MOVES,
            Self::Knight => &reach::KNIGHT_JUMPS,
            Self::Bishop => &reach::BISHOP_STEPS,
            Self::Rook => &reach::ROOK_STEPS,
            Self::Queen => &reach::QUEEN_STEPS,
            Self::King => &reach::KING_MOVES,
        }
    }
    fn bit(&self) -> u8 {
        MovePiece::bit(*self)
    }
    fn name(&self) -> &'static str {
        MovePiece::name(*self)
    }
}

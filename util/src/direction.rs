use std::fmt::Display;

use crate::helper::impl_conv;

pub const NORTH: i16 = 16;
pub const EAST: i16 = 1;
pub const SOUTH: i16 = -NORTH;
pub const WEST: i16 = -EAST;

pub const NORTH_EAST: i16 = NORTH + EAST;
pub const SOUTH_EAST: i16 = SOUTH + EAST;
pub const SOUTH_WEST: i16 = SOUTH + WEST;
pub const NORTH_WEST: i16 = NORTH + WEST;

/// One of the eight unit steps on the 0x88 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];
    pub const ORTHOGONALS: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];
    pub const DIAGONALS: [Self; 4] = [
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    pub const fn times(&self, k: i16) -> i16 {
        k * self.offset()
    }

    pub const fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::NorthEast => Self::SouthWest,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
            Self::NorthWest => Self::SouthEast,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
            Self::NorthEast => "NORTH_EAST",
            Self::SouthEast => "SOUTH_EAST",
            Self::SouthWest => "SOUTH_WEST",
            Self::NorthWest => "NORTH_WEST",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// All directions ordered by decreasing step size, keeping declaration
    /// order among equal sizes. Diagonals come before orthogonals.
    pub fn by_magnitude() -> [Self; 8] {
        let mut dirs = Self::ALL;
        dirs.sort_by_key(|d| -d.offset().abs());
        dirs
    }
}

impl_conv! {
    Direction: i16, from_offset / offset {
        16 => North,
        1 => East,
        -16 => South,
        -1 => West,
        17 => NorthEast,
        -15 => SouthEast,
        -17 => SouthWest,
        15 => NorthWest,
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

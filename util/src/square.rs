use std::fmt::Display;

use crate::{error::TableError, helper::impl_conv};

chess_macro::make_ranks_files_squares!();

impl Square {
    pub fn from_str(str: &str) -> Result<Self, TableError> {
        let mut chars = str.chars();

        let (c1, c2) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c1), Some(c2), None) => (c1, c2),
            _ => {
                return Err(TableError::Parse(format!(
                    "'{str}' cannot be used to construct a square"
                )))
            }
        };

        let file = match File::from_char(c1) {
            Some(f) => f,
            None => {
                return Err(TableError::Parse(format!(
                    "Char '{c1}' cannot be used to create a file"
                )))
            }
        };

        let rank = match Rank::from_char(c2) {
            Some(r) => r,
            None => {
                return Err(TableError::Parse(format!(
                    "Char '{c2}' cannot be used to create a rank"
                )))
            }
        };

        Ok(Self::from_rank_file(rank, file))
    }
    /// Off-board indices have bit 3 of either nibble set.
    pub const fn is_valid_index(idx: u8) -> bool {
        idx & 0x88 == 0
    }
    pub const fn rank(&self) -> Rank {
        Rank::from_u8((*self as u8) >> 4)
    }
    pub const fn file(&self) -> File {
        File::from_u8((*self as u8) & 0x0F)
    }
    pub const fn from_rank_file(rank: Rank, file: File) -> Self {
        Self::from_u8((rank as u8) << 4 | file as u8)
    }
    pub const fn idx(&self) -> usize {
        *self as usize
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_char())
    }
}

impl_conv! {
    Rank: char, from_char / to_char {
        '1' => First,
        '2' => Second,
        '3' => Third,
        '4' => Fourth,
        '5' => Fifth,
        '6' => Sixth,
        '7' => Seventh,
        '8' => Eighth,
    }
}

impl_conv! {
    File: char, from_char / to_char {
        'a' => A,
        'b' => B,
        'c' => C,
        'd' => D,
        'e' => E,
        'f' => F,
        'g' => G,
        'h' => H,
    }
}

use std::marker::PhantomData;

use crate::{error::TableError, piece::PieceKind};

/// Flat index of the reference square. Puts the origin in the middle of the
/// 16x16 window so every relative offset on a real board fits.
pub const ORIGIN: usize = 0x77;
pub const LEN: usize = 256;

/// Index of `offset` relative to the origin, if it lies inside the window.
pub const fn relative_index(offset: i16) -> Option<usize> {
    match offset.checked_add(ORIGIN as i16) {
        Some(idx) if idx >= 0 && idx < LEN as i16 => Some(idx as usize),
        _ => None,
    }
}

/// The 0x88 padding guard. Only the upper bound of each nibble is checked:
/// a ray walking downwards leaves the buffer before it can wrap.
pub const fn in_window(idx: i16) -> bool {
    idx >= 0 && idx < LEN as i16 && idx & 0x0F != 0x0F && idx >> 4 != 0x0F
}

/// Reachability and direction tables for one piece numbering.
#[derive(Debug, Clone, PartialEq)]
pub struct Tables<P: PieceKind> {
    reach: [u8; LEN],
    directions: [i16; LEN],
    piece: PhantomData<P>,
}

impl<P: PieceKind> Tables<P> {
    pub fn build() -> Result<Self, TableError> {
        let mut tables = Self {
            reach: [0; LEN],
            directions: [0; LEN],
            piece: PhantomData,
        };

        for piece in P::NON_SLIDING {
            for offset in piece.offsets() {
                let idx = relative_index(*offset).ok_or(TableError::OffsetOutOfRange(*offset))?;
                tables.reach[idx] |= piece.bit();
            }
        }

        for piece in P::SLIDING {
            for step in piece.offsets() {
                if *step == 0 {
                    return Err(TableError::OffsetOutOfRange(*step));
                }
                let mut curr = *step + ORIGIN as i16;
                while in_window(curr) {
                    let idx = curr as usize;
                    tables.reach[idx] |= piece.bit();
                    // first sliding writer keeps the square
                    if tables.directions[idx] == 0 {
                        tables.directions[idx] = *step;
                    }
                    curr += *step;
                }
            }
        }

        Ok(tables)
    }

    pub fn reach(&self) -> &[u8; LEN] {
        &self.reach
    }

    pub fn directions(&self) -> &[i16; LEN] {
        &self.directions
    }

    /// Bitmask of pieces that reach `offset`, 0 outside the window.
    pub fn reach_at(&self, offset: i16) -> u8 {
        relative_index(offset).map_or(0, |idx| self.reach[idx])
    }

    pub fn direction_at(&self, offset: i16) -> i16 {
        relative_index(offset).map_or(0, |idx| self.directions[idx])
    }

    pub fn reaches(&self, offset: i16, piece: P) -> bool {
        self.reach_at(offset) & piece.bit() != 0
    }
}

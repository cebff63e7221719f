//! Renders relative offsets as sums of named directions, e.g. `2 * NORTH + EAST`,
//! so generated tables stay readable and constant-foldable.

use std::fmt::Display;

use crate::{
    direction::{Direction, NORTH},
    error::TableError,
    table::ORIGIN,
};

/// Coefficients at or above this are not a plausible distance on the board.
const MAX_DISTANCE: i16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub coefficient: i16,
    pub direction: Direction,
}

impl Term {
    pub const fn value(&self) -> i16 {
        self.direction.times(self.coefficient)
    }

    fn render(&self, prefix: &str) -> String {
        match self.coefficient {
            1 => format!("{prefix}{}", self.direction.name()),
            k => format!("{k} * {prefix}{}", self.direction.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetExpr {
    Zero,
    Single(Term),
    Split { horizontal: Term, vertical: Term },
}

impl OffsetExpr {
    pub const fn value(&self) -> i16 {
        match self {
            Self::Zero => 0,
            Self::Single(term) => term.value(),
            Self::Split {
                horizontal,
                vertical,
            } => horizontal.value() + vertical.value(),
        }
    }

    /// `prefix` is glued in front of every direction name.
    pub fn render(&self, prefix: &str) -> String {
        match self {
            Self::Zero => "0".to_owned(),
            Self::Single(term) => term.render(prefix),
            Self::Split {
                horizontal,
                vertical,
            } => format!("{} + {}", horizontal.render(prefix), vertical.render(prefix)),
        }
    }
}

impl Display for OffsetExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(""))
    }
}

/// Finds the shortest rendering of `offset`.
///
/// A single direction is tried first, largest step first, so diagonals win
/// over orthogonals. Everything else is split into a file part and a rank
/// part on the 16-wide board.
pub fn encode(offset: i16) -> Result<OffsetExpr, TableError> {
    if offset.unsigned_abs() > ORIGIN as u16 {
        return Err(TableError::OffsetOutOfRange(offset));
    }
    if offset == 0 {
        return Ok(OffsetExpr::Zero);
    }

    for direction in Direction::by_magnitude() {
        let step = direction.offset();
        if offset % step != 0 {
            continue;
        }
        let coefficient = offset / step;
        if 0 < coefficient && coefficient < MAX_DISTANCE {
            return Ok(OffsetExpr::Single(Term {
                coefficient,
                direction,
            }));
        }
    }

    let mut horizontal = offset.rem_euclid(NORTH);
    let mut vertical = offset.div_euclid(NORTH);
    // past the middle of the row the square sits to the west on the next rank
    if horizontal >= MAX_DISTANCE {
        horizontal -= NORTH;
        vertical += 1;
    }

    Ok(OffsetExpr::Split {
        horizontal: Term {
            coefficient: horizontal.abs(),
            direction: if horizontal > 0 {
                Direction::East
            } else {
                Direction::West
            },
        },
        vertical: Term {
            coefficient: vertical.abs(),
            direction: if vertical > 0 {
                Direction::North
            } else {
                Direction::South
            },
        },
    })
}

/// Reads a rendering produced by [`OffsetExpr::render`] back into an offset.
pub fn decode(text: &str, prefix: &str) -> Result<i16, TableError> {
    let text = text.trim();
    if text == "0" {
        return Ok(0);
    }

    text.split(" + ").try_fold(0, |acc, term| {
        let (coefficient, name) = match term.split_once(" * ") {
            Some((k, name)) => (
                k.trim().parse::<i16>().map_err(|_| {
                    TableError::Parse(format!("'{k}' is not a coefficient in '{text}'"))
                })?,
                name.trim(),
            ),
            None => (1, term.trim()),
        };
        let direction = name
            .strip_prefix(prefix)
            .and_then(Direction::from_name)
            .ok_or_else(|| TableError::Parse(format!("'{name}' is not a direction in '{text}'")))?;
        Ok(acc + direction.times(coefficient))
    })
}

//! RegionCode: integer address of one cell of the 8x4 field grid.
//!
//! ## Axes (home-team perspective, for both teams)
//! - x: column 0..=7, increases toward the home attacking direction ("forward")
//! - y: row 0..=3, increases toward the "left" touchline
//!
//! Navigation never wraps: a step off the edge of the grid returns the same
//! cell.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RegionError, Result};

/// Grid cell address. Always home-team perspective.
///
/// Fields are public so codes can be written as literals for grid-relative
/// reasoning; such codes are not validated. Use [`RegionCode::try_new`] for
/// checked construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RegionCode {
    pub x: u8,
    pub y: u8,
}

impl RegionCode {
    /// Columns along the field length.
    pub const COLS: u8 = 8;
    /// Rows across the field width.
    pub const ROWS: u8 = 4;

    const LAST_COL: u8 = Self::COLS - 1;
    const LAST_ROW: u8 = Self::ROWS - 1;

    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn try_new(x: u8, y: u8) -> Result<Self> {
        let code = Self { x, y };
        if code.is_in_grid() {
            Ok(code)
        } else {
            Err(RegionError::OutOfGrid { x, y })
        }
    }

    #[inline]
    pub const fn is_in_grid(self) -> bool {
        self.x < Self::COLS && self.y < Self::ROWS
    }

    /// Next cell toward the attack, or `self` in the last column.
    pub fn forwards(self) -> Self {
        if self.x == Self::LAST_COL {
            return self;
        }
        Self { x: self.x.saturating_add(1), y: self.y }
    }

    /// Next cell toward the own goal, or `self` in the first column.
    pub fn backwards(self) -> Self {
        if self.x == 0 {
            return self;
        }
        Self { x: self.x - 1, y: self.y }
    }

    /// Next cell toward the left touchline (higher y), or `self` in the last row.
    ///
    /// Same direction for both teams: codes are already home perspective.
    pub fn left(self) -> Self {
        if self.y == Self::LAST_ROW {
            return self;
        }
        Self { x: self.x, y: self.y.saturating_add(1) }
    }

    /// Next cell toward the right touchline (lower y), or `self` in the first row.
    pub fn right(self) -> Self {
        if self.y == 0 {
            return self;
        }
        Self { x: self.x, y: self.y - 1 }
    }

    /// Chebyshev distance: the number of king moves between two cells.
    pub fn chess_distance_to(self, other: Self) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// All 32 cells, column by column from the home goal.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COLS).flat_map(|x| (0..Self::ROWS).map(move |y| Self { x, y }))
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

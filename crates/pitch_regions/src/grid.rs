//! RegionGrid: maps field points to region codes and back.
//!
//! Cells are half-open: a point on the boundary between two columns belongs
//! to the forward one. Points on (or past) the far goal line or the left
//! touchline clamp into the last column/row.
//!
//! Negative home-perspective coordinates are rejected with
//! [`RegionError::OutsideCourt`] instead of producing a code off the grid.
//!
//! Cell-to-point conversions saturate at the `i32` range for literal codes
//! far outside the grid.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::court::CourtConfig;
use crate::error::{RegionError, Result};
use crate::region::RegionCode;
use crate::types::{PlayerRegion, Point, TeamPlace};

/// 8x4 region grid over one court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegionGrid {
    court: CourtConfig,
}

impl RegionGrid {
    pub fn new(court: CourtConfig) -> Self {
        Self { court }
    }

    #[inline]
    pub fn court(&self) -> CourtConfig {
        self.court
    }

    #[inline]
    pub fn region_width(&self) -> i32 {
        self.court.region_width()
    }

    #[inline]
    pub fn region_height(&self) -> i32 {
        self.court.region_height()
    }

    /// See [`CourtConfig::mirror_coords_to_away`].
    #[inline]
    pub fn mirror_coords_to_away(&self, point: Point) -> Point {
        self.court.mirror_coords_to_away(point)
    }

    /// Region containing `point`, as seen by `side`.
    ///
    /// Away points are mirrored into home perspective first. The error
    /// carries the point as the caller passed it.
    pub fn region_code(&self, point: Point, side: TeamPlace) -> Result<RegionCode> {
        let home = match self.court.to_home_perspective(point, side) {
            Some(home) if home.x >= 0 && home.y >= 0 => home,
            _ => {
                debug!(x = point.x, y = point.y, %side, "point outside court, no region");
                return Err(RegionError::OutsideCourt { x: point.x, y: point.y });
            }
        };

        let cx = home.x / self.region_width();
        let cy = home.y / self.region_height();
        let last_col = i32::from(RegionCode::COLS - 1);
        let last_row = i32::from(RegionCode::ROWS - 1);
        if cx > last_col || cy > last_row {
            trace!(cx, cy, %side, "clamping point on or past the far edge");
        }

        // Both values are in 0..=7 / 0..=3 after the clamp.
        Ok(RegionCode { x: cx.min(last_col) as u8, y: cy.min(last_row) as u8 })
    }

    /// Geometric center of the cell.
    pub fn center(&self, code: RegionCode, side: TeamPlace) -> Point {
        let (rw, rh) = (self.region_width(), self.region_height());
        let center = Point {
            x: i32::from(code.x).saturating_mul(rw).saturating_add(rw / 2),
            y: i32::from(code.y).saturating_mul(rh).saturating_add(rh / 2),
        };
        self.from_home_perspective(center, side)
    }

    /// Corner on the forward edge of the cell, right (lower y) side.
    pub fn forward_right_corner(&self, code: RegionCode, side: TeamPlace) -> Point {
        let corner = Point {
            x: (i32::from(code.x) + 1).saturating_mul(self.region_width()),
            y: i32::from(code.y).saturating_mul(self.region_height()),
        };
        self.from_home_perspective(corner, side)
    }

    /// Corner on the forward edge of the cell, left (higher y) side.
    ///
    /// Uses the same x edge as [`Self::forward_right_corner`]: both corners
    /// describe the leading edge of the region.
    pub fn forward_left_corner(&self, code: RegionCode, side: TeamPlace) -> Point {
        let corner = Point {
            x: (i32::from(code.x) + 1).saturating_mul(self.region_width()),
            y: (i32::from(code.y) + 1).saturating_mul(self.region_height()),
        };
        self.from_home_perspective(corner, side)
    }

    /// Cell rectangle: `corner_a` is the back-right corner, `corner_b` the
    /// forward-left one, both in `side`'s coordinates.
    pub fn cell_bounds(&self, code: RegionCode, side: TeamPlace) -> PlayerRegion {
        let back_right = Point {
            x: i32::from(code.x).saturating_mul(self.region_width()),
            y: i32::from(code.y).saturating_mul(self.region_height()),
        };
        PlayerRegion {
            corner_a: self.from_home_perspective(back_right, side),
            corner_b: self.forward_left_corner(code, side),
        }
    }

    #[inline]
    fn from_home_perspective(&self, point: Point, side: TeamPlace) -> Point {
        // The mirror is its own inverse.
        if side.is_home() {
            point
        } else {
            self.court.mirror_coords_to_away(point)
        }
    }
}

//! Court dimensions and the home/away mirror.
//!
//! All region codes live in home-team perspective. Away-team points are
//! mirrored into that space before lookup and mirrored back on the way out,
//! always through [`CourtConfig::mirror_coords_to_away`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RegionError, Result};
use crate::region::RegionCode;
use crate::types::{Point, TeamPlace};

/// Standard court width in field units (goal line to goal line).
pub const DEFAULT_COURT_WIDTH: i32 = 40_000;
/// Standard court height in field units (touchline to touchline).
pub const DEFAULT_COURT_HEIGHT: i32 = 20_000;

/// Fixed court extents for the lifetime of a grid.
///
/// Only built through [`CourtConfig::new`] (deserialization included), so
/// every region has a positive width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CourtExtents")]
pub struct CourtConfig {
    width: i32,
    height: i32,
}

/// Unvalidated wire form of [`CourtConfig`].
#[derive(Deserialize)]
struct CourtExtents {
    width: i32,
    height: i32,
}

impl TryFrom<CourtExtents> for CourtConfig {
    type Error = RegionError;

    fn try_from(extents: CourtExtents) -> Result<Self> {
        Self::new(extents.width, extents.height)
    }
}

impl CourtConfig {
    /// Standard 40000 x 20000 court.
    pub const STANDARD: Self = Self { width: DEFAULT_COURT_WIDTH, height: DEFAULT_COURT_HEIGHT };

    /// Validated constructor.
    ///
    /// Every region must be at least one unit wide and tall. A court that
    /// does not divide evenly is accepted; the remainder is dropped by the
    /// integer division that sizes the regions.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let cols = RegionCode::COLS as i32;
        let rows = RegionCode::ROWS as i32;
        if width < cols || height < rows {
            return Err(RegionError::InvalidCourt { width, height });
        }
        if width % cols != 0 || height % rows != 0 {
            warn!(
                width,
                height,
                "court does not tile into {}x{} regions, remainder is truncated",
                cols,
                rows
            );
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub const fn region_width(&self) -> i32 {
        self.width / RegionCode::COLS as i32
    }

    #[inline]
    pub const fn region_height(&self) -> i32 {
        self.height / RegionCode::ROWS as i32
    }

    /// Same spot seen from the away team's half. Applying it twice gives the
    /// original point back for any point whose mirror fits in `i32`; beyond
    /// that the result saturates.
    #[inline]
    pub const fn mirror_coords_to_away(&self, point: Point) -> Point {
        Point { x: self.width.saturating_sub(point.x), y: self.height.saturating_sub(point.y) }
    }

    /// Home-perspective view of a point given in `side`'s coordinates.
    /// `None` when the mirrored point does not fit in `i32`.
    #[inline]
    pub(crate) fn to_home_perspective(&self, point: Point, side: TeamPlace) -> Option<Point> {
        if side.is_home() {
            return Some(point);
        }
        Some(Point { x: self.width.checked_sub(point.x)?, y: self.height.checked_sub(point.y)? })
    }
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_region_size() {
        let court = CourtConfig::default();
        assert_eq!(court.region_width(), 5_000);
        assert_eq!(court.region_height(), 5_000);
    }

    #[test]
    fn test_new_rejects_degenerate_court() {
        assert_eq!(
            CourtConfig::new(7, 100),
            Err(RegionError::InvalidCourt { width: 7, height: 100 })
        );
        assert_eq!(
            CourtConfig::new(800, 3),
            Err(RegionError::InvalidCourt { width: 800, height: 3 })
        );
        assert!(CourtConfig::new(8, 4).is_ok());
    }

    #[test]
    fn test_non_tiling_court_truncates() {
        let court = CourtConfig::new(103, 70).unwrap();
        assert_eq!(court.region_width(), 12);
        assert_eq!(court.region_height(), 17);
    }

    #[test]
    fn test_mirror() {
        let court = CourtConfig::default();
        assert_eq!(court.mirror_coords_to_away(Point::new(0, 0)), Point::new(40_000, 20_000));
        assert_eq!(court.mirror_coords_to_away(Point::new(10_000, 2_500)), Point::new(30_000, 17_500));

        let center = Point::new(20_000, 10_000);
        assert_eq!(court.mirror_coords_to_away(center), center, "court center is a fixed point");
    }

    #[test]
    fn test_home_perspective_only_mirrors_away() {
        let court = CourtConfig::default();
        let p = Point::new(1_234, 5_678);
        assert_eq!(court.to_home_perspective(p, TeamPlace::Home), Some(p));
        assert_eq!(court.to_home_perspective(p, TeamPlace::Away), Some(Point::new(38_766, 14_322)));
    }

    #[test]
    fn test_home_perspective_overflow() {
        let court = CourtConfig::default();
        let far = Point::new(i32::MIN, 0);
        assert_eq!(court.to_home_perspective(far, TeamPlace::Home), Some(far));
        assert_eq!(court.to_home_perspective(far, TeamPlace::Away), None);
        assert_eq!(court.to_home_perspective(Point::new(0, i32::MIN), TeamPlace::Away), None);
        assert_eq!(
            court.mirror_coords_to_away(far),
            Point::new(i32::MAX, 20_000),
            "mirror saturates instead of overflowing"
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let court: CourtConfig = serde_json::from_str(r#"{"width":800,"height":400}"#).unwrap();
        assert_eq!((court.width(), court.height()), (800, 400));

        let err = serde_json::from_str::<CourtConfig>(r#"{"width":5,"height":2}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid court: 5x2"), "unexpected error: {}", err);
        assert!(serde_json::from_str::<CourtConfig>(r#"{"width":0,"height":0}"#).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: mirroring is an involution
            #[test]
            fn prop_mirror_involution(
                w in 8i32..100_000,
                h in 4i32..100_000,
                x in -100_000i32..200_000,
                y in -100_000i32..200_000
            ) {
                let court = CourtConfig::new(w, h).unwrap();
                let p = Point::new(x, y);
                prop_assert_eq!(court.mirror_coords_to_away(court.mirror_coords_to_away(p)), p);
            }
        }
    }
}

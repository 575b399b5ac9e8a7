//! Field value types shared by the region grid.
//!
//! Coordinates are integer field units with the origin at the bottom-left
//! corner of the court as seen by the home team:
//! - x: 0 = home goal line, `width` = away goal line
//! - y: 0 = right touchline (home attacking view), `height` = left touchline

use std::fmt;

use serde::{Deserialize, Serialize};

/// Field position in integer units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Which side of the pitch a team defends at kick-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TeamPlace {
    #[default]
    Home,
    Away,
}

impl TeamPlace {
    #[inline]
    pub const fn is_home(self) -> bool {
        matches!(self, TeamPlace::Home)
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            TeamPlace::Home => TeamPlace::Away,
            TeamPlace::Away => TeamPlace::Home,
        }
    }
}

impl fmt::Display for TeamPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamPlace::Home => write!(f, "home"),
            TeamPlace::Away => write!(f, "away"),
        }
    }
}

/// Rectangle given by two opposite corners.
///
/// Plain carrier: nothing keeps it in sync with a `RegionCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRegion {
    pub corner_a: Point,
    pub corner_b: Point,
}

//! # pitch_regions - Region Grid over the Playing Field
//!
//! Splits the court into a fixed 8x4 grid of regions so decision logic can
//! reason in cells ("move to the forward-right region") instead of raw
//! coordinates.
//!
//! ## Features
//! - `RegionCode` navigation with absorbing edges (no wraparound)
//! - Chebyshev (chess) distance between regions
//! - Point <-> region conversion for either team
//! - Home/away mirroring through a single shared primitive
//!
//! Region codes are always home-team perspective; away-team points are
//! mirrored on the way in and on the way out.

// Method naming mirrors the field conventions (from_/to_ perspective helpers)
#![allow(clippy::wrong_self_convention)]

pub mod court;
pub mod error;
pub mod grid;
pub mod region;
pub mod types;

pub use court::{CourtConfig, DEFAULT_COURT_HEIGHT, DEFAULT_COURT_WIDTH};
pub use error::{RegionError, Result};
pub use grid::RegionGrid;
pub use region::RegionCode;
pub use types::{PlayerRegion, Point, TeamPlace};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

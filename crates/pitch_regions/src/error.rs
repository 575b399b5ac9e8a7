use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Court too small to give every region a positive width and height.
    #[error("Invalid court: {width}x{height} cannot be split into 8x4 regions")]
    InvalidCourt { width: i32, height: i32 },

    /// Point lies behind the home goal line or below the right touchline
    /// once expressed in home-team perspective.
    #[error("Point ({x}, {y}) is outside the court")]
    OutsideCourt { x: i32, y: i32 },

    #[error("Region ({x}, {y}) is outside the 8x4 grid")]
    OutOfGrid { x: u8, y: u8 },
}

impl RegionError {
    /// Measurement noise near the goal lines produces `OutsideCourt`;
    /// callers may retry with a clamped point.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RegionError::OutsideCourt { .. })
    }
}

pub type Result<T> = std::result::Result<T, RegionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RegionError::OutsideCourt { x: -5, y: 10 };
        assert_eq!(err.to_string(), "Point (-5, 10) is outside the court");

        let err = RegionError::OutOfGrid { x: 8, y: 0 };
        assert_eq!(err.to_string(), "Region (8, 0) is outside the 8x4 grid");
    }

    #[test]
    fn test_only_outside_court_is_recoverable() {
        assert!(RegionError::OutsideCourt { x: -1, y: 0 }.is_recoverable());
        assert!(!RegionError::InvalidCourt { width: 0, height: 0 }.is_recoverable());
        assert!(!RegionError::OutOfGrid { x: 9, y: 9 }.is_recoverable());
    }
}

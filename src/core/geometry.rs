//! Plane geometry for the plotter carriage.
//!
//! Positions are snapped to whole units after every move, so repeated
//! moves along a closed path land back on integer coordinates.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A point on the plotting plane.
///
/// # Example
///
/// ```rust
/// use penplot::core::Position;
///
/// let p = Position::new(10.0, -4.0);
/// assert_eq!(p.to_string(), "(10, -4)");
/// assert_eq!(Position::ORIGIN, Position::new(0.0, 0.0));
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The point `(0, 0)`.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compute the point reached by travelling `distance` along `angle_degrees`
/// from `current`.
///
/// The heading is measured in degrees, counter-clockwise from the positive
/// x axis. A negative distance travels backwards along the heading. Both
/// coordinates of the result are rounded to the nearest integer, with
/// halves rounded away from zero.
///
/// # Example
///
/// ```rust
/// use penplot::core::{compute_new_position, Position};
///
/// let east = compute_new_position(100.0, 0.0, Position::ORIGIN);
/// assert_eq!(east, Position::new(100.0, 0.0));
///
/// let north = compute_new_position(100.0, 90.0, Position::ORIGIN);
/// assert_eq!(north, Position::new(0.0, 100.0));
/// ```
pub fn compute_new_position(distance: f64, angle_degrees: f64, current: Position) -> Position {
    let radians = angle_degrees * (PI / 180.0);
    let x = current.x + distance * radians.cos();
    let y = current.y + distance * radians.sin();
    // adding zero turns a rounded -0.0 into 0.0
    Position {
        x: x.round() + 0.0,
        y: y.round() + 0.0,
    }
}

/// Reduce an angle in degrees into `[0, 360)`.
///
/// Negative angles wrap around, so `-90` becomes `270`. Non-finite input
/// is returned as NaN.
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

//! Plotter state values.
//!
//! `PlotterState` is an immutable aggregate: every `with_*` helper returns
//! a fresh value and leaves the receiver untouched.

use super::geometry::{normalize_angle, Position};
use crate::state_enum;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for the closed enumerations that make up a plotter state.
///
/// All methods are pure. Values are plain data that can be compared,
/// logged and serialized.
///
/// # Example
///
/// ```rust
/// use penplot::core::{PenState, State};
///
/// assert_eq!(PenState::Down.name(), "Down");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the variant's name for display/logging.
    fn name(&self) -> &str;
}

state_enum! {
    /// Line color loaded in the pen.
    #[derive(Default)]
    #[serde(rename_all = "lowercase")]
    pub enum LineColor {
        #[default]
        Black,
        Red,
        Green,
    }
}

impl LineColor {
    /// Human-readable color name used in trace lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

state_enum! {
    /// Whether the pen touches the paper.
    ///
    /// Only `Down` makes a move draw a line.
    #[derive(Default)]
    #[serde(rename_all = "lowercase")]
    pub enum PenState {
        #[default]
        Up,
        Down,
    }
}

impl PenState {
    pub fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

/// Complete state of the plotter carriage.
///
/// The angle is a heading in degrees. States built by this crate keep it
/// in `[0, 360)`.
///
/// # Example
///
/// ```rust
/// use penplot::core::{LineColor, PenState, PlotterState, Position};
///
/// let start = PlotterState::default();
/// assert_eq!(start.position, Position::ORIGIN);
/// assert_eq!(start.angle, 0.0);
/// assert_eq!(start.color, LineColor::Black);
/// assert_eq!(start.pen, PenState::Up);
///
/// let red = start.with_color(LineColor::Red);
/// assert_eq!(red.color, LineColor::Red);
/// assert_eq!(start.color, LineColor::Black); // Original unchanged
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PlotterState {
    pub position: Position,
    pub angle: f64,
    pub color: LineColor,
    pub pen: PenState,
}

impl Default for PlotterState {
    fn default() -> Self {
        Self::new(Position::ORIGIN, 0.0, LineColor::Black, PenState::Up)
    }
}

impl PlotterState {
    /// Create a state from explicit initial values.
    ///
    /// The angle is stored as given; use the builder to get validation
    /// and normalization.
    pub fn new(position: Position, angle: f64, color: LineColor, pen: PenState) -> Self {
        Self {
            position,
            angle,
            color,
            pen,
        }
    }

    /// Copy of this state at a different position.
    pub fn with_position(&self, position: Position) -> Self {
        Self { position, ..*self }
    }

    /// Copy of this state with a different heading, stored as given.
    pub fn with_angle(&self, angle: f64) -> Self {
        Self { angle, ..*self }
    }

    /// Copy of this state with a different line color.
    pub fn with_color(&self, color: LineColor) -> Self {
        Self { color, ..*self }
    }

    /// Copy of this state with a different pen position.
    pub fn with_pen(&self, pen: PenState) -> Self {
        Self { pen, ..*self }
    }

    /// True when position and angle are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.angle.is_finite()
    }

    /// True when the angle lies in `[0, 360)`.
    pub fn has_normalized_angle(&self) -> bool {
        normalize_angle(self.angle) == self.angle
    }
}

impl fmt::Display for PlotterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at {} heading {}° with {} pen {}",
            self.position,
            self.angle,
            self.color,
            self.pen.name().to_lowercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_reference_start() {
        let state = PlotterState::default();
        assert_eq!(state.position, Position::ORIGIN);
        assert_eq!(state.angle, 0.0);
        assert_eq!(state.color, LineColor::Black);
        assert_eq!(state.pen, PenState::Up);
    }

    #[test]
    fn with_helpers_replace_one_field() {
        let state = PlotterState::default();

        let moved = state.with_position(Position::new(1.0, 2.0));
        assert_eq!(moved.position, Position::new(1.0, 2.0));
        assert_eq!(moved.with_position(state.position), state);

        let turned = state.with_angle(45.0);
        assert_eq!(turned.angle, 45.0);
        assert_eq!(turned.with_angle(0.0), state);

        let green = state.with_color(LineColor::Green);
        assert_eq!(green.color, LineColor::Green);
        assert_eq!(green.with_color(LineColor::Black), state);

        let down = state.with_pen(PenState::Down);
        assert_eq!(down.pen, PenState::Down);
        assert_eq!(down.with_pen(PenState::Up), state);
    }

    #[test]
    fn with_helpers_leave_original_unchanged() {
        let state = PlotterState::default();
        let _ = state.with_pen(PenState::Down);
        assert_eq!(state.pen, PenState::Up);
    }

    #[test]
    fn color_display_name_differs_from_variant_name() {
        assert_eq!(LineColor::Red.name(), "Red");
        assert_eq!(LineColor::Red.display_name(), "red");
        assert_eq!(LineColor::Green.to_string(), "green");
        assert_eq!(LineColor::ALL.len(), 3);
    }

    #[test]
    fn pen_is_down_only_for_down() {
        assert!(PenState::Down.is_down());
        assert!(!PenState::Up.is_down());
    }

    #[test]
    fn finiteness_checks_position_and_angle() {
        let state = PlotterState::default();
        assert!(state.is_finite());
        assert!(!state.with_angle(f64::INFINITY).is_finite());
        assert!(!state.with_position(Position::new(f64::NAN, 0.0)).is_finite());
    }

    #[test]
    fn normalized_angle_check() {
        let state = PlotterState::default();
        assert!(state.has_normalized_angle());
        assert!(state.with_angle(359.5).has_normalized_angle());
        assert!(!state.with_angle(360.0).has_normalized_angle());
        assert!(!state.with_angle(-30.0).has_normalized_angle());
    }

    #[test]
    fn state_displays_summary() {
        let state = PlotterState::default().with_pen(PenState::Down);
        assert_eq!(state.to_string(), "at (0, 0) heading 0° with black pen down");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = PlotterState::new(
            Position::new(10.0, 10.0),
            90.0,
            LineColor::Red,
            PenState::Down,
        );
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""color":"red""#));
        assert!(json.contains(r#""pen":"down""#));
        let deserialized: PlotterState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

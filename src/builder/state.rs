//! Builder for initial plotter states.

use crate::builder::error::BuildError;
use crate::core::{normalize_angle, LineColor, PenState, PlotterState, Position};

/// Fluent builder for a validated [`PlotterState`].
///
/// Unset fields fall back to the reference start: origin, heading 0°,
/// black, pen up. The heading is normalized into `[0, 360)`.
///
/// # Example
///
/// ```
/// use penplot::builder::PlotterStateBuilder;
/// use penplot::core::{LineColor, Position};
///
/// let state = PlotterStateBuilder::new()
///     .position(Position::new(10.0, 10.0))
///     .angle(-90.0)
///     .color(LineColor::Green)
///     .build()
///     .unwrap();
///
/// assert_eq!(state.angle, 270.0);
/// assert_eq!(state.color, LineColor::Green);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlotterStateBuilder {
    position: Option<Position>,
    angle: Option<f64>,
    color: Option<LineColor>,
    pen: Option<PenState>,
}

impl PlotterStateBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the heading in degrees.
    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn color(mut self, color: LineColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn pen(mut self, pen: PenState) -> Self {
        self.pen = Some(pen);
        self
    }

    /// Build the state.
    /// Returns an error if the position or angle is not finite.
    pub fn build(self) -> Result<PlotterState, BuildError> {
        let defaults = PlotterState::default();

        let position = self.position.unwrap_or(defaults.position);
        if !position.is_finite() {
            return Err(BuildError::NonFinitePosition {
                x: position.x,
                y: position.y,
            });
        }

        let angle = self.angle.unwrap_or(defaults.angle);
        if !angle.is_finite() {
            return Err(BuildError::NonFiniteAngle(angle));
        }

        Ok(PlotterState::new(
            position,
            normalize_angle(angle),
            self.color.unwrap_or(defaults.color),
            self.pen.unwrap_or(defaults.pen),
        ))
    }
}

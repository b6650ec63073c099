//! Builder for plotter sessions.

use crate::builder::error::BuildError;
use crate::builder::state::PlotterStateBuilder;
use crate::core::{LineColor, PenState, Position};
use crate::effects::{Plotter, Printer};

/// Builder for constructing a [`Plotter`] session with a fluent API.
///
/// # Example
///
/// ```
/// use penplot::builder::PlotterBuilder;
/// use penplot::core::LineColor;
/// use penplot::effects::BufferPrinter;
///
/// let mut plotter = PlotterBuilder::new()
///     .color(LineColor::Red)
///     .printer(BufferPrinter::new())
///     .build()
///     .unwrap();
///
/// plotter.draw_square(10.0);
/// assert_eq!(plotter.history().lines().len(), 4);
/// ```
pub struct PlotterBuilder<P: Printer> {
    state: PlotterStateBuilder,
    printer: Option<P>,
}

impl<P: Printer> PlotterBuilder<P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            state: PlotterStateBuilder::new(),
            printer: None,
        }
    }

    /// Replace the whole initial state builder.
    pub fn initial(mut self, state: PlotterStateBuilder) -> Self {
        self.state = state;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.state = self.state.position(position);
        self
    }

    pub fn angle(mut self, angle: f64) -> Self {
        self.state = self.state.angle(angle);
        self
    }

    pub fn color(mut self, color: LineColor) -> Self {
        self.state = self.state.color(color);
        self
    }

    pub fn pen(mut self, pen: PenState) -> Self {
        self.state = self.state.pen(pen);
        self
    }

    /// Set the printer trace lines go to (required).
    pub fn printer(mut self, printer: P) -> Self {
        self.printer = Some(printer);
        self
    }

    /// Build the session.
    /// Returns an error if the printer is missing or the state is invalid.
    pub fn build(self) -> Result<Plotter<P>, BuildError> {
        let printer = self.printer.ok_or(BuildError::MissingPrinter)?;
        let initial = self.state.build()?;
        Ok(Plotter::new(initial, printer))
    }
}

impl<P: Printer> Default for PlotterBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

//! Plotter session that prints and records each transition.

use super::sink::Printer;
use crate::core::{
    self, polygon_commands, Command, LineColor, PlotHistory, PlotStep, PlotterState, Position,
    Transition,
};
use chrono::Utc;

/// A running plotter: current state, the printer trace lines go to, and
/// the history of every applied step.
///
/// Each operation applies a pure transition, prints its event and records
/// it. The session is the only place the state is replaced; callers only
/// ever receive copies.
///
/// # Example
///
/// ```rust
/// use penplot::core::{LineColor, PlotterState, Position};
/// use penplot::effects::{BufferPrinter, Plotter};
///
/// let mut plotter = Plotter::new(PlotterState::default(), BufferPrinter::new());
/// plotter
///     .draw_triangle(100.0)
///     .set_position(Position::new(10.0, 10.0))
///     .set_color(LineColor::Red)
///     .draw_square(80.0);
///
/// assert_eq!(plotter.history().lines().len(), 7);
/// assert_eq!(plotter.state().color, LineColor::Red);
/// ```
pub struct Plotter<P: Printer> {
    initial: PlotterState,
    current: PlotterState,
    printer: P,
    history: PlotHistory,
}

impl<P: Printer> Plotter<P> {
    /// Create a session starting from `initial`.
    pub fn new(initial: PlotterState, printer: P) -> Self {
        Self {
            initial,
            current: initial,
            printer,
            history: PlotHistory::new(),
        }
    }

    /// Get current state
    pub fn state(&self) -> PlotterState {
        self.current
    }

    /// Get the state the session started from
    pub fn initial_state(&self) -> PlotterState {
        self.initial
    }

    /// Get step history
    pub fn history(&self) -> &PlotHistory {
        &self.history
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    pub fn into_printer(self) -> P {
        self.printer
    }

    fn apply(&mut self, transition: Transition) -> &mut Self {
        let line = transition.event.to_string();
        tracing::debug!(
            event = transition.event.kind(),
            x = transition.state.position.x,
            y = transition.state.position.y,
            angle = transition.state.angle,
            "plotter step"
        );
        self.printer.print(&line);

        self.history = self.history.record(PlotStep {
            from: self.current,
            to: transition.state,
            event: transition.event,
            timestamp: Utc::now(),
        });
        self.current = transition.state;
        self
    }

    pub fn move_by(&mut self, distance: f64) -> &mut Self {
        let transition = core::move_carriage(distance, &self.current);
        self.apply(transition)
    }

    pub fn turn(&mut self, delta: f64) -> &mut Self {
        let transition = core::turn(delta, &self.current);
        self.apply(transition)
    }

    pub fn pen_up(&mut self) -> &mut Self {
        let transition = core::pen_up(&self.current);
        self.apply(transition)
    }

    pub fn pen_down(&mut self) -> &mut Self {
        let transition = core::pen_down(&self.current);
        self.apply(transition)
    }

    pub fn set_color(&mut self, color: LineColor) -> &mut Self {
        let transition = core::set_color(color, &self.current);
        self.apply(transition)
    }

    pub fn set_position(&mut self, position: Position) -> &mut Self {
        let transition = core::set_position(position, &self.current);
        self.apply(transition)
    }

    /// Draw a triangle, recording each primitive step.
    pub fn draw_triangle(&mut self, side_length: f64) -> &mut Self {
        self.run(&polygon_commands(3, 120.0, side_length))
    }

    /// Draw a square, recording each primitive step.
    pub fn draw_square(&mut self, side_length: f64) -> &mut Self {
        self.run(&polygon_commands(4, 90.0, side_length))
    }

    /// Apply a single command.
    pub fn execute(&mut self, command: Command) -> &mut Self {
        let transition = command.apply(&self.current);
        self.apply(transition)
    }

    /// Apply every command in order.
    pub fn run(&mut self, commands: &[Command]) -> &mut Self {
        for command in commands {
            self.execute(*command);
        }
        self
    }
}

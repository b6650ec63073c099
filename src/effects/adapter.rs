//! Printing adapters around the pure transitions.
//!
//! Each function applies the matching `core` transition, writes the event
//! as one trace line, and hands back only the new state.

use super::sink::Printer;
use crate::core::{self, Command, LineColor, PlotterEvent, PlotterState, Position, Transition};

fn emit<P: Printer + ?Sized>(printer: &mut P, transition: Transition) -> PlotterState {
    printer.print(&transition.event.to_string());
    transition.state
}

fn emit_all<P: Printer + ?Sized>(printer: &mut P, events: &[PlotterEvent]) {
    for event in events {
        printer.print(&event.to_string());
    }
}

/// Move along the heading, printing a line-draw or plain-move trace.
///
/// # Example
///
/// ```rust
/// use penplot::core::PlotterState;
/// use penplot::effects::{move_carriage, BufferPrinter};
///
/// let mut printer = BufferPrinter::new();
/// let state = move_carriage(&mut printer, 100.0, &PlotterState::default());
///
/// assert_eq!(state.position.x, 100.0);
/// assert_eq!(printer.lines(), &["Moving 100 from point (0, 0) without drawing"]);
/// ```
pub fn move_carriage<P: Printer + ?Sized>(
    printer: &mut P,
    distance: f64,
    state: &PlotterState,
) -> PlotterState {
    emit(printer, core::move_carriage(distance, state))
}

pub fn turn<P: Printer + ?Sized>(printer: &mut P, delta: f64, state: &PlotterState) -> PlotterState {
    emit(printer, core::turn(delta, state))
}

pub fn pen_up<P: Printer + ?Sized>(printer: &mut P, state: &PlotterState) -> PlotterState {
    emit(printer, core::pen_up(state))
}

pub fn pen_down<P: Printer + ?Sized>(printer: &mut P, state: &PlotterState) -> PlotterState {
    emit(printer, core::pen_down(state))
}

pub fn set_color<P: Printer + ?Sized>(
    printer: &mut P,
    color: LineColor,
    state: &PlotterState,
) -> PlotterState {
    emit(printer, core::set_color(color, state))
}

pub fn set_position<P: Printer + ?Sized>(
    printer: &mut P,
    position: Position,
    state: &PlotterState,
) -> PlotterState {
    emit(printer, core::set_position(position, state))
}

/// Draw a triangle, printing one trace line per primitive step.
pub fn draw_triangle<P: Printer + ?Sized>(
    printer: &mut P,
    side_length: f64,
    state: &PlotterState,
) -> PlotterState {
    let drawing = core::draw_triangle(side_length, state);
    emit_all(printer, &drawing.events);
    drawing.state
}

/// Draw a square, printing one trace line per primitive step.
pub fn draw_square<P: Printer + ?Sized>(
    printer: &mut P,
    side_length: f64,
    state: &PlotterState,
) -> PlotterState {
    let drawing = core::draw_square(side_length, state);
    emit_all(printer, &drawing.events);
    drawing.state
}

/// Run a command program, threading the state from one command to the next.
pub fn run_commands<P: Printer + ?Sized>(
    printer: &mut P,
    commands: &[Command],
    state: &PlotterState,
) -> PlotterState {
    commands
        .iter()
        .fold(*state, |current, command| {
            emit(&mut *printer, command.apply(&current))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PenState;
    use crate::effects::BufferPrinter;

    #[test]
    fn each_primitive_prints_exactly_once() {
        let state = PlotterState::default();
        let mut printer = BufferPrinter::new();

        let state = pen_down(&mut printer, &state);
        let state = move_carriage(&mut printer, 10.0, &state);
        let state = turn(&mut printer, 90.0, &state);
        let state = set_color(&mut printer, LineColor::Green, &state);
        let state = set_position(&mut printer, Position::new(5.0, 5.0), &state);
        let state = pen_up(&mut printer, &state);

        assert_eq!(printer.lines().len(), 6);
        assert_eq!(state.pen, PenState::Up);
        assert_eq!(state.position, Position::new(5.0, 5.0));
        assert_eq!(state.color, LineColor::Green);
        assert_eq!(state.angle, 90.0);
    }

    #[test]
    fn pen_down_move_prints_line_trace() {
        let mut printer = BufferPrinter::new();
        let state = pen_down(&mut printer, &PlotterState::default());
        move_carriage(&mut printer, 100.0, &state);

        assert_eq!(
            printer.lines(),
            &[
                "Lowering the pen",
                "...Drawing line from (0, 0) to (100, 0) using black color.",
            ]
        );
    }

    #[test]
    fn set_position_with_pen_down_prints_no_line() {
        let mut printer = BufferPrinter::new();
        let state = PlotterState::default().with_pen(PenState::Down);
        set_position(&mut printer, Position::new(10.0, 10.0), &state);

        assert_eq!(printer.lines(), &["Setting carriage position to (10, 10)."]);
    }

    #[test]
    fn triangle_prints_every_step() {
        let mut printer = BufferPrinter::new();
        let state = draw_triangle(&mut printer, 100.0, &PlotterState::default());

        // pen down, 3 x (move, turn), pen up
        assert_eq!(printer.lines().len(), 8);
        let drawn = printer
            .lines()
            .iter()
            .filter(|l| l.starts_with("...Drawing line"))
            .count();
        assert_eq!(drawn, 3);
        assert_eq!(state.pen, PenState::Up);
    }

    #[test]
    fn square_prints_every_step() {
        let mut printer = BufferPrinter::new();
        let state = draw_square(&mut printer, 80.0, &PlotterState::default());

        assert_eq!(printer.lines().len(), 10);
        assert_eq!(state.position, Position::ORIGIN);
    }

    #[test]
    fn run_commands_threads_state() {
        let mut printer = BufferPrinter::new();
        let program = [
            Command::SetColor(LineColor::Red),
            Command::PenDown,
            Command::Move(10.0),
            Command::Turn(90.0),
            Command::Move(10.0),
        ];
        let state = run_commands(&mut printer, &program, &PlotterState::default());

        assert_eq!(printer.lines().len(), program.len());
        assert_eq!(state.position, Position::new(10.0, 10.0));
        assert_eq!(
            printer.lines()[4],
            "...Drawing line from (10, 0) to (10, 10) using red color."
        );
    }

    #[test]
    fn closure_printer_works_with_adapters() {
        let mut lines = Vec::new();
        let mut printer = |line: &str| lines.push(line.to_uppercase());
        pen_up(&mut printer, &PlotterState::default());
        assert_eq!(lines, vec!["RAISING THE PEN"]);
    }
}

//! Regular polygons composed from the primitive transitions.

use super::event::PlotterEvent;
use super::state::PlotterState;
use super::transition::{move_carriage, pen_down, pen_up, turn, Command};

/// Final state and ordered events of a composed drawing.
#[derive(Clone, PartialEq, Debug)]
pub struct Drawing {
    pub state: PlotterState,
    pub events: Vec<PlotterEvent>,
}

impl Drawing {
    /// Number of line segments the drawing laid down.
    pub fn line_count(&self) -> usize {
        self.events.iter().filter(|e| e.line().is_some()).count()
    }
}

/// Draw a closed polygon of `sides` sides.
///
/// Lowers the pen, repeats `sides` times a move of `side_length` followed
/// by a turn of `exterior_angle`, then raises the pen.
pub fn draw_polygon(
    sides: usize,
    exterior_angle: f64,
    side_length: f64,
    state: &PlotterState,
) -> Drawing {
    let step = pen_down(state);
    let mut events = vec![step.event];
    let mut current = step.state;

    for _ in 0..sides {
        let moved = move_carriage(side_length, &current);
        events.push(moved.event);
        let turned = turn(exterior_angle, &moved.state);
        events.push(turned.event);
        current = turned.state;
    }

    let step = pen_up(&current);
    events.push(step.event);

    Drawing {
        state: step.state,
        events,
    }
}

/// Draw an equilateral triangle with sides of `side_length`.
///
/// # Example
///
/// ```rust
/// use penplot::core::{draw_triangle, PenState, PlotterState};
///
/// let drawing = draw_triangle(100.0, &PlotterState::default());
/// assert_eq!(drawing.line_count(), 3);
/// assert_eq!(drawing.state.pen, PenState::Up);
/// assert_eq!(drawing.state.angle, 0.0);
/// ```
pub fn draw_triangle(side_length: f64, state: &PlotterState) -> Drawing {
    draw_polygon(3, 120.0, side_length, state)
}

/// Draw a square with sides of `side_length`.
pub fn draw_square(side_length: f64, state: &PlotterState) -> Drawing {
    draw_polygon(4, 90.0, side_length, state)
}

/// The command sequence [`draw_polygon`] performs, as data.
pub fn polygon_commands(sides: usize, exterior_angle: f64, side_length: f64) -> Vec<Command> {
    let edges =
        (0..sides).flat_map(|_| [Command::Move(side_length), Command::Turn(exterior_angle)]);
    std::iter::once(Command::PenDown)
        .chain(edges)
        .chain(std::iter::once(Command::PenUp))
        .collect()
}

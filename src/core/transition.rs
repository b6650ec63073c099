//! Pure plotter transitions.
//!
//! Every function here takes a state by reference and returns a
//! [`Transition`]: the next state plus the event describing the change.
//! Exactly one field of the state is replaced each time; the others are
//! carried over unchanged.

use super::event::{LineSegment, PlotterEvent};
use super::geometry::{compute_new_position, normalize_angle, Position};
use super::state::{LineColor, PenState, PlotterState};
use serde::{Deserialize, Serialize};

/// Result of applying a pure transition.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transition {
    /// The state after the transition
    pub state: PlotterState,
    /// What happened, for a printer to report
    pub event: PlotterEvent,
}

impl Transition {
    fn new(state: PlotterState, event: PlotterEvent) -> Self {
        Self { state, event }
    }
}

/// Move the carriage `distance` units along its current heading.
///
/// With the pen down the event is a drawn [`LineSegment`] in the current
/// color; with the pen up it is a plain move.
///
/// # Example
///
/// ```rust
/// use penplot::core::{move_carriage, pen_down, PlotterEvent, PlotterState, Position};
///
/// let state = pen_down(&PlotterState::default()).state;
/// let step = move_carriage(100.0, &state);
///
/// assert_eq!(step.state.position, Position::new(100.0, 0.0));
/// assert!(matches!(step.event, PlotterEvent::LineDrawn(_)));
/// ```
pub fn move_carriage(distance: f64, state: &PlotterState) -> Transition {
    let to = compute_new_position(distance, state.angle, state.position);
    let event = if state.pen.is_down() {
        PlotterEvent::LineDrawn(LineSegment {
            from: state.position,
            to,
            color: state.color,
        })
    } else {
        PlotterEvent::Moved {
            distance,
            from: state.position,
        }
    };
    Transition::new(state.with_position(to), event)
}

/// Rotate the heading by `delta` degrees.
///
/// The resulting angle is always reduced into `[0, 360)`, including for
/// negative turns.
pub fn turn(delta: f64, state: &PlotterState) -> Transition {
    let angle = normalize_angle(state.angle + delta);
    Transition::new(state.with_angle(angle), PlotterEvent::Turned { delta })
}

/// Lift the pen off the paper.
pub fn pen_up(state: &PlotterState) -> Transition {
    Transition::new(state.with_pen(PenState::Up), PlotterEvent::PenRaised)
}

/// Lower the pen onto the paper.
pub fn pen_down(state: &PlotterState) -> Transition {
    Transition::new(state.with_pen(PenState::Down), PlotterEvent::PenLowered)
}

/// Switch the line color.
pub fn set_color(color: LineColor, state: &PlotterState) -> Transition {
    Transition::new(state.with_color(color), PlotterEvent::ColorSet(color))
}

/// Place the carriage at `position` without drawing, whatever the pen state.
pub fn set_position(position: Position, state: &PlotterState) -> Transition {
    Transition::new(
        state.with_position(position),
        PlotterEvent::PositionSet(position),
    )
}

/// One primitive plotter operation expressed as data.
///
/// # Example
///
/// ```rust
/// use penplot::core::{Command, PlotterState};
///
/// let program = [Command::Turn(90.0), Command::Move(10.0)];
/// let end = program
///     .iter()
///     .fold(PlotterState::default(), |state, cmd| cmd.apply(&state).state);
///
/// assert_eq!(end.angle, 90.0);
/// assert_eq!(end.position.y, 10.0);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Move(f64),
    Turn(f64),
    PenUp,
    PenDown,
    SetColor(LineColor),
    SetPosition(Position),
}

impl Command {
    /// Apply the matching pure transition to `state`.
    pub fn apply(&self, state: &PlotterState) -> Transition {
        match *self {
            Self::Move(distance) => move_carriage(distance, state),
            Self::Turn(delta) => turn(delta, state),
            Self::PenUp => pen_up(state),
            Self::PenDown => pen_down(state),
            Self::SetColor(color) => set_color(color, state),
            Self::SetPosition(position) => set_position(position, state),
        }
    }
}

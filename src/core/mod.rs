//! Core plotter types and logic.
//!
//! This module contains the pure functional core of the plotter:
//! - Geometry for positions and headings
//! - The immutable `PlotterState` and its closed enumerations
//! - Pure transitions returning the next state and an event
//! - Shape composition from those transitions
//! - Immutable step history
//!
//! Nothing in this module performs I/O; printing trace lines is the job
//! of [`crate::effects`].

mod event;
mod geometry;
mod history;
mod shapes;
mod state;
mod transition;

pub use event::{LineSegment, PlotterEvent};
pub use geometry::{compute_new_position, normalize_angle, Position};
pub use history::{PlotHistory, PlotStep};
pub use shapes::{draw_polygon, draw_square, draw_triangle, polygon_commands, Drawing};
pub use state::{LineColor, PenState, PlotterState, State};
pub use transition::{
    move_carriage, pen_down, pen_up, set_color, set_position, turn, Command, Transition,
};

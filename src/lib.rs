//! Penplot: a pure functional pen plotter core
//!
//! Penplot follows the "pure core, imperative shell" philosophy. The
//! plotter state is an immutable value, and every operation is a pure
//! function from one state to the next that also returns an event
//! describing what happened. Printing those events is left to a thin
//! shell around the core.
//!
//! # Core Concepts
//!
//! - **State**: `PlotterState` holds position, heading, color and pen
//! - **Transitions**: Pure moves, turns and pen/color/position changes
//! - **Events**: One `PlotterEvent` per transition, rendered as a trace line
//! - **Printers**: Injected sinks receiving those trace lines
//! - **Shapes**: Regular polygons composed from the primitives
//!
//! # Example
//!
//! ```rust
//! use penplot::core::{draw_triangle, PenState, PlotterState, Position};
//! use penplot::effects::{self, BufferPrinter};
//!
//! // Pure: no printer involved
//! let drawing = draw_triangle(100.0, &PlotterState::default());
//! assert_eq!(drawing.line_count(), 3);
//! assert_eq!(drawing.state.position, Position::ORIGIN);
//!
//! // Shell: every step becomes a trace line
//! let mut printer = BufferPrinter::new();
//! let state = effects::draw_triangle(&mut printer, 100.0, &PlotterState::default());
//! assert_eq!(state.pen, PenState::Up);
//! assert_eq!(printer.lines()[1], "...Drawing line from (0, 0) to (100, 0) using black color.");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Command, LineColor, PenState, PlotHistory, PlotterEvent, PlotterState, Position, State,
};
pub use crate::effects::{Plotter, Printer};

//! Effectful plotter operations.
//!
//! This module is the imperative shell around the pure core: it turns
//! transition events into trace lines on a [`Printer`].
//!
//! # Key Concepts
//!
//! - **Printers**: Destinations for trace lines (buffer, stdout, `tracing`)
//! - **Adapters**: Free functions that run one transition and print it
//! - **Plotter**: A session that prints and records history

mod adapter;
mod plotter;
mod sink;

pub use adapter::{
    draw_square, draw_triangle, move_carriage, pen_down, pen_up, run_commands, set_color,
    set_position, turn,
};
pub use plotter::Plotter;
pub use sink::{BufferPrinter, Printer, StdoutPrinter, TracingPrinter};

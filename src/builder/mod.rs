//! Builder API for ergonomic plotter construction.
//!
//! This module provides fluent builders for validated initial states and
//! plotter sessions, plus the `state_enum!` macro used for the closed
//! enumerations in [`crate::core`].

pub mod error;
pub mod macros;
pub mod plotter;
pub mod state;

pub use error::BuildError;
pub use plotter::PlotterBuilder;
pub use state::PlotterStateBuilder;

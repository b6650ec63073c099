//! Build errors for plotter state and session builders.

use thiserror::Error;

/// Errors that can occur when building plotter states and sessions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial position ({x}, {y}) must have finite coordinates")]
    NonFinitePosition { x: f64, y: f64 },

    #[error("Initial angle {0} must be a finite number of degrees")]
    NonFiniteAngle(f64),

    #[error("Printer not specified. Call .printer(printer) before .build()")]
    MissingPrinter,
}

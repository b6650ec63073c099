//! Violation errors reported by program validation.

use thiserror::Error;

/// A problem found in a command program before it runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommandViolation {
    #[error("Command {index}: move distance {value} is not finite")]
    NonFiniteDistance { index: usize, value: f64 },

    #[error("Command {index}: turn angle {value} is not finite")]
    NonFiniteAngle { index: usize, value: f64 },

    #[error("Command {index}: position ({x}, {y}) is not finite")]
    NonFinitePosition { index: usize, x: f64, y: f64 },

    #[error("Command {index}: carriage would leave the plotting area at ({x}, {y})")]
    OutOfBounds { index: usize, x: f64, y: f64 },

    #[error("Program has {count} commands, more than the maximum of {max}")]
    TooManyCommands { max: usize, count: usize },

    #[error("Side length {value} must be finite and non-zero")]
    InvalidSideLength { value: f64 },

    #[error("A polygon needs at least 3 sides, got {sides}")]
    TooFewSides { sides: usize },
}

//! Validation rules for command programs using Validation.

use crate::core::{Command, PlotterState, Position};
use crate::validation::violations::CommandViolation;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Rectangular plotting area, inclusive on every edge.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Check that a single command carries only finite numbers.
pub fn validate_command(
    index: usize,
    command: &Command,
) -> Validation<(), NonEmptyVec<CommandViolation>> {
    match *command {
        Command::Move(value) if !value.is_finite() => {
            Validation::fail(CommandViolation::NonFiniteDistance { index, value })
        }
        Command::Turn(value) if !value.is_finite() => {
            Validation::fail(CommandViolation::NonFiniteAngle { index, value })
        }
        Command::SetPosition(p) if !p.is_finite() => {
            Validation::fail(CommandViolation::NonFinitePosition {
                index,
                x: p.x,
                y: p.y,
            })
        }
        _ => Validation::success(()),
    }
}

/// Check the parameters of a regular polygon drawing.
///
/// # Example
///
/// ```rust
/// use penplot::validation::validate_polygon;
/// use stillwater::validation::Validation;
///
/// assert!(validate_polygon(3, 100.0).is_success());
/// match validate_polygon(2, 0.0) {
///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
///     Validation::Success(_) => panic!("expected violations"),
/// }
/// ```
pub fn validate_polygon(
    sides: usize,
    side_length: f64,
) -> Validation<(), NonEmptyVec<CommandViolation>> {
    let sides_check = if sides < 3 {
        Validation::fail(CommandViolation::TooFewSides { sides })
    } else {
        Validation::success(())
    };

    let length_check = if !side_length.is_finite() || side_length == 0.0 {
        Validation::fail(CommandViolation::InvalidSideLength { value: side_length })
    } else {
        Validation::success(())
    };

    let checks = vec![sides_check, length_check];
    Validation::all_vec(checks).map(|_| ())
}

/// Rules applied to a whole program run from a start state.
/// Uses Validation to accumulate ALL violations.
pub struct ProgramRules {
    pub(crate) max_commands: Option<usize>,
    pub(crate) bounds: Option<Bounds>,
}

impl ProgramRules {
    /// Validate `commands` as run from `start`.
    ///
    /// Commands are simulated with the pure transitions so that the bounds
    /// check sees the real positions. Returns the final state if every
    /// check passes.
    pub fn validate(
        &self,
        commands: &[Command],
        start: &PlotterState,
    ) -> Validation<PlotterState, NonEmptyVec<CommandViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<CommandViolation>>> = Vec::new();

        // Check program length
        if let Some(max) = self.max_commands {
            checks.push(if commands.len() > max {
                Validation::fail(CommandViolation::TooManyCommands {
                    max,
                    count: commands.len(),
                })
            } else {
                Validation::success(())
            });
        }

        let mut state = *start;
        for (index, command) in commands.iter().enumerate() {
            checks.push(validate_command(index, command));
            state = command.apply(&state).state;

            // Check plotting area
            if let Some(bounds) = self.bounds {
                let p = state.position;
                checks.push(if p.is_finite() && !bounds.contains(p) {
                    Validation::fail(CommandViolation::OutOfBounds { index, x: p.x, y: p.y })
                } else {
                    Validation::success(())
                });
            }
        }

        Validation::all_vec(checks).map(move |_| state)
    }
}

//! Builder API for creating program validation rules.

use crate::validation::rules::{Bounds, ProgramRules};

/// Builder for creating program validation rules
#[derive(Clone, Debug, Default)]
pub struct ValidationBuilder {
    max_commands: Option<usize>,
    bounds: Option<Bounds>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum program length
    pub fn max_commands(mut self, n: usize) -> Self {
        self.max_commands = Some(n);
        self
    }

    /// Restrict the carriage to a plotting area
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Build the validation rules
    pub fn build(self) -> ProgramRules {
        ProgramRules {
            max_commands: self.max_commands,
            bounds: self.bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, PlotterState, Position};

    #[test]
    fn empty_rules_accept_any_finite_program() {
        let rules = ValidationBuilder::new().build();
        let program = [Command::Move(1e9), Command::Turn(-1e9)];
        assert!(rules.validate(&program, &PlotterState::default()).is_success());
    }

    #[test]
    fn limits_are_checked_against_the_start_state() {
        let rules = ValidationBuilder::new()
            .max_commands(1)
            .bounds(Bounds::new(Position::ORIGIN, Position::new(10.0, 10.0)))
            .build();

        let outside = PlotterState::default().with_position(Position::new(20.0, 0.0));
        assert!(rules.validate(&[Command::Move(-15.0)], &outside).is_success());
        assert!(rules.validate(&[Command::Move(5.0)], &outside).is_failure());
    }
}

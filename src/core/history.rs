//! Plot step history tracking.
//!
//! Provides immutable tracking of applied plotter transitions over time.

use super::event::{LineSegment, PlotterEvent};
use super::state::PlotterState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use penplot::core::{pen_down, PlotStep, PlotterState};
/// use chrono::Utc;
///
/// let from = PlotterState::default();
/// let transition = pen_down(&from);
/// let step = PlotStep {
///     from,
///     to: transition.state,
///     event: transition.event,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotStep {
    /// The state before the transition
    pub from: PlotterState,
    /// The state after the transition
    pub to: PlotterState,
    /// What the transition did
    pub event: PlotterEvent,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied plotter steps.
///
/// History is immutable - the `record` method returns a new history
/// with the step added.
///
/// # Example
///
/// ```rust
/// use penplot::core::{move_carriage, pen_down, PlotHistory, PlotStep, PlotterState};
/// use chrono::Utc;
///
/// let start = PlotterState::default();
/// let lowered = pen_down(&start);
/// let moved = move_carriage(10.0, &lowered.state);
///
/// let history = PlotHistory::new()
///     .record(PlotStep {
///         from: start,
///         to: lowered.state,
///         event: lowered.event,
///         timestamp: Utc::now(),
///     })
///     .record(PlotStep {
///         from: lowered.state,
///         to: moved.state,
///         event: moved.event,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path().len(), 3);
/// assert_eq!(history.lines().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotHistory {
    steps: Vec<PlotStep>,
}

impl PlotHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new history.
    ///
    /// This does not mutate the existing history but returns a new one
    /// with the step added.
    pub fn record(&self, step: PlotStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// Get the sequence of states traversed.
    ///
    /// Returns the `from` state of the first step, then the `to` state of
    /// each step.
    pub fn get_path(&self) -> Vec<&PlotterState> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Every line segment drawn, in order.
    pub fn lines(&self) -> Vec<&LineSegment> {
        self.steps.iter().filter_map(|s| s.event.line()).collect()
    }

    /// Calculate total duration from first to last step.
    ///
    /// Returns `None` if there are no steps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all steps.
    pub fn steps(&self) -> &[PlotStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transition::{move_carriage, pen_down, set_position, Transition};
    use crate::core::Position;

    fn step_from(from: PlotterState, transition: Transition) -> PlotStep {
        PlotStep {
            from,
            to: transition.state,
            event: transition.event,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = PlotHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.lines().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let start = PlotterState::default();
        let history = PlotHistory::new();

        let new_history = history.record(step_from(start, pen_down(&start)));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let start = PlotterState::default();
        let lowered = pen_down(&start);
        let moved = move_carriage(10.0, &lowered.state);

        let history = PlotHistory::new()
            .record(step_from(start, lowered))
            .record(step_from(lowered.state, moved));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &start);
        assert_eq!(path[1], &lowered.state);
        assert_eq!(path[2].position, Position::new(10.0, 0.0));
    }

    #[test]
    fn lines_skip_non_drawing_steps() {
        let start = PlotterState::default();
        let moved = move_carriage(10.0, &start);
        let lowered = pen_down(&moved.state);
        let drawn = move_carriage(10.0, &lowered.state);
        let teleported = set_position(Position::ORIGIN, &drawn.state);

        let history = PlotHistory::new()
            .record(step_from(start, moved))
            .record(step_from(moved.state, lowered))
            .record(step_from(lowered.state, drawn))
            .record(step_from(drawn.state, teleported));

        let lines = history.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].from, Position::new(10.0, 0.0));
        assert_eq!(lines[0].to, Position::new(20.0, 0.0));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = PlotterState::default();
        let first = step_from(start, pen_down(&start));
        let history = PlotHistory::new().record(first);

        std::thread::sleep(std::time::Duration::from_millis(10));

        let last = step_from(start, move_carriage(1.0, &start));
        let history = history.record(last);

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_step_has_duration_zero() {
        let start = PlotterState::default();
        let history = PlotHistory::new().record(step_from(start, pen_down(&start)));
        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let start = PlotterState::default();
        let history = PlotHistory::new().record(step_from(start, pen_down(&start)));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: PlotHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}

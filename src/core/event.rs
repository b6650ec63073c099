//! Descriptions of what a transition did.
//!
//! Transitions never write anywhere themselves. They return a
//! `PlotterEvent`, and its `Display` impl renders the single trace line a
//! printer receives.

use super::geometry::Position;
use super::state::LineColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A straight line laid down by a move with the pen down.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: Position,
    pub to: Position,
    pub color: LineColor,
}

impl LineSegment {
    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }
}

/// Outcome of a single plotter transition.
///
/// # Example
///
/// ```rust
/// use penplot::core::{LineColor, PlotterEvent};
///
/// let event = PlotterEvent::ColorSet(LineColor::Red);
/// assert_eq!(event.to_string(), "Setting line color to red.");
/// assert!(event.line().is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotterEvent {
    /// The carriage moved with the pen down and drew a line
    LineDrawn(LineSegment),

    /// The carriage moved with the pen up
    Moved { distance: f64, from: Position },

    /// The heading changed by `delta` degrees
    Turned { delta: f64 },

    PenRaised,

    PenLowered,

    ColorSet(LineColor),

    /// The carriage was placed at a position without drawing
    PositionSet(Position),
}

impl PlotterEvent {
    /// The drawn segment, if this event drew one.
    pub fn line(&self) -> Option<&LineSegment> {
        match self {
            Self::LineDrawn(segment) => Some(segment),
            _ => None,
        }
    }

    /// Short machine-friendly name of the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LineDrawn(_) => "line_drawn",
            Self::Moved { .. } => "moved",
            Self::Turned { .. } => "turned",
            Self::PenRaised => "pen_raised",
            Self::PenLowered => "pen_lowered",
            Self::ColorSet(_) => "color_set",
            Self::PositionSet(_) => "position_set",
        }
    }
}

impl fmt::Display for PlotterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineDrawn(segment) => write!(
                f,
                "...Drawing line from {} to {} using {} color.",
                segment.from, segment.to, segment.color
            ),
            Self::Moved { distance, from } => {
                write!(f, "Moving {distance} from point {from} without drawing")
            }
            Self::Turned { delta } => write!(f, "Turning by {delta} degrees"),
            Self::PenRaised => f.write_str("Raising the pen"),
            Self::PenLowered => f.write_str("Lowering the pen"),
            Self::ColorSet(color) => write!(f, "Setting line color to {color}."),
            Self::PositionSet(position) => {
                write!(f, "Setting carriage position to {position}.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment() -> LineSegment {
        LineSegment {
            from: Position::ORIGIN,
            to: Position::new(3.0, 4.0),
            color: LineColor::Green,
        }
    }

    #[test]
    fn events_render_one_trace_line_each() {
        let cases = [
            (
                PlotterEvent::LineDrawn(segment()),
                "...Drawing line from (0, 0) to (3, 4) using green color.",
            ),
            (
                PlotterEvent::Moved {
                    distance: 80.0,
                    from: Position::new(10.0, 10.0),
                },
                "Moving 80 from point (10, 10) without drawing",
            ),
            (PlotterEvent::Turned { delta: -90.0 }, "Turning by -90 degrees"),
            (PlotterEvent::PenRaised, "Raising the pen"),
            (PlotterEvent::PenLowered, "Lowering the pen"),
            (
                PlotterEvent::ColorSet(LineColor::Black),
                "Setting line color to black.",
            ),
            (
                PlotterEvent::PositionSet(Position::new(10.0, 10.0)),
                "Setting carriage position to (10, 10).",
            ),
        ];

        for (event, expected) in cases {
            let line = event.to_string();
            assert_eq!(line, expected);
            assert!(!line.contains('\n'));
        }
    }

    #[test]
    fn only_line_drawn_exposes_segment() {
        assert_eq!(PlotterEvent::LineDrawn(segment()).line(), Some(&segment()));
        assert!(PlotterEvent::PenLowered.line().is_none());
        assert!(PlotterEvent::PositionSet(Position::ORIGIN).line().is_none());
    }

    #[test]
    fn segment_length_is_euclidean() {
        assert_eq!(segment().length(), 5.0);
    }

    #[test]
    fn event_serializes_under_kind_name() {
        let event = PlotterEvent::Turned { delta: 90.0 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"turned":{"delta":90.0}}"#);
        assert_eq!(
            serde_json::to_string(&PlotterEvent::PenRaised).unwrap(),
            r#""pen_raised""#
        );

        let back: PlotterEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.kind(), "turned");
    }
}

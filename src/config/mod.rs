//! Start-up configuration.
//!
//! Configuration is read from JSON. Every field is optional; missing
//! values fall back to the reference start state and stdout tracing.
//!
//! ```json
//! {
//!   "initial": { "position": { "x": 0.0, "y": 0.0 }, "angle": 0.0, "color": "black", "pen": "up" },
//!   "trace": { "target": "stdout" },
//!   "drawing": { "triangle_side": 100.0, "square_side": 80.0 },
//!   "max_commands": 64,
//!   "bounds": { "min": { "x": -500.0, "y": -500.0 }, "max": { "x": 500.0, "y": 500.0 } }
//! }
//! ```

use crate::builder::{BuildError, PlotterStateBuilder};
use crate::core::{LineColor, PenState, PlotterState, Position};
use crate::validation::Bounds;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid initial state: {0}")]
    Invalid(#[from] BuildError),
}

/// The four values a plotter starts from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConfig {
    pub position: Position,
    pub angle: f64,
    pub color: LineColor,
    pub pen: PenState,
}

impl Default for InitialConfig {
    fn default() -> Self {
        let state = PlotterState::default();
        Self {
            position: state.position,
            angle: state.angle,
            color: state.color,
            pen: state.pen,
        }
    }
}

impl InitialConfig {
    /// Build a validated start state from these values.
    pub fn to_state(&self) -> Result<PlotterState, BuildError> {
        PlotterStateBuilder::new()
            .position(self.position)
            .angle(self.angle)
            .color(self.color)
            .pen(self.pen)
            .build()
    }
}

/// Where trace lines go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceTarget {
    /// Plain lines on standard output
    #[default]
    Stdout,
    /// `tracing` events, formatted by the installed subscriber
    Tracing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub target: TraceTarget,
}

/// Side lengths of the reference drawing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    pub triangle_side: f64,
    pub square_side: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            triangle_side: 100.0,
            square_side: 80.0,
        }
    }
}

/// Top-level plotter configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    pub initial: InitialConfig,
    pub trace: TraceConfig,
    pub drawing: DrawingConfig,
    /// Longest program the driver will run
    pub max_commands: Option<usize>,
    /// Optional plotting area programs are checked against
    pub bounds: Option<Bounds>,
}

impl PlotterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.initial.to_state()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loaded plotter config");
        Self::from_json_str(&contents)
    }
}

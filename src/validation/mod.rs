//! Validation of command programs before they run.
//!
//! The transition core accepts any number, including NaN and infinity,
//! and lets non-finite values propagate. This module catches them, and
//! other program-level problems, upstream using Stillwater's `Validation`
//! type so that ALL violations are reported in a single pass.
//!
//! # Example
//!
//! ```rust
//! use penplot::core::{Command, PlotterState, Position};
//! use penplot::validation::{Bounds, ValidationBuilder};
//!
//! let rules = ValidationBuilder::new()
//!     .max_commands(100)
//!     .bounds(Bounds::new(Position::new(-200.0, -200.0), Position::new(200.0, 200.0)))
//!     .build();
//!
//! let program = [Command::PenDown, Command::Move(100.0), Command::PenUp];
//! assert!(rules.validate(&program, &PlotterState::default()).is_success());
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::ValidationBuilder;
pub use rules::{validate_command, validate_polygon, Bounds, ProgramRules};
pub use violations::CommandViolation;

//! Domain types shared across the engine.
//!
//! - [`AngleUnit`]: Degrees or radians, resolved at every trigonometric boundary

mod angle;

pub use angle::AngleUnit;

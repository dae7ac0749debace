//! Platform-facing helpers for drivers
//!
//! - Fixed-step clock: turns variable frame time into whole ticks
//! - Input: maps raw key names onto game commands

pub mod clock;
pub mod input;

pub use clock::FixedStep;
pub use input::Input;

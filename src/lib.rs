//! # mower-fleet
//!
//! Plays scripted mowers on a rectangular grid field.
//!
//! Each mower starts on its own cell with a heading and follows a list of
//! commands: turn left, turn right, or advance one cell. An advance that would
//! leave the field, or land on the *starting* cell of another mower, is skipped
//! and the mower moves on to its next command. Mowers are played one after the
//! other, in input order, and the runner returns where each one ended up.

pub mod error;
pub mod field;
pub mod mower;
pub mod program;
pub mod runner;

pub use error::*;
pub use field::*;
pub use mower::*;
pub use program::*;
pub use runner::*;

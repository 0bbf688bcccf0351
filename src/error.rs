//! Error types for the mower runner.
//!
//! [`InvalidInput`] is fatal: it is raised before any mower moves and aborts the
//! run. [`Blocked`] is recoverable: it is produced by a single advance command,
//! turns that command into a no-op, and never leaves the runner.

use crate::field::Position;

/// Input rejected before any mower moves.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// No field bound was given.
    #[error("field upper-right position is required")]
    MissingBound,

    /// The bound is below the configured minimum on an axis.
    #[error("field upper-right position {bound} is invalid")]
    FieldTooSmall { bound: Position },

    /// A mower entry has no starting location.
    #[error("sequence {index} has no location")]
    MissingLocation { index: usize },

    /// A mower's starting location has no heading.
    #[error("sequence {index} has no orientation")]
    MissingOrientation { index: usize },

    /// Two mowers share a starting cell.
    #[error("at least two mowers start at {position}")]
    DuplicatePosition { position: Position },

    /// A mower starts outside the field.
    #[error("mower {index} starts outside the field at {position}")]
    OutsideField { index: usize, position: Position },

    /// The text form could not be decoded.
    #[error("line {line}: {reason}")]
    Syntax { line: usize, reason: String },
}

impl InvalidInput {
    /// Input errors always require the caller to fix the input.
    pub const fn is_recoverable(&self) -> bool {
        false
    }
}

/// Why an advance command did not move the mower.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize,
)]
pub enum Blocked {
    /// The step would leave the field.
    #[error("next position {candidate} is out of the field")]
    OutOfField { candidate: Position },

    /// The step would land on another mower's starting cell.
    #[error("next position {candidate} is another mower's start")]
    Collision { candidate: Position },
}

impl Blocked {
    pub const fn is_recoverable(&self) -> bool {
        true
    }

    /// The cell the mower tried to enter.
    pub const fn candidate(&self) -> Position {
        match self {
            Self::OutOfField { candidate } | Self::Collision { candidate } => *candidate,
        }
    }
}

use crate::mower::{Direction, Location};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A cell on the field grid.
///
/// Coordinates are signed so that a candidate step off the lower-left edge
/// (e.g. `x = -1`) is still representable while it is being checked.
pub type Position = IVec2;

/// The rectangular mowing area `[0, upper_right.x] × [0, upper_right.y]`.
///
/// The lower-left corner is always the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// The upper-right cell (inclusive).
    pub upper_right: Position,
}

impl Field {
    /// Creates the field spanning the origin to `upper_right`.
    pub fn new(upper_right: Position) -> Self {
        Self { upper_right }
    }

    /// Returns true if `position` lies inside the field on both axes.
    pub fn contains(&self, position: Position) -> bool {
        position.cmpge(IVec2::ZERO).all() && position.cmple(self.upper_right).all()
    }
}

/// The script of a single mower: where it starts and what it is told to do.
///
/// Sequences are identified by their index in the input list, so two
/// sequences with identical values are still distinct mowers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sequence {
    /// The mower's starting location. Never mutated by the runner.
    pub initial: Location,

    /// Commands applied in order.
    pub commands: Vec<Direction>,
}

impl Sequence {
    /// Creates a sequence from a starting location and its commands.
    pub fn new(initial: Location, commands: Vec<Direction>) -> Self {
        Self { initial, commands }
    }

    /// Appends a command (builder pattern).
    pub fn with_command(mut self, command: Direction) -> Self {
        self.commands.push(command);
        self
    }

    /// The cell this mower occupies before any command runs.
    pub fn initial_position(&self) -> Position {
        self.initial.position
    }
}

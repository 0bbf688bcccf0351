//! Mower state and the commands that drive it.

use crate::field::Position;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// The four compass headings, in clockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Facing `+y`.
    North,
    /// Facing `+x`.
    East,
    /// Facing `-y`.
    South,
    /// Facing `-x`.
    West,
}

impl Orientation {
    /// Clockwise lookup table. Turning right walks forward, turning left walks back.
    pub const CLOCKWISE: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// The heading a quarter turn clockwise from this one.
    pub fn right(self) -> Self {
        let len = Self::CLOCKWISE.len();
        Self::CLOCKWISE[(self.index() + 1) % len]
    }

    /// The heading a quarter turn counter-clockwise from this one.
    pub fn left(self) -> Self {
        let len = Self::CLOCKWISE.len();
        Self::CLOCKWISE[(self.index() + len - 1) % len]
    }

    /// The reverse heading.
    pub fn opposite(self) -> Self {
        self.right().right()
    }

    /// Unit step taken when advancing with this heading.
    pub fn delta(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Single-letter code used by the text encoding.
    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Inverse of [`letter`](Self::letter). Unknown letters yield `None`.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::CLOCKWISE.into_iter().find(|o| o.letter() == letter)
    }
}

/// Where a mower stands and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Current cell.
    pub position: Position,
    /// Current heading.
    pub orientation: Orientation,
}

impl Location {
    /// Creates a location at `(x, y)` facing `orientation`.
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self {
            position: IVec2::new(x, y),
            orientation,
        }
    }

    /// Rotates in place a quarter turn counter-clockwise.
    pub fn turn_left(&mut self) {
        self.orientation = self.orientation.left();
    }

    /// Rotates in place a quarter turn clockwise.
    pub fn turn_right(&mut self) {
        self.orientation = self.orientation.right();
    }

    /// The cell one step ahead. Not checked against the field or other mowers.
    ///
    /// Wraps at the `i32` limits; a wrapped cell is never inside a [`Field`](crate::Field).
    pub fn ahead(&self) -> Position {
        self.position.wrapping_add(self.orientation.delta())
    }
}

/// Commands a mower understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Rotate a quarter turn counter-clockwise (`G`).
    TurnLeft,
    /// Rotate a quarter turn clockwise (`D`).
    TurnRight,
    /// Move one cell along the current heading (`A`).
    Advance,
}

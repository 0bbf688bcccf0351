//! Text encoding of a mowing job.
//!
//! ```text
//! 5 5
//! 1 2 N
//! GAGAGAGAA
//! 3 3 E
//! AADAADADDA
//! ```
//!
//! The first line is the field's upper-right cell. Each mower then takes two
//! lines: its starting `x y orientation`, and its commands as one symbol per
//! character. Symbols are resolved through a [`CommandTable`].

use crate::error::InvalidInput;
use crate::field::{Position, Sequence};
use crate::mower::{Direction, Location, Orientation};
use crate::runner::MowerRunner;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maps command symbols to [`Direction`]s.
#[derive(Clone, Debug)]
pub struct CommandTable {
    symbols: HashMap<char, Direction>,
}

impl Default for CommandTable {
    /// `G` turns left, `D` turns right, `A` advances.
    fn default() -> Self {
        let mut table = Self::empty();
        table.populate_standard_symbols();
        table
    }
}

impl CommandTable {
    /// Creates a table with no symbols registered.
    pub fn empty() -> Self {
        Self {
            symbols: HashMap::new(),
        }
    }

    /// Assigns `command` to `symbol`, replacing any earlier mapping.
    pub fn set_command(&mut self, symbol: char, command: Direction) {
        self.symbols.insert(symbol, command);
    }

    /// Registers the conventional `G`/`D`/`A` symbols.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('G', Direction::TurnLeft),
            ('D', Direction::TurnRight),
            ('A', Direction::Advance),
        ];
        for (symbol, command) in mappings {
            self.set_command(symbol, command);
        }
    }

    /// Looks up the command bound to `symbol`.
    pub fn resolve(&self, symbol: char) -> Option<Direction> {
        self.symbols.get(&symbol).copied()
    }
}

/// A decoded job: field bound plus one sequence per mower.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Program {
    /// Upper-right cell of the field.
    pub upper_right: Position,
    /// One sequence per mower, in input order.
    pub sequences: Vec<Sequence>,
}

impl Program {
    /// Runs the program and returns each mower's final location.
    pub fn run(&self, runner: &MowerRunner) -> Result<Vec<Location>, InvalidInput> {
        runner.run(self.upper_right, &self.sequences)
    }
}

/// Decodes a job from its text form. Blank lines are ignored.
///
/// A mower's command line may be omitted: a location followed directly by
/// another location (or by the end of input) gets no commands.
pub fn parse_program(table: &CommandTable, input: &str) -> Result<Program, InvalidInput> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .peekable();

    let (line, text) = lines.next().ok_or(InvalidInput::MissingBound)?;
    let upper_right = parse_bound(line, text)?;

    let mut sequences = Vec::new();
    while let Some((line, text)) = lines.next() {
        let index = sequences.len();
        let initial = parse_location(index, line, text)?;
        let commands = match lines.next_if(|(_, text)| !starts_with_coord(text)) {
            Some((line, text)) => parse_commands(table, line, text)?,
            None => Vec::new(),
        };
        sequences.push(Sequence::new(initial, commands));
    }

    Ok(Program {
        upper_right,
        sequences,
    })
}

/// Encodes locations as `x y orientation` lines.
pub fn format_locations(locations: &[Location]) -> String {
    locations
        .iter()
        .map(|l| {
            format!(
                "{} {} {}",
                l.position.x,
                l.position.y,
                l.orientation.letter()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn syntax(line: usize, reason: impl Into<String>) -> InvalidInput {
    InvalidInput::Syntax {
        line,
        reason: reason.into(),
    }
}

fn parse_coord(line: usize, token: &str) -> Result<i32, InvalidInput> {
    token
        .parse()
        .map_err(|_| syntax(line, format!("`{token}` is not a coordinate")))
}

/// A line whose first token is an integer is read as a location.
fn starts_with_coord(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .is_some_and(|token| token.parse::<i32>().is_ok())
}

fn parse_bound(line: usize, text: &str) -> Result<Position, InvalidInput> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [x, y] => Ok(IVec2::new(parse_coord(line, x)?, parse_coord(line, y)?)),
        _ => Err(syntax(line, "expected field bound `x y`")),
    }
}

fn parse_location(index: usize, line: usize, text: &str) -> Result<Location, InvalidInput> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [x, y, heading] => {
            let mut letters = heading.chars();
            let orientation = match (letters.next(), letters.next()) {
                (Some(c), None) => Orientation::from_letter(c),
                _ => None,
            }
            .ok_or_else(|| syntax(line, format!("unknown orientation `{heading}`")))?;
            Ok(Location::new(
                parse_coord(line, x)?,
                parse_coord(line, y)?,
                orientation,
            ))
        }
        [x, y] => {
            parse_coord(line, x)?;
            parse_coord(line, y)?;
            Err(InvalidInput::MissingOrientation { index })
        }
        _ if tokens.iter().all(|t| t.parse::<i32>().is_err()) => {
            Err(InvalidInput::MissingLocation { index })
        }
        _ => Err(syntax(line, "expected location `x y orientation`")),
    }
}

fn parse_commands(
    table: &CommandTable,
    line: usize,
    text: &str,
) -> Result<Vec<Direction>, InvalidInput> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            table
                .resolve(c)
                .ok_or_else(|| syntax(line, format!("unknown command `{c}`")))
        })
        .collect()
}

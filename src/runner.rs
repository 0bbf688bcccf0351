//! Runner that drives every [`Sequence`] to its final [`Location`].
//!
//! The entry point is [`MowerRunner`]. Configure it with a [`RunnerConfig`], then
//! call [`MowerRunner::run`] with the field's upper-right cell and the mower
//! sequences, or [`MowerRunner::run_traced`] to also get a per-command log of
//! what each mower did.

use crate::error::{Blocked, InvalidInput};
use crate::field::{Field, Position, Sequence};
use crate::mower::{Direction, Location, Orientation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, trace};

/// Configuration for a mower run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Smallest accepted upper-right coordinate on each axis. Default: 1.
    pub min_extent: i32,
    /// Record a [`StepEvent`] for every command in [`RunReport::events`].
    pub record_trace: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            min_extent: 1,
            record_trace: false,
        }
    }
}

/// What a successful command did to the mower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The mower rotated in place and now faces this way.
    Turned(Orientation),
    /// The mower moved onto this cell.
    Advanced(Position),
}

/// One command applied during a traced run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvent {
    /// Index of the sequence in the input list.
    pub sequence: usize,
    /// Index of the command within that sequence.
    pub step: usize,
    /// The command that was applied.
    pub command: Direction,
    /// `Err` when the command was swallowed as a no-op.
    pub outcome: Result<StepOutcome, Blocked>,
}

/// Final locations of a run, plus the command log when tracing is enabled.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// One entry per input sequence, in input order.
    pub locations: Vec<Location>,
    /// Empty unless [`RunnerConfig::record_trace`] is set.
    pub events: Vec<StepEvent>,
}

impl RunReport {
    /// Number of advance commands that were swallowed.
    pub fn blocked_count(&self) -> usize {
        self.events.iter().filter(|e| e.outcome.is_err()).count()
    }
}

/// Plays mower sequences on a field.
#[derive(Clone, Debug, Default)]
pub struct MowerRunner {
    config: RunnerConfig,
}

impl MowerRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// The configuration this runner was built with.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Checks the field bound and every starting location.
    ///
    /// Fails when the bound is absent or smaller than
    /// [`min_extent`](RunnerConfig::min_extent) on either axis, when two
    /// sequences start on the same cell, or when a sequence starts outside the
    /// field. Sequences are checked in order and the first problem is returned.
    pub fn validate(
        &self,
        upper_right: Option<Position>,
        sequences: &[Sequence],
    ) -> Result<Field, InvalidInput> {
        let bound = upper_right.ok_or(InvalidInput::MissingBound)?;
        if bound.x < self.config.min_extent || bound.y < self.config.min_extent {
            return Err(InvalidInput::FieldTooSmall { bound });
        }
        let field = Field::new(bound);

        let mut starts = HashSet::with_capacity(sequences.len());
        for (index, sequence) in sequences.iter().enumerate() {
            let position = sequence.initial_position();
            if !starts.insert(position) {
                return Err(InvalidInput::DuplicatePosition { position });
            }
            if !field.contains(position) {
                return Err(InvalidInput::OutsideField { index, position });
            }
        }

        Ok(field)
    }

    /// Runs every sequence and returns the final location of each mower, in
    /// input order.
    ///
    /// Only input validation can fail. Advances that would leave the field or
    /// land on another mower's *starting* cell are skipped and the sequence
    /// carries on with its next command.
    pub fn run(
        &self,
        upper_right: Position,
        sequences: &[Sequence],
    ) -> Result<Vec<Location>, InvalidInput> {
        Ok(self.play(upper_right, sequences, false)?.locations)
    }

    /// Same as [`run`](Self::run), returning a [`RunReport`] whose event log is
    /// filled when [`RunnerConfig::record_trace`] is set.
    pub fn run_traced(
        &self,
        upper_right: Position,
        sequences: &[Sequence],
    ) -> Result<RunReport, InvalidInput> {
        self.play(upper_right, sequences, self.config.record_trace)
    }

    fn play(
        &self,
        upper_right: Position,
        sequences: &[Sequence],
        record: bool,
    ) -> Result<RunReport, InvalidInput> {
        let field = self.validate(Some(upper_right), sequences)?;
        info!(
            mowers = sequences.len(),
            bound = %field.upper_right,
            "running mower sequences"
        );

        let mut report = RunReport {
            locations: Vec::with_capacity(sequences.len()),
            events: Vec::new(),
        };

        for (index, sequence) in sequences.iter().enumerate() {
            // Fixed for the whole sequence, even once the other mowers have moved.
            let blocking = blocking_set(index, sequences);
            trace!(sequence = index, ?blocking, "blocking set");

            let mut location = sequence.initial;
            for (step, &command) in sequence.commands.iter().enumerate() {
                let outcome = Self::apply(&mut location, command, &field, &blocking);
                match &outcome {
                    Ok(done) => debug!(sequence = index, step, ?command, ?done, "command applied"),
                    Err(blocked) => {
                        debug!(sequence = index, step, ?command, %blocked, "position not updated")
                    }
                }
                if record {
                    report.events.push(StepEvent {
                        sequence: index,
                        step,
                        command,
                        outcome,
                    });
                }
            }
            report.locations.push(location);
        }

        Ok(report)
    }

    /// Applies a single command to `location`.
    ///
    /// Turns always succeed. An advance is checked against the field first and
    /// the blocking set second; on `Err` the location is left untouched.
    pub fn apply(
        location: &mut Location,
        command: Direction,
        field: &Field,
        blocking: &[Position],
    ) -> Result<StepOutcome, Blocked> {
        match command {
            Direction::TurnLeft => {
                location.turn_left();
                Ok(StepOutcome::Turned(location.orientation))
            }
            Direction::TurnRight => {
                location.turn_right();
                Ok(StepOutcome::Turned(location.orientation))
            }
            Direction::Advance => {
                let candidate = location.ahead();
                if !field.contains(candidate) {
                    return Err(Blocked::OutOfField { candidate });
                }
                if blocking.contains(&candidate) {
                    return Err(Blocked::Collision { candidate });
                }
                location.position = candidate;
                Ok(StepOutcome::Advanced(candidate))
            }
        }
    }
}

/// Starting cells of every sequence except the one at `current`.
pub fn blocking_set(current: usize, sequences: &[Sequence]) -> Vec<Position> {
    sequences
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != current)
        .map(|(_, sequence)| sequence.initial_position())
        .collect()
}

/// Runs `sequences` with the default configuration.
pub fn run_mowers(
    upper_right: Position,
    sequences: &[Sequence],
) -> Result<Vec<Location>, InvalidInput> {
    MowerRunner::default().run(upper_right, sequences)
}

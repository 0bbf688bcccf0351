// tests/reference_scenarios.rs
use glam::IVec2;
use mower_fleet::{
    Direction, InvalidInput, Location, MowerRunner, Orientation, RunnerConfig, Sequence,
    run_mowers,
};

use Direction::{Advance as A, TurnLeft as G, TurnRight as D};

fn setup() -> (MowerRunner, Vec<Sequence>) {
    let runner = MowerRunner::new(RunnerConfig::default());
    let sequences = vec![
        Sequence::new(
            Location::new(1, 2, Orientation::North),
            vec![G, A, G, A, G, A, G, A, A],
        ),
        Sequence::new(
            Location::new(3, 3, Orientation::East),
            vec![A, A, D, A, A, D, D, D, A],
        ),
    ];
    (runner, sequences)
}

#[test]
fn test_two_mowers_reference_case() {
    let (runner, sequences) = setup();

    let locations = runner.run(IVec2::new(5, 5), &sequences).unwrap();

    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0], Location::new(1, 3, Orientation::North));
    // Last advance heads for (6, 1) and is dropped at the east edge.
    assert_eq!(locations[1], Location::new(5, 1, Orientation::East));
}

#[test]
fn test_sequences_are_not_mutated() {
    let (runner, sequences) = setup();
    runner.run(IVec2::new(5, 5), &sequences).unwrap();

    assert_eq!(sequences[0].initial, Location::new(1, 2, Orientation::North));
    assert_eq!(sequences[1].initial, Location::new(3, 3, Orientation::East));
}

#[test]
fn test_default_entry_point_matches_runner() {
    let (runner, sequences) = setup();
    let bound = IVec2::new(5, 5);

    assert_eq!(
        run_mowers(bound, &sequences).unwrap(),
        runner.run(bound, &sequences).unwrap()
    );
}

#[test]
fn test_no_sequences_yields_no_locations() {
    let locations = run_mowers(IVec2::new(3, 3), &[]).unwrap();
    assert!(locations.is_empty());
}

#[test]
fn test_output_follows_input_order() {
    let sequences: Vec<Sequence> = (0..4)
        .map(|x| Sequence::new(Location::new(x, 0, Orientation::North), vec![A; x as usize]))
        .collect();

    let locations = run_mowers(IVec2::new(4, 4), &sequences).unwrap();

    let ys: Vec<i32> = locations.iter().map(|l| l.position.y).collect();
    assert_eq!(ys, vec![0, 1, 2, 3]);
}

#[test]
fn test_shared_start_is_rejected() {
    let sequences = vec![
        Sequence::new(Location::new(0, 0, Orientation::North), vec![A]),
        Sequence::new(Location::new(0, 0, Orientation::East), vec![A]),
    ];

    let err = run_mowers(IVec2::new(1, 1), &sequences).unwrap_err();
    assert_eq!(
        err,
        InvalidInput::DuplicatePosition {
            position: IVec2::ZERO
        }
    );
    assert!(!err.is_recoverable());
}

#[test]
fn test_degenerate_bound_is_rejected_by_default() {
    let sequences = vec![Sequence::new(Location::new(0, 0, Orientation::North), vec![A])];

    let err = run_mowers(IVec2::new(0, 0), &sequences).unwrap_err();
    assert_eq!(err, InvalidInput::FieldTooSmall { bound: IVec2::ZERO });

    let err = run_mowers(IVec2::new(3, 0), &sequences).unwrap_err();
    assert_eq!(
        err,
        InvalidInput::FieldTooSmall {
            bound: IVec2::new(3, 0)
        }
    );
}

#[test]
fn test_single_cell_field_swallows_advance() {
    let runner = MowerRunner::new(RunnerConfig {
        min_extent: 0,
        ..Default::default()
    });
    let sequences = vec![Sequence::new(Location::new(0, 0, Orientation::North), vec![A])];

    let locations = runner.run(IVec2::new(0, 0), &sequences).unwrap();
    assert_eq!(locations, vec![Location::new(0, 0, Orientation::North)]);
}

#[test]
fn test_validation() {
    let runner = MowerRunner::default();
    let inside = Sequence::new(Location::new(2, 2, Orientation::South), vec![]);
    let outside = Sequence::new(Location::new(2, 6, Orientation::South), vec![]);
    let negative = Sequence::new(Location::new(-1, 0, Orientation::South), vec![]);

    assert_eq!(
        runner.validate(None, &[inside.clone()]).unwrap_err(),
        InvalidInput::MissingBound
    );
    assert_eq!(
        runner
            .validate(Some(IVec2::new(5, 5)), &[inside.clone(), outside])
            .unwrap_err(),
        InvalidInput::OutsideField {
            index: 1,
            position: IVec2::new(2, 6)
        }
    );
    assert_eq!(
        runner
            .validate(Some(IVec2::new(5, 5)), &[negative])
            .unwrap_err(),
        InvalidInput::OutsideField {
            index: 0,
            position: IVec2::new(-1, 0)
        }
    );

    let field = runner.validate(Some(IVec2::new(5, 5)), &[inside]).unwrap();
    assert_eq!(field.upper_right, IVec2::new(5, 5));
}

use lib::input::IStr;

use super::{parse, splits, timelines, Manifold};
use crate::Error;

const EXAMPLE: &[u8] = b"\
.......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

fn manifold(data: &'static [u8]) -> Manifold {
    parse(IStr::new(data)).unwrap()
}

#[test]
fn test_parse_example() {
    let manifold = manifold(EXAMPLE);
    assert_eq!(manifold.start, 7);
    assert_eq!(manifold.grid.rows_len(), 16);
    assert_eq!(manifold.grid.columns_len(), 15);
}

#[test]
fn test_example_part1() {
    let splits = splits(&manifold(EXAMPLE));
    assert_eq!(splits.count, 21);

    let expected = "\
.......S.......
.......|.......
.......^.......
......|.|......
......^.^......
.....|.|.|.....
.....^.^.^.....
....|.|.|.|....
....^.^.|.^....
...|.|.|||.|...
...^.^.||^.^...
..|.|.|||.|.|..
..^.|.^||.|.^..
.|.|||.||.||.|.
.^.^|^.^|^||.^.
|.|.|.|.|.|||.|";

    assert_eq!(splits.grid.to_string(), expected);
}

#[test]
fn test_example_part2() {
    let timelines = timelines(&manifold(EXAMPLE)).unwrap();
    assert_eq!(timelines.count, 40);
    assert_eq!(timelines.sides, 0);
    assert_eq!(
        timelines.bottom,
        [1, 0, 2, 0, 10, 0, 11, 0, 11, 0, 2, 1, 1, 0, 1]
    );
}

#[test]
fn test_beams_leave_sideways() {
    let manifold = manifold(b"S.\n^.\n..");
    assert_eq!(splits(&manifold).count, 1);

    let timelines = timelines(&manifold).unwrap();
    assert_eq!(timelines.count, 2);
    assert_eq!(timelines.sides, 1);
    assert_eq!(timelines.bottom, [0, 1]);
}

#[test]
fn test_merged_beams_split_once() {
    // Both outer splitters feed the middle column, which only counts as one
    // beam for splitting but as two timelines.
    let manifold = manifold(b".S.\n.^.\n^.^\n...");
    assert_eq!(splits(&manifold).count, 3);

    let timelines = timelines(&manifold).unwrap();
    assert_eq!(timelines.count, 4);
    assert_eq!(timelines.bottom, [0, 2, 0]);
}

#[test]
fn test_no_splitters() {
    let manifold = manifold(b"..S\n...\n...");
    assert_eq!(splits(&manifold).count, 0);
    assert_eq!(timelines(&manifold).unwrap().count, 1);
}

#[test]
fn test_empty_input() {
    assert!(matches!(parse(IStr::new(b"")), Err(Error::EmptyInput)));
    assert!(matches!(parse(IStr::new(b"\n\n")), Err(Error::EmptyInput)));
}

#[test]
fn test_missing_start() {
    assert!(matches!(
        parse(IStr::new(b"...\n.S.\n")),
        Err(Error::MissingStart)
    ));
}

#[test]
fn test_malformed_input() {
    let Err(Error::MalformedInput {
        pos,
        expected,
        actual,
    }) = parse(IStr::new(b".S.\n..\n"))
    else {
        panic!("expected malformed input");
    };

    assert_eq!(pos.to_string(), "2:1");
    assert_eq!((expected, actual), (3, 2));
}

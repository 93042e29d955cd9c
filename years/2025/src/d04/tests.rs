use lib::grid::Grid;
use lib::input::IStr;

use super::{
    adjacent_rolls, count_accessible, find_accessible, parse, remove_accessible, remove_round,
    Cell, ACCESS_LIMIT,
};
use crate::Error;

const EXAMPLE: &[u8] = b"\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

fn grid(data: &'static [u8]) -> Grid<Cell> {
    parse(IStr::new(data)).unwrap()
}

fn rolls(grid: &Grid<Cell>) -> usize {
    grid.count(|c| c.is_roll())
}

#[test]
fn test_example_part1() {
    let grid = grid(EXAMPLE);
    let accessible = count_accessible(&grid);
    assert_eq!(accessible.count, 13);

    let expected = "\
..xx.xx@x.
x@@.@.@.@@
@@@@@.x.@@
@.@@@@..@.
x@.@@@@.@x
.@@@@@@@.@
.@.@.@.@@@
x.@@@.@@@@
.@@@@@@@@.
x.x.@@@.x.";

    assert_eq!(accessible.grid.to_string(), expected);
    // The parsed grid is left untouched.
    assert_eq!(rolls(&grid), 71);
}

#[test]
fn test_example_part2() {
    let removal = remove_accessible(grid(EXAMPLE));
    assert_eq!(removal.total_removed, 43);
    assert_eq!(removal.rounds, 9);
}

#[test]
fn test_accessible_only_below_limit() {
    let grid = grid(EXAMPLE);
    let accessible = find_accessible(&grid);

    for ((r, c), cell) in grid.cells() {
        let found = accessible.contains(&(r, c));
        let expected = cell.is_roll() && adjacent_rolls(&grid, r, c) < ACCESS_LIMIT;
        assert_eq!(found, expected, "cell {r}:{c}");
    }
}

#[test]
fn test_removal_is_simultaneous() {
    // In a solid 3x3 block the corners have 3 neighbors and the edges 5. If
    // removals were applied while scanning, removing the top-left corner
    // would make the top edge accessible within the same round.
    let mut grid = grid(b"@@@\n@@@\n@@@");
    assert_eq!(remove_round(&mut grid), 4);
    assert_eq!(grid.to_string(), ".@.\n@@@\n.@.");

    // Only the center is left with 4 neighbors.
    assert_eq!(remove_round(&mut grid), 4);
    assert_eq!(grid.to_string(), "...\n.@.\n...");
    assert_eq!(remove_round(&mut grid), 1);
    assert_eq!(remove_round(&mut grid), 0);
}

#[test]
fn test_removal_is_monotonic() {
    let mut grid = grid(EXAMPLE);
    let mut last = rolls(&grid);

    loop {
        let removed = remove_round(&mut grid);
        let now = rolls(&grid);
        assert_eq!(last - now, removed);

        if removed == 0 {
            break;
        }

        assert!(now < last);
        last = now;
    }
}

#[test]
fn test_fixpoint_is_stable() {
    let removal = remove_accessible(grid(EXAMPLE));
    assert!(find_accessible(&removal.grid).is_empty());

    let again = remove_accessible(removal.grid.clone());
    assert_eq!(again.total_removed, 0);
    assert_eq!(again.rounds, 0);
    assert_eq!(again.grid, removal.grid);
}

#[test]
fn test_stable_block_survives() {
    // Once the corners of a solid 5x5 block are gone, every remaining roll
    // has at least 4 neighbors.
    let removal = remove_accessible(grid(b"@@@@@\n@@@@@\n@@@@@\n@@@@@\n@@@@@"));
    assert_eq!(removal.total_removed, 4);
    assert_eq!(removal.rounds, 1);
    assert_eq!(rolls(&removal.grid), 21);
}

#[test]
fn test_other_characters_are_empty() {
    let grid = grid(b"@#@\n a@");
    assert_eq!(rolls(&grid), 3);
    assert_eq!(grid.to_string(), "@.@\n..@");
}

#[test]
fn test_empty_input() {
    assert!(matches!(parse(IStr::new(b"")), Err(Error::EmptyInput)));
    assert!(matches!(parse(IStr::new(b" \n\t\n")), Err(Error::EmptyInput)));
}

#[test]
fn test_malformed_input() {
    let Err(Error::MalformedInput {
        pos,
        expected,
        actual,
    }) = parse(IStr::new(b"\n@@@\n@@\n@@@"))
    else {
        panic!("expected malformed input");
    };

    assert_eq!(pos.to_string(), "3:1");
    assert_eq!((expected, actual), (3, 2));
}

#[test]
fn test_crlf_input() {
    let grid = grid(b"@@.\r\n.@@\r\n");
    assert_eq!(grid.columns_len(), 3);
    assert_eq!(count_accessible(&grid).count, 4);
}

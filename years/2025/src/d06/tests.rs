use lib::input::IStr;

use super::{parse, solve, Op, Reading, Worksheet};
use crate::Error;

// Trailing spaces are significant.
const EXAMPLE: &[u8] = b"\
123 328  51 64 \n\
\x2045 64  387 23 \n\
\x20 6 98  215 314\n\
*   +   *   +  \n\
";

fn sheet(data: &'static [u8]) -> Worksheet {
    parse(IStr::new(data)).unwrap()
}

#[test]
fn test_parse_example() {
    let sheet = sheet(EXAMPLE);
    assert_eq!(sheet.grid.rows_len(), 4);
    assert_eq!(sheet.grid.columns_len(), 15);

    let columns = sheet
        .problems
        .iter()
        .map(|p| p.columns.clone())
        .collect::<Vec<_>>();

    assert_eq!(columns, [0..3, 4..7, 8..11, 12..15]);

    let ops = sheet.problems.iter().map(|p| p.op).collect::<Vec<_>>();
    assert_eq!(ops, [Op::Mul, Op::Add, Op::Mul, Op::Add]);
    assert_eq!(sheet.problems[1].pos.to_string(), "4:5");
}

#[test]
fn test_example_part1() {
    let total = solve(&sheet(EXAMPLE), Reading::Rows).unwrap();
    assert_eq!(total.total, 4277556);

    let results = total.problems.iter().map(|p| p.result).collect::<Vec<_>>();
    assert_eq!(results, [33210, 490, 4243455, 401]);
    assert_eq!(total.problems[0].numbers, [123, 45, 6]);
}

#[test]
fn test_example_part2() {
    let total = solve(&sheet(EXAMPLE), Reading::Columns).unwrap();
    assert_eq!(total.total, 3263827);

    let results = total.problems.iter().map(|p| p.result).collect::<Vec<_>>();
    assert_eq!(results, [8544, 625, 3253600, 1058]);
    assert_eq!(total.problems[0].numbers, [356, 24, 1]);
    assert_eq!(total.problems[3].numbers, [4, 431, 623]);
}

#[test]
fn test_detailed_display() {
    let total = solve(&sheet(b"1 2\n3 4\n+ *\n"), Reading::Rows).unwrap();
    assert_eq!(total.to_string(), "12");
    assert_eq!(
        format!("{total:#}"),
        "12 (grand total of 2 problems)\n  1 + 3 = 4\n  2 * 4 = 8"
    );
}

#[test]
fn test_short_lines_are_padded() {
    // The last row is shorter than the rest.
    let sheet = sheet(b"12 3\n 4 56\n+  *");
    assert_eq!(sheet.grid.columns_len(), 5);
    assert_eq!(sheet.problems.len(), 2);

    let rows = solve(&sheet, Reading::Rows).unwrap();
    assert_eq!(rows.total, 12 + 4 + 3 * 56);

    let columns = solve(&sheet, Reading::Columns).unwrap();
    assert_eq!(columns.total, 24 + 1 + 6 * 35);
}

#[test]
fn test_empty_input() {
    assert!(matches!(parse(IStr::new(b"")), Err(Error::EmptyInput)));
    assert!(matches!(parse(IStr::new(b"  \n\n")), Err(Error::EmptyInput)));
}

#[test]
fn test_unknown_operator() {
    let Err(Error::UnknownOperator { pos, op }) = parse(IStr::new(b"1 2\n+ -\n")) else {
        panic!("expected unknown operator");
    };

    assert_eq!(op, '-');
    assert_eq!(pos.to_string(), "2:3");
}

#[test]
fn test_missing_operator() {
    let Err(Error::MissingOperator { pos }) = parse(IStr::new(b"1 2\n  +\n")) else {
        panic!("expected missing operator");
    };

    assert_eq!(pos.to_string(), "2:1");
}

#[test]
fn test_invalid_digit() {
    let Err(Error::InvalidNumber { pos, text, .. }) = parse(IStr::new(b"1 2\n3a 4\n+  *\n"))
    else {
        panic!("expected invalid number");
    };

    assert_eq!(pos.to_string(), "2:2");
    assert_eq!(text, "3a 4");
}

#[test]
fn test_overflow() {
    let product = sheet(b"99999999999999999999\n99999999999999999999\n*\n");

    for reading in [Reading::Rows, Reading::Columns] {
        assert!(matches!(
            solve(&product, reading),
            Err(Error::Overflow { .. })
        ));
    }

    // A single number too large to represent.
    let large = sheet(b"9999999999999999999999999999999999999999\n+\n");
    let Err(Error::Overflow { pos }) = solve(&large, Reading::Rows) else {
        panic!("expected overflow");
    };

    assert_eq!(pos.to_string(), "2:1");
    assert_eq!(solve(&large, Reading::Columns).unwrap().total, 360);
}

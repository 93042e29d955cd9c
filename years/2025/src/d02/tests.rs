use lib::input::IStr;

use super::{find_invalid, is_invalid, parse, IdRange, Repeat};
use crate::Error;

const EXAMPLE: &[u8] = b"\
11-22,95-115,998-1012,1188511880-1188511890,222220-222224,
1698522-1698528,446443-446449,38593856-38593862,565653-565659,
824824821-824824827,2121212118-2121212124
";

fn ranges(data: &'static [u8]) -> Vec<IdRange> {
    parse(IStr::new(data)).unwrap()
}

#[test]
fn test_parse_example() {
    let ranges = ranges(EXAMPLE);
    assert_eq!(ranges.len(), 11);
    assert_eq!(ranges[0], IdRange { start: 11, end: 22 });
    assert_eq!(
        ranges[5],
        IdRange {
            start: 1698522,
            end: 1698528
        }
    );
}

#[test]
fn test_example_part1() {
    let invalid = find_invalid(&ranges(EXAMPLE), Repeat::Twice);
    assert_eq!(invalid.sum, 1227775554);
    assert_eq!(
        invalid.ids,
        [11, 22, 99, 1010, 1188511885, 222222, 446446, 38593859]
    );
}

#[test]
fn test_example_part2() {
    let invalid = find_invalid(&ranges(EXAMPLE), Repeat::AtLeastTwice);
    assert_eq!(invalid.sum, 4174379265);
    assert_eq!(invalid.ids.len(), 13);
    assert!(invalid.ids.contains(&824824824));
    assert!(invalid.ids.contains(&2121212121));
}

#[test]
fn test_is_invalid() {
    for id in [11, 6464, 123123, 1010, 1188511885] {
        assert!(is_invalid(id, Repeat::Twice), "{id}");
        assert!(is_invalid(id, Repeat::AtLeastTwice), "{id}");
    }

    for id in [111, 999, 565656, 824824824] {
        assert!(!is_invalid(id, Repeat::Twice), "{id}");
        assert!(is_invalid(id, Repeat::AtLeastTwice), "{id}");
    }

    for id in [0, 7, 10, 101, 1001, 123412345, u64::MAX] {
        assert!(!is_invalid(id, Repeat::AtLeastTwice), "{id}");
    }

    assert!(is_invalid(11111111111111111111, Repeat::AtLeastTwice));
    assert!(is_invalid(1111111111, Repeat::Twice));
}

#[test]
fn test_trailing_comma() {
    let ranges = ranges(b"1-3,\n");
    assert_eq!(ranges, [IdRange { start: 1, end: 3 }]);
}

#[test]
fn test_empty_input() {
    assert!(matches!(parse(IStr::new(b"")), Err(Error::EmptyInput)));
    assert!(matches!(parse(IStr::new(b" \n")), Err(Error::EmptyInput)));
}

#[test]
fn test_invalid_entry() {
    let Err(Error::InvalidNumber { pos, text, .. }) = parse(IStr::new(b"11-22,\n9x-12")) else {
        panic!("expected invalid number");
    };

    assert_eq!(pos.to_string(), "2:1");
    assert_eq!(text, "9x-12");

    let Err(Error::InvalidNumber { text, .. }) = parse(IStr::new(b"11-22,33")) else {
        panic!("expected invalid number");
    };

    assert_eq!(text, "33");
}

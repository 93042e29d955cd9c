use super::{ErrorKind, IStr, LineCol, Split};

#[test]
fn test_lines_strip_carriage_return() {
    let mut input = IStr::new(b"ab\r\ncd\n\nef\n");
    let lines = input.lines().map(|l| l.as_data()).collect::<Vec<_>>();
    let expected: [&[u8]; 4] = [b"ab", b"cd", b"", b"ef"];
    assert_eq!(lines, expected);
    assert!(input.is_empty());
}

#[test]
fn test_line_indexes() {
    let mut input = IStr::new(b"ab\ncd\nef");
    let indexes = input.lines().map(|l| l.index()).collect::<Vec<_>>();
    assert_eq!(indexes, [0, 3, 6]);
}

#[test]
fn test_signed_integers() {
    let mut input = IStr::new(b"-12 +7 0");
    let values = input
        .split(b' ')
        .map(|mut value| value.complete::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(values, [-12, 7, 0]);
}

#[test]
fn test_not_integer() {
    let mut input = IStr::new(b"  12x");
    let error = input.next::<u64>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("12x")));
    assert_eq!(error.span(), 2..5);
}

#[test]
fn test_complete_rejects_trailing() {
    let error = IStr::new(b"5 abc").complete::<i64>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::TrailingInput("abc")));
    assert_eq!(error.span(), 2..5);
}

#[test]
fn test_split() {
    let mut input = IStr::new(b"11-22,95-115");
    let mut out = Vec::new();

    for mut part in input.split(b',') {
        let Split((a, b)) = part.next::<Split<'-', (u64, u64)>>().unwrap();
        out.push((a, b));
    }

    assert_eq!(out, [(11, 22), (95, 115)]);
}

#[test]
fn test_split_missing_part() {
    let mut input = IStr::new(b"11-");
    let error = input.next::<Split<'-', (u64, u64)>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedSeparator('-')));
}

#[test]
fn test_split_pair() {
    let input = IStr::new(b"x10-20");
    let (a, b) = input.split_pair(b'-', 0).unwrap();
    assert_eq!(a.as_data(), b"x10");
    assert_eq!(a.index(), 0);
    assert_eq!(b.as_data(), b"20");
    assert_eq!(b.index(), 4);
    assert!(input.split_pair(b'+', 0).is_none());
    assert!(input.split_pair(b'-', 10).is_none());
}

#[test]
fn test_trim() {
    let input = IStr::new(b"   ");
    let trimmed = input.trim();
    assert!(trimmed.is_empty());
    assert_eq!(trimmed.index(), 3);

    let input = IStr::new(b"\t x y \r\n");
    let trimmed = input.trim();
    assert_eq!(trimmed.as_data(), b"x y");
    assert_eq!(trimmed.index(), 2);
}

#[test]
fn test_line_col() {
    let data = b"12\n345\n6";
    assert_eq!(LineCol::from_index(data, 0).to_string(), "1:1");
    assert_eq!(LineCol::from_index(data, 4).to_string(), "2:2");
    assert_eq!(LineCol::from_index(data, 7).to_string(), "3:1");
    assert_eq!(LineCol::from_index(data, 100).to_string(), "3:2");
}

use super::{Grid, RowLengthError};

fn grid(rows: &[&str]) -> Grid<char> {
    let mut grid = Grid::new();

    for row in rows {
        grid.push_row(row.chars()).unwrap();
    }

    grid
}

#[test]
fn test_empty() {
    let grid = Grid::<u8>::new();
    assert!(grid.is_empty());
    assert_eq!(grid.rows_len(), 0);
    assert_eq!(grid.columns_len(), 0);
    assert_eq!(grid.rows().count(), 0);
    assert!(grid.try_get(0, 0).is_none());
}

#[test]
fn test_ragged_row_is_rejected() {
    let mut grid = grid(&["abc", "def"]);

    assert_eq!(
        grid.push_row("gh".chars()),
        Err(RowLengthError {
            expected: 3,
            actual: 2
        })
    );

    // A rejected row leaves the grid untouched.
    assert_eq!(grid.rows_len(), 2);
    assert_eq!(grid.to_string(), "abc\ndef");
}

#[test]
fn test_get() {
    let mut grid = grid(&["ab", "cd", "ef"]);
    assert_eq!(*grid.get(2, 1), 'f');
    assert_eq!(grid.try_get(1, 2), None);
    assert_eq!(grid.try_get(3, 0), None);

    *grid.get_mut(0, 1) = 'x';
    assert_eq!(grid.row(0), Some(&['a', 'x'][..]));
    assert_eq!(grid.row(3), None);
}

#[test]
fn test_neighbors_are_clamped() {
    let grid = grid(&["abc", "def", "ghi"]);

    assert_eq!(grid.neighbors(1, 1).len(), 8);
    assert_eq!(grid.neighbors(0, 1).len(), 5);
    assert_eq!(
        grid.neighbors(2, 2).as_slice(),
        &[(1, 1), (1, 2), (2, 1)]
    );

    let single = self::grid(&["a"]);
    assert!(single.neighbors(0, 0).is_empty());
}

#[test]
fn test_cells() {
    let grid = grid(&["ab", "cd"]);
    let cells = grid.cells().map(|(pos, c)| (pos, *c)).collect::<Vec<_>>();
    assert_eq!(
        cells,
        [((0, 0), 'a'), ((0, 1), 'b'), ((1, 0), 'c'), ((1, 1), 'd')]
    );
    assert_eq!(grid.count(|c| *c > 'b'), 2);
}

#[test]
fn test_serialize_rows() {
    let grid = grid(&["@.", ".@"]);
    let json = serde_json::to_string(&grid).unwrap();
    assert_eq!(json, r#"["@.",".@"]"#);
}

// coord.rs - Grid coordinate key type and its on-disk text rendering

use std::fmt;
use std::str::FromStr;

use crate::error_handling::MazeError;

/// Zero-based (column, row) cell position, used as the graph vertex key.
///
/// The derived `Ord` gives the type a total ordering so it can key a
/// `BTreeMap` and produce deterministic iteration everywhere. The text
/// form `"(col, row)"` is the rendering the existing graph and marker
/// files use; `FromStr` accepts it back, with or without the space and
/// with either parenthesis missing (path files truncate the opening one
/// after splitting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub col: u32,
    pub row: u32,
}

impl Coord {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// The four orthogonal candidates in fixed up, down, left, right
    /// order. Candidates off the top or left edge are simply absent.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coord> {
        let up = self.row.checked_sub(1).map(|row| Coord::new(self.col, row));
        let down = Some(Coord::new(self.col, self.row + 1));
        let left = self.col.checked_sub(1).map(|col| Coord::new(col, self.row));
        let right = Some(Coord::new(self.col + 1, self.row));
        [up, down, left, right].into_iter().flatten()
    }

    /// Manhattan distance, the A* heuristic on a 4-connected grid.
    pub fn manhattan_distance(self, other: Coord) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl FromStr for Coord {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || MazeError::CoordParse { text: s.to_string() };

        let clean = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (col, row) = clean.split_once(',').ok_or_else(parse_error)?;
        let col = col.trim().parse().map_err(|_| parse_error())?;
        let row = row.trim().parse().map_err(|_| parse_error())?;
        Ok(Coord::new(col, row))
    }
}

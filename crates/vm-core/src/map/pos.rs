//! Grid positions and cardinal directions

use std::fmt;

use strum::{Display, EnumIter};

/// A cell position, used directly as the tile key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Textual key `"{row}x{col}"` used in saved files
    pub fn key(&self) -> String {
        format!("{}x{}", self.row, self.col)
    }

    /// Parse a `"{row}x{col}"` key
    pub fn from_key(key: &str) -> Option<Self> {
        let (row, col) = key.split_once('x')?;
        if !is_plain_number(row) || !is_plain_number(col) {
            return None;
        }
        Some(Self::new(row.parse().ok()?, col.parse().ok()?))
    }

    /// Manhattan distance, the metric used for region classification
    pub fn manhattan(&self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Adjacent position in `dir`, or `None` when it would go below zero
    pub fn offset(&self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        Some(Pos::new(
            self.row.checked_add_signed(dr)?,
            self.col.checked_add_signed(dc)?,
        ))
    }
}

// Rejects signs and whitespace that `str::parse` would otherwise accept.
fn is_plain_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.row, self.col)
    }
}

/// Cardinal movement direction, in neighbor order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, col) delta
    pub const fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_key_round_trip() {
        let pos = Pos::new(12, 305);
        assert_eq!(pos.key(), "12x305");
        assert_eq!(Pos::from_key("12x305"), Some(pos));
        assert_eq!(pos.to_string(), "12x305");
    }

    #[test]
    fn test_bad_keys() {
        for key in ["", "x", "1x", "x1", "1y2", "-1x2", "+1x2", " 1x2", "1x2x3", "axb"] {
            assert_eq!(Pos::from_key(key), None, "key {key:?}");
        }
    }

    #[test]
    fn test_manhattan() {
        let cell = Pos::new(4, 4);
        assert_eq!(cell.manhattan(Pos::new(1, 1)), 6);
        assert_eq!(cell.manhattan(Pos::new(8, 8)), 8);
        assert_eq!(cell.manhattan(Pos::new(7, 0)), 7);
        assert_eq!(cell.manhattan(cell), 0);
    }

    #[test]
    fn test_offset() {
        let origin = Pos::new(0, 0);
        assert_eq!(origin.offset(Direction::Up), None);
        assert_eq!(origin.offset(Direction::Left), None);
        assert_eq!(origin.offset(Direction::Down), Some(Pos::new(1, 0)));
        assert_eq!(origin.offset(Direction::Right), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_opposite_returns() {
        let start = Pos::new(5, 5);
        for dir in Direction::iter() {
            let there = start.offset(dir).unwrap();
            assert_eq!(there.offset(dir.opposite()), Some(start));
        }
    }
}

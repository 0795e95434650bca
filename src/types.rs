//! Board coordinates and player colors.

use std::fmt;

use crate::constants::COLS;

/// The two sides. Black moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The opponent of this player.
    #[inline]
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Index into per-color tables (black = 0, white = 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "black"),
            Player::White => write!(f, "white"),
        }
    }
}

/// A point on the board, 1-indexed.
///
/// Row 1 is the bottom row and column 1 is column `A`. Row or column 0 never
/// lies on a board; it shows up as the off-board neighbor of an edge point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Point { row, col }
    }

    /// The 4 orthogonal neighbors (up, down, left, right).
    ///
    /// Not filtered for board bounds; callers check with `Board::is_on_grid`.
    #[inline]
    pub fn neighbors(self) -> [Point; 4] {
        [
            Point::new(self.row + 1, self.col),
            Point::new(self.row.saturating_sub(1), self.col),
            Point::new(self.row, self.col.saturating_sub(1)),
            Point::new(self.row, self.col + 1),
        ]
    }

    /// The 4 diagonal neighbors, unfiltered like [`Point::neighbors`].
    #[inline]
    pub fn corners(self) -> [Point; 4] {
        let up = self.row + 1;
        let down = self.row.saturating_sub(1);
        let left = self.col.saturating_sub(1);
        let right = self.col + 1;
        [
            Point::new(up, left),
            Point::new(up, right),
            Point::new(down, left),
            Point::new(down, right),
        ]
    }

    /// Parse a coordinate such as `"C3"` or `"q16"`.
    ///
    /// Returns `None` for anything that isn't a column letter followed by a
    /// positive row number. Board bounds are not checked.
    pub fn from_coords(s: &str) -> Option<Point> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let col = COLS.find(letter)? + 1;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let row: usize = digits.parse().ok()?;
        if row == 0 {
            return None;
        }
        Some(Point::new(row, col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match COLS.as_bytes().get(self.col.wrapping_sub(1)) {
            Some(&c) => write!(f, "{}{}", c as char, self.row),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Black.other(), Player::White);
        assert_eq!(Player::White.other(), Player::Black);
        assert_eq!(Player::Black.other().other(), Player::Black);
    }

    #[test]
    fn test_neighbors_center() {
        let p = Point::new(3, 3);
        let n = p.neighbors();
        assert!(n.contains(&Point::new(2, 3)));
        assert!(n.contains(&Point::new(4, 3)));
        assert!(n.contains(&Point::new(3, 2)));
        assert!(n.contains(&Point::new(3, 4)));
    }

    #[test]
    fn test_neighbors_at_origin_do_not_underflow() {
        let n = Point::new(1, 1).neighbors();
        assert!(n.contains(&Point::new(0, 1)));
        assert!(n.contains(&Point::new(1, 0)));
    }

    #[test]
    fn test_from_coords() {
        assert_eq!(Point::from_coords("C3"), Some(Point::new(3, 3)));
        assert_eq!(Point::from_coords("a1"), Some(Point::new(1, 1)));
        // J is the ninth column since I is skipped
        assert_eq!(Point::from_coords("J9"), Some(Point::new(9, 9)));
        assert_eq!(Point::from_coords("T19"), Some(Point::new(19, 19)));
    }

    #[test]
    fn test_from_coords_rejects_garbage() {
        assert_eq!(Point::from_coords(""), None);
        assert_eq!(Point::from_coords("I5"), None);
        assert_eq!(Point::from_coords("C"), None);
        assert_eq!(Point::from_coords("C0"), None);
        assert_eq!(Point::from_coords("C3x"), None);
        assert_eq!(Point::from_coords("33"), None);
    }

    #[test]
    fn test_display_roundtrip() {
        for row in 1..=19 {
            for col in 1..=19 {
                let p = Point::new(row, col);
                assert_eq!(Point::from_coords(&p.to_string()), Some(p));
            }
        }
    }
}

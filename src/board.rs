//! Board state: stones, groups, liberties, and the running position hash.
//!
//! Every occupied point refers to the [`Group`] containing it. Groups are
//! persistent values behind `Rc`: placing a stone never edits a group in
//! place, it builds a replacement and rewrites every grid cell of that
//! group. Cloning a `Board` therefore only bumps reference counts, and the
//! clone is unaffected by later placements on the original (or vice versa).

use std::collections::HashSet;
use std::rc::Rc;

use log::trace;

use crate::constants::{EMPTY_BOARD, MAX_BOARD_SIZE};
use crate::types::{Player, Point};
use crate::zobrist;

/// A maximal connected set of same-colored stones and its liberties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    color: Player,
    stones: HashSet<Point>,
    liberties: HashSet<Point>,
}

impl Group {
    pub fn new(
        color: Player,
        stones: impl IntoIterator<Item = Point>,
        liberties: impl IntoIterator<Item = Point>,
    ) -> Self {
        Group {
            color,
            stones: stones.into_iter().collect(),
            liberties: liberties.into_iter().collect(),
        }
    }

    pub fn color(&self) -> Player {
        self.color
    }

    pub fn stones(&self) -> &HashSet<Point> {
        &self.stones
    }

    pub fn liberties(&self) -> &HashSet<Point> {
        &self.liberties
    }

    pub fn num_stones(&self) -> usize {
        self.stones.len()
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    /// A copy of this group with `point` removed from its liberties.
    /// Removing a point that isn't a liberty is a no-op.
    pub fn without_liberty(&self, point: Point) -> Group {
        let mut liberties = self.liberties.clone();
        liberties.remove(&point);
        Group {
            color: self.color,
            stones: self.stones.clone(),
            liberties,
        }
    }

    /// A copy of this group with `point` added to its liberties.
    pub fn with_liberty(&self, point: Point) -> Group {
        let mut liberties = self.liberties.clone();
        liberties.insert(point);
        Group {
            color: self.color,
            stones: self.stones.clone(),
            liberties,
        }
    }

    /// The union of two same-colored groups.
    ///
    /// Liberties of either group that are stones of the other are dropped.
    pub fn merged_with(&self, other: &Group) -> Group {
        assert_eq!(
            self.color, other.color,
            "cannot merge groups of different colors"
        );
        let stones: HashSet<Point> = self.stones.union(&other.stones).copied().collect();
        let liberties = self
            .liberties
            .union(&other.liberties)
            .filter(|p| !stones.contains(p))
            .copied()
            .collect();
        Group {
            color: self.color,
            stones,
            liberties,
        }
    }
}

/// A rectangular Go board of up to `MAX_BOARD_SIZE` x `MAX_BOARD_SIZE` points.
#[derive(Clone, Debug)]
pub struct Board {
    num_rows: usize,
    num_cols: usize,
    /// Row-major, one cell per on-grid point.
    grid: Vec<Option<Rc<Group>>>,
    hash: u64,
}

impl Board {
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&num_rows) && (1..=MAX_BOARD_SIZE).contains(&num_cols),
            "board size {num_rows}x{num_cols} not supported (max {MAX_BOARD_SIZE}x{MAX_BOARD_SIZE})"
        );
        Board {
            num_rows,
            num_cols,
            grid: vec![None; num_rows * num_cols],
            hash: EMPTY_BOARD,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    #[inline]
    pub fn is_on_grid(&self, point: Point) -> bool {
        (1..=self.num_rows).contains(&point.row) && (1..=self.num_cols).contains(&point.col)
    }

    /// All points of the board, row by row starting at row 1.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let num_cols = self.num_cols;
        (1..=self.num_rows).flat_map(move |row| (1..=num_cols).map(move |col| Point::new(row, col)))
    }

    #[inline]
    fn idx(&self, point: Point) -> usize {
        (point.row - 1) * self.num_cols + (point.col - 1)
    }

    fn cell(&self, point: Point) -> Option<&Rc<Group>> {
        if !self.is_on_grid(point) {
            return None;
        }
        self.grid[self.idx(point)].as_ref()
    }

    /// The color of the stone at `point`, or `None` if empty or off the board.
    pub fn get(&self, point: Point) -> Option<Player> {
        self.cell(point).map(|group| group.color)
    }

    /// The group containing the stone at `point`, if any.
    pub fn get_group(&self, point: Point) -> Option<&Group> {
        self.cell(point).map(|group| group.as_ref())
    }

    /// Current position hash: the XOR of the codes of all stones on the board.
    pub fn zobrist_hash(&self) -> u64 {
        self.hash
    }

    /// Place a stone for `player` at `point`, merging friendly groups and
    /// capturing opposing groups left without liberties.
    ///
    /// Returns the number of opposing stones captured. Panics if `point` is
    /// off the board or occupied; check legality with
    /// `GameState::is_valid_move` first.
    pub fn place_stone(&mut self, player: Player, point: Point) -> usize {
        assert!(self.is_on_grid(point), "point {point} is off the board");
        assert!(self.get(point).is_none(), "point {point} is already occupied");

        let mut adjacent_same: Vec<Rc<Group>> = Vec::with_capacity(4);
        let mut adjacent_opposite: Vec<Rc<Group>> = Vec::with_capacity(4);
        let mut liberties = Vec::with_capacity(4);

        for neighbor in point.neighbors() {
            if !self.is_on_grid(neighbor) {
                continue;
            }
            match self.cell(neighbor) {
                None => liberties.push(neighbor),
                Some(group) => {
                    let list = if group.color == player {
                        &mut adjacent_same
                    } else {
                        &mut adjacent_opposite
                    };
                    if !list.iter().any(|g| Rc::ptr_eq(g, group)) {
                        list.push(Rc::clone(group));
                    }
                }
            }
        }

        let mut new_group = Group::new(player, [point], liberties);
        for same in &adjacent_same {
            new_group = new_group.merged_with(same);
        }
        self.replace_group(Rc::new(new_group));

        self.hash ^= zobrist::hash_code(point, player);

        let mut captured = 0;
        for opposite in &adjacent_opposite {
            let replacement = opposite.without_liberty(point);
            if replacement.num_liberties() > 0 {
                self.replace_group(Rc::new(replacement));
            } else {
                captured += opposite.num_stones();
                self.remove_group(opposite);
            }
        }
        captured
    }

    /// Point every stone of `group` at it.
    fn replace_group(&mut self, group: Rc<Group>) {
        for &point in &group.stones {
            let idx = self.idx(point);
            self.grid[idx] = Some(Rc::clone(&group));
        }
    }

    /// Take `group` off the board, giving its points back as liberties to
    /// the neighboring groups.
    fn remove_group(&mut self, group: &Rc<Group>) {
        trace!(
            "capturing {} {} stone(s)",
            group.num_stones(),
            group.color
        );
        for &point in &group.stones {
            for neighbor in point.neighbors() {
                let Some(neighbor_group) = self.cell(neighbor) else {
                    continue;
                };
                if !Rc::ptr_eq(neighbor_group, group) {
                    let replacement = neighbor_group.with_liberty(point);
                    self.replace_group(Rc::new(replacement));
                }
            }
            let idx = self.idx(point);
            self.grid[idx] = None;
            self.hash ^= zobrist::hash_code(point, group.color);
        }
    }
}

/// Boards are equal when they have the same shape and the same stone at
/// every point. Groups and the hash are derived from the stones.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.num_rows == other.num_rows
            && self.num_cols == other.num_cols
            && self.points().all(|p| self.get(p) == other.get(p))
    }
}

impl Eq for Board {}

//! Move-selection policies ("bots").
//!
//! An [`Agent`] looks at a [`GameState`] and picks a move. The engine never
//! depends on a concrete agent; the driver holds them as `Box<dyn Agent>`.

use crate::board::Board;
use crate::game::{GameState, Move};
use crate::types::{Player, Point};

/// A move-selection policy.
pub trait Agent {
    /// Pick a move for `game.next_player()`.
    ///
    /// Must return a move for which `game.is_valid_move` holds, or resign.
    fn select_move(&mut self, game: &GameState) -> Move;
}

/// Plays a uniformly random legal move that doesn't fill one of its own
/// eyes, and passes when there is none.
pub struct RandomBot {
    rng: fastrand::Rng,
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomBot {
    /// A bot seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A bot with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Agent for RandomBot {
    fn select_move(&mut self, game: &GameState) -> Move {
        let player = game.next_player();
        let board = game.board();

        let mut candidates: Vec<Point> = board
            .points()
            .filter(|&p| board.get(p).is_none() && !is_point_an_eye(board, p, player))
            .collect();

        // Shuffle, then take the first candidate that turns out legal
        // (some will be self-capture or superko).
        self.rng.shuffle(&mut candidates);
        candidates
            .into_iter()
            .map(Move::play)
            .find(|&mv| game.is_valid_move(mv))
            .unwrap_or(Move::pass_turn())
    }
}

/// Check if an empty point is an eye of `color`.
///
/// All on-board neighbors must be `color`. Of the diagonal corners, at least
/// 3 of 4 must be `color` in the middle of the board, and every on-board
/// corner must be `color` at the edge. This may still accept some false eyes.
pub fn is_point_an_eye(board: &Board, point: Point, color: Player) -> bool {
    if board.get(point).is_some() {
        return false;
    }
    let surrounded = point
        .neighbors()
        .into_iter()
        .filter(|&n| board.is_on_grid(n))
        .all(|n| board.get(n) == Some(color));
    if !surrounded {
        return false;
    }

    let mut friendly_corners = 0;
    let mut off_board_corners = 0;
    for corner in point.corners() {
        if !board.is_on_grid(corner) {
            off_board_corners += 1;
        } else if board.get(corner) == Some(color) {
            friendly_corners += 1;
        }
    }

    if off_board_corners > 0 {
        off_board_corners + friendly_corners == 4
    } else {
        friendly_corners >= 3
    }
}

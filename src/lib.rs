//! goboard: a rules engine for the game of Go.
//!
//! This crate tracks stones, groups and their liberties, captures, suicide,
//! and positional superko, over an immutable history of game states.
//!
//! ## Modules
//!
//! - [`constants`] - Board size limits and driver defaults
//! - [`types`] - Points and players
//! - [`zobrist`] - Precomputed position hash codes
//! - [`board`] - Groups, stone placement, and captures
//! - [`game`] - Moves, game states, and legality checks
//! - [`agent`] - Move-selection policies
//! - [`render`] - Console output for boards and moves
//!
//! ## Example
//!
//! ```
//! use goboard::game::{GameState, Move};
//! use goboard::types::{Player, Point};
//!
//! let game = GameState::new_square(9);
//! let game = game.apply_move(Move::play(Point::new(3, 3)));
//! assert_eq!(game.board().get(Point::new(3, 3)), Some(Player::Black));
//!
//! let game = game.apply_move(Move::pass_turn()).apply_move(Move::pass_turn());
//! assert!(game.is_over());
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod game;
pub mod render;
pub mod types;
pub mod zobrist;

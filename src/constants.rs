//! Constants for board dimensions, hashing, and the bot-vs-bot driver.
//!
//! Boards are sized at runtime, but never larger than [`MAX_BOARD_SIZE`] in
//! either dimension: the Zobrist table generated by `build.rs` only covers
//! points up to that size.

// =============================================================================
// Board Geometry
// =============================================================================

/// Largest supported number of rows or columns. Standard Go sizes are 9, 13, or 19.
pub const MAX_BOARD_SIZE: usize = 19;

/// Column letters used for coordinates. `I` is skipped to avoid confusion with `J`.
pub const COLS: &str = "ABCDEFGHJKLMNOPQRST";

// =============================================================================
// Hashing
// =============================================================================

/// Hash of a board with no stones on it.
pub const EMPTY_BOARD: u64 = 0;

// =============================================================================
// Driver Defaults
// =============================================================================

/// Board size used by the driver when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Pause between moves so a human can follow the game (milliseconds).
pub const DEFAULT_MOVE_DELAY_MS: u64 = 300;

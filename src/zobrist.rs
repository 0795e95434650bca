//! Zobrist hash codes for (point, color) pairs.
//!
//! The table is generated by `build.rs` from a fixed seed and covers every
//! point of a `MAX_BOARD_SIZE` x `MAX_BOARD_SIZE` board. A position's hash
//! is the XOR of the codes of all stones on it, so placing or removing a
//! stone updates the hash with a single XOR.

use crate::constants::MAX_BOARD_SIZE;
use crate::types::{Player, Point};

pub use crate::constants::EMPTY_BOARD;

include!(concat!(env!("OUT_DIR"), "/zobrist_table.rs"));

/// The code for a stone of `player` at `point`.
///
/// Panics if `point` lies outside the area covered by the table.
#[inline]
pub fn hash_code(point: Point, player: Player) -> u64 {
    assert!(
        (1..=MAX_BOARD_SIZE).contains(&point.row) && (1..=MAX_BOARD_SIZE).contains(&point.col),
        "point {point:?} is outside the zobrist table"
    );
    let index = (point.row - 1) * MAX_BOARD_SIZE + (point.col - 1);
    HASH_CODE[index][player.index()]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_codes_unique_and_nonzero() {
        let mut seen = HashSet::new();
        for row in 1..=MAX_BOARD_SIZE {
            for col in 1..=MAX_BOARD_SIZE {
                for player in [Player::Black, Player::White] {
                    let code = hash_code(Point::new(row, col), player);
                    assert_ne!(code, EMPTY_BOARD);
                    assert!(seen.insert(code), "duplicate code at ({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn test_codes_avoid_sign_bit() {
        for entry in HASH_CODE.iter() {
            for &code in entry {
                assert_eq!(code >> 63, 0);
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_off_table_panics() {
        hash_code(Point::new(0, 3), Player::Black);
    }
}

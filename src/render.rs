//! Text rendering of boards and moves for the console.

use std::fmt::{self, Write};

use crate::board::Board;
use crate::constants::COLS;
use crate::game::Move;
use crate::types::{Player, Point};

fn stone_char(stone: Option<Player>) -> char {
    match stone {
        Some(Player::Black) => 'x',
        Some(Player::White) => 'o',
        None => '.',
    }
}

/// Render a board with row numbers on the left and column letters below.
///
/// ```text
///  3 . . .
///  2 . x .
///  1 o . .
///    A B C
/// ```
pub fn format_board(board: &Board) -> String {
    board.to_string()
}

fn write_board(out: &mut impl Write, board: &Board) -> fmt::Result {
    for row in (1..=board.num_rows()).rev() {
        write!(out, "{row:>2}")?;
        for col in 1..=board.num_cols() {
            write!(out, " {}", stone_char(board.get(Point::new(row, col))))?;
        }
        writeln!(out)?;
    }
    write!(out, "  ")?;
    for letter in COLS.chars().take(board.num_cols()) {
        write!(out, " {letter}")?;
    }
    writeln!(out)
}

/// Describe a move, e.g. `"black C3"` or `"white passes"`.
pub fn format_move(player: Player, mv: &Move) -> String {
    match mv {
        Move::Play(point) => format!("{player} {point}"),
        Move::Pass => format!("{player} passes"),
        Move::Resign => format!("{player} resigns"),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_board() {
        let mut board = Board::new(3, 3);
        board.place_stone(Player::Black, Point::new(2, 2));
        board.place_stone(Player::White, Point::new(1, 1));
        let expected = " 3 . . .\n 2 . x .\n 1 o . .\n   A B C\n";
        assert_eq!(format_board(&board), expected);
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_format_board_wide_rows() {
        let board = Board::new(10, 2);
        let text = format_board(&board);
        assert!(text.starts_with("10 . .\n 9 . .\n"));
        assert!(text.ends_with("   A B\n"));
    }

    #[test]
    fn test_format_move() {
        let p = Point::new(3, 3);
        assert_eq!(format_move(Player::Black, &Move::play(p)), "black C3");
        assert_eq!(format_move(Player::White, &Move::pass_turn()), "white passes");
        assert_eq!(format_move(Player::Black, &Move::resign()), "black resigns");
    }
}

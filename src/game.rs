//! Moves, game states, and the legality rules (suicide and positional superko).
//!
//! A [`GameState`] is an immutable snapshot linked to its predecessor. Applying
//! a move never touches the current state: plays are made on a clone of the
//! board, while passes and resignations share the predecessor's board.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::board::Board;
use crate::types::{Player, Point};

/// A move: play a stone, pass, or resign.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Point),
    Pass,
    Resign,
}

impl Move {
    pub fn play(point: Point) -> Self {
        Move::Play(point)
    }

    pub fn pass_turn() -> Self {
        Move::Pass
    }

    pub fn resign() -> Self {
        Move::Resign
    }

    pub fn is_play(&self) -> bool {
        matches!(self, Move::Play(_))
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn is_resign(&self) -> bool {
        matches!(self, Move::Resign)
    }

    /// The target point of a play.
    pub fn point(&self) -> Option<Point> {
        match self {
            Move::Play(point) => Some(*point),
            Move::Pass | Move::Resign => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(point) => write!(f, "{point}"),
            Move::Pass => write!(f, "pass"),
            Move::Resign => write!(f, "resign"),
        }
    }
}

/// Why a move was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    /// The game already ended
    GameOver,
    /// Point is outside the board
    OffGrid,
    /// Point is not empty
    Occupied,
    /// The stone's group would have no liberties after captures
    SelfCapture,
    /// The move recreates an earlier position (positional superko)
    Ko,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::GameOver => write!(f, "illegal move: game is over"),
            IllegalMove::OffGrid => write!(f, "illegal move: point is off the board"),
            IllegalMove::Occupied => write!(f, "illegal move: point not empty"),
            IllegalMove::SelfCapture => write!(f, "illegal move: self-capture"),
            IllegalMove::Ko => write!(f, "illegal move: repeats an earlier position"),
        }
    }
}

impl std::error::Error for IllegalMove {}

/// A snapshot of a game: the board, whose turn it is, and how we got here.
pub struct GameState {
    board: Rc<Board>,
    next_player: Player,
    previous_state: Option<Rc<GameState>>,
    /// (player to move, board hash) of every ancestor.
    previous_positions: HashSet<(Player, u64)>,
    last_move: Option<Move>,
    move_number: usize,
}

impl GameState {
    /// An empty `num_rows` x `num_cols` board with black to move.
    pub fn new_game(num_rows: usize, num_cols: usize) -> Rc<GameState> {
        Rc::new(GameState {
            board: Rc::new(Board::new(num_rows, num_cols)),
            next_player: Player::Black,
            previous_state: None,
            previous_positions: HashSet::new(),
            last_move: None,
            move_number: 0,
        })
    }

    /// An empty square board with black to move.
    pub fn new_square(size: usize) -> Rc<GameState> {
        Self::new_game(size, size)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn previous_state(&self) -> Option<&Rc<GameState>> {
        self.previous_state.as_ref()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn previous_positions(&self) -> &HashSet<(Player, u64)> {
        &self.previous_positions
    }

    /// Number of moves played since the start of the game.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// The player to move together with the board.
    pub fn situation(&self) -> (Player, &Board) {
        (self.next_player, &self.board)
    }

    /// The state after `mv` is played by the player to move.
    ///
    /// Does not check legality: validate with [`GameState::is_valid_move`]
    /// first, or use [`GameState::try_apply_move`].
    pub fn apply_move(self: &Rc<Self>, mv: Move) -> Rc<GameState> {
        let board = match mv {
            Move::Play(point) => {
                let mut next_board = Board::clone(&self.board);
                next_board.place_stone(self.next_player, point);
                Rc::new(next_board)
            }
            Move::Pass | Move::Resign => Rc::clone(&self.board),
        };

        let mut previous_positions = self.previous_positions.clone();
        previous_positions.insert((self.next_player, self.board.zobrist_hash()));

        Rc::new(GameState {
            board,
            next_player: self.next_player.other(),
            previous_state: Some(Rc::clone(self)),
            previous_positions,
            last_move: Some(mv),
            move_number: self.move_number + 1,
        })
    }

    /// Check `mv` and apply it if legal.
    pub fn try_apply_move(self: &Rc<Self>, mv: Move) -> Result<Rc<GameState>, IllegalMove> {
        self.check_move(mv)?;
        Ok(self.apply_move(mv))
    }

    /// The game ends on a resignation or on two passes in a row.
    pub fn is_over(&self) -> bool {
        match self.last_move {
            None | Some(Move::Play(_)) => false,
            Some(Move::Resign) => true,
            Some(Move::Pass) => {
                let second_last = self.previous_state.as_ref().and_then(|s| s.last_move);
                matches!(second_last, Some(Move::Pass))
            }
        }
    }

    /// The board after `player` plays at `point`, captures included.
    fn board_after(&self, player: Player, point: Point) -> Board {
        let mut next_board = Board::clone(&self.board);
        next_board.place_stone(player, point);
        next_board
    }

    /// Whether playing `mv` leaves `player`'s new group without liberties.
    ///
    /// Opposing groups captured by the move are removed first, so a move
    /// that captures is never self-capture. Panics if the target point is
    /// occupied or off the board.
    pub fn is_move_self_capture(&self, player: Player, mv: Move) -> bool {
        let Move::Play(point) = mv else {
            return false;
        };
        is_self_capture_on(&self.board_after(player, point), point)
    }

    /// Whether playing `mv` recreates an earlier position with the same
    /// player to move (positional superko), compared by board hash.
    ///
    /// Panics if the target point is occupied or off the board.
    pub fn does_move_violate_ko(&self, player: Player, mv: Move) -> bool {
        let Move::Play(point) = mv else {
            return false;
        };
        self.repeats_position(player, &self.board_after(player, point))
    }

    /// Exact variant of [`GameState::does_move_violate_ko`]: compares full
    /// boards along the whole history instead of trusting the hash.
    pub fn does_move_violate_ko_exact(&self, player: Player, mv: Move) -> bool {
        let Move::Play(point) = mv else {
            return false;
        };
        let next_board = self.board_after(player, point);
        let next_player = player.other();

        let mut past = self.previous_state.as_deref();
        while let Some(state) = past {
            if state.next_player == next_player && *state.board == next_board {
                return true;
            }
            past = state.previous_state.as_deref();
        }
        false
    }

    fn repeats_position(&self, player: Player, next_board: &Board) -> bool {
        let situation = (player.other(), next_board.zobrist_hash());
        let repeated = self.previous_positions.contains(&situation);
        if repeated {
            trace!(
                "superko: {player} move would repeat position {:#018x}",
                situation.1
            );
        }
        repeated
    }

    /// Check whether `mv` is legal for the player to move, with the reason
    /// if it isn't.
    pub fn check_move(&self, mv: Move) -> Result<(), IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameOver);
        }
        let Move::Play(point) = mv else {
            return Ok(());
        };
        if !self.board.is_on_grid(point) {
            return Err(IllegalMove::OffGrid);
        }
        if self.board.get(point).is_some() {
            return Err(IllegalMove::Occupied);
        }

        let next_board = self.board_after(self.next_player, point);
        if is_self_capture_on(&next_board, point) {
            return Err(IllegalMove::SelfCapture);
        }
        if self.repeats_position(self.next_player, &next_board) {
            return Err(IllegalMove::Ko);
        }
        Ok(())
    }

    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Every legal move for the player to move, plays first, then pass and
    /// resign. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        let mut moves: Vec<Move> = self
            .board
            .points()
            .map(Move::Play)
            .filter(|&mv| self.is_valid_move(mv))
            .collect();
        moves.push(Move::Pass);
        moves.push(Move::Resign);
        moves
    }
}

fn is_self_capture_on(board: &Board, point: Point) -> bool {
    board
        .get_group(point)
        .is_none_or(|group| group.num_liberties() == 0)
}

// Summarizes instead of following `previous_state`, which would walk the
// whole history.
impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("move_number", &self.move_number)
            .field("next_player", &self.next_player)
            .field("last_move", &self.last_move)
            .field("hash", &format_args!("{:#018x}", self.board.zobrist_hash()))
            .field("previous_positions", &self.previous_positions.len())
            .finish()
    }
}

impl Drop for GameState {
    // Unlink the history iteratively; the default drop recurses once per move.
    fn drop(&mut self) {
        let mut previous = self.previous_state.take();
        while let Some(state) = previous {
            match Rc::try_unwrap(state) {
                Ok(mut state) => previous = state.previous_state.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(s: &str) -> Point {
        Point::from_coords(s).unwrap()
    }

    #[test]
    fn test_move_constructors() {
        let play = Move::play(pt("C3"));
        assert!(play.is_play() && !play.is_pass() && !play.is_resign());
        assert_eq!(play.point(), Some(pt("C3")));

        let pass = Move::pass_turn();
        assert!(pass.is_pass() && !pass.is_play() && !pass.is_resign());
        assert_eq!(pass.point(), None);

        let resign = Move::resign();
        assert!(resign.is_resign() && !resign.is_play() && !resign.is_pass());
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::play(pt("Q16")).to_string(), "Q16");
        assert_eq!(Move::pass_turn().to_string(), "pass");
        assert_eq!(Move::resign().to_string(), "resign");
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new_square(9);
        assert_eq!(game.next_player(), Player::Black);
        assert!(game.previous_state().is_none());
        assert!(game.last_move().is_none());
        assert!(game.previous_positions().is_empty());
        assert!(!game.is_over());
        assert_eq!(game.board().num_rows(), 9);
        assert_eq!(game.board().num_cols(), 9);

        let (player, board) = game.situation();
        assert_eq!(player, Player::Black);
        assert_eq!(board, &Board::new(9, 9));
    }

    #[test]
    fn test_apply_play_leaves_predecessor_untouched() {
        let game = GameState::new_square(9);
        let next = game.apply_move(Move::play(pt("C3")));

        assert_eq!(game.board().get(pt("C3")), None);
        assert_eq!(next.board().get(pt("C3")), Some(Player::Black));
        assert_eq!(next.next_player(), Player::White);
        assert_eq!(next.move_number(), 1);
        assert!(Rc::ptr_eq(next.previous_state().unwrap(), &game));
        assert!(
            next.previous_positions()
                .contains(&(Player::Black, game.board().zobrist_hash()))
        );

        let (player, board) = next.situation();
        assert_eq!(player, Player::White);
        assert_eq!(board.get(pt("C3")), Some(Player::Black));
        assert_ne!(board, game.situation().1);
    }

    #[test]
    fn test_pass_shares_board() {
        let game = GameState::new_square(9).apply_move(Move::play(pt("C3")));
        let next = game.apply_move(Move::pass_turn());
        assert!(Rc::ptr_eq(&game.board, &next.board));
        assert_eq!(next.next_player(), Player::Black);
    }

    #[test]
    fn test_is_over() {
        let game = GameState::new_square(9);
        let one_pass = game.apply_move(Move::pass_turn());
        assert!(!one_pass.is_over());
        let two_passes = one_pass.apply_move(Move::pass_turn());
        assert!(two_passes.is_over());

        let resigned = game.apply_move(Move::resign());
        assert!(resigned.is_over());

        let interrupted = one_pass
            .apply_move(Move::play(pt("C3")))
            .apply_move(Move::pass_turn());
        assert!(!interrupted.is_over());
    }

    #[test]
    fn test_check_move_reasons() {
        let game = GameState::new_square(9).apply_move(Move::play(pt("C3")));
        assert_eq!(game.check_move(Move::play(pt("C3"))), Err(IllegalMove::Occupied));
        assert_eq!(
            game.check_move(Move::play(Point::new(10, 3))),
            Err(IllegalMove::OffGrid)
        );
        assert_eq!(game.check_move(Move::play(pt("D3"))), Ok(()));
        assert_eq!(game.check_move(Move::pass_turn()), Ok(()));

        let over = game.apply_move(Move::resign());
        assert_eq!(over.check_move(Move::pass_turn()), Err(IllegalMove::GameOver));
        assert!(!over.is_valid_move(Move::play(pt("D3"))));
        assert!(over.legal_moves().is_empty());
    }

    #[test]
    fn test_legal_moves_on_empty_board() {
        let game = GameState::new_square(3);
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 9 + 2);
        assert!(moves.contains(&Move::pass_turn()));
        assert!(moves.contains(&Move::resign()));
    }

    #[test]
    fn test_illegal_move_display() {
        assert_eq!(
            IllegalMove::Occupied.to_string(),
            "illegal move: point not empty"
        );
        assert_eq!(IllegalMove::SelfCapture.to_string(), "illegal move: self-capture");
    }

    #[test]
    fn test_long_history_drops_without_overflow() {
        let mut game = GameState::new_square(9);
        for _ in 0..100_000 {
            // apply_move doesn't check is_over, so passes can pile up
            game = game.apply_move(Move::pass_turn());
        }
        assert_eq!(game.move_number(), 100_000);
        drop(game);
    }

    #[test]
    fn test_debug_summarizes_long_history() {
        let mut game = GameState::new_square(9).apply_move(Move::play(pt("C3")));
        for _ in 0..5_000 {
            game = game.apply_move(Move::pass_turn());
        }
        let text = format!("{game:?}");
        assert!(text.starts_with("GameState {"));
        assert!(text.contains("move_number: 5001"));
        assert!(text.contains("last_move: Some(Pass)"));
        assert!(text.contains(&format!("{:#018x}", game.board().zobrist_hash())));
        // one entry per distinct (player, hash) seen: the empty board and C3
        assert!(text.contains("previous_positions: 3"));
        assert!(text.len() < 300, "debug output too long: {} bytes", text.len());
    }
}

//! # Tic-Tac-Toe Game Implementation
//!
//! This module implements Tic-Tac-Toe on a configurable N×N board.
//! Players take turns placing their symbol on empty cells, trying to get
//! N in a row (a full row, a full column, or one of the two main diagonals).
//!
//! ## Rules
//! - X always moves first on an empty board
//! - Coordinates are 1-indexed (row, column) pairs
//! - First player to own a complete line wins
//! - Game is a draw if the board fills up with no winner

use crate::GameState;
use std::fmt;
use std::str::FromStr;

/// The mark a player places in a cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Returns the opposing symbol.
    pub fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

/// The value of a single board cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Taken(Symbol),
}

/// Current game status, recomputed from the board after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is still in progress
    InProgress,
    /// Game ended with a winner
    Win(Symbol),
    /// Game ended in a draw
    Draw,
}

impl GameStatus {
    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Errors produced while parsing or applying a move.
///
/// All variants are recoverable at the command-loop level: the board is left
/// unchanged and the player is re-prompted. `WinDetected` is different in
/// kind — it signals that a start position already contains a winning line,
/// so no playable game can be constructed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    /// Move text did not split into exactly two tokens
    InvalidCoordinateFormat,
    /// A coordinate token is not a valid integer
    NonNumericCoordinate,
    /// A coordinate is outside [1, dimension]
    CoordinateOutOfRange { dimension: usize },
    /// The target cell already holds a symbol
    CellOccupied,
    /// A start position already completes a line for this symbol
    WinDetected(Symbol),
}

impl fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicTacToeError::InvalidCoordinateFormat | TicTacToeError::NonNumericCoordinate => {
                write!(f, "You should enter numbers!")
            }
            TicTacToeError::CoordinateOutOfRange { dimension } => {
                write!(f, "Coordinates should be from 1 to {}!", dimension)
            }
            TicTacToeError::CellOccupied => {
                write!(f, "This cell is occupied! Choose another one!")
            }
            TicTacToeError::WinDetected(winner) => write!(f, "{} wins", winner),
        }
    }
}

impl std::error::Error for TicTacToeError {}

/// Represents a move in Tic-Tac-Toe
///
/// Contains the 1-indexed (row, column) coordinates of the target cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TicTacToeMove(pub usize, pub usize);

impl FromStr for TicTacToeMove {
    type Err = TicTacToeError;

    /// Parses a move from text of the form `"<row> <col>"`.
    ///
    /// Fails with `InvalidCoordinateFormat` unless the text splits into
    /// exactly two whitespace-separated tokens, and with
    /// `NonNumericCoordinate` when a token is not an integer. Range checking
    /// happens later, against a concrete board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(TicTacToeError::InvalidCoordinateFormat);
        }
        let r = parts[0]
            .parse::<usize>()
            .map_err(|_| TicTacToeError::NonNumericCoordinate)?;
        let c = parts[1]
            .parse::<usize>()
            .map_err(|_| TicTacToeError::NonNumericCoordinate)?;
        Ok(TicTacToeMove(r, c))
    }
}

/// Represents the complete state of a Tic-Tac-Toe game
///
/// The board is a flat vector in row-major order; cell (row, col) with
/// 1-indexed coordinates lives at `(row - 1) * dimension + (col - 1)`.
/// Every game owns its board — construction always allocates a fresh one.
#[derive(Debug, Clone)]
pub struct TicTacToeState {
    /// The game board as a flat vector (row-major)
    board: Vec<Cell>,
    /// Board dimension (number of rows and columns)
    dimension: usize,
}

impl TicTacToeState {
    /// Creates a new empty game on an N×N board.
    pub fn new(dimension: usize) -> Self {
        Self {
            board: vec![Cell::Empty; dimension * dimension],
            dimension,
        }
    }

    /// Creates a game pre-filled from a serialized start position.
    ///
    /// The string is read row-major, case-insensitively: `X`/`O` place that
    /// symbol, any other character leaves the cell empty. Returns
    /// `Err(WinDetected)` when the resulting position already holds a
    /// winning line — such a position is not playable.
    pub fn from_position(dimension: usize, start_position: &str) -> Result<Self, TicTacToeError> {
        let mut state = Self::new(dimension);
        for (index, symbol) in start_position.chars().enumerate() {
            if index >= state.board.len() {
                break;
            }
            match symbol.to_ascii_uppercase() {
                'X' => state.board[index] = Cell::Taken(Symbol::X),
                'O' => state.board[index] = Cell::Taken(Symbol::O),
                _ => {}
            }
        }
        if let Some(winner) = state.winner() {
            return Err(TicTacToeError::WinDetected(winner));
        }
        Ok(state)
    }

    /// Gets the board dimension (3 for a classic game).
    pub fn get_dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the value at 1-indexed (row, col).
    ///
    /// # Panics
    /// Panics when either coordinate is outside [1, dimension]; callers are
    /// expected to validate through [`apply_move`](Self::apply_move).
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board[(row - 1) * self.dimension + (col - 1)]
    }

    /// Counts the cells holding `symbol`.
    fn count(&self, symbol: Symbol) -> usize {
        self.board
            .iter()
            .filter(|&&c| c == Cell::Taken(symbol))
            .count()
    }

    /// Counts the empty cells.
    pub fn empty_cells(&self) -> usize {
        self.board.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Returns the symbol whose move is next.
    ///
    /// X moves whenever it has no more marks on the board than O, so X opens
    /// a fresh game and the turn alternates strictly from there.
    pub fn turn_to_move(&self) -> Symbol {
        if self.count(Symbol::X) <= self.count(Symbol::O) {
            Symbol::X
        } else {
            Symbol::O
        }
    }

    /// Checks if a move is legal in the current game state
    ///
    /// A move is legal if both coordinates are within [1, dimension] and the
    /// target cell is empty.
    pub fn is_legal(&self, mv: &TicTacToeMove) -> bool {
        self.in_range(mv) && self.cell(mv.0, mv.1) == Cell::Empty
    }

    fn in_range(&self, mv: &TicTacToeMove) -> bool {
        (1..=self.dimension).contains(&mv.0) && (1..=self.dimension).contains(&mv.1)
    }

    /// Applies a validated move for `symbol`, or for the symbol whose turn it
    /// is when `symbol` is `None`.
    ///
    /// On success the cell is mutated and the freshly recomputed
    /// [`GameStatus`] is returned; on failure the board is unchanged.
    pub fn apply_move(
        &mut self,
        mv: &TicTacToeMove,
        symbol: Option<Symbol>,
    ) -> Result<GameStatus, TicTacToeError> {
        if !self.in_range(mv) {
            return Err(TicTacToeError::CoordinateOutOfRange {
                dimension: self.dimension,
            });
        }
        if self.cell(mv.0, mv.1) != Cell::Empty {
            return Err(TicTacToeError::CellOccupied);
        }
        let symbol = symbol.unwrap_or_else(|| self.turn_to_move());
        self.board[(mv.0 - 1) * self.dimension + (mv.1 - 1)] = Cell::Taken(symbol);
        Ok(self.evaluate())
    }

    /// Parses move text and applies it in one step.
    pub fn apply_move_text(
        &mut self,
        move_text: &str,
        symbol: Option<Symbol>,
    ) -> Result<GameStatus, TicTacToeError> {
        let mv = TicTacToeMove::from_str(move_text)?;
        self.apply_move(&mv, symbol)
    }

    /// Recomputes the game status from the board.
    ///
    /// The status is derived state: it is never stored, so it can not drift
    /// out of sync with the authoritative board data.
    pub fn evaluate(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            return GameStatus::Win(winner);
        }
        if self.empty_cells() == 0 {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    /// Scans for a completed line and returns its owner.
    ///
    /// Checks exactly N row lines, N column lines, the main diagonal (i, i)
    /// and the anti-diagonal (i, N - i + 1), for any board dimension N. A
    /// line is owned by one player only, so at most one winner can exist.
    pub fn winner(&self) -> Option<Symbol> {
        let n = self.dimension;

        let line_owner = |cells: &mut dyn Iterator<Item = Cell>| -> Option<Symbol> {
            let mut owner = None;
            for cell in cells {
                match (cell, owner) {
                    (Cell::Empty, _) => return None,
                    (Cell::Taken(s), None) => owner = Some(s),
                    (Cell::Taken(s), Some(o)) if s != o => return None,
                    _ => {}
                }
            }
            owner
        };

        for r in 1..=n {
            if let Some(s) = line_owner(&mut (1..=n).map(|c| self.cell(r, c))) {
                return Some(s);
            }
        }
        for c in 1..=n {
            if let Some(s) = line_owner(&mut (1..=n).map(|r| self.cell(r, c))) {
                return Some(s);
            }
        }
        if let Some(s) = line_owner(&mut (1..=n).map(|i| self.cell(i, i))) {
            return Some(s);
        }
        if let Some(s) = line_owner(&mut (1..=n).map(|i| self.cell(i, n - i + 1))) {
            return Some(s);
        }
        None
    }
}

impl fmt::Display for TicTacToeState {
    /// Renders the board as a bordered grid:
    ///
    /// ```text
    /// ---------
    /// | X     |
    /// |   O   |
    /// |     X |
    /// ---------
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.dimension * 2 + 3);
        writeln!(f, "{}", border)?;
        for r in 1..=self.dimension {
            write!(f, "|")?;
            for c in 1..=self.dimension {
                match self.cell(r, c) {
                    Cell::Empty => write!(f, "  ")?,
                    Cell::Taken(s) => write!(f, " {}", s)?,
                }
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "{}", border)
    }
}

impl GameState for TicTacToeState {
    type Move = TicTacToeMove;
    type Player = Symbol;

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        (1..=self.dimension)
            .flat_map(|r| (1..=self.dimension).map(move |c| TicTacToeMove(r, c)))
            .filter(|mv| self.cell(mv.0, mv.1) == Cell::Empty)
            .collect()
    }

    fn make_move(&mut self, mv: &Self::Move) {
        let symbol = self.turn_to_move();
        self.board[(mv.0 - 1) * self.dimension + (mv.1 - 1)] = Cell::Taken(symbol);
    }

    fn is_terminal(&self) -> bool {
        self.evaluate().is_game_over()
    }

    fn get_winner(&self) -> Option<Symbol> {
        self.winner()
    }

    fn get_current_player(&self) -> Symbol {
        self.turn_to_move()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = TicTacToeState::new(3);
        assert_eq!(game.get_dimension(), 3);
        assert_eq!(game.empty_cells(), 9);
        assert_eq!(game.turn_to_move(), Symbol::X);
        assert_eq!(game.evaluate(), GameStatus::InProgress);
    }

    #[test]
    fn test_fresh_board_any_dimension() {
        for n in [3, 4, 5, 7] {
            let game = TicTacToeState::new(n);
            assert_eq!(game.empty_cells(), n * n);
            assert_eq!(game.get_possible_moves().len(), n * n);
            assert_eq!(game.evaluate(), GameStatus::InProgress);
        }
    }

    #[test]
    fn test_turn_alternation() {
        let mut game = TicTacToeState::new(3);
        let moves = ["1 1", "1 2", "2 2", "1 3", "3 1"];
        for (k, text) in moves.iter().enumerate() {
            let expected = if k % 2 == 0 { Symbol::X } else { Symbol::O };
            assert_eq!(game.turn_to_move(), expected);
            game.apply_move_text(text, None).unwrap();
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            TicTacToeMove::from_str("1").unwrap_err(),
            TicTacToeError::InvalidCoordinateFormat
        );
        assert_eq!(
            TicTacToeMove::from_str("1 2 3").unwrap_err(),
            TicTacToeError::InvalidCoordinateFormat
        );
        assert_eq!(
            TicTacToeMove::from_str("a 1").unwrap_err(),
            TicTacToeError::NonNumericCoordinate
        );
        assert_eq!(
            TicTacToeMove::from_str("one two").unwrap_err(),
            TicTacToeError::NonNumericCoordinate
        );
        assert_eq!(TicTacToeMove::from_str(" 2  3 ").unwrap(), TicTacToeMove(2, 3));
    }

    #[test]
    fn test_rejected_moves_leave_board_unchanged() {
        let mut game = TicTacToeState::new(3);
        game.apply_move_text("1 1", None).unwrap();

        for text in ["0 1", "4 1", "1 0", "1 4"] {
            assert_eq!(
                game.apply_move_text(text, None).unwrap_err(),
                TicTacToeError::CoordinateOutOfRange { dimension: 3 }
            );
        }
        assert_eq!(
            game.apply_move_text("1 1", None).unwrap_err(),
            TicTacToeError::CellOccupied
        );
        assert_eq!(game.empty_cells(), 8);
        assert_eq!(game.turn_to_move(), Symbol::O);
    }

    #[test]
    fn test_row_win() {
        let mut game = TicTacToeState::new(3);
        game.apply_move_text("1 1", Some(Symbol::X)).unwrap();
        game.apply_move_text("1 2", Some(Symbol::X)).unwrap();
        let status = game.apply_move_text("1 3", Some(Symbol::X)).unwrap();
        assert_eq!(status, GameStatus::Win(Symbol::X));
        assert!(game.is_terminal());
    }

    #[test]
    fn test_column_and_diagonal_wins_all_dimensions() {
        for n in [3, 5] {
            // every column
            for c in 1..=n {
                let mut game = TicTacToeState::new(n);
                for r in 1..n {
                    let status = game.apply_move(&TicTacToeMove(r, c), Some(Symbol::O)).unwrap();
                    assert_eq!(status, GameStatus::InProgress);
                }
                let status = game.apply_move(&TicTacToeMove(n, c), Some(Symbol::O)).unwrap();
                assert_eq!(status, GameStatus::Win(Symbol::O));
            }
            // every row
            for r in 1..=n {
                let mut game = TicTacToeState::new(n);
                for c in 1..n {
                    game.apply_move(&TicTacToeMove(r, c), Some(Symbol::X)).unwrap();
                }
                let status = game.apply_move(&TicTacToeMove(r, n), Some(Symbol::X)).unwrap();
                assert_eq!(status, GameStatus::Win(Symbol::X));
            }
            // main diagonal
            let mut game = TicTacToeState::new(n);
            for i in 1..n {
                game.apply_move(&TicTacToeMove(i, i), Some(Symbol::X)).unwrap();
            }
            let status = game.apply_move(&TicTacToeMove(n, n), Some(Symbol::X)).unwrap();
            assert_eq!(status, GameStatus::Win(Symbol::X));
            // anti-diagonal: cells (i, n - i + 1)
            let mut game = TicTacToeState::new(n);
            for i in 1..n {
                game.apply_move(&TicTacToeMove(i, n - i + 1), Some(Symbol::O)).unwrap();
            }
            let status = game.apply_move(&TicTacToeMove(n, 1), Some(Symbol::O)).unwrap();
            assert_eq!(status, GameStatus::Win(Symbol::O));
        }
    }

    #[test]
    fn test_draw_on_full_board_without_line() {
        // X O X
        // X O O
        // O X X
        let game = TicTacToeState::from_position(3, "XOXXOOOXX").unwrap();
        assert_eq!(game.evaluate(), GameStatus::Draw);
        assert_eq!(game.empty_cells(), 0);
    }

    #[test]
    fn test_start_position_overlay() {
        let game = TicTacToeState::from_position(3, "X O______").unwrap();
        assert_eq!(game.cell(1, 1), Cell::Taken(Symbol::X));
        assert_eq!(game.cell(1, 2), Cell::Empty);
        assert_eq!(game.cell(1, 3), Cell::Taken(Symbol::O));
        assert_eq!(game.empty_cells(), 7);
        // lowercase symbols are accepted
        let game = TicTacToeState::from_position(3, "x_o______").unwrap();
        assert_eq!(game.cell(1, 1), Cell::Taken(Symbol::X));
        assert_eq!(game.cell(1, 3), Cell::Taken(Symbol::O));
    }

    #[test]
    fn test_start_position_with_win_is_rejected() {
        let err = TicTacToeState::from_position(3, "XXX_OO___").unwrap_err();
        assert_eq!(err, TicTacToeError::WinDetected(Symbol::X));
        assert_eq!(err.to_string(), "X wins");
    }

    #[test]
    fn test_diagonal_scenario_from_start_position() {
        let mut game = TicTacToeState::from_position(3, "X O______").unwrap();
        let status = game.apply_move_text("2 2", Some(Symbol::X)).unwrap();
        assert_eq!(status, GameStatus::InProgress);
        let status = game.apply_move_text("3 3", Some(Symbol::X)).unwrap();
        assert_eq!(status, GameStatus::Win(Symbol::X));
    }

    #[test]
    fn test_render() {
        let mut game = TicTacToeState::new(3);
        game.apply_move_text("1 1", Some(Symbol::X)).unwrap();
        game.apply_move_text("2 2", Some(Symbol::O)).unwrap();
        let expected = "\
---------
| X     |
|   O   |
|       |
---------
";
        assert_eq!(game.to_string(), expected);
    }

    #[test]
    fn test_render_round_trip() {
        let game = TicTacToeState::new(5);
        let rendered = game.to_string();
        // Rendering twice proves it is a pure function of the board.
        assert_eq!(rendered, game.to_string());

        // Parse the grid back: take the cell columns of each board row.
        let mut position = String::new();
        for line in rendered.lines().filter(|l| l.starts_with('|')) {
            let cells: Vec<char> = line.chars().collect();
            for c in 0..game.get_dimension() {
                position.push(cells[2 + 2 * c]);
            }
        }
        let reparsed = TicTacToeState::from_position(5, &position).unwrap();
        assert_eq!(reparsed.empty_cells(), 25);
    }
}

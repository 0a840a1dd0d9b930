//! # Game Controller Module - Central Game State Management
//!
//! This module provides the `GameController` which serves as the single source
//! of truth for the authoritative game state. All moves go through the
//! controller, which validates them before application and records them in a
//! timestamped move history.
//!
//! The game status is always derived from the board by [`TicTacToeState::evaluate`],
//! never cached next to it, so it cannot drift out of sync with the cells.

use crate::games::tictactoe::{GameStatus, Symbol, TicTacToeError, TicTacToeMove, TicTacToeState};
use crate::RandomBot;
use std::str::FromStr;
use std::time::SystemTime;

/// Result of attempting to apply a move
#[derive(Debug, Clone)]
pub enum MoveResult {
    /// Move was successfully applied
    Success {
        /// The applied move
        move_made: TicTacToeMove,
        /// Symbol that was placed
        player: Symbol,
        /// Game status after the move
        status: GameStatus,
    },
    /// Move was rejected as invalid; the board is unchanged
    Invalid {
        /// Reason the move was rejected
        reason: TicTacToeError,
    },
    /// Game is already over, no more moves allowed
    GameOver,
}

/// A single entry in the move history
#[derive(Debug, Clone)]
pub struct MoveHistoryEntry {
    /// When the move was made
    pub timestamp: SystemTime,
    /// Symbol that was placed
    pub player: Symbol,
    /// The move that was made
    pub move_made: TicTacToeMove,
    /// Move number (1-indexed)
    pub move_number: usize,
}

impl MoveHistoryEntry {
    /// Create a new move history entry
    pub fn new(player: Symbol, move_made: TicTacToeMove, move_number: usize) -> Self {
        Self {
            timestamp: SystemTime::now(),
            player,
            move_made,
            move_number,
        }
    }
}

/// The central game controller that owns the authoritative game state
///
/// # Usage
/// ```rust,ignore
/// let mut controller = GameController::new(TicTacToeState::new(3));
///
/// match controller.try_human_move("1 1", None) {
///     MoveResult::Success { status, .. } => { /* move was applied */ }
///     MoveResult::Invalid { reason } => { /* print reason, re-prompt */ }
///     MoveResult::GameOver => { /* no more moves accepted */ }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GameController {
    /// The authoritative game state
    game_state: TicTacToeState,
    /// Complete history of moves made
    move_history: Vec<MoveHistoryEntry>,
}

impl GameController {
    /// Create a new game controller with the given initial state
    pub fn new(initial_state: TicTacToeState) -> Self {
        Self {
            game_state: initial_state,
            move_history: Vec::new(),
        }
    }

    /// The current game status, derived from the board
    pub fn status(&self) -> GameStatus {
        self.game_state.evaluate()
    }

    /// The authoritative game state, for rendering
    pub fn state(&self) -> &TicTacToeState {
        &self.game_state
    }

    /// History of all moves made so far
    pub fn move_history(&self) -> &[MoveHistoryEntry] {
        &self.move_history
    }

    /// The symbol whose move is next
    pub fn turn_to_move(&self) -> Symbol {
        self.game_state.turn_to_move()
    }

    /// Attempt to apply a human move given as coordinate text
    ///
    /// Parses, validates and applies the move. On any error the board is
    /// unchanged and the reason is returned for display. When `symbol` is
    /// `None` the mark of the player whose turn it is gets placed.
    pub fn try_human_move(&mut self, move_text: &str, symbol: Option<Symbol>) -> MoveResult {
        if self.status().is_game_over() {
            return MoveResult::GameOver;
        }

        let mv = match TicTacToeMove::from_str(move_text) {
            Ok(mv) => mv,
            Err(reason) => return MoveResult::Invalid { reason },
        };
        let player = symbol.unwrap_or_else(|| self.game_state.turn_to_move());
        match self.game_state.apply_move(&mv, Some(player)) {
            Ok(status) => {
                self.record(player, mv);
                MoveResult::Success {
                    move_made: mv,
                    player,
                    status,
                }
            }
            Err(reason) => MoveResult::Invalid { reason },
        }
    }

    /// Attempt to apply a uniformly random move for `symbol`
    ///
    /// Returns `MoveResult::GameOver` without touching the board when the
    /// game has already ended. An in-progress game always has at least one
    /// empty cell, so a move is always found.
    pub fn try_random_move(&mut self, symbol: Symbol) -> MoveResult {
        if self.status().is_game_over() {
            return MoveResult::GameOver;
        }

        let mv = match RandomBot::choose_move(&self.game_state) {
            Some(mv) => mv,
            None => return MoveResult::GameOver,
        };
        match self.game_state.apply_move(&mv, Some(symbol)) {
            Ok(status) => {
                self.record(symbol, mv);
                MoveResult::Success {
                    move_made: mv,
                    player: symbol,
                    status,
                }
            }
            Err(reason) => MoveResult::Invalid { reason },
        }
    }

    fn record(&mut self, player: Symbol, move_made: TicTacToeMove) {
        let move_number = self.move_history.len() + 1;
        self.move_history
            .push(MoveHistoryEntry::new(player, move_made, move_number));
    }
}

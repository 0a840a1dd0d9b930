//! # Console Tic-Tac-Toe Arena
//!
//! Library crate for a console Tic-Tac-Toe arena. It provides the game state
//! engine (board representation, move validation, win/draw detection, turn
//! alternation) together with a random-move AI opponent.
//!
//! ## Structure
//! - [`GameState`]: the generic trait a game implements for move-selection engines
//! - [`RandomBot`]: an engine that picks uniformly among the legal moves
//! - [`games::tictactoe`]: the Tic-Tac-Toe board engine itself
//! - [`game_controller`]: the authoritative game state owner used by the CLI

pub mod game_controller;
pub mod games;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// The state of a turn-based board game, as seen by a move-selection engine.
pub trait GameState: Clone {
    /// The type of a move in the game.
    type Move: Clone + Eq + std::hash::Hash + std::fmt::Debug;
    /// The type identifying a player (a mark, a color, a seat number).
    type Player: Copy + Eq + std::fmt::Debug;

    /// Returns a vector of all possible moves from the current state.
    fn get_possible_moves(&self) -> Vec<Self::Move>;
    /// Applies a move to the state, modifying it.
    fn make_move(&mut self, mv: &Self::Move);
    /// Returns true if the game is over.
    fn is_terminal(&self) -> bool;
    /// Returns the winner of the game, if any.
    /// Should return `Some(player)` if a player has won, `None` for a draw or if the game is not over.
    fn get_winner(&self) -> Option<Self::Player>;
    /// Returns the player whose turn it is to move.
    fn get_current_player(&self) -> Self::Player;
}

/// A move-selection engine that picks uniformly at random among the legal moves.
///
/// Every call draws a freshly entropy-seeded generator, so move sequences are
/// not correlated across games or across repeated calls within a game.
pub struct RandomBot;

impl RandomBot {
    /// Picks a move uniformly at random from the possible moves of `state`.
    ///
    /// Returns `None` when the state has no moves left (terminal or full board).
    pub fn choose_move<S: GameState>(state: &S) -> Option<S::Move> {
        let moves = state.get_possible_moves();
        if moves.is_empty() {
            return None;
        }
        let mut rng = Xoshiro256PlusPlus::from_entropy();
        let idx = rng.gen_range(0..moves.len());
        Some(moves[idx].clone())
    }
}

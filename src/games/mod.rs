//! # Game Implementations Module
//!
//! This module contains the games playable in the arena. Each game implements
//! the `GameState` trait to provide a consistent interface for move-selection
//! engines and the command loop.
//!
//! ## Supported Games
//! - **Tic-Tac-Toe**: configurable N-in-a-row game on an N×N board
//!
//! ## Game Trait Implementation
//! A game provides:
//! - Move generation and validation
//! - State transitions and game rules
//! - Terminal state detection and winner determination
//! - Board rendering and current player tracking

pub mod tictactoe;
